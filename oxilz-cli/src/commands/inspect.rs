//! Inspect command implementation.
//!
//! Walks the token stream of a compressed file without writing anything and
//! reports how the input was tokenised.

use crate::utils::format_savings;
use oxilz_lz77::frame::FRAME_HEADER_SIZE;
use oxilz_lz77::{FrameHeader, Lz77Decoder, StreamStats, Token, TokenReader};
use serde::Serialize;
use std::path::Path;

/// Frame fields reported by `inspect --json`.
#[derive(Debug, Serialize)]
struct FrameInfo {
    version: u8,
    window_size: u16,
    original_len: u64,
    crc32: String,
    verified: bool,
}

/// Everything `inspect --json` prints.
#[derive(Debug, Serialize)]
struct InspectReport {
    file: String,
    compressed_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<FrameInfo>,
    stats: StreamStats,
    ratio: f64,
    space_savings: f64,
    average_match_length: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tokens: Vec<Token>,
}

pub fn cmd_inspect(
    input: &Path,
    framed: bool,
    tokens: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    let (header, body) = if framed {
        let header = FrameHeader::parse(&data)?;
        (Some(header), &data[FRAME_HEADER_SIZE..])
    } else {
        (None, &data[..])
    };

    let mut reader = TokenReader::new(body);
    let mut decoder = Lz77Decoder::new();
    let mut stats = StreamStats::default();
    let mut listed = Vec::new();

    while let Some(token) = reader.read_token()? {
        decoder.apply(token, reader.token_position())?;
        stats.record(&token);
        if tokens {
            listed.push(token);
        }
    }

    let frame = header.map(|header| FrameInfo {
        version: header.version,
        window_size: header.window_size,
        original_len: header.original_len,
        crc32: format!("{:08x}", header.crc32),
        verified: header.verify(decoder.output()).is_ok(),
    });

    let report = InspectReport {
        file: input.display().to_string(),
        compressed_bytes: data.len() as u64,
        frame,
        stats,
        ratio: stats.ratio(),
        space_savings: stats.space_savings(),
        average_match_length: stats.average_match_length(),
        tokens: listed,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    match report.frame {
        Some(ref frame) if !frame.verified => Err("frame check failed".into()),
        _ => Ok(()),
    }
}

fn print_report(report: &InspectReport) {
    let stats = &report.stats;

    println!("File: {}", report.file);
    println!("  Compressed size:   {} bytes", report.compressed_bytes);
    if let Some(frame) = &report.frame {
        println!("  Frame version:     {}", frame.version);
        println!("  Window size:       {}", frame.window_size);
        println!("  Original length:   {}", frame.original_len);
        println!(
            "  CRC-32:            {} ({})",
            frame.crc32,
            if frame.verified { "OK" } else { "MISMATCH" }
        );
    }
    println!("  Decoded size:      {} bytes", stats.original_bytes);
    println!("  Tokens:            {}", stats.tokens());
    println!("    Literals:        {}", stats.literals);
    println!("    Matches:         {}", stats.matches);
    println!("  Matched bytes:     {}", stats.matched_bytes);
    println!("  Longest match:     {}", stats.longest_match);
    println!("  Farthest distance: {}", stats.farthest_distance);
    println!("  Avg match length:  {:.2}", report.average_match_length);
    println!("  Ratio:             {:.3}", report.ratio);
    println!(
        "  Space savings:     {}",
        format_savings(report.space_savings)
    );

    if !report.tokens.is_empty() {
        println!();
        println!("{:>6}  Token", "#");
        println!("{}", "-".repeat(32));
        for (i, token) in report.tokens.iter().enumerate() {
            match token {
                Token::Literal(byte) => {
                    println!("{:>6}  literal {:#04x} {}", i, byte, printable(*byte))
                }
                Token::Match { distance, length } => {
                    println!("{:>6}  match   distance={} length={}", i, distance, length)
                }
            }
        }
    }
}

fn printable(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        String::new()
    }
}
