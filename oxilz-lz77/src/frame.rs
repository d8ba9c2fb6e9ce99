//! Framed container adding length and checksum to the raw stream.
//!
//! The raw token stream carries no header, so a damaged file can decode to
//! garbage without any error. The framed variant prepends a fixed header and
//! checks both the decoded length and a CRC-32 of the decoded bytes. The raw
//! format is unchanged; framing is opt-in on both sides.
//!
//! ```text
//! offset  size  field
//!      0     4  magic "OXLZ"
//!      4     1  format version (1)
//!      5     2  window size used by the encoder (u16 LE)
//!      7     8  original length (u64 LE)
//!     15     4  CRC-32 of the original data (u32 LE)
//!     19     -  raw token stream
//! ```

use crate::config::{LOOKAHEAD_LENGTH, Lz77Config};
use crate::decoder::Lz77Decoder;
use crate::encoder::Lz77Encoder;
use crate::error::{Lz77Error, Result};
use crate::token::MATCH_BITS;
use oxilz_core::Crc32;

/// Frame magic bytes.
pub const FRAME_MAGIC: [u8; 4] = *b"OXLZ";

/// Current frame format version.
pub const FRAME_VERSION: u8 = 1;

/// Size of the frame header in bytes.
pub const FRAME_HEADER_SIZE: usize = 19;

/// Parsed frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Format version.
    pub version: u8,
    /// Window size the encoder used. Informational only.
    pub window_size: u16,
    /// Length of the original data.
    pub original_len: u64,
    /// CRC-32 of the original data.
    pub crc32: u32,
}

impl FrameHeader {
    /// Build the header describing `data` compressed with `config`.
    pub fn for_data(data: &[u8], config: &Lz77Config) -> Self {
        Self {
            version: FRAME_VERSION,
            window_size: config.window_size() as u16,
            original_len: data.len() as u64,
            crc32: Crc32::compute(data),
        }
    }

    /// Serialize the header.
    pub fn to_bytes(&self) -> [u8; FRAME_HEADER_SIZE] {
        let mut out = [0u8; FRAME_HEADER_SIZE];
        out[0..4].copy_from_slice(&FRAME_MAGIC);
        out[4] = self.version;
        out[5..7].copy_from_slice(&self.window_size.to_le_bytes());
        out[7..15].copy_from_slice(&self.original_len.to_le_bytes());
        out[15..19].copy_from_slice(&self.crc32.to_le_bytes());
        out
    }

    /// Parse a header from the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < FRAME_HEADER_SIZE {
            return Err(Lz77Error::FrameTooShort {
                needed: FRAME_HEADER_SIZE,
                available: data.len(),
            });
        }

        if data[0..4] != FRAME_MAGIC {
            return Err(Lz77Error::InvalidMagic {
                expected: FRAME_MAGIC,
                found: data[0..4].to_vec(),
            });
        }

        let version = data[4];
        if version != FRAME_VERSION {
            return Err(Lz77Error::UnsupportedVersion(version));
        }

        Ok(Self {
            version,
            window_size: u16::from_le_bytes([data[5], data[6]]),
            original_len: u64::from_le_bytes([
                data[7], data[8], data[9], data[10], data[11], data[12], data[13], data[14],
            ]),
            crc32: u32::from_le_bytes([data[15], data[16], data[17], data[18]]),
        })
    }

    /// Prepend this header to an encoded body.
    pub fn wrap(&self, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(FRAME_HEADER_SIZE + body.len());
        out.extend_from_slice(&self.to_bytes());
        out.extend_from_slice(body);
        out
    }

    /// Check decoded data against the header.
    pub fn verify(&self, decoded: &[u8]) -> Result<()> {
        let actual = decoded.len() as u64;
        if actual != self.original_len {
            return Err(Lz77Error::LengthMismatch {
                expected: self.original_len,
                actual,
            });
        }

        let computed = Crc32::compute(decoded);
        if computed != self.crc32 {
            return Err(Lz77Error::CrcMismatch {
                expected: self.crc32,
                computed,
            });
        }

        Ok(())
    }
}

/// Compress `data` and wrap it in a frame.
pub fn compress_framed(data: &[u8], config: &Lz77Config) -> Result<Vec<u8>> {
    let body = Lz77Encoder::new(*config).encode(data)?;
    Ok(FrameHeader::for_data(data, config).wrap(&body))
}

/// Decompress a framed stream, verifying length and CRC-32.
pub fn decompress_framed(data: &[u8]) -> Result<Vec<u8>> {
    let header = FrameHeader::parse(data)?;
    let body = &data[FRAME_HEADER_SIZE..];

    // The header is untrusted until verified, so never reserve more than the
    // body could expand to.
    let capacity = header.original_len.min(max_decoded_len(body.len()));
    let capacity = usize::try_from(capacity).unwrap_or(0);

    let decoded = Lz77Decoder::with_capacity(capacity).decode(body)?;
    header.verify(&decoded)?;
    Ok(decoded)
}

/// Upper bound on the bytes a raw stream of `body_len` bytes can decode to.
fn max_decoded_len(body_len: usize) -> u64 {
    let bits = body_len as u64 * 8;
    (bits / MATCH_BITS + 1) * LOOKAHEAD_LENGTH as u64
}
