//! Test command implementation.

use oxilz_lz77::{decompress, decompress_framed};
use std::path::Path;

/// Decode a compressed file in memory and report whether it is intact.
///
/// A raw stream has no checksum, so "intact" means every token decoded and
/// every match pointed inside the output. Framed files are also checked
/// against the stored length and CRC-32.
pub fn cmd_test(
    input: &Path,
    framed: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    println!(
        "Testing {} ({})",
        input.display(),
        if framed { "framed" } else { "raw" }
    );

    let result = if framed {
        decompress_framed(&data)
    } else {
        decompress(&data)
    };

    match result {
        Ok(decoded) => {
            if verbose {
                println!("  {} -> {} bytes", data.len(), decoded.len());
            }
            println!("  OK");
            Ok(())
        }
        Err(e) => {
            println!("  FAILED: {}", e);
            Err(format!("{} failed integrity test", input.display()).into())
        }
    }
}
