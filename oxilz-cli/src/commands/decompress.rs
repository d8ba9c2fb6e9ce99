//! Decompress command implementation.

use crate::utils::decompressed_path;
use oxilz_lz77::{decompress_file, decompress_file_framed};
use std::path::{Path, PathBuf};

pub fn cmd_decompress(
    input: &Path,
    output: Option<PathBuf>,
    framed: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| decompressed_path(input));

    let report = if framed {
        decompress_file_framed(input, &output)?
    } else {
        decompress_file(input, &output)?
    };

    if verbose {
        println!(
            "{} -> {} ({} -> {} bytes)",
            input.display(),
            output.display(),
            report.input_bytes,
            report.output_bytes
        );
    }
    println!("Decompressed {} successfully", input.display());

    Ok(())
}
