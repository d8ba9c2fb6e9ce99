//! Compress command implementation.

use crate::utils::{compressed_path, create_progress_bar, format_savings, savings_percent};
use oxilz_lz77::{CompressOptions, compress_file_with_progress};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn cmd_compress(
    input: &Path,
    output: Option<PathBuf>,
    window_size: usize,
    framed: bool,
    progress: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| compressed_path(input));

    debug!(
        input = %input.display(),
        output = %output.display(),
        window_size,
        framed,
        "compressing"
    );

    // The window is validated inside the library before any file is opened.
    let options = CompressOptions {
        window_size,
        framed,
    };

    let input_len = std::fs::metadata(input).map(|m| m.len()).unwrap_or(0);
    let pb = create_progress_bar(input_len, progress);
    let report = compress_file_with_progress(input, &output, &options, |done, total| {
        pb.set_length(total);
        pb.set_position(done);
    })?;
    pb.finish_and_clear();

    if verbose {
        println!(
            "{} -> {} ({} -> {} bytes, {} saved, window {})",
            input.display(),
            output.display(),
            report.input_bytes,
            report.output_bytes,
            format_savings(savings_percent(report.input_bytes, report.output_bytes)),
            window_size
        );
    }
    println!("Compressed {} successfully", input.display());

    Ok(())
}
