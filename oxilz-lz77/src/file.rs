//! Whole-file compress and decompress operations.
//!
//! Each operation reads the input fully, runs the codec in memory and writes
//! the output in one go. Failures opening, reading or writing a file are
//! reported as [`Lz77Error::Io`] carrying the path and direction, separate
//! from configuration and decode errors.

use crate::config::{DEFAULT_WINDOW_SIZE, Lz77Config};
use crate::decoder::Lz77Decoder;
use crate::encoder::Lz77Encoder;
use crate::error::{Lz77Error, Result};
use crate::frame::{FrameHeader, decompress_framed};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Sizes involved in a completed file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    /// Bytes read from the input file.
    pub input_bytes: u64,
    /// Bytes written to the output file.
    pub output_bytes: u64,
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|e| Lz77Error::read(path, e))?;
    debug!(path = %path.display(), bytes = data.len(), "read input");
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|e| Lz77Error::write(path, e))?;
    debug!(path = %path.display(), bytes = data.len(), "wrote output");
    Ok(())
}

fn run(
    input: &Path,
    output: &Path,
    op: &str,
    codec: impl FnOnce(&[u8]) -> Result<Vec<u8>>,
) -> Result<FileReport> {
    let data = read_input(input)?;
    let result = codec(&data)?;
    write_output(output, &result)?;

    let report = FileReport {
        input_bytes: data.len() as u64,
        output_bytes: result.len() as u64,
    };
    info!(
        op,
        input = %input.display(),
        output = %output.display(),
        input_bytes = report.input_bytes,
        output_bytes = report.output_bytes,
        "file operation complete"
    );
    Ok(report)
}

/// Options for [`compress_file_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    /// Window size, validated before the input is read.
    pub window_size: usize,
    /// Wrap the stream in a checked frame.
    pub framed: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            framed: false,
        }
    }
}

/// Compress `input` into `output`, calling `on_progress(consumed, total)`
/// as the encoder advances through the input.
pub fn compress_file_with_progress<F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &CompressOptions,
    mut on_progress: F,
) -> Result<FileReport>
where
    F: FnMut(u64, u64),
{
    let config = Lz77Config::new(options.window_size)?;
    let encoder = Lz77Encoder::new(config);

    run(input.as_ref(), output.as_ref(), "compress", |data| {
        let total = data.len() as u64;
        let body = encoder.encode_with_progress(data, |pos| on_progress(pos as u64, total))?;

        if options.framed {
            Ok(FrameHeader::for_data(data, &config).wrap(&body))
        } else {
            Ok(body)
        }
    })
}

/// Compress `input` into `output` as a raw token stream.
///
/// `window_size` is validated before any file is touched.
pub fn compress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    window_size: usize,
) -> Result<FileReport> {
    let options = CompressOptions {
        window_size,
        framed: false,
    };
    compress_file_with_progress(input, output, &options, |_, _| {})
}

/// Decompress a raw token stream from `input` into `output`.
pub fn decompress_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<FileReport> {
    run(input.as_ref(), output.as_ref(), "decompress", |data| {
        Lz77Decoder::new().decode(data)
    })
}

/// Compress `input` into `output` inside a checked frame.
pub fn compress_file_framed(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    window_size: usize,
) -> Result<FileReport> {
    let options = CompressOptions {
        window_size,
        framed: true,
    };
    compress_file_with_progress(input, output, &options, |_, _| {})
}

/// Decompress a framed stream, verifying length and checksum.
pub fn decompress_file_framed(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<FileReport> {
    run(
        input.as_ref(),
        output.as_ref(),
        "decompress",
        decompress_framed,
    )
}
