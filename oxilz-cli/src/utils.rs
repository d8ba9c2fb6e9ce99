//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension given to compressed files.
pub const COMPRESSED_EXTENSION: &str = "lz77";

/// Create a byte progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Default output for compression: `<input>.lz77`.
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_owned();
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    PathBuf::from(name)
}

/// Default output for decompression: strip `.lz77`, otherwise append `.out`.
pub fn decompressed_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == COMPRESSED_EXTENSION) {
        return input.with_extension("");
    }

    let mut name: OsString = input.as_os_str().to_owned();
    name.push(".out");
    PathBuf::from(name)
}

/// Space saved going from `original` to `compressed` bytes, in percent.
///
/// Negative when the output grew; zero for empty input.
pub fn savings_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// Format a percentage of space saved.
pub fn format_savings(savings: f64) -> String {
    format!("{:.1}%", savings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_path() {
        assert_eq!(
            compressed_path(Path::new("notes.txt")),
            PathBuf::from("notes.txt.lz77")
        );
        assert_eq!(
            compressed_path(Path::new("dir/archive")),
            PathBuf::from("dir/archive.lz77")
        );
    }

    #[test]
    fn test_decompressed_path() {
        assert_eq!(
            decompressed_path(Path::new("notes.txt.lz77")),
            PathBuf::from("notes.txt")
        );
        assert_eq!(
            decompressed_path(Path::new("blob.bin")),
            PathBuf::from("blob.bin.out")
        );
        assert_eq!(
            decompressed_path(Path::new("noext")),
            PathBuf::from("noext.out")
        );
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(savings_percent(0, 0), 0.0);
        assert_eq!(savings_percent(200, 50), 75.0);
        assert_eq!(savings_percent(100, 125), -25.0);
        assert_eq!(format_savings(savings_percent(3, 1)), "66.7%");
    }

    #[test]
    fn test_hidden_progress_bar() {
        let pb = create_progress_bar(100, false);
        assert!(pb.is_hidden());
    }
}
