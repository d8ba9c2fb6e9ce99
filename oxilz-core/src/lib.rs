//! # OxiLZ Core
//!
//! Core components for the OxiLZ compressor.
//!
//! This crate provides the low-level building blocks shared by the codec and
//! the command-line front end:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for the packed token stream
//! - [`crc`]: CRC-32 checksum used by the framed container
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Front end                                           │
//! │     oxilz CLI (compress, decompress, inspect, test)     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LZ77 match finder, token encoder/decoder, framing   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     MsbBitReader/MsbBitWriter, CRC-32                   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilz_core::bitstream::{MsbBitReader, MsbBitWriter};
//! use oxilz_core::crc::Crc32;
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bit(true);
//! writer.write_bits(0xAB, 8).unwrap();
//! let bytes = writer.finish();
//!
//! let mut reader = MsbBitReader::new(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_bits(8).unwrap(), 0xAB);
//!
//! assert_eq!(Crc32::compute(b"Hello, World!"), 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod crc;
pub mod error;

// Re-exports for convenience
pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use crc::Crc32;
pub use error::{CoreError, Result};
