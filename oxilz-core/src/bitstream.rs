//! MSB-first bit stream operations.
//!
//! The LZ77 token stream packs its fields most significant bit first: the
//! first bit written lands in bit 7 of the first output byte. This differs
//! from DEFLATE-style LSB-first packing.
//!
//! # Example
//!
//! ```
//! use oxilz_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b1100, 4).unwrap();
//! assert_eq!(writer.bit_len(), 7);
//!
//! let data = writer.finish();
//! assert_eq!(data, vec![0b1011_1000]);
//!
//! let mut reader = MsbBitReader::new(&data);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! assert_eq!(reader.remaining_bits(), 1);
//! ```

use crate::error::{CoreError, Result};

/// MSB-first bit reader over a borrowed byte slice.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Next byte to load into the buffer.
    byte_pos: usize,
    /// Bit buffer (valid bits are the low `bits_in_buffer` bits).
    buffer: u32,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits consumed (for error reporting).
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Fill buffer with at least `count` bits.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;

            self.buffer = (self.buffer << 8) | u32::from(byte);
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            return Err(CoreError::unexpected_eof(self.total_bits_read));
        }

        Ok(())
    }

    /// Read up to 16 bits from the stream (MSB-first).
    pub fn read_bits(&mut self, count: u8) -> Result<u16> {
        if count == 0 || count > 16 {
            return Err(CoreError::InvalidBitWidth(count));
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u32 << count) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += u64::from(count);

        Ok(value as u16)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Read eight bits as a byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Number of bits not yet consumed, including trailing padding.
    pub fn remaining_bits(&self) -> u64 {
        (self.data.len() - self.byte_pos) as u64 * 8 + u64::from(self.bits_in_buffer)
    }
}

/// MSB-first bit writer accumulating into an in-memory buffer.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Pending bits (low `bits_in_buffer` bits are valid).
    buffer: u32,
    /// Number of pending bits, always below 8 between calls.
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Write up to 16 bits to the stream (MSB-first).
    pub fn write_bits(&mut self, value: u16, count: u8) -> Result<()> {
        if count == 0 || count > 16 {
            return Err(CoreError::InvalidBitWidth(count));
        }

        self.buffer = (self.buffer << count) | (u32::from(value) & ((1u32 << count) - 1));
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u32 << self.bits_in_buffer) - 1;

        Ok(())
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u32::from(bit);
        self.bits_in_buffer += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Write a full byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        // Pending bits stay below 8, so exactly one byte completes.
        self.buffer = (self.buffer << 8) | u32::from(byte);
        self.output.push((self.buffer >> self.bits_in_buffer) as u8);
        self.buffer &= (1u32 << self.bits_in_buffer) - 1;
    }

    /// Number of bits written so far, before padding.
    pub fn bit_len(&self) -> u64 {
        self.output.len() as u64 * 8 + u64::from(self.bits_in_buffer)
    }

    /// Pad the final partial byte with zero bits and return the output.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << remaining) as u8);
        }
        self.output
    }
}
