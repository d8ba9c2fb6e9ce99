//! CRC-32 (ISO 3309) checksum.
//!
//! The framed OxiLZ container stores a CRC-32 of the uncompressed payload so
//! that a decoder can detect corruption the bare token stream cannot express.
//! Data of at least 16 bytes is processed with slicing-by-4 tables; shorter
//! inputs use the single byte-at-a-time table.

/// CRC-32 slicing-by-4 lookup tables (polynomial 0xEDB88320, reflected).
/// Table 0 is the classic byte-at-a-time table.
const CRC32_TABLES: [[u32; 256]; 4] = {
    let mut tables = [[0u32; 256]; 4];

    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB88320;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        tables[0][i] = crc;
        i += 1;
    }

    let mut t = 1;
    while t < 4 {
        let mut i = 0usize;
        while i < 256 {
            let prev = tables[t - 1][i];
            tables[t][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
            i += 1;
        }
        t += 1;
    }

    tables
};

/// CRC-32 calculator (ISO 3309).
///
/// - Polynomial: 0x04C11DB7 (reflected: 0xEDB88320)
/// - Initial value: 0xFFFFFFFF
/// - Final XOR: 0xFFFFFFFF
///
/// # Example
///
/// ```
/// use oxilz_core::crc::Crc32;
///
/// let mut crc = Crc32::new();
/// crc.update(b"Hello, ");
/// crc.update(b"World!");
/// assert_eq!(crc.finalize(), 0xEC4AC3D0);
/// ```
#[derive(Debug, Clone)]
pub struct Crc32 {
    crc: u32,
}

impl Crc32 {
    /// Create a new CRC-32 calculator.
    pub fn new() -> Self {
        Self { crc: 0xFFFFFFFF }
    }

    /// Reset the CRC to its initial state.
    pub fn reset(&mut self) {
        self.crc = 0xFFFFFFFF;
    }

    /// Update the CRC with more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        if data.len() >= 16 {
            crc32_slice4(&mut self.crc, data);
        } else {
            crc32_bytewise(&mut self.crc, data);
        }
    }

    /// Get the current CRC value (without finalizing).
    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.crc ^ 0xFFFFFFFF
    }

    /// Finalize and return the CRC value.
    #[inline(always)]
    pub fn finalize(self) -> u32 {
        self.crc ^ 0xFFFFFFFF
    }

    /// Compute CRC-32 for a slice in one call.
    #[inline]
    pub fn compute(data: &[u8]) -> u32 {
        let mut crc = Self::new();
        crc.update(data);
        crc.finalize()
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn crc32_bytewise(crc: &mut u32, data: &[u8]) {
    for &byte in data {
        let index = ((*crc ^ u32::from(byte)) & 0xFF) as usize;
        *crc = CRC32_TABLES[0][index] ^ (*crc >> 8);
    }
}

#[inline]
fn crc32_slice4(crc: &mut u32, data: &[u8]) {
    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let word = *crc ^ u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        *crc = CRC32_TABLES[3][(word & 0xFF) as usize]
            ^ CRC32_TABLES[2][((word >> 8) & 0xFF) as usize]
            ^ CRC32_TABLES[1][((word >> 16) & 0xFF) as usize]
            ^ CRC32_TABLES[0][(word >> 24) as usize];
    }
    crc32_bytewise(crc, chunks.remainder());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_known_values() {
        assert_eq!(Crc32::compute(b""), 0x00000000);
        assert_eq!(Crc32::compute(b"a"), 0xE8B7BE43);
        assert_eq!(Crc32::compute(b"123456789"), 0xCBF43926);
        assert_eq!(Crc32::compute(b"Hello, World!"), 0xEC4AC3D0);
    }

    #[test]
    fn test_crc32_slicing_matches_bytewise() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 31 + 7) as u8).collect();

        let mut expected = 0xFFFFFFFF;
        crc32_bytewise(&mut expected, &data);

        assert_eq!(Crc32::compute(&data), expected ^ 0xFFFFFFFF);
    }

    #[test]
    fn test_crc32_incremental() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let mut crc = Crc32::new();
        crc.update(&data[..10]);
        crc.update(&data[10..]);
        assert_eq!(crc.value(), Crc32::compute(data));
        assert_eq!(crc.finalize(), 0x414FA339);
    }

    #[test]
    fn test_crc32_reset() {
        let mut crc = Crc32::new();
        crc.update(b"garbage");
        crc.reset();
        crc.update(b"123456789");
        assert_eq!(crc.finalize(), 0xCBF43926);
    }
}
