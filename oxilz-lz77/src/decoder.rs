//! LZ77 decoder (decompression).
//!
//! Decoding runs in two layers. [`TokenReader`] walks the bit stream with a
//! three-state machine (read flag, then a literal or match payload) and
//! yields tokens. [`Lz77Decoder`] replays those tokens against the growing
//! output buffer.
//!
//! The stream has no length prefix. Reading stops once fewer than nine bits
//! remain, which is exactly the zero padding written after the last token.

use crate::config::MIN_MATCH_LENGTH;
use crate::error::{Lz77Error, Result};
use crate::token::{LITERAL_BITS, Token, unpack_match};
use oxilz_core::{CoreError, MsbBitReader};
use tracing::debug;

/// Position of the token reader inside the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    ReadFlag,
    ReadLiteral,
    ReadMatch,
}

/// Reads tokens out of a packed stream.
///
/// # Example
///
/// ```
/// use oxilz_lz77::{Token, TokenReader, compress, Lz77Config};
///
/// let packed = compress(b"aaaa", &Lz77Config::default()).unwrap();
/// let tokens: Vec<Token> = TokenReader::new(&packed)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens, vec![Token::Literal(b'a'), Token::Match { distance: 1, length: 3 }]);
/// ```
#[derive(Debug)]
pub struct TokenReader<'a> {
    reader: MsbBitReader<'a>,
    /// Bit offset of the most recently started token.
    token_start: u64,
    /// Set after the end of the stream or an error.
    finished: bool,
}

impl<'a> TokenReader<'a> {
    /// Create a token reader over a packed stream.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            reader: MsbBitReader::new(input),
            token_start: 0,
            finished: false,
        }
    }

    /// Bit offset where the most recently returned token starts.
    pub fn token_position(&self) -> u64 {
        self.token_start
    }

    /// Total bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.reader.bits_read()
    }

    /// Read the next token, or `None` once only padding remains.
    pub fn read_token(&mut self) -> Result<Option<Token>> {
        if self.finished {
            return Ok(None);
        }

        let result = self.step();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn step(&mut self) -> Result<Option<Token>> {
        let mut state = DecodeState::ReadFlag;

        loop {
            state = match state {
                DecodeState::ReadFlag => {
                    if self.reader.remaining_bits() < LITERAL_BITS {
                        return Ok(None);
                    }
                    self.token_start = self.reader.bits_read();

                    if self.reader.read_bit()? {
                        DecodeState::ReadMatch
                    } else {
                        DecodeState::ReadLiteral
                    }
                }
                DecodeState::ReadLiteral => {
                    let byte = self.reader.read_byte().map_err(|e| self.truncated(e))?;
                    return Ok(Some(Token::Literal(byte)));
                }
                DecodeState::ReadMatch => {
                    let b1 = self.reader.read_byte().map_err(|e| self.truncated(e))?;
                    let b2 = self.reader.read_byte().map_err(|e| self.truncated(e))?;
                    let (distance, length) = unpack_match([b1, b2]);

                    if usize::from(length) < MIN_MATCH_LENGTH {
                        return Err(Lz77Error::InvalidLength {
                            length,
                            bit_position: self.token_start,
                        });
                    }

                    return Ok(Some(Token::Match { distance, length }));
                }
            };
        }
    }

    fn truncated(&self, err: CoreError) -> Lz77Error {
        if err.is_eof() {
            Lz77Error::TruncatedToken {
                bit_position: self.token_start,
            }
        } else {
            err.into()
        }
    }
}

impl Iterator for TokenReader<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_token().transpose()
    }
}

/// LZ77 decoder replaying tokens into an output buffer.
#[derive(Debug, Default)]
pub struct Lz77Decoder {
    /// Bytes produced so far; matches copy from here.
    output: Vec<u8>,
}

impl Lz77Decoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder expecting roughly `capacity` output bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
        }
    }

    /// Decode a packed stream.
    ///
    /// Any output from an earlier call is discarded first.
    ///
    /// # Errors
    ///
    /// - [`Lz77Error::InvalidDistance`] when a match reaches before the start
    ///   of the output or has distance zero
    /// - [`Lz77Error::InvalidLength`] when a match is shorter than two bytes
    /// - [`Lz77Error::TruncatedToken`] when the stream stops inside a token
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.reset();

        let mut tokens = TokenReader::new(input);
        let mut count = 0usize;
        while let Some(token) = tokens.read_token()? {
            self.apply(token, tokens.token_position())?;
            count += 1;
        }

        debug!(
            input_bytes = input.len(),
            tokens = count,
            output_bytes = self.output.len(),
            "lz77 decode finished"
        );

        Ok(self.take_output())
    }

    /// Append the bytes for one token.
    ///
    /// `bit_position` is only used for error reporting. Matches copy one byte
    /// at a time so a distance shorter than the length repeats the pattern.
    pub fn apply(&mut self, token: Token, bit_position: u64) -> Result<()> {
        match token {
            Token::Literal(byte) => self.output.push(byte),
            Token::Match { distance, length } => {
                let back = usize::from(distance);
                if back == 0 || back > self.output.len() {
                    return Err(Lz77Error::InvalidDistance {
                        distance,
                        available: self.output.len(),
                        bit_position,
                    });
                }

                self.output.reserve(usize::from(length));
                for _ in 0..length {
                    let byte = self.output[self.output.len() - back];
                    self.output.push(byte);
                }
            }
        }
        Ok(())
    }

    /// Decoded output so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Take the decoded output, leaving the decoder empty.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.output.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::Lz77Encoder;

    #[test]
    fn test_decode_empty() {
        assert!(Lz77Decoder::new().decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_literal_bytes() {
        // Hand-built: literal 'A', padded.
        assert_eq!(Lz77Decoder::new().decode(&[0x20, 0x80]).unwrap(), b"A");
    }

    #[test]
    fn test_decode_hand_built_match() {
        // literal 'a', match distance 1 length 2
        let decoded = Lz77Decoder::new()
            .decode(&[0x30, 0xC0, 0x04, 0x80])
            .unwrap();
        assert_eq!(decoded, b"aaa");
    }

    #[test]
    fn test_overlapping_copy() {
        let mut decoder = Lz77Decoder::new();
        decoder.apply(Token::Literal(b'a'), 0).unwrap();
        decoder.apply(Token::Literal(b'b'), 9).unwrap();
        decoder
            .apply(
                Token::Match {
                    distance: 2,
                    length: 7,
                },
                18,
            )
            .unwrap();
        assert_eq!(decoder.output(), b"ababababa");
    }

    #[test]
    fn test_distance_beyond_output() {
        let mut decoder = Lz77Decoder::new();
        decoder.apply(Token::Literal(b'a'), 0).unwrap();
        let err = decoder
            .apply(
                Token::Match {
                    distance: 2,
                    length: 2,
                },
                9,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Lz77Error::InvalidDistance {
                distance: 2,
                available: 1,
                bit_position: 9
            }
        ));
    }

    #[test]
    fn test_zero_distance_rejected() {
        // literal 'a', then match bytes 0x00 0x02: distance 0, length 2
        let mut writer = oxilz_core::MsbBitWriter::new();
        writer.write_bit(false);
        writer.write_byte(b'a');
        writer.write_bit(true);
        writer.write_bits(0x0002, 16).unwrap();
        let stream = writer.finish();

        let err = Lz77Decoder::new().decode(&stream).unwrap_err();
        assert!(matches!(err, Lz77Error::InvalidDistance { distance: 0, .. }));
    }

    #[test]
    fn test_match_before_any_output() {
        let stream = Lz77Encoder::encode_tokens([Token::Match {
            distance: 1,
            length: 4,
        }])
        .unwrap();
        let err = Lz77Decoder::new().decode(&stream).unwrap_err();
        assert!(matches!(
            err,
            Lz77Error::InvalidDistance {
                available: 0,
                bit_position: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_short_length_rejected() {
        let mut writer = oxilz_core::MsbBitWriter::new();
        writer.write_bit(false);
        writer.write_byte(b'a');
        writer.write_bit(true);
        writer.write_bits(0x0011, 16).unwrap(); // distance 1, length 1
        let stream = writer.finish();

        let err = Lz77Decoder::new().decode(&stream).unwrap_err();
        assert!(matches!(
            err,
            Lz77Error::InvalidLength {
                length: 1,
                bit_position: 9
            }
        ));
    }

    #[test]
    fn test_truncated_match() {
        // Flag 1 followed by only 8 payload bits.
        let err = Lz77Decoder::new().decode(&[0xFF, 0x80]).unwrap_err();
        assert!(matches!(err, Lz77Error::TruncatedToken { bit_position: 0 }));
    }

    #[test]
    fn test_padding_ignored() {
        // Seven trailing zero bits after one literal are padding, not a token.
        let encoded = Lz77Encoder::default().encode(b"Z").unwrap();
        assert_eq!(encoded.len(), 2);
        assert_eq!(Lz77Decoder::new().decode(&encoded).unwrap(), b"Z");
    }

    #[test]
    fn test_token_reader_stops_after_error() {
        let mut reader = TokenReader::new(&[0xFF, 0x80]);
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_decoder_reuse() {
        let encoder = Lz77Encoder::default();
        let mut decoder = Lz77Decoder::with_capacity(16);

        let first = encoder.encode(b"first first").unwrap();
        let second = encoder.encode(b"second").unwrap();

        assert_eq!(decoder.decode(&first).unwrap(), b"first first");
        assert_eq!(decoder.decode(&second).unwrap(), b"second");
        assert!(decoder.output().is_empty());
    }
}
