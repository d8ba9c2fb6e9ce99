//! LZ77 encoder (compression).

use crate::config::Lz77Config;
use crate::error::Result;
use crate::match_finder::MatchFinder;
use crate::stats::StreamStats;
use crate::token::{Token, pack_match};
use oxilz_core::MsbBitWriter;
use tracing::debug;

/// LZ77 encoder with a fixed window size.
#[derive(Debug, Clone, Copy)]
pub struct Lz77Encoder {
    config: Lz77Config,
    finder: MatchFinder,
}

impl Lz77Encoder {
    /// Create an encoder for the given configuration.
    pub fn new(config: Lz77Config) -> Self {
        Self {
            config,
            finder: MatchFinder::new(&config),
        }
    }

    /// Create an encoder, validating `window_size` first.
    pub fn with_window_size(window_size: usize) -> Result<Self> {
        Ok(Self::new(Lz77Config::new(window_size)?))
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &Lz77Config {
        &self.config
    }

    /// Iterate over the tokens for `data` without encoding them.
    ///
    /// The iterator exposes its cursor through [`Tokens::position`], which
    /// callers can use to report progress on large inputs.
    pub fn tokens<'a>(&self, data: &'a [u8]) -> Tokens<'a> {
        Tokens {
            finder: self.finder,
            data,
            position: 0,
        }
    }

    /// Encode data into the packed token stream.
    ///
    /// # Algorithm
    ///
    /// 1. Start the cursor at 0
    /// 2. Ask the match finder for the longest match at the cursor
    /// 3. On a match write flag `1` and the packed distance/length, then
    ///    advance by the match length
    /// 4. Otherwise write flag `0` and the literal byte, then advance by one
    /// 5. Repeat until the cursor reaches the end, then pad to a byte boundary
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.encode_with_progress(data, |_| {})
    }

    /// Encode data, reporting the number of input bytes consumed after each
    /// token.
    pub fn encode_with_progress<F>(&self, data: &[u8], mut on_progress: F) -> Result<Vec<u8>>
    where
        F: FnMut(usize),
    {
        let mut stats = StreamStats::default();
        let mut writer = MsbBitWriter::with_capacity(data.len() + data.len() / 8 + 1);
        let mut tokens = self.tokens(data);

        while let Some(token) = tokens.next() {
            stats.record(&token);
            write_token(&mut writer, token)?;
            on_progress(tokens.position());
        }

        debug!(
            window_size = self.config.window_size(),
            input_bytes = data.len(),
            literals = stats.literals,
            matches = stats.matches,
            encoded_bits = writer.bit_len(),
            "lz77 encode finished"
        );

        Ok(writer.finish())
    }

    /// Encode an already computed token sequence.
    pub fn encode_tokens<I>(tokens: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut writer = MsbBitWriter::new();
        for token in tokens {
            write_token(&mut writer, token)?;
        }
        Ok(writer.finish())
    }
}

impl Default for Lz77Encoder {
    fn default() -> Self {
        Self::new(Lz77Config::default())
    }
}

/// Append one token to the bit stream.
pub fn write_token(writer: &mut MsbBitWriter, token: Token) -> Result<()> {
    match token {
        Token::Literal(byte) => {
            writer.write_bit(false);
            writer.write_byte(byte);
        }
        Token::Match { distance, length } => {
            let [high, low] = pack_match(distance, length);
            writer.write_bit(true);
            writer.write_bits(u16::from_be_bytes([high, low]), 16)?;
        }
    }
    Ok(())
}

/// Lazy token sequence for an input buffer.
///
/// Created by [`Lz77Encoder::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    finder: MatchFinder,
    data: &'a [u8],
    position: usize,
}

impl Tokens<'_> {
    /// Bytes of input consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total input length.
    pub fn input_len(&self) -> usize {
        self.data.len()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let &byte = self.data.get(self.position)?;

        let token = match self.finder.find_longest_match(self.data, self.position) {
            Some(m) => {
                self.position += usize::from(m.length);
                Token::from(m)
            }
            None => {
                self.position += 1;
                Token::Literal(byte)
            }
        };

        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.position;
        (remaining.div_ceil(crate::config::LOOKAHEAD_LENGTH), Some(remaining))
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
