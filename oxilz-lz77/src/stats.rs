//! Summary statistics for a token stream.

use crate::token::Token;
use serde::Serialize;

/// Counts describing how an input was tokenised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    /// Uncompressed bytes covered by the tokens.
    pub original_bytes: u64,
    /// Encoded size in bits, before padding.
    pub encoded_bits: u64,
    /// Number of literal tokens.
    pub literals: u64,
    /// Number of match tokens.
    pub matches: u64,
    /// Uncompressed bytes produced by matches.
    pub matched_bytes: u64,
    /// Longest match length seen.
    pub longest_match: u8,
    /// Largest match distance seen.
    pub farthest_distance: u16,
}

impl StreamStats {
    /// Gather statistics over a token sequence.
    ///
    /// ```
    /// use oxilz_lz77::{StreamStats, Token};
    ///
    /// let stats = StreamStats::from_tokens(&[
    ///     Token::Literal(b'a'),
    ///     Token::Match { distance: 1, length: 9 },
    /// ]);
    /// assert_eq!(stats.original_bytes, 10);
    /// assert_eq!(stats.encoded_bits, 26);
    /// assert_eq!(stats.encoded_bytes(), 4);
    /// ```
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut stats = Self::default();
        for token in tokens {
            stats.record(token);
        }
        stats
    }

    /// Account for one more token.
    pub fn record(&mut self, token: &Token) {
        self.encoded_bits += token.bit_len();
        self.original_bytes += token.output_len() as u64;

        match *token {
            Token::Literal(_) => self.literals += 1,
            Token::Match { distance, length } => {
                self.matches += 1;
                self.matched_bytes += u64::from(length);
                self.longest_match = self.longest_match.max(length);
                self.farthest_distance = self.farthest_distance.max(distance);
            }
        }
    }

    /// Total number of tokens.
    pub fn tokens(&self) -> u64 {
        self.literals + self.matches
    }

    /// Encoded size in bytes, after padding.
    pub fn encoded_bytes(&self) -> u64 {
        self.encoded_bits.div_ceil(8)
    }

    /// Encoded size as a fraction of the original size.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.encoded_bytes() as f64 / self.original_bytes as f64
    }

    /// Space saved by compression, in percent. Negative when the output grew.
    pub fn space_savings(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.ratio()) * 100.0
    }

    /// Mean match length, or zero without matches.
    pub fn average_match_length(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.matched_bytes as f64 / self.matches as f64
    }
}
