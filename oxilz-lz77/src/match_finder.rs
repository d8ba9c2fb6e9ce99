//! Longest-match search over the sliding window.
//!
//! The search is exhaustive: every source position inside the window is
//! compared against the lookahead. With a window of at most 400 bytes and a
//! 15-byte lookahead this stays cheap, so no hash chains are kept.
//!
//! A source run may be shorter than the match it produces. When the source
//! starts `d` bytes back, the comparison wraps around those `d` bytes, so a
//! run such as `abcabcabc` is found as a single distance-3 match that reaches
//! into bytes the match itself reproduces.

use crate::config::{Lz77Config, MIN_MATCH_LENGTH};
use crate::token::Match;

/// Finds the longest back-reference for a cursor position.
///
/// The finder holds no state besides its configuration; each query is a pure
/// function of the input buffer and the cursor.
#[derive(Debug, Clone, Copy)]
pub struct MatchFinder {
    /// Maximum distance searched.
    window_size: usize,
    /// Maximum match length.
    max_length: usize,
}

impl MatchFinder {
    /// Create a match finder for the given configuration.
    pub fn new(config: &Lz77Config) -> Self {
        Self {
            window_size: config.window_size(),
            max_length: config.lookahead_length(),
        }
    }

    /// Maximum distance searched.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Find the longest match for `data[position..]`.
    ///
    /// Sources are the positions in `[position - window_size, position)`,
    /// clamped at zero. Lengths range from 2 up to the lookahead length or
    /// the bytes remaining, whichever is smaller. On equal lengths the
    /// closest source wins.
    ///
    /// Returns `None` when no match of at least two bytes exists, including
    /// when `position` is at or past the end of `data`.
    ///
    /// # Example
    ///
    /// ```
    /// use oxilz_lz77::{Lz77Config, Match, MatchFinder};
    ///
    /// let finder = MatchFinder::new(&Lz77Config::default());
    /// let found = finder.find_longest_match(b"abcabcabc", 3);
    /// assert_eq!(found, Some(Match { distance: 3, length: 6 }));
    /// ```
    pub fn find_longest_match(&self, data: &[u8], position: usize) -> Option<Match> {
        if position >= data.len() {
            return None;
        }

        let max_len = self.max_length.min(data.len() - position);
        if max_len < MIN_MATCH_LENGTH {
            return None;
        }

        let target = &data[position..position + max_len];
        let window_start = position.saturating_sub(self.window_size);

        let mut best: Option<Match> = None;
        let mut best_len = MIN_MATCH_LENGTH - 1;

        // Increasing distance, replacing only on strictly longer matches,
        // keeps the closest source among equal lengths.
        for distance in 1..=position - window_start {
            let source = &data[position - distance..position];
            let len = wrapped_match_len(source, target);

            if len > best_len {
                best_len = len;
                best = Some(Match {
                    distance: distance as u16,
                    length: len as u8,
                });

                if len == max_len {
                    break;
                }
            }
        }

        best
    }
}

/// Length of the common prefix of `target` and `source` repeated end to end.
#[inline]
fn wrapped_match_len(source: &[u8], target: &[u8]) -> usize {
    target
        .iter()
        .zip(source.iter().cycle())
        .take_while(|(t, s)| t == s)
        .count()
}
