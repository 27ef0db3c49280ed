//! Scoring module - fixed line-clear score table
//!
//! Simultaneous clears use the flat table below; levels and combo chains are
//! not part of this ruleset. Five or more rows at once is only reachable with
//! oversized custom pieces and falls back to a per-line award.

use crate::types::{EXTRA_LINE_SCORE, LINE_SCORES};

/// Points awarded for clearing `lines` rows with a single lock
pub fn score_for_lines(lines: usize) -> u32 {
    if lines < LINE_SCORES.len() {
        LINE_SCORES[lines]
    } else {
        lines as u32 * EXTRA_LINE_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        assert_eq!(score_for_lines(0), 0);
        assert_eq!(score_for_lines(1), 100);
        assert_eq!(score_for_lines(2), 300);
        assert_eq!(score_for_lines(3), 500);
        assert_eq!(score_for_lines(4), 800);
    }

    #[test]
    fn test_oversized_clears_use_per_line_fallback() {
        assert_eq!(score_for_lines(5), 1000);
        assert_eq!(score_for_lines(6), 1200);
    }
}
