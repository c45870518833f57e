//! Inter-word gap computation.

use itertools::Itertools;

use crate::model::WordRecord;

/// One inter-word gap together with the width of the word on its left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSpan {
    /// Width of the left word of the pair.
    pub width: f64,
    /// Horizontal distance from the left word's right edge to the right
    /// word's left edge. Negative values are valid (kerned or
    /// overlapping glyphs), not an error.
    pub gap: f64,
}

/// Gaps between adjacent words of a line, left to right. A line with
/// fewer than two words has no gaps.
pub fn gaps(words: &[WordRecord]) -> Vec<GapSpan> {
    words
        .iter()
        .tuple_windows()
        .map(|(left, right)| GapSpan {
            width: left.width,
            gap: right.x - left.right(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(x: f64, width: f64) -> WordRecord {
        WordRecord {
            text: "w".to_string(),
            x,
            y: 700.0,
            width,
        }
    }

    #[test]
    fn computes_adjacent_gaps() {
        let words = vec![word(100.0, 30.0), word(140.0, 30.0), word(175.0, 20.0)];
        let spans = gaps(&words);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], GapSpan { width: 30.0, gap: 10.0 });
        assert_eq!(spans[1], GapSpan { width: 30.0, gap: 5.0 });
    }

    #[test]
    fn negative_gap_is_valid() {
        let words = vec![word(100.0, 30.0), word(128.0, 10.0)];
        assert_eq!(gaps(&words)[0].gap, -2.0);
    }

    #[test]
    fn short_lines_have_no_gaps() {
        assert!(gaps(&[]).is_empty());
        assert!(gaps(&[word(100.0, 30.0)]).is_empty());
    }
}
