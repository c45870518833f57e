//! Matching visual lines within and across geometry documents.

use log::debug;

use crate::error::{Result, SpacingError};
use crate::layout::grouping::VisualLine;
use crate::layout::params::MatchParams;

/// How the caller designates the baseline line to inspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineTarget {
    /// 1-based index into the baseline lines in reading order.
    Index(usize),
    /// Baseline y position in points, matched under `line_tolerance`.
    Y(f64),
}

/// Resolves a [`LineTarget`] against the baseline lines.
pub fn resolve_baseline<'a>(
    lines: &'a [VisualLine],
    target: LineTarget,
    params: &MatchParams,
) -> Result<&'a VisualLine> {
    match target {
        LineTarget::Index(index) => {
            if index < 1 || index > lines.len() {
                return Err(SpacingError::LineIndexOutOfRange {
                    index,
                    max: lines.len(),
                });
            }
            Ok(&lines[index - 1])
        }
        LineTarget::Y(y) => {
            nearest_line(lines, y, params.line_tolerance).ok_or(SpacingError::NoBaselineLine {
                y,
                tolerance: params.line_tolerance,
            })
        }
    }
}

/// Finds the candidate line matching a resolved baseline key.
///
/// An exact key hit bypasses the tolerance check; otherwise the nearest
/// key must fall within `pair_tolerance`.
pub fn find_candidate<'a>(
    lines: &'a [VisualLine],
    y: f64,
    params: &MatchParams,
) -> Result<&'a VisualLine> {
    if let Some(line) = lines.iter().find(|l| l.y == y) {
        return Ok(line);
    }
    let found = nearest_line(lines, y, params.pair_tolerance).ok_or(
        SpacingError::NoCandidateLine {
            y,
            tolerance: params.pair_tolerance,
        },
    )?;
    debug!("matched baseline y={} to candidate y={}", y, found.y);
    Ok(found)
}

/// Line with the minimum |key − y|, or None when the minimum distance
/// exceeds the tolerance (or the collection is empty).
fn nearest_line(lines: &[VisualLine], y: f64, tolerance: f64) -> Option<&VisualLine> {
    let nearest = lines
        .iter()
        .min_by(|a, b| (a.y - y).abs().total_cmp(&(b.y - y).abs()))?;
    ((nearest.y - y).abs() <= tolerance).then_some(nearest)
}

/// Pairs two full line collections positionally.
///
/// Positional correspondence is only trustworthy when both documents
/// produced the same number of lines; anything else fails the whole
/// comparison.
pub fn pair_lines<'a>(
    base: &'a [VisualLine],
    cand: &'a [VisualLine],
) -> Result<Vec<(&'a VisualLine, &'a VisualLine)>> {
    if base.len() != cand.len() {
        return Err(SpacingError::LineCountMismatch {
            base: base.len(),
            cand: cand.len(),
        });
    }
    Ok(base.iter().zip(cand.iter()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordRecord;

    fn line(y: f64) -> VisualLine {
        VisualLine {
            y,
            words: vec![WordRecord {
                text: "w".to_string(),
                x: 0.0,
                y,
                width: 1.0,
            }],
        }
    }

    #[test]
    fn resolve_by_index_is_one_based() {
        let lines = vec![line(100.0), line(112.0), line(124.0)];
        let params = MatchParams::default();
        let found = resolve_baseline(&lines, LineTarget::Index(2), &params).unwrap();
        assert_eq!(found.y, 112.0);
    }

    #[test]
    fn resolve_by_index_out_of_range() {
        let lines = vec![line(100.0), line(112.0), line(124.0)];
        let params = MatchParams::default();
        let err = resolve_baseline(&lines, LineTarget::Index(5), &params).unwrap_err();
        match err {
            SpacingError::LineIndexOutOfRange { index, max } => {
                assert_eq!(index, 5);
                assert_eq!(max, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(resolve_baseline(&lines, LineTarget::Index(0), &params).is_err());
    }

    #[test]
    fn resolve_by_y_within_tolerance() {
        let lines = vec![line(100.0), line(112.0)];
        let params = MatchParams::default();
        let found = resolve_baseline(&lines, LineTarget::Y(112.3), &params).unwrap();
        assert_eq!(found.y, 112.0);
    }

    #[test]
    fn resolve_by_y_beyond_tolerance_fails() {
        let lines = vec![line(100.0), line(112.0)];
        let params = MatchParams::default();
        assert!(resolve_baseline(&lines, LineTarget::Y(113.0), &params).is_err());
    }

    #[test]
    fn candidate_exact_hit_ignores_tolerance() {
        let lines = vec![line(700.0)];
        let params = MatchParams {
            pair_tolerance: 0.0,
            ..Default::default()
        };
        assert!(find_candidate(&lines, 700.0, &params).is_ok());
    }

    #[test]
    fn candidate_nearest_under_loose_tolerance() {
        let lines = vec![line(701.2)];
        let params = MatchParams::default();
        let found = find_candidate(&lines, 700.0, &params).unwrap();
        assert_eq!(found.y, 701.2);
        assert!(find_candidate(&lines, 699.0, &params).is_err());
    }

    #[test]
    fn pairing_requires_equal_line_counts() {
        let base = vec![line(100.0), line(112.0)];
        let cand = vec![line(100.0)];
        assert!(matches!(
            pair_lines(&base, &cand),
            Err(SpacingError::LineCountMismatch { base: 2, cand: 1 })
        ));
        let cand = vec![line(100.1), line(112.1)];
        let pairs = pair_lines(&base, &cand).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].0.y, 112.0);
        assert_eq!(pairs[1].1.y, 112.1);
    }
}
