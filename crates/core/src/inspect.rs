//! Single-line inspection: per-word and per-gap deltas for one matched
//! baseline/candidate line pair.

use crate::error::{Result, SpacingError};
use crate::layout::{GroupingPolicy, LineTarget, MatchParams, gaps, grouping, matching};
use crate::model::SpacingReport;

/// Horizontal displacement of one word (candidate x − baseline x).
#[derive(Debug, Clone, PartialEq)]
pub struct WordDelta {
    pub text: String,
    pub dx: f64,
}

/// One gap compared across the matched pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapDelta {
    pub base: f64,
    pub cand: f64,
    pub delta: f64,
    /// This gap's share of the total delta; zero when the total is zero.
    pub share: f64,
    /// Width of the word left of the gap, in the baseline.
    pub prev_width: f64,
}

/// Structured result of inspecting one line pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LineInspection {
    /// Baseline key of the inspected line.
    pub y: f64,
    pub word_count: usize,
    pub word_deltas: Vec<WordDelta>,
    pub gap_deltas: Vec<GapDelta>,
    /// Sum of candidate gaps minus sum of baseline gaps, in points.
    pub total_extra: f64,
}

/// Resolves the requested line in the baseline, matches it in the
/// candidate, and compares the two word for word and gap for gap.
///
/// Word counts must agree between the matched pair; a mismatch is fatal
/// here because the caller asked for a precise diagnosis of this line.
/// Grouping uses exact keys since both documents come from the same
/// extraction pass.
pub fn inspect_line(
    report: &SpacingReport,
    target: LineTarget,
    params: &MatchParams,
) -> Result<LineInspection> {
    let base_lines = grouping::group_lines(report.base.first_page_words(), GroupingPolicy::Exact);
    let cand_lines =
        grouping::group_lines(report.candidate.first_page_words(), GroupingPolicy::Exact);

    let base_line = matching::resolve_baseline(&base_lines, target, params)?;
    let cand_line = matching::find_candidate(&cand_lines, base_line.y, params)?;

    if base_line.words.len() != cand_line.words.len() {
        return Err(SpacingError::WordCountMismatch {
            y: base_line.y,
            base: base_line.words.len(),
            cand: cand_line.words.len(),
        });
    }

    let word_deltas = base_line
        .words
        .iter()
        .zip(&cand_line.words)
        .map(|(bw, cw)| WordDelta {
            text: bw.text.clone(),
            dx: cw.x - bw.x,
        })
        .collect();

    let base_gaps = gaps::gaps(&base_line.words);
    let cand_gaps = gaps::gaps(&cand_line.words);
    let total_extra: f64 = base_gaps
        .iter()
        .zip(&cand_gaps)
        .map(|(b, c)| c.gap - b.gap)
        .sum();
    let gap_deltas = base_gaps
        .iter()
        .zip(&cand_gaps)
        .map(|(b, c)| {
            let delta = c.gap - b.gap;
            GapDelta {
                base: b.gap,
                cand: c.gap,
                delta,
                share: if total_extra != 0.0 { delta / total_extra } else { 0.0 },
                prev_width: b.width,
            }
        })
        .collect();

    Ok(LineInspection {
        y: base_line.y,
        word_count: base_line.words.len(),
        word_deltas,
        gap_deltas,
        total_extra,
    })
}
