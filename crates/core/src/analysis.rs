//! Weighted aggregation of gap spacing deltas per paragraph alignment.

use std::collections::HashSet;

use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;

use crate::error::Result;
use crate::layout::{
    GroupingPolicy, MatchParams, VisualLine, grouping, matching, paragraphs_from_entries,
    tag_lines,
};
use crate::model::{ParagraphEntry, SpacingReport};

/// One inter-word gap compared across baseline and candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct GapRecord {
    /// 1-based index of the line in reading order.
    pub line_index: usize,
    /// Alignment label of the paragraph the line belongs to.
    pub alignment: String,
    /// Text of the word on the left of the gap.
    pub word: String,
    /// Width of the word on the left of the gap.
    pub width: f64,
    pub base_gap: f64,
    pub cand_gap: f64,
    /// cand_gap − base_gap.
    pub delta: f64,
}

/// Per-alignment aggregate over the collected gap records.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentSummary {
    pub alignment: String,
    pub count: usize,
    pub sum_delta: f64,
    pub sum_abs_delta: f64,
    pub width_sum: f64,
    /// sum_delta / width_sum: spacing pressure per unit of word width.
    /// Zero when the width sum is zero.
    pub delta_per_width: f64,
}

/// Aggregation result. `records` is ranked by |delta| descending; an
/// empty result is a successful outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightReport {
    pub records: Vec<GapRecord>,
    pub sum_delta: f64,
    pub sum_abs_delta: f64,
    pub summaries: Vec<AlignmentSummary>,
}

impl WeightReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The k records with the largest |delta|.
    pub fn top(&self, k: usize) -> &[GapRecord] {
        &self.records[..k.min(self.records.len())]
    }
}

/// Parses a comma-separated alignment filter, ignoring empty tokens.
pub fn parse_alignment_filter(spec: &str) -> HashSet<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs the full aggregation pipeline over a spacing report.
///
/// Lines are grouped with rounded keys (alignment maps are produced
/// independently of the extraction pass), paired positionally, tagged
/// with paragraph alignments, and reduced to ranked and per-alignment
/// statistics. Only a line-count mismatch between the two documents is
/// fatal; per-line word-count mismatches are skipped.
pub fn collect_weights(
    report: &SpacingReport,
    entries: &[ParagraphEntry],
    filter: &HashSet<String>,
    params: &MatchParams,
) -> Result<WeightReport> {
    let policy = GroupingPolicy::Rounded {
        digits: params.round_digits,
    };
    let base_lines = grouping::group_lines(report.base.first_page_words(), policy);
    let cand_lines = grouping::group_lines(report.candidate.first_page_words(), policy);
    let pairs = matching::pair_lines(&base_lines, &cand_lines)?;

    let paragraphs = paragraphs_from_entries(entries);
    let alignments = tag_lines(&base_lines, &paragraphs);

    let records = collect_gap_records(&pairs, &alignments, filter);
    Ok(WeightReport::from_records(records))
}

/// Builds one gap record per adjacent word pair of every included line.
///
/// Lines whose alignment is not in the filter are dropped. Lines with
/// mismatched word counts are skipped; the single-line inspection path
/// is the one that diagnoses those.
fn collect_gap_records(
    pairs: &[(&VisualLine, &VisualLine)],
    alignments: &[String],
    filter: &HashSet<String>,
) -> Vec<GapRecord> {
    let mut records = Vec::new();
    for (line_index, ((base, cand), alignment)) in pairs.iter().zip(alignments).enumerate() {
        if !filter.contains(alignment) {
            continue;
        }
        if base.words.len() != cand.words.len() {
            warn!(
                "skipping line {} (y={}): {} baseline words vs {} candidate words",
                line_index + 1,
                base.y,
                base.words.len(),
                cand.words.len()
            );
            continue;
        }
        let base_pairs = base.words.iter().tuple_windows();
        let cand_pairs = cand.words.iter().tuple_windows();
        for ((left_base, right_base), (left_cand, right_cand)) in base_pairs.zip(cand_pairs) {
            let base_gap = right_base.x - left_base.right();
            let cand_gap = right_cand.x - left_cand.right();
            records.push(GapRecord {
                line_index: line_index + 1,
                alignment: alignment.clone(),
                word: left_base.text.clone(),
                width: left_base.width,
                base_gap,
                cand_gap,
                delta: cand_gap - base_gap,
            });
        }
    }
    records
}

impl WeightReport {
    /// Ranks records by |delta| descending and computes global and
    /// per-alignment sums. Summary groups appear in the order their
    /// alignment first occurs in the ranked list.
    pub fn from_records(mut records: Vec<GapRecord>) -> Self {
        let sum_delta: f64 = records.iter().map(|r| r.delta).sum();
        let sum_abs_delta: f64 = records.iter().map(|r| r.delta.abs()).sum();

        records.sort_by(|a, b| b.delta.abs().total_cmp(&a.delta.abs()));

        let mut groups: IndexMap<String, Vec<&GapRecord>> = IndexMap::new();
        for record in &records {
            groups.entry(record.alignment.clone()).or_default().push(record);
        }
        let summaries = groups
            .into_iter()
            .map(|(alignment, group)| {
                let sum_delta: f64 = group.iter().map(|r| r.delta).sum();
                let sum_abs_delta: f64 = group.iter().map(|r| r.delta.abs()).sum();
                let width_sum: f64 = group.iter().map(|r| r.width).sum();
                let delta_per_width = if width_sum != 0.0 {
                    sum_delta / width_sum
                } else {
                    0.0
                };
                AlignmentSummary {
                    alignment,
                    count: group.len(),
                    sum_delta,
                    sum_abs_delta,
                    width_sum,
                    delta_per_width,
                }
            })
            .collect();

        Self {
            records,
            sum_delta,
            sum_abs_delta,
            summaries,
        }
    }
}
