//! Grouping of word records into visual lines by baseline position.

use std::collections::BTreeMap;

use log::debug;
use ordered_float::OrderedFloat;

use crate::model::WordRecord;

/// A visual line: the words sharing one baseline, ordered by x.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualLine {
    /// Representative baseline position (the grouping key).
    pub y: f64,
    /// Words on the line, ascending by left edge.
    pub words: Vec<WordRecord>,
}

impl VisualLine {
    /// Word texts in reading order.
    pub fn tokens(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }
}

/// How word baselines map to a grouping key.
///
/// Exact keys are appropriate when both sides come from the same
/// extraction pass; rounded keys absorb sub-point jitter when collating
/// against an independently produced paragraph map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupingPolicy {
    /// Group by the raw y value.
    Exact,
    /// Group by y rounded to the given number of decimal digits.
    Rounded { digits: u32 },
}

impl GroupingPolicy {
    fn key(self, y: f64) -> f64 {
        match self {
            GroupingPolicy::Exact => y,
            GroupingPolicy::Rounded { digits } => {
                let scale = 10f64.powi(digits as i32);
                (y * scale).round() / scale
            }
        }
    }
}

/// Partitions a page's words into visual lines, sorted ascending by key,
/// with each line's words sorted ascending by x. The coordinate
/// convention of the extractor is preserved, not interpreted.
pub fn group_lines(words: &[WordRecord], policy: GroupingPolicy) -> Vec<VisualLine> {
    let mut groups: BTreeMap<OrderedFloat<f64>, Vec<WordRecord>> = BTreeMap::new();
    for word in words {
        groups
            .entry(OrderedFloat(policy.key(word.y)))
            .or_default()
            .push(word.clone());
    }

    let lines: Vec<VisualLine> = groups
        .into_iter()
        .map(|(key, mut words)| {
            words.sort_by(|a, b| a.x.total_cmp(&b.x));
            VisualLine { y: key.0, words }
        })
        .collect();
    debug!("grouped {} words into {} lines", words.len(), lines.len());
    lines
}
