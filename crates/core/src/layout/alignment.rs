//! Alignment tagging: assigns each visual line the declared alignment of
//! the source paragraph it renders.
//!
//! The tagger walks a cursor through the paragraph token stream and
//! matches each line's word texts against the tokens at the cursor. Line
//! wrapping splits a paragraph across several lines, so a line may
//! consume only part of a paragraph. This is a best-effort heuristic: a
//! single dropped or extra token can desynchronize it, in which case the
//! affected lines are labeled [`UNKNOWN_ALIGNMENT`] and matching may
//! recover at a later paragraph boundary.

use log::warn;

use crate::layout::grouping::VisualLine;
use crate::model::{self, ParagraphEntry};

/// Sentinel label for lines no paragraph tokens could be matched to.
pub const UNKNOWN_ALIGNMENT: &str = "unknown";

/// A source paragraph reduced to its alignment label and word tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub alignment: String,
    pub tokens: Vec<String>,
}

/// Tokenizes alignment-map entries, dropping paragraphs whose text
/// yields no tokens.
pub fn paragraphs_from_entries(entries: &[ParagraphEntry]) -> Vec<Paragraph> {
    entries
        .iter()
        .filter_map(|entry| {
            let tokens = model::tokenize(&entry.text);
            (!tokens.is_empty()).then(|| Paragraph {
                alignment: entry.alignment.clone(),
                tokens,
            })
        })
        .collect()
}

/// Cursor into the paragraph token stream.
///
/// The cursor is either within a paragraph (paragraph index plus token
/// offset) or past the end of all paragraphs. A failed match leaves the
/// cursor unchanged so a later line can still realign.
#[derive(Debug)]
pub struct AlignmentCursor<'a> {
    paragraphs: &'a [Paragraph],
    para: usize,
    token: usize,
}

impl<'a> AlignmentCursor<'a> {
    pub fn new(paragraphs: &'a [Paragraph]) -> Self {
        Self {
            paragraphs,
            para: 0,
            token: 0,
        }
    }

    /// True once every paragraph's tokens have been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.paragraphs[self.para.min(self.paragraphs.len())..]
            .iter()
            .enumerate()
            .all(|(i, p)| {
                let offset = if i == 0 { self.token } else { 0 };
                offset >= p.tokens.len()
            })
    }

    /// Matches one line's word texts and returns the alignment label.
    ///
    /// Exact-slice match at the cursor consumes the tokens and keeps the
    /// cursor inside the paragraph. When that fails, a line equal to the
    /// paragraph's token prefix is taken as the paragraph's final
    /// rendered line: the paragraph's alignment is assigned and the
    /// cursor moves to the next paragraph. The consumed length is kept
    /// as the offset into that next paragraph, so its leading tokens are
    /// treated as already consumed.
    pub fn tag_line(&mut self, line_tokens: &[&str]) -> &'a str {
        let paragraphs = self.paragraphs;

        // Skip paragraphs already fully consumed.
        while self.para < paragraphs.len() && self.token >= paragraphs[self.para].tokens.len() {
            self.para += 1;
            self.token = 0;
        }
        if self.para >= paragraphs.len() {
            return UNKNOWN_ALIGNMENT;
        }

        let paragraph = &paragraphs[self.para];
        let remaining = &paragraph.tokens[self.token..];
        if slice_matches(remaining, line_tokens) {
            self.token += line_tokens.len();
            return &paragraph.alignment;
        }
        if slice_matches(&paragraph.tokens, line_tokens) {
            self.para += 1;
            self.token = line_tokens.len();
            return &paragraph.alignment;
        }
        UNKNOWN_ALIGNMENT
    }
}

/// True when `tokens` starts with exactly `line_tokens`.
fn slice_matches(tokens: &[String], line_tokens: &[&str]) -> bool {
    tokens.len() >= line_tokens.len()
        && tokens[..line_tokens.len()]
            .iter()
            .map(String::as_str)
            .eq(line_tokens.iter().copied())
}

/// Assigns one alignment label per visual line, in reading order.
pub fn tag_lines(lines: &[VisualLine], paragraphs: &[Paragraph]) -> Vec<String> {
    let mut cursor = AlignmentCursor::new(paragraphs);
    lines
        .iter()
        .map(|line| {
            let label = cursor.tag_line(&line.tokens());
            if label == UNKNOWN_ALIGNMENT {
                warn!("no paragraph tokens matched line at y={}", line.y);
            }
            label.to_string()
        })
        .collect()
}
