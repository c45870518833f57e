//! Data model for extractor geometry and alignment-map inputs.
//!
//! The external geometry extractor emits `{ pages: [ { words: [...] } ] }`
//! per document; the extraction driver wraps a baseline and a candidate
//! document together as `{ base, candidate }`. Alignment maps are keyed by
//! sample name and list the source paragraphs with their declared
//! alignment. All records are read once and never mutated.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpacingError};

/// A single word as placed on the page: text, left edge, baseline
/// position, and advance width, all in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl WordRecord {
    /// Right edge of the word (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// One page of extracted words sharing a coordinate space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub words: Vec<WordRecord>,
}

/// Extractor output for a single document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryDocument {
    pub pages: Vec<Page>,
}

impl GeometryDocument {
    /// Words of the first page, or an empty slice for an empty document.
    /// The analyses only consume page 0.
    pub fn first_page_words(&self) -> &[WordRecord] {
        self.pages.first().map(|p| p.words.as_slice()).unwrap_or(&[])
    }
}

/// Combined baseline/candidate geometry as written by the extraction
/// driver and consumed by both analysis tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingReport {
    pub base: GeometryDocument,
    pub candidate: GeometryDocument,
}

impl SpacingReport {
    /// Reads a spacing report from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

/// A source paragraph with its declared alignment label
/// (e.g. "left", "both", "distribute", "right", "center").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphEntry {
    pub text: String,
    pub alignment: String,
}

/// Alignment maps hold one paragraph list per sample name.
pub type AlignmentMap = HashMap<String, Vec<ParagraphEntry>>;

/// Reads an alignment map file and selects one sample's paragraph list.
pub fn load_alignment_sample(path: &Path, sample: &str) -> Result<Vec<ParagraphEntry>> {
    let data = std::fs::read(path)?;
    let mut map: AlignmentMap = serde_json::from_slice(&data)?;
    map.remove(sample)
        .ok_or_else(|| SpacingError::SampleNotFound(sample.to_string()))
}

/// Splits paragraph text into word tokens after un-escaping HTML
/// entities. Whitespace-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    html_escape::decode_html_entities(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
