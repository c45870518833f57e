//! Error types for spacing comparison.

use thiserror::Error;

/// Primary error type for spacing comparison operations.
#[derive(Error, Debug)]
pub enum SpacingError {
    #[error("line-index must be between 1 and {max}")]
    LineIndexOutOfRange { index: usize, max: usize },

    #[error("no baseline line near y={y} (tolerance {tolerance} pt)")]
    NoBaselineLine { y: f64, tolerance: f64 },

    #[error("no candidate line found near y={y} (tolerance {tolerance} pt)")]
    NoCandidateLine { y: f64, tolerance: f64 },

    #[error("line at y={y} has {base} baseline words but {cand} candidate words")]
    WordCountMismatch { y: f64, base: usize, cand: usize },

    #[error("line count differs between baseline and candidate: {base} vs {cand}")]
    LineCountMismatch { base: usize, cand: usize },

    #[error("sample not found in alignment map: {0}")]
    SampleNotFound(String),

    #[error("geometry extractor exited with {status}")]
    ExtractorFailed { status: std::process::ExitStatus },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for SpacingError.
pub type Result<T> = std::result::Result<T, SpacingError>;
