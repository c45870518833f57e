//! Matching parameters.
//!
//! Contains MatchParams struct for controlling line matching tolerances.

/// Parameters for matching lines within and across geometry documents.
///
/// Acceptable jitter depends on the numeric precision of the upstream
/// extractor, so the tolerances are kept configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchParams {
    /// Maximum distance (points) between a requested y and the nearest
    /// baseline line for the request to resolve.
    pub line_tolerance: f64,

    /// Maximum distance (points) between a resolved baseline line and the
    /// nearest candidate line. Looser than `line_tolerance` because
    /// rendering differences compound across the two documents.
    pub pair_tolerance: f64,

    /// Decimal digits to round y to when grouping lines for collation
    /// against an independently produced alignment map.
    pub round_digits: u32,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            line_tolerance: 0.5,
            pair_tolerance: 1.5,
            round_digits: 3,
        }
    }
}
