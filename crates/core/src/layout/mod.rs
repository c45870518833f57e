//! Line-level layout analysis for spacing comparison.
//!
//! This module contains:
//! - Visual line grouping (exact and rounded y keys)
//! - Line matching across baseline/candidate documents
//! - Inter-word gap computation
//! - Paragraph alignment tagging

pub mod alignment;
pub mod gaps;
pub mod grouping;
pub mod matching;
pub mod params;

pub use alignment::*;
pub use gaps::*;
pub use grouping::*;
pub use matching::*;
pub use params::*;
