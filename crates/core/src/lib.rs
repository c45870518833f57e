//! spacediff - spacing comparison between two renderings of one document.
//!
//! Consumes word-position geometry produced by an external extractor for a
//! baseline and a candidate rendering, groups words into visual lines,
//! matches lines across the two documents, and attributes horizontal
//! spacing differences to individual inter-word gaps and paragraph
//! alignment modes.

pub mod analysis;
pub mod error;
pub mod inspect;
pub mod layout;
pub mod model;

pub use error::{Result, SpacingError};
pub use layout::MatchParams;
