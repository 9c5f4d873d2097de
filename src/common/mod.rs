//! Common types and utilities shared by the writer, the reader, and the deck.
//!
//! Colors, length units, and XML escaping live here so that the OOXML layer
//! and the deck content agree on a single vocabulary.

pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use style::RGBColor;
pub use unit::{EMUS_PER_INCH, EMUS_PER_PT, inches, pt};
