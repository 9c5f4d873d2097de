//! Style primitives shared across shapes.

pub mod color;

pub use color::RGBColor;
