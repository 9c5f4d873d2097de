//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{MutableShape, ShapeType};
pub use slide::MutableSlide;
pub use table::{TableCell, TableData};
pub use text::{Paragraph, TextFrame};
