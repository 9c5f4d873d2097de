/// Office Open XML support.
///
/// The packaging layer (`opc`) and a PresentationML writer and reader
/// (`pptx`) built on it.
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
