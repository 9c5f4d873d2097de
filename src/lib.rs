//! Slidewright - PowerPoint (.pptx) generation in pure Rust
//!
//! This crate writes Office Open XML presentations and ships one concrete
//! deck built on top of that writer: a company-profile comparison of the
//! anti-GD2 antibodies Danyelza (naxitamab) and Unituxin (dinutuximab).
//!
//! # Layers
//!
//! - [`ooxml::opc`]: Open Packaging Conventions (parts, relationships,
//!   content types, ZIP container).
//! - [`ooxml::pptx`]: PresentationML writer plus a small reader for
//!   inspecting written files.
//! - [`deck`]: the fifteen-slide deck and its layout helpers.
//! - [`common`]: colors, EMU conversions, XML escaping.
//!
//! # Example - Writing a presentation
//!
//! ```no_run
//! use slidewright::common::{RGBColor, inches};
//! use slidewright::ooxml::pptx::{Alignment, MutablePresentation, SlideBackground};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(SlideBackground::solid(RGBColor::new(0x0F, 0x1F, 0x33)));
//! slide
//!     .add_text_box("Thank You", inches(1.0), inches(3.1), inches(11.333), inches(1.0))
//!     .word_wrap(true)
//!     .font_size(44.0)
//!     .bold(true)
//!     .color(RGBColor::WHITE)
//!     .alignment(Alignment::Center);
//! pres.save("thanks.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading it back
//!
//! ```no_run
//! use slidewright::ooxml::pptx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("thanks.pptx")?;
//! let pres = pkg.presentation()?;
//! for slide in pres.slides()? {
//!     println!("{:?} {:?}", slide.background_color()?, slide.text_boxes()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod ooxml;
