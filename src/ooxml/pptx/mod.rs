//! PowerPoint (.pptx) presentation support.
//!
//! Two halves share this module:
//!
//! - [`writer`]: build a presentation in memory and serialize it as an OPC
//!   package (`MutablePresentation`, `MutableSlide`, `MutableShape`).
//! - `Package` / `Presentation` / `Slide`: open a .pptx and inspect slides,
//!   backgrounds, text boxes, and tables.
//!
//! # Example
//!
//! ```rust,no_run
//! use slidewright::common::{RGBColor, inches};
//! use slidewright::ooxml::pptx::{MutablePresentation, Package, SlideBackground};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(SlideBackground::solid(RGBColor::WHITE));
//! slide
//!     .add_text_box("Hello", inches(1.0), inches(1.0), inches(4.0), inches(1.0))
//!     .font_size(28.0);
//! pres.save("hello.pptx")?;
//!
//! let package = Package::open("hello.pptx")?;
//! for slide in package.presentation()?.slides()? {
//!     println!("{:?}", slide.text_boxes()?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod presentation;
pub mod shapes;
pub mod slide;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{Alignment, ParagraphFormat, TextFormat, VerticalAnchor};
pub use package::Package;
pub use presentation::Presentation;
pub use shapes::{Table, TableRow};
pub use slide::Slide;
pub use writer::{MutablePresentation, MutableShape, MutableSlide, TableData};
