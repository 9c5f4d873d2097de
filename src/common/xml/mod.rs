//! XML helpers used when generating part content.

mod escape;

pub use escape::escape_xml;
