/// Open Packaging Conventions (OPC) implementation.
///
/// This module provides the packaging layer underneath PresentationML:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging via the `zip` crate
/// - Relationship and content-type parsing via `quick-xml`

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use rel::{Relationship, Relationships};
