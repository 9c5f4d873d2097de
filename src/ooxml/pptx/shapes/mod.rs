//! Read-side views of shapes found in slide XML.

pub mod table;

pub use table::{Table, TableCell, TableRow};

use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::BytesRef;

/// Resolve a character or predefined entity reference met inside `a:t`.
pub(crate) fn resolve_reference(e: &BytesRef<'_>) -> Result<String> {
    if let Some(ch) = e
        .resolve_char_ref()
        .map_err(|err| OoxmlError::Xml(err.to_string()))?
    {
        return Ok(ch.to_string());
    }

    let name = e.decode()?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| OoxmlError::Xml(format!("unknown entity: &{};", name)))
}
