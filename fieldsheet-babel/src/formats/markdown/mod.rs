//! Markdown format
//!
//! A plain-text preview of the Word export: the title as a level one heading followed by a
//! pipe table with the same columns and rows. Meant for terminals and pull request
//! descriptions, so column widths are padded for readability.

mod serializer;

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::table::FieldTable;

pub use serializer::serialize_to_markdown;

pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown pipe table preview"
    }

    fn extension(&self) -> &str {
        "md"
    }

    fn serialize(&self, table: &FieldTable) -> Result<SerializedDocument, FormatError> {
        Ok(SerializedDocument::Text(serialize_to_markdown(table)))
    }
}
