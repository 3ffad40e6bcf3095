//! Format trait definition
//!
//! Every output format turns a [`FieldTable`] into a [`SerializedDocument`]. Formats are
//! write-only: nothing is ever parsed back into a table.

use crate::error::FormatError;
use crate::table::FieldTable;

/// Output of a format: text for previews, bytes for packaged documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializedDocument {
    Text(String),
    Binary(Vec<u8>),
}

impl SerializedDocument {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, SerializedDocument::Binary(_))
    }
}

/// Trait for field table formats
///
/// # Examples
///
/// ```ignore
/// struct CsvFormat;
///
/// impl Format for CsvFormat {
///     fn name(&self) -> &str {
///         "csv"
///     }
///
///     fn extension(&self) -> &str {
///         "csv"
///     }
///
///     fn serialize(&self, table: &FieldTable) -> Result<SerializedDocument, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "docx", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extension, without the leading dot
    fn extension(&self) -> &str;

    /// Serialize a field table
    fn serialize(&self, table: &FieldTable) -> Result<SerializedDocument, FormatError>;
}
