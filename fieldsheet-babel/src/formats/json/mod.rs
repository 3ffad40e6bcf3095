//! JSON format
//!
//! Serializes the whole [`FieldTable`] (title and rows) for scripting. Column headers are
//! implied by the row keys.

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::table::FieldTable;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Field table as JSON"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn serialize(&self, table: &FieldTable) -> Result<SerializedDocument, FormatError> {
        serde_json::to_string_pretty(table)
            .map(SerializedDocument::Text)
            .map_err(|e| {
                FormatError::SerializationError(format!("JSON serialization failed: {}", e))
            })
    }
}
