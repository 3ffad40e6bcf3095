//! Field table
//!
//! The intermediate representation every format serializes. One [`FieldRow`] per parsed
//! field, in parser order, under a fixed seven column header.

use fieldsheet_parser::FieldDescriptor;
use serde::Serialize;

/// Heading placed above the table.
pub const DEFAULT_TITLE: &str = "Danh sách trường dữ liệu";

pub const COLUMN_HEADERS: [&str; 7] = [
    "STT",
    "Tên trường",
    "Định dạng",
    "Length",
    "R/O",
    "Mô tả",
    "Note",
];

/// Length is never inferred from the declaration.
pub const LENGTH_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    /// `<label prefix>.<1-based index>`
    pub sequence: String,
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub length: String,
    /// `R` or `O`
    pub requirement: String,
    pub description: String,
    /// Left blank for whoever fills in the document.
    pub note: String,
}

impl FieldRow {
    fn from_field(field: &FieldDescriptor, label_prefix: &str, index: usize) -> Self {
        Self {
            sequence: format!("{}.{}", label_prefix, index),
            name: field.name.clone(),
            data_type: field.data_type.clone(),
            length: LENGTH_PLACEHOLDER.to_string(),
            requirement: field.requirement.marker().to_string(),
            description: field.description.clone(),
            note: String::new(),
        }
    }

    /// Cell texts in column order.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.sequence.as_str(),
            self.name.as_str(),
            self.data_type.as_str(),
            self.length.as_str(),
            self.requirement.as_str(),
            self.description.as_str(),
            self.note.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTable {
    pub title: String,
    pub rows: Vec<FieldRow>,
}

impl FieldTable {
    /// Build the table for `fields`. The label prefix is used verbatim.
    pub fn from_fields(fields: &[FieldDescriptor], label_prefix: &str) -> Self {
        let rows = fields
            .iter()
            .enumerate()
            .map(|(i, field)| FieldRow::from_field(field, label_prefix, i + 1))
            .collect();

        Self {
            title: DEFAULT_TITLE.to_string(),
            rows,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn header(&self) -> &'static [&'static str; 7] {
        &COLUMN_HEADERS
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsheet_parser::{parse_fields, Requirement};

    #[test]
    fn test_rows_follow_field_order() {
        let fields = vec![
            FieldDescriptor::new("name", "String", "Full name", Requirement::Required),
            FieldDescriptor::new("birthDate", "Date", " (dd/MM/yyyy)", Requirement::Optional),
        ];
        let table = FieldTable::from_fields(&fields, "F");

        assert_eq!(table.title, DEFAULT_TITLE);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0].cells(),
            ["F.1", "name", "String", "N/A", "R", "Full name", ""]
        );
        assert_eq!(
            table.rows[1].cells(),
            ["F.2", "birthDate", "Date", "N/A", "O", " (dd/MM/yyyy)", ""]
        );
    }

    #[test]
    fn test_label_prefix_is_not_validated() {
        let fields = parse_fields("private Long id;");
        assert_eq!(FieldTable::from_fields(&fields, "").rows[0].sequence, ".1");
        assert_eq!(
            FieldTable::from_fields(&fields, "2.3 Request").rows[0].sequence,
            "2.3 Request.1"
        );
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let table = FieldTable::from_fields(&[], "F");
        assert!(table.is_empty());
        assert_eq!(table.header()[0], "STT");
        assert_eq!(table.header()[6], "Note");
    }
}
