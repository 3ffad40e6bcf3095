//! Word (.docx) format
//!
//! Layout
//!
//!     One section holding a centered `Heading1` title paragraph followed by a single
//!     table spanning the full text width. The header row is bold, data rows are plain.
//!
//! Library
//!
//!     The OOXML package is produced by `docx-rs`; this module only maps the
//!     [`FieldTable`] onto its builder API. Page size is A4.

use crate::error::FormatError;
use crate::format::{Format, SerializedDocument};
use crate::table::FieldTable;
use docx_rs::{
    AlignmentType, Docx, PageOrientationType, Paragraph, Run, Style, StyleType, Table,
    TableCell, TableRow, WidthType,
};
use serde::Deserialize;
use std::io::Cursor;
use tracing::debug;

const HEADING_STYLE_ID: &str = "Heading1";

/// A4 in twentieths of a point.
const A4_SHORT_EDGE: u32 = 11906;
const A4_LONG_EDGE: u32 = 16838;

/// Table width in fiftieths of a percent.
const FULL_WIDTH_PCT: usize = 5000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    fn page_size(self) -> (u32, u32) {
        match self {
            PageOrientation::Portrait => (A4_SHORT_EDGE, A4_LONG_EDGE),
            PageOrientation::Landscape => (A4_LONG_EDGE, A4_SHORT_EDGE),
        }
    }

    fn to_docx(self) -> PageOrientationType {
        match self {
            PageOrientation::Portrait => PageOrientationType::Portrait,
            PageOrientation::Landscape => PageOrientationType::Landscape,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocxFormat {
    pub orientation: PageOrientation,
}

impl DocxFormat {
    pub fn new(orientation: PageOrientation) -> Self {
        Self { orientation }
    }

    /// Assemble and pack the document.
    pub fn to_bytes(&self, table: &FieldTable) -> Result<Vec<u8>, FormatError> {
        let (width, height) = self.orientation.page_size();
        let docx = Docx::new()
            .page_size(width, height)
            .page_orient(self.orientation.to_docx())
            .add_style(heading_style())
            .add_paragraph(title_paragraph(&table.title))
            .add_table(build_table(table));

        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).map_err(|e| {
            FormatError::SerializationError(format!("Failed to pack docx: {}", e))
        })?;

        let bytes = buffer.into_inner();
        debug!(rows = table.rows.len(), bytes = bytes.len(), "packed docx");
        Ok(bytes)
    }
}

impl Format for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Word document with a field table"
    }

    fn extension(&self) -> &str {
        "docx"
    }

    fn serialize(&self, table: &FieldTable) -> Result<SerializedDocument, FormatError> {
        self.to_bytes(table).map(SerializedDocument::Binary)
    }
}

fn heading_style() -> Style {
    Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("Heading 1")
        .bold()
        .size(32)
}

fn title_paragraph(title: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(title))
        .style(HEADING_STYLE_ID)
        .align(AlignmentType::Center)
}

fn build_table(table: &FieldTable) -> Table {
    let header = TableRow::new(
        table
            .header()
            .iter()
            .map(|text| text_cell(Run::new().add_text(*text).bold()))
            .collect(),
    );

    let rows = std::iter::once(header)
        .chain(table.rows.iter().map(|row| {
            TableRow::new(
                row.cells()
                    .iter()
                    .map(|text| text_cell(Run::new().add_text(*text)))
                    .collect(),
            )
        }))
        .collect();

    Table::new(rows).width(FULL_WIDTH_PCT, WidthType::Pct)
}

fn text_cell(run: Run) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsheet_parser::{FieldDescriptor, Requirement};

    #[test]
    fn test_packs_zip_archive() {
        let fields = vec![FieldDescriptor::new(
            "id",
            "Long",
            "Identifier",
            Requirement::Required,
        )];
        let table = FieldTable::from_fields(&fields, "A");
        let bytes = DocxFormat::default().to_bytes(&table).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_serializes_as_binary() {
        let table = FieldTable::from_fields(&[], "A");
        let doc = DocxFormat::default().serialize(&table).unwrap();
        assert!(doc.is_binary());
    }

    #[test]
    fn test_landscape_swaps_page_edges() {
        assert_eq!(
            PageOrientation::Landscape.page_size(),
            (A4_LONG_EDGE, A4_SHORT_EDGE)
        );
        assert_eq!(
            PageOrientation::default().page_size(),
            (A4_SHORT_EDGE, A4_LONG_EDGE)
        );
    }
}
