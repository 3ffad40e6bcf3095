//! Field list rendering
//!
//!     Turns parsed field descriptors into documents. The primary output is a Word file with
//!     a title and a seven column table (STT, Tên trường, Định dạng, Length, R/O, Mô tả, Note);
//!     Markdown and JSON renderings of the same table exist for previews and scripting.
//!
//! Architecture
//!
//!     - FieldTable: the intermediate representation, one row per field
//!     - Format trait: uniform interface for every output format
//!     - FormatRegistry: discovery and selection of formats by name
//!     - publish: serialize and write the artifact (or hand text back in memory)
//!
//!     This is a pure lib: no code here assumes a shell, prints to stdout or reads env vars.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # Write artifacts to disk
//!     ├── table.rs                # FieldTable / FieldRow
//!     ├── formats
//!     │   ├── docx                # docx-rs builder mapping
//!     │   ├── markdown
//!     │   └── json
//!     └── lib.rs
//!
//! Implementation Principles
//!
//!     The binary layout of .docx is entirely delegated to docx-rs; the docx format only maps
//!     the table onto its builder API.

pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;
pub mod table;

pub use error::FormatError;
pub use format::{Format, SerializedDocument};
pub use formats::PageOrientation;
pub use publish::{publish, publish_with, PublishArtifact, PublishResult, PublishSpec};
pub use registry::FormatRegistry;
pub use table::{FieldRow, FieldTable};

use fieldsheet_parser::FieldDescriptor;

/// Render `fields` to a portrait Word document, numbering rows as `<label_prefix>.<n>`.
pub fn render(fields: &[FieldDescriptor], label_prefix: &str) -> Result<Vec<u8>, FormatError> {
    let table = FieldTable::from_fields(fields, label_prefix);
    formats::DocxFormat::default().to_bytes(&table)
}
