//! Publishing: serialize a table and hand the artifact to the caller or the filesystem.

use crate::error::FormatError;
use crate::format::SerializedDocument;
use crate::registry::FormatRegistry;
use crate::table::FieldTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name used for Word exports when the caller does not pick one.
pub const DEFAULT_FILE_NAME: &str = "FieldList.docx";

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub table: &'a FieldTable,
    pub format: &'a str,
    pub output: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(table: &'a FieldTable, format: &'a str) -> Self {
        Self {
            table,
            format,
            output: None,
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publish with the default format set.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with(&FormatRegistry::with_defaults(), spec)
}

pub fn publish_with(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let serialized = registry.serialize(spec.table, spec.format)?;
    match serialized {
        SerializedDocument::Text(text) => write_or_return_text(text, spec.output),
        SerializedDocument::Binary(bytes) => write_binary(bytes, spec.output),
    }
}

fn write_or_return_text(
    text: String,
    output: Option<PathBuf>,
) -> Result<PublishResult, FormatError> {
    if let Some(path) = output {
        write_to_path(path, text.into_bytes()).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        })
    } else {
        Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        })
    }
}

fn write_binary(bytes: Vec<u8>, output: Option<PathBuf>) -> Result<PublishResult, FormatError> {
    let path = output.ok_or_else(|| {
        FormatError::SerializationError(
            "binary formats require an explicit output path".to_string(),
        )
    })?;
    write_to_path(path, bytes).map(|path| PublishResult {
        artifact: PublishArtifact::File(path),
    })
}

fn write_to_path(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf, FormatError> {
    match fs::write(&path, &bytes) {
        Ok(()) => {
            info!(path = %path.display(), bytes = bytes.len(), "wrote field list");
            Ok(path)
        }
        Err(source) => Err(FormatError::Io { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsheet_parser::parse_fields;
    use tempfile::tempdir;

    const SAMPLE: &str = "@Schema(description = \"Full name\")\nprivate String name;\n";

    fn sample_table() -> FieldTable {
        FieldTable::from_fields(&parse_fields(SAMPLE), "F")
    }

    #[test]
    fn publishes_to_memory_when_no_output_path() {
        let table = sample_table();
        let result = publish(PublishSpec::new(&table, "markdown")).expect("publish");
        match result.artifact {
            PublishArtifact::InMemory(content) => assert!(content.contains("Full name")),
            PublishArtifact::File(_) => panic!("expected in-memory artifact"),
        }
    }

    #[test]
    fn binary_format_requires_output_path() {
        let table = sample_table();
        let err = publish(PublishSpec::new(&table, "docx")).unwrap_err();
        assert!(matches!(err, FormatError::SerializationError(_)));
    }

    #[test]
    fn writes_docx_to_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let table = sample_table();
        let result =
            publish(PublishSpec::new(&table, "docx").with_output_path(&path)).expect("publish");
        assert_eq!(result.artifact, PublishArtifact::File(path.clone()));

        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn reports_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.md");
        let table = sample_table();
        let err = publish(PublishSpec::new(&table, "markdown").with_output_path(&path))
            .unwrap_err();
        match err {
            FormatError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
