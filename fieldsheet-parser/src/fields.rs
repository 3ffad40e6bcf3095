//! Field descriptor types
//!
//! These are the only values the parser produces. They are plain data, cloned freely and
//! serialized as-is by the JSON export.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a field was marked with `@NotNull`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Optional,
}

impl Requirement {
    /// The single-letter code used in the R/O column.
    pub fn marker(self) -> &'static str {
        match self {
            Requirement::Required => "R",
            Requirement::Optional => "O",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Requirement::Required)
    }
}

impl From<bool> for Requirement {
    fn from(required: bool) -> Self {
        if required {
            Requirement::Required
        } else {
            Requirement::Optional
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// The `Const.*` pattern named by a `@JsonFormat` annotation.
///
/// Only the two date layouts below produce a description suffix. Any other constant is
/// kept as [`DateFormatHint::Unrecognized`] and contributes nothing to the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormatHint {
    /// `Const.DATE_FORMAT2`
    Date,
    /// `Const.DATE_TIME_FORMAT2`
    DateTime,
    Unrecognized(String),
}

impl DateFormatHint {
    pub const DATE_CONSTANT: &'static str = "Const.DATE_FORMAT2";
    pub const DATE_TIME_CONSTANT: &'static str = "Const.DATE_TIME_FORMAT2";

    /// Map a constant reference such as `Const.DATE_FORMAT2` to a hint.
    pub fn from_constant(constant: &str) -> Self {
        match constant {
            Self::DATE_CONSTANT => DateFormatHint::Date,
            Self::DATE_TIME_CONSTANT => DateFormatHint::DateTime,
            other => DateFormatHint::Unrecognized(other.to_string()),
        }
    }

    /// Text appended to the field description, if any.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            DateFormatHint::Date => Some(" (dd/MM/yyyy)"),
            DateFormatHint::DateTime => Some(" (dd/MM/yyyy HH:mm:ss)"),
            DateFormatHint::Unrecognized(_) => None,
        }
    }
}

/// One parsed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub description: String,
    pub requirement: Requirement,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        description: impl Into<String>,
        requirement: Requirement,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            description: description.into(),
            requirement,
        }
    }

    pub fn is_required(&self) -> bool {
        self.requirement.is_required()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_markers() {
        assert_eq!(Requirement::Required.marker(), "R");
        assert_eq!(Requirement::Optional.marker(), "O");
        assert_eq!(Requirement::from(true), Requirement::Required);
        assert_eq!(Requirement::from(false), Requirement::Optional);
    }

    #[test]
    fn test_hint_from_known_constants() {
        assert_eq!(
            DateFormatHint::from_constant("Const.DATE_FORMAT2"),
            DateFormatHint::Date
        );
        assert_eq!(
            DateFormatHint::from_constant("Const.DATE_TIME_FORMAT2"),
            DateFormatHint::DateTime
        );
    }

    #[test]
    fn test_unrecognized_hint_has_no_suffix() {
        let hint = DateFormatHint::from_constant("Const.TIME_FORMAT");
        assert_eq!(
            hint,
            DateFormatHint::Unrecognized("Const.TIME_FORMAT".to_string())
        );
        assert_eq!(hint.suffix(), None);
    }

    #[test]
    fn test_descriptor_serializes_type_key() {
        let field = FieldDescriptor::new("id", "Long", "", Requirement::Required);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "Long");
        assert_eq!(json["requirement"], "required");
    }
}
