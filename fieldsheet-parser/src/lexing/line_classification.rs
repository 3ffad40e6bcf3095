//! Line Classification
//!
//! Each input line is tested against the rules in [`LINE_RULES`], in declaration order:
//!
//! 1. description   `@Schema(description = "...")`
//! 2. date format   `@JsonFormat(pattern = Const.NAME)`
//! 3. not null      `@NotNull`
//! 4. declaration   `private Type name;`
//!
//! Rules are not exclusive. A line such as `@NotNull private Long id;` yields both a
//! [`LineEvent::NotNull`] and a [`LineEvent::Declaration`], and the order above guarantees
//! that the annotation is seen before the declaration consumes the pending state.

use crate::fields::DateFormatHint;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// What a single line contributes to the field being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Quoted text of a `@Schema(description = "...")` annotation.
    Description(String),
    /// Pattern constant of a `@JsonFormat(pattern = ...)` annotation.
    DateFormat(DateFormatHint),
    /// A `@NotNull` marker.
    NotNull,
    /// A field declaration; the visibility qualifier is discarded.
    Declaration { data_type: String, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRule {
    Description,
    DateFormat,
    NotNull,
    Declaration,
}

/// Line rules as (rule, regex pattern) pairs.
///
/// Order matters: it is the order in which events from the same line are emitted.
const LINE_RULES: &[(LineRule, &str)] = &[
    (
        LineRule::Description,
        r#"@Schema\s*\(\s*description\s*=\s*"(?P<text>.+?)"\s*\)"#,
    ),
    (
        LineRule::DateFormat,
        r"@JsonFormat\s*\(\s*pattern\s*=\s*(?P<constant>Const\.\w+)\s*\)",
    ),
    (LineRule::NotNull, r"@NotNull"),
    (
        LineRule::Declaration,
        r"\b(?:private|protected|public)\s+(?P<type>\w+)\s+(?P<name>\w+);",
    ),
];

static COMPILED_RULES: Lazy<Vec<(LineRule, Regex)>> = Lazy::new(|| {
    LINE_RULES
        .iter()
        .map(|(rule, pattern)| (*rule, Regex::new(pattern).unwrap()))
        .collect()
});

impl LineRule {
    fn to_event(self, caps: &Captures<'_>) -> LineEvent {
        match self {
            LineRule::Description => LineEvent::Description(caps["text"].to_string()),
            LineRule::DateFormat => {
                LineEvent::DateFormat(DateFormatHint::from_constant(&caps["constant"]))
            }
            LineRule::NotNull => LineEvent::NotNull,
            LineRule::Declaration => LineEvent::Declaration {
                data_type: caps["type"].to_string(),
                name: caps["name"].to_string(),
            },
        }
    }
}

/// Classify one line of input.
///
/// Returns the events the line produces, in rule order. An empty vector means the line is
/// not part of the grammar and should be ignored.
pub fn classify_line(line: &str) -> Vec<LineEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    COMPILED_RULES
        .iter()
        .filter_map(|(rule, regex)| regex.captures(line).map(|caps| rule.to_event(&caps)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_unrelated_lines() {
        assert!(classify_line("").is_empty());
        assert!(classify_line("   \t").is_empty());
        assert!(classify_line("public class UserDto {").is_empty());
        assert!(classify_line("}").is_empty());
        assert!(classify_line("// private String commentedOut").is_empty());
    }

    #[test]
    fn test_description_annotation() {
        assert_eq!(
            classify_line(r#"  @Schema(description = "Full name")"#),
            vec![LineEvent::Description("Full name".to_string())]
        );
        assert_eq!(
            classify_line(r#"@Schema ( description="Mã khách hàng" )"#),
            vec![LineEvent::Description("Mã khách hàng".to_string())]
        );
    }

    #[test]
    fn test_date_format_annotation() {
        assert_eq!(
            classify_line("@JsonFormat(pattern = Const.DATE_TIME_FORMAT2)"),
            vec![LineEvent::DateFormat(DateFormatHint::DateTime)]
        );
        assert_eq!(
            classify_line("@JsonFormat(pattern = Const.ISO)"),
            vec![LineEvent::DateFormat(DateFormatHint::Unrecognized(
                "Const.ISO".to_string()
            ))]
        );
    }

    #[test]
    fn test_literal_date_pattern_is_not_a_hint() {
        assert!(classify_line(r#"@JsonFormat(pattern = "dd/MM/yyyy")"#).is_empty());
    }

    #[test]
    fn test_not_null_marker() {
        assert_eq!(classify_line("@NotNull"), vec![LineEvent::NotNull]);
        assert_eq!(
            classify_line(r#"@NotNull(message = "required")"#),
            vec![LineEvent::NotNull]
        );
    }

    #[test]
    fn test_declaration_line() {
        assert_eq!(
            classify_line("    private Integer age;"),
            vec![LineEvent::Declaration {
                data_type: "Integer".to_string(),
                name: "age".to_string(),
            }]
        );
        assert_eq!(
            classify_line("protected Long id;"),
            vec![LineEvent::Declaration {
                data_type: "Long".to_string(),
                name: "id".to_string(),
            }]
        );
    }

    #[test]
    fn test_unsupported_declaration_shapes() {
        assert!(classify_line("private List<String> tags;").is_empty());
        assert!(classify_line("private final String code;").is_empty());
        assert!(classify_line("private String name = \"x\";").is_empty());
        assert!(classify_line("String name;").is_empty());
    }

    #[test]
    fn test_annotation_and_declaration_on_one_line() {
        assert_eq!(
            classify_line("@NotNull private String code;"),
            vec![
                LineEvent::NotNull,
                LineEvent::Declaration {
                    data_type: "String".to_string(),
                    name: "code".to_string(),
                },
            ]
        );
    }
}
