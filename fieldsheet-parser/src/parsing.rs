//! Parsing
//!
//! Folds the per-line events from [`classify_line`] into field descriptors. The only state
//! carried between lines is a [`PendingAnnotations`] accumulator, which a declaration line
//! always drains, so annotations never leak from one field into the next.

use crate::fields::{DateFormatHint, FieldDescriptor, Requirement};
use crate::lexing::line_classification::{classify_line, LineEvent};
use tracing::{debug, trace};

/// Annotations seen since the last declaration line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingAnnotations {
    pub description: Option<String>,
    pub date_format: Option<DateFormatHint>,
    pub not_null: bool,
}

impl PendingAnnotations {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.date_format.is_none() && !self.not_null
    }

    /// Record an annotation event. Declarations are handled by [`Self::bind`].
    ///
    /// A repeated description or format annotation replaces the earlier one.
    pub fn absorb(&mut self, event: LineEvent) {
        match event {
            LineEvent::Description(text) => self.description = Some(text),
            LineEvent::DateFormat(hint) => self.date_format = Some(hint),
            LineEvent::NotNull => self.not_null = true,
            LineEvent::Declaration { .. } => {}
        }
    }

    /// Consume the pending annotations into a descriptor for the declared field,
    /// leaving the accumulator empty.
    pub fn bind(&mut self, data_type: String, name: String) -> FieldDescriptor {
        let PendingAnnotations {
            description,
            date_format,
            not_null,
        } = std::mem::take(self);

        let mut description = description.unwrap_or_default();
        if let Some(suffix) = date_format.as_ref().and_then(DateFormatHint::suffix) {
            description.push_str(suffix);
        }

        FieldDescriptor {
            name,
            data_type,
            description,
            requirement: Requirement::from(not_null),
        }
    }
}

/// Parse annotated field declarations into descriptors, in source order.
///
/// Never fails: lines outside the grammar are skipped. Annotations left pending when the
/// input ends produce nothing.
pub fn parse_fields(source: &str) -> Vec<FieldDescriptor> {
    let (fields, pending) = source.lines().flat_map(classify_line).fold(
        (Vec::new(), PendingAnnotations::default()),
        |(mut fields, mut pending), event| {
            match event {
                LineEvent::Declaration { data_type, name } => {
                    let field = pending.bind(data_type, name);
                    trace!(name = %field.name, data_type = %field.data_type, "parsed field");
                    fields.push(field);
                }
                annotation => pending.absorb(annotation),
            }
            (fields, pending)
        },
    );

    if !pending.is_empty() {
        debug!(?pending, "dropping annotations with no following declaration");
    }
    debug!(count = fields.len(), "parsed field declarations");
    fields
}
