//! # fieldsheet-parser
//!
//! Extracts field metadata from annotated Java field declarations.
//!
//! Input is free text, usually pasted straight out of a DTO class:
//!
//! ```text
//! @Schema(description = "Full name")
//! @NotNull
//! private String name;
//! @JsonFormat(pattern = Const.DATE_FORMAT2)
//! private Date birthDate;
//! ```
//!
//! Output is one [`FieldDescriptor`] per declaration line, in source order.
//!
//! File Layout
//!
//!     src
//!     ├── fields.rs                       # FieldDescriptor, Requirement, DateFormatHint
//!     ├── lexing
//!     │   └── line_classification.rs      # ordered line rules -> LineEvent
//!     ├── lexing.rs
//!     └── parsing.rs                      # fold over line events -> descriptors
//!
//! Parsing is permissive: lines that match no rule are skipped, and the parser never fails.
//! Annotations bind only to the next declaration line; anything pending when the input ends
//! is dropped.

pub mod fields;
pub mod lexing;
pub mod parsing;

pub use fields::{DateFormatHint, FieldDescriptor, Requirement};
pub use lexing::line_classification::{classify_line, LineEvent};
pub use parsing::{parse_fields, PendingAnnotations};
