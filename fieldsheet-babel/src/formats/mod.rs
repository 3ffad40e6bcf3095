//! Format implementations

pub mod docx;
pub mod json;
pub mod markdown;

pub use docx::{DocxFormat, PageOrientation};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
