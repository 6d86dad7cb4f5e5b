//! Excel template output
//!
//! - Builder: sheet definitions → styled .xlsx workbook
//! - Style: header and body formats derived from a `StyleProfile`

mod builder;
mod style;

pub use builder::TemplateBuilder;
pub use style::{header_format, wrap_format};
