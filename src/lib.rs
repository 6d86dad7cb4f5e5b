//! Harkness Helper - spreadsheet template generator
//!
//! Builds the data-entry workbook used by the Harkness Helper grading
//! workflow: eight named sheets with styled, frozen and filterable header
//! rows, fixed column widths, default settings and prompt templates.
//!
//! # Example
//!
//! ```no_run
//! use harkness_template::excel::TemplateBuilder;
//! use harkness_template::types::TemplateConfig;
//!
//! let config = TemplateConfig::default();
//! let mut builder = TemplateBuilder::harkness(&config)?;
//! builder.save(&config.output_path)?;
//! # Ok::<(), harkness_template::error::TemplateError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod prompts;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use error::{TemplateError, TemplateResult};
pub use types::{ColumnSpec, SheetSpec, StyleProfile, TemplateConfig};
