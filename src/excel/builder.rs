//! Template workbook builder

use crate::error::{TemplateError, TemplateResult};
use crate::schema;
use crate::types::{SheetSpec, TemplateConfig};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Builds the template workbook sheet by sheet, then writes it to disk
pub struct TemplateBuilder {
    workbook: Workbook,
    header_format: Format,
    wrap_format: Format,
    sheet_names: Vec<String>,
}

impl TemplateBuilder {
    /// Create an empty builder with document properties and styles from `config`
    pub fn new(config: &TemplateConfig) -> TemplateResult<Self> {
        let (year, month, day) = config.created;
        let created = ExcelDateTime::from_ymd(year, month, day)?;
        let properties = DocProperties::new()
            .set_title(&config.title)
            .set_subject(&config.subject)
            .set_author(&config.author)
            .set_creation_datetime(&created);

        let mut workbook = Workbook::new();
        workbook.set_properties(&properties);

        Ok(Self {
            workbook,
            header_format: super::style::header_format(&config.style),
            wrap_format: super::style::wrap_format(&config.style),
            sheet_names: Vec::new(),
        })
    }

    /// Builder populated with every Harkness Helper sheet
    pub fn harkness(config: &TemplateConfig) -> TemplateResult<Self> {
        let mut builder = Self::new(config)?;
        for sheet in schema::harkness_sheets() {
            builder.add_sheet(&sheet)?;
        }
        Ok(builder)
    }

    /// Names of the sheets added so far, in order
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Add one worksheet: styled header row, frozen header, auto-filter over
    /// the header range, column widths, then default rows from row 2.
    pub fn add_sheet(&mut self, sheet: &SheetSpec) -> TemplateResult<()> {
        Self::check_sheet(sheet, &self.sheet_names)?;

        let mut worksheet = Worksheet::new();
        worksheet.set_name(&sheet.name)?;

        for (col, column) in sheet.columns.iter().enumerate() {
            let col = Self::column_index(sheet, col)?;
            worksheet.write_string_with_format(0, col, &column.header, &self.header_format)?;
            worksheet.set_column_width(col, column.width)?;
        }

        let last_col = Self::column_index(sheet, sheet.column_count() - 1)?;
        worksheet.set_freeze_panes(1, 0)?;
        worksheet.autofilter(0, 0, 0, last_col)?;

        for (idx, row) in sheet.rows.iter().enumerate() {
            let excel_row = (idx + 1) as u32; // row 0 is the header
            for (col, (value, column)) in row.iter().zip(&sheet.columns).enumerate() {
                let col = Self::column_index(sheet, col)?;
                // Empty defaults stay as empty cells
                if value.is_empty() {
                    continue;
                }
                if column.wrap_body {
                    worksheet.write_string_with_format(excel_row, col, value, &self.wrap_format)?;
                } else {
                    worksheet.write_string(excel_row, col, value)?;
                }
            }
        }

        self.workbook.push_worksheet(worksheet);
        debug!(
            sheet = %sheet.name,
            columns = sheet.column_count(),
            rows = sheet.rows.len(),
            "added sheet"
        );
        self.sheet_names.push(sheet.name.clone());
        Ok(())
    }

    /// Serialize the workbook to `path`.
    ///
    /// The bytes go to a uniquely named temporary file in the target's
    /// directory, which is then renamed into place. A failure never leaves a
    /// partial file at `path`, and the temporary file is removed on drop.
    pub fn save(&mut self, path: &Path) -> TemplateResult<()> {
        let buffer = self.to_buffer()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&buffer)?;
        tmp.persist(path).map_err(|e| TemplateError::Io(e.error))?;

        info!(
            path = %path.display(),
            sheets = self.sheet_names.len(),
            bytes = buffer.len(),
            "saved template"
        );
        Ok(())
    }

    /// Serialize the workbook to an in-memory .xlsx buffer
    pub fn to_buffer(&mut self) -> TemplateResult<Vec<u8>> {
        Ok(self.workbook.save_to_buffer()?)
    }

    fn column_index(sheet: &SheetSpec, col: usize) -> TemplateResult<u16> {
        u16::try_from(col).map_err(|_| {
            TemplateError::Schema(format!(
                "Sheet '{}' column {} is out of range",
                sheet.name,
                col + 1
            ))
        })
    }

    fn check_sheet(sheet: &SheetSpec, existing: &[String]) -> TemplateResult<()> {
        if existing.iter().any(|name| name == &sheet.name) {
            return Err(TemplateError::Schema(format!(
                "Duplicate sheet name '{}'",
                sheet.name
            )));
        }

        if sheet.columns.is_empty() {
            return Err(TemplateError::Schema(format!(
                "Sheet '{}' has no columns",
                sheet.name
            )));
        }

        Self::column_index(sheet, sheet.column_count() - 1)?;

        for (idx, row) in sheet.rows.iter().enumerate() {
            if row.len() != sheet.column_count() {
                return Err(TemplateError::Schema(format!(
                    "Sheet '{}' row {} has {} values, expected {}",
                    sheet.name,
                    idx + 2,
                    row.len(),
                    sheet.column_count()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnSpec;

    fn builder() -> TemplateBuilder {
        TemplateBuilder::new(&TemplateConfig::default()).unwrap()
    }

    #[test]
    fn test_harkness_adds_all_sheets() {
        let builder = TemplateBuilder::harkness(&TemplateConfig::default()).unwrap();
        assert_eq!(builder.sheet_names(), schema::SHEET_NAMES);
    }

    #[test]
    fn test_duplicate_sheet_rejected() {
        let mut builder = builder();
        let sheet = SheetSpec::new("Courses").with_columns(&[("course_name", 24)]);
        builder.add_sheet(&sheet).unwrap();

        let err = builder.add_sheet(&sheet).unwrap_err();
        assert!(matches!(err, TemplateError::Schema(_)));
        assert_eq!(builder.sheet_names().len(), 1);
    }

    #[test]
    fn test_short_row_rejected() {
        let mut sheet = SheetSpec::new("Settings").with_columns(&[("k", 30), ("v", 50)]);
        sheet.add_row(["mode"]);

        let err = builder().add_sheet(&sheet).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Schema error: Sheet 'Settings' row 2 has 1 values, expected 2"
        );
    }

    #[test]
    fn test_sheet_without_columns_rejected() {
        let err = builder().add_sheet(&SheetSpec::new("Empty")).unwrap_err();
        assert!(matches!(err, TemplateError::Schema(_)));
    }

    #[test]
    fn test_too_many_columns_rejected() {
        let mut sheet = SheetSpec::new("Wide");
        sheet.columns = (0..70_000)
            .map(|i| ColumnSpec::new(format!("c{}", i), 8))
            .collect();

        let mut builder = builder();
        let err = builder.add_sheet(&sheet).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Schema error: Sheet 'Wide' column 70000 is out of range"
        );
        assert!(builder.sheet_names().is_empty());
    }
}
