use std::path::PathBuf;

//==============================================================================
// Sheet Model
//==============================================================================

/// A single column of a template sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub header: String,
    /// Display width in character units
    pub width: u16,
    /// Write data cells wrapped and top-aligned
    pub wrap_body: bool,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, width: u16) -> Self {
        Self {
            header: header.into(),
            width,
            wrap_body: false,
        }
    }
}

/// One worksheet of the template: header row, widths and default rows
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSpec {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    /// Default data rows written from row 2 onwards
    pub rows: Vec<Vec<String>>,
}

impl SheetSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Append columns from (header, width) pairs
    pub fn with_columns(mut self, columns: &[(&str, u16)]) -> Self {
        self.columns.extend(
            columns
                .iter()
                .map(|(header, width)| ColumnSpec::new(*header, *width)),
        );
        self
    }

    /// Mark the named column's data cells as wrapped text.
    /// The header must already exist (checked in debug builds).
    pub fn wrap_column(mut self, header: &str) -> Self {
        let column = self.columns.iter_mut().find(|c| c.header == header);
        debug_assert!(
            column.is_some(),
            "wrap_column: no column '{}' in sheet '{}'",
            header,
            self.name
        );
        if let Some(column) = column {
            column.wrap_body = true;
        }
        self
    }

    pub fn add_row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    pub fn widths(&self) -> Vec<u16> {
        self.columns.iter().map(|c| c.width).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

//==============================================================================
// Style Profile
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    General,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Thin,
    Medium,
    Thick,
}

/// Visual style applied to every header row, plus the body wrap style
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub font_name: String,
    pub font_size: f64,
    pub bold: bool,
    /// 0xRRGGBB
    pub font_color: u32,
    pub fill_color: u32,
    pub align: HorizontalAlign,
    pub valign: VerticalAlign,
    pub wrap: bool,
    pub border: BorderStyle,
    pub border_color: u32,
    /// Vertical alignment for wrapped data cells
    pub body_valign: VerticalAlign,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_size: 11.0,
            bold: true,
            font_color: 0xFFFFFF,
            fill_color: 0x4285F4,
            align: HorizontalAlign::Center,
            valign: VerticalAlign::Center,
            wrap: true,
            border: BorderStyle::Thin,
            border_color: 0xCCCCCC,
            body_valign: VerticalAlign::Top,
        }
    }
}

//==============================================================================
// Configuration
//==============================================================================

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "Harkness_Helper_Template.xlsx";

/// Generator configuration. Everything is fixed at compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateConfig {
    pub output_path: PathBuf,
    pub title: String,
    pub subject: String,
    pub author: String,
    /// Workbook creation date (year, month, day); fixed so reruns match
    pub created: (u16, u8, u8),
    pub style: StyleProfile,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            title: "Harkness Helper Template".to_string(),
            subject: "Harkness discussion grading workbook".to_string(),
            author: "Harkness Helper".to_string(),
            created: (2025, 1, 1),
            style: StyleProfile::default(),
        }
    }
}
