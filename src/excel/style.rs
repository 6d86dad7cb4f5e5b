//! StyleProfile → rust_xlsxwriter formats

use crate::types::{BorderStyle, HorizontalAlign, StyleProfile, VerticalAlign};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Format for every header cell
pub fn header_format(style: &StyleProfile) -> Format {
    let mut format = Format::new()
        .set_font_name(&style.font_name)
        .set_font_size(style.font_size)
        .set_font_color(Color::RGB(style.font_color))
        .set_background_color(Color::RGB(style.fill_color));

    if style.bold {
        format = format.set_bold();
    }

    format = match style.align {
        HorizontalAlign::General => format,
        HorizontalAlign::Left => format.set_align(FormatAlign::Left),
        HorizontalAlign::Center => format.set_align(FormatAlign::Center),
        HorizontalAlign::Right => format.set_align(FormatAlign::Right),
    };
    format = format.set_align(vertical_align(style.valign));

    if style.wrap {
        format = format.set_text_wrap();
    }

    if style.border != BorderStyle::None {
        format = format
            .set_border(border_style(style.border))
            .set_border_color(Color::RGB(style.border_color));
    }

    format
}

/// Format for data cells in wrapped columns
pub fn wrap_format(style: &StyleProfile) -> Format {
    Format::new()
        .set_text_wrap()
        .set_align(vertical_align(style.body_valign))
}

fn vertical_align(align: VerticalAlign) -> FormatAlign {
    match align {
        VerticalAlign::Top => FormatAlign::Top,
        VerticalAlign::Center => FormatAlign::VerticalCenter,
        VerticalAlign::Bottom => FormatAlign::Bottom,
    }
}

fn border_style(style: BorderStyle) -> FormatBorder {
    match style {
        BorderStyle::None => FormatBorder::None,
        BorderStyle::Thin => FormatBorder::Thin,
        BorderStyle::Medium => FormatBorder::Medium,
        BorderStyle::Thick => FormatBorder::Thick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_format_matches_manual_build() {
        let expected = Format::new()
            .set_font_name("Arial")
            .set_font_size(11)
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_background_color(Color::RGB(0x4285F4))
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::RGB(0xCCCCCC));
        assert_eq!(header_format(&StyleProfile::default()), expected);
    }

    #[test]
    fn test_no_border_leaves_border_unset() {
        let style = StyleProfile {
            border: BorderStyle::None,
            ..StyleProfile::default()
        };
        let format = header_format(&style);
        assert_ne!(format, header_format(&StyleProfile::default()));
    }

    #[test]
    fn test_wrap_format() {
        let expected = Format::new().set_text_wrap().set_align(FormatAlign::Top);
        assert_eq!(wrap_format(&StyleProfile::default()), expected);
    }
}
