//! Sheet definitions for the Harkness Helper workbook
//!
//! Header names must match what the downstream sheet initializer expects,
//! so every list here is reproduced exactly and in order.

use crate::prompts::PROMPTS;
use crate::types::SheetSpec;

/// Sheet names in workbook order
pub const SHEET_NAMES: [&str; 8] = [
    "Settings",
    "Discussions",
    "Students",
    "Transcripts",
    "SpeakerMap",
    "StudentReports",
    "Prompts",
    "Courses",
];

/// Default Settings rows (setting_key, setting_value)
pub const SETTINGS_DEFAULTS: [(&str, &str); 12] = [
    ("mode", "group"),
    ("distribute_email", "true"),
    ("distribute_canvas", "false"),
    ("grade_scale", "0-100"),
    ("teacher_email", ""),
    ("teacher_name", ""),
    ("email_subject_template", "Harkness Discussion Report - {date}"),
    ("gemini_model", "gemini-2.0-flash"),
    ("elevenlabs_model", "scribe_v2"),
    ("canvas_course_id", ""),
    ("canvas_base_url", ""),
    ("canvas_item_type", "assignment"),
];

pub fn settings() -> SheetSpec {
    let mut sheet =
        SheetSpec::new("Settings").with_columns(&[("setting_key", 30), ("setting_value", 50)]);
    for (key, value) in SETTINGS_DEFAULTS {
        sheet.add_row([key, value]);
    }
    sheet
}

pub fn discussions() -> SheetSpec {
    SheetSpec::new("Discussions").with_columns(&[
        ("status", 12),
        ("next_step", 30),
        ("date", 12),
        ("section", 12),
        ("course", 14),
        ("grade", 8),
        ("approved", 10),
        ("group_feedback", 40),
        ("canvas_assignment_id", 18),
        ("canvas_item_type", 14),
        ("discussion_id", 18),
        ("audio_file_id", 18),
        ("error_message", 30),
        ("created_at", 18),
        ("updated_at", 18),
    ])
}

pub fn students() -> SheetSpec {
    SheetSpec::new("Students").with_columns(&[
        ("name", 22),
        ("email", 28),
        ("section", 14),
        ("course", 14),
        ("canvas_user_id", 14),
        ("student_id", 18),
    ])
}

pub fn transcripts() -> SheetSpec {
    SheetSpec::new("Transcripts").with_columns(&[
        ("discussion_id", 18),
        ("raw_transcript", 60),
        ("speaker_map", 30),
        ("named_transcript", 60),
        ("created_at", 18),
        ("updated_at", 18),
    ])
}

pub fn speaker_map() -> SheetSpec {
    SheetSpec::new("SpeakerMap").with_columns(&[
        ("discussion_id", 18),
        ("speaker_label", 14),
        ("suggested_name", 20),
        ("student_name", 20),
        ("confirmed", 10),
    ])
}

pub fn student_reports() -> SheetSpec {
    SheetSpec::new("StudentReports").with_columns(&[
        ("student_name", 20),
        ("grade", 8),
        ("approved", 10),
        ("sent", 8),
        ("feedback", 40),
        ("discussion_id", 18),
        ("transcript_contributions", 40),
        ("participation_summary", 30),
        ("student_id", 18),
        ("report_id", 18),
        ("created_at", 18),
        ("updated_at", 18),
    ])
}

pub fn prompts() -> SheetSpec {
    let mut sheet = SheetSpec::new("Prompts")
        .with_columns(&[("prompt_name", 28), ("prompt_text", 100)])
        .wrap_column("prompt_text");
    for p in &PROMPTS {
        sheet.add_row([p.name, p.text]);
    }
    sheet
}

pub fn courses() -> SheetSpec {
    SheetSpec::new("Courses").with_columns(&[
        ("course_name", 24),
        ("canvas_course_id", 18),
        ("canvas_base_url", 36),
        ("canvas_item_type", 14),
    ])
}

/// All eight sheets in workbook order
pub fn harkness_sheets() -> Vec<SheetSpec> {
    vec![
        settings(),
        discussions(),
        students(),
        transcripts(),
        speaker_map(),
        student_reports(),
        prompts(),
        courses(),
    ]
}
