//! Prompt templates stored in the Prompts sheet
//!
//! Each prompt carries `{placeholder}` tokens that a downstream caller
//! substitutes before sending the text to a text-generation service.

use regex::Regex;
use std::sync::OnceLock;

/// A named prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub name: &'static str,
    pub text: &'static str,
    /// Tokens the downstream caller relies on
    pub required: &'static [&'static str],
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-z][a-z0-9_]*)\}").expect("valid placeholder regex"))
}

impl Prompt {
    /// Distinct `{snake_case}` tokens in order of first appearance
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut found: Vec<&'static str> = Vec::new();
        for caps in placeholder_regex().captures_iter(self.text) {
            if let Some(m) = caps.get(1) {
                if !found.contains(&m.as_str()) {
                    found.push(m.as_str());
                }
            }
        }
        found
    }

    /// Required tokens that do not occur in the text
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        let present = self.placeholders();
        self.required
            .iter()
            .copied()
            .filter(|token| !present.contains(token))
            .collect()
    }
}

/// Look up a prompt by name
pub fn prompt(name: &str) -> Option<&'static Prompt> {
    PROMPTS.iter().find(|p| p.name == name)
}

pub static PROMPTS: [Prompt; 3] = [
    Prompt {
        name: "SPEAKER_IDENTIFICATION",
        text: SPEAKER_IDENTIFICATION,
        required: &["transcript"],
    },
    Prompt {
        name: "GROUP_FEEDBACK",
        text: GROUP_FEEDBACK,
        required: &["grade", "transcript"],
    },
    Prompt {
        name: "INDIVIDUAL_FEEDBACK",
        text: INDIVIDUAL_FEEDBACK,
        required: &["student_name", "grade", "contributions", "transcript"],
    },
];

const SPEAKER_IDENTIFICATION: &str = r#"You are analyzing the beginning of a classroom Harkness discussion recording.

Students typically introduce themselves at the start. Listen for patterns like:
- "Hi, I'm [name]"
- "My name is [name]"
- "This is [name]"
- "[Name] here"
- Other natural introductions

Analyze this transcript excerpt and identify which speaker label corresponds to which student name.

IMPORTANT RULES:
1. Only include speakers you can confidently identify from explicit introductions
2. If a speaker cannot be identified, map them to "?" instead
3. Be case-sensitive with names as they appear
4. The teacher may also speak — if identified, include them as "Teacher"

Return ONLY a valid JSON object mapping speaker labels to names.
Example format: {"Speaker 0": "Maria", "Speaker 1": "James", "Speaker 2": "Teacher", "Speaker 3": "?"}

Transcript excerpt:
{transcript}

JSON mapping:"#;

const GROUP_FEEDBACK: &str = r#"You are a high school teacher analyzing a Harkness discussion. You will produce exactly two paragraphs.

**PARAGRAPH 1 — Discussion Summary** (Neutral Voice)
Write in a neutral, objective, third-person voice. Provide a detailed summary of the discussion's main topics and flow. Identify 2-3 "defining moments" — key turning points, breakthrough ideas, or significant challenges that shaped the conversation.

**PARAGRAPH 2 — Evaluative Comment** (Teacher Voice)
Write in the teacher's voice, directed at the class ("you" plural, "I" for the teacher). The tone must be direct, informal, supportive, and clear. Follow this mandatory "Critique Sandwich" structure:

1. **The Grade**: State the grade clearly and colloquially in the first sentence. (e.g., "This was a strong discussion, earning a solid 8.5 out of 10.", "This was a decent but not great start... 7/10.")
2. **The Good**: Highlight 2-3 specific positive achievements. Credit specific students by name, linking them to their idea or contribution.
3. **The Gap**: Identify the primary weakness or area for growth.
4. **The Next Step**: Conclude with a single, clear, actionable goal for the next discussion.

**Tone alignment with grade:**
- High grade (9-10): Frame positives as "excellent" or "deep"; the gap is a "final step" to the next level.
- Medium grade (7-8.5): Balanced ("solid," "decent start") with a more significant gap to work on.
- Lower grade (below 7): Honest but encouraging; clear gap with concrete next steps.

**Important:**
- If the teacher gave oral feedback during the discussion (often near the end — look for phrases like "my evaluation," "my feedback," or the teacher summarizing), align your evaluation with their points.
- Credit specific students by name for notable contributions.
- If the teacher intervened to guide the discussion, acknowledge this (e.g., "I had to provide the key synthesizing question").

Grade: {grade}

Transcript:
{transcript}

Write the two paragraphs now (summary paragraph first, then evaluative comment):"#;

const INDIVIDUAL_FEEDBACK: &str = r#"You are a high school teacher providing personalized feedback to {student_name} about their Harkness discussion participation. You will produce exactly two paragraphs.

**PARAGRAPH 1 — Contribution Summary** (Neutral Voice)
Write in a neutral, objective voice. Summarize what {student_name} contributed to the discussion — their main points, arguments, and how they engaged with other students' ideas. Note specific moments where they advanced or redirected the conversation.

**PARAGRAPH 2 — Evaluative Comment** (Teacher Voice)
Write in the teacher's voice, directed at the student ("you"). The tone must be direct, informal, supportive, and clear. Follow this "Critique Sandwich" structure:

1. **The Grade**: State the grade clearly in the first sentence.
2. **The Good**: Highlight 2-3 specific strengths from their participation, referencing actual points they made.
3. **The Gap**: Identify their primary area for growth as a discussion participant.
4. **The Next Step**: Conclude with a single, actionable goal for their next discussion.

**Tone alignment with grade:**
- High grade (9-10): "Excellent" contributions; the gap is a stretch goal.
- Medium grade (7-8.5): "Solid" participation with clear room to grow.
- Lower grade (below 7): Encouraging but honest about what's missing.

**Important:**
- If the teacher gave oral feedback during the discussion (often near the end — look for phrases like "my evaluation," "my feedback," or the teacher summarizing), align your evaluation with their points.

Grade: {grade}

{student_name}'s contributions:
{contributions}

Full discussion transcript (for context):
{transcript}

Write the two paragraphs now (contribution summary first, then evaluative comment for {student_name}):"#;
