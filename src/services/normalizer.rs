//! Turns raw completion text into something the UI can show or parse.
//!
//! The plain-text pipeline is a fixed sequence of steps. Bullet conversion must
//! run before the blanket marker cleanup, otherwise `* item` loses its bullet.
//! Running `sanitize_text` on its own output returns the same string.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    errors::AppResult,
    models::domain::Quiz,
};

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("BOLD is a valid regex pattern"));

// Opening marker must be followed by non-space, closing marker preceded by non-space.
static ITALIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*([^*\s](?:[^*\n]*?[^*\s])?)\*").expect("ITALIC is a valid regex pattern")
});

static LEADING_BOLD_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\*\*[ \t]*").expect("LEADING_BOLD_MARKER is a valid regex pattern")
});

static TRAILING_BOLD_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)[ \t]*\*\*$").expect("TRAILING_BOLD_MARKER is a valid regex pattern")
});

static STAR_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)\*[ \t]+").expect("STAR_BULLET is a valid regex pattern")
});

static HORIZONTAL_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("HORIZONTAL_WHITESPACE is a valid regex pattern"));

static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("BLANK_LINE_RUN is a valid regex pattern"));

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json|JSON)?").expect("CODE_FENCE is a valid regex pattern"));

const BULLET: &str = "• ";

// ASCII only, like `\w` in the client-side markdown rules. A `*` next to a
// Devanagari letter is therefore treated as standalone.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `**text**` -> `text`
pub fn strip_bold(text: &str) -> String {
    BOLD.replace_all(text, "$1").into_owned()
}

/// `*text*` -> `text`. Markers glued to a word on the outside (`a*b*c`) are left
/// for `strip_remaining_markers`.
pub fn strip_italic(text: &str) -> String {
    ITALIC
        .replace_all(text, |caps: &Captures| {
            let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));
            let before = text[..start].chars().next_back();
            let after = text[end..].chars().next();

            if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
                caps[0].to_string()
            } else {
                caps[1].to_string()
            }
        })
        .into_owned()
}

/// Drops `**` left dangling at the start or end of a line.
pub fn strip_line_edge_markers(text: &str) -> String {
    let text = LEADING_BOLD_MARKER.replace_all(text, "");
    TRAILING_BOLD_MARKER.replace_all(&text, "").into_owned()
}

/// `* item` at line start -> `• item`
pub fn convert_star_bullets(text: &str) -> String {
    STAR_BULLET
        .replace_all(text, |caps: &Captures| format!("{}{}", &caps[1], BULLET))
        .into_owned()
}

/// Removes every `**` and every lone `*`. A single `*` between two word
/// characters (`2*3`) is kept.
pub fn strip_remaining_markers(text: &str) -> String {
    let text = text.replace("**", "");
    let chars: Vec<char> = text.chars().collect();

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if c != '*' {
                return true;
            }
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            before.is_some_and(is_word_char) && after.is_some_and(is_word_char)
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Runs of spaces and tabs become one space. Line breaks are untouched.
pub fn collapse_horizontal_whitespace(text: &str) -> String {
    HORIZONTAL_WHITESPACE.replace_all(text, " ").into_owned()
}

/// Any run of blank lines becomes exactly one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINE_RUN.replace_all(text, "\n\n").into_owned()
}

pub fn sanitize_text(raw: &str) -> String {
    let text = strip_bold(raw);
    let text = strip_italic(&text);
    let text = strip_line_edge_markers(&text);
    let text = convert_star_bullets(&text);
    let text = strip_remaining_markers(&text);
    let text = collapse_horizontal_whitespace(&text);
    let text = collapse_blank_lines(&text);
    text.trim().to_string()
}

/// Removes code fences, then cuts out the outermost `{ ... }` if the model
/// wrapped the JSON in prose.
pub fn extract_json_payload(raw: &str) -> &str {
    let trimmed = raw.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// No shape checks beyond a successful parse. See `Quiz::quality_issues`.
pub fn parse_quiz(raw: &str) -> AppResult<Quiz> {
    let unfenced = CODE_FENCE.replace_all(raw, "");
    let payload = extract_json_payload(&unfenced);

    let quiz = serde_json::from_str(payload)
        .inspect_err(|_| log::debug!("quiz payload failed to parse: {}", payload))?;
    Ok(quiz)
}
