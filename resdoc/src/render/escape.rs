//! Text helpers for the Markdown renderer.
//!
//! Front-matter values are opaque, so they are only quoted when emitting
//! them plainly would change the YAML structure or read back as null. Code
//! is never altered; the fence grows instead when the code contains a
//! backtick run.

use std::borrow::Cow;

const MIN_FENCE_LEN: usize = 3;

/// Plain scalars a YAML reader turns into null.
const YAML_NULLS: [&str; 4] = ["~", "null", "Null", "NULL"];

/// Formats a front-matter key or value as a YAML scalar.
///
/// # Examples
///
/// ```
/// use resdoc::render::escape::yaml_scalar;
///
/// assert_eq!(yaml_scalar("page"), "page");
/// assert_eq!(yaml_scalar("a: b"), "\"a: b\"");
/// assert_eq!(yaml_scalar(""), "\"\"");
/// ```
#[must_use]
pub fn yaml_scalar(text: &str) -> Cow<'_, str> {
    if is_plain_safe(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(double_quoted(text))
    }
}

fn is_plain_safe(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    if text.trim() != text || YAML_NULLS.contains(&text) {
        return false;
    }
    if matches!(
        first,
        '-' | '?' | ':' | ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\''
            | '"' | '%' | '@' | '`'
    ) {
        return false;
    }
    !(text.contains(": ")
        || text.contains(" #")
        || text.ends_with(':')
        || text.chars().any(char::is_control))
}

fn double_quoted(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 2);
    output.push('"');
    for ch in text.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            control if control.is_control() => {
                output.push_str(&format!("\\u{:04X}", u32::from(control)));
            }
            other => output.push(other),
        }
    }
    output.push('"');
    output
}

/// Returns a backtick fence long enough to enclose `code`.
///
/// # Examples
///
/// ```
/// use resdoc::render::escape::code_fence;
///
/// assert_eq!(code_fence("resource x"), "```");
/// assert_eq!(code_fence("```nested```"), "````");
/// ```
#[must_use]
pub fn code_fence(code: &str) -> String {
    let longest_run = code
        .split(|ch| ch != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.saturating_add(1).max(MIN_FENCE_LEN))
}
