//! Assertions helpers for rendered Markdown.

/// Returns the text of every heading at `level`, in document order.
///
/// Lines inside fenced code blocks are skipped.
#[must_use]
pub fn headings(markdown: &str, level: usize) -> Vec<&str> {
    let marker = format!("{} ", "#".repeat(level));
    let mut in_fence = false;
    let mut found = Vec::new();
    for line in markdown.lines() {
        if line.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(text) = line.strip_prefix(marker.as_str()) {
            found.push(text);
        }
    }
    found
}

/// Strips one layer of matching quotes from a step placeholder.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
}
