//! Text helpers derived from document content

use regex::Regex;

use crate::templates::base_name;

/// Inserted in place of a literal tab key press
pub const INDENT: &str = "    ";

/// Line numbers 1..=N for newline-separated `content`; empty content has one line
pub fn line_numbers(content: &str) -> Vec<usize> {
    (1..=content.split('\n').count()).collect()
}

/// Byte offset of the `chars`-th character, clamped to the end of `text`
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Replace the selection `[start, end)` (character offsets) with four spaces.
///
/// Returns the new content and the cursor position right after the indent.
pub fn insert_indent(content: &str, start: usize, end: usize) -> (String, usize) {
    let total = content.chars().count();
    let start = start.min(total);
    let end = end.clamp(start, total);

    let from = byte_offset(content, start);
    let to = byte_offset(content, end);

    let mut updated = String::with_capacity(content.len() + INDENT.len());
    updated.push_str(&content[..from]);
    updated.push_str(INDENT);
    updated.push_str(&content[to..]);

    (updated, start + INDENT.chars().count())
}

/// Rewrite `class <Old> {` declarations after a `.java` file rename.
///
/// Plain textual substitution: matches inside comments and strings are rewritten too.
/// Returns `content` unchanged unless both names end in `.java`.
pub fn rewrite_java_class(content: &str, old_name: &str, new_name: &str) -> String {
    if !old_name.ends_with(".java") || !new_name.ends_with(".java") {
        return content.to_string();
    }

    let old_class = base_name(old_name);
    let new_class = base_name(new_name);
    let pattern = format!(r"class\s+{}\s*\{{", regex::escape(old_class));

    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(content, regex::NoExpand(&format!("class {new_class} {{")))
            .into_owned(),
        Err(e) => {
            tracing::warn!("Skipping class rewrite for {}: {}", old_name, e);
            content.to_string()
        }
    }
}

/// Remaining time as zero-padded `MM:SS`
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parse a minutes field the way a number input does: leading integer, else 0
pub fn parse_minutes(input: &str) -> i64 {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    // Anything past i64 is far outside the valid range anyway
    leading
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(if leading.is_empty() { 0 } else { sign * i64::MAX })
}
