use regex::Regex;
use std::sync::LazyLock;

pub const NO_CONTENT_PLACEHOLDER: &str = "(no content)";

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());

/// Splits Markdown-like text into display units.
///
/// Headings become `=== <line> ===`, list items stand alone, and consecutive
/// prose lines are joined with a single space until a blank line.
pub fn segment_paragraphs(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut buffer = String::new();

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() {
            flush(&mut buffer, &mut units);
        } else if line.starts_with('#') {
            flush(&mut buffer, &mut units);
            units.push(format!("=== {} ===", line));
        } else if is_list_item(line) {
            flush(&mut buffer, &mut units);
            units.push(line.to_string());
        } else {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(line);
        }
    }
    flush(&mut buffer, &mut units);

    if units.is_empty() {
        units.push(NO_CONTENT_PLACEHOLDER.to_string());
    }
    units
}

fn is_list_item(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('*') || ORDERED_ITEM.is_match(line)
}

fn flush(buffer: &mut String, units: &mut Vec<String>) {
    if !buffer.is_empty() {
        units.push(std::mem::take(buffer));
    }
}

