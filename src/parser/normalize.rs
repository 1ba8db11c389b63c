//! Whitespace normalization for source lines
//!
//! [`normalize_line`] trims a line in place before it is dispatched to a
//! validator; [`strip_spaces`] builds a space-free copy for compact output.

/// Remove leading and trailing whitespace from `line` in place.
pub fn normalize_line(line: &mut String) {
    let end = line.trim_end().len();
    line.truncate(end);
    let start = line.len() - line.trim_start().len();
    line.replace_range(..start, "");
}

/// Copy of `text` with every space character removed.
pub fn strip_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}
