//! Line-level helpers shared by the block segmenter and converters.

/// Normalize Windows line endings to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Trim every line, drop the empty ones and rejoin with `\n`.
///
/// Returns `None` when nothing survives.
pub fn clean_lines(chunk: &str) -> Option<String> {
    let lines: Vec<&str> = chunk
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Remove a single leading whitespace character, if present
pub fn strip_one_whitespace(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => text,
    }
}

/// Remove the `>` marker and at most one following space from a quote line
pub fn strip_quote_marker(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix('>') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// Remove a `-`, `*` or `+` marker and the whitespace character after it
pub fn strip_bullet_marker(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix(['-', '*', '+']) {
        Some(rest) => strip_one_whitespace(rest),
        None => line,
    }
}

/// Remove an `N.` marker and the whitespace character after it
pub fn strip_number_marker(line: &str) -> &str {
    let line = line.trim();
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return line;
    }
    match line[digits..].strip_prefix('.') {
        Some(rest) => strip_one_whitespace(rest),
        None => line,
    }
}
