/// Return the text of the first line starting with exactly `# `, trimmed.
///
/// Deeper headings (`## `) and `#` without a following space are skipped.
pub fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}
