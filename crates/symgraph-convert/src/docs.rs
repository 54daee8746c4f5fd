//! Docstring cleanup.

/// Clean a raw docstring body.
///
/// The first line is left-trimmed, the common indentation of the remaining
/// lines is removed, trailing whitespace is dropped from every line, and
/// blank lines are trimmed from both ends.
pub fn format_doc_body(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };

    let indent = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = Vec::with_capacity(lines.len());
    cleaned.push(first.trim());
    for line in rest {
        let stripped = line.get(indent..).unwrap_or_else(|| line.trim_start());
        cleaned.push(stripped.trim_end());
    }

    while cleaned.first().is_some_and(|l| l.is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|l| l.is_empty()) {
        cleaned.pop();
    }
    cleaned.join("\n")
}
