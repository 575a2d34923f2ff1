//! Ignore-list rendering

/// Join patterns one per line, keeping catalog order.
pub fn render_ignore_list<S: AsRef<str>>(patterns: &[S]) -> String {
    patterns
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
}
