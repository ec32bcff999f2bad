//! Unified diff line classification
//!
//! GitHub patches start at the first hunk header and carry no file
//! headers, but full `git diff` output does; both are accepted.

/// One line of a unified diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine<'a> {
    /// `@@ -a,b +c,d @@` header
    Hunk,
    /// Unchanged line
    Context(&'a str),
    /// Line present only in the old file
    Removed(&'a str),
    /// Line present only in the new file
    Added(&'a str),
    /// File headers and anything else outside hunk bodies
    Other,
}

/// Classify every line of a patch
pub fn classify(patch: &str) -> impl Iterator<Item = DiffLine<'_>> {
    let mut in_hunk = false;
    patch.lines().map(move |line| {
        if line.starts_with("@@") {
            in_hunk = true;
            return DiffLine::Hunk;
        }
        if line.starts_with("diff --git ") {
            in_hunk = false;
            return DiffLine::Other;
        }
        if !in_hunk && (line.starts_with("--- ") || line.starts_with("+++ ")) {
            return DiffLine::Other;
        }

        if let Some(content) = line.strip_prefix('-') {
            DiffLine::Removed(content)
        } else if let Some(content) = line.strip_prefix('+') {
            DiffLine::Added(content)
        } else if let Some(content) = line.strip_prefix(' ') {
            DiffLine::Context(content)
        } else {
            // "\ No newline at end of file" and blank separators
            DiffLine::Other
        }
    })
}

/// Removed and added lines whose content is not blank
#[must_use]
pub fn changed_lines(patch: &str) -> (Vec<&str>, Vec<&str>) {
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for line in classify(patch) {
        match line {
            DiffLine::Removed(content) if !content.trim().is_empty() => removed.push(content),
            DiffLine::Added(content) if !content.trim().is_empty() => added.push(content),
            _ => {},
        }
    }

    (removed, added)
}
