//! Line classification for Lean sources.
//!
//! Rules mostly reason about lines: which ones are blank, which sit inside a
//! `/- ... -/` block comment, and where the module docstring (`/-! ... -/`)
//! starts. Block comments nest.

/// What a source line contains, judged by how it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Inside a block comment, opening one, or a `--` line comment.
    Comment,
    /// Opens a module docstring (`/-!`).
    ModuleDoc,
    /// Anything else.
    Code,
}

/// A line together with its number and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    /// Line text without the trailing `\n` or `\r\n`.
    pub text: &'a str,
    /// Classification of the line.
    pub kind: LineKind,
}

impl ClassifiedLine<'_> {
    /// Returns true for an `import` statement.
    #[must_use]
    pub fn is_import(&self) -> bool {
        self.kind == LineKind::Code && starts_with_keyword(self.text.trim_start(), "import")
    }
}

/// Returns true if `line` starts with `keyword` followed by whitespace or end of line.
#[must_use]
pub fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Splits `content` into numbered lines, keeping any trailing `\r`.
pub fn raw_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .split_terminator('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

/// Classifies every line of `content`.
#[must_use]
pub fn classify_lines(content: &str) -> Vec<ClassifiedLine<'_>> {
    let mut depth = 0usize;
    let mut lines = Vec::new();

    for (number, raw) in raw_lines(content) {
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        let trimmed = text.trim_start();

        let kind = if depth > 0 {
            LineKind::Comment
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with("/-!") {
            LineKind::ModuleDoc
        } else if trimmed.starts_with("/-") || trimmed.starts_with("--") {
            LineKind::Comment
        } else {
            LineKind::Code
        };

        depth = comment_depth_after(text, depth);
        lines.push(ClassifiedLine { number, text, kind });
    }

    lines
}

/// Tracks block comment nesting across one line.
fn comment_depth_after(line: &str, mut depth: usize) -> usize {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1).copied()) {
            (b'/', Some(b'-')) => {
                depth += 1;
                i += 2;
            }
            (b'-', Some(b'/')) if depth > 0 => {
                depth -= 1;
                i += 2;
            }
            (b'-', Some(b'-')) if depth == 0 => break,
            _ => i += 1,
        }
    }
    depth
}
