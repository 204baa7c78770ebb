use std::ops::Range;

/// A trimmed, non-empty line borrowed from the block source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
    /// Byte span of `text` within the source.
    pub span: Range<usize>,
}

/// Split on `\n` (tolerating `\r\n`), trim each line and drop the empty ones.
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut line_start = 0;

    for raw in source.split('\n') {
        let start = line_start;
        line_start += raw.len() + 1;

        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        let leading = raw.len() - raw.trim_start().len();
        let begin = start + leading;
        lines.push(SourceLine {
            text,
            span: begin..begin + text.len(),
        });
    }

    lines
}
