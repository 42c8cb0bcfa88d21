//! Shared line classification for the TAB-separated formats.

use std::io::BufRead;

use lexalign_core::constants::{COMMENT_PREFIX, FIELD_SEPARATOR};
use lexalign_core::errors::{LexAlignError, LexAlignResult};

pub(crate) enum Line {
    /// Blank line; ignored.
    Blank,
    /// Comment or header line, kept verbatim.
    Comment(String),
    /// Data line, split into trimmed fields with empty trailing fields removed.
    Data(Vec<String>),
}

pub(crate) fn classify(raw: &str) -> Line {
    let line = raw.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if line.trim_start().starts_with(COMMENT_PREFIX) {
        return Line::Comment(line.to_string());
    }
    let mut fields: Vec<String> = line
        .split(FIELD_SEPARATOR)
        .map(|f| f.trim().to_string())
        .collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    Line::Data(fields)
}

/// Read all lines with their 1-based numbers.
pub(crate) fn numbered_lines<'a, R: BufRead + 'a>(
    reader: R,
    source: &'a str,
) -> impl Iterator<Item = LexAlignResult<(usize, String)>> + 'a {
    reader
        .lines()
        .enumerate()
        .map(move |(idx, line)| {
            line.map(|l| (idx + 1, l))
                .map_err(|e| LexAlignError::io(source, e))
        })
}
