//! Decision-record stream: one JSON [`DecisionRecord`] per line.

use std::io::{BufRead, Lines};

use lexalign_core::errors::{FormatError, LexAlignError, LexAlignResult};
use lexalign_core::models::DecisionRecord;
use tracing::warn;

use crate::lines::{classify, Line};

/// Streaming reader over a JSON-lines decision file.
///
/// Blank and `#` lines are skipped. Malformed records are skipped with a
/// `warn` event and counted; I/O errors end the stream with an error.
pub struct DecisionReader<R> {
    lines: Lines<R>,
    source: String,
    line_no: usize,
    malformed: usize,
}

impl<R: BufRead> DecisionReader<R> {
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            lines: reader.lines(),
            source: source.into(),
            line_no: 0,
            malformed: 0,
        }
    }

    /// Records skipped so far because they did not parse.
    pub fn malformed_records(&self) -> usize {
        self.malformed
    }
}

/// Parse one JSON line into a record.
pub fn parse_decision_line(line: usize, text: &str) -> Result<DecisionRecord, FormatError> {
    let record: DecisionRecord =
        serde_json::from_str(text).map_err(|e| FormatError::InvalidRecord {
            line,
            reason: e.to_string(),
        })?;
    if record.source.trim().is_empty() {
        return Err(FormatError::InvalidRecord {
            line,
            reason: "empty source reference".to_string(),
        });
    }
    Ok(record)
}

impl<R: BufRead> Iterator for DecisionReader<R> {
    type Item = LexAlignResult<DecisionRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(LexAlignError::io(self.source.clone(), e))),
            };
            self.line_no += 1;
            if !matches!(classify(&raw), Line::Data(_)) {
                continue;
            }
            match parse_decision_line(self.line_no, raw.trim()) {
                Ok(record) => return Some(Ok(record)),
                Err(err) => {
                    self.malformed += 1;
                    warn!(source = %self.source, error = %err, "skipping malformed decision record");
                }
            }
        }
    }
}
