//! Alignment file: `left TAB right [TAB confidence [TAB decided]]`.

use std::io::BufRead;

use lexalign_core::errors::{FormatError, LexAlignResult};
use lexalign_core::models::{AlignmentPair, Confidence};
use tracing::warn;

use crate::lines::{classify, numbered_lines, Line};

/// Parsed alignment file.
#[derive(Debug, Clone, Default)]
pub struct AlignmentInput {
    /// Comment/header lines, verbatim, in file order.
    pub header: Vec<String>,
    pub pairs: Vec<AlignmentPair>,
    /// Data lines seen, malformed ones included.
    pub lines_read: usize,
    pub malformed_lines: usize,
}

/// Parse the fields of one data line.
pub fn parse_alignment_fields(line: usize, fields: &[String]) -> Result<AlignmentPair, FormatError> {
    let malformed = |reason: String| FormatError::MalformedLine { line, reason };

    let (left, right) = match fields {
        [left, right, ..] if !left.is_empty() && !right.is_empty() => (left, right),
        _ => {
            return Err(malformed(format!(
                "expected at least 2 non-empty fields, found {}",
                fields.len()
            )))
        }
    };

    let confidence = match fields.get(2).filter(|f| !f.is_empty()) {
        Some(raw) => raw
            .parse::<f64>()
            .map(Confidence::new)
            .map_err(|_| malformed(format!("invalid confidence '{raw}'")))?,
        None => Confidence::CERTAIN,
    };

    let decided = match fields.get(3).filter(|f| !f.is_empty()) {
        Some(raw) => parse_flag(raw).ok_or_else(|| malformed(format!("invalid decided flag '{raw}'")))?,
        None => true,
    };

    Ok(AlignmentPair {
        left: left.clone(),
        right: right.clone(),
        confidence,
        decided,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Read an alignment file. Malformed lines are skipped and counted.
pub fn read_alignment_file<R: BufRead>(reader: R, source: &str) -> LexAlignResult<AlignmentInput> {
    let mut input = AlignmentInput::default();
    for entry in numbered_lines(reader, source) {
        let (line_no, raw) = entry?;
        match classify(&raw) {
            Line::Blank => {}
            Line::Comment(text) => input.header.push(text),
            Line::Data(fields) => {
                input.lines_read += 1;
                match parse_alignment_fields(line_no, &fields) {
                    Ok(pair) => input.pairs.push(pair),
                    Err(err) => {
                        input.malformed_lines += 1;
                        warn!(source, error = %err, "skipping malformed alignment line");
                    }
                }
            }
        }
    }
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> Vec<String> {
        line.split('\t').map(str::to_string).collect()
    }

    #[test]
    fn two_fields_default_to_decided_and_certain() {
        let pair = parse_alignment_fields(1, &fields("wn:s1\tvn:give")).unwrap();
        assert_eq!(pair.left, "wn:s1");
        assert_eq!(pair.right, "vn:give");
        assert_eq!(pair.confidence.value(), 1.0);
        assert!(pair.decided);
    }

    #[test]
    fn optional_fields_are_parsed() {
        let pair = parse_alignment_fields(1, &fields("a\tb\t0.25\tno")).unwrap();
        assert_eq!(pair.confidence.value(), 0.25);
        assert!(!pair.decided);
    }

    #[test]
    fn single_field_is_malformed() {
        let err = parse_alignment_fields(7, &fields("lonely")).unwrap_err();
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn bad_confidence_is_malformed() {
        assert!(parse_alignment_fields(1, &fields("a\tb\thigh")).is_err());
        assert!(parse_alignment_fields(1, &fields("a\tb\t0.5\tmaybe")).is_err());
    }

    #[test]
    fn reader_keeps_header_and_counts_malformed() {
        let text = "# wn -> vn\n#left\tright\na\tx\n\nbroken\nb\tx\t0.5\n";
        let input = read_alignment_file(text.as_bytes(), "inline").unwrap();
        assert_eq!(input.header, vec!["# wn -> vn", "#left\tright"]);
        assert_eq!(input.pairs.len(), 2);
        assert_eq!(input.lines_read, 3);
        assert_eq!(input.malformed_lines, 1);
    }
}
