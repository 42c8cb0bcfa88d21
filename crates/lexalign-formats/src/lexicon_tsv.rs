//! TSV lexicon dump feeding [`InMemoryLexicon`].
//!
//! Record types, first field selects:
//!
//! ```text
//! sense      id  lemma  pos  [synset]
//! synset     id
//! predicate  id  label
//! argument   id  predicate  role
//! xref       kind  external  local
//! ```
//!
//! An empty or `-` POS means the resource carries none.

use std::io::BufRead;

use lexalign_core::errors::{FormatError, LexAlignResult};
use lexalign_core::models::ReferenceKind;
use lexalign_core::InMemoryLexicon;
use tracing::{info, warn};

use crate::lines::{classify, numbered_lines, Line};

/// Counts of a lexicon load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconLoadStats {
    pub records: usize,
    pub malformed_lines: usize,
}

fn optional(value: Option<&String>) -> Option<&str> {
    value
        .map(String::as_str)
        .filter(|v| !v.is_empty() && *v != "-")
}

fn apply_record(lexicon: &mut InMemoryLexicon, line: usize, fields: &[String]) -> Result<(), FormatError> {
    let malformed = |reason: &str| FormatError::MalformedLine {
        line,
        reason: reason.to_string(),
    };
    match fields {
        [kind, rest @ ..] => match (kind.as_str(), rest) {
            ("sense", [id, lemma, tail @ ..]) => {
                lexicon.add_sense(id, lemma, optional(tail.first()), optional(tail.get(1)));
            }
            ("sense", _) => return Err(malformed("sense needs id and lemma")),
            ("synset", [id, ..]) => {
                lexicon.add_synset(id);
            }
            ("synset", _) => return Err(malformed("synset needs an id")),
            ("predicate", [id, label, ..]) => {
                lexicon.add_predicate(id, label);
            }
            ("predicate", _) => return Err(malformed("predicate needs id and label")),
            ("argument", [id, predicate, role, ..]) => {
                lexicon.add_argument(id, predicate, role);
            }
            ("argument", _) => return Err(malformed("argument needs id, predicate and role")),
            ("xref", [kind, external, local, ..]) => {
                let kind: ReferenceKind = kind.parse()?;
                if kind.is_native() {
                    return Err(malformed("xref kind cannot be native"));
                }
                lexicon.add_external_reference(kind, external, local);
            }
            ("xref", _) => return Err(malformed("xref needs kind, external and local")),
            (other, _) => {
                return Err(FormatError::UnknownRecordType {
                    line,
                    record_type: other.to_string(),
                })
            }
        },
        [] => return Err(malformed("empty record")),
    }
    Ok(())
}

/// Load an in-memory lexicon named `id` from a TSV dump.
pub fn load_lexicon<R: BufRead>(
    id: &str,
    reader: R,
    source: &str,
) -> LexAlignResult<(InMemoryLexicon, LexiconLoadStats)> {
    let mut lexicon = InMemoryLexicon::new(id);
    let mut stats = LexiconLoadStats::default();
    for entry in numbered_lines(reader, source) {
        let (line_no, raw) = entry?;
        if let Line::Data(fields) = classify(&raw) {
            match apply_record(&mut lexicon, line_no, &fields) {
                Ok(()) => stats.records += 1,
                Err(err) => {
                    stats.malformed_lines += 1;
                    warn!(source, error = %err, "skipping malformed lexicon record");
                }
            }
        }
    }
    info!(
        lexicon = id,
        senses = lexicon.sense_count(),
        synsets = lexicon.synset_count(),
        predicates = lexicon.predicate_count(),
        malformed = stats.malformed_lines,
        "lexicon loaded"
    );
    Ok((lexicon, stats))
}
