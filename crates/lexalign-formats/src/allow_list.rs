//! Lexeme allow-list: one `lemma TAB pos` per line.

use std::collections::HashSet;
use std::io::BufRead;

use lexalign_core::errors::LexAlignResult;
use lexalign_core::models::LexemeKey;
use tracing::warn;

use crate::lines::{classify, numbered_lines, Line};

/// Set of allowed (lemma, POS) keys, normalized with one word-joiner.
#[derive(Debug, Clone)]
pub struct AllowList {
    word_joiner: String,
    keys: HashSet<LexemeKey>,
    pub malformed_lines: usize,
}

impl AllowList {
    pub fn new(word_joiner: impl Into<String>) -> Self {
        Self {
            word_joiner: word_joiner.into(),
            keys: HashSet::new(),
            malformed_lines: 0,
        }
    }

    pub fn insert(&mut self, lemma: &str, pos: &str) -> bool {
        let key = LexemeKey::new(lemma, pos, &self.word_joiner);
        self.keys.insert(key)
    }

    /// Whether the key is allowed. Both sides use the same normalization.
    pub fn contains(&self, key: &LexemeKey) -> bool {
        self.keys.contains(key)
    }

    pub fn word_joiner(&self) -> &str {
        &self.word_joiner
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Read an allow-list, normalizing keys with `word_joiner`.
pub fn read_allow_list<R: BufRead>(
    reader: R,
    source: &str,
    word_joiner: &str,
) -> LexAlignResult<AllowList> {
    let mut list = AllowList::new(word_joiner);
    for entry in numbered_lines(reader, source) {
        let (line_no, raw) = entry?;
        match classify(&raw) {
            Line::Blank | Line::Comment(_) => {}
            Line::Data(fields) => match fields.as_slice() {
                [lemma, pos, ..] if !lemma.is_empty() && !pos.is_empty() => {
                    list.insert(lemma, pos);
                }
                _ => {
                    list.malformed_lines += 1;
                    warn!(source, line = line_no, "skipping malformed allow-list line");
                }
            },
        }
    }
    Ok(list)
}
