use std::fmt;

use serde::{Deserialize, Serialize};

/// Lemma and part of speech of a lexicon item, resolved on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LemmaInfo {
    pub lemma: String,
    /// `None` when the resource carries no POS for the item.
    pub pos: Option<String>,
}

impl LemmaInfo {
    pub fn new(lemma: impl Into<String>, pos: Option<&str>) -> Self {
        Self {
            lemma: lemma.into(),
            pos: pos.map(str::to_string),
        }
    }
}

/// Normalized (lemma, POS) match key.
///
/// Both the allow-list and the cluster members go through [`LexemeKey::new`],
/// so multi-word lemmas and stray whitespace compare equal on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexemeKey {
    lemma: String,
    pos: String,
}

impl LexemeKey {
    /// Collapse whitespace runs in `lemma`, trim it, and join the words with
    /// `word_joiner`. The POS is trimmed.
    pub fn new(lemma: &str, pos: &str, word_joiner: &str) -> Self {
        let lemma = lemma.split_whitespace().collect::<Vec<_>>().join(word_joiner);
        Self {
            lemma,
            pos: pos.trim().to_string(),
        }
    }

    /// Key for a resolved lemma; a missing POS uses `unknown_pos`.
    pub fn from_info(info: &LemmaInfo, word_joiner: &str, unknown_pos: &str) -> Self {
        Self::new(
            &info.lemma,
            info.pos.as_deref().unwrap_or(unknown_pos),
            word_joiner,
        )
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }
}

impl fmt::Display for LexemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.lemma, self.pos)
    }
}
