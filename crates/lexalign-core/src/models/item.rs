use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormatError;

/// Opaque, prefix-scoped identifier of a sense. Exact-match equality.
pub type SenseId = String;
/// Opaque, prefix-scoped identifier of a synset.
pub type SynsetId = String;
/// Identifier of any lexicon item.
pub type ItemId = String;

/// The kind of object a lexicon item (and an axis built on it) represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Sense,
    Synset,
    Predicate,
    Argument,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Sense,
        ItemKind::Synset,
        ItemKind::Predicate,
        ItemKind::Argument,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Sense => "sense",
            ItemKind::Synset => "synset",
            ItemKind::Predicate => "predicate",
            ItemKind::Argument => "argument",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| FormatError::UnknownItemKind {
                value: s.to_string(),
            })
    }
}

/// How a reference found in an input file is turned into lexicon items.
///
/// `Native` references are local ids of the lexicon. Every other kind goes
/// through the lexicon's external-reference indirection first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    Native,
    Sense,
    Synset,
    PredicateById,
    PredicateByLabel,
    ArgumentById,
    ArgumentByRole,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 7] = [
        ReferenceKind::Native,
        ReferenceKind::Sense,
        ReferenceKind::Synset,
        ReferenceKind::PredicateById,
        ReferenceKind::PredicateByLabel,
        ReferenceKind::ArgumentById,
        ReferenceKind::ArgumentByRole,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceKind::Native => "native",
            ReferenceKind::Sense => "sense",
            ReferenceKind::Synset => "synset",
            ReferenceKind::PredicateById => "predicate-by-id",
            ReferenceKind::PredicateByLabel => "predicate-by-label",
            ReferenceKind::ArgumentById => "argument-by-id",
            ReferenceKind::ArgumentByRole => "argument-by-role",
        }
    }

    /// The item kind this reference resolves to. `None` for native references,
    /// whose kind is fixed by the caller.
    pub fn item_kind(self) -> Option<ItemKind> {
        match self {
            ReferenceKind::Native => None,
            ReferenceKind::Sense => Some(ItemKind::Sense),
            ReferenceKind::Synset => Some(ItemKind::Synset),
            ReferenceKind::PredicateById | ReferenceKind::PredicateByLabel => {
                Some(ItemKind::Predicate)
            }
            ReferenceKind::ArgumentById | ReferenceKind::ArgumentByRole => {
                Some(ItemKind::Argument)
            }
        }
    }

    pub fn is_native(self) -> bool {
        self == ReferenceKind::Native
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| FormatError::UnknownReferenceKind {
                value: s.to_string(),
            })
    }
}

/// A resolved object of one lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub id: ItemId,
    /// Id of the lexicon the item belongs to.
    pub lexicon: String,
}

impl Item {
    pub fn new(kind: ItemKind, id: impl Into<String>, lexicon: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            lexicon: lexicon.into(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lexicon, self.id)
    }
}

/// A semantic role slot owned by one predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArgumentSlot {
    pub id: ItemId,
    pub predicate: ItemId,
    pub role: String,
}
