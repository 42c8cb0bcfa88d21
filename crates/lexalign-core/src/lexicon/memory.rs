//! In-memory lexicon, filled programmatically or from a TSV dump.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{ArgumentSlot, Item, ItemKind, LemmaInfo, ReferenceKind, SenseId};
use crate::traits::Lexicon;

/// A [`Lexicon`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLexicon {
    id: String,
    senses: HashMap<String, LemmaInfo>,
    synsets: BTreeMap<String, BTreeSet<SenseId>>,
    predicates: HashMap<String, String>,
    arguments: BTreeMap<String, Vec<ArgumentSlot>>,
    argument_ids: HashMap<String, String>,
    external: HashMap<(ReferenceKind, String), BTreeSet<String>>,
}

impl InMemoryLexicon {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Register a sense, optionally as a member of `synset`.
    pub fn add_sense(
        &mut self,
        id: &str,
        lemma: &str,
        pos: Option<&str>,
        synset: Option<&str>,
    ) -> &mut Self {
        self.senses
            .insert(id.to_string(), LemmaInfo::new(lemma, pos));
        if let Some(synset) = synset {
            self.synsets
                .entry(synset.to_string())
                .or_default()
                .insert(id.to_string());
        }
        self
    }

    /// Register a synset that may have no members yet.
    pub fn add_synset(&mut self, id: &str) -> &mut Self {
        self.synsets.entry(id.to_string()).or_default();
        self
    }

    pub fn add_predicate(&mut self, id: &str, label: &str) -> &mut Self {
        self.predicates.insert(id.to_string(), label.to_string());
        self
    }

    /// Register an argument slot of `predicate` playing `role`.
    pub fn add_argument(&mut self, id: &str, predicate: &str, role: &str) -> &mut Self {
        self.arguments
            .entry(predicate.to_string())
            .or_default()
            .push(ArgumentSlot {
                id: id.to_string(),
                predicate: predicate.to_string(),
                role: role.to_string(),
            });
        self.argument_ids
            .insert(id.to_string(), predicate.to_string());
        self
    }

    /// Map an external reference of `kind` to the local item `local`.
    /// A reference may map to several local items.
    pub fn add_external_reference(
        &mut self,
        kind: ReferenceKind,
        external: &str,
        local: &str,
    ) -> &mut Self {
        self.external
            .entry((kind, external.to_string()))
            .or_default()
            .insert(local.to_string());
        self
    }

    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    fn contains(&self, kind: ItemKind, id: &str) -> bool {
        match kind {
            ItemKind::Sense => self.senses.contains_key(id),
            ItemKind::Synset => self.synsets.contains_key(id),
            ItemKind::Predicate => self.predicates.contains_key(id),
            ItemKind::Argument => self.argument_ids.contains_key(id),
        }
    }
}

impl Lexicon for InMemoryLexicon {
    fn id(&self) -> &str {
        &self.id
    }

    fn senses_of_synset(&self, synset_id: &str) -> Vec<SenseId> {
        self.synsets
            .get(synset_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn lemma_and_pos(&self, id: &str) -> Option<LemmaInfo> {
        self.senses.get(id).cloned()
    }

    fn item(&self, kind: ItemKind, id: &str) -> Option<Item> {
        self.contains(kind, id)
            .then(|| Item::new(kind, id, self.id.as_str()))
    }

    fn resolve_external_reference(&self, kind: ReferenceKind, reference: &str) -> Vec<Item> {
        let Some(item_kind) = kind.item_kind() else {
            return Vec::new();
        };
        let mut locals: BTreeSet<&str> = self
            .external
            .get(&(kind, reference.to_string()))
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();

        // Labels resolve through the predicate table when no explicit mapping exists.
        if kind == ReferenceKind::PredicateByLabel && locals.is_empty() {
            locals = self
                .predicates
                .iter()
                .filter(|(_, label)| label.as_str() == reference)
                .map(|(id, _)| id.as_str())
                .collect();
        }

        locals
            .into_iter()
            .filter(|local| self.contains(item_kind, local))
            .map(|local| Item::new(item_kind, local, self.id.as_str()))
            .collect()
    }

    fn arguments_of(&self, predicate_id: &str) -> Vec<ArgumentSlot> {
        self.arguments.get(predicate_id).cloned().unwrap_or_default()
    }
}
