use crate::models::{ArgumentSlot, Item, ItemKind, LemmaInfo, ReferenceKind, SenseId};

/// Read-only lookup service over one lexical resource.
///
/// Implementations must be side-effect free; independent clusters may query
/// them from several threads at once.
pub trait Lexicon: Send + Sync {
    /// Stable id of the resource, stamped on every resolved [`Item`].
    fn id(&self) -> &str;

    /// Local senses that are members of `synset_id`. Empty when unknown.
    fn senses_of_synset(&self, synset_id: &str) -> Vec<SenseId>;

    /// Lemma and POS of a local sense id.
    fn lemma_and_pos(&self, id: &str) -> Option<LemmaInfo>;

    /// Look up a local item of the given kind by id.
    fn item(&self, kind: ItemKind, id: &str) -> Option<Item>;

    /// Follow an external reference of the given kind to local items.
    fn resolve_external_reference(&self, kind: ReferenceKind, reference: &str) -> Vec<Item>;

    /// Argument slots owned by a local predicate.
    fn arguments_of(&self, predicate_id: &str) -> Vec<ArgumentSlot>;

    /// Resolve a reference to items of `kind`, going through external-reference
    /// indirection unless `reference_kind` is native. Sorted, without repeats.
    fn resolve(&self, kind: ItemKind, reference_kind: ReferenceKind, reference: &str) -> Vec<Item> {
        let mut items: Vec<Item> = if reference_kind.is_native() {
            self.item(kind, reference).into_iter().collect()
        } else {
            self.resolve_external_reference(reference_kind, reference)
                .into_iter()
                .filter(|item| item.kind == kind)
                .collect()
        };
        items.sort();
        items.dedup();
        items
    }

    /// Resolve an argument reference within the scope of one predicate.
    ///
    /// Role references match slot roles; native references match slot ids;
    /// any other kind goes through indirection and is then restricted to the
    /// predicate's own slots.
    fn resolve_argument(
        &self,
        predicate: &Item,
        reference_kind: ReferenceKind,
        reference: &str,
    ) -> Vec<Item> {
        let slots = self.arguments_of(&predicate.id);
        let mut items: Vec<Item> = match reference_kind {
            ReferenceKind::ArgumentByRole => slots
                .iter()
                .filter(|slot| slot.role == reference)
                .map(|slot| Item::new(ItemKind::Argument, slot.id.clone(), self.id()))
                .collect(),
            ReferenceKind::Native => slots
                .iter()
                .filter(|slot| slot.id == reference)
                .map(|slot| Item::new(ItemKind::Argument, slot.id.clone(), self.id()))
                .collect(),
            other => self
                .resolve_external_reference(other, reference)
                .into_iter()
                .filter(|item| {
                    item.kind == ItemKind::Argument && slots.iter().any(|s| s.id == item.id)
                })
                .collect(),
        };
        items.sort();
        items.dedup();
        items
    }

    /// Lemma and POS of a member that may be an external reference.
    ///
    /// With indirection, the first resolved sense (in id order) that has a
    /// lemma wins.
    fn lemma_info_via(&self, reference_kind: ReferenceKind, id: &str) -> Option<LemmaInfo> {
        if reference_kind.is_native() {
            return self.lemma_and_pos(id);
        }
        let mut resolved = self.resolve_external_reference(reference_kind, id);
        resolved.sort();
        resolved
            .iter()
            .find_map(|item| self.lemma_and_pos(&item.id))
    }
}
