use std::sync::Arc;

use im::OrdSet;

use crate::grid::{ConstraintGraph, SlotId};

/// A candidate word. Interned once at load time and shared by reference
/// through every domain and assignment that mentions it.
pub type Word = Arc<str>;

/// Number of letters in a word. Slot lengths count grid cells, one letter
/// per cell, so a multi-byte letter must count as one; `str::len` would
/// report bytes and reject words like "ÉTÉ" from a length-3 slot.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// The letter at character position `i`, or `None` past the end. Overlap
/// offsets are cell indices, so lookups go by character, not byte.
pub fn letter_at(word: &str, i: usize) -> Option<char> {
    word.chars().nth(i)
}

/// A slot's current candidate set. Ordered so iteration is always the
/// lexicographic order, which keeps every downstream tie-break
/// deterministic.
pub type WordSet = OrdSet<Word>;

/// Mutable mapping from each slot to its current candidate-word set.
///
/// Backed by persistent structures, so cloning the whole store is cheap and
/// exact: the search takes one clone per tentative branch and simply drops
/// it on backtrack, restoring the parent state without an undo log.
/// Domains only ever shrink while a branch is alive.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: im::HashMap<SlotId, WordSet>,
}

impl DomainStore {
    /// Seeds every slot's domain with the full vocabulary. Length filtering
    /// is the node-consistency pass, not the store's job.
    pub fn init(graph: &ConstraintGraph, vocabulary: &[Word]) -> Self {
        let all: WordSet = vocabulary.iter().cloned().collect();
        let domains = graph.slot_ids().map(|id| (id, all.clone())).collect();
        Self { domains }
    }

    pub fn domain(&self, id: SlotId) -> &WordSet {
        &self.domains[&id]
    }

    pub fn size(&self, id: SlotId) -> usize {
        self.domains[&id].len()
    }

    pub fn set_domain(&mut self, id: SlotId, words: WordSet) {
        self.domains.insert(id, words);
    }

    /// Narrows a slot's domain to a single word, the shape a tentative
    /// assignment takes before propagation.
    pub fn narrow_to(&mut self, id: SlotId, word: Word) {
        self.domains.insert(id, OrdSet::unit(word));
    }

    pub fn has_empty_domain(&self, graph: &ConstraintGraph) -> bool {
        graph.slot_ids().any(|id| self.domains[&id].is_empty())
    }

    /// Total candidate count across all slots; shrinks monotonically
    /// under consistency enforcement.
    pub fn total_size(&self) -> usize {
        self.domains.values().map(OrdSet::len).sum()
    }
}
