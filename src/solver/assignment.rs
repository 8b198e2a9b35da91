use crate::{
    grid::{ConstraintGraph, SlotId},
    solver::domains::{letter_at, Word},
};

/// A partial mapping from slot to the single word chosen for it.
///
/// Grows on each tentative assignment and shrinks again on backtrack; a
/// slot is assigned iff it is present as a key. The map is persistent, so
/// the final result can be cloned out of the search without copying words.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    entries: im::HashMap<SlotId, Word>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SlotId) -> Option<&Word> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn assign(&mut self, id: SlotId, word: Word) {
        self.entries.insert(id, word);
    }

    pub fn unassign(&mut self, id: SlotId) {
        self.entries.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Word)> {
        self.entries.iter().map(|(id, word)| (*id, word))
    }

    /// Whether some other slot already uses `word`. The `except` slot is
    /// skipped so a slot's own tentative choice does not count against it.
    pub fn uses_word(&self, word: &Word, except: SlotId) -> bool {
        self.entries
            .iter()
            .any(|(id, used)| *id != except && used == word)
    }

    /// An assignment is complete iff every slot in the graph is a key.
    pub fn is_complete(&self, graph: &ConstraintGraph) -> bool {
        self.entries.len() == graph.slot_count()
    }

    /// Checks every pair of assigned slots: distinct words everywhere, and
    /// matching letters wherever the pair has a defined overlap. Not
    /// restricted to neighbors of any particular slot.
    pub fn is_consistent(&self, graph: &ConstraintGraph) -> bool {
        for (a, word_a) in self.iter() {
            for (b, word_b) in self.iter() {
                if a >= b {
                    continue;
                }
                if word_a == word_b {
                    return false;
                }
                if let Some(overlap) = graph.overlap(a, b) {
                    if letter_at(word_a, overlap.a) != letter_at(word_b, overlap.b) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
