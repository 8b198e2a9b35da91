use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::{
    grid::{ConstraintGraph, SlotId},
    solver::{
        assignment::Assignment,
        domains::{letter_at, DomainStore, Word},
    },
};

/// Strategy for ordering the candidate words tried for a slot.
///
/// Every implementation filters out words already used elsewhere in the
/// assignment; trying them would only fail the distinctness check later.
pub trait ValueOrdering {
    fn order(
        &self,
        graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<Word>;
}

/// Collects a slot's unused candidates in domain order, which for an
/// ordered domain is the lexicographic order.
fn unused_candidates(store: &DomainStore, assignment: &Assignment, slot: SlotId) -> Vec<Word> {
    store
        .domain(slot)
        .iter()
        .filter(|word| !assignment.uses_word(word, slot))
        .cloned()
        .collect()
}

/// Baseline strategy: lexicographic order, nothing else.
pub struct Lexicographic;

impl ValueOrdering for Lexicographic {
    fn order(
        &self,
        _graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<Word> {
        unused_candidates(store, assignment, slot)
    }
}

/// Least-constraining-value ordering.
///
/// Words that would eliminate the fewest candidates from unassigned
/// neighbors' current domains come first. The count covers both overlap
/// incompatibilities and the neighbor's copy of the word itself (which
/// distinctness would rule out). Computed live against the current store,
/// never a stale copy; ties fall back to lexicographic order.
pub struct LeastConstraining;

impl LeastConstraining {
    fn eliminations(
        graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
        word: &Word,
    ) -> usize {
        let mut count = 0;
        for &neighbor in graph.neighbors(slot) {
            if assignment.contains(neighbor) {
                continue;
            }
            let overlap = match graph.overlap(slot, neighbor) {
                Some(overlap) => overlap,
                None => continue,
            };
            let ours = letter_at(word, overlap.a);
            count += store
                .domain(neighbor)
                .iter()
                .filter(|candidate| {
                    letter_at(candidate, overlap.b) != ours || *candidate == word
                })
                .count();
        }
        count
    }
}

impl ValueOrdering for LeastConstraining {
    fn order(
        &self,
        graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<Word> {
        let mut scored: Vec<(usize, Word)> = unused_candidates(store, assignment, slot)
            .into_iter()
            .map(|word| {
                let cost = Self::eliminations(graph, store, assignment, slot, &word);
                (cost, word)
            })
            .collect();
        scored.sort();
        scored.into_iter().map(|(_, word)| word).collect()
    }
}

/// Shuffles the candidate order with a seeded generator, for varied fills
/// that are still reproducible run to run.
pub struct Shuffled {
    seed: u64,
}

impl Shuffled {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ValueOrdering for Shuffled {
    fn order(
        &self,
        _graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<Word> {
        let mut candidates = unused_candidates(store, assignment, slot);
        // Mix the slot id into the seed so different slots get different
        // permutations while each call site stays deterministic.
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ u64::from(slot.0));
        candidates.shuffle(&mut rng);
        candidates
    }
}
