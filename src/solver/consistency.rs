//! The two-phase consistency pipeline: a node-consistency length filter
//! followed by AC-3 arc-consistency propagation.

use tracing::{debug, trace};

use crate::{
    grid::{ConstraintGraph, SlotId},
    solver::{
        domains::{letter_at, word_len, DomainStore, WordSet},
        stats::SearchStats,
        work_list::{Arc, WorkList},
    },
};

/// Removes from every slot's domain each word whose length differs from the
/// slot's length. After this pass the length invariant holds permanently;
/// nothing later reintroduces a wrong-length word.
///
/// A domain may come out empty. That is not a failure here, the caller
/// observes it through the store.
pub fn enforce_node_consistency(graph: &ConstraintGraph, store: &mut DomainStore) {
    for id in graph.slot_ids() {
        let length = graph.slot(id).length;
        let filtered: WordSet = store
            .domain(id)
            .iter()
            .filter(|word| word_len(word) == length)
            .cloned()
            .collect();
        let removed = store.size(id) - filtered.len();
        if removed > 0 {
            trace!(slot = %id, removed, "node consistency pruned domain");
            store.set_domain(id, filtered);
        }
    }
}

/// Revises `x`'s domain against `y`'s: drops every word of `x` with no
/// overlap-compatible partner left in `y`'s domain. Returns the number of
/// words removed (zero when the pair has no overlap constraint).
pub fn revise(graph: &ConstraintGraph, store: &mut DomainStore, x: SlotId, y: SlotId) -> usize {
    let Some(overlap) = graph.overlap(x, y) else {
        return 0;
    };

    let retained: WordSet = {
        let y_domain = store.domain(y);
        store
            .domain(x)
            .iter()
            .filter(|word| {
                // Out-of-range indices only occur before node consistency,
                // and such a word can never satisfy the constraint anyway.
                let Some(ours) = letter_at(word, overlap.a) else {
                    return false;
                };
                y_domain
                    .iter()
                    .any(|candidate| letter_at(candidate, overlap.b) == Some(ours))
            })
            .cloned()
            .collect()
    };

    let removed = store.size(x) - retained.len();
    if removed > 0 {
        trace!(slot = %x, against = %y, removed, "revision pruned domain");
        store.set_domain(x, retained);
    }
    removed
}

/// Enforces arc consistency with the AC-3 worklist algorithm.
///
/// When `seed` is `None` the worklist starts with every directed arc of the
/// graph, in ascending slot-id order; otherwise only the given arcs (and
/// whatever their revisions re-enqueue). Whenever a revision shrinks `x`,
/// every arc `(z, x)` for a neighbor `z` other than the origin `y` goes
/// back on the list. Returns `true` iff every domain is non-empty once the
/// worklist drains; a domain that was already empty at entry fails the
/// run even when no queued arc touches it.
pub fn ac3(
    graph: &ConstraintGraph,
    store: &mut DomainStore,
    seed: Option<Vec<Arc>>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    match seed {
        Some(arcs) => {
            for arc in arcs {
                worklist.push_back(arc);
            }
        }
        None => {
            for x in graph.slot_ids() {
                for &y in graph.neighbors(x) {
                    worklist.push_back((x, y));
                }
            }
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        stats.revisions += 1;
        let removed = revise(graph, store, x, y);
        if removed == 0 {
            continue;
        }
        stats.prunings += removed as u64;
        if store.domain(x).is_empty() {
            debug!(slot = %x, "domain wiped out, branch infeasible");
            return false;
        }
        for &z in graph.neighbors(x) {
            if z != y {
                worklist.push_back((z, x));
            }
        }
    }

    if store.has_empty_domain(graph) {
        debug!("a domain was empty at entry, branch infeasible");
        return false;
    }
    debug!(
        remaining = store.total_size(),
        "propagation reached fixpoint"
    );
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        grid::parse_structure,
        solver::domains::Word,
    };

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::from(*w)).collect()
    }

    fn domain_of(store: &DomainStore, id: SlotId) -> Vec<&str> {
        store.domain(id).iter().map(|w| w.as_ref()).collect()
    }

    // Two length-3 slots crossing at their middle letters.
    fn plus_grid() -> crate::grid::ConstraintGraph {
        parse_structure("#_#\n___\n#_#").unwrap()
    }

    #[test]
    fn node_consistency_filters_by_length_only() {
        let graph = parse_structure("____").unwrap();
        let mut store = DomainStore::init(&graph, &words(&["CAT", "ACES", "TO", "DOGS"]));
        enforce_node_consistency(&graph, &mut store);

        for id in graph.slot_ids() {
            let length = graph.slot(id).length;
            assert!(store.domain(id).iter().all(|w| w.len() == length));
        }
        assert_eq!(domain_of(&store, SlotId(0)), vec!["ACES", "DOGS"]);
    }

    #[test]
    fn node_consistency_counts_characters_not_bytes() {
        // ÉTÉ is three letters but five bytes; it belongs in a length-3
        // slot all the same.
        let graph = parse_structure("___").unwrap();
        let mut store = DomainStore::init(&graph, &words(&["ÉTÉ", "ÂGES", "TO"]));
        enforce_node_consistency(&graph, &mut store);

        assert_eq!(domain_of(&store, SlotId(0)), vec!["ÉTÉ"]);
    }

    #[test]
    fn revise_compares_overlap_letters_by_character() {
        let graph = plus_grid();
        let mut store = DomainStore::init(&graph, &words(&["ÉTÉ", "ATE", "DOG"]));
        enforce_node_consistency(&graph, &mut store);

        // Down narrowed to ATE (middle T): only middle-T across words
        // survive, and the multi-byte É must not shift the offset.
        store.set_domain(SlotId(1), [Word::from("ATE")].into_iter().collect());
        revise(&graph, &mut store, SlotId(0), SlotId(1));

        assert_eq!(domain_of(&store, SlotId(0)), vec!["ATE", "ÉTÉ"]);
    }

    #[test]
    fn revise_drops_words_without_a_compatible_partner() {
        let graph = plus_grid();
        let mut store = DomainStore::init(&graph, &words(&["CAT", "DOG", "ACE"]));
        enforce_node_consistency(&graph, &mut store);

        // Keep only DOG in the down slot; nothing in the across slot has
        // a middle 'O', except DOG itself.
        store.set_domain(SlotId(1), [Word::from("DOG")].into_iter().collect());
        let removed = revise(&graph, &mut store, SlotId(0), SlotId(1));

        assert_eq!(removed, 2);
        assert_eq!(domain_of(&store, SlotId(0)), vec!["DOG"]);
    }

    #[test]
    fn revise_without_an_overlap_is_a_no_op() {
        let graph = parse_structure("__#\n###\n#__").unwrap();
        let mut store = DomainStore::init(&graph, &words(&["TO", "IN"]));
        let removed = revise(&graph, &mut store, SlotId(0), SlotId(1));
        assert_eq!(removed, 0);
    }

    #[test]
    fn ac3_prunes_words_with_no_crossing_partner() {
        let graph = plus_grid();
        // Middle letters: CAT -> A, DOG -> O, ACE -> C, WAS -> A.
        let mut store = DomainStore::init(&graph, &words(&["CAT", "DOG", "ACE", "WAS"]));
        enforce_node_consistency(&graph, &mut store);
        let mut stats = SearchStats::default();

        assert!(ac3(&graph, &mut store, None, &mut stats));

        // DOG (middle O) and ACE (middle C) survive only if some word in
        // the crossing slot shares that middle letter; DOG and ACE each
        // match themselves, so AC-3 alone cannot remove them. What it must
        // guarantee is that every survivor has a partner.
        for id in graph.slot_ids() {
            let (other, overlap) = {
                let other = graph.neighbors(id)[0];
                (other, graph.overlap(id, other).unwrap())
            };
            for word in store.domain(id) {
                assert!(store
                    .domain(other)
                    .iter()
                    .any(|c| letter_at(c, overlap.b) == letter_at(word, overlap.a)));
            }
        }
        assert!(stats.revisions >= 2);
    }

    #[test]
    fn ac3_reports_failure_on_a_wiped_out_domain() {
        let graph = plus_grid();
        let mut store = DomainStore::init(&graph, &words(&["CAT", "WAS"]));
        enforce_node_consistency(&graph, &mut store);
        // Narrow the across slot to ACE (middle C); neither CAT nor WAS
        // has a middle C, so the down slot must wipe out.
        store.set_domain(SlotId(0), [Word::from("ACE")].into_iter().collect());

        let mut stats = SearchStats::default();
        assert!(!ac3(&graph, &mut store, None, &mut stats));
    }

    #[test]
    fn ac3_rejects_a_domain_already_empty_at_entry() {
        let graph = plus_grid();
        let mut store = DomainStore::init(&graph, &words(&["CAT", "WAS"]));
        enforce_node_consistency(&graph, &mut store);
        store.set_domain(SlotId(0), WordSet::default());

        // An empty worklist never touches the emptied slot; the final
        // check must still report failure.
        let mut stats = SearchStats::default();
        assert!(!ac3(&graph, &mut store, Some(Vec::new()), &mut stats));
    }

    #[test]
    fn ac3_is_idempotent() {
        let graph = plus_grid();
        let mut store = DomainStore::init(&graph, &words(&["CAT", "DOG", "ACE", "WAS"]));
        enforce_node_consistency(&graph, &mut store);
        let mut stats = SearchStats::default();

        assert!(ac3(&graph, &mut store, None, &mut stats));
        let settled = store.total_size();
        let pruned_once = stats.prunings;

        assert!(ac3(&graph, &mut store, None, &mut stats));
        assert_eq!(store.total_size(), settled);
        assert_eq!(stats.prunings, pruned_once);
    }

    #[test]
    fn propagation_only_shrinks_domains() {
        let graph = plus_grid();
        let mut store = DomainStore::init(&graph, &words(&["CAT", "DOG", "ACE", "WAS", "TO"]));
        let before_node = store.total_size();
        enforce_node_consistency(&graph, &mut store);
        let after_node = store.total_size();
        assert!(after_node <= before_node);

        let mut stats = SearchStats::default();
        ac3(&graph, &mut store, None, &mut stats);
        assert!(store.total_size() <= after_node);
    }

    #[test]
    fn seeded_ac3_only_touches_reachable_arcs() {
        // Two independent crossing pairs; seeding arcs of one pair must
        // leave the other untouched.
        let graph = parse_structure("#_#####\n___####\n#_#####\n####_##\n###___#\n####_##").unwrap();
        assert_eq!(graph.slot_count(), 4);

        let mut store = DomainStore::init(&graph, &words(&["CAT", "ACE", "DOG"]));
        enforce_node_consistency(&graph, &mut store);

        // Narrow the first pair's across slot, then propagate only there.
        store.set_domain(SlotId(0), [Word::from("CAT")].into_iter().collect());
        let seed = graph
            .neighbors(SlotId(0))
            .iter()
            .map(|&n| (n, SlotId(0)))
            .collect();

        let mut stats = SearchStats::default();
        let sizes_before: Vec<usize> = graph.slot_ids().map(|id| store.size(id)).collect();
        assert!(ac3(&graph, &mut store, Some(seed), &mut stats));

        // Every slot outside the first pair keeps its domain.
        for id in graph.slot_ids() {
            if id != SlotId(0) && !graph.neighbors(SlotId(0)).contains(&id) {
                assert_eq!(store.size(id), sizes_before[id.0 as usize]);
            }
        }
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            // Consistency enforcement only ever removes candidates,
            // whatever the vocabulary looks like.
            #[test]
            fn consistency_never_grows_domains(
                vocab in proptest::collection::hash_set("[A-C]{2,4}", 1..16)
            ) {
                let graph = plus_grid();
                let vocabulary: Vec<Word> =
                    vocab.iter().map(|w| Word::from(w.as_str())).collect();
                let mut store = DomainStore::init(&graph, &vocabulary);

                let initial = store.total_size();
                enforce_node_consistency(&graph, &mut store);
                let after_node = store.total_size();
                prop_assert!(after_node <= initial);

                let mut stats = SearchStats::default();
                ac3(&graph, &mut store, None, &mut stats);
                prop_assert!(store.total_size() <= after_node);
            }
        }
    }
}
