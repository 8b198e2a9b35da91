use tracing::{debug, trace};

use crate::{
    grid::{ConstraintGraph, SlotId},
    solver::{
        assignment::Assignment,
        consistency::{ac3, enforce_node_consistency},
        domains::{DomainStore, Word},
        heuristics::{LeastConstraining, MrvDegree, ValueOrdering, VariableSelection},
        stats::SearchStats,
    },
};

/// Knobs that change how the search runs, never what it concludes.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Re-run AC-3 around each tentative assignment (maintaining arc
    /// consistency). More pruning per node at more cost per node.
    pub maintain_arc_consistency: bool,
    /// Upper bound on expanded search nodes. When hit, the solve stops
    /// with no assignment and [`SearchStats::budget_exhausted`] set, which
    /// is distinct from a proven "no solution."
    pub node_budget: Option<u64>,
}

/// The solver: node consistency, then AC-3, then backtracking search.
///
/// Failure to find an assignment is a normal return value. The only state
/// shared across branches is the domain store, and each branch works on
/// its own cheap persistent snapshot, so unwinding a branch is just
/// dropping it.
pub struct Solver {
    variable_heuristic: Box<dyn VariableSelection>,
    value_heuristic: Box<dyn ValueOrdering>,
    config: SolverConfig,
}

impl Solver {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelection>,
        value_heuristic: Box<dyn ValueOrdering>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Solves the puzzle described by `graph` against `vocabulary`.
    ///
    /// Returns the complete assignment if one exists, `None` if the puzzle
    /// is unsolvable (or the node budget ran out; see the stats), plus the
    /// search statistics either way.
    pub fn solve(
        &self,
        graph: &ConstraintGraph,
        vocabulary: &[Word],
    ) -> (Option<Assignment>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut store = DomainStore::init(graph, vocabulary);

        enforce_node_consistency(graph, &mut store);
        if store.has_empty_domain(graph) {
            debug!("a slot has no candidate of its length, puzzle infeasible");
            return (None, stats);
        }
        if !ac3(graph, &mut store, None, &mut stats) {
            debug!("initial propagation proved the puzzle infeasible");
            return (None, stats);
        }

        let mut assignment = Assignment::new();
        let result = self.backtrack(graph, &store, &mut assignment, &mut stats);
        if result.is_none() && !stats.budget_exhausted {
            debug!(
                nodes = stats.nodes_visited,
                backtracks = stats.backtracks,
                "search exhausted, no solution"
            );
        }
        (result, stats)
    }

    /// One node of the search. Every mutation made here is undone on every
    /// exit path: assignments are retracted below, and domain changes live
    /// only in the branch's own store snapshot.
    fn backtrack(
        &self,
        graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> Option<Assignment> {
        stats.nodes_visited += 1;
        if let Some(budget) = self.config.node_budget {
            if stats.nodes_visited > budget {
                stats.budget_exhausted = true;
                return None;
            }
        }

        if assignment.is_complete(graph) {
            return Some(assignment.clone());
        }

        let slot = self
            .variable_heuristic
            .select(graph, store, assignment)?;

        for word in self
            .value_heuristic
            .order(graph, store, assignment, slot)
        {
            trace!(slot = %slot, word = %word, "trying candidate");
            assignment.assign(slot, word.clone());

            if assignment.is_consistent(graph) {
                let descended = if self.config.maintain_arc_consistency {
                    self.propagate_and_recurse(graph, store, assignment, stats, slot, word)
                } else {
                    self.backtrack(graph, store, assignment, stats)
                };
                if descended.is_some() {
                    return descended;
                }
            }

            assignment.unassign(slot);
            stats.backtracks += 1;
            if stats.budget_exhausted {
                return None;
            }
        }

        None
    }

    /// The optional maintaining-arc-consistency step: narrow the slot's
    /// domain in a branch-local snapshot, propagate only the arcs pointing
    /// at it, and recurse on the pruned store if no domain emptied.
    fn propagate_and_recurse(
        &self,
        graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
        slot: SlotId,
        word: Word,
    ) -> Option<Assignment> {
        let mut branch_store = store.clone();
        branch_store.narrow_to(slot, word);
        let seed = graph
            .neighbors(slot)
            .iter()
            .map(|&neighbor| (neighbor, slot))
            .collect();
        if ac3(graph, &mut branch_store, Some(seed), stats) {
            self.backtrack(graph, &branch_store, assignment, stats)
        } else {
            None
        }
    }
}

impl Default for Solver {
    /// MRV with degree tie-break and least-constraining-value ordering.
    fn default() -> Self {
        Self::new(Box::new(MrvDegree), Box::new(LeastConstraining))
    }
}
