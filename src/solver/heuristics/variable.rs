use std::cmp::Reverse;

use crate::{
    grid::{ConstraintGraph, SlotId},
    solver::{assignment::Assignment, domains::DomainStore},
};

/// Strategy for choosing which unassigned slot to branch on next.
pub trait VariableSelection {
    /// Picks an unassigned slot, or `None` when every slot is assigned.
    fn select(
        &self,
        graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId>;
}

/// Baseline strategy: the unassigned slot with the lowest id.
pub struct FirstUnassigned;

impl VariableSelection for FirstUnassigned {
    fn select(
        &self,
        graph: &ConstraintGraph,
        _store: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        graph.slot_ids().find(|&id| !assignment.contains(id))
    }
}

/// Minimum-remaining-values with degree tie-break.
///
/// Picks the unassigned slot with the smallest current domain; ties go to
/// the slot with the most overlap constraints, then to the lowest slot id
/// so the choice is reproducible.
pub struct MrvDegree;

impl VariableSelection for MrvDegree {
    fn select(
        &self,
        graph: &ConstraintGraph,
        store: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        graph
            .slot_ids()
            .filter(|&id| !assignment.contains(id))
            .min_by_key(|&id| (store.size(id), Reverse(graph.degree(id)), id))
    }
}
