//! The puzzle's constraint graph and the loaders that build it.

pub mod graph;
pub mod parse;

pub use graph::{ConstraintGraph, Direction, Overlap, Slot, SlotId};
pub use parse::{parse_structure, parse_wordlist};
