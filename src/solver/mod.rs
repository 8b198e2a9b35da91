//! The solving pipeline: domain store, consistency enforcement, and
//! backtracking search.

pub mod assignment;
pub mod consistency;
pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod stats;
pub mod work_list;

pub use assignment::Assignment;
pub use domains::{letter_at, word_len, DomainStore, Word, WordSet};
pub use engine::{Solver, SolverConfig};
pub use stats::SearchStats;
