//! Variable- and value-ordering heuristics for the backtracking search.
//!
//! Heuristics are a performance layer, not a correctness layer: the solver
//! finds a solution (or proves there is none) with any of them, they only
//! change how quickly. Every implementation here is fully deterministic,
//! including the seeded shuffle.

pub mod value;
pub mod variable;

pub use value::{LeastConstraining, Lexicographic, Shuffled, ValueOrdering};
pub use variable::{FirstUnassigned, MrvDegree, VariableSelection};
