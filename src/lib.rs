//! Crossfill is a constraint-satisfaction solver for crossword-style
//! fill-in puzzles.
//!
//! Given a grid structure (blocked and open cells arranged into slots) and
//! a word list, it finds an assignment of one distinct word per slot such
//! that every letter-overlap constraint between intersecting slots holds.
//!
//! The pipeline has three stages:
//!
//! - **Node consistency**: each slot's domain is filtered down to words of
//!   the slot's exact length.
//! - **Arc consistency (AC-3)**: words with no compatible partner in a
//!   crossing slot's domain are propagated away.
//! - **Backtracking search**: the remaining space is searched with
//!   pluggable variable-selection and value-ordering heuristics
//!   (MRV/degree and least-constraining-value by default).
//!
//! An unsolvable puzzle is a normal outcome, reported as an absent
//! assignment rather than an error.
//!
//! # Example
//!
//! ```
//! use crossfill::grid::{parse_structure, parse_wordlist, SlotId};
//! use crossfill::solver::{letter_at, Solver};
//!
//! // A length-3 across slot crossing a length-3 down slot at both words'
//! // middle letters.
//! let graph = parse_structure("#_#\n___\n#_#").unwrap();
//! let vocabulary = parse_wordlist("cat\ndog\ncar\nace\n");
//!
//! let (solution, stats) = Solver::default().solve(&graph, &vocabulary);
//! let assignment = solution.expect("this puzzle is solvable");
//!
//! let across = assignment.get(SlotId(0)).unwrap();
//! let down = assignment.get(SlotId(1)).unwrap();
//! assert_eq!(letter_at(across, 1), letter_at(down, 1));
//! assert_ne!(across, down);
//! assert!(stats.nodes_visited > 0);
//! ```

pub mod error;
pub mod grid;
pub mod render;
pub mod solver;
