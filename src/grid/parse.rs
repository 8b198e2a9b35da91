//! Loaders for the two input artifacts: the grid-structure file and the
//! word list. Both formats are line-oriented text.

use crate::{
    error::{Error, Result},
    grid::graph::ConstraintGraph,
    solver::domains::Word,
};

/// The character marking an open cell in a structure file. Every other
/// character is a blocked cell.
const OPEN_CELL: char = '_';

/// Parses a rectangular structure file into a [`ConstraintGraph`].
///
/// Trailing newlines are tolerated; ragged rows and grids without a single
/// slot are rejected here, before the solver ever runs.
pub fn parse_structure(text: &str) -> Result<ConstraintGraph> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return Err(Error::EmptyGrid);
    }

    let expected = lines[0].chars().count();
    if expected == 0 {
        return Err(Error::EmptyGrid);
    }
    let mut cells = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != expected {
            return Err(Error::RaggedGrid {
                row,
                found,
                expected,
            });
        }
        cells.push(line.chars().map(|ch| ch == OPEN_CELL).collect());
    }

    let graph = ConstraintGraph::build(cells);
    if graph.slot_count() == 0 {
        return Err(Error::NoSlots);
    }
    Ok(graph)
}

/// Parses a word list, one candidate per line.
///
/// Words are trimmed, uppercased and deduplicated; blank lines are skipped.
/// The result is sorted so the initial domains iterate in a stable order.
pub fn parse_wordlist(text: &str) -> Vec<Word> {
    let mut words: Vec<Word> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Word::from(line.to_uppercase()))
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}
