//! Rendering a solved assignment back onto the grid, and a serializable
//! report for machine consumers.

use serde::Serialize;

use crate::{
    grid::{ConstraintGraph, Direction},
    solver::assignment::Assignment,
};

const BLOCKED_CELL: char = '█';

/// The letters an assignment places on the grid; `None` for cells no
/// assigned slot covers.
fn letter_grid(graph: &ConstraintGraph, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; graph.width()]; graph.height()];
    for (id, word) in assignment.iter() {
        let slot = graph.slot(id);
        for (k, ch) in word.chars().enumerate() {
            let (row, col) = slot.cell(k);
            letters[row][col] = Some(ch);
        }
    }
    letters
}

/// Renders the assignment as text, one grid row per line: letters in open
/// cells, a full block for blocked cells, a space for unfilled open cells.
pub fn to_text(graph: &ConstraintGraph, assignment: &Assignment) -> String {
    let letters = letter_grid(graph, assignment);
    let mut out = String::with_capacity((graph.width() + 1) * graph.height());
    for row in 0..graph.height() {
        for col in 0..graph.width() {
            if graph.is_open(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push(BLOCKED_CELL);
            }
        }
        out.push('\n');
    }
    out
}

/// One filled slot in a [`to_report`] dump.
#[derive(Debug, Serialize)]
pub struct SlotFill {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
    pub word: String,
}

/// The assignment as a flat, serializable list in slot-id order, carrying
/// the geometry a downstream renderer needs.
pub fn to_report(graph: &ConstraintGraph, assignment: &Assignment) -> Vec<SlotFill> {
    graph
        .slot_ids()
        .filter_map(|id| {
            let word = assignment.get(id)?;
            let slot = graph.slot(id);
            Some(SlotFill {
                row: slot.row,
                col: slot.col,
                direction: slot.direction,
                length: slot.length,
                word: word.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        grid::{parse_structure, SlotId},
        solver::domains::Word,
    };

    fn solved_plus() -> (ConstraintGraph, Assignment) {
        let graph = parse_structure("#_#\n___\n#_#").unwrap();
        let mut assignment = Assignment::new();
        assignment.assign(SlotId(0), Word::from("CAT"));
        assignment.assign(SlotId(1), Word::from("WAS"));
        (graph, assignment)
    }

    #[test]
    fn text_rendering_overlays_words_on_the_grid() {
        let (graph, assignment) = solved_plus();
        assert_eq!(to_text(&graph, &assignment), "█W█\nCAT\n█S█\n");
    }

    #[test]
    fn partial_assignments_leave_open_cells_blank() {
        let graph = parse_structure("#_#\n___\n#_#").unwrap();
        let mut assignment = Assignment::new();
        assignment.assign(SlotId(1), Word::from("WAS"));
        assert_eq!(to_text(&graph, &assignment), "█W█\n A \n█S█\n");
    }

    #[test]
    fn report_lists_fills_with_their_geometry() {
        let (graph, assignment) = solved_plus();
        let report = to_report(&graph, &assignment);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].word, "CAT");
        assert_eq!((report[0].row, report[0].col), (1, 0));
        assert_eq!(report[1].word, "WAS");
        assert_eq!(report[1].direction, Direction::Down);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"direction\":\"down\""));
    }
}
