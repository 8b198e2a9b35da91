use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A handle to a slot in a [`ConstraintGraph`].
///
/// Slots are interned during graph construction; the rest of the crate
/// refers to them by id. Ids are dense, starting at zero, and their order
/// is the deterministic scan order of the grid (across slots in row-major
/// order, then down slots in column-major order), which makes them usable
/// as a tie-break key for heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// The direction a slot runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

/// A maximal run of open cells in one direction, the unit a word is
/// assigned to. Immutable once the graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    /// Row of the first cell, zero-indexed from the top.
    pub row: usize,
    /// Column of the first cell, zero-indexed from the left.
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// The grid coordinate of the `k`-th cell of this slot.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// All coordinates covered by this slot, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|k| self.cell(k))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "({}, {}) {} len {}", self.row, self.col, dir, self.length)
    }
}

/// The character positions at which two intersecting slots must agree.
///
/// For an ordered pair of slots `(a, b)`, the letter at index `a` of a's
/// word must equal the letter at index `b` of b's word. The relation is
/// symmetric in existence but the offsets are directional; the graph stores
/// both orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// Index into the first slot's word.
    pub a: usize,
    /// Index into the second slot's word.
    pub b: usize,
}

/// Immutable description of a puzzle: the grid geometry, the slots derived
/// from it, and the pairwise overlap relation between intersecting slots.
///
/// Everything downstream of the loader (domain store, consistency engine,
/// search) consumes this read-only.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    cells: Vec<Vec<bool>>,
    slots: Vec<Slot>,
    overlaps: HashMap<(SlotId, SlotId), Overlap>,
    neighbors: Vec<Vec<SlotId>>,
}

impl ConstraintGraph {
    /// Builds the graph from a rectangular grid of cells, `true` meaning
    /// open. Slots are maximal runs of at least two open cells per row and
    /// per column; overlaps are computed once from their geometry.
    pub fn build(cells: Vec<Vec<bool>>) -> Self {
        let mut slots = Vec::new();

        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        for (row, line) in cells.iter().enumerate() {
            scan_runs(line.iter().copied(), |start, length| {
                slots.push(Slot {
                    row,
                    col: start,
                    direction: Direction::Across,
                    length,
                });
            });
        }
        for col in 0..width {
            scan_runs((0..height).map(|row| cells[row][col]), |start, length| {
                slots.push(Slot {
                    row: start,
                    col,
                    direction: Direction::Down,
                    length,
                });
            });
        }

        let mut overlaps = HashMap::new();
        let mut neighbors = vec![Vec::new(); slots.len()];
        for (i, a) in slots.iter().enumerate() {
            for (j, b) in slots.iter().enumerate().skip(i + 1) {
                let Some((ia, ib)) = common_cell(a, b) else {
                    continue;
                };
                let (i, j) = (SlotId(i as u32), SlotId(j as u32));
                overlaps.insert((i, j), Overlap { a: ia, b: ib });
                overlaps.insert((j, i), Overlap { a: ib, b: ia });
                neighbors[i.0 as usize].push(j);
                neighbors[j.0 as usize].push(i);
            }
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self {
            cells,
            slots,
            overlaps,
            neighbors,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot ids in ascending order, the crate's canonical iteration order.
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> {
        (0..self.slots.len() as u32).map(SlotId)
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.0 as usize]
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The overlap constraint between an ordered pair of slots, or `None`
    /// if their cells do not intersect.
    pub fn overlap(&self, a: SlotId, b: SlotId) -> Option<Overlap> {
        self.overlaps.get(&(a, b)).copied()
    }

    /// Slots whose cells intersect `id`'s, in ascending id order.
    pub fn neighbors(&self, id: SlotId) -> &[SlotId] {
        &self.neighbors[id.0 as usize]
    }

    /// The number of overlap constraints `id` participates in.
    pub fn degree(&self, id: SlotId) -> usize {
        self.neighbors[id.0 as usize].len()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }
}

/// Calls `emit(start, length)` for every run of `true` cells of length >= 2.
fn scan_runs(cells: impl Iterator<Item = bool>, mut emit: impl FnMut(usize, usize)) {
    let mut run_start = None;
    let mut end = 0;
    for (pos, open) in cells.enumerate() {
        match (open, run_start) {
            (true, None) => run_start = Some(pos),
            (false, Some(start)) => {
                if pos - start >= 2 {
                    emit(start, pos - start);
                }
                run_start = None;
            }
            _ => {}
        }
        end = pos + 1;
    }
    if let Some(start) = run_start {
        if end - start >= 2 {
            emit(start, end - start);
        }
    }
}

/// If `a` and `b` share a cell, the word indices of that cell in each.
/// Across/down pairs intersect in at most one cell; parallel slots never
/// share one because runs are maximal.
fn common_cell(a: &Slot, b: &Slot) -> Option<(usize, usize)> {
    let b_cells: HashMap<(usize, usize), usize> =
        b.cells().enumerate().map(|(k, cell)| (cell, k)).collect();
    a.cells()
        .enumerate()
        .find_map(|(ka, cell)| b_cells.get(&cell).map(|&kb| (ka, kb)))
}
