use prettytable::{Cell, Row, Table};

/// Counters accumulated over one solve. Purely observational; nothing in
/// the solver branches on them except the node budget check.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Search nodes expanded, including the root.
    pub nodes_visited: u64,
    /// Candidate words that failed and were retracted.
    pub backtracks: u64,
    /// Arcs popped and revised by AC-3.
    pub revisions: u64,
    /// Words removed from domains by AC-3.
    pub prunings: u64,
    /// Set when the search stopped on its node budget rather than by
    /// exhausting the space; a `None` result is then inconclusive.
    pub budget_exhausted: bool,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Arc revisions"),
        Cell::new(&stats.revisions.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Words pruned"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Budget exhausted"),
        Cell::new(&stats.budget_exhausted.to_string()),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_includes_every_counter() {
        let stats = SearchStats {
            nodes_visited: 12,
            backtracks: 3,
            revisions: 40,
            prunings: 7,
            budget_exhausted: false,
        };
        let rendered = render_stats_table(&stats);
        for needle in ["Nodes visited", "12", "Backtracks", "3", "40", "7"] {
            assert!(rendered.contains(needle), "missing {needle} in:\n{rendered}");
        }
    }
}
