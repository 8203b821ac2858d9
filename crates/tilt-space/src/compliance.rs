//! Checks every sweep order must satisfy, reusable across dimensions.

use crate::scan::scan_order;
use indexmap::IndexSet;
use tilt_core::{Direction, Position};

fn in_bounds(p: Position, columns: u32, rows: u32) -> bool {
    p.col >= 0 && p.row >= 0 && (p.col as u32) < columns && (p.row as u32) < rows
}

/// Sources are unique, in bounds, have in-bounds destinations, and cover
/// every such cell exactly once.
pub(crate) fn assert_scan_covers_sources(columns: u32, rows: u32) {
    for dir in Direction::ALL {
        let order = scan_order(dir, columns, rows);
        let reported = order.len();
        let seen: IndexSet<Position> = order.collect();
        assert_eq!(seen.len(), reported, "{dir}: duplicate or miscounted sources");
        for &p in &seen {
            assert!(in_bounds(p, columns, rows), "{dir}: source {p} out of bounds");
            assert!(
                in_bounds(p.step(dir), columns, rows),
                "{dir}: destination of {p} out of bounds"
            );
        }
        let expected = (0..rows as i32)
            .flat_map(|r| (0..columns as i32).map(move |c| Position::new(c, r)))
            .filter(|p| in_bounds(p.step(dir), columns, rows))
            .count();
        assert_eq!(seen.len(), expected, "{dir}: wrong source count");
    }
}

/// Whenever a source's destination is itself a source, the destination
/// is visited first.
pub(crate) fn assert_scan_dependency_order(columns: u32, rows: u32) {
    for dir in Direction::ALL {
        let seen: IndexSet<Position> = scan_order(dir, columns, rows).collect();
        for (i, &p) in seen.iter().enumerate() {
            if let Some(j) = seen.get_index_of(&p.step(dir)) {
                assert!(j < i, "{dir}: {p} visited before its destination");
            }
        }
    }
}

pub(crate) fn run_full_compliance(columns: u32, rows: u32) {
    assert_scan_covers_sources(columns, rows);
    assert_scan_dependency_order(columns, rows);
}
