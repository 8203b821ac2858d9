//! Per-direction visiting order for a single sweep.
//!
//! A sweep in direction `d` visits every cell whose `d`-neighbour is in
//! the grid. Within each lane (column for north/south, row for east/west)
//! cells are visited starting next to the destination border and working
//! away from it. A cell is therefore always visited after the cell it
//! moves into, so a contiguous chain advances as a block in one sweep.

use tilt_core::{Direction, Position};

/// Iterator over the source cells of one sweep, in dependency order.
///
/// Created by [`scan_order`]. Yields `lanes * (depth - 1)` positions,
/// where `depth` is the extent along the direction of travel; a grid one
/// cell deep along that axis yields nothing.
#[derive(Clone, Debug)]
pub struct ScanOrder {
    direction: Direction,
    lanes: u32,
    depth: u32,
    lane: u32,
    step: u32,
}

/// Visiting order for a sweep of a `columns` x `rows` grid in `direction`.
///
/// ```
/// use tilt_core::{Direction, Position};
/// use tilt_space::scan_order;
///
/// let west: Vec<_> = scan_order(Direction::West, 3, 1).collect();
/// assert_eq!(west, vec![Position::new(1, 0), Position::new(2, 0)]);
///
/// let south: Vec<_> = scan_order(Direction::South, 1, 3).collect();
/// assert_eq!(south, vec![Position::new(0, 1), Position::new(0, 0)]);
/// ```
pub fn scan_order(direction: Direction, columns: u32, rows: u32) -> ScanOrder {
    let (lanes, depth) = if direction.is_vertical() {
        (columns, rows)
    } else {
        (rows, columns)
    };
    ScanOrder {
        direction,
        lanes,
        depth,
        lane: 0,
        step: 0,
    }
}

impl ScanOrder {
    fn per_lane(&self) -> u32 {
        self.depth.saturating_sub(1)
    }
}

impl Iterator for ScanOrder {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let per_lane = self.per_lane();
        if per_lane == 0 || self.lane >= self.lanes {
            return None;
        }
        // Travel coordinate of the source: nearest the destination border first.
        let travel = match self.direction {
            Direction::North | Direction::West => self.step + 1,
            Direction::South | Direction::East => per_lane - 1 - self.step,
        };
        let pos = if self.direction.is_vertical() {
            Position::new(self.lane as i32, travel as i32)
        } else {
            Position::new(travel as i32, self.lane as i32)
        };
        self.step += 1;
        if self.step == per_lane {
            self.step = 0;
            self.lane += 1;
        }
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let per_lane = self.per_lane() as usize;
        let remaining = if per_lane == 0 || self.lane >= self.lanes {
            0
        } else {
            (self.lanes - self.lane) as usize * per_lane - self.step as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanOrder {}

impl std::iter::FusedIterator for ScanOrder {}
