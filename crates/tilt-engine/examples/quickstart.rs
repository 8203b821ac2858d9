//! Tilt quickstart: every variant on a small board.
//!
//! Demonstrates:
//!   1. Parsing a layout from text
//!   2. Tilting gathering, filling and mapping sessions
//!   3. Resolving pointer positions to directions
//!   4. Writing a custom movement rule
//!   5. Placing and undoing assembly tiles
//!
//! Run with:
//!   cargo run --example quickstart

use tilt_core::{CellState, Direction, Position};
use tilt_engine::{
    assembly, filling, gathering, mapping, AxisPriority, DirectionResolver, Pointer,
    SessionConfig, ThresholdResolver, TiltSession,
};
use tilt_propagator::TransitionPolicy;
use tilt_space::{Grid, Layout};

// ─── Boards ─────────────────────────────────────────────────────

const GATHER: &str = "
# 0 empty, 1 vacant, 2 particle
0111110
1121211
1111111
0121110
";

const FILL: &str = "
0121110
0111110
0110110
0111110
";

const MAP: &str = "
00000
01210
01110
00000
";

// ─── Custom rule: particles fall off the board edge ─────────────
//
// Same cells as gathering; a particle next to an empty cell leaves
// the board instead of stopping.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Hole,
    Floor,
    Ball,
}

impl CellState for Cell {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Hole),
            1 => Some(Cell::Floor),
            2 => Some(Cell::Ball),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn is_occupied(self) -> bool {
        self == Cell::Ball
    }

    fn is_playable(self) -> bool {
        self != Cell::Hole
    }
}

struct Drain;

impl TransitionPolicy for Drain {
    type Cell = Cell;

    fn name(&self) -> &str {
        "drain"
    }

    fn try_move(&self, grid: &mut Grid<Cell>, from: Position, to: Position) -> bool {
        match (grid.get(from), grid.get(to)) {
            (Some(Cell::Ball), Some(Cell::Floor)) => {
                grid.set(to, Cell::Ball);
                grid.set(from, Cell::Floor)
            }
            (Some(Cell::Ball), Some(Cell::Hole)) => grid.set(from, Cell::Floor),
            _ => false,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Gathering ───────────────────────────────────────────────
    let mut g = gathering(Layout::parse(GATHER)?)?;
    println!("gathering, {} particles:\n{}\n", g.occupied(), g.grid());
    for dir in [Direction::South, Direction::East] {
        g.settle(dir);
        let m = g.last_metrics();
        println!(
            "tilt {dir}: {} passes, {} moves, {}us\n{}\n",
            m.passes,
            m.transitions,
            m.total_us,
            g.grid()
        );
    }

    // ── Filling ─────────────────────────────────────────────────
    let mut f = filling(Layout::parse(FILL)?)?;
    f.settle(Direction::South);
    println!("filling south, {} cells filled:\n{}\n", f.occupied(), f.grid());
    f.reset();

    // ── Mapping, driven by pointer positions ────────────────────
    let mut m = mapping(Layout::parse(MAP)?)?;
    let resolver =
        ThresholdResolver::new(400.0, 300.0)?.with_priority(AxisPriority::HorizontalFirst);
    for (x, y) in [(200.0, 10.0), (390.0, 150.0), (200.0, 150.0)] {
        let dir = resolver.resolve(Pointer::new(x, y));
        let changed = m.tilt(dir);
        println!("pointer ({x}, {y}) -> {dir:?}, changed: {changed}");
    }
    println!("{}\n", m.grid());

    // ── Custom rule ─────────────────────────────────────────────
    let mut d = TiltSession::new(SessionConfig::new(Layout::parse(GATHER)?, Drain))?;
    d.settle(Direction::West);
    println!("{} west, {} balls left:\n{}\n", d.policy().name(), d.occupied(), d.grid());

    // ── Assembly ────────────────────────────────────────────────
    let mut a = assembly(Layout::parse("1111\n1111\n0110")?)?;
    a.place(Position::new(1, 2));
    a.place(Position::new(1, 1));
    println!("assembly, {} candidates:\n{}", a.candidate_count(), a.grid());
    a.undo();
    println!("after undo, last placed {:?}", a.last_placed());

    Ok(())
}
