//! Estimates of the remaining cost from a state to the goal.
//!
//! Pure functions of a state, used by best first search to order its
//! frontier. Less is better. Neither estimate is admissible and no
//! optimality is claimed for searches guided by them.

use std::fmt::{self, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::puzzle::Puzzle;

/// Distinguished estimate for states where the probe or the dock is missing.
/// Arithmetic on an absent position is undefined, such states simply sort
/// last in the frontier.
pub const UNREACHABLE: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan,
    AsteroidBlocking,
}

impl Heuristic {
    pub fn estimate(self, state: &Puzzle) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan(state),
            Heuristic::AsteroidBlocking => asteroid_blocking(state),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::AsteroidBlocking => write!(f, "blocking"),
        }
    }
}

/// Manhattan distance from the probe to the dock.
pub fn manhattan(state: &Puzzle) -> u32 {
    match (state.probe(), state.dock()) {
        (Some(probe), Some(dock)) => probe.dist(dock) as u32,
        _ => UNREACHABLE,
    }
}

/// Manhattan distance plus 2 for every asteroid strictly between the probe
/// and the dock when they share a row or a column. Deliberately myopic: only
/// the straight cardinal line counts and walls on it add nothing.
pub fn asteroid_blocking(state: &Puzzle) -> u32 {
    let (probe, dock) = match (state.probe(), state.dock()) {
        (Some(probe), Some(dock)) => (probe, dock),
        _ => return UNREACHABLE,
    };

    let grid = state.grid();
    let mut penalty = 0;

    if probe.r == dock.r {
        let (lo, hi) = if probe.c < dock.c {
            (probe.c, dock.c)
        } else {
            (dock.c, probe.c)
        };
        for c in lo + 1..hi {
            if grid[Pos { r: probe.r, c }] == Cell::Asteroid {
                penalty += 2;
            }
        }
    }

    if probe.c == dock.c {
        let (lo, hi) = if probe.r < dock.r {
            (probe.r, dock.r)
        } else {
            (dock.r, probe.r)
        };
        for r in lo + 1..hi {
            if grid[Pos { r, c: probe.c }] == Cell::Asteroid {
                penalty += 2;
            }
        }
    }

    probe.dist(dock) as u32 + penalty
}
