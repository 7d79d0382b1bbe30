mod stats;

pub use self::stats::Stats;

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use log::debug;

use crate::config::Method;
use crate::heuristics::Heuristic;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::Solve;

/// Outcome of one search run. `moves` is `None` when the explored space
/// contains no goal - a valid terminal result, not an error.
pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub(crate) method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, method: Method) -> Self {
        Self {
            moves,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "{}: no solution", self.method)?,
            Some(ref moves) => writeln!(f, "{}: {} moves", self.method, moves.move_cnt())?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, method: Method) -> SolverOk {
        solve(self, method)
    }
}

pub fn solve(initial: &Puzzle, method: Method) -> SolverOk {
    debug!("Solving with {}", method);
    let (moves, stats) = match method {
        Method::Dfs => depth_first(initial),
        Method::Bfs => breadth_first(initial),
        Method::BestFirst(heuristic) => best_first(initial, heuristic),
    };
    debug!("Done: explored {} nodes", stats.nodes_explored);
    SolverOk::new(moves, stats, method)
}

// The three searches share their loop contract: pop, count the pop, goal test
// before the visited check, expand only not-yet-visited successors. They
// differ only in frontier discipline, which decides what gets popped next.
//
// TODO skip successors already sitting in the frontier - a state can be
// enqueued more than once before its first pop marks it visited, the
// duplicate pops are counted but wasted

/// Stack frontier. Finds some solution, no length guarantee.
pub fn depth_first(initial: &Puzzle) -> (Option<Moves>, Stats) {
    let mut stats = Stats::new();
    let mut frontier = vec![(initial.clone(), Moves::default())];
    stats.nodes_created += 1;
    let mut visited = FnvHashSet::default();

    while let Some((current, path)) = frontier.pop() {
        stats.nodes_explored += 1;

        if current.is_goal() {
            return (Some(path), stats);
        }

        if !visited.insert(current.key().clone()) {
            stats.duplicates += 1;
            continue;
        }

        for (dir, next) in current.move_gen() {
            if !visited.contains(next.key()) {
                let mut next_path = path.clone();
                next_path.add(dir);
                frontier.push((next, next_path));
                stats.nodes_created += 1;
            }
        }
    }

    (None, stats)
}

/// Queue frontier. All states at depth k are popped before any at depth k+1,
/// so the first goal found is reached by a fewest-moves path.
pub fn breadth_first(initial: &Puzzle) -> (Option<Moves>, Stats) {
    let mut stats = Stats::new();
    let mut frontier = VecDeque::new();
    frontier.push_back((initial.clone(), Moves::default()));
    stats.nodes_created += 1;
    let mut visited = FnvHashSet::default();

    while let Some((current, path)) = frontier.pop_front() {
        stats.nodes_explored += 1;

        if current.is_goal() {
            return (Some(path), stats);
        }

        if !visited.insert(current.key().clone()) {
            stats.duplicates += 1;
            continue;
        }

        for (dir, next) in current.move_gen() {
            if !visited.contains(next.key()) {
                let mut next_path = path.clone();
                next_path.add(dir);
                frontier.push_back((next, next_path));
                stats.nodes_created += 1;
            }
        }
    }

    (None, stats)
}

/// Priority frontier ordered by the heuristic alone - greedy, not A*: path
/// length so far is ignored, so even an admissible heuristic guarantees
/// nothing about solution length. Ties pop in insertion order.
pub fn best_first(initial: &Puzzle, heuristic: Heuristic) -> (Option<Moves>, Stats) {
    let mut stats = Stats::new();
    let mut counter = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(Node {
        h: heuristic.estimate(initial),
        counter,
        state: initial.clone(),
        path: Moves::default(),
    }));
    stats.nodes_created += 1;
    let mut visited = FnvHashSet::default();

    while let Some(Reverse(node)) = frontier.pop() {
        stats.nodes_explored += 1;

        if node.state.is_goal() {
            return (Some(node.path), stats);
        }

        if !visited.insert(node.state.key().clone()) {
            stats.duplicates += 1;
            continue;
        }

        for (dir, next) in node.state.move_gen() {
            if !visited.contains(next.key()) {
                counter += 1;
                let mut next_path = node.path.clone();
                next_path.add(dir);
                // estimated once here, never re-evaluated
                frontier.push(Reverse(Node {
                    h: heuristic.estimate(&next),
                    counter,
                    state: next,
                    path: next_path,
                }));
                stats.nodes_created += 1;
            }
        }
    }

    (None, stats)
}

#[derive(Debug)]
struct Node {
    h: u32,
    // monotonic insertion counter, breaks ties deterministically since
    // BinaryHeap is not stable
    counter: u64,
    state: Puzzle,
    path: Moves,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.h, self.counter).cmp(&(other.h, other.counter))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}
