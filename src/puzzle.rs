use crate::data::{Cell, Dir, Pos, DIRECTIONS};
use crate::formatter::GridFormatter;
use crate::vec2d::{GridError, Vec2d};

/// One configuration of the asteroid field.
///
/// Owns its grid - no sharing between states. `probe` and `dock` are caches
/// scanned from the grid at construction and kept consistent by [`apply`];
/// they are derivable from the grid and not part of the state key. A state is
/// never mutated after construction, every transition yields a fresh one.
///
/// [`apply`]: Puzzle::apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Vec2d<Cell>,
    probe: Option<Pos>,
    dock: Option<Pos>,
}

impl Puzzle {
    /// Either marker may be absent - such a puzzle is degenerate but valid:
    /// `is_goal` is false and searches report no solution.
    pub fn new(grid: Vec2d<Cell>) -> Puzzle {
        let probe = Puzzle::find(&grid, Cell::Probe);
        let dock = Puzzle::find(&grid, Cell::Dock);
        Puzzle { grid, probe, dock }
    }

    /// Copies the caller's rows, rejecting ragged and empty grids.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Puzzle, GridError> {
        Ok(Puzzle::new(Vec2d::from_rows(rows)?))
    }

    fn find(grid: &Vec2d<Cell>, target: Cell) -> Option<Pos> {
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let pos = Pos::new(r, c);
                if grid[pos] == target {
                    return Some(pos);
                }
            }
        }
        None
    }

    pub fn probe(&self) -> Option<Pos> {
        self.probe
    }

    pub fn dock(&self) -> Option<Pos> {
        self.dock
    }

    pub fn grid(&self) -> &Vec2d<Cell> {
        &self.grid
    }

    /// Canonical key for visited tracking - the grid contents themselves.
    pub fn key(&self) -> &Vec2d<Cell> {
        &self.grid
    }

    pub fn render(&self) -> GridFormatter<'_> {
        GridFormatter::new(self)
    }

    /// Solved iff the probe stands on the docking bay. Compares the cached
    /// positions - once the probe moves onto the dock, the grid holds only
    /// the probe code there.
    pub fn is_goal(&self) -> bool {
        self.probe.is_some() && self.probe == self.dock
    }

    pub fn is_valid_pos(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// All legal moves with their resulting states, in up, down, left, right
    /// order. A pure query - repeated calls return the same moves.
    pub fn move_gen(&self) -> Vec<(Dir, Puzzle)> {
        let mut moves = Vec::new();
        let probe = match self.probe {
            Some(probe) => probe,
            None => return moves,
        };

        for &dir in &DIRECTIONS {
            let next = probe + dir;
            if !self.is_valid_pos(next) {
                continue;
            }
            let legal = match self.grid[next] {
                Cell::Empty | Cell::Dock => true,
                Cell::Wall => false,
                Cell::Asteroid => self.can_push(next, dir),
                // there is only one probe on the grid
                Cell::Probe => false,
            };
            if legal {
                if let Some(new_state) = self.apply(dir) {
                    moves.push((dir, new_state));
                }
            }
        }

        moves
    }

    /// A run of asteroids starting at `start` can be pushed iff the first
    /// cell past its far end is in bounds and exactly empty - not a wall,
    /// not another asteroid and not the dock. Pushing an asteroid onto the
    /// docking bay is against the rules of the game.
    fn can_push(&self, start: Pos, dir: Dir) -> bool {
        let mut pos = start;
        while self.is_valid_pos(pos) && self.grid[pos] == Cell::Asteroid {
            pos = pos + dir;
        }
        self.is_valid_pos(pos) && self.grid[pos] == Cell::Empty
    }

    /// Produces the state after moving in `dir`, leaving `self` untouched.
    ///
    /// Meant to be called for directions `move_gen` offers. Calling it with a
    /// rejected direction is a contract violation - it asserts in debug
    /// builds and returns `None` in release builds.
    pub fn apply(&self, dir: Dir) -> Option<Puzzle> {
        let probe = self.probe?;
        let next = probe + dir;
        if !self.is_valid_pos(next) {
            return None;
        }
        debug_assert!(self.grid[next] != Cell::Wall, "move into a wall");

        let mut new_state = self.clone();
        if new_state.grid[next] == Cell::Asteroid {
            if !self.can_push(next, dir) {
                debug_assert!(false, "push without room to push into");
                return None;
            }

            // Shifting a contiguous run one cell only changes its ends: the
            // cell past the far end gains an asteroid, the near cell loses
            // one (and receives the probe below). The middle stays asteroids.
            let mut run_end = next;
            while new_state.is_valid_pos(run_end + dir)
                && new_state.grid[run_end + dir] == Cell::Asteroid
            {
                run_end = run_end + dir;
            }
            new_state.grid[run_end + dir] = Cell::Asteroid;
            new_state.grid[next] = Cell::Empty;
        }

        new_state.grid[probe] = Cell::Empty;
        new_state.grid[next] = Cell::Probe;
        new_state.probe = Some(next);
        Some(new_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(codes: &[&[u32]]) -> Puzzle {
        let rows: Vec<Vec<Cell>> = codes
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| Cell::from_code(code).unwrap())
                    .collect()
            })
            .collect();
        Puzzle::from_rows(&rows).unwrap()
    }

    fn asteroid_cnt(state: &Puzzle) -> usize {
        let grid = state.grid();
        let mut cnt = 0;
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if grid[Pos::new(r, c)] == Cell::Asteroid {
                    cnt += 1;
                }
            }
        }
        cnt
    }

    #[test]
    fn construction_scans_probe_and_dock() {
        let state = puzzle(&[
            &[0, 0, 0, 4],
            &[0, 2, 0, 0],
            &[3, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        assert_eq!(state.probe(), Some(Pos::new(2, 0)));
        assert_eq!(state.dock(), Some(Pos::new(0, 3)));
        assert!(!state.is_goal());
    }

    #[test]
    fn construction_without_markers() {
        let state = puzzle(&[&[0, 2], &[1, 0]]);
        assert_eq!(state.probe(), None);
        assert_eq!(state.dock(), None);
        assert!(!state.is_goal());
        assert!(state.move_gen().is_empty());
    }

    #[test]
    fn malformed_grids_rejected() {
        let ragged = vec![vec![Cell::Empty, Cell::Empty], vec![Cell::Empty]];
        assert_eq!(
            Puzzle::from_rows(&ragged).unwrap_err(),
            GridError::Ragged {
                row: 1,
                len: 1,
                expected: 2,
            }
        );
        assert_eq!(Puzzle::from_rows(&[]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn keys_equal_iff_grids_equal() {
        let codes: &[&[u32]] = &[&[3, 0], &[0, 4]];
        let a = puzzle(codes);
        let b = puzzle(codes);
        assert_eq!(a.key(), b.key());

        let c = puzzle(&[&[3, 2], &[0, 4]]);
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn walled_in_probe_has_no_moves() {
        let state = puzzle(&[&[3, 1], &[1, 4]]);
        assert!(state.move_gen().is_empty());
    }

    #[test]
    fn move_gen_order_and_unit_vectors() {
        let state = puzzle(&[
            &[0, 0, 0],
            &[0, 3, 0],
            &[0, 0, 4],
        ]);
        let moves = state.move_gen();
        let dirs: Vec<Dir> = moves.iter().map(|&(dir, _)| dir).collect();
        assert_eq!(dirs, vec![Dir::Up, Dir::Down, Dir::Left, Dir::Right]);

        let probe = state.probe().unwrap();
        for (dir, new_state) in moves {
            assert_eq!(new_state.probe(), Some(probe + dir));
        }
    }

    #[test]
    fn move_gen_is_idempotent() {
        let state = puzzle(&[
            &[0, 0, 0, 4],
            &[0, 2, 0, 0],
            &[3, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        assert_eq!(state.move_gen(), state.move_gen());
    }

    #[test]
    fn push_single_asteroid() {
        let state = puzzle(&[&[3, 2, 0, 4]]);
        let moves = state.move_gen();
        assert_eq!(moves.len(), 1);
        let (dir, new_state) = &moves[0];
        assert_eq!(*dir, Dir::Right);
        assert_eq!(new_state.probe(), Some(Pos::new(0, 1)));
        assert_eq!(new_state.grid()[Pos::new(0, 2)], Cell::Asteroid);
        assert_eq!(new_state.grid()[Pos::new(0, 0)], Cell::Empty);
        assert_eq!(asteroid_cnt(&new_state), 1);
    }

    #[test]
    fn push_relocates_whole_run() {
        let state = puzzle(&[&[3, 2, 2, 2, 0]]);
        let new_state = state.apply(Dir::Right).unwrap();
        assert_eq!(new_state.probe(), Some(Pos::new(0, 1)));
        for c in 2..5 {
            assert_eq!(new_state.grid()[Pos::new(0, c)], Cell::Asteroid);
        }
        assert_eq!(asteroid_cnt(&state), 3);
        assert_eq!(asteroid_cnt(&new_state), 3);
    }

    #[test]
    fn push_blocked_by_wall() {
        let state = puzzle(&[&[3, 2, 1, 4]]);
        assert!(state.move_gen().is_empty());
    }

    #[test]
    fn push_blocked_by_edge() {
        let state = puzzle(&[&[4, 3, 2]]);
        let dirs: Vec<Dir> = state.move_gen().iter().map(|&(dir, _)| dir).collect();
        assert_eq!(dirs, vec![Dir::Left]);
    }

    #[test]
    fn push_onto_dock_is_illegal() {
        // the landing cell must be exactly empty, the dock doesn't count
        let state = puzzle(&[&[3, 2, 4]]);
        assert!(state.move_gen().is_empty());
    }

    #[test]
    fn moving_onto_dock_solves() {
        let state = puzzle(&[&[3, 4]]);
        assert!(!state.is_goal());
        let solved = state.apply(Dir::Right).unwrap();
        assert!(solved.is_goal());
        assert_eq!(solved.probe(), Some(Pos::new(0, 1)));
        assert_eq!(solved.dock(), Some(Pos::new(0, 1)));
        // the probe code replaces the dock code on the grid
        assert_eq!(solved.grid()[Pos::new(0, 1)], Cell::Probe);
        assert_eq!(solved.grid()[Pos::new(0, 0)], Cell::Empty);
    }

    #[test]
    fn plain_move_round_trips() {
        let state = puzzle(&[&[3, 0], &[0, 4]]);
        let there = state.apply(Dir::Right).unwrap();
        let back = there.apply(Dir::Right.opposite()).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn push_does_not_round_trip() {
        // pulling asteroids back is not modeled
        let state = puzzle(&[&[0, 3, 2, 0]]);
        let there = state.apply(Dir::Right).unwrap();
        let back = there.apply(Dir::Left).unwrap();
        assert_ne!(back, state);
        assert_eq!(back.grid()[Pos::new(0, 3)], Cell::Asteroid);
    }

    #[test]
    fn apply_out_of_bounds_is_none() {
        let state = puzzle(&[&[3, 4]]);
        assert_eq!(state.apply(Dir::Left), None);
        assert_eq!(state.apply(Dir::Up), None);
    }

    #[test]
    fn apply_leaves_source_untouched() {
        let state = puzzle(&[&[3, 2, 0, 4]]);
        let copy = state.clone();
        let _ = state.apply(Dir::Right).unwrap();
        assert_eq!(state, copy);
    }
}
