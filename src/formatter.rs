use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::puzzle::Puzzle;

/// Renders a puzzle one glyph per cell, space separated:
/// `.` empty, `#` wall, `A` asteroid, `P` probe, `D` dock.
///
/// Display convention only - parsing and the state machine use cell codes.
#[derive(Clone, Copy)]
pub struct GridFormatter<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> GridFormatter<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }
}

impl Display for GridFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.puzzle.grid();
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", grid[Pos::new(r, c)].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for GridFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Cell;
    use crate::puzzle::Puzzle;

    #[test]
    fn formatting_grid() {
        let codes: &[&[u32]] = &[
            &[0, 0, 0, 4],
            &[0, 2, 0, 0],
            &[3, 0, 0, 0],
            &[0, 0, 0, 0],
        ];
        let rows: Vec<Vec<Cell>> = codes
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| Cell::from_code(code).unwrap())
                    .collect()
            })
            .collect();
        let state = Puzzle::from_rows(&rows).unwrap();

        let expected = "\
. . . D
. A . .
P . . .
. . . .
";
        assert_eq!(state.render().to_string(), expected);
        assert_eq!(state.to_string(), expected);
        assert_eq!(format!("{:?}", state.render()), expected);
    }
}
