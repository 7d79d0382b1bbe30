use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Cell;
use crate::puzzle::Puzzle;
use crate::vec2d::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErr {
    Empty,
    BadToken {
        row: usize,
        col: usize,
    },
    BadCode {
        row: usize,
        col: usize,
        code: u32,
    },
    RowLen {
        row: usize,
        len: usize,
        expected: usize,
    },
    RowCount {
        rows: usize,
        expected: usize,
    },
    MultipleProbes,
    MultipleDocks,
}

impl Display for ParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErr::Empty => write!(f, "Empty puzzle"),
            ParseErr::BadToken { row, col } => {
                write!(f, "Not a cell code at grid row {}, column {}", row, col)
            }
            ParseErr::BadCode { row, col, code } => write!(
                f,
                "Unknown cell code {} at grid row {}, column {}",
                code, row, col
            ),
            ParseErr::RowLen { row, len, expected } => write!(
                f,
                "Grid row {} has {} columns, expected {}",
                row, len, expected
            ),
            ParseErr::RowCount { rows, expected } => {
                write!(f, "Grid has {} rows, expected {}", rows, expected)
            }
            ParseErr::MultipleProbes => write!(f, "More than one probe"),
            ParseErr::MultipleDocks => write!(f, "More than one docking bay"),
        }
    }
}

impl Error for ParseErr {}

impl FromStr for Puzzle {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a puzzle from text: either an `R C` dimension header followed by
/// `R` rows of `C` whitespace separated cell codes, or a bare rectangular
/// block of codes. Blank lines are skipped. A first line of exactly two
/// integers is always read as a header - grids whose first row could be
/// mistaken for one must be written with a header.
pub(crate) fn parse(text: &str) -> Result<Puzzle, ParseErr> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(ParseErr::Empty);
    }

    let (dims, body) = match parse_header(lines[0]) {
        Some(dims) => (Some(dims), &lines[1..]),
        None => (None, &lines[..]),
    };

    let mut rows = Vec::new();
    for (r, line) in body.iter().enumerate() {
        let mut row = Vec::new();
        for (c, token) in line.split_whitespace().enumerate() {
            let code: u32 = token
                .parse()
                .map_err(|_| ParseErr::BadToken { row: r, col: c })?;
            let cell = Cell::from_code(code).ok_or(ParseErr::BadCode {
                row: r,
                col: c,
                code,
            })?;
            row.push(cell);
        }
        rows.push(row);
    }

    if let Some((n, m)) = dims {
        if rows.len() != n {
            return Err(ParseErr::RowCount {
                rows: rows.len(),
                expected: n,
            });
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != m {
                return Err(ParseErr::RowLen {
                    row: r,
                    len: row.len(),
                    expected: m,
                });
            }
        }
    }

    let mut probes = 0;
    let mut docks = 0;
    for row in &rows {
        for &cell in row {
            match cell {
                Cell::Probe => probes += 1,
                Cell::Dock => docks += 1,
                _ => {}
            }
        }
    }
    if probes > 1 {
        return Err(ParseErr::MultipleProbes);
    }
    if docks > 1 {
        return Err(ParseErr::MultipleDocks);
    }

    Puzzle::from_rows(&rows).map_err(|err| match err {
        GridError::Empty => ParseErr::Empty,
        GridError::Ragged { row, len, expected } => ParseErr::RowLen { row, len, expected },
    })
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return None;
    }
    match (tokens[0].parse(), tokens[1].parse()) {
        (Ok(n), Ok(m)) => Some((n, m)),
        _ => None,
    }
}
