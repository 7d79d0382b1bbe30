use std::fmt::{self, Display, Formatter};

use separator::Separatable;

/// Search counters.
///
/// `nodes_explored` counts frontier pops - including the pop that discovers
/// the goal and pops of states that turn out to be already visited
/// duplicates. `nodes_created` counts frontier insertions (the initial state
/// included), `duplicates` the pops discarded by the visited check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub nodes_explored: u64,
    pub nodes_created: u64,
    pub duplicates: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes explored: {}", self.nodes_explored.separated_string())?;
        writeln!(f, "Nodes created: {}", self.nodes_created.separated_string())?;
        write!(f, "Reached duplicates: {}", self.duplicates.separated_string())
    }
}
