use std::fmt::{self, Display, Formatter};

use crate::heuristics::Heuristic;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Dfs,
    Bfs,
    BestFirst(Heuristic),
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Dfs,
        Method::Bfs,
        Method::BestFirst(Heuristic::Manhattan),
        Method::BestFirst(Heuristic::AsteroidBlocking),
    ];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Dfs => write!(f, "depth-first"),
            Method::Bfs => write!(f, "breadth-first"),
            Method::BestFirst(heuristic) => write!(f, "best-first-{}", heuristic),
        }
    }
}
