use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

/// The side the search optimizes for.
pub const MAXIMIZER: Mark = Mark::X;
/// The side the search assumes plays against it.
pub const MINIMIZER: Mark = Mark::O;

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' | ' ' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
}

impl SearchAlgorithm {
    pub fn from_pruning(use_pruning: bool) -> Self {
        if use_pruning {
            SearchAlgorithm::AlphaBeta
        } else {
            SearchAlgorithm::Minimax
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Minimax => "Minimax",
            SearchAlgorithm::AlphaBeta => "Alpha-Beta",
        }
    }
}

/// Number of recursive calls visited by a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub index: usize,
    pub score: i32,
}
