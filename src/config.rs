use crate::heuristic::Heuristic;
use crate::moves::MoveSet;

/// Movement configuration of a search.
///
/// `heuristic` overrides the estimate otherwise picked by [Heuristic::for_moves].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub diagonal: bool,
    pub diagonal_cost: bool,
    pub heuristic: Option<Heuristic>,
}

impl SearchConfig {
    pub fn orthogonal() -> SearchConfig {
        SearchConfig::default()
    }
    pub fn diagonal(diagonal_cost: bool) -> SearchConfig {
        SearchConfig {
            diagonal: true,
            diagonal_cost,
            heuristic: None,
        }
    }
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> SearchConfig {
        self.heuristic = Some(heuristic);
        self
    }
    pub fn move_set(&self) -> MoveSet {
        MoveSet {
            diagonal: self.diagonal,
            diagonal_cost: self.diagonal_cost,
        }
    }
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
            .unwrap_or_else(|| Heuristic::for_moves(self.diagonal))
    }
}
