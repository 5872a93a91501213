use crate::cell::Cell;

/// Estimate of the remaining cost between two cells.
///
/// [for_moves](Heuristic::for_moves) picks Manhattan for 4-neighbour movement and Euclidean
/// once diagonal steps are allowed, as Manhattan would overestimate a diagonal step. Euclidean
/// is only admissible if diagonal steps are charged [DIAGONAL_STEP_COST](crate::DIAGONAL_STEP_COST);
/// with unit-cost diagonals returned paths are not guaranteed to be optimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn for_moves(diagonal: bool) -> Heuristic {
        if diagonal {
            Heuristic::Euclidean
        } else {
            Heuristic::Manhattan
        }
    }

    pub fn estimate(&self, a: &Cell, b: &Cell) -> f64 {
        let (d_row, d_col) = a.abs_delta(b);
        match self {
            Heuristic::Manhattan => (d_row + d_col) as f64,
            Heuristic::Euclidean => (d_row as f64).hypot(d_col as f64),
        }
    }
}
