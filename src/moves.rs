use itertools::Itertools;

use crate::cell::Cell;
use crate::{DIAGONAL_STEP_COST, ORTHOGONAL_STEP_COST};

/// A single step on the grid, expressed as a row and column offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i32,
    pub d_col: i32,
}

impl Direction {
    pub const RIGHT: Direction = Direction::new(0, 1);
    pub const DOWN: Direction = Direction::new(1, 0);
    pub const LEFT: Direction = Direction::new(0, -1);
    pub const UP: Direction = Direction::new(-1, 0);
    pub const UP_LEFT: Direction = Direction::new(-1, -1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);
    pub const UP_RIGHT: Direction = Direction::new(-1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(1, -1);

    pub const fn new(d_row: i32, d_col: i32) -> Direction {
        Direction { d_row, d_col }
    }
    pub fn diagonal(&self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }
}

/// All move vectors in expansion order. The first four are the orthogonal moves, the order
/// determines frontier insertion order and with it tie-breaking between equal scores.
pub static DIRECTIONS: [Direction; 8] = [
    Direction::RIGHT,
    Direction::DOWN,
    Direction::LEFT,
    Direction::UP,
    Direction::UP_LEFT,
    Direction::DOWN_RIGHT,
    Direction::UP_RIGHT,
    Direction::DOWN_LEFT,
];

/// The candidate moves of a search and what they cost.
///
/// `diagonal_cost` only has an effect if `diagonal` is set: it charges
/// [DIAGONAL_STEP_COST] for diagonal steps instead of unit cost. Diagonal movement at unit
/// cost is unrealistic but supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveSet {
    pub diagonal: bool,
    pub diagonal_cost: bool,
}

impl MoveSet {
    pub fn orthogonal() -> MoveSet {
        MoveSet {
            diagonal: false,
            diagonal_cost: false,
        }
    }
    pub fn diagonal(diagonal_cost: bool) -> MoveSet {
        MoveSet {
            diagonal: true,
            diagonal_cost,
        }
    }
    pub fn directions(&self) -> &'static [Direction] {
        if self.diagonal {
            &DIRECTIONS
        } else {
            &DIRECTIONS[..4]
        }
    }
    pub fn step_cost(&self, dir: Direction) -> f64 {
        if dir.diagonal() && self.diagonal_cost {
            DIAGONAL_STEP_COST
        } else {
            ORTHOGONAL_STEP_COST
        }
    }
    /// Checks whether `from -> to` is a single configured move.
    pub fn is_step(&self, from: &Cell, to: &Cell) -> bool {
        let (d_row, d_col) = from.delta(to);
        self.directions().contains(&Direction::new(d_row, d_col))
    }
    /// Checks that every consecutive pair of cells is connected by a configured move.
    pub fn is_contiguous(&self, path: &[Cell]) -> bool {
        path.iter()
            .tuple_windows()
            .all(|(from, to)| self.is_step(from, to))
    }
    /// Sums the step costs along a path. Steps that are not configured moves are charged as if
    /// they were, use [is_contiguous](Self::is_contiguous) to validate a path first.
    pub fn path_cost(&self, path: &[Cell]) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(from, to)| {
                let (d_row, d_col) = from.delta(to);
                self.step_cost(Direction::new(d_row, d_col))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_counts() {
        assert_eq!(MoveSet::orthogonal().directions().len(), 4);
        assert_eq!(MoveSet::diagonal(true).directions().len(), 8);
        assert!(MoveSet::orthogonal()
            .directions()
            .iter()
            .all(|d| !d.diagonal()));
    }

    #[test]
    fn step_costs() {
        let unit = MoveSet::diagonal(false);
        let aware = MoveSet::diagonal(true);
        assert_eq!(unit.step_cost(Direction::DOWN_RIGHT), 1.0);
        assert_eq!(aware.step_cost(Direction::DOWN_RIGHT), DIAGONAL_STEP_COST);
        assert_eq!(aware.step_cost(Direction::LEFT), 1.0);
        // Without diagonal movement the cost flag is meaningless for the moves on offer.
        assert_eq!(MoveSet::orthogonal().step_cost(Direction::UP), 1.0);
    }

    #[test]
    fn contiguity_and_cost() {
        let path = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 2)];
        assert!(!MoveSet::orthogonal().is_contiguous(&path));
        let moves = MoveSet::diagonal(true);
        assert!(moves.is_contiguous(&path));
        assert!((moves.path_cost(&path) - (1.0 + DIAGONAL_STEP_COST)).abs() < 1e-12);
        assert_eq!(moves.path_cost(&path[..1]), 0.0);
    }
}
