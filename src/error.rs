use thiserror::Error;

use crate::cell::Cell;

/// Structural problems with the input of a search. These are reported before any node is
/// expanded; an unreachable target is not an error but [Outcome::NoPath](crate::Outcome::NoPath).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell {cell} holds {value}, expected 0 (walkable) or 1 (blocked)")]
    InvalidCell { cell: Cell, value: u8 },
    #[error("unknown map symbol {symbol:?} at {cell}")]
    InvalidSymbol { cell: Cell, symbol: char },
    #[error("{cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },
}
