//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search on occupancy grids. Finds a
//! lowest-cost route between two cells using either 4-neighbour moves with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic, or
//! 8-neighbour moves with the
//! [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance), optionally charging
//! √2 for diagonal steps.
//!
//! Besides the path, every run records the cells it settled in order together with the path
//! known at that moment, which allows replaying how the search progressed
//! ([ExploredTrace]).
//!
//! ```
//! use grid_astar::{find_path, Cell, OccupancyGrid, SearchConfig};
//!
//! let grid: OccupancyGrid = "...\n##.\n...".parse().unwrap();
//! let run = find_path(&grid, Cell::new(0, 0), Cell::new(2, 0), SearchConfig::orthogonal()).unwrap();
//! assert_eq!(run.cost(), Some(6.0));
//! assert_eq!(run.explored_trace().len(), run.expanded());
//! ```
mod astar;
mod cell;
mod config;
mod error;
mod frontier;
mod heuristic;
mod moves;
mod node;
mod pathing_grid;
mod trace;

pub use astar::{find_path, AstarSearch, Outcome, SearchRun};
pub use cell::Cell;
pub use config::SearchConfig;
pub use error::GridError;
pub use frontier::{Frontier, Offer};
pub use heuristic::Heuristic;
pub use moves::{Direction, MoveSet, DIRECTIONS};
pub use node::{Node, NodeArena, NodeId};
pub use pathing_grid::{Components, OccupancyGrid};
pub use trace::{reconstruct_path, ExploredTrace};

/// Cost of a horizontal or vertical step.
pub const ORTHOGONAL_STEP_COST: f64 = 1.0;
/// Cost of a diagonal step if diagonal costs are accounted for.
pub const DIAGONAL_STEP_COST: f64 = std::f64::consts::SQRT_2;
