use indexmap::IndexMap;
use fxhash::FxBuildHasher;
use log::{debug, info, trace};
use std::time::{Duration, Instant};

use crate::cell::Cell;
use crate::config::SearchConfig;
use crate::error::GridError;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::moves::MoveSet;
use crate::node::{Node, NodeArena, NodeId};
use crate::pathing_grid::OccupancyGrid;
use crate::trace::{reconstruct_path, ExploredTrace};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Result of a finished run. Not finding a path is a regular outcome, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Found { path: Vec<Cell>, cost: f64 },
    NoPath,
}

impl Outcome {
    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Outcome::Found { path, .. } => Some(path),
            Outcome::NoPath => None,
        }
    }
    pub fn cost(&self) -> Option<f64> {
        match self {
            Outcome::Found { cost, .. } => Some(*cost),
            Outcome::NoPath => None,
        }
    }
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }
}

/// A single A* search between two cells of an [OccupancyGrid].
///
/// Inputs are validated on construction, [run](AstarSearch::run) then always completes. The
/// search is consumed by running it; to search again after changing the grid, create a new
/// one.
#[derive(Clone, Debug)]
pub struct AstarSearch<'a> {
    grid: &'a OccupancyGrid,
    start: Cell,
    target: Cell,
    moves: MoveSet,
    heuristic: Heuristic,
}

impl<'a> AstarSearch<'a> {
    pub fn new(
        grid: &'a OccupancyGrid,
        start: Cell,
        target: Cell,
        config: SearchConfig,
    ) -> Result<AstarSearch<'a>, GridError> {
        if grid.is_empty() {
            return Err(GridError::Empty);
        }
        grid.check_bounds(start)?;
        grid.check_bounds(target)?;
        Ok(AstarSearch {
            grid,
            start,
            target,
            moves: config.move_set(),
            heuristic: config.heuristic(),
        })
    }

    pub fn start(&self) -> Cell {
        self.start
    }
    pub fn target(&self) -> Cell {
        self.target
    }
    pub fn moves(&self) -> MoveSet {
        self.moves
    }

    /// Expands nodes cheapest-first until the target is settled or the frontier runs dry.
    pub fn run(self) -> SearchRun {
        let before = Instant::now();
        debug!(
            "Searching from {} to {} with {:?} and {:?} heuristic",
            self.start, self.target, self.moves, self.heuristic
        );
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut settled: FxIndexMap<Cell, NodeId> = FxIndexMap::default();

        let h = self.heuristic.estimate(&self.start, &self.target);
        let start = arena.push(Node::new(self.start, 0.0, h, None));
        frontier.offer(&arena, start);

        let mut goal = None;
        while let Some(current) = frontier.pop_min() {
            let position = arena.get(current).key();
            let previous = settled.insert(position, current);
            debug_assert!(previous.is_none(), "{} settled twice", position);
            if position == self.target {
                goal = Some(current);
                break;
            }
            self.expand(&mut arena, &mut frontier, &settled, current);
        }

        let outcome = match goal {
            Some(id) => {
                let cost = arena.get(id).g();
                let path = reconstruct_path(&arena, id);
                info!(
                    "Found path from {} to {} of cost {:.3} after settling {} cells",
                    self.start,
                    self.target,
                    cost,
                    settled.len()
                );
                Outcome::Found { path, cost }
            }
            None => {
                info!(
                    "{} is not reachable from {}, settled {} cells",
                    self.target,
                    self.start,
                    settled.len()
                );
                Outcome::NoPath
            }
        };
        SearchRun {
            outcome,
            elapsed: before.elapsed(),
            arena,
            settled,
        }
    }

    /// Offers every admissible neighbour of `current` to the frontier.
    fn expand(
        &self,
        arena: &mut NodeArena,
        frontier: &mut Frontier,
        settled: &FxIndexMap<Cell, NodeId>,
        current: NodeId,
    ) {
        let (position, g) = {
            let node = arena.get(current);
            (node.key(), node.g())
        };
        for &dir in self.moves.directions() {
            let candidate = position + dir;
            if self.grid.is_blocked(candidate) || settled.contains_key(&candidate) {
                continue;
            }
            let node = Node::new(
                candidate,
                g + self.moves.step_cost(dir),
                self.heuristic.estimate(&candidate, &self.target),
                Some(current),
            );
            let id = arena.push(node);
            let offer = frontier.offer(arena, id);
            trace!("{} -> {}: {:?}", position, candidate, offer);
        }
    }
}

/// Runs a search, see [AstarSearch].
pub fn find_path(
    grid: &OccupancyGrid,
    start: Cell,
    target: Cell,
    config: SearchConfig,
) -> Result<SearchRun, GridError> {
    Ok(AstarSearch::new(grid, start, target, config)?.run())
}

/// Everything a finished search leaves behind: the outcome, how long it took and the settled
/// nodes from which the [ExploredTrace] is built.
#[derive(Clone, Debug)]
pub struct SearchRun {
    outcome: Outcome,
    elapsed: Duration,
    arena: NodeArena,
    settled: FxIndexMap<Cell, NodeId>,
}

impl SearchRun {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }
    pub fn path(&self) -> Option<&[Cell]> {
        self.outcome.path()
    }
    pub fn cost(&self) -> Option<f64> {
        self.outcome.cost()
    }
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }
    /// Wall time spent in [AstarSearch::run].
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    /// Number of cells that were settled, including the target if it was reached.
    pub fn expanded(&self) -> usize {
        self.settled.len()
    }
    /// Settled cells in the order they were settled.
    pub fn settled(&self) -> impl Iterator<Item = Cell> + '_ {
        self.settled.keys().copied()
    }
    pub fn is_settled(&self, cell: &Cell) -> bool {
        self.settled.contains_key(cell)
    }
    /// The node a cell was settled with, giving access to its costs.
    pub fn settled_node(&self, cell: &Cell) -> Option<&Node> {
        self.settled.get(cell).map(|&id| self.arena.get(id))
    }
    pub fn explored_trace(&self) -> ExploredTrace {
        ExploredTrace::build(&self.arena, self.settled.values().copied())
    }
}
