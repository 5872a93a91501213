use crate::cell::Cell;
use crate::node::{Node, NodeArena, NodeId};

/// Follows the parent chain of `goal` back to the start and returns the cells in start to goal
/// order, both included.
pub fn reconstruct_path(arena: &NodeArena, goal: NodeId) -> Vec<Cell> {
    let mut path: Vec<Cell> = arena.ancestry(goal).map(Node::key).collect();
    path.reverse();
    path
}

/// The path known to the search at the moment each cell was settled, in the order cells were
/// settled. Each prefix runs from the start up to the settled cell's parent, so the entry of
/// the start cell is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExploredTrace {
    settled: Vec<Cell>,
    prefixes: Vec<Vec<Cell>>,
}

impl ExploredTrace {
    /// Builds the trace from the nodes that were settled, in closure order.
    pub fn build<I>(arena: &NodeArena, settled: I) -> ExploredTrace
    where
        I: IntoIterator<Item = NodeId>,
    {
        let (settled, prefixes): (Vec<Cell>, Vec<Vec<Cell>>) = settled
            .into_iter()
            .map(|id| {
                let mut prefix: Vec<Cell> = arena.ancestry(id).skip(1).map(Node::key).collect();
                prefix.reverse();
                (arena.get(id).key(), prefix)
            })
            .unzip();
        ExploredTrace { settled, prefixes }
    }
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
    /// The path prefixes, one per settled cell.
    pub fn iter(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.prefixes.iter().map(Vec::as_slice)
    }
    /// Pairs of settled cell and the prefix leading to it.
    pub fn steps(&self) -> impl Iterator<Item = (Cell, &[Cell])> + '_ {
        self.settled.iter().copied().zip(self.iter())
    }
    /// Replay frames: every prefix extended by the cell that was settled.
    pub fn frames(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        self.steps().map(|(cell, prefix)| {
            let mut frame = prefix.to_vec();
            frame.push(cell);
            frame
        })
    }
    pub fn into_prefixes(self) -> Vec<Vec<Cell>> {
        self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (NodeArena, Vec<NodeId>) {
        let mut arena = NodeArena::new();
        let a = arena.push(Node::new(Cell::new(0, 0), 0.0, 2.0, None));
        let b = arena.push(Node::new(Cell::new(1, 0), 1.0, 1.0, Some(a)));
        let c = arena.push(Node::new(Cell::new(0, 1), 1.0, 1.0, Some(a)));
        let d = arena.push(Node::new(Cell::new(1, 1), 2.0, 0.0, Some(b)));
        (arena, vec![a, b, c, d])
    }

    #[test]
    fn path_runs_start_to_goal() {
        let (arena, ids) = chain();
        assert_eq!(
            reconstruct_path(&arena, ids[3]),
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]
        );
        assert_eq!(reconstruct_path(&arena, ids[0]), vec![Cell::new(0, 0)]);
    }

    #[test]
    fn trace_excludes_settled_cell() {
        let (arena, ids) = chain();
        let trace = ExploredTrace::build(&arena, ids.iter().copied());
        assert_eq!(trace.len(), 4);
        let prefixes: Vec<&[Cell]> = trace.iter().collect();
        assert!(prefixes[0].is_empty());
        assert_eq!(prefixes[1], &[Cell::new(0, 0)]);
        assert_eq!(prefixes[2], &[Cell::new(0, 0)]);
        assert_eq!(prefixes[3], &[Cell::new(0, 0), Cell::new(1, 0)]);
        let last = trace.frames().last().unwrap();
        assert_eq!(last, reconstruct_path(&arena, ids[3]));
    }
}
