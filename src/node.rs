use crate::cell::Cell;

/// Index of a [Node] in a [NodeArena].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A discovered cell together with its cost so far (`g`), the heuristic estimate to the target
/// (`h`) and the node it was reached from. Nodes are never modified after creation, a cheaper
/// route to the same cell creates a new node.
///
/// Two nodes describe the same search state iff their [key](Node::key)s are equal; `Node`
/// deliberately has no `PartialEq` so costs and identity cannot be mixed up.
#[derive(Clone, Debug)]
pub struct Node {
    position: Cell,
    g: f64,
    h: f64,
    f: f64,
    parent: Option<NodeId>,
}

impl Node {
    pub fn new(position: Cell, g: f64, h: f64, parent: Option<NodeId>) -> Node {
        Node {
            position,
            g,
            h,
            f: g + h,
            parent,
        }
    }
    pub fn key(&self) -> Cell {
        self.position
    }
    pub fn position(&self) -> Cell {
        self.position
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn h(&self) -> f64 {
        self.h
    }
    pub fn f(&self) -> f64 {
        self.f
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Flat store of all nodes created during one run. Parents always live at a smaller index than
/// their children, so parent chains cannot form cycles.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        debug_assert!(node.parent.map_or(true, |p| p < id));
        self.nodes.push(node);
        id
    }
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Iterates over the node and its ancestors, ending with the root of the chain.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(Some(self.get(id)), move |node| {
            node.parent.map(|p| self.get(p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestry_walks_to_root() {
        let mut arena = NodeArena::new();
        let a = arena.push(Node::new(Cell::new(0, 0), 0.0, 2.0, None));
        let b = arena.push(Node::new(Cell::new(0, 1), 1.0, 1.0, Some(a)));
        let c = arena.push(Node::new(Cell::new(0, 2), 2.0, 0.0, Some(b)));
        let cells: Vec<Cell> = arena.ancestry(c).map(Node::key).collect();
        assert_eq!(cells, vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]);
        assert_eq!(arena.get(b).f(), 2.0);
        assert_eq!(arena.len(), 3);
    }
}
