use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::hash_map::Entry::{Occupied, Vacant};
use std::collections::BinaryHeap;

use crate::cell::Cell;
use crate::node::{Node, NodeArena, NodeId};

struct SmallestCostHolder {
    estimated_cost: f64,
    seq: u64,
    cell: Cell,
    id: NodeId,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest estimate first, then the entry that has been
        // in the open set the longest.
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    id: NodeId,
    f: f64,
    seq: u64,
}

/// What [Frontier::offer] did with a candidate node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    Inserted,
    Replaced,
    Discarded,
}

/// The open set: at most one node per cell, retrievable cheapest-first.
///
/// Every insertion receives an increasing sequence number. Conceptually the open set is a list
/// in sequence order where replaced and popped entries are removed and new ones appended;
/// [pop_min](Frontier::pop_min) returns the first entry of minimal `f` in that list. The heap
/// holds stale entries for replaced nodes which are skipped when they surface.
#[derive(Default)]
pub struct Frontier {
    open: FxHashMap<Cell, OpenEntry>,
    heap: BinaryHeap<SmallestCostHolder>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Offers a freshly created node. It is inserted if its cell is not open yet and replaces
    /// the open node of that cell if its `f` is strictly smaller; otherwise it is discarded.
    pub fn offer(&mut self, arena: &NodeArena, id: NodeId) -> Offer {
        let node = arena.get(id);
        let seq = self.next_seq;
        let outcome = match self.open.entry(node.key()) {
            Vacant(e) => {
                e.insert(OpenEntry {
                    id,
                    f: node.f(),
                    seq,
                });
                Offer::Inserted
            }
            Occupied(mut e) => {
                if node.f() < e.get().f {
                    e.insert(OpenEntry {
                        id,
                        f: node.f(),
                        seq,
                    });
                    Offer::Replaced
                } else {
                    return Offer::Discarded;
                }
            }
        };
        self.next_seq += 1;
        self.heap.push(SmallestCostHolder {
            estimated_cost: node.f(),
            seq,
            cell: node.key(),
            id,
        });
        outcome
    }

    /// Removes and returns the open node with minimal `f`.
    pub fn pop_min(&mut self) -> Option<NodeId> {
        while let Some(SmallestCostHolder { seq, cell, id, .. }) = self.heap.pop() {
            // A replaced entry keeps its heap slot but no longer matches the open map.
            match self.open.get(&cell) {
                Some(entry) if entry.seq == seq => {
                    self.open.remove(&cell);
                    return Some(id);
                }
                _ => continue,
            }
        }
        None
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.open.contains_key(cell)
    }
    /// The open node for `cell`, if any.
    pub fn get(&self, cell: &Cell) -> Option<NodeId> {
        self.open.get(cell).map(|e| e.id)
    }
    pub fn len(&self) -> usize {
        self.open.len()
    }
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(frontier: &mut Frontier, arena: &mut NodeArena, node: Node) -> (NodeId, Offer) {
        let id = arena.push(node);
        (id, frontier.offer(arena, id))
    }

    #[test]
    fn pops_cheapest_first() {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let (a, _) = offer(&mut frontier, &mut arena, Node::new(Cell::new(0, 0), 3.0, 1.0, None));
        let (b, _) = offer(&mut frontier, &mut arena, Node::new(Cell::new(0, 1), 1.0, 1.0, None));
        assert_eq!(frontier.pop_min(), Some(b));
        assert_eq!(frontier.pop_min(), Some(a));
        assert_eq!(frontier.pop_min(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_go_to_oldest_entry() {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let (a, _) = offer(&mut frontier, &mut arena, Node::new(Cell::new(0, 0), 1.0, 1.0, None));
        let (b, _) = offer(&mut frontier, &mut arena, Node::new(Cell::new(0, 1), 2.0, 0.0, None));
        let (c, _) = offer(&mut frontier, &mut arena, Node::new(Cell::new(0, 2), 0.0, 2.0, None));
        assert_eq!(frontier.pop_min(), Some(a));
        assert_eq!(frontier.pop_min(), Some(b));
        assert_eq!(frontier.pop_min(), Some(c));
    }

    #[test]
    fn replacement_compares_f_and_moves_to_back() {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let cell = Cell::new(1, 1);
        let (old, o) = offer(&mut frontier, &mut arena, Node::new(cell, 4.0, 1.0, None));
        assert_eq!(o, Offer::Inserted);
        let (other, _) = offer(&mut frontier, &mut arena, Node::new(Cell::new(2, 2), 3.0, 0.0, None));

        // Equal f is not an improvement.
        let (_, o) = offer(&mut frontier, &mut arena, Node::new(cell, 2.0, 3.0, None));
        assert_eq!(o, Offer::Discarded);
        assert_eq!(frontier.get(&cell), Some(old));

        let (new, o) = offer(&mut frontier, &mut arena, Node::new(cell, 2.0, 1.0, None));
        assert_eq!(o, Offer::Replaced);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.get(&cell), Some(new));

        // Both now have f == 3, the replacement was appended after `other`.
        assert_eq!(frontier.pop_min(), Some(other));
        assert_eq!(frontier.pop_min(), Some(new));
        assert_eq!(frontier.pop_min(), None);
    }
}
