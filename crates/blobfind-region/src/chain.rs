//! Ordered pixel chains over a shared node arena
//!
//! A [`PixelChain`] is the ordered set of coordinates belonging to one
//! component. Chains are doubly linked through a [`ChainArena`] that owns
//! one node per pixel; a chain itself is only a head/tail/length descriptor.
//!
//! The arena indirection is what makes component merging O(1): splicing one
//! chain onto another relinks two nodes and never copies an element. A
//! merged-away chain is left empty and is never read again by the labeling
//! pass, but reading it is safe and yields an empty traversal.

use crate::error::{RegionError, RegionResult};

/// Sentinel-free link: `None` marks the ends of a chain.
#[derive(Debug, Clone, Copy)]
struct ChainNode {
    x: u32,
    y: u32,
    next: Option<u32>,
    prev: Option<u32>,
}

/// Arena owning the linked nodes of every chain
#[derive(Debug, Default)]
pub struct ChainArena {
    nodes: Vec<ChainNode>,
}

impl ChainArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena with room for `n` nodes
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
        }
    }

    /// Allocate an unlinked node for a coordinate, returning its handle.
    pub fn push_node(&mut self, x: u32, y: u32) -> u32 {
        let handle = self.nodes.len() as u32;
        self.nodes.push(ChainNode {
            x,
            y,
            next: None,
            prev: None,
        });
        handle
    }

    /// Number of allocated nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// An insertion-ordered chain of pixel coordinates
#[derive(Debug, Clone, Default)]
pub struct PixelChain {
    head: Option<u32>,
    tail: Option<u32>,
    len: u32,
}

impl PixelChain {
    /// Create an empty chain
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of coordinates in the chain
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Check whether the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a node to the tail in O(1).
    ///
    /// The node must have been allocated from `arena` and not yet linked
    /// into any chain.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NodeOutOfRange`] if the handle does not name
    /// an arena node.
    pub fn append(&mut self, arena: &mut ChainArena, node: u32) -> RegionResult<()> {
        if node as usize >= arena.nodes.len() {
            return Err(RegionError::NodeOutOfRange {
                node,
                len: arena.nodes.len(),
            });
        }
        match self.tail {
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
            Some(tail) => {
                arena.nodes[tail as usize].next = Some(node);
                arena.nodes[node as usize].prev = Some(tail);
                self.tail = Some(node);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Splice all of `other` after this chain's tail in O(1).
    ///
    /// Pointer relinking only; no element is copied. Afterwards `other` is
    /// empty. Merging an empty chain is a no-op apart from that reset.
    pub fn merge(&mut self, arena: &mut ChainArena, other: &mut PixelChain) {
        match (self.tail, other.head) {
            (_, None) => {}
            (None, Some(_)) => {
                self.head = other.head;
                self.tail = other.tail;
                self.len = other.len;
            }
            (Some(tail), Some(other_head)) => {
                arena.nodes[tail as usize].next = Some(other_head);
                arena.nodes[other_head as usize].prev = Some(tail);
                self.tail = other.tail;
                self.len += other.len;
            }
        }
        other.clear();
    }

    /// Reset to empty in O(1). Nodes stay in the arena untouched.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// The first (representative) coordinate, if any.
    pub fn first(&self, arena: &ChainArena) -> Option<(u32, u32)> {
        self.head.map(|h| {
            let node = &arena.nodes[h as usize];
            (node.x, node.y)
        })
    }

    /// Iterate the coordinates in insertion order.
    ///
    /// The iterator borrows the arena, so the chain structure cannot be
    /// mutated while a traversal is live.
    pub fn iter<'a>(&self, arena: &'a ChainArena) -> ChainIter<'a> {
        ChainIter {
            arena,
            current: self.head,
        }
    }
}

/// Forward traversal over a chain's coordinates
pub struct ChainIter<'a> {
    arena: &'a ChainArena,
    current: Option<u32>,
}

impl Iterator for ChainIter<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        let handle = self.current?;
        let node = &self.arena.nodes[handle as usize];
        self.current = node.next;
        Some((node.x, node.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(arena: &mut ChainArena, coords: &[(u32, u32)]) -> PixelChain {
        let mut chain = PixelChain::new();
        for &(x, y) in coords {
            let node = arena.push_node(x, y);
            chain.append(arena, node).unwrap();
        }
        chain
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut arena = ChainArena::new();
        let chain = chain_of(&mut arena, &[(3, 0), (1, 1), (2, 2)]);
        assert_eq!(chain.len(), 3);
        let coords: Vec<_> = chain.iter(&arena).collect();
        assert_eq!(coords, vec![(3, 0), (1, 1), (2, 2)]);
        assert_eq!(chain.first(&arena), Some((3, 0)));
    }

    #[test]
    fn test_append_rejects_unknown_handle() {
        let mut arena = ChainArena::new();
        let mut chain = PixelChain::new();
        assert!(chain.append(&mut arena, 0).is_err());
    }

    #[test]
    fn test_merge_splices_and_empties_source() {
        let mut arena = ChainArena::new();
        let mut a = chain_of(&mut arena, &[(0, 0), (1, 0)]);
        let mut b = chain_of(&mut arena, &[(5, 5), (6, 5), (7, 5)]);

        a.merge(&mut arena, &mut b);

        assert_eq!(a.len(), 5);
        let coords: Vec<_> = a.iter(&arena).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (5, 5), (6, 5), (7, 5)]);

        // The source behaves as empty afterwards
        assert!(b.is_empty());
        assert_eq!(b.iter(&arena).count(), 0);
        assert_eq!(b.first(&arena), None);
    }

    #[test]
    fn test_merge_into_empty_chain() {
        let mut arena = ChainArena::new();
        let mut a = PixelChain::new();
        let mut b = chain_of(&mut arena, &[(4, 4)]);
        a.merge(&mut arena, &mut b);
        assert_eq!(a.len(), 1);
        assert_eq!(a.first(&arena), Some((4, 4)));
        assert!(b.is_empty());
    }

    #[test]
    fn test_merge_empty_chain_is_noop() {
        let mut arena = ChainArena::new();
        let mut a = chain_of(&mut arena, &[(1, 1), (2, 1)]);
        let mut b = PixelChain::new();
        a.merge(&mut arena, &mut b);
        assert_eq!(a.len(), 2);
        let coords: Vec<_> = a.iter(&arena).collect();
        assert_eq!(coords, vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn test_chained_merges_keep_order() {
        let mut arena = ChainArena::new();
        let mut a = chain_of(&mut arena, &[(0, 0)]);
        let mut b = chain_of(&mut arena, &[(1, 0)]);
        let mut c = chain_of(&mut arena, &[(2, 0)]);
        let mut d = chain_of(&mut arena, &[(3, 0)]);

        a.merge(&mut arena, &mut b);
        c.merge(&mut arena, &mut d);
        a.merge(&mut arena, &mut c);

        let coords: Vec<_> = a.iter(&arena).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_clear_resets() {
        let mut arena = ChainArena::new();
        let mut a = chain_of(&mut arena, &[(1, 1)]);
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.iter(&arena).count(), 0);
    }
}
