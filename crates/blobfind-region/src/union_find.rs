//! Disjoint sets over pixel ids
//!
//! Union-by-size with full path compression, one [`PixelChain`] payload per
//! group. The entries vector packs both roles of a pixel id into one signed
//! word: a negative value marks a root and stores the group cardinality as
//! its magnitude, a non-negative value is a parent id (not necessarily the
//! root; compression updates it lazily).
//!
//! Only a root's chain is live. Union splices the absorbed root's chain
//! onto the survivor's and leaves the absorbed chain empty.

use crate::chain::{ChainArena, PixelChain};
use crate::error::{RegionError, RegionResult};

/// Disjoint sets of pixel coordinates, one singleton per seed at creation
#[derive(Debug)]
pub struct DisjointSets {
    /// Negative: root with cardinality `-value`. Non-negative: parent id.
    entries: Vec<i32>,
    chains: Vec<PixelChain>,
    arena: ChainArena,
}

impl DisjointSets {
    /// Build from seed coordinates, one singleton group per seed, in order.
    ///
    /// Seed index becomes the group's pixel id.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptySeeds`] if there are no seeds.
    pub fn from_seeds<I>(seeds: I) -> RegionResult<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let seeds = seeds.into_iter();
        let (lower, _) = seeds.size_hint();
        let mut arena = ChainArena::with_capacity(lower);
        let mut chains = Vec::with_capacity(lower);

        for (x, y) in seeds {
            let node = arena.push_node(x, y);
            let mut chain = PixelChain::new();
            chain.append(&mut arena, node)?;
            chains.push(chain);
        }
        if chains.is_empty() {
            return Err(RegionError::EmptySeeds);
        }

        Ok(Self {
            entries: vec![-1; chains.len()],
            chains,
            arena,
        })
    }

    /// Build singleton groups for every pixel of a `width` x `height` image
    /// in row-major order, so that group id equals linear pixel id.
    pub fn for_image(width: u32, height: u32) -> RegionResult<Self> {
        if width == 0 || height == 0 {
            return Err(RegionError::Core(blobfind_core::Error::InvalidDimension {
                width,
                height,
            }));
        }
        Self::from_seeds((0..height).flat_map(|y| (0..width).map(move |x| (x, y))))
    }

    /// Number of pixel ids
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the structure holds no ids
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shared node arena, needed to traverse a group's chain
    pub fn arena(&self) -> &ChainArena {
        &self.arena
    }

    /// Find the root of the group containing `id`.
    ///
    /// Walks the parent chain to the root, then repoints every visited
    /// non-root node directly at it (full path compression), so repeated
    /// finds return the same root with no further structural change.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::IdOutOfRange`] if `id` names no pixel.
    pub fn find(&mut self, id: usize) -> RegionResult<usize> {
        if id >= self.entries.len() {
            return Err(RegionError::IdOutOfRange {
                id,
                len: self.entries.len(),
            });
        }

        let mut root = id;
        while self.entries[root] >= 0 {
            root = self.entries[root] as usize;
        }

        let mut current = id;
        while current != root {
            let parent = self.entries[current] as usize;
            self.entries[current] = root as i32;
            current = parent;
        }

        Ok(root)
    }

    /// Union two groups by their roots, returning the surviving root.
    ///
    /// The root with the larger cardinality absorbs the other; on a tie
    /// `root1` survives. The survivor's chain splices in the absorbed
    /// chain, which is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NotARoot`] if either argument is not a live
    /// root, and [`RegionError::SelfUnion`] if both name the same root.
    pub fn union(&mut self, root1: usize, root2: usize) -> RegionResult<usize> {
        let len = self.entries.len();
        if root1 >= len {
            return Err(RegionError::IdOutOfRange { id: root1, len });
        }
        if root2 >= len {
            return Err(RegionError::IdOutOfRange { id: root2, len });
        }
        if self.entries[root1] >= 0 {
            return Err(RegionError::NotARoot(root1));
        }
        if self.entries[root2] >= 0 {
            return Err(RegionError::NotARoot(root2));
        }
        if root1 == root2 {
            return Err(RegionError::SelfUnion(root1));
        }

        // Entries are negative here; a smaller value is a bigger group.
        let (survivor, absorbed) = if self.entries[root1] <= self.entries[root2] {
            (root1, root2)
        } else {
            (root2, root1)
        };

        self.entries[survivor] += self.entries[absorbed];
        self.entries[absorbed] = survivor as i32;

        let mut taken = std::mem::take(&mut self.chains[absorbed]);
        self.chains[survivor].merge(&mut self.arena, &mut taken);

        Ok(survivor)
    }

    /// Get the chain of coordinates stored at `root`.
    ///
    /// Empty if that id has been absorbed into another root.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::IdOutOfRange`] if `root` names no pixel.
    pub fn get(&self, root: usize) -> RegionResult<&PixelChain> {
        self.chains
            .get(root)
            .ok_or(RegionError::IdOutOfRange {
                id: root,
                len: self.entries.len(),
            })
    }
}
