//! Disjoint-set forest over the indices `0..len`.
//!
//! Finds fully compress the path they walk and unions link by rank, so a
//! sequence of operations runs in near-constant amortized time per call.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::convert::TryFrom;
use tracing::{debug, trace};

/// Rank is bounded by `log2(len)`, which fits a byte on every target.
type Rank = u8;

/// A partition of `0..len` into disjoint subsets.
///
/// The universe is fixed at construction. Indices outside it are rejected
/// with [`Error::IndexOutOfBounds`] and leave the structure untouched.
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    /// `parent[i] == i` marks a root.
    parent: Vec<usize>,
    /// Upper bound on the height of the tree under each root.
    rank: Vec<Rank>,
}

impl DisjointSet {
    /// Returns a `DisjointSet` of `len` singleton subsets.
    pub fn new(len: usize) -> DisjointSet {
        debug!(len, "creating disjoint set");

        DisjointSet {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Like [`DisjointSet::new`], but for a signed size coming from outside
    /// the crate. Negative sizes, or sizes that do not fit a `usize`, fail
    /// with [`Error::InvalidSize`].
    pub fn try_new(size: i64) -> Result<DisjointSet> {
        match usize::try_from(size) {
            Ok(len) => Ok(DisjointSet::new(len)),
            Err(_) => {
                debug!(size, "rejecting disjoint set size");
                Err(Error::InvalidSize(size))
            }
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the subset containing `x`.
    ///
    /// Every node on the path from `x` to its root is re-pointed directly at
    /// the root. The partition itself is unchanged.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// Merges the subsets containing `x` and `y`.
    ///
    /// The root of lower rank goes under the root of higher rank. On a tie
    /// the root of `y` goes under the root of `x` and the latter's rank grows
    /// by one. Merging two elements of the same subset is a no-op.
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);

        if root_x == root_y {
            return Ok(());
        }

        let root = match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => {
                self.parent[root_x] = root_y;
                root_y
            }
            Ordering::Greater => {
                self.parent[root_y] = root_x;
                root_x
            }
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
                root_x
            }
        };

        trace!(x, y, root, rank = self.rank[root], "merged subsets");
        Ok(())
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.parent.len() {
            Ok(())
        } else {
            debug!(index, len = self.parent.len(), "index out of bounds");
            Err(Error::IndexOutOfBounds {
                index,
                len: self.parent.len(),
            })
        }
    }

    // Two passes instead of recursion so long chains cannot exhaust the stack.
    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;

        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }
}

impl TryFrom<i64> for DisjointSet {
    type Error = Error;

    fn try_from(size: i64) -> Result<DisjointSet> {
        DisjointSet::try_new(size)
    }
}
