use crate::error::Result;
use crate::union_find::DisjointSet;
use spin::{Mutex, MutexGuard};

/// A [`DisjointSet`] that can be shared between threads.
///
/// Every call holds the lock for exactly one operation. Use
/// [`SharedDisjointSet::lock`] when several operations must observe the
/// same partition.
#[derive(Debug, Default)]
pub struct SharedDisjointSet {
    inner: Mutex<DisjointSet>,
}

impl SharedDisjointSet {
    pub fn new(len: usize) -> SharedDisjointSet {
        SharedDisjointSet::from(DisjointSet::new(len))
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn find(&self, x: usize) -> Result<usize> {
        self.inner.lock().find(x)
    }

    pub fn union(&self, x: usize, y: usize) -> Result<()> {
        self.inner.lock().union(x, y)
    }

    pub fn lock(&self) -> MutexGuard<'_, DisjointSet> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> DisjointSet {
        self.inner.into_inner()
    }
}

impl From<DisjointSet> for SharedDisjointSet {
    fn from(set: DisjointSet) -> SharedDisjointSet {
        SharedDisjointSet {
            inner: Mutex::new(set),
        }
    }
}
