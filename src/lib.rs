//! A disjoint-set (union-find) forest with full path compression and
//! union by rank.
//!
//! ```
//! use disjoint_set::DisjointSet;
//!
//! let mut set = DisjointSet::new(5);
//! set.union(0, 1)?;
//! set.union(3, 4)?;
//!
//! assert_eq!(set.find(0)?, set.find(1)?);
//! assert_ne!(set.find(1)?, set.find(3)?);
//! # Ok::<(), disjoint_set::Error>(())
//! ```

pub mod error;
#[cfg(feature = "sync")]
mod shared;
mod union_find;

pub use error::{Error, Result};
#[cfg(feature = "sync")]
pub use shared::SharedDisjointSet;
pub use union_find::DisjointSet;
