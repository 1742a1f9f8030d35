//! A balanced multiway search tree (B-tree) with a minimum degree chosen at
//! construction time.
//!
//! Insertion runs top-down in a single pass: any full child is split before
//! the descent enters it, so a split never has to travel back up. Entries with
//! equal keys are all kept and come out of [`BTree::iter`] in insertion order.
//!
//! ```
//! use deadline_btree::{BTree, MinDegree};
//!
//! let mut tree = BTree::with_min_degree(MinDegree::new(3).unwrap());
//! for deadline in vec![10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(deadline, deadline * 100);
//! }
//! let keys: Vec<i32> = tree.keys().cloned().collect();
//! assert_eq!(keys, vec![5, 6, 7, 10, 12, 17, 20, 30]);
//! assert_eq!(tree.search(&6), Some(&600));
//! assert_eq!(tree.search(&99), None);
//! ```


mod tracing_helpers;

pub mod btree;

pub mod task;

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;

pub use btree::{BTree, Iter, Keys, MinDegree, Values};
pub use task::{CompletionStatus, Task, TaskTree};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid minimum degree {0}: must be at least 2")]
    InvalidMinDegree(usize),

    /// A node holds too few or too many entries
    #[error("node at depth {depth} holds {len} entries, expected between {min} and {max}")]
    EntryCount {
        depth: usize,
        len: usize,
        min: usize,
        max: usize,
    },

    /// An internal node does not have exactly one more child than entries
    #[error("internal node at depth {depth} has {children} children for {entries} entries")]
    ChildCount {
        depth: usize,
        entries: usize,
        children: usize,
    },

    /// Keys inside a node, or across a separator, are not ascending
    #[error("keys out of order at depth {depth}")]
    Unordered { depth: usize },

    #[error("leaf found at depth {found}, expected every leaf at depth {expected}")]
    UnevenLeaves { expected: usize, found: usize },

    #[error("tree records {recorded} entries but holds {counted}")]
    LengthMismatch { recorded: usize, counted: usize },
}
