mod node;
mod tree;
mod tree_iter;

pub use tree::BTree;
pub use tree_iter::{Iter, Keys, Values};

use crate::{Error, Result};

const DEFAULT_MIN_DEGREE: usize = 3;

/// The minimum degree `t` of a tree.
/// Every node other than the root holds between `t - 1` and `2t - 1` entries,
/// and an internal node holds one more child than it has entries
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MinDegree(usize);

impl MinDegree {
    /// Validate a minimum degree. It must be at least 2, otherwise a full node
    /// could not be split into two non-empty halves around a median
    pub fn new(t: usize) -> Result<Self> {
        if t < 2 {
            return Err(Error::InvalidMinDegree(t));
        }
        Ok(MinDegree(t))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Number of entries that makes a node full: `2t - 1`
    pub fn max_entries(self) -> usize {
        2 * self.0 - 1
    }

    /// Lower bound on entries for every non-root node: `t - 1`
    pub fn min_entries(self) -> usize {
        self.0 - 1
    }

    pub fn max_children(self) -> usize {
        2 * self.0
    }
}

impl Default for MinDegree {
    fn default() -> Self {
        MinDegree(DEFAULT_MIN_DEGREE)
    }
}

impl std::convert::TryFrom<usize> for MinDegree {
    type Error = Error;

    fn try_from(t: usize) -> Result<Self> {
        MinDegree::new(t)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn bounds() {
        let t = MinDegree::default();
        assert_eq!(t.get(), 3);
        assert_eq!(t.max_entries(), 5);
        assert_eq!(t.min_entries(), 2);
        assert_eq!(t.max_children(), 6);

        let t = MinDegree::new(2).unwrap();
        assert_eq!(t.max_entries(), 3);
        assert_eq!(t.min_entries(), 1);
    }

    #[test]
    fn reject_small_degrees() {
        assert_eq!(MinDegree::new(0), Err(Error::InvalidMinDegree(0)));
        assert_eq!(MinDegree::try_from(1), Err(Error::InvalidMinDegree(1)));
        assert!(MinDegree::try_from(17).is_ok());
    }
}
