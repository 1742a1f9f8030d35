use super::node::Node;
use super::*;
use crate::tracing_helpers::debug_log;
use crate::{Error, Result};
use std::fmt;
use std::mem;

/// An ordered multimap backed by a B-tree.
/// Keys need not be unique: every inserted entry is kept and entries with
/// equal keys are iterated in insertion order
#[derive(Clone)]
pub struct BTree<K, V> {
    pub(super) root: Option<Node<K, V>>,
    degree: MinDegree,
    len: usize,
}

impl<K, V> BTree<K, V> {
    /// Create an empty tree with the default minimum degree (3)
    pub fn new() -> Self {
        BTree::with_min_degree(MinDegree::default())
    }

    /// Create an empty tree. The degree is fixed for the lifetime of the tree
    pub fn with_min_degree(degree: MinDegree) -> Self {
        BTree {
            root: None,
            degree,
            len: 0,
        }
    }

    pub fn min_degree(&self) -> MinDegree {
        self.degree
    }

    /// Return the total number of entries in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels: 0 for an empty tree, 1 for a single leaf root
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_ref();
        while let Some(current) = node {
            height += 1;
            node = if current.is_leaf() {
                None
            } else {
                Some(current.child(0))
            };
        }
        height
    }

    /// Return a sorted iterator over references to the entries in the tree
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Ord, V> BTree<K, V> {
    /// Insert a new entry into the tree. This never fails: duplicated keys are
    /// stored after the existing equal ones.
    /// If the root is full, a new root is created above it and the old root is
    /// split. That is the only way the tree grows in height
    pub fn insert(&mut self, key: K, value: V) {
        let degree = self.degree;
        let root = match self.root.as_mut() {
            Some(root) => root,
            None => {
                self.root = Some(Node::with_entry(degree, key, value));
                self.len = 1;
                return;
            }
        };

        if root.is_full(degree) {
            let prev_root = mem::replace(root, Node::empty());
            *root = Node::with_child(degree, prev_root);
            root.split_child(0, degree);
            debug_log!(len = self.len, "root split, tree grew by one level");
        }

        root.insert_non_full(key, value, degree);
        self.len += 1;
    }

    /// Return the value of an entry with the given key.
    /// When the key is duplicated, any one of the matching entries may be returned
    pub fn search(&self, key: &K) -> Option<&V> {
        self.root.as_ref().and_then(|root| root.search(key))
    }

    /// Mutable version of `search`. Values can be changed freely since they
    /// play no part in ordering
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V> {
        self.root.as_mut().and_then(|root| root.search_mut(key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Walk the whole tree and report the first violated structural invariant:
    /// node occupancy, child count, key ordering, leaf depth and the recorded length
    pub fn check_invariants(&self) -> Result<()> {
        let counted = match &self.root {
            None => 0,
            Some(root) => {
                let mut leaf_depth = None;
                root.check(self.degree, 0, None, None, &mut leaf_depth)?
            }
        };
        if counted != self.len {
            return Err(Error::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<K, V> Default for BTree<K, V> {
    fn default() -> Self {
        BTree::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> std::iter::FromIterator<(K, V)> for BTree<K, V> {
    /// Create a tree with the default degree, inserting entries in iteration order
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for BTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a BTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
