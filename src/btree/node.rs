use super::MinDegree;
use crate::tracing_helpers::trace_log;
use crate::{Error, Result};

/// A node holds its entries sorted by key.
/// A leaf has no children; an internal node has exactly one child more than
/// it has entries, each child exclusively owned by this node
#[derive(Clone)]
pub(super) struct Node<K, V> {
    entries: Vec<(K, V)>,
    children: Vec<Node<K, V>>,
}

impl<K, V> Node<K, V> {
    /// Build a leaf holding a single entry
    pub(super) fn with_entry(degree: MinDegree, key: K, value: V) -> Self {
        let mut entries = Vec::with_capacity(degree.max_entries());
        entries.push((key, value));
        Node {
            entries,
            children: Vec::new(),
        }
    }

    /// Build an internal node with no entries above `child`.
    /// It only lives until `child` is split into it
    pub(super) fn with_child(degree: MinDegree, child: Node<K, V>) -> Self {
        let mut children = Vec::with_capacity(degree.max_children());
        children.push(child);
        Node {
            entries: Vec::with_capacity(degree.max_entries()),
            children,
        }
    }

    /// A node with no entries and no allocation, used as a placeholder
    pub(super) fn empty() -> Self {
        Node {
            entries: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Return the number of entries in this node
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node is full when it holds `2t - 1` entries
    pub(super) fn is_full(&self, degree: MinDegree) -> bool {
        self.entries.len() == degree.max_entries()
    }

    /// Return the entry at the given index.
    /// Panics if out-of-bounds
    pub(super) fn entry(&self, index: usize) -> (&K, &V) {
        let (key, value) = &self.entries[index];
        (key, value)
    }

    /// Return the child at the given index.
    /// Panics if it is a leaf node or out-of-bounds access
    pub(super) fn child(&self, index: usize) -> &Node<K, V> {
        &self.children[index]
    }

    /// Split the full child at `index` around its median.
    /// The child keeps its lower `t - 1` entries (and lower `t` children), a new
    /// right sibling takes the upper ones and the median moves up into this
    /// node at `index`. This node must not be full
    pub(super) fn split_child(&mut self, index: usize, degree: MinDegree) {
        debug_assert!(!self.is_full(degree));
        debug_assert!(index < self.children.len());

        let t = degree.get();
        let child = &mut self.children[index];
        debug_assert!(child.is_full(degree));

        let mut right_entries = Vec::with_capacity(degree.max_entries());
        right_entries.extend(child.entries.drain(t..));
        let right_children = if child.is_leaf() {
            Vec::new()
        } else {
            let mut right_children = Vec::with_capacity(degree.max_children());
            right_children.extend(child.children.drain(t..));
            right_children
        };
        // Only the median remains past the lower half
        let median = match child.entries.pop() {
            Some(median) => median,
            None => unreachable!("a full node always has a median"),
        };

        debug_assert_eq!(child.len(), degree.min_entries());
        debug_assert_eq!(right_entries.len(), degree.min_entries());

        self.entries.insert(index, median);
        self.children.insert(
            index + 1,
            Node {
                entries: right_entries,
                children: right_children,
            },
        );
        trace_log!(index, len = self.entries.len(), "split full child");
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Index of the first entry whose key is not smaller than `key`.
    /// Equals `len()` when every key is smaller
    fn lower_bound(&self, key: &K) -> usize {
        self.entries.partition_point(|(k, _)| k < key)
    }

    /// Index of the first entry whose key is strictly greater than `key`,
    /// which places a new entry after every equal one
    fn upper_bound(&self, key: &K) -> usize {
        self.entries.partition_point(|(k, _)| k <= key)
    }

    /// Insert into the subtree rooted at this non-full node.
    /// Every full child is split before it is entered, so nothing is ever
    /// pushed back up to a parent
    pub(super) fn insert_non_full(&mut self, key: K, value: V, degree: MinDegree) {
        let mut node = self;
        loop {
            debug_assert!(!node.is_full(degree));
            let mut index = node.upper_bound(&key);

            if node.is_leaf() {
                node.entries.insert(index, (key, value));
                return;
            }

            if node.children[index].is_full(degree) {
                node.split_child(index, degree);
                // Equal keys go right of the promoted median
                if node.entries[index].0 <= key {
                    index += 1;
                }
            }
            node = &mut node.children[index];
        }
    }

    /// Look up an entry with the given key in this subtree
    pub(super) fn search(&self, key: &K) -> Option<&V> {
        let mut node = self;
        loop {
            let index = node.lower_bound(key);
            // `index` may equal `len()`: then there is no entry to compare and
            // the only way on is the last child
            if let Some((k, value)) = node.entries.get(index) {
                if k == key {
                    return Some(value);
                }
            }
            if node.is_leaf() {
                return None;
            }
            node = &node.children[index];
        }
    }

    pub(super) fn search_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut node = self;
        loop {
            let index = node.lower_bound(key);
            let found = match node.entries.get(index) {
                Some((k, _)) => k == key,
                None => false,
            };
            if found {
                return Some(&mut node.entries[index].1);
            }
            if node.is_leaf() {
                return None;
            }
            node = &mut node.children[index];
        }
    }

    /// Recursively check every structural invariant of this subtree.
    /// All keys must lie within `[lower, upper]` (bounds are inclusive since
    /// equal keys may sit on either side of a separator).
    /// Return the number of entries in the subtree
    pub(super) fn check(
        &self,
        degree: MinDegree,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        leaf_depth: &mut Option<usize>,
    ) -> Result<usize> {
        let len = self.len();
        let min = if depth == 0 { 0 } else { degree.min_entries() };
        let max = degree.max_entries();
        if len < min || len > max {
            return Err(Error::EntryCount {
                depth,
                len,
                min,
                max,
            });
        }

        let sorted = self.entries.windows(2).all(|pair| pair[0].0 <= pair[1].0);
        let above_lower = match (lower, self.entries.first()) {
            (Some(lower), Some((first, _))) => lower <= first,
            _ => true,
        };
        let below_upper = match (upper, self.entries.last()) {
            (Some(upper), Some((last, _))) => last <= upper,
            _ => true,
        };
        if !sorted || !above_lower || !below_upper {
            return Err(Error::Unordered { depth });
        }

        if self.is_leaf() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(Error::UnevenLeaves {
                        expected,
                        found: depth,
                    })
                }
                Some(_) => {}
            }
            return Ok(len);
        }

        if self.children.len() != len + 1 {
            return Err(Error::ChildCount {
                depth,
                entries: len,
                children: self.children.len(),
            });
        }

        let mut count = len;
        for (i, child) in self.children.iter().enumerate() {
            let child_lower = if i == 0 {
                lower
            } else {
                Some(&self.entries[i - 1].0)
            };
            let child_upper = if i == len {
                upper
            } else {
                Some(&self.entries[i].0)
            };
            count += child.check(degree, depth + 1, child_lower, child_upper, leaf_depth)?;
        }
        Ok(count)
    }
}
