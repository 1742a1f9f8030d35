use super::node::Node;
use super::BTree;
use arrayvec::ArrayVec;
use std::iter::FusedIterator;

/// Upper bound on the number of levels of any tree.
/// With `t >= 2`, a tree of height `h` holds at least `2^h - 1` entries, so
/// an in-memory tree can never have more levels than a `usize` has bits
const MAX_HEIGHT: usize = usize::BITS as usize;

struct IterState<'a, K, V> {
    node: &'a Node<K, V>,
    pos: usize,
}

// Derived impls would require `K: Copy, V: Copy`
impl<'a, K, V> Clone for IterState<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for IterState<'a, K, V> {}

/// In-order iterator over the entries of a [`BTree`].
/// It only borrows the tree, so calling `iter()` again restarts from the smallest key
pub struct Iter<'a, K, V> {
    /// List of parent nodes and next entry position in them
    tail_states: ArrayVec<IterState<'a, K, V>, MAX_HEIGHT>,
    /// The current node and the next entry position to return.
    /// `None` only for an empty tree
    head_state: Option<IterState<'a, K, V>>,
    len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(tree: &'a BTree<K, V>) -> Self {
        // Create initial state, by going down to the leftmost leaf
        let mut iter = Iter {
            tail_states: ArrayVec::new(),
            head_state: None,
            len: tree.len(),
        };
        if let Some(root) = &tree.root {
            iter.prepare_state_from(root);
        }
        iter
    }

    fn prepare_state_from(&mut self, mut node: &'a Node<K, V>) {
        self.head_state = Some(IterState { node, pos: 0 });
        while !node.is_leaf() {
            node = node.child(0);
            let next_state = IterState { node, pos: 0 };
            if let Some(parent_state) = self.head_state.replace(next_state) {
                self.tail_states.push(parent_state);
            }
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let IterState { node, pos } = self.head_state?;
            if pos < node.len() {
                // Iterate in node
                let next_state = IterState { node, pos: pos + 1 };
                self.head_state = Some(next_state);
                if !node.is_leaf() {
                    // Everything in the child to the right comes before the next entry
                    self.tail_states.push(next_state);
                    self.prepare_state_from(node.child(pos + 1));
                }
                self.len -= 1;
                return Some(node.entry(pos));
            }

            // Walk back up the chain. At the root the head stays exhausted
            self.head_state = Some(self.tail_states.pop()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tail_states: self.tail_states.clone(),
            head_state: self.head_state,
            len: self.len,
        }
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// In-order iterator over the keys of a [`BTree`]
pub struct Keys<'a, K, V>(pub(super) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// Values of a [`BTree`], in the order of their keys
pub struct Values<'a, K, V>(pub(super) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

#[cfg(test)]
mod test {
    use super::super::MinDegree;
    use super::*;

    fn helper_tree(degree: usize, keys: impl IntoIterator<Item = i32>) -> BTree<i32, i32> {
        let mut tree = BTree::with_min_degree(MinDegree::new(degree).unwrap());
        for key in keys {
            tree.insert(key, -key);
        }
        tree
    }

    #[test]
    fn exact_size() {
        let tree = helper_tree(2, 0..100);
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 100);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 98);
        assert_eq!(iter.count(), 98);
    }

    #[test]
    fn fused_after_exhaustion() {
        let tree = helper_tree(3, vec![3, 1, 2]);
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some((&1, &-1)));
        assert_eq!(iter.next(), Some((&2, &-2)));
        assert_eq!(iter.next(), Some((&3, &-3)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let empty: BTree<i32, i32> = BTree::new();
        let mut iter = empty.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn restartable() {
        let tree = helper_tree(2, (0..300).rev());
        let first = tree.iter().collect::<Vec<_>>();
        let second = tree.iter().collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.len(), 300);

        // A clone resumes from where the original was
        let mut iter = tree.iter().skip(10);
        let resumed = iter.next();
        assert_eq!(resumed, Some((&10, &-10)));
        let mut iter = tree.iter();
        iter.nth(41);
        let copy = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), copy.collect::<Vec<_>>());
    }

    #[test]
    fn keys_and_values() {
        let tree = helper_tree(3, vec![10, 20, 5, 6, 12, 30, 7, 17]);
        assert_eq!(
            tree.keys().cloned().collect::<Vec<_>>(),
            vec![5, 6, 7, 10, 12, 17, 20, 30]
        );
        assert_eq!(
            tree.values().cloned().collect::<Vec<_>>(),
            vec![-5, -6, -7, -10, -12, -17, -20, -30]
        );
        assert_eq!(tree.keys().len(), 8);

        let mut sum = 0;
        for (key, value) in &tree {
            sum += key + value;
        }
        assert_eq!(sum, 0);
    }
}
