use crate::storage::Storage;
use super::{PathTree, Node};

impl<K, V, S> PathTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    /// Finds the child of `parent` whose key equals `segment`. Children are scanned in insertion order.
    pub(super) fn find_child<Q>(&self, parent: usize, segment: &Q) -> Option<usize>
    where
        K: PartialEq<Q>,
    {
        let mut cursor = self.node(parent).first_child;
        while let Some(key) = cursor {
            let child = self.node(key);
            if matches!(&child.key, Some(k) if k == segment) {
                return Some(key);
            }
            cursor = child.next_sibling;
        }
        None
    }
    /// Follows the path for as long as it matches, returning the last node reached. That's the root node if the path is empty or its first segment doesn't match.
    pub(super) fn resolve_deepest<Q>(&self, path: &[Q]) -> usize
    where
        K: PartialEq<Q>,
    {
        let mut cursor = self.root;
        for segment in path {
            match self.find_child(cursor, segment) {
                Some(child) => cursor = child,
                None => break,
            }
        }
        cursor
    }
    /// Follows the path to its end, returning `None` on the first segment which doesn't match.
    pub(super) fn resolve_exact<Q>(&self, path: &[Q]) -> Option<usize>
    where
        K: PartialEq<Q>,
    {
        path.iter()
            .try_fold(self.root, |cursor, segment| self.find_child(cursor, segment))
    }
}
