use crate::{
    storage::Storage,
    traversal::Traversable,
};
use super::{PathTree, Node};

impl<K, V, S> Traversable for PathTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    type Value = V;
    type Cursor = usize;

    #[inline(always)]
    fn cursor_to_root(&self) -> Self::Cursor {
        self.root
    }
    #[inline]
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> Option<&'_ Self::Value> {
        self.node(*cursor).value.as_ref()
    }
    #[inline]
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node(*cursor).parent
    }
    #[inline]
    #[track_caller]
    fn first_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node(*cursor).first_child
    }
    #[inline]
    #[track_caller]
    fn next_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node(*cursor).next_sibling
    }
}
