use core::iter::FusedIterator;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use crate::storage::{Storage, DefaultStorage};
use super::{PathTree, Node};

/// A reference to a node in a path tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, K, V, S = DefaultStorage<Node<K, V>>>
where
    S: Storage<Element = Node<K, V>>,
{
    tree: &'a PathTree<K, V, S>,
    key: usize,
}
impl<'a, K, V, S> NodeRef<'a, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if there's no node there.
    pub fn new_raw(tree: &'a PathTree<K, V, S>, key: usize) -> Option<Self> {
        if tree.storage.contains_key(key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    pub(super) fn from_raw_key(tree: &'a PathTree<K, V, S>, key: usize) -> Self {
        Self { tree, key }
    }
    /// Returns the raw storage key for the node.
    pub fn raw_key(&self) -> usize {
        self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    pub fn into_raw_key(self) -> usize {
        self.key
    }

    /// Returns the path segment which leads to the node from its parent, or `None` if it's the root node.
    pub fn key(&self) -> Option<&'a K> {
        self.node().key.as_ref()
    }
    /// Returns a reference to the value stored in the node, or `None` if it's a structural node.
    pub fn value(&self) -> Option<&'a V> {
        self.node().value.as_ref()
    }
    /// Returns `true` if the node holds a value, `false` if it only exists to hold its children.
    pub fn has_value(&self) -> bool {
        self.node().value.is_some()
    }
    /// Returns the depth of the node. Top-level nodes are at depth 0, the root node is at depth -1.
    pub fn depth(&self) -> isize {
        self.node().depth
    }
    /// Returns the full path from the root to the node. The path of the root node is empty.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<&str, ()> = PathTree::new();
    /// tree.set(["etc", "ssh", "sshd_config"], ());
    ///
    /// let node = tree.get_tree(&["etc", "ssh", "sshd_config"]);
    /// assert_eq!(node.path(), [&"etc", &"ssh", &"sshd_config"]);
    /// assert!(tree.root().path().is_empty());
    /// ```
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn path(&self) -> Vec<&'a K> {
        #[allow(clippy::cast_sign_loss)]
        let mut path = Vec::with_capacity((self.depth() + 1) as usize);
        let mut current = Some(*self);
        while let Some(node) = current {
            path.extend(node.key());
            current = node.parent();
        }
        path.reverse();
        path
    }

    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|key| Self::from_raw_key(self.tree, key))
    }
    /// Returns a reference to the sibling of the pointee which comes before it in order, or `None` if it's the first child of its parent.
    pub fn prev_sibling(&self) -> Option<Self> {
        self.node()
            .prev_sibling
            .map(|key| Self::from_raw_key(self.tree, key))
    }
    /// Returns a reference to the sibling of the pointee which comes after it in order, or `None` if it's the last child of its parent.
    pub fn next_sibling(&self) -> Option<Self> {
        self.node()
            .next_sibling
            .map(|key| Self::from_raw_key(self.tree, key))
    }
    /// Returns a reference to the first child of the node, or `None` if it's a leaf node.
    pub fn first_child(&self) -> Option<Self> {
        self.node()
            .first_child
            .map(|key| Self::from_raw_key(self.tree, key))
    }
    /// Returns a reference to the last child of the node, or `None` if it's a leaf node.
    pub fn last_child(&self) -> Option<Self> {
        self.node()
            .last_child
            .map(|key| Self::from_raw_key(self.tree, key))
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.node().first_child.is_none()
    }
    /// Returns an iterator over references to the children of the node, in insertion order. Leaf nodes produce an empty iterator.
    pub fn children(&self) -> NodeChildrenIter<'a, K, V, S> {
        NodeSiblingsIter(NodeSiblingKeysIter {
            tree: self.tree,
            key: self.node().first_child,
        })
    }
    /// Returns an iterator over the raw keys of the children of the node.
    pub fn children_keys(&self) -> NodeChildKeysIter<'a, K, V, S> {
        NodeSiblingKeysIter {
            tree: self.tree,
            key: self.node().first_child,
        }
    }
    /// Returns an iterator over references to the siblings of the node. Does not include siblings which come before the current node. The first element yielded is always `self`.
    pub fn siblings(self) -> NodeSiblingsIter<'a, K, V, S> {
        NodeSiblingsIter(self.sibling_keys())
    }
    /// Returns an iterator over the raw keys of the siblings of the node. Does not include siblings which come before the current node. The first element yielded is always `self`'s key.
    pub fn sibling_keys(self) -> NodeSiblingKeysIter<'a, K, V, S> {
        NodeSiblingKeysIter {
            tree: self.tree,
            key: Some(self.key),
        }
    }

    fn node(&self) -> &'a Node<K, V> {
        self.tree.node(self.key)
    }
}
impl<K, V, S> Copy for NodeRef<'_, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
}
impl<K, V, S> Clone for NodeRef<'_, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

/// A *mutable* reference to a node in a path tree.
///
/// Only the value of the node can be changed through this reference; the shape of the tree is only ever modified by [`PathTree::set`] and [`PathTree::del`].
///
/// [`PathTree::set`]: struct.PathTree.html#method.set " "
/// [`PathTree::del`]: struct.PathTree.html#method.del " "
#[derive(Debug)]
pub struct NodeRefMut<'a, K, V, S = DefaultStorage<Node<K, V>>>
where
    S: Storage<Element = Node<K, V>>,
{
    tree: &'a mut PathTree<K, V, S>,
    key: usize,
}
impl<'a, K, V, S> NodeRefMut<'a, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if there's no node there.
    pub fn new_raw(tree: &'a mut PathTree<K, V, S>, key: usize) -> Option<Self> {
        if tree.storage.contains_key(key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    pub(super) fn from_raw_key(tree: &'a mut PathTree<K, V, S>, key: usize) -> Self {
        Self { tree, key }
    }
    /// Returns the raw storage key for the node.
    pub fn raw_key(&self) -> usize {
        self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    pub fn into_raw_key(self) -> usize {
        self.key
    }
    /// Returns an immutable reference to the same node, borrowing the mutable one.
    pub fn as_node_ref(&self) -> NodeRef<'_, K, V, S> {
        NodeRef::from_raw_key(self.tree, self.key)
    }

    /// Returns the path segment which leads to the node from its parent, or `None` if it's the root node.
    pub fn key(&self) -> Option<&K> {
        self.node().key.as_ref()
    }
    /// Returns the depth of the node. Top-level nodes are at depth 0, the root node is at depth -1.
    pub fn depth(&self) -> isize {
        self.node().depth
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns a reference to the value stored in the node, or `None` if it's a structural node.
    pub fn value(&self) -> Option<&V> {
        self.node().value.as_ref()
    }
    /// Returns a *mutable* reference to the value stored in the node, or `None` if it's a structural node.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.node_mut().value.as_mut()
    }
    /// Consumes the reference and returns a mutable reference to the value with the lifetime of the tree borrow.
    pub fn into_value_mut(self) -> Option<&'a mut V> {
        let Self { tree, key } = self;
        tree.node_mut(key).value.as_mut()
    }
    /// Stores a value in the node, returning the previous one if there was any.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<&str, i32> = PathTree::new();
    /// tree.set(["a", "b"], 1);
    ///
    /// let mut node = tree.get_tree_mut(&["a"]);
    /// assert_eq!(node.set_value(10), None);
    /// assert_eq!(node.set_value(11), Some(10));
    /// assert_eq!(tree.fetch(&["a"]), Some(&11));
    /// ```
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.node_mut().value.replace(value)
    }
    /// Removes the value from the node and returns it, turning the node into a structural one. The node itself stays in the tree.
    pub fn take_value(&mut self) -> Option<V> {
        self.node_mut().value.take()
    }

    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, K, V, S>> {
        let key = self.node().parent?;
        Some(NodeRefMut::from_raw_key(&mut *self.tree, key))
    }
    /// Returns a *mutable* reference to the first child of the node, or `None` if it's a leaf node.
    pub fn first_child_mut(&mut self) -> Option<NodeRefMut<'_, K, V, S>> {
        let key = self.node().first_child?;
        Some(NodeRefMut::from_raw_key(&mut *self.tree, key))
    }
    /// Returns a *mutable* reference to the sibling of the pointee which comes after it in order, or `None` if it's the last child of its parent.
    pub fn next_sibling_mut(&mut self) -> Option<NodeRefMut<'_, K, V, S>> {
        let key = self.node().next_sibling?;
        Some(NodeRefMut::from_raw_key(&mut *self.tree, key))
    }

    fn node(&self) -> &Node<K, V> {
        self.tree.node(self.key)
    }
    fn node_mut(&mut self) -> &mut Node<K, V> {
        self.tree.node_mut(self.key)
    }
}
impl<'a, K, V, S> From<NodeRefMut<'a, K, V, S>> for NodeRef<'a, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    fn from(op: NodeRefMut<'a, K, V, S>) -> Self {
        NodeRef::from_raw_key(op.tree, op.key)
    }
}

/// An iterator over keys of the siblings of a path tree node.
#[derive(Debug)]
pub struct NodeSiblingKeysIter<'a, K, V, S = DefaultStorage<Node<K, V>>>
where
    S: Storage<Element = Node<K, V>>,
{
    tree: &'a PathTree<K, V, S>,
    key: Option<usize>,
}
/// An iterator over keys of the children of a path tree node.
pub type NodeChildKeysIter<'a, K, V, S = DefaultStorage<Node<K, V>>> =
    NodeSiblingKeysIter<'a, K, V, S>;
impl<K, V, S> Iterator for NodeSiblingKeysIter<'_, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        let current_key = self.key.take()?;
        self.key = self.tree.node(current_key).next_sibling;
        Some(current_key)
    }
}
impl<K, V, S> FusedIterator for NodeSiblingKeysIter<'_, K, V, S> where
    S: Storage<Element = Node<K, V>>
{
}
impl<K, V, S> Clone for NodeSiblingKeysIter<'_, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key,
        }
    }
}

/// An iterator over the siblings of a path tree node.
#[derive(Debug)]
pub struct NodeSiblingsIter<'a, K, V, S = DefaultStorage<Node<K, V>>>(
    NodeSiblingKeysIter<'a, K, V, S>,
)
where
    S: Storage<Element = Node<K, V>>;
/// An iterator over the children of a path tree node.
pub type NodeChildrenIter<'a, K, V, S = DefaultStorage<Node<K, V>>> =
    NodeSiblingsIter<'a, K, V, S>;
impl<'a, K, V, S> Iterator for NodeSiblingsIter<'a, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    type Item = NodeRef<'a, K, V, S>;
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.0.tree;
        self.0.next().map(|key| NodeRef::from_raw_key(tree, key))
    }
}
impl<K, V, S> FusedIterator for NodeSiblingsIter<'_, K, V, S> where
    S: Storage<Element = Node<K, V>>
{
}
impl<K, V, S> Clone for NodeSiblingsIter<'_, K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
