//! Path trees, multiway trees whose nodes are addressed by the sequence of keys leading to them from the root.
//!
//! Nothing but the root exists in a fresh tree. Writing a value to a path with [`set`] creates every node along the path which doesn't exist yet; the intermediate ones are *structural*, i.e. carry no value until one is explicitly written to them. Children are kept in insertion order, which is also the order in which every traversal visits them.
//!
//! There are two ways to read from the tree:
//! - [`fetch`] demands an exact match: the whole path has to lead to a node, otherwise nothing is returned;
//! - [`get`] settles for the *deepest* node reachable along the path, reporting its depth alongside its value.
//!
//! # Example
//! ```rust
//! use pathtree::path_tree::PathTree;
//!
//! // The type annotation is needed to state that we are using the default storage method instead of
//! // asking the compiler to infer it, which would be impossible.
//! let mut tree: PathTree<&str, u32> = PathTree::new();
//!
//! tree.set(["fruit", "apple"], 3);
//! tree.set(["fruit", "pear"], 5);
//! tree.set(["vegetable", "leek"], 1);
//! assert_eq!(tree.len(), 5);
//!
//! // "fruit" was only created to hold its children:
//! assert_eq!(tree.fetch(&["fruit"]), None);
//! assert_eq!(tree.fetch(&["fruit", "pear"]), Some(&5));
//! // ...and "plum" does not exist, so `get` stops at "fruit", which is at depth 0:
//! assert_eq!(tree.get(&["fruit", "plum"]), (0, None));
//!
//! // Deleting a node deletes its whole subtree:
//! assert!(tree.del(&["fruit"]));
//! assert_eq!(tree.fetch(&["fruit", "apple"]), None);
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! [`set`]: struct.PathTree.html#method.set " "
//! [`get`]: struct.PathTree.html#method.get " "
//! [`fetch`]: struct.PathTree.html#method.fetch " "

use core::iter::FromIterator;
use crate::{
    storage::{Storage, ListStorage, DefaultStorage, SparseStorage, Slot},
    traversal::{
        Traversable,
        algorithms::{PostOrder, ExactLevel},
    },
    TryDelError,
};

mod node;
mod node_ref;
mod resolve;
mod impl_traversable;

#[cfg(all(test, feature = "std"))]
mod tests;

pub use node::Node;
pub use node_ref::{
    NodeRef,
    NodeRefMut,
    NodeSiblingsIter,
    NodeChildrenIter,
    NodeSiblingKeysIter,
    NodeChildKeysIter,
};

/// A path tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct PathTree<K, V, S = DefaultStorage<Node<K, V>>>
where
    S: Storage<Element = Node<K, V>>,
{
    storage: S,
    root: usize,
    /// Number of nodes, not counting the root.
    len: usize,
}
impl<K, V, S> PathTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    /// Creates an empty path tree, which only consists of a root node without a value.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let tree: PathTree<String, f64> = PathTree::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_leaf());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_storage(S::new())
    }
    /// Creates an empty path tree with the specified capacity for the storage. The capacity includes the root node.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value exceeds it.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(S::with_capacity(capacity))
    }
    fn with_storage(mut storage: S) -> Self {
        let root = storage.add(Node::root());
        Self {
            storage,
            root,
            len: 0,
        }
    }

    /// Returns the number of nodes in the tree, *not* counting the root. Structural nodes count too.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if the tree has no nodes besides the root, `false` otherwise. The root may still hold a value.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Removes all nodes from the tree and the value from its root.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = self.storage.add(Node::root());
        self.len = 0;
    }

    /// Returns the number of nodes, root included, which the storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves capacity for at least `additional` more nodes to be added to the tree.
    ///
    /// # Panics
    /// Panics if the storage has fixed capacity and `additional` more nodes would not fit into it.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<u8, u8> = PathTree::new();
    /// tree.reserve(10);
    /// assert!(tree.capacity() >= 11);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the capacity of the storage as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    /// Returns a reference to the root node of the tree.
    #[inline]
    pub fn root(&self) -> NodeRef<'_, K, V, S> {
        NodeRef::from_raw_key(self, self.root)
    }
    /// Returns a *mutable* reference to the root node of the tree.
    #[inline]
    pub fn root_mut(&mut self) -> NodeRefMut<'_, K, V, S> {
        let root = self.root;
        NodeRefMut::from_raw_key(self, root)
    }

    /// Writes a value to the node at the specified path, creating every missing node along the way, and returns the value which the node previously held, if any.
    ///
    /// Nodes created for the intermediate segments of the path hold no value. An empty path writes to the root node itself.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and runs out of it.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<&str, i32> = PathTree::new();
    /// assert_eq!(tree.set("usr/share/doc".split('/'), 1), None);
    /// assert_eq!(tree.set(["usr", "share", "doc"], 2), Some(1));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn set<P>(&mut self, path: P, value: V) -> Option<V>
    where
        P: IntoIterator<Item = K>,
        K: PartialEq,
    {
        let mut cursor = self.root;
        for segment in path {
            cursor = match self.find_child(cursor, &segment) {
                Some(child) => child,
                None => self.push_child(cursor, segment),
            };
        }
        self.node_mut(cursor).value.replace(value)
    }
    /// Reads from the deepest node reachable by following the specified path, returning its depth and its value.
    ///
    /// If the whole path leads to a node, that node is used. Otherwise, resolution stops at the last node which was matched, which is not an error: it's the closest existing ancestor of the requested location. Structural nodes report `None` as their value.
    ///
    /// If not even the first segment of the path matches anything, the result is `(-1, None)`. The empty path resolves to the root node, which is at depth -1.
    ///
    /// Use [`fetch`] if only an exact match is acceptable.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<&str, i32> = PathTree::new();
    /// tree.set(["a", "b"], 2);
    ///
    /// assert_eq!(tree.get(&["a", "b"]), (1, Some(&2)));
    /// // As "c" doesn't exist, the value of "b" is returned:
    /// assert_eq!(tree.get(&["a", "b", "c"]), (1, Some(&2)));
    /// // "a" exists, but has no value:
    /// assert_eq!(tree.get(&["a", "x"]), (0, None));
    /// // Nothing matched at all:
    /// assert_eq!(tree.get(&["x"]), (-1, None));
    /// ```
    ///
    /// [`fetch`]: #method.fetch " "
    pub fn get<Q>(&self, path: &[Q]) -> (isize, Option<&V>)
    where
        K: PartialEq<Q>,
    {
        let found = self.resolve_deepest(path);
        if found == self.root && !path.is_empty() {
            return (-1, None);
        }
        let node = self.node(found);
        (node.depth, node.value.as_ref())
    }
    /// Reads from the node at exactly the specified path, returning `None` if there is no such node or if it holds no value.
    ///
    /// Unlike [`get`], this never falls back to the value of an ancestor.
    ///
    /// [`get`]: #method.get " "
    pub fn fetch<Q>(&self, path: &[Q]) -> Option<&V>
    where
        K: PartialEq<Q>,
    {
        self.resolve_exact(path)
            .and_then(|key| self.node(key).value.as_ref())
    }
    /// Same as [`fetch`], but returns a *mutable* reference.
    ///
    /// [`fetch`]: #method.fetch " "
    pub fn fetch_mut<Q>(&mut self, path: &[Q]) -> Option<&mut V>
    where
        K: PartialEq<Q>,
    {
        let key = self.resolve_exact(path)?;
        self.node_mut(key).value.as_mut()
    }
    /// Returns `true` if a node exists at exactly the specified path, `false` otherwise. The node does not need to hold a value.
    pub fn contains_path<Q>(&self, path: &[Q]) -> bool
    where
        K: PartialEq<Q>,
    {
        self.resolve_exact(path).is_some()
    }
    /// Returns a reference to the deepest node reachable by following the specified path, which is the root node if not even the first segment matches anything.
    ///
    /// This resolves paths the same way as [`get`].
    ///
    /// [`get`]: #method.get " "
    pub fn get_tree<Q>(&self, path: &[Q]) -> NodeRef<'_, K, V, S>
    where
        K: PartialEq<Q>,
    {
        NodeRef::from_raw_key(self, self.resolve_deepest(path))
    }
    /// Returns a *mutable* reference to the deepest node reachable by following the specified path.
    pub fn get_tree_mut<Q>(&mut self, path: &[Q]) -> NodeRefMut<'_, K, V, S>
    where
        K: PartialEq<Q>,
    {
        let key = self.resolve_deepest(path);
        NodeRefMut::from_raw_key(self, key)
    }
    /// Returns a reference to the node at exactly the specified path, or `None` if there is no such node.
    pub fn fetch_tree<Q>(&self, path: &[Q]) -> Option<NodeRef<'_, K, V, S>>
    where
        K: PartialEq<Q>,
    {
        self.resolve_exact(path)
            .map(|key| NodeRef::from_raw_key(self, key))
    }

    /// Removes the node at exactly the specified path along with its entire subtree, returning `true` if it existed and `false` if nothing was changed.
    ///
    /// # Panics
    /// Panics if the path is empty, since the root node cannot be removed. See [`try_del`] for a non-panicking version.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<&str, i32> = PathTree::new();
    /// tree.set(["d", "c", "b"], 2);
    /// tree.set(["d"], 4);
    ///
    /// assert!(!tree.del(&["d", "x"]));
    /// assert!(tree.del(&["d", "c"]));
    /// assert_eq!(tree.fetch(&["d", "c", "b"]), None);
    /// assert_eq!(tree.fetch(&["d"]), Some(&4));
    /// ```
    ///
    /// [`try_del`]: #method.try_del " "
    #[track_caller]
    pub fn del<Q>(&mut self, path: &[Q]) -> bool
    where
        K: PartialEq<Q>,
    {
        match self.try_del(path) {
            Ok(()) => true,
            Err(TryDelError::NotFound) => false,
            Err(TryDelError::EmptyPath) => panic!("cannot delete the root node: the path was empty"),
        }
    }
    /// Removes the node at exactly the specified path along with its entire subtree.
    ///
    /// # Errors
    /// Will fail in the following scenarios:
    /// - The path was empty, which would mean removing the root node.
    /// - No node exists at the path. Partial matches do not count, and nothing is removed.
    pub fn try_del<Q>(&mut self, path: &[Q]) -> Result<(), TryDelError>
    where
        K: PartialEq<Q>,
    {
        if path.is_empty() {
            return Err(TryDelError::EmptyPath);
        }
        let target = self.resolve_exact(path).ok_or(TryDelError::NotFound)?;
        self.unlink(target);
        self.remove_subtree(target);
        Ok(())
    }

    /// Traverses the subtree below the deepest node reachable by following the specified path in *post-order*, i.e. visiting all children of a node, left to right, before the node itself. The node which the path resolved to is not visited.
    ///
    /// The callback returns `true` to continue and `false` to stop the traversal immediately. Returns `false` if the traversal was stopped, `true` otherwise.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<&str, i32> = PathTree::new();
    /// tree.set(["d", "c", "b", "a"], 1);
    /// tree.set(["d", "c", "x"], 80);
    ///
    /// let mut keys: Vec<&&str> = Vec::new();
    /// tree.range(&["d", "c"], |node| {
    ///     keys.extend(node.key());
    ///     true
    /// });
    /// assert_eq!(keys, [&"a", &"b", &"x"]);
    /// ```
    pub fn range<'a, Q, F>(&'a self, path: &[Q], f: F) -> bool
    where
        K: PartialEq<Q>,
        F: FnMut(NodeRef<'a, K, V, S>) -> bool,
    {
        self.post_order_from(self.resolve_deepest(path), None, f)
    }
    /// Traverses every node of the tree except the root in *post-order*, i.e. visiting all children of a node, left to right, before the node itself.
    ///
    /// The callback returns `true` to continue and `false` to stop the traversal immediately. Returns `false` if the traversal was stopped, `true` otherwise.
    pub fn range_all<'a, F>(&'a self, f: F) -> bool
    where
        F: FnMut(NodeRef<'a, K, V, S>) -> bool,
    {
        self.post_order_from(self.root, None, f)
    }
    /// Same as [`range_all`], but skipping every node at `max_depth` or deeper together with its whole subtree. The top-level nodes are at depth 0, so a `max_depth` of 1 only visits them.
    ///
    /// [`range_all`]: #method.range_all " "
    pub fn range_limit<'a, F>(&'a self, max_depth: usize, f: F) -> bool
    where
        F: FnMut(NodeRef<'a, K, V, S>) -> bool,
    {
        self.post_order_from(self.root, Some(max_depth), f)
    }
    /// Visits the nodes at exactly the specified depth, left to right. The top-level nodes are at depth 0.
    ///
    /// The callback returns `true` to continue and `false` to stop the traversal immediately. Returns `false` if the traversal was stopped, `true` otherwise.
    pub fn range_level<'a, F>(&'a self, level: usize, mut f: F) -> bool
    where
        F: FnMut(NodeRef<'a, K, V, S>) -> bool,
    {
        self.traverse(ExactLevel::<Self, _>::new(level, |key| {
            f(NodeRef::from_raw_key(self, key))
        }))
    }
    fn post_order_from<'a, F>(&'a self, start: usize, max_depth: Option<usize>, mut f: F) -> bool
    where
        F: FnMut(NodeRef<'a, K, V, S>) -> bool,
    {
        self.traverse_from(
            start,
            PostOrder::<Self, _>::new(max_depth, |key| f(NodeRef::from_raw_key(self, key))),
        )
    }

    #[track_caller]
    fn node(&self, key: usize) -> &Node<K, V> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid node key: {}", key))
    }
    #[track_caller]
    fn node_mut(&mut self, key: usize) -> &mut Node<K, V> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid node key: {}", key))
    }
    /// Appends a structural node to the end of the child list of `parent`, returning its key.
    fn push_child(&mut self, parent: usize, segment: K) -> usize {
        let (depth, last_child) = {
            let parent = self.node(parent);
            (parent.depth + 1, parent.last_child)
        };
        let child = self
            .storage
            .add(Node::child(segment, depth, parent, last_child));
        if let Some(last_child) = last_child {
            self.node_mut(last_child).next_sibling = Some(child);
        }
        let parent = self.node_mut(parent);
        if parent.first_child.is_none() {
            parent.first_child = Some(child);
        }
        parent.last_child = Some(child);
        self.len += 1;
        child
    }
    /// Detaches a non-root node from the child list of its parent. The node keeps its own links.
    fn unlink(&mut self, key: usize) {
        let (parent, prev_sibling, next_sibling) = {
            let node = self.node(key);
            (
                node.parent.expect("cannot unlink the root node"),
                node.prev_sibling,
                node.next_sibling,
            )
        };
        match prev_sibling {
            Some(prev) => self.node_mut(prev).next_sibling = next_sibling,
            None => self.node_mut(parent).first_child = next_sibling,
        }
        match next_sibling {
            Some(next) => self.node_mut(next).prev_sibling = prev_sibling,
            None => self.node_mut(parent).last_child = prev_sibling,
        }
    }
    /// Removes a node and all of its descendants from the storage, deepest first. The node must have been unlinked from its parent already.
    fn remove_subtree(&mut self, top: usize) {
        let mut cursor = top;
        loop {
            while let Some(first_child) = self.node(cursor).first_child {
                cursor = first_child;
            }
            // A leaf, and always the first child of its parent
            let removed = self.storage.remove(cursor);
            self.len -= 1;
            if cursor == top {
                break;
            }
            let parent_key = removed.parent.expect("non-root node without a parent");
            let parent = self.node_mut(parent_key);
            parent.first_child = removed.next_sibling;
            if parent.first_child.is_none() {
                parent.last_child = None;
            }
            cursor = parent_key;
        }
    }
}
impl<K, V, S> PathTree<K, V, SparseStorage<Node<K, V>, S>>
where
    S: ListStorage<Element = Slot<Node<K, V>>>,
{
    /// Returns the number of holes left in the storage by removed nodes. Those get reused by later insertions.
    ///
    /// # Example
    /// ```rust
    /// # use pathtree::PathTree;
    /// let mut tree: PathTree<u8, ()> = PathTree::new();
    /// tree.set([1, 2, 3], ());
    /// tree.del(&[1_u8, 2]);
    /// assert_eq!(tree.num_holes(), 2);
    ///
    /// tree.set([4], ());
    /// assert_eq!(tree.num_holes(), 1);
    /// ```
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.storage.num_holes()
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.storage.is_dense()
    }
}
impl<K, V, S> Default for PathTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<K, V, S, P> Extend<(P, V)> for PathTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    P: IntoIterator<Item = K>,
    K: PartialEq,
{
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.set(path, value);
        }
    }
}
impl<K, V, S, P> FromIterator<(P, V)> for PathTree<K, V, S>
where
    S: Storage<Element = Node<K, V>>,
    P: IntoIterator<Item = K>,
    K: PartialEq,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
