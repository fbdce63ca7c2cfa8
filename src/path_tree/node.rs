/// A node of a path tree.
///
/// Created by the path tree internally and only publicly exposed so that path tree storages' generic arguments could be specified. Use [`NodeRef`] and [`NodeRefMut`] to inspect and modify nodes.
///
/// [`NodeRef`]: struct.NodeRef.html " "
/// [`NodeRefMut`]: struct.NodeRefMut.html " "
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<K, V> {
    /// `None` only for the root node.
    pub(super) key: Option<K>,
    pub(super) value: Option<V>,
    pub(super) depth: isize,
    pub(super) parent: Option<usize>,
    pub(super) prev_sibling: Option<usize>,
    pub(super) next_sibling: Option<usize>,
    pub(super) first_child: Option<usize>,
    pub(super) last_child: Option<usize>,
}

impl<K, V> Node<K, V> {
    /// Creates a root node, which has no key and sits one level above the top-level keys.
    #[inline(always)]
    pub(super) const fn root() -> Self {
        Self {
            key: None,
            value: None,
            depth: -1,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
        }
    }
    /// Creates a structural node without a value, to be appended after `prev_sibling` in the child list of `parent`.
    #[inline(always)]
    pub(super) const fn child(key: K, depth: isize, parent: usize, prev_sibling: Option<usize>) -> Self {
        Self {
            key: Some(key),
            value: None,
            depth,
            parent: Some(parent),
            prev_sibling,
            next_sibling: None,
            first_child: None,
            last_child: None,
        }
    }
}
