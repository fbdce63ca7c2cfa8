use core::{
    fmt::{self, Formatter, Debug},
    marker::PhantomData,
};
use super::Phase;
use crate::traversal::{Traversable, Visitor, VisitorDirection, CursorResult};

/// A visitor which passes the descendants of the starting node to a callback in post-order: the children of every node are traversed left to right before the node itself, so the deepest nodes of a branch always come first.
///
/// If `max_depth` is `Some`, every node at that depth or deeper is skipped together with its whole subtree; its siblings and ancestors are still visited. A `max_depth` of zero thus visits nothing.
///
/// Produces `false` if the callback stopped the traversal, `true` otherwise.
///
/// # Panics
/// Visiting panics if the traversable reports a node below the starting one as having no parent, which indicates a broken traversable implementation.
///
/// # Example
/// ```rust
/// use pathtree::{PathTree, traversal::{Traversable, algorithms::PostOrder}};
///
/// let mut tree: PathTree<u8, u8> = PathTree::new();
/// tree.set([1, 2], 12);
/// tree.set([3], 3);
///
/// let mut values = Vec::new();
/// let completed = tree.traverse(PostOrder::<PathTree<u8, u8>, _>::new(None, |cursor| {
///     values.push(tree.value_of(&cursor).copied());
///     true
/// }));
/// assert!(completed);
/// assert_eq!(values, [Some(12), None, Some(3)]);
/// ```
pub struct PostOrder<T, F> {
    max_depth: Option<usize>,
    level: usize,
    phase: Phase,
    f: F,
    _phantom: PhantomData<fn(&T)>,
}
impl<T, F> PostOrder<T, F>
where
    T: Traversable,
    F: FnMut(T::Cursor) -> bool,
{
    /// Creates a post-order visitor which will call `f` on every visited node.
    #[inline]
    pub fn new(max_depth: Option<usize>, f: F) -> Self {
        Self {
            max_depth,
            level: 0,
            phase: Phase::Start,
            f,
            _phantom: PhantomData,
        }
    }
    /// Whether nodes at the given level, the starting node's children being at level 1, are to be visited.
    #[inline]
    fn within_bounds(&self, level: usize) -> bool {
        self.max_depth.map_or(true, |max| level <= max)
    }
    /// The cursor has just reached a node for the first time.
    fn arrive(&mut self, cursor: T::Cursor) -> VisitorDirection<T::Cursor, bool> {
        if self.within_bounds(self.level + 1) {
            self.phase = Phase::Descending;
            VisitorDirection::Child(0)
        } else {
            self.emit(cursor)
        }
    }
    /// Everything below the node is done, it's the node's turn.
    fn emit(&mut self, cursor: T::Cursor) -> VisitorDirection<T::Cursor, bool> {
        if (self.f)(cursor) {
            self.phase = Phase::Sideways;
            VisitorDirection::NextSibling
        } else {
            VisitorDirection::Stop(false)
        }
    }
}
impl<T, F> Visitor for PostOrder<T, F>
where
    T: Traversable,
    F: FnMut(T::Cursor) -> bool,
{
    type Target = T;
    type Output = bool;

    fn visit(&mut self, _traversable: &T, cursor: CursorResult<T::Cursor>) -> VisitorDirection<T::Cursor, bool> {
        match (self.phase, cursor) {
            (Phase::Start, _) => {
                if self.within_bounds(1) {
                    self.phase = Phase::Descending;
                    VisitorDirection::Child(0)
                } else {
                    VisitorDirection::Stop(true)
                }
            }
            (Phase::Descending, Ok(child)) => {
                self.level += 1;
                self.arrive(child)
            }
            (Phase::Descending, Err(leaf)) => {
                if self.level == 0 {
                    // The starting node has no children
                    VisitorDirection::Stop(true)
                } else {
                    self.emit(leaf.recover())
                }
            }
            (Phase::Sideways, Ok(sibling)) => self.arrive(sibling),
            (Phase::Sideways, Err(..)) => {
                self.phase = Phase::Ascending;
                VisitorDirection::Parent
            }
            (Phase::Ascending, Ok(parent)) => {
                self.level -= 1;
                if self.level == 0 {
                    VisitorDirection::Stop(true)
                } else {
                    self.emit(parent)
                }
            }
            (Phase::Ascending, Err(..)) => panic!("a descendant of the starting node has no parent"),
        }
    }
}
impl<T, F> Debug for PostOrder<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrder")
            .field("max_depth", &self.max_depth)
            .field("level", &self.level)
            .field("phase", &self.phase)
            .finish()
    }
}
