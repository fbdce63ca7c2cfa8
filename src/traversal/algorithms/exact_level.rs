use core::{
    fmt::{self, Formatter, Debug},
    marker::PhantomData,
};
use super::Phase;
use crate::traversal::{Traversable, Visitor, VisitorDirection, CursorResult};

/// A visitor which passes the descendants of the starting node which are exactly `level` levels below its children to a callback, left to right. A `level` of zero visits the children of the starting node themselves.
///
/// Nodes above the target level are never passed to the callback, but are walked through to reach the ones below them; nodes below the target level are not explored at all.
///
/// Produces `false` if the callback stopped the traversal, `true` otherwise.
///
/// # Panics
/// Visiting panics if the traversable reports a node below the starting one as having no parent, which indicates a broken traversable implementation.
pub struct ExactLevel<T, F> {
    target: usize,
    level: usize,
    phase: Phase,
    f: F,
    _phantom: PhantomData<fn(&T)>,
}
impl<T, F> ExactLevel<T, F>
where
    T: Traversable,
    F: FnMut(T::Cursor) -> bool,
{
    /// Creates an exact-level visitor which will call `f` on every node at the given level.
    #[inline]
    pub fn new(level: usize, f: F) -> Self {
        Self {
            // Internally the starting node's children are at level 1
            target: level.saturating_add(1),
            level: 0,
            phase: Phase::Start,
            f,
            _phantom: PhantomData,
        }
    }
    fn arrive(&mut self, cursor: T::Cursor) -> VisitorDirection<T::Cursor, bool> {
        if self.level < self.target {
            self.phase = Phase::Descending;
            VisitorDirection::Child(0)
        } else if (self.f)(cursor) {
            self.phase = Phase::Sideways;
            VisitorDirection::NextSibling
        } else {
            VisitorDirection::Stop(false)
        }
    }
    #[inline]
    fn sideways(&mut self) -> VisitorDirection<T::Cursor, bool> {
        self.phase = Phase::Sideways;
        VisitorDirection::NextSibling
    }
}
impl<T, F> Visitor for ExactLevel<T, F>
where
    T: Traversable,
    F: FnMut(T::Cursor) -> bool,
{
    type Target = T;
    type Output = bool;

    fn visit(&mut self, _traversable: &T, cursor: CursorResult<T::Cursor>) -> VisitorDirection<T::Cursor, bool> {
        match (self.phase, cursor) {
            (Phase::Start, _) => {
                self.phase = Phase::Descending;
                VisitorDirection::Child(0)
            }
            (Phase::Descending, Ok(child)) => {
                self.level += 1;
                self.arrive(child)
            }
            (Phase::Descending, Err(..)) => {
                if self.level == 0 {
                    VisitorDirection::Stop(true)
                } else {
                    // Too shallow to reach the target level from here
                    self.sideways()
                }
            }
            (Phase::Sideways, Ok(sibling)) => self.arrive(sibling),
            (Phase::Sideways, Err(..)) => {
                self.phase = Phase::Ascending;
                VisitorDirection::Parent
            }
            (Phase::Ascending, Ok(..)) => {
                self.level -= 1;
                if self.level == 0 {
                    VisitorDirection::Stop(true)
                } else {
                    self.sideways()
                }
            }
            (Phase::Ascending, Err(..)) => panic!("a descendant of the starting node has no parent"),
        }
    }
}
impl<T, F> Debug for ExactLevel<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExactLevel")
            .field("target", &self.target)
            .field("level", &self.level)
            .field("phase", &self.phase)
            .finish()
    }
}
