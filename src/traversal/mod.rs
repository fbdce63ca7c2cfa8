//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Visitor`], a *trait for types which describe algorithms with state*
//! - [`Traversable`], a *trait for types which describe tree-like structures* which can be traversed by `Visitor` algorithms
//! - Implementations of the traversal orders supported by the crate (see the [`algorithms`] module for more)
//! - Helper types: [`Step`], [`VisitorDirection`], [`CursorDirectionError`] and [`ChildCursors`]
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`Step`]: enum.Step.html " "
//! [`VisitorDirection`]: enum.VisitorDirection.html " "
//! [`CursorDirectionError`]: struct.CursorDirectionError.html " "
//! [`ChildCursors`]: struct.ChildCursors.html " "

pub mod algorithms;

use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug, Display},
};

/// Iterator-like structures which control a traversable tree's cursor and use it to read information from the tree.
pub trait Visitor {
    /// The target type which will be traversed by the visitor.
    type Target: Traversable;
    /// The final value produced by the visitor.
    type Output;
    /// Visit the provided node, returning further directions for traversal.
    ///
    /// If the previous direction could not be followed, `cursor` is an error holding the node the cursor stayed on.
    fn visit(
        &mut self,
        traversable: &Self::Target,
        cursor: CursorResult<<Self::Target as Traversable>::Cursor>,
    ) -> VisitorDirection<<Self::Target as Traversable>::Cursor, Self::Output>;
}

/// The direction in which a visitor wishes to go after visiting a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection<C, V> {
    /// Visit the parent of the node which has been visited.
    Parent,
    /// Visit the sibling of the node which has been visited.
    NextSibling,
    /// Visit the `n`-th child of the node which has been visited.
    Child(usize),
    /// Set the cursor to a specific value.
    SetTo(C),
    /// Stop the execution of the algorithm, producing a final value.
    Stop(V),
}

/// A single step of a visitor: either the cursor to visit next or the final result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step<C, V> {
    /// The visitor asked to move on, and this is where the cursor ended up.
    NextCursor(CursorResult<C>),
    /// The visitor stopped, producing a final value.
    End(V),
}

/// Data structures which can be traversed using `Visitor`s.
///
/// Every node has at most one parent and an ordered list of children; the order of the children is the order in which traversal algorithms visit them.
pub trait Traversable: Sized {
    /// The payload of a node.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Cursors are only valid until the traversable is mutated.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the root node.
    fn cursor_to_root(&self) -> Self::Cursor;
    /// Returns a reference to the payload of the node at the specified cursor, or `None` if the node has none.
    ///
    /// # Panics
    /// Implementations may panic if the cursor is invalid.
    fn value_of(&self, cursor: &Self::Cursor) -> Option<&'_ Self::Value>;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the first child of the node at the specified cursor, or `None` if it has no children.
    fn first_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the sibling which comes after the node at the specified cursor, or `None` if it's the last child of its parent.
    fn next_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;

    /// Returns an iterator over the cursors of the children of the node at the specified cursor, in order.
    #[inline]
    fn children_of(&self, cursor: &Self::Cursor) -> ChildCursors<'_, Self> {
        ChildCursors {
            traversable: self,
            next: self.first_child_of(cursor),
        }
    }
    /// Returns the number of children of the node at the specified cursor.
    #[inline]
    fn num_children_of(&self, cursor: &Self::Cursor) -> usize {
        self.children_of(cursor).count()
    }
    /// Returns a cursor to the *`n`*th child of the node at the specified cursor, or `None` if the child at that index does not exist.
    #[inline]
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor> {
        self.children_of(cursor).nth(child_num)
    }

    /// Advances the specified cursor according to the specified directions from the visitor.
    ///
    /// # Errors
    /// Fails if the node in that direction does not exist, or if the direction was `Stop`. The error holds the cursor as it was before the attempt.
    fn advance_cursor<V>(
        &self,
        cursor: Self::Cursor,
        direction: VisitorDirection<Self::Cursor, V>,
    ) -> CursorResult<Self::Cursor> {
        let next = match direction {
            VisitorDirection::Parent => self.parent_of(&cursor),
            VisitorDirection::NextSibling => self.next_sibling_of(&cursor),
            VisitorDirection::Child(num) => self.nth_child_of(&cursor, num),
            VisitorDirection::SetTo(new_cursor) => Some(new_cursor),
            VisitorDirection::Stop(..) => None,
        };
        next.ok_or(CursorDirectionError {
            previous_state: cursor,
        })
    }
    /// Performs one step of the visitor from the specified cursor, returning either the cursor for the next step or the final result of the visitor if it ended.
    ///
    /// A cursor which failed to move is recovered to its previous state before following the next direction.
    fn step<V>(&self, visitor: &mut V, cursor: CursorResult<Self::Cursor>) -> Step<Self::Cursor, V::Output>
    where
        V: Visitor<Target = Self>,
    {
        match visitor.visit(self, cursor.clone()) {
            VisitorDirection::Stop(output) => Step::End(output),
            direction => {
                let cursor = cursor.unwrap_or_else(CursorDirectionError::recover);
                Step::NextCursor(self.advance_cursor(cursor, direction))
            }
        }
    }
    /// Traverses the traversable from the root node until the end, returning the final result of the visitor.
    #[inline(always)]
    fn traverse<V>(&self, visitor: V) -> V::Output
    where
        V: Visitor<Target = Self>,
    {
        self.traverse_from(self.cursor_to_root(), visitor)
    }
    /// Traverses the traversable from the specified starting point until the end, returning the final result of the visitor.
    fn traverse_from<V>(&self, starting_cursor: Self::Cursor, mut visitor: V) -> V::Output
    where
        V: Visitor<Target = Self>,
    {
        let mut cursor = Ok(starting_cursor);
        loop {
            match self.step(&mut visitor, cursor) {
                Step::NextCursor(next) => cursor = next,
                Step::End(output) => return output,
            }
        }
    }
}

/// The error type produced when a cursor cannot be moved in the direction requested by a visitor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CursorDirectionError<C> {
    /// The last valid state of the cursor, right before an incorrect movement was attempted.
    pub previous_state: C,
}
/// A result type for functions receiving or returning a cursor which has possibly been incorrectly driven.
pub type CursorResult<C> = Result<C, CursorDirectionError<C>>;
impl<C> CursorDirectionError<C> {
    /// Returns the previous state of the cursor.
    ///
    /// Primarily used as a convenience function for `unwrap_or_else` on `CursorResult`.
    #[inline(always)]
    pub fn recover(self) -> C {
        self.previous_state
    }
}
impl<C> Display for CursorDirectionError<C> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("cannot move cursor in the specified direction")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<C: Debug> std::error::Error for CursorDirectionError<C> {}

/// An iterator over the cursors of the children of a node, created by [`children_of`].
///
/// [`children_of`]: trait.Traversable.html#method.children_of " "
pub struct ChildCursors<'a, T: Traversable> {
    traversable: &'a T,
    next: Option<T::Cursor>,
}
impl<T: Traversable> Iterator for ChildCursors<'_, T> {
    type Item = T::Cursor;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.traversable.next_sibling_of(&current);
        Some(current)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_some() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}
impl<T: Traversable> FusedIterator for ChildCursors<'_, T> {}
impl<T: Traversable> Clone for ChildCursors<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            next: self.next.clone(),
        }
    }
}
impl<T: Traversable> Debug for ChildCursors<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildCursors")
            .field("next", &self.next)
            .finish()
    }
}
