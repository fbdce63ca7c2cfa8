#[cfg(feature = "alloc")]
mod alloc_impl;
mod arrayvec_impl;

mod sparse;
pub use sparse::{SparseStorage, Slot, SparseArrayVec};
#[cfg(feature = "alloc")]
pub use sparse::{SparseVec, SparseVecDeque};


/// Trait for list-like containers which can be the backing storage for trees when wrapped in a [`SparseStorage`].
///
/// The following rules have to be followed by the container:
/// - `new` and `with_capacity` ***must*** return empty collections, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - `push` appends to the end, `pop` removes from the end, and no other method changes the position of an element;
/// - if an element is added at a position, it must be retrieveable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub trait ListStorage: Sized {
    /// The type of values in the container.
    type Element;

    /// Creates an empty collection with the specified capacity.
    ///
    /// # Panics
    /// Collections with a fixed capacity should panic if the specified capacity exceeds their actual one.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element to the back of the collection.
    ///
    /// # Panics
    /// Collections with a fixed capacity panic if they are full.
    fn push(&mut self, element: Self::Element);
    /// Removes the last element from the collection and returns it, or `None` if it is empty.
    fn pop(&mut self) -> Option<Self::Element>;
    /// Returns the number of elements in the collection, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns a reference to the specified element in the collection, or `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index is out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element>;

    /// Creates a new empty collection. Dynamically-allocated collections created this way do not allocate memory.
    ///
    /// Collections with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the collection contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the collection can hold without requiring a memory allocation.
    ///
    /// For collections which have a fixed capacity, this is that capacity.
    fn capacity(&self) -> usize;
    /// Reserves capacity for at least `additional` more elements to be inserted in the given collection. Does nothing if capacity is already sufficient.
    ///
    /// For collections which have a fixed capacity, this should panic if the requested capacity cannot be satisfied.
    fn reserve(&mut self, additional: usize);
    /// Shrinks the capacity of the collection as much as possible.
    fn shrink_to_fit(&mut self);
    /// Shortens the collection, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than the collection's current length, this has no effect.
    fn truncate(&mut self, len: usize) {
        while self.len() > len {
            self.pop();
        }
    }
    /// Removes all elements from the collection.
    #[inline(always)]
    fn clear(&mut self) {
        self.truncate(0)
    }
}
