//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the main trait for the backing storages for trees
//! - [`ListStorage`], a trait used for describing list-like collections which can back a [`SparseStorage`]
//! - [`SparseStorage`], a wrapper around `ListStorage`s which makes element removal cheap and keeps the indices of the remaining elements stable
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified; takes different values depending on feature flags
//!
//! [`Storage`]: trait.Storage.html " "
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`SparseStorage`]: struct.SparseStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod list;
pub use list::*;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// Elements are addressed by `usize` keys handed out by [`add`]. The following rules have to be followed by implementors, and trees rely on them for correctness:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - a key returned by `add` stays valid and keeps pointing to the same element until that element is removed, no matter how many other elements are added or removed in the meantime;
/// - if an element is added at a key, it must be retrieveable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
///
/// [`add`]: #tymethod.add " "
pub trait Storage: Sized {
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are full.
    fn add(&mut self, element: Self::Element) -> usize;
    /// Removes and returns the element identified by `key` within the storage.
    ///
    /// # Panics
    /// Required to panic if the specified key does not exist.
    fn remove(&mut self, key: usize) -> Self::Element;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    ///
    /// # Panics
    /// Storages with a fixed capacity should panic if the specified capacity exceeds their actual one.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get(&self, key: usize) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: usize) -> Option<&mut Self::Element>;
    /// Removes all elements from the storage. Keys handed out before this call are invalidated.
    fn clear(&mut self);

    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: usize) -> bool {
        self.get(key).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    ///
    /// Storages with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// For storages which have a fixed capacity, this is that capacity.
    fn capacity(&self) -> usize;
    /// Reserves capacity for at least `additional` more elements to be inserted in the given storage. Does nothing if capacity is already sufficient.
    ///
    /// For storages which have a fixed capacity, this should panic if the requested capacity cannot be satisfied.
    fn reserve(&mut self, additional: usize);
    /// Shrinks the capacity of the storage as much as possible.
    fn shrink_to_fit(&mut self);
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is chosen according to the following strategy:
/// - If the `alloc` feature flag is enabled, [`SparseVec`] is used
/// - Otherwise, a [*sparse*][`SparseStorage`] [`ArrayVec`] with room for 64 nodes is used
///
/// [`SparseVec`]: type.SparseVec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = SparseVec<T>;

#[cfg(not(feature = "alloc"))]
type _DefaultStorage<T> = SparseArrayVec<T, [Slot<T>; 64]>;
