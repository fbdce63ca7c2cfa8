use core::mem;
use arrayvec::ArrayVec;
use crate::storage::Storage;
use super::ListStorage;

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[allow(unused_qualifications)]
pub type SparseVec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;
/// A `VecDeque` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[allow(unused_qualifications)]
pub type SparseVecDeque<T> = SparseStorage<T, alloc::collections::VecDeque<Slot<T>>>;
/// An `ArrayVec` wrapped in [`SparseStorage`]. The array type `A` must have `Slot<T>` as its item type, e.g. `[Slot<T>; 32]`.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type SparseArrayVec<T, A> = SparseStorage<T, ArrayVec<A>>;

/// A wrapper around a list-like storage type which makes removing elements cheap.
///
/// Sparse storage with element type `E` wraps a normal storage which stores `Slot<E>`, which stores either an element or a "hole". Removing an element replaces it with a hole instead of shifting the elements after it, so the keys of all other elements stay valid. Holes are linked into a free list, and new elements are placed into the oldest hole before the underlying storage is grown.
///
/// Fetching a hole yields `None`, exactly like fetching an index past the end of the storage.
#[derive(Clone, Debug)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    num_holes: usize,
    /// First hole, last hole
    hole_list: Option<(usize, usize)>,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Consumes the sparse storage and returns its inner storage.
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.storage
    }
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.num_holes
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes == 0
    }
    /// Returns the number of slots in the underlying storage, counting both elements and holes.
    #[inline(always)]
    pub fn num_slots(&self) -> usize {
        self.storage.len()
    }

    /// Sets the specified element to a hole and appends it to the hole list, returning the value or `None` if it was already a hole or out of bounds.
    fn punch_hole(&mut self, index: usize) -> Option<E> {
        let element = self.storage.get_mut(index)?.punch_hole()?;
        if let Some((_, last)) = &mut self.hole_list {
            let old_last = mem::replace(last, index);
            self.storage
                .get_mut(old_last)
                .expect(HOLE_LIST_MSG)
                .set_hole_link(Some(index));
        } else {
            self.hole_list = Some((index, index));
        }
        self.num_holes += 1;
        Some(element)
    }
}
static HOLE_LIST_MSG: &str = "\
the hole list of the sparse storage points outside of the underlying storage";
impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Element = E;

    #[inline]
    fn add(&mut self, element: Self::Element) -> usize {
        if let Some((first, last)) = self.hole_list {
            let hole = self.storage.get_mut(first).expect(HOLE_LIST_MSG);
            let next_hole = hole.hole_link();
            *hole = Slot::new_element(element);
            self.num_holes -= 1;
            self.hole_list = next_hole.map(|next| (next, last));
            first
        } else {
            self.storage.push(Slot::new_element(element));
            self.storage.len() - 1
        }
    }
    #[inline]
    #[track_caller]
    fn remove(&mut self, key: usize) -> Self::Element {
        self.punch_hole(key).unwrap_or_else(|| {
            panic!("no element at key {} in the sparse storage", key)
        })
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.num_holes
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            num_holes: 0,
            hole_list: None,
        }
    }
    #[inline]
    fn get(&self, key: usize) -> Option<&Self::Element> {
        self.storage.get(key).and_then(Slot::element)
    }
    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut Self::Element> {
        self.storage.get_mut(key).and_then(Slot::element_mut)
    }
    #[inline]
    fn clear(&mut self) {
        self.storage.clear();
        self.num_holes = 0;
        self.hole_list = None;
    }

    #[inline(always)]
    fn new() -> Self {
        Self {
            storage: S::new(),
            num_holes: 0,
            hole_list: None,
        }
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline]
    fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional.saturating_sub(self.num_holes))
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}
impl<E, S> Default for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    #[inline(always)]
    fn default() -> Self {
        <Self as Storage>::new()
    }
}

/// A slot inside a sparse storage.
///
/// This is an opaque structure, only used for the purpose of a `SparseStorage` being validly declarable, because leaking private types through generic argument defaults is impossible, and it'd be impossible to declare the type of the backing storage if it was explicitly different.
#[derive(Clone, Debug, Hash)]
pub struct Slot<T>(SlotInner<T>);
impl<T> Slot<T> {
    #[inline(always)]
    const fn new_element(val: T) -> Self {
        Self(SlotInner::Element(val))
    }
    #[inline]
    fn element(&self) -> Option<&T> {
        match &self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline]
    fn element_mut(&mut self) -> Option<&mut T> {
        match &mut self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline]
    #[track_caller]
    fn hole_link(&self) -> Option<usize> {
        match &self.0 {
            SlotInner::Hole(x) => *x,
            SlotInner::Element(..) => unreachable!("the hole list points to an element"),
        }
    }
    #[inline]
    #[track_caller]
    fn set_hole_link(&mut self, val: Option<usize>) {
        match &mut self.0 {
            SlotInner::Hole(x) => *x = val,
            SlotInner::Element(..) => unreachable!("the hole list points to an element"),
        }
    }
    /// Replaces the element with a hole which does not link anywhere, returning the element or `None` if the slot already was a hole.
    #[inline]
    fn punch_hole(&mut self) -> Option<T> {
        match mem::replace(&mut self.0, SlotInner::Hole(None)) {
            SlotInner::Element(val) => Some(val),
            hole @ SlotInner::Hole(..) => {
                self.0 = hole;
                None
            }
        }
    }
}

#[derive(Clone, Debug, Hash)]
enum SlotInner<T> {
    /// A value in the slot.
    Element(T),
    /// A hole, with an index to the next one.
    Hole(Option<usize>),
}
