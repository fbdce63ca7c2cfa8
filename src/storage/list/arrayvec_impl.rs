use arrayvec::{ArrayVec, Array};
use super::ListStorage;

impl<A> ListStorage for ArrayVec<A>
where A: Array,
{
    type Element = A::Item;

    #[inline]
    #[track_caller]
    fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= A::CAPACITY,
            "specified capacity exceeds the underlying array's size",
        );
        Self::new()
    }
    #[inline(always)]
    fn push(&mut self, element: Self::Element) {
        self.push(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<Self::Element> {
        self.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.as_slice().get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        A::CAPACITY
    }
    #[inline]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > A::CAPACITY {
            unimplemented!("ArrayVec does not support allocating memory; if you need such functionality, use Vec instead")
        }
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
}
