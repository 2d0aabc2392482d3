use std::iter::Rev;
use std::slice::Iter;

/// Iterates over the slots of a `Stack` from the top (index 0) to the bottom.
///
/// Holes are yielded as `None`, so the n-th item always describes index n.
pub struct Slots<'s, E> {
    inner: Rev<Iter<'s, Option<E>>>,
}

impl<'s, E> Slots<'s, E> {
    pub(crate) fn new(slots: &'s [Option<E>]) -> Slots<'s, E> {
        Slots {
            inner: slots.iter().rev(),
        }
    }
}

impl<'s, E> Iterator for Slots<'s, E> {
    type Item = Option<&'s E>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'s, E> DoubleEndedIterator for Slots<'s, E> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Option::as_ref)
    }
}

impl<'s, E> ExactSizeIterator for Slots<'s, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
