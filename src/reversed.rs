use std::iter::FusedIterator;

/// Yields the elements of a double-ended sequence from last to first.
///
/// Nothing is buffered: every call to `next` pulls from the back of the
/// source.
#[derive(Clone, Debug)]
pub struct Reversed<I> {
    iter: I,
}

/// Walks `seq` back to front.
///
/// Passing `&v` yields shared references, `&mut v` yields mutable ones.
/// Forward-only sources do not implement [`DoubleEndedIterator`] and are
/// rejected at compile time.
pub fn reversed<I>(seq: I) -> Reversed<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
{
    Reversed::new(seq.into_iter())
}

impl<I> Reversed<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: DoubleEndedIterator> Iterator for Reversed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Reversed<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<I: DoubleEndedIterator + ExactSizeIterator> ExactSizeIterator for Reversed<I> {}

impl<I: DoubleEndedIterator + FusedIterator> FusedIterator for Reversed<I> {}
