use std::iter::FusedIterator;

/// Pairs each element with a running index.
#[derive(Clone, Debug)]
pub struct Enumerate<I> {
    iter: I,
    index: usize,
    started: bool,
}

/// Yields `(index, element)` pairs, the index starting at `start`.
///
/// The index is a `usize` and is advanced when the next element is pulled,
/// so `usize::MAX` itself can be yielded; enumerating past it overflows.
pub fn enumerate<I: IntoIterator>(seq: I, start: usize) -> Enumerate<I::IntoIter> {
    Enumerate::new(seq.into_iter(), start)
}

impl<I> Enumerate<I> {
    pub(crate) fn new(iter: I, start: usize) -> Self {
        Self {
            iter,
            index: start,
            started: false,
        }
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.iter.next()?;
        if self.started {
            self.index += 1;
        } else {
            self.started = true;
        }
        Some((self.index, elem))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {}

impl<I: FusedIterator> FusedIterator for Enumerate<I> {}
