use std::{fmt, iter::FusedIterator};

/// Skips a leading run of elements, then yields the rest unconditionally.
#[derive(Clone)]
pub struct DropWhile<I, P> {
    iter: I,
    predicate: P,
    dropping: bool,
}

/// Drops elements of `seq` while `predicate` holds.
///
/// The first element failing the predicate is yielded, as is everything
/// after it. The predicate is not called again after that first failure.
pub fn dropwhile<I, P>(predicate: P, seq: I) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    DropWhile::new(seq.into_iter(), predicate)
}

impl<I, P> DropWhile<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            dropping: true,
        }
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.dropping {
            loop {
                let elem = self.iter.next()?;
                if !(self.predicate)(&elem) {
                    self.dropping = false;
                    return Some(elem);
                }
            }
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        if self.dropping {
            (0, hi)
        } else {
            (lo, hi)
        }
    }
}

impl<I, P> FusedIterator for DropWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: fmt::Debug, P> fmt::Debug for DropWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DropWhile")
            .field("iter", &self.iter)
            .field("dropping", &self.dropping)
            .finish()
    }
}
