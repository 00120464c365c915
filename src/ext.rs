use crate::{
    compress::Compress, dropwhile::DropWhile, enumerate::Enumerate, filter::FilterFalse,
    reversed::Reversed, starmap::Apply, starmap::StarMap, takewhile::TakeWhile, truthy::Truthy,
};

/// Method forms of the adaptors, for chaining.
///
/// Adaptors that already exist on [`Iterator`] under the same name
/// (`enumerate`, `zip`, `filter`, `cycle`) are left out to avoid ambiguous
/// method calls; use the free functions for those.
pub trait SequenceExt: Iterator + Sized {
    fn reversed(self) -> Reversed<Self>
    where
        Self: DoubleEndedIterator,
    {
        Reversed::new(self)
    }

    /// Like [`Iterator::enumerate`], with the index starting at `start`.
    fn enumerate_from(self, start: usize) -> Enumerate<Self> {
        Enumerate::new(self, start)
    }

    fn compress<S>(self, selectors: S) -> Compress<Self, S::IntoIter>
    where
        S: IntoIterator,
        S::Item: Truthy,
    {
        Compress::new(self, selectors.into_iter())
    }

    fn filterfalse<P>(self, predicate: P) -> FilterFalse<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        FilterFalse::new(self, predicate)
    }

    fn dropwhile<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    fn takewhile<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    fn starmap<F>(self, function: F) -> StarMap<Self, F>
    where
        F: Apply<Self::Item>,
    {
        StarMap::new(self, function)
    }
}

impl<I: Iterator> SequenceExt for I {}
