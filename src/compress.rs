use std::iter::FusedIterator;

use crate::{truthy::Truthy, zip::Zip};

/// Keeps the elements of `data` whose aligned selector is truthy.
#[derive(Clone, Debug)]
pub struct Compress<D, S> {
    pairs: Zip<D, S>,
}

/// Yields `data[i]` for every `i` where `selectors[i]` is truthy.
///
/// Stops at the shorter of the two inputs, like [`zip`](crate::zip).
pub fn compress<D, S>(data: D, selectors: S) -> Compress<D::IntoIter, S::IntoIter>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Truthy,
{
    Compress::new(data.into_iter(), selectors.into_iter())
}

impl<D, S> Compress<D, S> {
    pub(crate) fn new(data: D, selectors: S) -> Self {
        Self {
            pairs: Zip::new(data, selectors),
        }
    }
}

impl<D, S> Iterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Truthy,
{
    type Item = D::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for (elem, selector) in &mut self.pairs {
            if selector.is_truthy() {
                return Some(elem);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pairs.size_hint().1)
    }
}

impl<D, S> FusedIterator for Compress<D, S>
where
    D: FusedIterator,
    S: FusedIterator,
    S::Item: Truthy,
{
}
