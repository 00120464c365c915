use std::{fmt, iter::FusedIterator};

/// Keeps the elements accepted by a predicate.
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

/// Keeps the elements rejected by a predicate.
#[derive(Clone)]
pub struct FilterFalse<I, P> {
    iter: I,
    predicate: P,
}

/// Yields the elements of `seq` for which `predicate` returns `true`.
///
/// The predicate runs exactly once per source element, in order.
pub fn filter<I, P>(predicate: P, seq: I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter::new(seq.into_iter(), predicate)
}

/// Yields the elements of `seq` for which `predicate` returns `false`.
pub fn filterfalse<I, P>(predicate: P, seq: I) -> FilterFalse<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    FilterFalse::new(seq.into_iter(), predicate)
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I, P> FilterFalse<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.iter.find(|elem| predicate(elem))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.iter.find(|elem| !predicate(elem))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I, P> FusedIterator for FilterFalse<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I: fmt::Debug, P> fmt::Debug for FilterFalse<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FilterFalse")
            .field("iter", &self.iter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{filter, filterfalse};

    #[test]
    fn filter_even() {
        let v = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(
            filter(|x: &&i32| **x % 2 == 0, &v).collect::<Vec<_>>(),
            vec![&2, &4, &6]
        );
        assert_eq!(
            filterfalse(|x: &&i32| **x % 2 == 0, &v).collect::<Vec<_>>(),
            vec![&1, &3, &5]
        );
    }

    #[test]
    fn predicate_called_once_per_element() {
        let calls = Cell::new(0);
        let kept = filter(
            |x: &u32| {
                calls.set(calls.get() + 1);
                *x > 2
            },
            0..6_u32,
        )
        .collect::<Vec<_>>();
        assert_eq!(kept, vec![3, 4, 5]);
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn filter_is_lazy() {
        let calls = Cell::new(0);
        let mut it = filter(
            |_: &u32| {
                calls.set(calls.get() + 1);
                true
            },
            0..,
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(it.next(), Some(0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn filter_nothing_matches() {
        assert_eq!(filter(|_: &i32| false, vec![1, 2, 3]).next(), None);
        assert_eq!(filterfalse(|_: &i32| true, vec![1, 2, 3]).next(), None);
    }

    #[test]
    #[should_panic(expected = "bad element")]
    fn predicate_panic_propagates() {
        let mut it = filterfalse(
            |x: &i32| {
                if *x == 2 {
                    panic!("bad element");
                }
                false
            },
            vec![1, 2, 3],
        );
        assert_eq!(it.next(), Some(1));
        it.next();
    }
}
