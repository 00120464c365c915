use std::iter::{self, FusedIterator};

use itertools::{structs::RepeatN, Either};

/// Yields the same borrowed value a fixed or unbounded number of times.
#[derive(Clone, Debug)]
pub struct Repeat<'a, T> {
    inner: Either<RepeatN<&'a T>, iter::Repeat<&'a T>>,
}

/// Yields `value` exactly `times` times, or forever when `times` is `None`.
///
/// Every item is the same reference; `value` is borrowed for as long as the
/// adaptor lives and is never copied.
///
/// ```
/// use lazy_itertools::repeat;
///
/// assert_eq!(repeat(&"x", 3).collect::<Vec<_>>(), vec![&"x"; 3]);
/// assert_eq!(repeat(&7, None).take(2).count(), 2);
/// ```
pub fn repeat<'a, T>(value: &'a T, times: impl Into<Option<usize>>) -> Repeat<'a, T> {
    let inner = match times.into() {
        Some(n) => Either::Left(itertools::repeat_n(value, n)),
        None => Either::Right(iter::repeat(value)),
    };
    Repeat { inner }
}

impl<'a, T> Iterator for Repeat<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> FusedIterator for Repeat<'a, T> {}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::repeat;

    #[test]
    fn repeat_counted() {
        let x = "x".to_string();
        assert_eq!(repeat(&x, 3).collect::<Vec<_>>(), vec!["x", "x", "x"]);
        assert_eq!(repeat(&x, 0).next(), None);
        assert_eq!(repeat(&x, 4).size_hint(), (4, Some(4)));
    }

    #[test]
    fn repeat_unbounded() {
        let x = "x";
        let mut it = repeat(&x, None);
        assert_eq!(it.by_ref().take(1000).filter(|s| **s == "x").count(), 1000);
        assert_eq!(it.next(), Some(&"x"));
        assert_eq!(it.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn repeat_yields_same_reference() {
        let value = vec![1, 2, 3];
        assert!(repeat(&value, 5).all(|v| ptr::eq(v, &value)));
    }
}
