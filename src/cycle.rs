use tracing::warn;

use crate::error::{Error, Result};

/// Replays a sequence forever.
#[derive(Clone, Debug)]
pub struct Cycle<I> {
    orig: I,
    iter: I,
    warned: bool,
}

/// Repeats the elements of `seq` indefinitely.
///
/// The caller must not pass an empty sequence. An empty source has nothing
/// to repeat: the adaptor then yields nothing and logs a warning, instead of
/// spinning forever. Use [`try_cycle`] to reject empty sources up front.
pub fn cycle<I>(seq: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    let iter = seq.into_iter();
    let mut cycle = Cycle::new(iter);
    if cycle.orig.size_hint().1 == Some(0) {
        warn!("cycle constructed over an empty sequence");
        cycle.warned = true;
    }
    cycle
}

/// Like [`cycle`], but fails with [`Error::EmptySource`] when `seq` has no
/// elements.
///
/// Emptiness is checked by pulling once from a clone of the source, so any
/// side effects of producing the first element happen an extra time.
pub fn try_cycle<I>(seq: I) -> Result<Cycle<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    let iter = seq.into_iter();
    if iter.clone().next().is_none() {
        return Err(Error::EmptySource);
    }
    Ok(Cycle::new(iter))
}

impl<I: Clone> Cycle<I> {
    fn new(iter: I) -> Self {
        Self {
            orig: iter.clone(),
            iter,
            warned: false,
        }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            None => {
                self.iter = self.orig.clone();
                let elem = self.iter.next();
                if elem.is_none() && !self.warned {
                    warn!("cycle over an empty sequence yields nothing");
                    self.warned = true;
                }
                elem
            }
            elem => elem,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.orig.size_hint() {
            (0, Some(0)) => (0, Some(0)),
            (0, _) => (0, None),
            _ => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{cycle, try_cycle};
    use crate::error::Error;

    #[test]
    fn cycle_wraps_around() {
        let v = vec![1, 2, 3];
        assert_eq!(
            cycle(&v).take(7).copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 1, 2, 3, 1]
        );
    }

    #[test]
    fn cycle_single_element() {
        assert_eq!(cycle(Some('z')).take(3).collect::<String>(), "zzz");
    }

    #[test]
    fn cycle_empty_yields_nothing() {
        let v: Vec<i32> = Vec::new();
        let mut it = cycle(&v);
        assert!(it.warned);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn cycle_warns_once_when_emptiness_is_found_late() {
        let mut it = cycle((0..3).skip_while(|_| true));
        assert!(!it.warned);
        assert_eq!(it.next(), None);
        assert!(it.warned);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn try_cycle_rejects_empty() {
        let v: Vec<i32> = Vec::new();
        assert_eq!(try_cycle(&v).err(), Some(Error::EmptySource));
        let v = vec![4];
        let mut it = try_cycle(&v).expect("non-empty source");
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.next(), Some(&4));
    }
}
