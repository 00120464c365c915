use std::{cmp, iter::FusedIterator};

/// Walks two sequences in lockstep, stopping at the shorter one.
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Yields `(a, b)` pairs until either input runs out.
///
/// Truncating at the shorter input is deliberate. When `a` is the longer
/// side, one extra element of `a` is pulled (and dropped) before the end is
/// detected.
pub fn zip<A, B>(a: A, b: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip::new(a.into_iter(), b.into_iter())
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.a.next()?;
        let b = self.b.next()?;
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.a.size_hint();
        let (b_lo, b_hi) = self.b.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(cmp::min(a, b)),
            (Some(a), None) => Some(a),
            (None, hi) => hi,
        };
        (cmp::min(a_lo, b_lo), hi)
    }
}

impl<A: ExactSizeIterator, B: ExactSizeIterator> ExactSizeIterator for Zip<A, B> {}

impl<A: FusedIterator, B: FusedIterator> FusedIterator for Zip<A, B> {}

#[cfg(test)]
mod tests {
    use super::zip;
    use crate::count::count;

    #[test]
    fn zip_with_strings() {
        let example = vec![2, 4, 6, 8, 10, 12];
        let example2 = vec!["Man", "Woman", "Person", "Camera", "TV"];
        let pairs = zip(&example, &example2)
            .map(|(a, b)| format!("{}, {}", a, b))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec!["2, Man", "4, Woman", "6, Person", "8, Camera", "10, TV"]
        );
    }

    #[test]
    fn zip_truncates_either_side() {
        assert_eq!(zip(0..3, 0..10).count(), 3);
        assert_eq!(zip(0..10, 0..3).count(), 3);
        assert_eq!(zip(0..0, 0..3).next(), None);
    }

    #[test]
    fn zip_bounds_infinite_count() {
        let names = ["x", "y"];
        assert_eq!(
            zip(count(100, 1), &names).collect::<Vec<_>>(),
            vec![(100, &"x"), (101, &"y")]
        );
        assert_eq!(zip(count(0, 1), &names).size_hint(), (2, Some(2)));
    }

    #[test]
    fn zip_mutable() {
        let mut left = vec![1, 2, 3];
        let mut right = vec![10, 20];
        for (l, r) in zip(&mut left, &mut right) {
            std::mem::swap(l, r);
        }
        assert_eq!(left, vec![10, 20, 3]);
        assert_eq!(right, vec![1, 2]);
    }
}
