use std::{iter::FusedIterator, ops::AddAssign};

use num_traits::{One, Zero};

/// Infinite arithmetic progression `start, start + step, start + 2 * step, ...`.
#[derive(Clone, Debug)]
pub struct Count<T> {
    current: T,
    step: T,
    started: bool,
}

/// Counts from `start` by `step` forever.
///
/// Never terminates: bound it with [`zip`](crate::zip), `take` or similar.
/// The step is added when the *next* value is requested, so reaching the
/// largest value of `T` does not overflow until one more value is pulled.
pub fn count<T>(start: T, step: T) -> Count<T>
where
    T: Clone + AddAssign,
{
    Count {
        current: start,
        step,
        started: false,
    }
}

/// `count(0, 1)`.
impl<T> Default for Count<T>
where
    T: Clone + AddAssign + Zero + One,
{
    fn default() -> Self {
        count(T::zero(), T::one())
    }
}

impl<T> Iterator for Count<T>
where
    T: Clone + AddAssign,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.current += self.step.clone();
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone + AddAssign> FusedIterator for Count<T> {}
