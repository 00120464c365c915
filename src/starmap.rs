use std::{fmt, iter::FusedIterator};

/// A callable that accepts its positional arguments packed in a tuple.
///
/// Implemented for every `FnMut` of arity 0 to 8, both for owned argument
/// tuples and for borrowed ones (the fields are cloned into the call).
/// Closures passed through this trait need their parameter types written
/// out, since the compiler cannot infer them from a tuple.
pub trait Apply<Args> {
    type Output;

    fn apply(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_apply {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Apply<($($arg,)*)> for F
        where
            F: FnMut($($arg),*) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn apply(&mut self, ($($arg,)*): ($($arg,)*)) -> R {
                (*self)($($arg),*)
            }
        }

        impl<'a, F, R, $($arg),*> Apply<&'a ($($arg,)*)> for F
        where
            F: FnMut($($arg),*) -> R,
            $($arg: Clone,)*
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn apply(&mut self, ($($arg,)*): &'a ($($arg,)*)) -> R {
                (*self)($($arg.clone()),*)
            }
        }
    };
}

impl_apply!();
impl_apply!(A);
impl_apply!(A, B);
impl_apply!(A, B, C);
impl_apply!(A, B, C, D);
impl_apply!(A, B, C, D, E);
impl_apply!(A, B, C, D, E, G);
impl_apply!(A, B, C, D, E, G, H);
impl_apply!(A, B, C, D, E, G, H, J);

/// Applies a function to each argument tuple of a sequence.
#[derive(Clone)]
pub struct StarMap<I, F> {
    iter: I,
    function: F,
}

/// Calls `function` once per tuple of `arg_tuples`, unpacking the tuple into
/// positional arguments, and yields the results in order.
pub fn starmap<I, F>(function: F, arg_tuples: I) -> StarMap<I::IntoIter, F>
where
    I: IntoIterator,
    F: Apply<I::Item>,
{
    StarMap::new(arg_tuples.into_iter(), function)
}

impl<I, F> StarMap<I, F> {
    pub(crate) fn new(iter: I, function: F) -> Self {
        Self { iter, function }
    }
}

impl<I, F> Iterator for StarMap<I, F>
where
    I: Iterator,
    F: Apply<I::Item>,
{
    type Item = F::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let args = self.iter.next()?;
        Some(self.function.apply(args))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> ExactSizeIterator for StarMap<I, F>
where
    I: ExactSizeIterator,
    F: Apply<I::Item>,
{
}

impl<I, F> FusedIterator for StarMap<I, F>
where
    I: FusedIterator,
    F: Apply<I::Item>,
{
}

impl<I: fmt::Debug, F> fmt::Debug for StarMap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StarMap").field("iter", &self.iter).finish()
    }
}
