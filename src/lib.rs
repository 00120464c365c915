//! Lazy sequence adaptors in the style of a scripting language's
//! `itertools` module.
//!
//! Every adaptor is an [`Iterator`] that pulls from its source one element
//! at a time and never materializes an intermediate collection. Adaptors
//! borrow or own their source depending on what is passed in: `&v` yields
//! shared references, `&mut v` mutable ones and `v` owned elements.
//!
//! ```
//! use lazy_itertools::{enumerate, reversed, zip};
//!
//! let example = vec![2, 4, 6, 8, 10, 12];
//! let names = vec!["Man", "Woman", "Person"];
//!
//! assert_eq!(reversed(&example).next(), Some(&12));
//! assert_eq!(enumerate(&example, 10).last(), Some((15, &12)));
//! assert_eq!(zip(reversed(&example), &names).count(), 3);
//! ```
//!
//! `count`, `cycle` and unbounded `repeat` never end on their own; bound
//! them with [`zip`], [`takewhile`] or `take`.
//!
//! Produced sequences are single-pass and not synchronized. Independent
//! adaptors over the same shared source may run on different threads.

mod compress;
mod count;
mod cycle;
mod dropwhile;
mod enumerate;
mod error;
mod ext;
mod filter;
mod repeat;
mod reversed;
mod starmap;
mod takewhile;
mod truthy;
mod zip;

pub use crate::{
    compress::{compress, Compress},
    count::{count, Count},
    cycle::{cycle, try_cycle, Cycle},
    dropwhile::{dropwhile, DropWhile},
    enumerate::{enumerate, Enumerate},
    error::{Error, Result},
    ext::SequenceExt,
    filter::{filter, filterfalse, Filter, FilterFalse},
    repeat::{repeat, Repeat},
    reversed::{reversed, Reversed},
    starmap::{starmap, Apply, StarMap},
    takewhile::{takewhile, TakeWhile},
    truthy::Truthy,
    zip::{zip, Zip},
};
