//! A persistent, structurally-shared indexed sequence.
//!
//! [`PersistentArray`] is a Relaxed Radix Balanced (RRB) tree variant: a
//! radix tree of `B`-ary nodes (`B` = 32) plus a trailing mutable "tail"
//! buffer that absorbs sequential appends without touching the tree until
//! it fills. Every mutating operation — [`PersistentArray::set`],
//! [`PersistentArray::append`], [`PersistentArray::slice`], … — returns a
//! new value that shares every untouched subtree with its predecessor via
//! `Rc`; nothing already published is ever mutated in place.
//!
//! ```
//! use parray::PersistentArray;
//!
//! let a = PersistentArray::from_fn(5, |i| i + 3).unwrap();
//! assert_eq!(a.to_vec(), vec![3, 4, 5, 6, 7]);
//!
//! let b = a.set(2, 99).unwrap();
//! assert_eq!(*b.get(2).unwrap(), 99);
//! assert_eq!(*a.get(2).unwrap(), 5); // `a` is untouched.
//! ```
//!
//! The tree itself ([`crate::node`]) is built on a crate-private flat
//! buffer, [`crate::marray::MutableArray`], which is never exposed outside
//! the crate: no accessor on [`PersistentArray`] hands out a handle a
//! caller could use to mutate published storage. Bulk construction
//! ([`PersistentArray::from_vec`], [`PersistentArray::from_fn`], large
//! [`PersistentArray::append`]s) routes through [`crate::builder::Builder`],
//! a short-lived scratch structure confined to the call that builds it.
//!
//! This is a single-threaded, `Rc`-based structure by construction —
//! `PersistentArray<T>` is neither `Send` nor `Sync`, matching the
//! invariant that a published node's storage is never touched through an
//! alias. See `DESIGN.md` in the repository root for the grounding behind
//! each module and the decisions recorded against open questions in the
//! specification this crate implements.

mod builder;
mod error;
mod list;
mod marray;
mod node;
mod ops;
mod parray;

pub use crate::error::{Error, Result};
pub use crate::parray::{PersistentArray, Stats};
