//! ``ops`` implements every "derived" operation on
//! [`PersistentArray`](crate::parray::PersistentArray) whose correctness
//! does not depend on tree structure: traversals, predicates, folds, and
//! whole-array transforms. Each is built on top of the core primitives —
//! [`PersistentArray::for_each`], `to_vec`/`from_vec`, and `append`/`slice`
//! — rather than re-deriving tree-walking logic locally; only `get`, `set`,
//! `append`, `concat`, `init`, `from_vec`/`from_list` and `slice` carry
//! tree-structural detail, and those live in [`crate::parray`].
//!
//! Where an operation needs list-level machinery already specified for
//! [`crate::marray::MutableArray`] (`zip`, `zip_with`, `unzip`, `unique`,
//! `product`, `join`), it is reused here via `to_vec`/`MutableArray::from_vec`
//! round-trips rather than reimplemented. `sort` follows the "sort
//! `to_list`, then `from_list`" contract instead, round-tripping through
//! [`crate::list::List`] via [`PersistentArray::to_list`]/`from_list`.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Product;

use crate::list::List;
use crate::marray::MutableArray;
use crate::parray::PersistentArray;

impl<T> PersistentArray<T>
where
    T: Clone,
{
    /// Visits every element, ascending index order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.for_each_root_child(|child| {
            child.for_each_leaf(&mut |values| values.for_each(|v| f(v)));
        });
        self.tail_array().for_each(|v| f(v));
    }

    /// Concatenates `self` with itself `times` times. `times = 0` yields
    /// [`PersistentArray::empty`].
    pub fn cycle(&self, times: usize) -> PersistentArray<T> {
        let mut out = PersistentArray::empty();
        for _ in 0..times {
            out = out.append(self);
        }
        out
    }

    pub fn map<U, F>(&self, mut f: F) -> PersistentArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        let mut out = Vec::with_capacity(self.len());
        self.for_each(|v| out.push(f(v)));
        PersistentArray::from_vec(out)
    }

    /// Ascending-order left fold.
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut acc = Some(init);
        self.for_each(|v| {
            let a = acc.take().expect("accumulator always present between calls");
            acc = Some(f(a, v));
        });
        acc.expect("accumulator always present at completion")
    }

    /// Descending-order right fold.
    pub fn reduce_right<A, F>(&self, init: A, f: F) -> A
    where
        F: Fn(&T, A) -> A,
    {
        self.to_vec().iter().rev().fold(init, |acc, v| f(v, acc))
    }

    pub fn flat_map<U, F>(&self, mut f: F) -> PersistentArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> PersistentArray<U>,
    {
        let mut out = Vec::new();
        self.for_each(|v| out.extend(f(v).to_vec()));
        PersistentArray::from_vec(out)
    }

    pub fn filter<F>(&self, mut pred: F) -> PersistentArray<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut out = Vec::new();
        self.for_each(|v| {
            if pred(v) {
                out.push(v.clone());
            }
        });
        PersistentArray::from_vec(out)
    }

    pub fn every<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut ok = true;
        self.for_each(|v| ok = ok && pred(v));
        ok
    }

    pub fn some<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut found = false;
        self.for_each(|v| found = found || pred(v));
        found
    }

    pub fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut n = 0;
        self.for_each(|v| {
            if pred(v) {
                n += 1;
            }
        });
        n
    }

    pub fn find<F>(&self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut found = None;
        self.for_each(|v| {
            if found.is_none() && pred(v) {
                found = Some(v.clone());
            }
        });
        found
    }

    pub fn find_index<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut idx = 0usize;
        let mut result = None;
        self.for_each(|v| {
            if result.is_none() && pred(v) {
                result = Some(idx);
            }
            idx += 1;
        });
        result
    }

    pub fn reverse(&self) -> PersistentArray<T> {
        let mut v = self.to_vec();
        v.reverse();
        PersistentArray::from_vec(v)
    }

    /// New array holding `self` sorted by `cmp`. Per the "sort `to_list`,
    /// then `from_list`" contract: flattens to `list::List` via
    /// [`PersistentArray::to_list`], sorts with
    /// [`MutableArray::sort`]'s in-place Lomuto quicksort, then rebuilds
    /// via [`PersistentArray::from_list`].
    pub fn sort<F>(&self, cmp: F) -> PersistentArray<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut arr = MutableArray::from_vec(self.to_list().to_vec());
        arr.sort(cmp);
        let sorted = List::from_vec(&arr.into_vec());
        PersistentArray::from_list(&sorted)
    }

    /// `rotate(n, a) = append(slice(n mod length, length, a), slice(0, n
    /// mod length, a))`. No-op on an empty array.
    pub fn rotate(&self, n: isize) -> PersistentArray<T> {
        let len = self.len() as isize;
        if len == 0 {
            return PersistentArray::empty();
        }
        let k = ((n % len) + len) % len;
        self.slice(k, len).append(&self.slice(0, k))
    }

    pub fn zip<U>(&self, other: &PersistentArray<U>) -> PersistentArray<(T, U)>
    where
        U: Clone,
    {
        let a = MutableArray::from_vec(self.to_vec());
        let b = MutableArray::from_vec(other.to_vec());
        PersistentArray::from_vec(a.zip(&b).into_vec())
    }

    pub fn zip_with<U, R, F>(&self, other: &PersistentArray<U>, mut f: F) -> PersistentArray<R>
    where
        U: Clone,
        R: Clone,
        F: FnMut(&T, &U) -> R,
    {
        let a = MutableArray::from_vec(self.to_vec());
        let b = MutableArray::from_vec(other.to_vec());
        PersistentArray::from_vec(a.zip_with(&b, |x, y| f(x, y)).into_vec())
    }

    /// Joins every element's [`fmt::Display`] rendering with `sep`. Reuses
    /// [`MutableArray::join`] against a flattened copy.
    pub fn join(&self, sep: &str) -> String
    where
        T: fmt::Display,
    {
        MutableArray::from_vec(self.to_vec()).join(sep)
    }

    /// Product of every element, via [`std::iter::Product`]. Reuses
    /// [`MutableArray::product`] against a flattened copy.
    pub fn product(&self) -> T
    where
        T: Product<T>,
    {
        MutableArray::from_vec(self.to_vec()).product()
    }
}

impl<T> PersistentArray<T>
where
    T: Clone + PartialEq,
{
    pub fn contains(&self, v: &T) -> bool {
        let mut found = false;
        self.for_each(|x| {
            if x == v {
                found = true;
            }
        });
        found
    }

    /// First occurrence of each distinct value, in ascending index order.
    pub fn unique(&self) -> PersistentArray<T> {
        let arr = MutableArray::from_vec(self.to_vec());
        PersistentArray::from_vec(arr.unique().into_vec())
    }
}

impl<A, B> PersistentArray<(A, B)>
where
    A: Clone,
    B: Clone,
{
    /// Splits an array of pairs into a pair of arrays. Reuses
    /// [`MutableArray::unzip`] against a flattened copy.
    pub fn unzip(&self) -> (PersistentArray<A>, PersistentArray<B>) {
        let (a, b) = MutableArray::from_vec(self.to_vec()).unzip();
        (PersistentArray::from_vec(a.into_vec()), PersistentArray::from_vec(b.into_vec()))
    }
}

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;
