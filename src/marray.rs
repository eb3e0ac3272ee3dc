//! ``marray`` exports [MutableArray], a flat, length-prefixed, O(1)
//! indexed buffer.
//!
//! [MutableArray] is the substrate the radix tree in [`crate::parray`]
//! builds upon: every `Leaf` holds its values in one, and every `Internal`
//! holds its children in one. It carries no tree knowledge of its own —
//! indices here are never wrapped or bounds-checked beyond what is
//! documented, because the tree above it never issues an out-of-range
//! call.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Product;

use crate::error::{Error, Result};

/// Flat, owned, fixed-at-allocation-time sequence of values.
///
/// Negative indices passed to [`MutableArray::get`] / [`MutableArray::set`]
/// wrap from the end (`-1` is the last element). Out-of-range access after
/// wrapping is undefined at this layer; callers one level up (the tree) are
/// responsible for bounds checks against user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MutableArray<T> {
    buf: Vec<T>,
}

fn wrap_index(i: isize, len: usize) -> usize {
    if i < 0 {
        (len as isize + i) as usize
    } else {
        i as usize
    }
}

impl<T> MutableArray<T> {
    pub(crate) fn empty() -> MutableArray<T> {
        MutableArray { buf: Vec::new() }
    }

    pub(crate) fn from_vec(buf: Vec<T>) -> MutableArray<T> {
        MutableArray { buf }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.buf
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Allocate a buffer of length `n`, filled with `v`.
    pub(crate) fn make(n: isize, v: T) -> Result<MutableArray<T>>
    where
        T: Clone,
    {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "MutableArray::make: negative length {}",
                n
            )));
        }
        Ok(MutableArray {
            buf: vec![v; n as usize],
        })
    }

    /// Allocate a buffer of length `n`, filled with `f(i)` for each index.
    pub(crate) fn init<F>(n: isize, mut f: F) -> Result<MutableArray<T>>
    where
        F: FnMut(usize) -> T,
    {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "MutableArray::init: negative length {}",
                n
            )));
        }
        let buf = (0..n as usize).map(&mut f).collect();
        Ok(MutableArray { buf })
    }

    #[inline]
    pub(crate) fn length(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub(crate) fn get(&self, i: isize) -> &T {
        &self.buf[wrap_index(i, self.buf.len())]
    }

    pub(crate) fn set(&mut self, i: isize, v: T) {
        let idx = wrap_index(i, self.buf.len());
        self.buf[idx] = v;
    }

    pub(crate) fn copy(&self) -> MutableArray<T>
    where
        T: Clone,
    {
        MutableArray {
            buf: self.buf.clone(),
        }
    }

    /// New array holding `self[start..end]`. `end` is clamped to
    /// `length`; a range that is empty or inverted (`end - start <= 0`)
    /// yields an empty array. Unlike [`crate::parray::PersistentArray`]'s
    /// `slice`, only `end` is clamped here — `start` is the caller's
    /// responsibility.
    pub(crate) fn slice(&self, start: isize, end: isize) -> MutableArray<T>
    where
        T: Clone,
    {
        let len = self.buf.len() as isize;
        let end = end.min(len);
        if end - start <= 0 {
            return MutableArray::empty();
        }
        let start = start.max(0) as usize;
        let end = end as usize;
        MutableArray {
            buf: self.buf[start..end].to_vec(),
        }
    }

    pub(crate) fn append(&self, other: &MutableArray<T>) -> MutableArray<T>
    where
        T: Clone,
    {
        let mut buf = Vec::with_capacity(self.buf.len() + other.buf.len());
        buf.extend_from_slice(&self.buf);
        buf.extend_from_slice(&other.buf);
        MutableArray { buf }
    }

    pub(crate) fn reverse(&self) -> MutableArray<T>
    where
        T: Clone,
    {
        let mut buf = self.buf.clone();
        buf.reverse();
        MutableArray { buf }
    }

    pub(crate) fn map<U, F>(&self, mut f: F) -> MutableArray<U>
    where
        F: FnMut(&T) -> U,
    {
        MutableArray {
            buf: self.buf.iter().map(|v| f(v)).collect(),
        }
    }

    pub(crate) fn filter<F>(&self, mut pred: F) -> MutableArray<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        MutableArray {
            buf: self.buf.iter().filter(|v| pred(v)).cloned().collect(),
        }
    }

    pub(crate) fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.buf.iter().for_each(|v| f(v));
    }

    pub(crate) fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.buf.iter().fold(init, |acc, v| f(acc, v))
    }

    pub(crate) fn reduce_right<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.buf.iter().rev().fold(init, |acc, v| f(acc, v))
    }

    pub(crate) fn every<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.buf.iter().all(|v| pred(v))
    }

    pub(crate) fn some<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.buf.iter().any(|v| pred(v))
    }

    pub(crate) fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.buf.iter().filter(|v| pred(v)).count()
    }

    pub(crate) fn find<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.buf.iter().find(|v| pred(v))
    }

    pub(crate) fn find_index<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.buf.iter().position(|v| pred(v))
    }

    pub(crate) fn contains(&self, v: &T) -> bool
    where
        T: PartialEq,
    {
        self.buf.contains(v)
    }

    pub(crate) fn flat_map<U, F>(&self, mut f: F) -> MutableArray<U>
    where
        F: FnMut(&T) -> MutableArray<U>,
    {
        let mut buf = Vec::new();
        for v in &self.buf {
            buf.extend(f(v).into_vec());
        }
        MutableArray { buf }
    }

    pub(crate) fn zip<'a, U>(
        &'a self,
        other: &'a MutableArray<U>,
    ) -> MutableArray<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        MutableArray {
            buf: self
                .buf
                .iter()
                .zip(other.buf.iter())
                .map(|(a, b)| (a.clone(), b.clone()))
                .collect(),
        }
    }

    pub(crate) fn zip_with<U, R, F>(&self, other: &MutableArray<U>, mut f: F) -> MutableArray<R>
    where
        F: FnMut(&T, &U) -> R,
    {
        MutableArray {
            buf: self
                .buf
                .iter()
                .zip(other.buf.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }

    pub(crate) fn unique(&self) -> MutableArray<T>
    where
        T: Clone + PartialEq,
    {
        let mut buf: Vec<T> = Vec::new();
        for v in &self.buf {
            if !buf.contains(v) {
                buf.push(v.clone());
            }
        }
        MutableArray { buf }
    }

    /// Product of every element, via [`std::iter::Product`].
    pub(crate) fn product(self) -> T
    where
        T: Product<T>,
    {
        self.buf.into_iter().product()
    }

    /// Joins every element's [`fmt::Display`] rendering with `sep`.
    pub(crate) fn join(&self, sep: &str) -> String
    where
        T: fmt::Display,
    {
        self.buf
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(sep)
    }

    pub(crate) fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.clone()
    }

    /// In-place fill with a single value.
    pub(crate) fn fill(&mut self, v: T)
    where
        T: Clone,
    {
        for slot in self.buf.iter_mut() {
            *slot = v.clone();
        }
    }

    /// In-place fill of `self[start..stop]`. Negative bounds are offsets
    /// from the end. Fails if `start > length` or `start > stop`; `stop`
    /// is clamped to `length`.
    pub(crate) fn fill_range(&mut self, v: T, start: isize, stop: isize) -> Result<()>
    where
        T: Clone,
    {
        let len = self.buf.len();
        let start = wrap_index(start, len);
        let stop = wrap_index(stop, len);
        if start > len {
            return Err(Error::InvalidArgument(format!(
                "fill_range: start {} past length {}",
                start, len
            )));
        }
        if start > stop {
            return Err(Error::InvalidArgument(format!(
                "fill_range: start {} greater than stop {}",
                start, stop
            )));
        }
        let stop = stop.min(len);
        for slot in &mut self.buf[start..stop] {
            *slot = v.clone();
        }
        Ok(())
    }

    /// In-place Lomuto-partition quicksort. Not stable. Worst case
    /// O(n^2), expected O(n log n). Pivot is the high element of each
    /// partition; `cmp` follows [`std::cmp::Ordering`] convention.
    pub(crate) fn sort<F>(&mut self, cmp: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let len = self.buf.len();
        if len < 2 {
            return;
        }
        quicksort(&mut self.buf, 0, len - 1, &cmp);
    }

    /// In-place left-rotation by `n mod length`. Negative `n` rotates
    /// right. No-op on an empty array, and `k = 0` (after normalizing
    /// `n`) is an explicit no-op guard before the cycle-leader loop runs.
    /// Implemented via the gcd-of-(length, k) cycle-leader (juggling)
    /// algorithm: exactly `length` element moves across `gcd(length, k)`
    /// independent cycles.
    pub(crate) fn rotate(&mut self, n: isize)
    where
        T: Clone,
    {
        let len = self.buf.len();
        if len == 0 {
            return;
        }
        let len_i = len as isize;
        let k = (((n % len_i) + len_i) % len_i) as usize;
        if k == 0 {
            return;
        }
        let g = gcd(len, k);
        for start in 0..g {
            rotate_cycle(&mut self.buf, start, k, len);
        }
    }
}

impl<A, B> MutableArray<(A, B)> {
    pub(crate) fn unzip(self) -> (MutableArray<A>, MutableArray<B>) {
        let (a, b): (Vec<A>, Vec<B>) = self.buf.into_iter().unzip();
        (MutableArray { buf: a }, MutableArray { buf: b })
    }
}

/// One cycle of the juggling rotation: walks the cycle starting at
/// `start`, setting `buf[j] = buf[j + k]` (mod `len`) until the cycle
/// closes, then drops the held-out value back into the final slot.
fn rotate_cycle<T: Clone>(buf: &mut [T], start: usize, k: usize, len: usize) {
    let held = buf[start].clone();
    let mut j = start;
    loop {
        let mut next = j + k;
        if next >= len {
            next -= len;
        }
        if next == start {
            break;
        }
        buf[j] = buf[next].clone();
        j = next;
    }
    buf[j] = held;
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn quicksort<T, F>(buf: &mut [T], lo: usize, hi: usize, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if lo >= hi {
        return;
    }
    let p = partition(buf, lo, hi, cmp);
    if p > lo {
        quicksort(buf, lo, p - 1, cmp);
    }
    quicksort(buf, p + 1, hi, cmp);
}

fn partition<T, F>(buf: &mut [T], lo: usize, hi: usize, cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut i = lo;
    for j in lo..hi {
        if cmp(&buf[j], &buf[hi]) == Ordering::Less {
            buf.swap(i, j);
            i += 1;
        }
    }
    buf.swap(i, hi);
    i
}

#[cfg(test)]
#[path = "marray_test.rs"]
mod marray_test;
