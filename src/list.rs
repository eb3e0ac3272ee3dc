//! ``list`` is the small immutable singly-linked list collaborator that
//! [`crate::builder`] and [`crate::ops`] use as scratch storage while
//! streaming elements into or out of a tree.
//!
//! The source specification treats this as an external collaborator and
//! only requires the interface `{cons, empty, take k, drop k, reverse,
//! fold_left, fold_right}`; no ecosystem crate exposes exactly that
//! surface over a persistent list, so it lives here instead, grounded in
//! the same `Rc`-based structural-sharing style as [`crate::node`].

use std::rc::Rc;

/// An immutable, `Rc`-shared, singly-linked list.
#[derive(Clone)]
pub(crate) enum List<T> {
    Nil,
    Cons(T, Rc<List<T>>),
}

impl<T> List<T> {
    pub(crate) fn empty() -> List<T> {
        List::Nil
    }

    pub(crate) fn cons(v: T, rest: List<T>) -> List<T> {
        List::Cons(v, Rc::new(rest))
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, List::Nil)
    }

    pub(crate) fn len(&self) -> usize {
        let mut n = 0;
        let mut cur = self;
        while let List::Cons(_, rest) = cur {
            n += 1;
            cur = rest;
        }
        n
    }

    /// First `k` elements, in order, as a new list.
    pub(crate) fn take(&self, k: usize) -> List<T>
    where
        T: Clone,
    {
        if k == 0 {
            return List::Nil;
        }
        match self {
            List::Nil => List::Nil,
            List::Cons(v, rest) => List::cons(v.clone(), rest.take(k - 1)),
        }
    }

    /// Remaining elements after dropping the first `k`.
    pub(crate) fn drop(&self, k: usize) -> List<T>
    where
        T: Clone,
    {
        let mut cur = self;
        let mut k = k;
        loop {
            if k == 0 {
                return cur.clone_shallow();
            }
            match cur {
                List::Nil => return List::Nil,
                List::Cons(_, rest) => {
                    cur = rest;
                    k -= 1;
                }
            }
        }
    }

    fn clone_shallow(&self) -> List<T>
    where
        T: Clone,
    {
        match self {
            List::Nil => List::Nil,
            List::Cons(v, rest) => List::Cons(v.clone(), Rc::clone(rest)),
        }
    }

    pub(crate) fn reverse(&self) -> List<T>
    where
        T: Clone,
    {
        let mut acc = List::Nil;
        let mut cur = self;
        while let List::Cons(v, rest) = cur {
            acc = List::cons(v.clone(), acc);
            cur = rest;
        }
        acc
    }

    pub(crate) fn fold_left<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut acc = init;
        let mut cur = self;
        while let List::Cons(v, rest) = cur {
            acc = f(acc, v);
            cur = rest;
        }
        acc
    }

    pub(crate) fn fold_right<A, F>(&self, init: A, f: F) -> A
    where
        F: Fn(&T, A) -> A,
    {
        match self {
            List::Nil => init,
            List::Cons(v, rest) => f(v, rest.fold_right(init, f)),
        }
    }

    pub(crate) fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.fold_left(Vec::new(), |mut acc, v| {
            acc.push(v.clone());
            acc
        })
    }

    pub(crate) fn from_vec(vs: &[T]) -> List<T>
    where
        T: Clone,
    {
        vs.iter()
            .rev()
            .fold(List::Nil, |acc, v| List::cons(v.clone(), acc))
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;
