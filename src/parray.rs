//! ``parray`` exports [PersistentArray], an immutable indexed sequence
//! built from a radix tree of [`crate::node::Node`]s plus a trailing
//! "tail" buffer of up to `B` elements.
//!
//! Every mutating operation (`set`, `append`, …) returns a new
//! [PersistentArray] that shares untouched subtrees with its predecessor
//! via `Rc`. See the crate-level documentation for the invariants this
//! module upholds.

use std::rc::Rc;

use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::list::List;
use crate::marray::MutableArray;
use crate::node::{Node, B, BBITS, MASK};

/// Calibration constant gating [`PersistentArray::append`]'s choice
/// between the incremental path and the builder path. Tunable, but
/// observable behavior must stay equivalent between the two paths.
pub(crate) const APPEND_BUILDER_THRESHOLD: usize = 4 * B;

/// An immutable, logarithmic-access, structurally-shared sequence.
///
/// `length`, `shift`, `root` and `tail` together uphold the invariants
/// documented on the crate root: the tail holds fewer than `B` elements,
/// every non-rightmost sibling at every level is full, and `shift`
/// always matches the tree's depth.
pub struct PersistentArray<T> {
    length: usize,
    shift: u32,
    root: MutableArray<Rc<Node<T>>>,
    tail: MutableArray<T>,
}

impl<T> Clone for PersistentArray<T>
where
    T: Clone,
{
    fn clone(&self) -> PersistentArray<T> {
        PersistentArray {
            length: self.length,
            shift: self.shift,
            root: self.root.copy(),
            tail: self.tail.copy(),
        }
    }
}

impl<T> Default for PersistentArray<T>
where
    T: Clone,
{
    fn default() -> PersistentArray<T> {
        PersistentArray::empty()
    }
}

/// Diagnostic snapshot returned by [`PersistentArray::validate`].
///
/// Grounded in the teacher repository's own `Stats`/`LlrbDepth`
/// diagnostic types: this crate has no runtime logging for its core
/// in-memory structure and instead exposes a structural self-check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub len: usize,
    pub shift: u32,
    pub depth: u32,
    pub tail_len: usize,
    pub leaf_count: usize,
}

fn wrap_or_err(i: isize, length: usize) -> Result<usize> {
    let len = length as isize;
    let idx = if i < 0 { len + i } else { i };
    if idx < 0 || idx >= len {
        Err(Error::IndexOutOfBounds { index: i, length })
    } else {
        Ok(idx as usize)
    }
}

fn wrap_clamp(i: isize, len: isize) -> isize {
    let w = if i < 0 { len + i } else { i };
    w.max(0).min(len)
}

fn tail_start(length: usize) -> usize {
    (length >> BBITS) << BBITS
}

/// Builds a chain of singleton `Internal` nodes from `remaining_shift`
/// down to zero, holding `leaf` at the bottom. `remaining_shift == 0`
/// means `leaf` itself is the immediate child being wired in.
fn build_branch<T>(remaining_shift: u32, leaf: Rc<Node<T>>) -> Rc<Node<T>> {
    if remaining_shift == 0 {
        leaf
    } else {
        let child = build_branch(remaining_shift - BBITS, leaf);
        Rc::new(Node::internal(MutableArray::from_vec(vec![child])))
    }
}

/// Descends an existing `Internal` node along its rightmost spine,
/// either recursing into an existing child that still has room, or
/// appending a freshly built branch. `old_length` is the array's length
/// *before* this promotion, matching the source's routing formula.
fn insert_into_node<T>(node: &Node<T>, shift: u32, old_length: usize, leaf: Rc<Node<T>>) -> Node<T>
where
    T: Clone,
{
    let children = match node {
        Node::Internal(children) => children,
        Node::Leaf(_) => unreachable!("insert_into_node called on a leaf"),
    };
    let pos = (old_length >> shift) & MASK;
    let mut new_children = children.copy();
    if pos >= children.length() {
        let branch = build_branch(shift - BBITS, leaf);
        let mut buf = new_children.to_vec();
        buf.push(branch);
        new_children = MutableArray::from_vec(buf);
    } else {
        let child = Rc::clone(children.get(pos as isize));
        let updated = insert_into_node(&child, shift - BBITS, old_length, leaf);
        new_children.set(pos as isize, Rc::new(updated));
    }
    Node::internal(new_children)
}

/// Top-level entry for tail promotion: `root` is a bare children list
/// (not wrapped in its own `Node`), so the "treat a `Leaf` as a
/// singleton `Internal`" bootstrap case from the source spec never
/// arises here — an empty or partial root is handled directly as a
/// children list rather than as a degenerate node.
fn insert_tail_in_tree<T>(
    root: &MutableArray<Rc<Node<T>>>,
    shift: u32,
    old_length: usize,
    leaf: Rc<Node<T>>,
) -> MutableArray<Rc<Node<T>>>
where
    T: Clone,
{
    let pos = (old_length >> shift) & MASK;
    if pos >= root.length() {
        let branch = build_branch(shift - BBITS, leaf);
        let mut buf = root.to_vec();
        buf.push(branch);
        MutableArray::from_vec(buf)
    } else {
        let mut new_root = root.copy();
        let child = Rc::clone(root.get(pos as isize));
        let updated = insert_into_node(&child, shift - BBITS, old_length, leaf);
        new_root.set(pos as isize, Rc::new(updated));
        new_root
    }
}

impl<T> PersistentArray<T>
where
    T: Clone,
{
    pub const B: usize = B;
    pub const BBITS: u32 = BBITS;

    pub(crate) fn from_parts(
        length: usize,
        shift: u32,
        root: MutableArray<Rc<Node<T>>>,
        tail: MutableArray<T>,
    ) -> PersistentArray<T> {
        PersistentArray {
            length,
            shift,
            root,
            tail,
        }
    }

    pub(crate) fn tail_array(&self) -> &MutableArray<T> {
        &self.tail
    }

    /// Calls `f` on every top-level `Rc<Node<T>>` in `root`, left to
    /// right.
    pub(crate) fn for_each_root_child<F>(&self, mut f: F)
    where
        F: FnMut(&Rc<Node<T>>),
    {
        self.root.for_each(|child| f(child));
    }

    pub fn empty() -> PersistentArray<T> {
        PersistentArray {
            length: 0,
            shift: BBITS,
            root: MutableArray::empty(),
            tail: MutableArray::empty(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn get(&self, i: isize) -> Result<&T> {
        let idx = wrap_or_err(i, self.length)?;
        let ts = tail_start(self.length);
        if idx >= ts {
            Ok(self.tail.get((idx - ts) as isize))
        } else {
            let slot = (idx >> self.shift) & MASK;
            Ok(self
                .root
                .get(slot as isize)
                .get(self.shift - BBITS, idx))
        }
    }

    pub fn set(&self, i: isize, v: T) -> Result<PersistentArray<T>> {
        let idx = wrap_or_err(i, self.length)?;
        let ts = tail_start(self.length);
        if idx >= ts {
            let mut new_tail = self.tail.copy();
            new_tail.set((idx - ts) as isize, v);
            Ok(PersistentArray {
                length: self.length,
                shift: self.shift,
                root: self.root.copy(),
                tail: new_tail,
            })
        } else {
            let slot = (idx >> self.shift) & MASK;
            let mut new_root = self.root.copy();
            let updated = new_root.get(slot as isize).set(self.shift - BBITS, idx, v);
            new_root.set(slot as isize, Rc::new(updated));
            Ok(PersistentArray {
                length: self.length,
                shift: self.shift,
                root: new_root,
                tail: self.tail.copy(),
            })
        }
    }

    /// Internal primitive behind every tail mutation: swap in a new
    /// candidate tail, promoting it into the tree when it reaches `B`
    /// elements.
    pub(crate) fn replace_tail(&self, new_tail: MutableArray<T>) -> PersistentArray<T> {
        if new_tail.length() < B {
            let new_length =
                (self.length as isize + new_tail.length() as isize - self.tail.length() as isize)
                    as usize;
            return PersistentArray {
                length: new_length,
                shift: self.shift,
                root: self.root.copy(),
                tail: new_tail,
            };
        }

        let new_length = self.length + B - self.tail.length();
        let needed_leaves = new_length >> BBITS;
        let (shift, root) = if needed_leaves > (1usize << self.shift) {
            let wrapped = Rc::new(Node::internal(self.root.copy()));
            (self.shift + BBITS, MutableArray::from_vec(vec![wrapped]))
        } else {
            (self.shift, self.root.copy())
        };
        let leaf = Rc::new(Node::leaf(new_tail));
        let root = insert_tail_in_tree(&root, shift, self.length, leaf);
        PersistentArray {
            length: new_length,
            shift,
            root,
            tail: MutableArray::empty(),
        }
    }

    /// Fuses up to `B - |acc.tail|` elements of `chunk` into `acc`'s
    /// tail, promoting and carrying any remainder into a fresh tail.
    fn append_tree(chunk: &[T], acc: &PersistentArray<T>) -> PersistentArray<T> {
        if chunk.is_empty() {
            return acc.clone();
        }
        let room = B - acc.tail.length();
        let take = room.min(chunk.len());
        let mut buf = acc.tail.to_vec();
        buf.extend_from_slice(&chunk[..take]);
        let result = acc.replace_tail(MutableArray::from_vec(buf));

        let rest = &chunk[take..];
        if rest.is_empty() {
            result
        } else {
            result.replace_tail(MutableArray::from_vec(rest.to_vec()))
        }
    }

    /// Appends `other` after `self`. Routes to an incremental,
    /// tail-fusing walk for small `other`, or to a [`Builder`]-based
    /// rebuild for large `other` (see `APPEND_BUILDER_THRESHOLD`).
    pub fn append(&self, other: &PersistentArray<T>) -> PersistentArray<T> {
        if other.length <= APPEND_BUILDER_THRESHOLD {
            let mut acc = self.clone();
            other.for_each_root_child(|child| {
                child.for_each_leaf(&mut |values| {
                    acc = Self::append_tree(values.as_slice(), &acc);
                });
            });
            Self::append_tree(other.tail.as_slice(), &acc)
        } else {
            let mut builder = Builder::from_array(self);
            other.for_each_root_child(|child| {
                child.for_each_leaf(&mut |values| {
                    builder.append(values.as_slice());
                });
            });
            builder.append(other.tail.as_slice());
            builder.into_array()
        }
    }

    /// Left fold of [`PersistentArray::append`] over `arrays`, starting
    /// from [`PersistentArray::empty`].
    pub fn concat(arrays: &[PersistentArray<T>]) -> PersistentArray<T> {
        arrays
            .iter()
            .fold(PersistentArray::empty(), |acc, a| acc.append(a))
    }

    /// Allocate a new array of length `n`, filled with `f(i)` for each
    /// index. Fails with [`Error::InvalidArgument`] for negative `n`.
    pub fn from_fn<F>(n: isize, mut f: F) -> Result<PersistentArray<T>>
    where
        F: FnMut(usize) -> T,
    {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "PersistentArray::from_fn: negative length {}",
                n
            )));
        }
        let n = n as usize;
        let mut builder = Builder::new();
        let mut buf: Vec<T> = Vec::with_capacity(B.min(n.max(1)));
        for i in 0..n {
            buf.push(f(i));
            if buf.len() == B {
                builder.append(&buf);
                buf.clear();
            }
        }
        if !buf.is_empty() {
            builder.append(&buf);
        }
        Ok(builder.into_array())
    }

    /// Allocate a new array of length `n`, filled with `v`.
    pub fn from_elem(n: isize, v: T) -> Result<PersistentArray<T>> {
        Self::from_fn(n, |_| v.clone())
    }

    /// Build a new array from a `Vec`, `B` elements at a time.
    pub fn from_vec(v: Vec<T>) -> PersistentArray<T> {
        let mut builder = Builder::new();
        for chunk in v.chunks(B) {
            builder.append(chunk);
        }
        builder.into_array()
    }

    /// Build a new array by repeatedly taking `B` elements off the front
    /// of `l`, feeding each full chunk into a [`Builder`] as a leaf and
    /// finalizing with whatever remainder is left. The `list::List`
    /// counterpart to [`PersistentArray::from_vec`]; used internally by
    /// [`PersistentArray::slice`] and, via it, by `rotate`, plus by
    /// `sort` in [`crate::ops`].
    pub(crate) fn from_list(l: &List<T>) -> PersistentArray<T> {
        let mut builder = Builder::new();
        let mut cur = l.clone();
        loop {
            if cur.is_empty() {
                break;
            }
            let chunk = cur.take(B).to_vec();
            if chunk.len() < B {
                builder.append(&chunk);
                break;
            }
            builder.append(&chunk);
            cur = cur.drop(B);
        }
        builder.into_array()
    }

    /// Collects every element, in ascending index order, into a
    /// `list::List`. The `list::List` counterpart to
    /// [`PersistentArray::to_vec`].
    pub(crate) fn to_list(&self) -> List<T> {
        List::from_vec(&self.to_vec())
    }

    /// Collects every element, in ascending index order.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.length);
        self.for_each_root_child(|child| {
            child.for_each_leaf(&mut |values| out.extend(values.to_vec()));
        });
        out.extend(self.tail.to_vec());
        out
    }

    /// New array holding `self[start..end]`. Both bounds wrap negative
    /// indices from the end, then clamp to `[0, length]`; an empty or
    /// inverted range yields [`PersistentArray::empty`]. Unlike
    /// [`MutableArray::slice`], both bounds are clamped here. Built by a
    /// right-to-left traversal that conses every element whose position
    /// falls in `[start, end)` onto a `list::List`, then hands that list
    /// to [`PersistentArray::from_list`].
    pub fn slice(&self, start: isize, end: isize) -> PersistentArray<T> {
        let len = self.length as isize;
        let start = wrap_clamp(start, len);
        let end = wrap_clamp(end, len);
        if end <= start {
            return PersistentArray::empty();
        }
        let (start, end) = (start as usize, end as usize);
        let v = self.to_vec();
        let list = v.iter().enumerate().rev().fold(List::empty(), |acc, (i, x)| {
            if i >= start && i < end {
                List::cons(x.clone(), acc)
            } else {
                acc
            }
        });
        PersistentArray::from_list(&list)
    }

    /// Walks the tree checking every invariant from the crate
    /// documentation, returning a [Stats] snapshot on success. This is
    /// the crate's diagnostic surface in place of runtime logging (see
    /// the teacher repository's own `validate`/`Stats` convention).
    pub fn validate(&self) -> Result<Stats> {
        if self.tail.length() > B {
            return Err(Error::InvalidArgument(format!(
                "tail length {} exceeds B={}",
                self.tail.length(),
                B
            )));
        }
        if self.shift < BBITS {
            return Err(Error::InvalidArgument(format!(
                "shift {} below minimum {}",
                self.shift, BBITS
            )));
        }
        let root_len = self.root.length();
        if root_len > B {
            return Err(Error::InvalidArgument(format!(
                "root arity {} exceeds B={}",
                root_len, B
            )));
        }

        let mut leaf_count = 0usize;
        let expect_leaf_children = self.shift == BBITS;
        for (idx, child) in self.root.as_slice().iter().enumerate() {
            if child.is_leaf() != expect_leaf_children {
                return Err(Error::InvalidArgument(
                    "root child kind inconsistent with shift".to_string(),
                ));
            }
            let on_rightmost = idx + 1 == root_len;
            leaf_count += validate_node(child, self.shift.saturating_sub(BBITS), on_rightmost)?;
        }

        if leaf_count * B + self.tail.length() != self.length {
            return Err(Error::InvalidArgument(format!(
                "length {} inconsistent with {} leaves and tail {}",
                self.length,
                leaf_count,
                self.tail.length()
            )));
        }

        Ok(Stats {
            len: self.length,
            shift: self.shift,
            depth: self.shift / BBITS,
            tail_len: self.tail.length(),
            leaf_count,
        })
    }
}

/// Every leaf in a published tree is exactly `B` elements (this crate
/// never publishes a partial leaf); only `Internal` nodes off the
/// rightmost spine are required to be full, matching invariant 3.
fn validate_node<T>(node: &Node<T>, shift: u32, on_rightmost_spine: bool) -> Result<usize> {
    match node {
        Node::Leaf(values) => {
            if values.length() != B {
                Err(Error::InvalidArgument(format!(
                    "leaf has {} values, expected {}",
                    values.length(),
                    B
                )))
            } else {
                Ok(1)
            }
        }
        Node::Internal(children) => {
            let n = children.length();
            if n == 0 || n > B {
                return Err(Error::InvalidArgument(format!(
                    "internal arity {} out of range",
                    n
                )));
            }
            if !on_rightmost_spine && n != B {
                return Err(Error::InvalidArgument(format!(
                    "non-rightmost internal has {} children, expected {}",
                    n, B
                )));
            }
            let expect_leaf_children = shift == BBITS;
            let mut leaf_count = 0usize;
            for (idx, child) in children.as_slice().iter().enumerate() {
                if child.is_leaf() != expect_leaf_children {
                    return Err(Error::InvalidArgument(
                        "child kind inconsistent with shift".to_string(),
                    ));
                }
                let child_rightmost = on_rightmost_spine && idx + 1 == n;
                leaf_count += validate_node(child, shift.saturating_sub(BBITS), child_rightmost)?;
            }
            Ok(leaf_count)
        }
    }
}

#[cfg(test)]
#[path = "parray_test.rs"]
mod parray_test;

#[cfg(test)]
#[path = "proptest_test.rs"]
mod proptest_test;
