//! ``builder`` exports [Builder], the short-lived scratch structure used
//! to assemble a [`crate::parray::PersistentArray`] from bulk input
//! without paying for promotion-by-promotion tail fills.
//!
//! A `Builder` is thread-confined to the call that owns it: it is never
//! stored in a public field and never shared between snapshots. Its
//! `nodes` list is conventionally prepend-only (newest leaf at the head)
//! and is reversed exactly once, inside [`Builder::into_array`].

use std::rc::Rc;

use crate::list::List;
use crate::marray::MutableArray;
use crate::node::{Node, B, BBITS};
use crate::parray::PersistentArray;

pub(crate) struct Builder<T> {
    btail: MutableArray<T>,
    /// Completed leaves, most-recently-completed first.
    nodes: List<Rc<Node<T>>>,
    num_nodes: usize,
}

impl<T> Builder<T>
where
    T: Clone,
{
    pub(crate) fn new() -> Builder<T> {
        Builder {
            btail: MutableArray::empty(),
            nodes: List::empty(),
            num_nodes: 0,
        }
    }

    /// Pack `chunk` into `btail`, B elements at a time, promoting every
    /// full `btail` into a completed Leaf.
    pub(crate) fn append(&mut self, chunk: &[T]) {
        let mut rest = chunk;
        while !rest.is_empty() {
            let room = B - self.btail.length();
            let take = room.min(rest.len());
            let mut buf = self.btail.to_vec();
            buf.extend_from_slice(&rest[..take]);
            self.btail = MutableArray::from_vec(buf);
            rest = &rest[take..];

            if self.btail.length() == B {
                let leaf = Rc::new(Node::leaf(std::mem::replace(
                    &mut self.btail,
                    MutableArray::empty(),
                )));
                self.nodes = List::cons(leaf, std::mem::replace(&mut self.nodes, List::empty()));
                self.num_nodes += 1;
            }
        }
    }

    /// Build the tree for `self.nodes` bottom-up, wrapping groups of `B`
    /// completed nodes into a fresh `Internal` each pass, until a single
    /// top node remains. Its children become the array's `root`; the
    /// number of passes performed is exactly the tree's depth, so the
    /// final `shift` falls out of the loop rather than being recomputed
    /// separately.
    pub(crate) fn into_array(self) -> PersistentArray<T> {
        if self.num_nodes == 0 {
            return PersistentArray::from_parts(
                self.btail.length(),
                BBITS,
                MutableArray::empty(),
                self.btail,
            );
        }

        // exactly one reversal: `nodes` is newest-first, leaves must be
        // compressed in left-to-right order.
        let mut level: Vec<Rc<Node<T>>> = self.nodes.reverse().to_vec();
        let mut shift = 0u32;
        loop {
            let mut next = Vec::with_capacity((level.len() + B - 1) / B);
            for chunk in level.chunks(B) {
                next.push(Rc::new(Node::internal(MutableArray::from_vec(
                    chunk.to_vec(),
                ))));
            }
            level = next;
            shift += BBITS;
            if level.len() == 1 {
                break;
            }
        }

        let root = match &*level[0] {
            Node::Internal(children) => children.copy(),
            Node::Leaf(_) => unreachable!("compress pass always wraps in Internal"),
        };
        let tree_size = self.num_nodes * B;
        let length = tree_size + self.btail.length();
        PersistentArray::from_parts(length, shift, root, self.btail)
    }

    /// Flatten an existing array's tree into the set of completed leaves
    /// it already holds, in left-to-right order, carrying over its tail
    /// as the builder's partial `btail`.
    pub(crate) fn from_array(a: &PersistentArray<T>) -> Builder<T> {
        let mut leaves_in_order: Vec<Rc<Node<T>>> = Vec::new();
        a.for_each_root_child(|child| {
            child.for_each_leaf(&mut |values| {
                leaves_in_order.push(Rc::new(Node::leaf(values.copy())));
            });
        });
        let num_nodes = leaves_in_order.len();
        let nodes = List::from_vec(&leaves_in_order).reverse();
        Builder {
            btail: a.tail_array().copy(),
            nodes,
            num_nodes,
        }
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
