//! Sequence of `f64` values with a movable "current element" cursor.

use std::fmt::{self, Debug, Display};
use std::iter;

use snafu::prelude::*;

use crate::error::{AbsentArgumentSnafu, Error, NoCurrentElementSnafu};
use crate::node::{self, Node};

/// An ordered sequence of `f64` values.
///
/// At most one element is the sequence's "current element"; it is the
/// implicit target of the position-relative operations (`add_before`,
/// `add_after`, `get_current`, `remove_current`, `advance`).  Freshly
/// inserted elements always become the current element; `start` moves it to
/// the front; `advance` walks it forward and drops it past the tail.
///
/// The chain is singly linked, so the node preceding the cursor is tracked
/// alongside it (`precursor`) to keep cursor-relative insertion and removal
/// `O(1)`.
pub struct DoubleSeq {
    nodes: Vec<Node>,
    len: usize,
    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
    precursor: Option<usize>,
    // Head of the free-slot list, threaded through `Node::next`.
    free: Option<usize>,
}

impl DoubleSeq {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            len: 0,
            head: None,
            tail: None,
            cursor: None,
            precursor: None,
            free: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }
}

impl Default for DoubleSeq {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleSeq {
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence has a current element.
    pub fn is_current(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns the value of the current element.
    pub fn get_current(&self) -> Result<f64, Error> {
        let cursor = self.cursor.context(NoCurrentElementSnafu)?;
        Ok(self.value(cursor))
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let mut next = self.head;
        iter::from_fn(move || {
            let index = next?;
            next = self.nodes[index].next;
            Some(self.value(index))
        })
    }

    /// Inserts `value` immediately before the current element, or at the
    /// front when there is none.  The new element becomes the current
    /// element.
    pub fn add_before(&mut self, value: f64) {
        let new = self.alloc(value);
        match self.precursor {
            // The cursor rests on the head, or there is no current element;
            // either way the insertion point is the front.
            None => {
                self.nodes[new].next = self.head;
                self.head = Some(new);
                self.cursor = Some(new);
                if self.tail.is_none() {
                    self.tail = Some(new);
                }
            }
            Some(precursor) => {
                node::chain_insert_next(&mut self.nodes, precursor, new);
                self.cursor = Some(new);
            }
        }
        self.len += 1;
    }

    /// Inserts `value` immediately after the current element, or at the end
    /// when there is none.  The new element becomes the current element.
    pub fn add_after(&mut self, value: f64) {
        let new = self.alloc(value);
        match (self.cursor, self.tail) {
            (_, None) => {
                self.head = Some(new);
                self.tail = Some(new);
                self.cursor = Some(new);
            }
            (Some(cursor), Some(tail)) if cursor != tail => {
                node::chain_insert_next(&mut self.nodes, cursor, new);
                self.precursor = Some(cursor);
                self.cursor = Some(new);
            }
            // No current element, or the cursor rests on the tail: append.
            (_, Some(tail)) => {
                node::chain_insert_next(&mut self.nodes, tail, new);
                self.precursor = Some(tail);
                self.cursor = Some(new);
                self.tail = Some(new);
            }
        }
        self.len += 1;
    }

    /// Appends a deep copy of `other`'s elements.  The current element of
    /// `self` stays where it was, and `other` is untouched.
    pub fn add_all(&mut self, other: Option<&DoubleSeq>) -> Result<(), Error> {
        let other = other.context(AbsentArgumentSnafu)?;
        if let Some((head, tail)) = node::chain_copy(&other.nodes, other.head, &mut self.nodes) {
            match self.tail {
                Some(old_tail) => self.nodes[old_tail].next = Some(head),
                None => self.head = Some(head),
            }
            self.tail = Some(tail);
        }
        self.len += other.len;
        Ok(())
    }

    /// Moves the current element one position forward; past the tail, there
    /// is no longer a current element.
    pub fn advance(&mut self) -> Result<(), Error> {
        let cursor = self.cursor.context(NoCurrentElementSnafu)?;
        if self.cursor == self.tail {
            self.cursor = None;
            self.precursor = None;
        } else {
            self.precursor = Some(cursor);
            self.cursor = self.nodes[cursor].next;
        }
        Ok(())
    }

    /// Removes the current element.
    ///
    /// Removing the head makes the new head current; in every other case the
    /// sequence is left without a current element.
    pub fn remove_current(&mut self) -> Result<(), Error> {
        let cursor = self.cursor.context(NoCurrentElementSnafu)?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
            self.cursor = None;
        } else if self.cursor == self.head {
            self.head = self.nodes[cursor].next;
            self.cursor = self.head;
        } else {
            let precursor = self.precursor.unwrap();
            let removed = node::chain_remove_next(&mut self.nodes, precursor);
            debug_assert_eq!(removed, Some(cursor));
            if Some(cursor) == self.tail {
                self.tail = Some(precursor);
            }
            self.cursor = None;
            self.precursor = None;
        }
        self.release(cursor);
        self.len -= 1;
        Ok(())
    }

    /// Makes the front element the current element (none when empty).
    pub fn start(&mut self) {
        self.cursor = self.head;
        self.precursor = None;
    }

    /// Builds a new sequence holding a deep copy of `s1`'s elements followed
    /// by a deep copy of `s2`'s, with no current element.
    pub fn concatenation(
        s1: Option<&DoubleSeq>,
        s2: Option<&DoubleSeq>,
    ) -> Result<DoubleSeq, Error> {
        let s1 = s1.context(AbsentArgumentSnafu)?;
        let s2 = s2.context(AbsentArgumentSnafu)?;
        let mut result = DoubleSeq::with_capacity(s1.len + s2.len);
        result.add_all(Some(s1))?;
        result.add_all(Some(s2))?;
        debug_assert_eq!(result.len, node::chain_len(&result.nodes, result.head));
        Ok(result)
    }

    //
    // Helpers
    //

    fn value(&self, index: usize) -> f64 {
        self.nodes[index].value.unwrap()
    }

    /// Appends at the tail without touching the cursor.
    fn append(&mut self, value: f64) {
        let new = self.alloc(value);
        match self.tail {
            Some(tail) => node::chain_insert_next(&mut self.nodes, tail, new),
            None => self.head = Some(new),
        }
        self.tail = Some(new);
        self.len += 1;
    }

    /// Reuses a free slot when available, or grows the arena.
    fn alloc(&mut self, value: f64) -> usize {
        match self.free {
            Some(free) => {
                debug_assert!(self.nodes[free].is_free());
                self.free = self.nodes[free].next;
                self.nodes[free] = Node::new(value);
                free
            }
            None => {
                self.nodes.push(Node::new(value));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) {
        self.nodes[index] = Node {
            value: None,
            next: self.free,
        };
        self.free = Some(index);
    }
}

impl Clone for DoubleSeq {
    /// Deep copy: no node is shared with the original, and the copy's
    /// current element sits at the same position from the front.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.len = self.len;
        match (self.precursor, self.cursor) {
            // The cursor is past the head: copy the prefix `[head ..
            // precursor]` and the suffix `[cursor .. tail]` separately, then
            // join them with a single link.
            (Some(precursor), Some(cursor)) => {
                let (prefix_head, prefix_tail) = node::chain_copy_range(
                    &self.nodes,
                    self.head.unwrap(),
                    precursor,
                    &mut copy.nodes,
                );
                let (suffix_head, suffix_tail) =
                    node::chain_copy_range(&self.nodes, cursor, self.tail.unwrap(), &mut copy.nodes);
                copy.nodes[prefix_tail].next = Some(suffix_head);
                copy.head = Some(prefix_head);
                copy.tail = Some(suffix_tail);
                copy.precursor = Some(prefix_tail);
                copy.cursor = Some(suffix_head);
            }
            // No current element, or the cursor rests on the head.
            _ => {
                if let Some((head, tail)) = node::chain_copy(&self.nodes, self.head, &mut copy.nodes)
                {
                    copy.head = Some(head);
                    copy.tail = Some(tail);
                    copy.cursor = self.cursor.map(|_| head);
                }
            }
        }
        copy
    }
}

impl Extend<f64> for DoubleSeq {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for value in iter {
            self.append(value);
        }
    }
}

impl<const N: usize> From<[f64; N]> for DoubleSeq {
    fn from(arr: [f64; N]) -> Self {
        let mut seq = Self::with_capacity(N);
        seq.extend(arr);
        seq
    }
}

impl FromIterator<f64> for DoubleSeq {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl Display for DoubleSeq {
    /// Renders elements front to back as `"<1.1, 2.2, 3.3>"`, with the
    /// current element in square brackets: `"<1.1, [2.2], 3.3>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        let mut next = self.head;
        while let Some(index) = next {
            if self.cursor == Some(index) {
                write!(f, "[{}]", self.value(index))?;
            } else {
                write!(f, "{}", self.value(index))?;
            }
            next = self.nodes[index].next;
            if next.is_some() {
                f.write_str(", ")?;
            }
        }
        f.write_str(">")
    }
}

impl Debug for DoubleSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for DoubleSeq {
    /// Compares the rendered form, so two sequences with equal elements but
    /// different current elements are not equal.
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
