//! Low-level surgery on singly linked node chains.
//!
//! Nodes live in a `Vec` arena and link to their successor by index.  The
//! functions here only rewire or duplicate chains; which slot is the head,
//! tail, or cursor of a sequence is the caller's business.

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node {
    pub(crate) value: Option<f64>,
    pub(crate) next: Option<usize>,
}

impl Node {
    pub(crate) fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            next: None,
        }
    }

    /// A free slot awaiting reuse; `next` then points at the next free slot.
    pub(crate) fn is_free(&self) -> bool {
        self.value.is_none()
    }
}

/// Threads `source` in immediately after `target`.
pub(crate) fn chain_insert_next(nodes: &mut [Node], target: usize, source: usize) {
    nodes[source].next = nodes[target].next;
    nodes[target].next = Some(source);
}

/// Unlinks the node immediately after `target`, returning its index, or
/// `None` when `target` has no successor.
pub(crate) fn chain_remove_next(nodes: &mut [Node], target: usize) -> Option<usize> {
    let removed = nodes[target].next?;
    nodes[target].next = nodes[removed].next;
    nodes[removed].next = None;
    Some(removed)
}

/// Deep-copies the chain from `start` to the end into the `dst` arena,
/// returning the copy's (head, tail).
pub(crate) fn chain_copy(
    src: &[Node],
    start: Option<usize>,
    dst: &mut Vec<Node>,
) -> Option<(usize, usize)> {
    let mut i = start?;
    let head = dst.len();
    dst.push(Node {
        value: src[i].value,
        next: None,
    });
    let mut tail = head;
    while let Some(next) = src[i].next {
        let copy = dst.len();
        dst.push(Node {
            value: src[next].value,
            next: None,
        });
        dst[tail].next = Some(copy);
        tail = copy;
        i = next;
    }
    Some((head, tail))
}

/// Deep-copies the run of nodes from `start` through `end` (inclusive) into
/// the `dst` arena, returning the copy's (head, tail).
///
/// `end` must be reachable from `start`.
pub(crate) fn chain_copy_range(
    src: &[Node],
    start: usize,
    end: usize,
    dst: &mut Vec<Node>,
) -> (usize, usize) {
    let head = dst.len();
    dst.push(Node {
        value: src[start].value,
        next: None,
    });
    let mut tail = head;
    let mut i = start;
    while i != end {
        let next = src[i].next.expect("`end` must be reachable from `start`");
        let copy = dst.len();
        dst.push(Node {
            value: src[next].value,
            next: None,
        });
        dst[tail].next = Some(copy);
        tail = copy;
        i = next;
    }
    (head, tail)
}

/// Counts nodes by traversal from `start` to the end.
pub(crate) fn chain_len(nodes: &[Node], start: Option<usize>) -> usize {
    let mut len = 0;
    let mut i = start;
    while let Some(index) = i {
        len += 1;
        i = nodes[index].next;
    }
    len
}
