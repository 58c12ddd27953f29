//! Ordered sequence of `f64` values with a movable "current element" cursor.
//!
//! The sequence is backed by a singly linked chain of nodes stored in a `Vec`
//! arena.  Links are plain indices, so the non-owning `tail`, `cursor`, and
//! `precursor` references never alias an owned node, and insertion and
//! removal relative to the cursor are `O(1)` even though the chain supports
//! forward traversal only.

mod error;
mod node;
mod seq;

pub use self::error::Error;
pub use self::seq::DoubleSeq;
