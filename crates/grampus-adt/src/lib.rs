//! Collection primitives used by the `grampus` graph engine.
//!
//! Deliberately small ADTs: a FIFO [`Queue`], a LIFO [`Stack`], a binary
//! min-heap [`PriorityQueue`], and an insertion-ordered [`Dictionary`].
//! Traversal and path results in `grampus` are handed back as `Queue` /
//! `Stack` values with a drain-to-empty consumption contract.
//!
//! Empty-removal behavior differs on purpose: `Stack::pop` / `Stack::peek`
//! fail with [`EmptyCollection`], while `Queue::dequeue` and
//! `PriorityQueue::remove` return `None`.

mod dictionary;
mod error;
mod priority;
mod queue;
mod stack;

pub use dictionary::Dictionary;
pub use error::EmptyCollection;
pub use priority::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
