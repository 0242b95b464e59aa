//! A bounded, non-resizing FIFO queue.
//!
//! [`BoundedQueue`] stores its elements in a circular buffer allocated once
//! at construction. Besides the usual offer/poll/peek it supports
//! conditional removal ([`BoundedQueue::poll_if`]) and consuming the head
//! while iterating ([`HeadRemovingCursor`], [`BoundedQueue::drain_while`]).
//!
//! ```
//! use ringq::{Cursor, I32Queue};
//!
//! let mut q = I32Queue::new(3).unwrap();
//! assert!(q.offer(11));
//! assert!(q.offer(20));
//!
//! assert_eq!(q.poll_if(|v| v % 2 == 0), None);
//! assert_eq!(q.peek(), Some(&11));
//!
//! let mut cursor = q.head_removing_cursor();
//! assert_eq!(cursor.next(&q), Ok(&11));
//! assert_eq!(cursor.remove(&mut q), Ok(11));
//! assert_eq!(q.len(), 1);
//! ```

mod capacity;
pub mod error;
mod queue;
mod storage;

pub use capacity::Capacity;
pub use error::{Full, IllegalState, QueueError};
pub use queue::wrapper::{QueueSink, QueueStream};
pub use queue::{
    BoolQueue, BoundedQueue, CharQueue, Cursor, DrainWhile, F32Queue, F64Queue, HeadRemovingCursor,
    I16Queue, I32Queue, I64Queue, I8Queue, Iter, Queue, ReadCursor, U16Queue, U32Queue, U64Queue,
    U8Queue,
};
pub use storage::{ArrayStorage, SlotStorage};

/// Fixed-length element storage for a [`BoundedQueue`].
///
/// The queue only touches indices in `[0, capacity)`, and only reads slots
/// it has written before.
pub trait Storage {
    type Item;

    fn with_capacity(cap: Capacity) -> Self
    where
        Self: Sized;

    fn capacity(&self) -> usize;

    fn get(&self, idx: usize) -> &Self::Item;

    fn set(&mut self, idx: usize, value: Self::Item);

    /// Reads a slot for handing the element out by value. The slot may be
    /// left as is or vacated.
    fn take(&mut self, idx: usize) -> Self::Item;
}
