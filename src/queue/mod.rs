mod cursor;
mod iter;
pub mod wrapper;

pub use self::cursor::{Cursor, HeadRemovingCursor, ReadCursor};
pub use self::iter::{DrainWhile, Iter};

use crate::capacity::Capacity;
use crate::error::{Full, QueueError};
use crate::storage::{ArrayStorage, SlotStorage};
use crate::Storage;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a queue, unique for the life of the process. Cursors carry
/// it so they can refuse to be driven with a queue that did not create them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct QueueId(u64);

impl QueueId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        QueueId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Structural modification stamp. Cursors copy it and compare by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Generation(u64);

impl Generation {
    fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// A fixed-capacity FIFO queue backed by a circular buffer.
///
/// The queue never grows: [`offer`](Self::offer) refuses new elements once
/// [`capacity`](Self::capacity) of them are live. Elements are stored in a
/// storage strategy `S`, one slot per unit of capacity, allocated once.
///
/// The queue has a single owner. Mutation requires `&mut self`; share it
/// across threads only behind your own lock.
pub struct BoundedQueue<S: Storage> {
    storage: S,
    cap: usize,
    head: usize,
    len: usize,
    id: QueueId,
    generation: Generation,
}

pub type Queue<T> = BoundedQueue<SlotStorage<T>>;

pub type I8Queue = BoundedQueue<ArrayStorage<i8>>;
pub type I16Queue = BoundedQueue<ArrayStorage<i16>>;
pub type I32Queue = BoundedQueue<ArrayStorage<i32>>;
pub type I64Queue = BoundedQueue<ArrayStorage<i64>>;
pub type U8Queue = BoundedQueue<ArrayStorage<u8>>;
pub type U16Queue = BoundedQueue<ArrayStorage<u16>>;
pub type U32Queue = BoundedQueue<ArrayStorage<u32>>;
pub type U64Queue = BoundedQueue<ArrayStorage<u64>>;
pub type F32Queue = BoundedQueue<ArrayStorage<f32>>;
pub type F64Queue = BoundedQueue<ArrayStorage<f64>>;
pub type BoolQueue = BoundedQueue<ArrayStorage<bool>>;
pub type CharQueue = BoundedQueue<ArrayStorage<char>>;

impl<S: Storage> BoundedQueue<S> {
    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidArgument`] when `capacity` is zero.
    ///
    /// # Panics
    ///
    /// Panics if the storage for `capacity` slots cannot be allocated, e.g.
    /// `usize::MAX` slots of a primitive type.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        Capacity::new(capacity).map(Self::with_capacity)
    }

    /// Creates an empty queue from an already validated capacity.
    ///
    /// # Panics
    ///
    /// Panics if the storage for `capacity` slots cannot be allocated.
    pub fn with_capacity(capacity: Capacity) -> Self {
        let storage = S::with_capacity(capacity);
        let cap = storage.capacity();
        debug_assert_eq!(cap, capacity.get());
        tracing::debug!(
            capacity = cap,
            item = std::any::type_name::<S::Item>(),
            "allocated bounded queue"
        );

        Self {
            storage,
            cap,
            head: 0,
            len: 0,
            id: QueueId::next(),
            generation: Generation::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.cap
    }

    pub fn remaining_capacity(&self) -> usize {
        self.cap - self.len
    }

    /// Appends `value` at the tail. Returns `false`, dropping `value`, if
    /// the queue is full.
    pub fn offer(&mut self, value: S::Item) -> bool {
        self.try_offer(value).is_ok()
    }

    /// Appends `value` at the tail, handing it back inside [`Full`] if the
    /// queue has no free slot.
    pub fn try_offer(&mut self, value: S::Item) -> Result<(), Full<S::Item>> {
        if self.is_full() {
            return Err(Full { val: value });
        }

        let tail = self.wrap(self.head, self.len);
        self.storage.set(tail, value);
        self.len += 1;
        self.generation.bump();
        Ok(())
    }

    pub fn poll(&mut self) -> Option<S::Item> {
        self.poll_if(|_| true)
    }

    /// Removes and returns the head only if `predicate` accepts it.
    ///
    /// A rejected head stays where it is; the queue is not modified.
    pub fn poll_if<F>(&mut self, predicate: F) -> Option<S::Item>
    where
        F: FnOnce(&S::Item) -> bool,
    {
        if self.is_empty() || !predicate(self.storage.get(self.head)) {
            return None;
        }

        let item = self.storage.take(self.head);
        self.head = self.wrap(self.head, 1);
        self.len -= 1;
        self.generation.bump();
        Some(item)
    }

    pub fn peek(&self) -> Option<&S::Item> {
        if self.is_empty() {
            None
        } else {
            Some(self.storage.get(self.head))
        }
    }

    pub fn clear(&mut self) {
        while self.poll().is_some() {}
    }

    /// Borrowing iterator over the live elements, oldest first.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(self)
    }

    /// Detached fail-fast cursor; see [`ReadCursor`].
    pub fn cursor(&self) -> ReadCursor {
        ReadCursor::new(self)
    }

    /// Detached cursor that can remove the head it just returned; see
    /// [`HeadRemovingCursor`].
    pub fn head_removing_cursor(&self) -> HeadRemovingCursor {
        HeadRemovingCursor::new(self)
    }

    /// Removes elements from the head for as long as `predicate` accepts
    /// them. The first rejected element and everything behind it stay in
    /// the queue.
    ///
    /// The returned iterator is lazy: only elements actually pulled from it
    /// are removed.
    pub fn drain_while<P>(&mut self, predicate: P) -> DrainWhile<'_, S, P>
    where
        P: FnMut(&S::Item) -> bool,
    {
        DrainWhile::new(self, predicate)
    }

    pub(crate) fn id(&self) -> QueueId {
        self.id
    }

    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }

    /// Element `offset` places behind the head. `offset` must be `< len`.
    pub(crate) fn nth_live(&self, offset: usize) -> &S::Item {
        debug_assert!(offset < self.len);
        self.storage.get(self.wrap(self.head, offset))
    }

    /// `x + y` folded back into `[0, cap)`.
    ///
    /// Only valid for `x < cap` and `y <= cap`, which is all the engine
    /// ever passes; a single subtraction then replaces the modulo.
    #[inline]
    fn wrap(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.cap && y <= self.cap);
        let sum = x + y;
        if sum < self.cap {
            sum
        } else {
            sum - self.cap
        }
    }
}

impl<S> fmt::Debug for BoundedQueue<S>
where
    S: Storage,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, S: Storage> IntoIterator for &'a BoundedQueue<S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
