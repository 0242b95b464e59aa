use super::{BoundedQueue, Generation, QueueId};
use crate::error::{IllegalState, QueueError};
use crate::Storage;

/// An iterator that lives apart from its queue.
///
/// A cursor holds no borrow: each call takes the queue explicitly, so the
/// queue may be changed between calls. Any structural change the cursor
/// did not make itself is reported as [`QueueError::ConcurrentModification`]
/// on the next call, and so is driving a cursor with a queue other than
/// the one that created it.
pub trait Cursor {
    fn has_next(&self) -> bool;

    fn next<'q, S: Storage>(
        &mut self,
        queue: &'q BoundedQueue<S>,
    ) -> Result<&'q S::Item, QueueError>;

    /// Removes the element most recently returned by `next`.
    fn remove<S: Storage>(&mut self, _queue: &mut BoundedQueue<S>) -> Result<S::Item, QueueError> {
        Err(QueueError::UnsupportedOperation)
    }
}

/// The queue a cursor belongs to and the generation it last saw there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Stamp {
    owner: QueueId,
    generation: Generation,
}

impl Stamp {
    fn of<S: Storage>(queue: &BoundedQueue<S>) -> Self {
        Self {
            owner: queue.id(),
            generation: queue.generation(),
        }
    }

    fn check<S: Storage>(self, queue: &BoundedQueue<S>) -> Result<(), QueueError> {
        let actual = Stamp::of(queue);
        if self == actual {
            Ok(())
        } else {
            tracing::trace!(expected = ?self, ?actual, "cursor observed concurrent modification");
            Err(QueueError::ConcurrentModification)
        }
    }
}

/// Read-only, fail-fast cursor over the elements live when it was created.
///
/// Removing through it always fails with
/// [`QueueError::UnsupportedOperation`].
#[derive(Clone, Debug)]
pub struct ReadCursor {
    pos: usize,
    len: usize,
    expected: Stamp,
}

impl ReadCursor {
    pub(crate) fn new<S: Storage>(queue: &BoundedQueue<S>) -> Self {
        Self {
            pos: 0,
            len: queue.len(),
            expected: Stamp::of(queue),
        }
    }
}

impl Cursor for ReadCursor {
    fn has_next(&self) -> bool {
        self.pos < self.len
    }

    fn next<'q, S: Storage>(
        &mut self,
        queue: &'q BoundedQueue<S>,
    ) -> Result<&'q S::Item, QueueError> {
        self.expected.check(queue)?;
        if !self.has_next() {
            return Err(QueueError::NoSuchElement);
        }

        let item = queue.nth_live(self.pos);
        self.pos += 1;
        Ok(item)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Last {
    Fresh,
    Returned,
    Removed,
}

/// Cursor whose `remove` consumes the head of the queue.
///
/// Only the element just returned by `next`, and only while it is still the
/// head, can be removed: `next` followed by `remove` pops exactly that
/// element. Calling `next` twice and then `remove` is rejected with
/// [`IllegalState::NotHead`], since the element returned last is no longer
/// at the head. Arbitrary-position removal is never supported.
#[derive(Clone, Debug)]
pub struct HeadRemovingCursor {
    // elements returned since the last removal, counted from the head
    pos: usize,
    // elements not yet removed by this cursor, counted from the head
    len: usize,
    expected: Stamp,
    last: Last,
}

impl HeadRemovingCursor {
    pub(crate) fn new<S: Storage>(queue: &BoundedQueue<S>) -> Self {
        Self {
            pos: 0,
            len: queue.len(),
            expected: Stamp::of(queue),
            last: Last::Fresh,
        }
    }
}

impl Cursor for HeadRemovingCursor {
    fn has_next(&self) -> bool {
        self.pos < self.len
    }

    fn next<'q, S: Storage>(
        &mut self,
        queue: &'q BoundedQueue<S>,
    ) -> Result<&'q S::Item, QueueError> {
        self.expected.check(queue)?;
        if !self.has_next() {
            return Err(QueueError::NoSuchElement);
        }

        let item = queue.nth_live(self.pos);
        self.pos += 1;
        self.last = Last::Returned;
        Ok(item)
    }

    fn remove<S: Storage>(&mut self, queue: &mut BoundedQueue<S>) -> Result<S::Item, QueueError> {
        self.expected.check(queue)?;

        let reason = match self.last {
            Last::Fresh => Some(IllegalState::NextNotCalled),
            Last::Removed => Some(IllegalState::AlreadyRemoved),
            Last::Returned if self.pos != 1 => Some(IllegalState::NotHead),
            Last::Returned => None,
        };
        if let Some(reason) = reason {
            tracing::trace!(%reason, "head-removing cursor rejected remove");
            return Err(QueueError::IllegalState(reason));
        }

        let item = match queue.poll() {
            Some(item) => item,
            None => unreachable!("returned element vanished without a generation change"),
        };
        self.pos -= 1;
        self.len -= 1;
        self.expected = Stamp::of(queue);
        self.last = Last::Removed;
        Ok(item)
    }
}
