use super::cursor::{Cursor, HeadRemovingCursor};
use super::BoundedQueue;
use crate::Storage;
use std::fmt;
use std::iter::FusedIterator;

/// Borrowing iterator over a queue, oldest element first.
///
/// Unlike [`ReadCursor`](super::ReadCursor) it holds a shared borrow, so the
/// queue cannot change while it is alive and iteration never fails.
pub struct Iter<'a, S: Storage> {
    queue: &'a BoundedQueue<S>,
    pos: usize,
    end: usize,
}

impl<'a, S: Storage> Iter<'a, S> {
    pub(crate) fn new(queue: &'a BoundedQueue<S>) -> Self {
        Self {
            queue,
            pos: 0,
            end: queue.len(),
        }
    }
}

impl<S: Storage> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<S> fmt::Debug for Iter<'_, S>
where
    S: Storage,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, S: Storage> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }
        let item = self.queue.nth_live(self.pos);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.end - self.pos;
        (rem, Some(rem))
    }
}

impl<S: Storage> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.queue.nth_live(self.end))
    }
}

impl<S: Storage> ExactSizeIterator for Iter<'_, S> {}

impl<S: Storage> FusedIterator for Iter<'_, S> {}

/// Iterator returned by [`BoundedQueue::drain_while`].
pub struct DrainWhile<'a, S: Storage, P> {
    queue: &'a mut BoundedQueue<S>,
    cursor: HeadRemovingCursor,
    predicate: P,
    done: bool,
}

impl<'a, S, P> DrainWhile<'a, S, P>
where
    S: Storage,
    P: FnMut(&S::Item) -> bool,
{
    pub(crate) fn new(queue: &'a mut BoundedQueue<S>, predicate: P) -> Self {
        let cursor = queue.head_removing_cursor();
        Self {
            queue,
            cursor,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Iterator for DrainWhile<'_, S, P>
where
    S: Storage,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done || !self.cursor.has_next() {
            return None;
        }

        // the queue is borrowed exclusively, so the cursor cannot fail here
        let accept = match self.cursor.next(&*self.queue) {
            Ok(item) => (self.predicate)(item),
            Err(err) => unreachable!("drain cursor out of sync: {}", err),
        };
        if !accept {
            self.done = true;
            return None;
        }

        match self.cursor.remove(&mut *self.queue) {
            Ok(item) => Some(item),
            Err(err) => unreachable!("drain cursor failed to remove head: {}", err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.queue.len()))
        }
    }
}

impl<S, P> FusedIterator for DrainWhile<'_, S, P>
where
    S: Storage,
    P: FnMut(&S::Item) -> bool,
{
}
