use std::fmt;
use thiserror::Error;

/// Why a head-removing cursor refused to remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalState {
    /// `remove` was called before any `next`.
    NextNotCalled,
    /// `remove` was called twice without an intervening `next`.
    AlreadyRemoved,
    /// The last returned element is no longer the head of the queue.
    NotHead,
}

impl fmt::Display for IllegalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalState::NextNotCalled => write!(f, "remove called before next"),
            IllegalState::AlreadyRemoved => write!(f, "element was already removed"),
            IllegalState::NotHead => write!(f, "only the current head can be removed"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum QueueError {
    #[error("invalid capacity {capacity}, must be positive")]
    InvalidArgument { capacity: i64 },

    #[error("queue was modified since the cursor last synchronized with it")]
    ConcurrentModification,

    #[error("illegal cursor state: {0}")]
    IllegalState(IllegalState),

    #[error("cursor has no more elements")]
    NoSuchElement,

    #[error("read-only cursor cannot remove elements")]
    UnsupportedOperation,

    #[error("queue is full")]
    Full,

    #[error("sink is closed")]
    Closed,
}

impl QueueError {
    pub fn is_concurrent_modification(&self) -> bool {
        matches!(self, QueueError::ConcurrentModification)
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self, QueueError::IllegalState(_))
    }

    pub fn is_full(&self) -> bool {
        matches!(self, QueueError::Full)
    }
}

/// A value refused by [`try_offer`](crate::BoundedQueue::try_offer) because
/// the queue had no free slot.
#[derive(Clone, PartialEq, Eq)]
pub struct Full<T> {
    pub(crate) val: T,
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Full").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&QueueError::Full, f)
    }
}

impl<T> std::error::Error for Full<T> {}

impl<T> Full<T> {
    pub fn into_inner(self) -> T {
        self.val
    }

    pub fn into_queue_error(self) -> QueueError {
        QueueError::Full
    }
}
