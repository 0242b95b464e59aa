use super::BoundedQueue;
use crate::error::QueueError;
use crate::Storage;
use futures_sink::Sink;
use futures_util::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// [`Sink`] that offers every item to a borrowed queue.
///
/// Nothing drains the queue behind a sink's back, so a full queue is an
/// error ([`QueueError::Full`]) rather than a reason to wait.
pub struct QueueSink<'a, S: Storage> {
    inner: Option<&'a mut BoundedQueue<S>>,
}

impl<'a, S: Storage> QueueSink<'a, S> {
    pub fn new(queue: &'a mut BoundedQueue<S>) -> Self {
        Self { inner: Some(queue) }
    }
}

impl<S: Storage> Sink<S::Item> for QueueSink<'_, S> {
    type Error = QueueError;

    fn poll_ready(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let ready = match self.inner.as_mut() {
            Some(queue) if queue.is_full() => Err(QueueError::Full),
            Some(_) => Ok(()),
            None => Err(QueueError::Closed),
        };
        Poll::Ready(ready)
    }

    fn start_send(mut self: Pin<&mut Self>, item: S::Item) -> Result<(), Self::Error> {
        self.inner
            .as_mut()
            .map(|queue| queue.try_offer(item).map_err(|full| full.into_queue_error()))
            .unwrap_or(Err(QueueError::Closed))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner = None;
        Poll::Ready(Ok(()))
    }
}

/// [`Stream`] that polls a borrowed queue until it is empty.
pub struct QueueStream<'a, S: Storage> {
    inner: &'a mut BoundedQueue<S>,
}

impl<'a, S: Storage> QueueStream<'a, S> {
    pub fn new(queue: &'a mut BoundedQueue<S>) -> Self {
        Self { inner: queue }
    }
}

impl<S: Storage> Stream for QueueStream<'_, S> {
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.inner.poll())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}
