use crate::{Category, Error, Event};
use bytes::Bytes;
use futures::future::{BoxFuture, Shared};
use futures::Future;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
/// A lazy stream which produces exactly one item and then ends.
///
/// Nothing happens until the stream is first polled. Dropping the stream before it produces its
/// item cancels any request in flight.
///
/// `Producer` implements `futures::stream::Stream`. It is also a `Future` resolving to the same
/// item, for callers that would rather `.await` it directly.
///
/// With both `StreamExt` and `FutureExt` in scope, combinators they share (`map`, `then`,
/// `boxed`, `fuse`, ...) are ambiguous on a `Producer`. Name the trait to pick one:
///
/// ```rust
/// # tokio_test::block_on(async {
/// use eonet::EventStatus;
/// use futures::{FutureExt, StreamExt};
///
/// let client = eonet::Client::new();
///
/// // A malformed endpoint produces one empty list without touching the network
/// let counts: Vec<usize> = StreamExt::map(
///     client.status_events(30, EventStatus::Open, "not an endpoint"),
///     |events| events.len(),
/// )
/// .collect()
/// .await;
/// assert_eq!(counts, [0]);
///
/// let count = FutureExt::map(
///     client.status_events(30, EventStatus::Closed, "not an endpoint"),
///     |events| events.len(),
/// )
/// .await;
/// assert_eq!(count, 0);
/// # })
/// ```
///
/// # Example
///
/// ```rust,no_run
/// # tokio_test::block_on(async {
/// use futures::StreamExt;
///
/// let client = eonet::Client::new();
/// let mut categories = client.categories();
///
/// while let Some(list) = categories.next().await {
///     for category in list {
///         println!("{}: {}", category.id, category.name);
///     }
/// }
/// # })
/// ```
#[must_use = "streams do nothing unless polled"]
pub struct Producer<F> {
    #[pin]
    future: F,
    done: bool,
}
}

impl<F: Future> Producer<F> {
    pub(crate) fn new(future: F) -> Self {
        Self {
            future,
            done: false,
        }
    }
}

impl<F: Future> futures::Stream for Producer<F> {
    type Item = F::Output;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        match this.future.poll(cx) {
            Poll::Ready(value) => {
                *this.done = true;
                Poll::Ready(Some(value))
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(1))
        }
    }
}

impl<F: Future> Future for Producer<F> {
    type Output = F::Output;

    /// Panics if the item was already produced.
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.done, "Producer polled after completion");

        let value = futures::ready!(this.future.poll(cx));
        *this.done = true;
        Poll::Ready(value)
    }
}

/// A [`Producer`] of the sorted category list.
pub type CategoryStream = Producer<Shared<BoxFuture<'static, Vec<Category>>>>;

/// A [`Producer`] of events.
pub type EventStream = Producer<BoxFuture<'static, Vec<Event>>>;

/// A [`Producer`] of a raw response body.
pub type FetchStream = Producer<BoxFuture<'static, Result<Bytes, Error>>>;

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{Stream, StreamExt};

    #[test]
    fn yields_once() {
        tokio_test::block_on(async {
            let mut producer = Box::pin(Producer::new(async { 7 }));
            assert_eq!(producer.size_hint(), (1, Some(1)));
            assert_eq!(producer.next().await, Some(7));
            assert_eq!(producer.next().await, None);
            assert_eq!(producer.next().await, None);
            assert_eq!(producer.size_hint(), (0, Some(0)));
        });
    }

    #[test]
    fn awaitable() {
        tokio_test::block_on(async {
            assert_eq!(Producer::new(async { "ok" }).await, "ok");
        });
    }

    #[test]
    fn lazy_until_polled() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let started = Arc::new(AtomicBool::new(false));
        let flag = started.clone();
        let producer = Producer::new(async move {
            flag.store(true, Ordering::SeqCst);
        });

        assert!(!started.load(Ordering::SeqCst));
        drop(producer);
        assert!(!started.load(Ordering::SeqCst));
    }
}
