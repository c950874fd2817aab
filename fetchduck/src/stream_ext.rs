use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::stream::Stream;
use pin_project::pin_project;

/// Extra adapters for state streams.
pub trait FetchStreamExt: Stream {
    /// Resolves with the first item the predicate accepts, or `None` if the
    /// stream ends first.
    ///
    /// The usual way to wait for a fetch round-trip to finish:
    ///
    /// ```ignore
    /// let settled = store
    ///     .to_stream()
    ///     .first_match(|state: &FetchState<_, _>| state.is_settled())
    ///     .await;
    /// ```
    fn first_match<F>(self, test: F) -> FirstMatch<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
        Self: Sized,
    {
        FirstMatch { stream: self, test }
    }
}

impl<T: ?Sized> FetchStreamExt for T where T: Stream {}

/// Future returned by [`FetchStreamExt::first_match`].
#[pin_project]
#[must_use = "futures do nothing unless awaited"]
pub struct FirstMatch<St, F> {
    #[pin]
    stream: St,
    test: F,
}

impl<St, F> Future for FirstMatch<St, F>
where
    St: Stream,
    F: FnMut(&St::Item) -> bool,
{
    type Output = Option<St::Item>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    if (this.test)(&item) {
                        return Poll::Ready(Some(item));
                    }
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn test_first_match_resolves_on_first_accepted_item() {
        let found = stream::iter([1, 2, 3, 4]).first_match(|n| *n > 2).await;
        assert_eq!(found, Some(3));
    }

    #[tokio::test]
    async fn test_first_match_is_none_when_the_stream_ends() {
        let found = stream::iter([1, 2]).first_match(|n| *n > 2).await;
        assert_eq!(found, None);
    }
}
