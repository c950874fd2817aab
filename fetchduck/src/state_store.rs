use crate::{Action, Reducer, State, StoreError};
use futures_signals::signal::{Mutable, MutableSignalCloned, SignalExt, SignalStream};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Unidirectional state store: actions go in through a single serialized
/// dispatch queue, reduced state comes out as a signal.
///
/// A spawned task drains the queue and applies the reducer one action at a
/// time, so every dispatch observes the state left by the previous one.
pub struct StateStore<S: State, A: Action> {
    state: Mutable<S>,
    action_tx: UnboundedSender<A>,
    with_state_tx: UnboundedSender<Box<dyn FnOnce(S) + Send>>,
}

impl<S: State, A: Action> StateStore<S, A> {
    pub fn new<R>(initial_state: S, reducer: R) -> Self
    where
        R: Reducer<A, State = S> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let (action_tx, action_rx) = tokio::sync::mpsc::unbounded_channel::<A>();
        let (with_state_tx, with_state_rx) =
            tokio::sync::mpsc::unbounded_channel::<Box<dyn FnOnce(S) + Send>>();

        let state_clone = state.clone();

        tokio::spawn(async move {
            Self::process_queue(state_clone, reducer, action_rx, with_state_rx).await;
        });

        StateStore {
            state,
            action_tx,
            with_state_tx,
        }
    }

    async fn process_queue<R>(
        state: Mutable<S>,
        reducer: R,
        mut action_rx: UnboundedReceiver<A>,
        mut with_state_rx: UnboundedReceiver<Box<dyn FnOnce(S) + Send>>,
    ) where
        R: Reducer<A, State = S> + Send + 'static,
    {
        loop {
            tokio::select! {
                biased;
                Some(action) = action_rx.recv() => {
                    tracing::debug!(action = %action.label(), "applying action");
                    let new_state = reducer.reduce(state.get_cloned(), &action);
                    state.set(new_state);
                }
                Some(observer) = with_state_rx.recv() => {
                    observer(state.get_cloned());
                }
                else => break,
            }
        }
    }

    /// Queues `action` for the dispatch task.
    pub fn dispatch(&self, action: A) {
        if self.action_tx.send(action).is_err() {
            tracing::warn!("dispatch dropped, store task has stopped");
        }
    }

    /// A cloneable handle that dispatches from other tasks.
    pub fn dispatcher(&self) -> Dispatcher<A> {
        Dispatcher {
            action_tx: self.action_tx.clone(),
        }
    }

    pub fn to_stream(&self) -> SignalStream<MutableSignalCloned<S>> {
        self.state.signal_cloned().to_stream()
    }

    pub fn to_signal(&self) -> MutableSignalCloned<S> {
        self.state.signal_cloned()
    }

    pub fn get_state(&self) -> S {
        self.state.get_cloned()
    }

    /// Resolves with the state once everything queued ahead of this call has
    /// been applied.
    pub async fn await_state(&self) -> Result<S, StoreError> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let _ = self.with_state_tx.send(Box::new(|state| {
            let _ = tx.send(state);
        }));
        rx.await.map_err(|_| StoreError::Closed)
    }
}

/// Dispatch handle detached from the store, for moving into thunks and
/// spawned tasks.
pub struct Dispatcher<A: Action> {
    action_tx: UnboundedSender<A>,
}

impl<A: Action> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Dispatcher {
            action_tx: self.action_tx.clone(),
        }
    }
}

impl<A: Action> Dispatcher<A> {
    pub fn dispatch(&self, action: A) {
        if self.action_tx.send(action).is_err() {
            tracing::warn!("dispatch dropped, store task has stopped");
        }
    }
}
