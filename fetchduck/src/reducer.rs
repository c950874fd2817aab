use crate::{FetchAction, FetchKind, ResourceName, State};
use std::marker::PhantomData;

/// Fetch state of one resource: the data/loading/error triple.
///
/// Starts out as `{ data: None, loading: false, error: None }` and only
/// moves through actions carrying this resource's tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchState<D, E> {
    pub data: Option<D>,
    pub loading: bool,
    pub error: Option<E>,
}

impl<D, E> Default for FetchState<D, E> {
    fn default() -> Self {
        FetchState {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<D, E> FetchState<D, E> {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A terminal action has arrived and no request is in flight.
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn data_ref(&self) -> Option<&D> {
        self.data.as_ref()
    }
}

impl<D, E> State for FetchState<D, E>
where
    D: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
}

/// A pure state-update function over `A`-typed actions.
///
/// `reduce` must return the state unchanged for actions it does not handle.
pub trait Reducer<A> {
    type State;

    fn reduce(&self, state: Self::State, action: &A) -> Self::State;
}

/// Folds one resource's fetch actions into [`FetchState`].
///
/// The three slices are independent pure updates, exposed separately so they
/// can be reused inside a larger reducer; [`Reducer::reduce`] applies all
/// three. Actions tagged with another resource leave every slice untouched.
#[derive(Clone, Debug)]
pub struct FetchReducer<D, E> {
    resource: ResourceName,
    _payloads: PhantomData<fn() -> (D, E)>,
}

impl<D: Clone, E: Clone> FetchReducer<D, E> {
    pub fn new(resource: impl Into<ResourceName>) -> Self {
        FetchReducer {
            resource: resource.into(),
            _payloads: PhantomData,
        }
    }

    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// `data` slice: set on success, otherwise untouched.
    pub fn data(&self, state: Option<D>, action: &FetchAction<D, E>) -> Option<D> {
        if action.resource() != &self.resource {
            return state;
        }
        match action.kind() {
            FetchKind::Success(data) => Some(data.clone()),
            FetchKind::Request | FetchKind::Failure(_) => state,
        }
    }

    /// `loading` slice: raised by request, dropped by either terminal action.
    pub fn loading(&self, state: bool, action: &FetchAction<D, E>) -> bool {
        if action.resource() != &self.resource {
            return state;
        }
        match action.kind() {
            FetchKind::Request => true,
            FetchKind::Success(_) | FetchKind::Failure(_) => false,
        }
    }

    /// `error` slice: set on failure, cleared on success, untouched by
    /// request.
    pub fn error(&self, state: Option<E>, action: &FetchAction<D, E>) -> Option<E> {
        if action.resource() != &self.resource {
            return state;
        }
        match action.kind() {
            FetchKind::Failure(error) => Some(error.clone()),
            FetchKind::Success(_) => None,
            FetchKind::Request => state,
        }
    }

    /// Merges caller reducers beside the fetch slice.
    ///
    /// `extras` may be a single [`Reducer`], a tuple of up to four, or `()`;
    /// every entry sees every action and owns one slot of
    /// [`ResourceState::extras`]. Callers wanting named fields implement
    /// [`Reducer`] on their own state struct instead of a tuple.
    pub fn combine<R>(self, extras: R) -> CombinedReducer<D, E, R>
    where
        R: Reducer<FetchAction<D, E>>,
    {
        CombinedReducer {
            fetch: self,
            extras,
        }
    }
}

impl<D: Clone, E: Clone> Reducer<FetchAction<D, E>> for FetchReducer<D, E> {
    type State = FetchState<D, E>;

    fn reduce(&self, state: FetchState<D, E>, action: &FetchAction<D, E>) -> FetchState<D, E> {
        FetchState {
            data: self.data(state.data, action),
            loading: self.loading(state.loading, action),
            error: self.error(state.error, action),
        }
    }
}

/// Returns the fetch reducer for `resource`; chain [`FetchReducer::combine`]
/// to merge additional reducers into the same dispatch cycle.
pub fn with_fetch<D: Clone, E: Clone>(resource: impl Into<ResourceName>) -> FetchReducer<D, E> {
    FetchReducer::new(resource)
}

/// Composite state for a fetch slice plus caller-owned extras.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceState<D, E, X> {
    pub fetch: FetchState<D, E>,
    pub extras: X,
}

impl<D, E, X: Default> Default for ResourceState<D, E, X> {
    fn default() -> Self {
        ResourceState {
            fetch: FetchState::default(),
            extras: X::default(),
        }
    }
}

impl<D, E, X> State for ResourceState<D, E, X>
where
    D: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    X: Clone + Send + Sync + 'static,
{
}

/// Runs the fetch reducer and the extra reducers side by side in one
/// dispatch cycle. Built by [`FetchReducer::combine`].
#[derive(Clone, Debug)]
pub struct CombinedReducer<D, E, R> {
    fetch: FetchReducer<D, E>,
    extras: R,
}

impl<D, E, R> Reducer<FetchAction<D, E>> for CombinedReducer<D, E, R>
where
    D: Clone,
    E: Clone,
    R: Reducer<FetchAction<D, E>>,
{
    type State = ResourceState<D, E, R::State>;

    fn reduce(&self, state: Self::State, action: &FetchAction<D, E>) -> Self::State {
        ResourceState {
            fetch: self.fetch.reduce(state.fetch, action),
            extras: self.extras.reduce(state.extras, action),
        }
    }
}

impl<A> Reducer<A> for () {
    type State = ();

    fn reduce(&self, _state: (), _action: &A) {}
}

macro_rules! reducer_tuples {
    ($(($($name:ident $idx:tt),+))+) => {
        $(
            impl<A, $($name: Reducer<A>),+> Reducer<A> for ($($name,)+) {
                type State = ($($name::State,)+);

                fn reduce(&self, state: Self::State, action: &A) -> Self::State {
                    ($(self.$idx.reduce(state.$idx, action),)+)
                }
            }
        )+
    };
}

reducer_tuples! {
    (R1 0)
    (R1 0, R2 1)
    (R1 0, R2 1, R3 2)
    (R1 0, R2 1, R3 2, R4 3)
}

/// Adapts a plain function into a [`Reducer`].
#[derive(Clone, Debug)]
pub struct FnReducer<S, F> {
    f: F,
    _state: PhantomData<fn(S) -> S>,
}

/// Wraps `f` so closures can participate in reducer composition.
pub fn fn_reducer<S, A, F>(f: F) -> FnReducer<S, F>
where
    F: Fn(S, &A) -> S,
{
    FnReducer {
        f,
        _state: PhantomData,
    }
}

impl<S, A, F> Reducer<A> for FnReducer<S, F>
where
    F: Fn(S, &A) -> S,
{
    type State = S;

    fn reduce(&self, state: S, action: &A) -> S {
        (self.f)(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_creators;

    type Data = Vec<&'static str>;
    type Error = String;

    fn reducer() -> FetchReducer<Data, Error> {
        with_fetch("regions")
    }

    #[test]
    fn test_initial_state() {
        let state: FetchState<Data, Error> = FetchState::default();
        assert_eq!(state.data, None);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert!(!state.is_settled());
    }

    #[test]
    fn test_request_raises_loading_only() {
        let actions = action_creators::<Data, Error>("regions");
        let state = reducer().reduce(FetchState::default(), &actions.request());
        assert!(state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_success_sets_data_and_clears_error() {
        let actions = action_creators::<Data, Error>("regions");
        let loading = reducer().reduce(FetchState::default(), &actions.request());
        let prior = FetchState {
            error: Some("stale".to_string()),
            ..loading
        };
        let state = reducer().reduce(prior, &actions.success(vec!["Metropolitana"]));
        assert_eq!(state.data, Some(vec!["Metropolitana"]));
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert!(state.is_settled());
    }

    #[test]
    fn test_failure_sets_error_and_keeps_data() {
        let actions = action_creators::<Data, Error>("regions");
        let prior = FetchState {
            data: Some(vec!["Metropolitana"]),
            loading: true,
            error: None,
        };
        let state = reducer().reduce(prior, &actions.failure("Bad request".to_string()));
        assert_eq!(state.error, Some("Bad request".to_string()));
        assert!(!state.loading);
        assert_eq!(state.data, Some(vec!["Metropolitana"]));
        assert!(state.has_error());
    }

    #[test]
    fn test_foreign_resource_actions_are_ignored() {
        let actions = action_creators::<Data, Error>("users");
        let prior = FetchState {
            data: Some(vec!["Metropolitana"]),
            loading: true,
            error: None,
        };
        let state = reducer().reduce(prior.clone(), &actions.request());
        assert_eq!(state, prior);
        let state = reducer().reduce(prior.clone(), &actions.success(vec!["other"]));
        assert_eq!(state, prior);
        let state = reducer().reduce(prior.clone(), &actions.failure("nope".to_string()));
        assert_eq!(state, prior);
    }

    #[test]
    fn test_combine_merges_extras_in_one_cycle() {
        let requests_seen = fn_reducer(|count: u32, action: &FetchAction<Data, Error>| {
            if action.is_request() {
                count + 1
            } else {
                count
            }
        });
        let last_type = fn_reducer(|_: Option<String>, action: &FetchAction<Data, Error>| {
            Some(action.type_id())
        });
        let combined = reducer().combine((requests_seen, last_type));
        let actions = action_creators::<Data, Error>("regions");

        let state = ResourceState::default();
        assert_eq!(state.extras, (0, None));

        let state = combined.reduce(state, &actions.request());
        assert!(state.fetch.loading);
        assert_eq!(state.extras.0, 1);

        let state = combined.reduce(state, &actions.success(vec!["Metropolitana"]));
        assert_eq!(state.fetch.data, Some(vec!["Metropolitana"]));
        assert_eq!(state.extras.0, 1);
        assert_eq!(state.extras.1, Some(types_success()));
    }

    fn types_success() -> String {
        crate::types("regions").success
    }

    #[test]
    fn test_unit_extras() {
        let combined = reducer().combine(());
        let actions = action_creators::<Data, Error>("regions");
        let state = combined.reduce(ResourceState::default(), &actions.request());
        assert!(state.fetch.loading);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_fetch_state_serializes() {
        let state = FetchState::<Vec<&'static str>, String> {
            data: Some(vec!["Metropolitana"]),
            loading: false,
            error: None,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"data":["Metropolitana"],"loading":false,"error":null}"#);
    }
}
