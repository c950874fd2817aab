use crate::{ActionCreators, FetchAction, Identity, ResourceName, Selector};
use std::future::Future;

/// Orchestrates one fetch round-trip: a request action, the caller-supplied
/// operation, then the matching terminal action.
///
/// Built by [`thunk_creator`]; selectors default to [`Identity`] and can be
/// replaced with the builder methods. A thunk holds no mutable state and can
/// run any number of independent invocations.
pub struct FetchThunk<Api, Ds = Identity, Es = Identity> {
    resource: ResourceName,
    call_api: Api,
    data_selector: Ds,
    error_selector: Es,
}

/// Creates the fetch thunk for `resource` around `call_api`.
pub fn thunk_creator<Api>(resource: impl Into<ResourceName>, call_api: Api) -> FetchThunk<Api> {
    FetchThunk {
        resource: resource.into(),
        call_api,
        data_selector: Identity,
        error_selector: Identity,
    }
}

impl<Api, Ds, Es> FetchThunk<Api, Ds, Es> {
    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// Replaces the data selector applied to the operation's success value.
    pub fn with_data_selector<Ds2>(self, data_selector: Ds2) -> FetchThunk<Api, Ds2, Es> {
        FetchThunk {
            resource: self.resource,
            call_api: self.call_api,
            data_selector,
            error_selector: self.error_selector,
        }
    }

    /// Replaces the error selector applied to the operation's error value.
    pub fn with_error_selector<Es2>(self, error_selector: Es2) -> FetchThunk<Api, Ds, Es2> {
        FetchThunk {
            resource: self.resource,
            call_api: self.call_api,
            data_selector: self.data_selector,
            error_selector,
        }
    }

    /// Runs one round-trip, feeding actions to `dispatch`.
    ///
    /// The request action is dispatched before the operation is started, so
    /// it is observable before the first suspension point. `args` is handed
    /// to the operation unmodified; pass a tuple to forward several values.
    /// Exactly two dispatches happen per invocation and the returned future
    /// resolves only after the second one; it never errors, since an
    /// operation failure becomes the failure action rather than propagating.
    pub async fn run<Args, Fut, R, Err, F>(&self, args: Args, mut dispatch: F)
    where
        Api: Fn(Args) -> Fut,
        Fut: Future<Output = Result<R, Err>>,
        Ds: Selector<R>,
        Es: Selector<Err>,
        F: FnMut(FetchAction<Ds::Out, Es::Out>),
    {
        let actions = ActionCreators::new(self.resource.clone());
        dispatch(actions.request());
        match (self.call_api)(args).await {
            Ok(res) => dispatch(actions.success(self.data_selector.select(res))),
            Err(err) => dispatch(actions.failure(self.error_selector.select(err))),
        }
    }
}
