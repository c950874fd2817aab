use crate::{ActionTypes, ResourceName};
use std::marker::PhantomData;

/// Phase of a fetch round-trip, carrying the payload of the terminal phases.
///
/// Payloads are generic and passed through unvalidated; `D` is whatever the
/// data selector produces and `E` whatever the error selector produces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FetchKind<D, E> {
    Request,
    Success(D),
    Failure(E),
}

/// A dispatched action, tagged with the resource it belongs to.
///
/// Matching on [`FetchKind`] is exhaustive; the string identifier form is
/// still available through [`FetchAction::type_id`] for logging and interop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchAction<D, E> {
    resource: ResourceName,
    kind: FetchKind<D, E>,
}

impl<D, E> FetchAction<D, E> {
    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    pub fn kind(&self) -> &FetchKind<D, E> {
        &self.kind
    }

    pub fn into_kind(self) -> FetchKind<D, E> {
        self.kind
    }

    pub fn is_request(&self) -> bool {
        matches!(self.kind, FetchKind::Request)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, FetchKind::Success(_))
    }

    /// True exactly for failure actions; the payload is then error data.
    pub fn is_error(&self) -> bool {
        matches!(self.kind, FetchKind::Failure(_))
    }

    /// The string identifier of this action, e.g.
    /// `fetchduck/GET_REGIONS_REQUEST`.
    pub fn type_id(&self) -> String {
        let ids = ActionTypes::of(&self.resource);
        match self.kind {
            FetchKind::Request => ids.request,
            FetchKind::Success(_) => ids.success,
            FetchKind::Failure(_) => ids.failure,
        }
    }
}

/// Anything a store can dispatch. The label shows up in dispatch logs.
pub trait Action: Send + 'static {
    fn label(&self) -> String;
}

impl<D, E> Action for FetchAction<D, E>
where
    D: Send + 'static,
    E: Send + 'static,
{
    fn label(&self) -> String {
        self.type_id()
    }
}

/// Produces the three actions for one resource.
#[derive(Clone, Debug)]
pub struct ActionCreators<D, E> {
    resource: ResourceName,
    _payloads: PhantomData<fn() -> (D, E)>,
}

impl<D, E> ActionCreators<D, E> {
    pub fn new(resource: impl Into<ResourceName>) -> Self {
        ActionCreators {
            resource: resource.into(),
            _payloads: PhantomData,
        }
    }

    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// The API is about to be called.
    pub fn request(&self) -> FetchAction<D, E> {
        FetchAction {
            resource: self.resource.clone(),
            kind: FetchKind::Request,
        }
    }

    /// The call came back; `data` goes to the reducer unchanged.
    pub fn success(&self, data: D) -> FetchAction<D, E> {
        FetchAction {
            resource: self.resource.clone(),
            kind: FetchKind::Success(data),
        }
    }

    /// The call failed; `error` goes to the reducer unchanged.
    pub fn failure(&self, error: E) -> FetchAction<D, E> {
        FetchAction {
            resource: self.resource.clone(),
            kind: FetchKind::Failure(error),
        }
    }
}

/// Returns the request/success/failure creators for `resource`.
pub fn action_creators<D, E>(resource: impl Into<ResourceName>) -> ActionCreators<D, E> {
    ActionCreators::new(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types;

    #[test]
    fn test_request_action() {
        let actions = action_creators::<Vec<u32>, String>("regions");
        let action = actions.request();
        assert!(action.is_request());
        assert!(!action.is_error());
        assert_eq!(action.type_id(), types("regions").request);
        assert_eq!(action.kind(), &FetchKind::Request);
    }

    #[test]
    fn test_success_action_carries_data() {
        let actions = action_creators::<Vec<(u32, &str)>, String>("regions");
        let data = vec![(1, "Metropolitana"), (2, "Antofagasta")];
        let action = actions.success(data.clone());
        assert!(action.is_success());
        assert!(!action.is_error());
        assert_eq!(action.type_id(), types("regions").success);
        assert_eq!(action.kind(), &FetchKind::Success(data));
    }

    #[test]
    fn test_failure_action_carries_error() {
        let actions = action_creators::<Vec<u32>, String>("regions");
        let action = actions.failure("Not found".to_string());
        assert!(action.is_error());
        assert_eq!(action.type_id(), types("regions").failure);
        assert_eq!(action.kind(), &FetchKind::Failure("Not found".to_string()));
    }

    #[test]
    fn test_actions_of_different_resources_differ() {
        let regions = action_creators::<(), ()>("regions").request();
        let users = action_creators::<(), ()>("users").request();
        assert_ne!(regions, users);
        assert_ne!(regions.type_id(), users.type_id());
    }
}
