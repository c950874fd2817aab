use std::fmt;

/// Name of a domain resource whose fetch lifecycle is tracked.
///
/// The name is canonicalized to uppercase at construction, so `"regions"`
/// and `"Regions"` identify the same resource and yield identical action
/// identifiers. An empty name is accepted as-is and produces identifiers
/// with an empty resource segment (`fetchduck/GET__REQUEST`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(name: impl Into<String>) -> Self {
        ResourceName(name.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        ResourceName::new(name)
    }
}

impl From<String> for ResourceName {
    fn from(name: String) -> Self {
        ResourceName::new(name)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three action identifiers derived from one resource name.
///
/// Identifiers are namespaced with the library prefix so they cannot collide
/// with unrelated identifiers in a consuming application.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTypes {
    pub request: String,
    pub success: String,
    pub failure: String,
}

impl ActionTypes {
    pub fn of(resource: &ResourceName) -> Self {
        ActionTypes {
            request: format!("fetchduck/GET_{}_REQUEST", resource.as_str()),
            success: format!("fetchduck/GET_{}_SUCCESS", resource.as_str()),
            failure: format!("fetchduck/GET_{}_FAILURE", resource.as_str()),
        }
    }
}

/// Returns the request/success/failure identifiers for `resource`.
pub fn types(resource: impl Into<ResourceName>) -> ActionTypes {
    ActionTypes::of(&resource.into())
}
