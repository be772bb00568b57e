// SPDX-License-Identifier: MIT

//! The closed `{Param, Secret}` service enum and the per-service container
//! used everywhere the spec calls for a `map<Service, _>`.

use serde::{Deserialize, Serialize};

/// Closed enum of the two services a scope stages independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Param,
    Secret,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Param, Service::Secret];

    pub fn as_str(self) -> &'static str {
        match self {
            Service::Param => "param",
            Service::Secret => "secret",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Service {
    type Err = UnknownServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "param" => Ok(Service::Param),
            "secret" => Ok(Service::Secret),
            other => Err(UnknownServiceError(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown service: {0}")]
pub struct UnknownServiceError(pub String);

/// A value held per service. `Service` is a closed two-variant enum, so a
/// `map<Service, T>` from the spec is represented as a plain struct rather
/// than a `HashMap` keyed by an enum — this keeps every lookup infallible
/// and serializes naturally to `{"param": ..., "secret": ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerService<T> {
    #[serde(default = "Default::default")]
    pub param: T,
    #[serde(default = "Default::default")]
    pub secret: T,
}

impl<T: Default> PerService<T> {
    pub fn get(&self, service: Service) -> &T {
        match service {
            Service::Param => &self.param,
            Service::Secret => &self.secret,
        }
    }

    pub fn get_mut(&mut self, service: Service) -> &mut T {
        match service {
            Service::Param => &mut self.param,
            Service::Secret => &mut self.secret,
        }
    }
}

impl<T> PerService<T> {
    /// Run `f` over both services in a stable order.
    pub fn for_each(&self, mut f: impl FnMut(Service, &T)) {
        f(Service::Param, &self.param);
        f(Service::Secret, &self.secret);
    }
}
