//! Authorization status reported by status probes.

use serde::{Deserialize, Serialize};

/// The five-way outcome of probing a category's current grant state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    Authorized,
    Denied,
    NotDetermined,
    Restricted,
    NotSupported,
}

impl AuthorizationStatus {
    /// Whether this status needs no user decision.
    ///
    /// Resolved categories are dequeued by the scan loop without ever being
    /// surfaced to the caller: `Authorized` needs nothing further, and
    /// `Restricted` cannot be changed by a consent prompt.
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            AuthorizationStatus::Authorized | AuthorizationStatus::Restricted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_authorized_and_restricted_are_resolved() {
        assert!(AuthorizationStatus::Authorized.is_resolved());
        assert!(AuthorizationStatus::Restricted.is_resolved());
        assert!(!AuthorizationStatus::Denied.is_resolved());
        assert!(!AuthorizationStatus::NotDetermined.is_resolved());
        assert!(!AuthorizationStatus::NotSupported.is_resolved());
    }
}
