//! Capability abstraction over platform permission backends.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CapabilityResult;
use crate::permission::{AuthorizationStatus, PermissionId};

/// The `{probe, invoke}` pair backing one permission category.
///
/// Implementations wrap whatever the platform offers for the category: a
/// native authorization query, a consent dialog, or a settings redirect.
#[async_trait]
pub trait PermissionCapability: Send + Sync {
    /// Report the category's current authorization state.
    ///
    /// Must resolve and must have no side effects. Backend-specific timeouts
    /// are the implementation's concern.
    async fn probe(&self) -> CapabilityResult<AuthorizationStatus>;

    /// Trigger the platform consent flow for the category.
    ///
    /// Resolves once the user has responded or the platform determined no
    /// prompt is necessary. The outcome is opaque to the coordinator; it
    /// never branches on grant versus deny.
    async fn invoke(&self) -> CapabilityResult<()>;
}

pub type SharedCapability = Arc<dyn PermissionCapability>;

/// Registry mapping identifiers to their platform backends.
///
/// Identifiers without an entry probe as
/// [`AuthorizationStatus::NotSupported`] and invoke as an instant no-op, so
/// the coordinator never branches by identifier.
#[derive(Default)]
pub struct CapabilityTable {
    entries: HashMap<PermissionId, SharedCapability>,
}

impl CapabilityTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register the backend for one identifier, replacing any previous entry.
    pub fn register(&mut self, id: PermissionId, capability: SharedCapability) {
        self.entries.insert(id, capability);
    }

    /// Look up the backend registered for `id`, if any.
    pub fn get(&self, id: PermissionId) -> Option<&SharedCapability> {
        self.entries.get(&id)
    }

    /// Probe `id`, falling back to `NotSupported` for unregistered identifiers.
    pub async fn probe(&self, id: PermissionId) -> CapabilityResult<AuthorizationStatus> {
        match self.entries.get(&id) {
            Some(capability) => capability.probe().await,
            None => Ok(AuthorizationStatus::NotSupported),
        }
    }

    /// Invoke the consent flow for `id`; a no-op for unregistered identifiers.
    pub async fn invoke(&self, id: PermissionId) -> CapabilityResult<()> {
        match self.entries.get(&id) {
            Some(capability) => capability.invoke().await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCapability {
        status: AuthorizationStatus,
    }

    #[async_trait]
    impl PermissionCapability for FixedCapability {
        async fn probe(&self) -> CapabilityResult<AuthorizationStatus> {
            Ok(self.status)
        }

        async fn invoke(&self) -> CapabilityResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn unregistered_id_probes_not_supported() {
        let table = CapabilityTable::new();
        let status = table.probe(PermissionId::Camera).await.expect("probe");
        assert_eq!(status, AuthorizationStatus::NotSupported);
    }

    #[tokio::test]
    async fn unregistered_id_invokes_as_noop() {
        let table = CapabilityTable::new();
        table.invoke(PermissionId::Camera).await.expect("invoke");
    }

    #[tokio::test]
    async fn registered_backend_answers_probe() {
        let mut table = CapabilityTable::new();
        table.register(
            PermissionId::Microphone,
            Arc::new(FixedCapability {
                status: AuthorizationStatus::Denied,
            }),
        );

        let status = table.probe(PermissionId::Microphone).await.expect("probe");
        assert_eq!(status, AuthorizationStatus::Denied);

        // Other identifiers keep the default entry behavior.
        let status = table.probe(PermissionId::Photos).await.expect("probe");
        assert_eq!(status, AuthorizationStatus::NotSupported);
    }

    #[tokio::test]
    async fn register_replaces_previous_entry() {
        let mut table = CapabilityTable::new();
        table.register(
            PermissionId::Camera,
            Arc::new(FixedCapability {
                status: AuthorizationStatus::Denied,
            }),
        );
        table.register(
            PermissionId::Camera,
            Arc::new(FixedCapability {
                status: AuthorizationStatus::Authorized,
            }),
        );

        let status = table.probe(PermissionId::Camera).await.expect("probe");
        assert_eq!(status, AuthorizationStatus::Authorized);
    }
}
