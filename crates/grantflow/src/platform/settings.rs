//! Settings-redirect capabilities for macOS.

use std::sync::Arc;

use async_trait::async_trait;

use crate::capability::{CapabilityTable, PermissionCapability};
use crate::error::{CapabilityError, CapabilityResult};
use crate::permission::{AuthorizationStatus, PermissionId};

/// Consent backend that opens the category's System Settings privacy pane.
///
/// macOS offers no generic query for these categories, so probing reports
/// `NotDetermined` and the category is presented once per flow. Invocation
/// opens the pane and resolves immediately; whatever the user does there is
/// outside the flow, matching the opaque-outcome contract.
pub struct SettingsPaneCapability {
    id: PermissionId,
}

impl SettingsPaneCapability {
    pub fn new(id: PermissionId) -> Self {
        Self { id }
    }
}

#[async_trait]
impl PermissionCapability for SettingsPaneCapability {
    async fn probe(&self) -> CapabilityResult<AuthorizationStatus> {
        Ok(AuthorizationStatus::NotDetermined)
    }

    async fn invoke(&self) -> CapabilityResult<()> {
        let id = self.id;
        tokio::task::spawn_blocking(move || {
            grantflow_platform_macos::open_privacy_pane(id.as_str())
        })
        .await
        .map_err(|error| CapabilityError::InvokeFailed(error.to_string()))?
        .map_err(CapabilityError::InvokeFailed)
    }
}

pub(super) fn macos_capabilities() -> CapabilityTable {
    let mut table = CapabilityTable::new();
    for id in PermissionId::ALL {
        table.register(id, Arc::new(SettingsPaneCapability::new(id)));
    }
    table
}
