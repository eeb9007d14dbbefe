pub mod capability;
pub mod coordinator;
pub mod error;
pub mod permission;
pub mod platform;

pub use crate::capability::{CapabilityTable, PermissionCapability, SharedCapability};
pub use crate::coordinator::PermissionCoordinator;
pub use crate::error::{CapabilityError, CapabilityResult};
pub use crate::permission::{AuthorizationStatus, PermissionId, PermissionRequest};
pub use crate::platform::default_capabilities;
