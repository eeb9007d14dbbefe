//! Permission identifiers, authorization statuses, and request descriptors.

pub mod id;
pub mod request;
pub mod status;

pub use id::PermissionId;
pub use request::PermissionRequest;
pub use status::AuthorizationStatus;
