//! Presentation descriptor for a single permission screen.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id::PermissionId;

/// Everything a presentation layer needs to render one permission screen.
///
/// Icon and title default to the identifier's static metadata; both can be
/// overridden for app-specific copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    pub id: Uuid,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub permission: PermissionId,
}

impl PermissionRequest {
    /// Build a descriptor with the identifier's default icon and title.
    pub fn new(permission: PermissionId, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon: permission.icon().to_string(),
            title: permission.label().to_string(),
            description: description.into(),
            permission,
        }
    }

    /// Build a descriptor with fully custom copy.
    pub fn with_copy(
        permission: PermissionId,
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
            permission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_identifier_metadata() {
        let request = PermissionRequest::new(
            PermissionId::Notifications,
            "Enable notifications to get reminders and important updates.",
        );
        assert_eq!(request.icon, "bell.badge");
        assert_eq!(request.title, "Notifications");
        assert_eq!(request.permission, PermissionId::Notifications);
    }

    #[test]
    fn with_copy_overrides_metadata() {
        let request = PermissionRequest::with_copy(
            PermissionId::Camera,
            "camera.aperture",
            "Scan documents",
            "The camera is used to scan paper documents.",
        );
        assert_eq!(request.icon, "camera.aperture");
        assert_eq!(request.title, "Scan documents");
    }

    #[test]
    fn descriptors_get_distinct_ids() {
        let a = PermissionRequest::new(PermissionId::Photos, "x");
        let b = PermissionRequest::new(PermissionId::Photos, "x");
        assert_ne!(a.id, b.id);
    }
}
