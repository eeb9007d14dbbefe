//! The closed set of requestable consent categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry from the closed set of requestable consent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionId {
    Notifications,
    Tracking,
    Camera,
    Photos,
    Microphone,
    LocationWhenInUse,
    LocationAlways,
}

impl PermissionId {
    /// Every identifier, in declaration order.
    pub const ALL: [PermissionId; 7] = [
        PermissionId::Notifications,
        PermissionId::Tracking,
        PermissionId::Camera,
        PermissionId::Photos,
        PermissionId::Microphone,
        PermissionId::LocationWhenInUse,
        PermissionId::LocationAlways,
    ];

    /// Human-readable title for permission screens.
    pub fn label(&self) -> &'static str {
        match self {
            PermissionId::Notifications => "Notifications",
            PermissionId::Tracking => "App Tracking",
            PermissionId::Camera => "Camera",
            PermissionId::Photos => "Photos",
            PermissionId::Microphone => "Microphone",
            PermissionId::LocationWhenInUse => "Location (While Using)",
            PermissionId::LocationAlways => "Location (Always)",
        }
    }

    /// Symbolic icon name associated with the category.
    pub fn icon(&self) -> &'static str {
        match self {
            PermissionId::Notifications => "bell.badge",
            PermissionId::Tracking => "hand.point.up.left",
            PermissionId::Camera => "camera.fill",
            PermissionId::Photos => "photo.on.rectangle",
            PermissionId::Microphone => "mic.fill",
            PermissionId::LocationWhenInUse | PermissionId::LocationAlways => "location.fill",
        }
    }

    /// Stable string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionId::Notifications => "notifications",
            PermissionId::Tracking => "tracking",
            PermissionId::Camera => "camera",
            PermissionId::Photos => "photos",
            PermissionId::Microphone => "microphone",
            PermissionId::LocationWhenInUse => "location-when-in-use",
            PermissionId::LocationAlways => "location-always",
        }
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_metadata() {
        for id in PermissionId::ALL {
            assert!(!id.label().is_empty());
            assert!(!id.icon().is_empty());
        }
    }

    #[test]
    fn display_matches_serde_form() {
        let json = serde_json::to_string(&PermissionId::LocationWhenInUse).expect("serialize");
        assert_eq!(json, format!("\"{}\"", PermissionId::LocationWhenInUse));
    }

    #[test]
    fn location_variants_share_an_icon() {
        assert_eq!(
            PermissionId::LocationWhenInUse.icon(),
            PermissionId::LocationAlways.icon()
        );
    }
}
