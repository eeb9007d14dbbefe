//! macOS System Settings shell-outs backing the settings-redirect consent
//! flow.

use std::process::Command;

/// Open the System Settings privacy pane for `permission`.
///
/// `permission` is one of grantflow's stable identifier strings (the
/// `PermissionId::as_str` form). Both location variants share the Location
/// Services pane.
pub fn open_privacy_pane(permission: &str) -> Result<(), String> {
    let Some(url) = pane_url(permission) else {
        return Err("unsupported permission".to_string());
    };

    let status = Command::new("open")
        .arg(url)
        .status()
        .map_err(|error| format!("failed to open system settings: {error}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("failed to open system settings (status {status})"))
    }
}

fn pane_url(permission: &str) -> Option<&'static str> {
    match permission {
        "notifications" => Some("x-apple.systempreferences:com.apple.preference.notifications"),
        "tracking" => {
            Some("x-apple.systempreferences:com.apple.preference.security?Privacy_Advertising")
        }
        "camera" => {
            Some("x-apple.systempreferences:com.apple.preference.security?Privacy_Camera")
        }
        "photos" => {
            Some("x-apple.systempreferences:com.apple.preference.security?Privacy_Photos")
        }
        "microphone" => {
            Some("x-apple.systempreferences:com.apple.preference.security?Privacy_Microphone")
        }
        "location-when-in-use" | "location-always" => Some(
            "x-apple.systempreferences:com.apple.preference.security?Privacy_LocationServices",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_permissions_map_to_panes() {
        for permission in [
            "notifications",
            "tracking",
            "camera",
            "photos",
            "microphone",
            "location-when-in-use",
            "location-always",
        ] {
            assert!(pane_url(permission).is_some(), "{permission}");
        }
    }

    #[test]
    fn location_variants_share_a_pane() {
        assert_eq!(pane_url("location-when-in-use"), pane_url("location-always"));
    }

    #[test]
    fn unknown_permission_has_no_pane() {
        assert_eq!(pane_url("screen-recording"), None);
    }
}
