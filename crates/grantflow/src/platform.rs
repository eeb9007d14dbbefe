//! Default platform wiring for the capability table.

#[cfg(target_os = "macos")]
mod settings;

#[cfg(target_os = "macos")]
pub use settings::SettingsPaneCapability;

use crate::capability::CapabilityTable;

/// Build the capability table for the current platform.
///
/// On macOS every category is backed by a settings-redirect capability (see
/// [`SettingsPaneCapability`]). On other platforms the table is empty, so
/// every category probes as `NotSupported` and invokes as a no-op. Apps with
/// native backends register their own capabilities on top of (or instead of)
/// this table.
pub fn default_capabilities() -> CapabilityTable {
    #[cfg(target_os = "macos")]
    {
        settings::macos_capabilities()
    }

    #[cfg(not(target_os = "macos"))]
    {
        CapabilityTable::new()
    }
}
