//! Platform detection for modifier mapping and label formatting.
//!
//! The matcher and the label formatter only distinguish three buckets:
//! Mac-like (Cmd is the accelerator and reports as meta), Windows (the Win
//! key reports as meta), and everything else.

use serde::{Deserialize, Serialize};

/// Platform bucket a dispatcher runs under.
///
/// Detected once at startup via [`Platform::current`] and carried by the
/// dispatcher; tests and UI previews override it freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS-style environments where Cmd is the accelerator.
    #[serde(rename = "mac")]
    MacLike,
    Windows,
    /// Linux and anything else.
    Other,
}

impl Platform {
    /// Detect the platform the process is running on.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacLike
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Other
        }
    }

    pub fn is_mac_like(self) -> bool {
        matches!(self, Platform::MacLike)
    }

    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }
}
