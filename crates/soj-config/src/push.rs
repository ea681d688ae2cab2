//! Push-notification registration configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PushConfig {
    /// Platform identifier sent to the registration endpoint
    /// (e.g., `ios`, `android`, `cli`).
    #[serde(default)]
    pub platform: String,

    /// Stable device identifier. Required for register/unregister.
    #[serde(default)]
    pub device_id: String,
}

impl PushConfig {
    /// Check if push registration can be performed.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.platform.is_empty() && !self.device_id.is_empty()
    }
}
