//! Runtime configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AI_SENTINEL, DEFAULT_POLL_INTERVAL_SECS};

/// Aggregator configuration.
///
/// Every field carries a serde default, so a partial JSON document (or none
/// at all) yields a working setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Verbose notification and DEBUG-level log output.
    pub debug_enabled: bool,
    /// Roster reconciliation cadence in simulated seconds.
    pub roster_poll_interval_secs: f64,
    /// Controller value reported for units with no human player.
    pub ai_controller_sentinel: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            debug_enabled: true,
            roster_poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            ai_controller_sentinel: DEFAULT_AI_SENTINEL.to_string(),
        }
    }
}
