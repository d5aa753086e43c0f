//! Sentinel values and session defaults.

/// Placeholder for any value that could not be resolved from the simulation.
/// Absence is always expressed with this sentinel, never by omission.
pub const UNKNOWN: &str = "Unknown";

/// Default controller value reported for units with no human player.
pub const DEFAULT_AI_SENTINEL: &str = "AI";

/// Default roster reconciliation cadence in simulated seconds.
///
/// Responsive enough for session reporting while keeping the cost of a full
/// population sweep bounded.
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 5.0;

/// Place name used when a takeoff/landing location cannot be resolved.
pub const UNKNOWN_PLACE: &str = "the field";
