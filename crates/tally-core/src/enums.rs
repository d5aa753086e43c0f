//! Enumeration types used throughout the aggregator.

use serde::{Deserialize, Serialize};

/// Side an actor belongs to: two opposing factions plus a neutral bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Coalition {
    /// Indeterminate or unaligned. Tracked, but excluded from head-to-head
    /// reporting.
    #[default]
    Neutral,
    Red,
    Blue,
}

impl Coalition {
    /// All coalitions, in roster sweep order.
    pub const ALL: [Coalition; 3] = [Coalition::Neutral, Coalition::Red, Coalition::Blue];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Coalition::Neutral => "Neutral",
            Coalition::Red => "Red",
            Coalition::Blue => "Blue",
        }
    }
}

/// Discriminator of an inbound simulation event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A weapon left the rail.
    Shot,
    /// A weapon struck a target.
    Hit,
    /// A target was destroyed.
    Kill,
    Takeoff,
    Land,
    /// A unit was lost without an attributable killer.
    Crash,
    Eject,
    /// End of mission. Sole orderly shutdown trigger.
    SessionEnd,
    /// Anything the pipeline does not recognize. Discarded on arrival.
    #[default]
    Other,
}

impl EventKind {
    /// Display name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Shot => "SHOT",
            EventKind::Hit => "HIT",
            EventKind::Kill => "KILL",
            EventKind::Takeoff => "TAKEOFF",
            EventKind::Land => "LAND",
            EventKind::Crash => "CRASH",
            EventKind::Eject => "EJECT",
            EventKind::SessionEnd => "SESSION_END",
            EventKind::Other => "OTHER",
        }
    }
}

/// Which data source produced a resolved shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// A live weapon-to-launcher backlink was resolved.
    WeaponLauncher,
    /// Fell back to the event's recorded initiator.
    EventInitiator,
}

/// Severity tag on an outbound log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Event,
    Error,
    Debug,
}

impl LogLevel {
    /// Fixed-width tag as it appears between brackets in a log line.
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Event => "EVENT",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Pipeline lifecycle phase. The transition is one-way: once Finalizing,
/// the pipeline accepts no further events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Active,
    Finalizing,
}
