//! Identity and attribution types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN;
use crate::enums::{Coalition, Provenance};

/// Composite identity of a controller.
///
/// Controller name alone is not unique across a session — the same player
/// can fly several airframes in sequence — so records are keyed by
/// controller plus designation. Two controllers momentarily sharing a
/// generic designation can still collide; this is a known limitation of the
/// keying scheme, not silently papered over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorKey {
    pub controller: String,
    pub designation: String,
}

impl ActorKey {
    pub fn new(controller: impl Into<String>, designation: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            designation: designation.into(),
        }
    }
}

impl fmt::Display for ActorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.controller, self.designation)
    }
}

/// Immutable view of an actor, derived fresh per lookup.
///
/// Actors can be destroyed between lookups, so snapshots are never cached
/// beyond the processing of a single event. Every field always holds a
/// defined value; absence is expressed with the AI / Unknown / Neutral
/// sentinels, never by omission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    /// Human display name, or the configured AI sentinel.
    pub controller: String,
    /// Callsign when available, else the raw type identifier. Never empty.
    pub designation: String,
    pub affiliation: Coalition,
    /// Formation the actor belongs to, `"Unknown"` when unreadable.
    pub group: String,
    /// Whether the underlying handle was resolvable and live at lookup time.
    pub exists: bool,
}

impl ActorSnapshot {
    /// Snapshot for an absent or dead handle.
    pub fn unknown() -> Self {
        Self {
            controller: UNKNOWN.to_string(),
            designation: UNKNOWN.to_string(),
            affiliation: Coalition::Neutral,
            group: UNKNOWN.to_string(),
            exists: false,
        }
    }

    /// Stable identity key for statistics and roster membership.
    pub fn key(&self) -> ActorKey {
        ActorKey::new(self.controller.clone(), self.designation.clone())
    }

    /// Live and operated by a human controller.
    pub fn is_human(&self, ai_sentinel: &str) -> bool {
        self.exists && self.controller != ai_sentinel && self.controller != UNKNOWN
    }
}

impl fmt::Display for ActorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.controller, self.designation)
    }
}

/// Output of shooter attribution for HIT/KILL events.
///
/// `provenance` is `WeaponLauncher` only when a live weapon-to-launcher
/// backlink was actually resolved; otherwise it is `EventInitiator`, even
/// when that source degraded to the unknown snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionResult {
    pub actor: ActorSnapshot,
    pub provenance: Provenance,
}
