//! Roster tracking — polling reconciliation of active human controllers.
//!
//! The simulation's own join/leave notifications are unreliable in headless
//! deployments, so the roster is rebuilt from a full population sweep each
//! interval and diffed against the previous sweep. Presence is binary per
//! pass; detection latency is bounded by the poll interval.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tally_core::config::TelemetryConfig;
use tally_core::enums::Coalition;
use tally_core::sim::WorldAccess;
use tally_core::types::{ActorKey, ActorSnapshot};

use crate::access;
use crate::resolve::resolve_actor;

/// One currently-active human controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub key: ActorKey,
    pub affiliation: Coalition,
    pub designation: String,
    /// Formation, carried so a join can seed group membership.
    pub group: String,
}

impl RosterEntry {
    fn from_snapshot(snap: &ActorSnapshot) -> Self {
        Self {
            key: snap.key(),
            affiliation: snap.affiliation,
            designation: snap.designation.clone(),
            group: snap.group.clone(),
        }
    }

    /// Rebuild the snapshot view of this entry (live by definition).
    pub fn to_snapshot(&self) -> ActorSnapshot {
        ActorSnapshot {
            controller: self.key.controller.clone(),
            designation: self.designation.clone(),
            affiliation: self.affiliation,
            group: self.group.clone(),
            exists: true,
        }
    }
}

/// Join/leave transitions produced by one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterDiff {
    pub entered: Vec<RosterEntry>,
    pub left: Vec<RosterEntry>,
}

/// Tracks the set of active human-controlled units between passes.
#[derive(Debug, Clone, Default)]
pub struct RosterTracker {
    current: BTreeMap<ActorKey, RosterEntry>,
}

impl RosterTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RosterEntry> {
        self.current.values()
    }

    pub fn contains(&self, key: &ActorKey) -> bool {
        self.current.contains_key(key)
    }

    /// One full-population sweep: enumerate every coalition's groups and
    /// units, keep live human-controlled units, diff against the previous
    /// sweep, and replace it.
    pub fn reconcile(&mut self, world: &dyn WorldAccess, cfg: &TelemetryConfig) -> RosterDiff {
        let mut seen: BTreeMap<ActorKey, RosterEntry> = BTreeMap::new();

        for coalition in Coalition::ALL {
            let groups =
                access::field(Some(world), Vec::new(), |w| w.groups(coalition)).into_value();
            for group in groups {
                let units =
                    access::field(Some(group.as_ref()), Vec::new(), |g| g.units()).into_value();
                for unit in units {
                    let snap = resolve_actor(Some(unit.as_ref()), cfg);
                    if snap.is_human(&cfg.ai_controller_sentinel) {
                        seen.insert(snap.key(), RosterEntry::from_snapshot(&snap));
                    }
                }
            }
        }

        let entered = seen
            .values()
            .filter(|entry| !self.current.contains_key(&entry.key))
            .cloned()
            .collect();
        let left = self
            .current
            .values()
            .filter(|entry| !seen.contains_key(&entry.key))
            .cloned()
            .collect();

        self.current = seen;
        RosterDiff { entered, left }
    }
}
