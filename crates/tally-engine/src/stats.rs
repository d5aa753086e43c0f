//! Running statistics — per-actor, per-group, and per-faction counters.
//!
//! Actor and group records are discovered dynamically and created lazily on
//! first reference; they are never deleted during a session. Faction totals
//! are pre-allocated at construction, because the set of factions is fixed
//! and known up front. All counters are monotonic.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use tally_core::enums::Coalition;
use tally_core::types::{ActorKey, ActorSnapshot};

/// Counters for one controller identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorStats {
    /// Last-observed affiliation.
    pub affiliation: Coalition,
    /// Last-observed designation.
    pub designation: String,
    pub shots_fired: u32,
    pub hits_scored: u32,
    pub kills_scored: u32,
    pub deaths_suffered: u32,
    pub shots_by_weapon: BTreeMap<String, u32>,
}

impl ActorStats {
    /// Hits per shot; 0 when no shots have been fired.
    pub fn hit_rate(&self) -> f64 {
        if self.shots_fired > 0 {
            f64::from(self.hits_scored) / f64::from(self.shots_fired)
        } else {
            0.0
        }
    }

    /// Kills per death; the raw kill count when no deaths have occurred.
    pub fn kill_death_ratio(&self) -> f64 {
        if self.deaths_suffered > 0 {
            f64::from(self.kills_scored) / f64::from(self.deaths_suffered)
        } else {
            f64::from(self.kills_scored)
        }
    }
}

/// Counters for one formation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub shots: u32,
    pub hits: u32,
    pub kills: u32,
    pub losses: u32,
    pub members: BTreeSet<ActorKey>,
}

/// Head-to-head counters for one faction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionScore {
    pub shots: u32,
    pub kills: u32,
    pub losses: u32,
}

/// Faction totals. Red and Blue are live from session start; the neutral
/// bucket is tracked but excluded from head-to-head reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionScores {
    pub red: FactionScore,
    pub blue: FactionScore,
    pub neutral: FactionScore,
}

impl FactionScores {
    pub fn get(&self, coalition: Coalition) -> &FactionScore {
        match coalition {
            Coalition::Red => &self.red,
            Coalition::Blue => &self.blue,
            Coalition::Neutral => &self.neutral,
        }
    }

    fn entry(&mut self, coalition: Coalition) -> &mut FactionScore {
        match coalition {
            Coalition::Red => &mut self.red,
            Coalition::Blue => &mut self.blue,
            Coalition::Neutral => &mut self.neutral,
        }
    }
}

/// The running scoreboard for one session.
///
/// Updates are side-effect-only and infallible. All state is touched from a
/// single logical thread, so each public method is one atomic logical step:
/// no summary read can observe a kill without its matching death.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub actors: BTreeMap<ActorKey, ActorStats>,
    pub groups: BTreeMap<String, GroupStats>,
    pub factions: FactionScores,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create records for an actor without touching any counter. Used when
    /// a controller joins the roster before producing any combat event.
    pub fn touch(&mut self, actor: &ActorSnapshot) {
        self.actor_entry(actor);
        self.group_entry(actor);
    }

    /// Record one weapon launch by `shooter`.
    pub fn record_shot(&mut self, shooter: &ActorSnapshot, weapon: &str) {
        let stats = self.actor_entry(shooter);
        stats.shots_fired += 1;
        *stats.shots_by_weapon.entry(weapon.to_string()).or_insert(0) += 1;
        self.group_entry(shooter).shots += 1;
        self.factions.entry(shooter.affiliation).shots += 1;
    }

    /// Record one successful hit by `shooter`.
    pub fn record_hit(&mut self, shooter: &ActorSnapshot) {
        self.actor_entry(shooter).hits_scored += 1;
        self.group_entry(shooter).hits += 1;
    }

    /// Record one kill. The killer's kill and the victim's death are applied
    /// in the same call, so a downstream summary read never observes one
    /// without the other for the same event.
    pub fn record_kill(&mut self, killer: &ActorSnapshot, victim: &ActorSnapshot) {
        self.actor_entry(killer).kills_scored += 1;
        self.group_entry(killer).kills += 1;
        self.factions.entry(killer.affiliation).kills += 1;
        self.record_loss(victim);
    }

    /// Record a loss with no killer credit (crash, unattributed death).
    pub fn record_loss(&mut self, victim: &ActorSnapshot) {
        self.actor_entry(victim).deaths_suffered += 1;
        self.group_entry(victim).losses += 1;
        self.factions.entry(victim.affiliation).losses += 1;
    }

    fn actor_entry(&mut self, actor: &ActorSnapshot) -> &mut ActorStats {
        let stats = self.actors.entry(actor.key()).or_default();
        stats.affiliation = actor.affiliation;
        stats.designation = actor.designation.clone();
        stats
    }

    fn group_entry(&mut self, actor: &ActorSnapshot) -> &mut GroupStats {
        let stats = self.groups.entry(actor.group.clone()).or_default();
        stats.members.insert(actor.key());
        stats
    }
}
