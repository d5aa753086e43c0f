//! End-of-session summary report.
//!
//! Each section is built by an independent function, so one degenerate
//! record cannot blank the other sections. Actors and groups are emitted in
//! sorted key order for stable output.

use serde::{Deserialize, Serialize};

use tally_core::enums::Coalition;

use crate::stats::{FactionScore, ScoreBoard};

/// Serializable form of the summary, for hosts that want structured output
/// instead of rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub actors: Vec<ActorSummary>,
    pub groups: Vec<GroupSummary>,
    pub factions: FactionComparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSummary {
    pub controller: String,
    pub designation: String,
    pub affiliation: Coalition,
    pub shots: u32,
    pub hits: u32,
    pub kills: u32,
    pub deaths: u32,
    pub hit_rate: f64,
    pub kill_death_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub name: String,
    pub member_count: usize,
    pub shots: u32,
    pub hits: u32,
    pub kills: u32,
    pub losses: u32,
}

/// Two-row head-to-head comparison. Neutral is excluded by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionComparison {
    pub red: FactionScore,
    pub blue: FactionScore,
}

/// Build the structured summary from the scoreboard.
pub fn build_report(score: &ScoreBoard) -> SummaryReport {
    SummaryReport {
        actors: score
            .actors
            .iter()
            .map(|(key, stats)| ActorSummary {
                controller: key.controller.clone(),
                designation: stats.designation.clone(),
                affiliation: stats.affiliation,
                shots: stats.shots_fired,
                hits: stats.hits_scored,
                kills: stats.kills_scored,
                deaths: stats.deaths_suffered,
                hit_rate: stats.hit_rate(),
                kill_death_ratio: stats.kill_death_ratio(),
            })
            .collect(),
        groups: score
            .groups
            .iter()
            .map(|(name, stats)| GroupSummary {
                name: name.clone(),
                member_count: stats.members.len(),
                shots: stats.shots,
                hits: stats.hits,
                kills: stats.kills,
                losses: stats.losses,
            })
            .collect(),
        factions: FactionComparison {
            red: score.factions.red,
            blue: score.factions.blue,
        },
    }
}

/// Render the summary as log-ready lines.
pub fn render_summary(score: &ScoreBoard) -> Vec<String> {
    let mut lines = vec!["==== SESSION SUMMARY ====".to_string()];
    lines.extend(actor_section(score));
    lines.extend(group_section(score));
    lines.extend(faction_section(score));
    lines
}

fn actor_section(score: &ScoreBoard) -> Vec<String> {
    let mut lines = vec!["-- Pilots --".to_string()];
    if score.actors.is_empty() {
        lines.push("(none)".to_string());
        return lines;
    }
    for (key, stats) in &score.actors {
        lines.push(format!(
            "{} [{}]  shots {}  hits {}  kills {}  deaths {}  hit rate {:.1}%  K/D {:.2}",
            key,
            stats.affiliation.name(),
            stats.shots_fired,
            stats.hits_scored,
            stats.kills_scored,
            stats.deaths_suffered,
            stats.hit_rate() * 100.0,
            stats.kill_death_ratio(),
        ));
    }
    lines
}

fn group_section(score: &ScoreBoard) -> Vec<String> {
    let mut lines = vec!["-- Groups --".to_string()];
    if score.groups.is_empty() {
        lines.push("(none)".to_string());
        return lines;
    }
    for (name, stats) in &score.groups {
        lines.push(format!(
            "{}: members {}  shots {}  hits {}  kills {}  losses {}",
            name,
            stats.members.len(),
            stats.shots,
            stats.hits,
            stats.kills,
            stats.losses,
        ));
    }
    lines
}

fn faction_section(score: &ScoreBoard) -> Vec<String> {
    let mut lines = vec!["-- Factions --".to_string()];
    for coalition in [Coalition::Red, Coalition::Blue] {
        let totals = score.factions.get(coalition);
        lines.push(format!(
            "{}: kills {}  losses {}  shots {}",
            coalition.name(),
            totals.kills,
            totals.losses,
            totals.shots,
        ));
    }
    lines
}
