//! Actor resolution — turns a raw unit handle into a fully-defined snapshot.

use tally_core::config::TelemetryConfig;
use tally_core::constants::UNKNOWN;
use tally_core::enums::Coalition;
use tally_core::sim::UnitAccess;
use tally_core::types::ActorSnapshot;

use crate::access;

/// Resolve a unit handle into an [`ActorSnapshot`].
///
/// A handle that reports non-live short-circuits to the unknown snapshot:
/// a destroyed unit's remaining fields are not trusted even when they are
/// individually readable. Past the liveness gate, every field resolution is
/// independently failure-isolated — a failed controller lookup does not stop
/// designation or affiliation from resolving.
pub fn resolve_actor(unit: Option<&dyn UnitAccess>, cfg: &TelemetryConfig) -> ActorSnapshot {
    let Some(unit) = unit else {
        return ActorSnapshot::unknown();
    };

    let live = access::field(Some(unit), false, |u| u.is_live());
    if !live.ok || !live.value {
        return ActorSnapshot::unknown();
    }

    let controller = access::field(Some(unit), None, |u| u.controller_name())
        .into_value()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| cfg.ai_controller_sentinel.clone());

    // Designation fallback chain: callsign, then raw type identifier, then
    // the Unknown sentinel. Never empty.
    let callsign = access::field(Some(unit), String::new(), |u| u.callsign()).into_value();
    let designation = if callsign.trim().is_empty() {
        non_empty_or_unknown(access::field(Some(unit), String::new(), |u| u.type_name()).into_value())
    } else {
        callsign
    };

    let affiliation =
        access::field(Some(unit), Coalition::Neutral, |u| u.coalition()).into_value();

    let group =
        non_empty_or_unknown(access::field(Some(unit), String::new(), |u| u.group_name()).into_value());

    ActorSnapshot {
        controller,
        designation,
        affiliation,
        group,
        exists: true,
    }
}

fn non_empty_or_unknown(value: String) -> String {
    if value.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        value
    }
}
