//! Shooter attribution for combat events.
//!
//! At impact time the weapon's launcher backlink is frequently more reliable
//! than the event's recorded initiator: the launching unit may have been
//! destroyed between launch and impact, leaving the initiator handle stale
//! while the weapon still knows who fired it. For HIT/KILL the launcher
//! therefore wins whenever it resolves to a live unit. SHOT events use the
//! initiator only — the weapon has no flight history yet at launch time, so
//! the two sources are equivalent and the simpler one avoids extra lookups.

use tally_core::config::TelemetryConfig;
use tally_core::constants::UNKNOWN;
use tally_core::enums::Provenance;
use tally_core::events::SimEvent;
use tally_core::types::AttributionResult;

use crate::access;
use crate::resolve::resolve_actor;

/// Resolve the authoritative shooter for a HIT/KILL event.
pub fn resolve_shooter(event: &SimEvent, cfg: &TelemetryConfig) -> AttributionResult {
    let launcher = access::field(event.weapon.as_deref(), None, |w| w.launcher()).into_value();
    if let Some(launcher) = launcher {
        let actor = resolve_actor(Some(launcher.as_ref()), cfg);
        // A launcher that resolves dead is no better than a stale initiator;
        // fall through to the event's own record.
        if actor.exists {
            return AttributionResult {
                actor,
                provenance: Provenance::WeaponLauncher,
            };
        }
    }
    AttributionResult {
        actor: resolve_actor(event.initiator.as_deref(), cfg),
        provenance: Provenance::EventInitiator,
    }
}

/// Resolve the shooter for a SHOT event (initiator only).
pub fn resolve_shot_initiator(event: &SimEvent, cfg: &TelemetryConfig) -> AttributionResult {
    AttributionResult {
        actor: resolve_actor(event.initiator.as_deref(), cfg),
        provenance: Provenance::EventInitiator,
    }
}

/// Weapon type display name, `"Unknown"` when the weapon handle is absent
/// or unreadable.
pub fn weapon_type_name(event: &SimEvent) -> String {
    let name = access::field(event.weapon.as_deref(), String::new(), |w| w.type_name()).into_value();
    if name.trim().is_empty() {
        UNKNOWN.to_string()
    } else {
        name
    }
}
