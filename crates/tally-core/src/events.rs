//! Inbound simulation event records.

use std::fmt;

use crate::enums::EventKind;
use crate::sim::{PlaceRef, UnitRef, WeaponRef};

/// A discrete event delivered by the simulation.
///
/// All handles are optional and may already be stale by the time the event
/// is processed; the engine reads them only through the safe accessor.
#[derive(Clone)]
pub struct SimEvent {
    /// Simulation time the event was raised, in seconds.
    pub time: f64,
    pub kind: EventKind,
    pub initiator: Option<UnitRef>,
    /// Struck/destroyed unit (HIT/KILL only).
    pub target: Option<UnitRef>,
    pub weapon: Option<WeaponRef>,
    /// Location handle (TAKEOFF/LAND only).
    pub place: Option<PlaceRef>,
}

impl SimEvent {
    pub fn new(time: f64, kind: EventKind) -> Self {
        Self {
            time,
            kind,
            initiator: None,
            target: None,
            weapon: None,
            place: None,
        }
    }

    pub fn with_initiator(mut self, unit: UnitRef) -> Self {
        self.initiator = Some(unit);
        self
    }

    pub fn with_target(mut self, unit: UnitRef) -> Self {
        self.target = Some(unit);
        self
    }

    pub fn with_weapon(mut self, weapon: WeaponRef) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_place(mut self, place: PlaceRef) -> Self {
        self.place = Some(place);
        self
    }
}

impl fmt::Debug for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimEvent")
            .field("time", &self.time)
            .field("kind", &self.kind)
            .field("initiator", &self.initiator.is_some())
            .field("target", &self.target.is_some())
            .field("weapon", &self.weapon.is_some())
            .field("place", &self.place.is_some())
            .finish()
    }
}
