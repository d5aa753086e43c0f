//! Access traits over simulation-provided handles.
//!
//! Every method is fallible: the simulation can reject a call, a handle can
//! go stale mid-call, or a capability can be missing on a given object type.
//! Engine code never calls these traits directly — every read goes through
//! the safe accessor, which turns any failure into a typed default.
//!
//! Handles are reference-counted trait objects. All event handling runs on
//! one logical thread, so `Rc` is sufficient.

use std::rc::Rc;

use thiserror::Error;

use crate::enums::Coalition;

/// Why a handle access failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The handle does not expose this capability.
    #[error("capability not supported")]
    Unsupported,
    /// The handle refers to an object that no longer exists in the world.
    #[error("handle is stale")]
    Stale,
    /// The simulation reported a failure while servicing the call.
    #[error("access failed: {0}")]
    Failed(String),
}

pub type AccessResult<T> = Result<T, AccessError>;

pub type UnitRef = Rc<dyn UnitAccess>;
pub type WeaponRef = Rc<dyn WeaponAccess>;
pub type PlaceRef = Rc<dyn PlaceAccess>;
pub type GroupRef = Rc<dyn GroupAccess>;

/// A controllable unit participating in combat.
pub trait UnitAccess {
    /// Whether the unit still exists and is alive in the simulation world.
    fn is_live(&self) -> AccessResult<bool>;

    /// Name of the human controller, or `Ok(None)` for AI-controlled units.
    fn controller_name(&self) -> AccessResult<Option<String>>;

    /// The unit's callsign, when one is assigned. May be empty.
    fn callsign(&self) -> AccessResult<String>;

    /// Internal type/serial identifier.
    fn type_name(&self) -> AccessResult<String>;

    fn coalition(&self) -> AccessResult<Coalition>;

    /// Name of the formation the unit flies in.
    fn group_name(&self) -> AccessResult<String>;
}

/// A weapon object spawned by a launch.
pub trait WeaponAccess {
    /// Backlink to the unit that launched this weapon, when still known.
    fn launcher(&self) -> AccessResult<Option<UnitRef>>;

    /// Weapon type display name.
    fn type_name(&self) -> AccessResult<String>;
}

/// A named location (airfield, ship deck, farp).
pub trait PlaceAccess {
    fn name(&self) -> AccessResult<String>;
}

/// A formation of units.
pub trait GroupAccess {
    fn name(&self) -> AccessResult<String>;

    fn units(&self) -> AccessResult<Vec<UnitRef>>;
}

/// Read-only view of the simulation world, used by roster polling.
pub trait WorldAccess {
    /// All groups currently registered for one coalition.
    fn groups(&self, coalition: Coalition) -> AccessResult<Vec<GroupRef>>;
}
