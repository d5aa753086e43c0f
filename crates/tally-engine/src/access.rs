//! Safe accessor — the single chokepoint for reading simulation handles.
//!
//! Every interaction with a simulation-provided handle goes through
//! [`field`]. An absent handle, a missing capability, a handle gone stale
//! mid-call, or any simulation-side failure all collapse to the caller's
//! typed default, so everything above this layer operates under a
//! total-failure-free contract.

use tally_core::sim::AccessError;

/// Result of a guarded handle read: the value (possibly the caller-supplied
/// default) plus whether the underlying access actually succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessed<T> {
    pub value: T,
    pub ok: bool,
}

impl<T> Accessed<T> {
    pub fn hit(value: T) -> Self {
        Self { value, ok: true }
    }

    pub fn miss(default: T) -> Self {
        Self {
            value: default,
            ok: false,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Read one field or capability off an optional handle.
///
/// The default is capability-specific and stated explicitly at every call
/// site (empty string, `None`, `Coalition::Neutral`, ...). Transient lookup
/// failures are fully recovered here and surfaced only as a DEBUG note.
pub fn field<H: ?Sized, T>(
    handle: Option<&H>,
    default: T,
    read: impl FnOnce(&H) -> Result<T, AccessError>,
) -> Accessed<T> {
    let Some(handle) = handle else {
        return Accessed::miss(default);
    };
    match read(handle) {
        Ok(value) => Accessed::hit(value),
        Err(err) => {
            log::debug!("handle access degraded to default: {err}");
            Accessed::miss(default)
        }
    }
}
