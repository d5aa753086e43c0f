//! Core types and definitions for the TALLY combat-event telemetry aggregator.
//!
//! This crate defines the vocabulary shared across all other crates: event
//! records, simulation access traits, identity types, configuration, and
//! sentinel constants. It has no dependency on the engine or any host
//! framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod sim;
pub mod types;

#[cfg(test)]
mod tests;
