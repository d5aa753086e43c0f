//! Aggregation engine for combat-event telemetry.
//!
//! The engine ingests `SimEvent`s from an external simulation, attributes
//! each combat event to the correct actor, maintains per-actor / per-group /
//! per-faction statistics, and emits a replayable log plus an end-of-session
//! summary. Completely headless and single-threaded: the host drives it
//! through `TelemetryPipeline::on_event` and `TelemetryPipeline::on_tick`.
//!
//! Exactly two layers are allowed to absorb failures: the safe accessor
//! (per field read, [`access`]) and the pipeline dispatcher (per event
//! handler, [`pipeline`]). No other layer catches errors.

pub mod access;
pub mod attribution;
pub mod errors;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod roster;
pub mod schedule;
pub mod sinks;
pub mod stats;
