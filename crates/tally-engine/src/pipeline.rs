//! Event pipeline — dispatch, failure isolation, session lifecycle.
//!
//! [`TelemetryPipeline`] owns all mutable session state and is driven by
//! host calls to [`TelemetryPipeline::on_event`] and
//! [`TelemetryPipeline::on_tick`], both on one logical thread. The
//! dispatcher wraps every handler in a failure boundary: a fault inside one
//! handler becomes a single ERROR line and processing continues. This is the
//! load-bearing reliability property of the whole system — one malformed
//! event must never terminate logging for the rest of the session.

use tally_core::config::TelemetryConfig;
use tally_core::constants::UNKNOWN_PLACE;
use tally_core::enums::{EventKind, LogLevel, Provenance, SessionPhase};
use tally_core::events::SimEvent;
use tally_core::sim::WorldAccess;
use tally_core::types::ActorSnapshot;

use crate::access;
use crate::attribution;
use crate::errors::{EngineError, InitError};
use crate::report;
use crate::resolve::resolve_actor;
use crate::roster::RosterTracker;
use crate::schedule::RepeatingTask;
use crate::sinks::{self, LogSink, NoticeSink};
use crate::stats::ScoreBoard;

/// The aggregator. Constructed once per session via [`TelemetryPipeline::start`].
pub struct TelemetryPipeline<L: LogSink, N: NoticeSink> {
    cfg: TelemetryConfig,
    phase: SessionPhase,
    started_at: f64,
    score: ScoreBoard,
    roster: RosterTracker,
    roster_task: RepeatingTask,
    log: L,
    notice: N,
    dropped_lines: u64,
}

impl<L: LogSink, N: NoticeSink> TelemetryPipeline<L, N> {
    /// Validate the configuration and construct the pipeline in the Active
    /// phase. A rejected configuration is the fatal initialization fault:
    /// the session never starts.
    pub fn start(
        cfg: TelemetryConfig,
        now: f64,
        log: L,
        notice: N,
    ) -> Result<Self, InitError> {
        if !cfg.roster_poll_interval_secs.is_finite() || cfg.roster_poll_interval_secs <= 0.0 {
            log::error!(
                "session init failed: bad roster poll interval {}",
                cfg.roster_poll_interval_secs
            );
            return Err(InitError::BadPollInterval(cfg.roster_poll_interval_secs));
        }
        if cfg.ai_controller_sentinel.trim().is_empty() {
            log::error!("session init failed: empty AI controller sentinel");
            return Err(InitError::EmptyAiSentinel);
        }

        let roster_task = RepeatingTask::new(cfg.roster_poll_interval_secs, now);
        let mut pipeline = Self {
            cfg,
            phase: SessionPhase::Active,
            started_at: now,
            score: ScoreBoard::new(),
            roster: RosterTracker::new(),
            roster_task,
            log,
            notice,
            dropped_lines: 0,
        };
        pipeline.emit(now, LogLevel::Info, "combat telemetry session active");
        Ok(pipeline)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn roster(&self) -> &RosterTracker {
        &self.roster
    }

    /// Lines the log sink rejected and the pipeline discarded.
    pub fn dropped_lines(&self) -> u64 {
        self.dropped_lines
    }

    pub fn log_sink(&self) -> &L {
        &self.log
    }

    pub fn notice_sink(&self) -> &N {
        &self.notice
    }

    /// Structured form of the summary, available at any time.
    pub fn summary(&self) -> report::SummaryReport {
        report::build_report(&self.score)
    }

    /// Entry point for one inbound event. Never panics, never propagates an
    /// error. Unrecognized kinds are discarded; all events are discarded
    /// once the session is Finalizing.
    pub fn on_event(&mut self, event: &SimEvent) {
        if self.phase == SessionPhase::Finalizing {
            return;
        }
        let result = match event.kind {
            EventKind::Shot => self.handle_shot(event),
            EventKind::Hit => self.handle_hit(event),
            EventKind::Kill => self.handle_kill(event),
            EventKind::Takeoff => self.handle_airfield(event, "departed"),
            EventKind::Land => self.handle_airfield(event, "landed at"),
            EventKind::Crash => self.handle_crash(event),
            EventKind::Eject => self.handle_eject(event),
            EventKind::SessionEnd => {
                self.finalize(event.time);
                Ok(())
            }
            EventKind::Other => Ok(()),
        };
        if let Err(err) = result {
            self.emit(
                event.time,
                LogLevel::Error,
                &format!("{} handler failed: {err}", event.kind.name()),
            );
        }
    }

    /// Periodic driver. Runs the roster reconciliation when its task is due.
    pub fn on_tick(&mut self, world: &dyn WorldAccess, now: f64) {
        if self.phase == SessionPhase::Finalizing {
            return;
        }
        if !self.roster_task.poll(now) {
            return;
        }
        let diff = self.roster.reconcile(world, &self.cfg);
        for entry in &diff.entered {
            let snap = entry.to_snapshot();
            self.score.touch(&snap);
            self.emit(
                now,
                LogLevel::Event,
                &format!("{} joined [{}]", entry.key, entry.affiliation.name()),
            );
            self.notify(&format!("{} joined", entry.key));
        }
        for entry in &diff.left {
            self.emit(
                now,
                LogLevel::Event,
                &format!("{} left [{}]", entry.key, entry.affiliation.name()),
            );
            self.notify(&format!("{} left", entry.key));
        }
    }

    // --- Event handlers ---

    fn handle_shot(&mut self, event: &SimEvent) -> Result<(), EngineError> {
        if event.initiator.is_none() && event.weapon.is_none() {
            return Err(EngineError::MalformedEvent(
                "shot carries neither initiator nor weapon",
            ));
        }
        let shooter = attribution::resolve_shot_initiator(event, &self.cfg);
        let weapon = attribution::weapon_type_name(event);
        self.score.record_shot(&shooter.actor, &weapon);
        self.emit(
            event.time,
            LogLevel::Event,
            &format!("{} fired {}", shooter.actor, weapon),
        );
        self.notify(&format!("{} fired {}", shooter.actor, weapon));
        Ok(())
    }

    fn handle_hit(&mut self, event: &SimEvent) -> Result<(), EngineError> {
        if event.initiator.is_none() && event.weapon.is_none() && event.target.is_none() {
            return Err(EngineError::MalformedEvent("hit carries no participants"));
        }
        let shooter = attribution::resolve_shooter(event, &self.cfg);
        let target = resolve_actor(event.target.as_deref(), &self.cfg);
        let weapon = attribution::weapon_type_name(event);
        self.score.record_hit(&shooter.actor);
        self.emit(
            event.time,
            LogLevel::Event,
            &format!("{} hit {} with {}", shooter.actor, target, weapon),
        );
        self.emit_provenance(event.time, shooter.provenance);
        Ok(())
    }

    fn handle_kill(&mut self, event: &SimEvent) -> Result<(), EngineError> {
        if event.initiator.is_none() && event.weapon.is_none() && event.target.is_none() {
            return Err(EngineError::MalformedEvent("kill carries no participants"));
        }
        let killer = attribution::resolve_shooter(event, &self.cfg);
        let victim = resolve_actor(event.target.as_deref(), &self.cfg);
        let weapon = attribution::weapon_type_name(event);
        self.score.record_kill(&killer.actor, &victim);
        self.emit(
            event.time,
            LogLevel::Event,
            &format!("{} killed {} with {}", killer.actor, victim, weapon),
        );
        self.emit_provenance(event.time, killer.provenance);
        self.notify(&format!("{} killed {}", killer.actor, victim));
        Ok(())
    }

    fn handle_airfield(&mut self, event: &SimEvent, verb: &str) -> Result<(), EngineError> {
        if event.initiator.is_none() {
            return Err(EngineError::MalformedEvent(
                "airfield event carries no initiator",
            ));
        }
        let actor = resolve_actor(event.initiator.as_deref(), &self.cfg);
        let place = {
            let name =
                access::field(event.place.as_deref(), String::new(), |p| p.name()).into_value();
            if name.trim().is_empty() {
                UNKNOWN_PLACE.to_string()
            } else {
                name
            }
        };
        self.score.touch(&actor);
        self.emit(
            event.time,
            LogLevel::Event,
            &format!("{} {} {}", actor, verb, place),
        );
        Ok(())
    }

    fn handle_crash(&mut self, event: &SimEvent) -> Result<(), EngineError> {
        if event.initiator.is_none() {
            return Err(EngineError::MalformedEvent(
                "crash event carries no initiator",
            ));
        }
        let victim = resolve_actor(event.initiator.as_deref(), &self.cfg);
        self.score.record_loss(&victim);
        self.emit(event.time, LogLevel::Event, &format!("{} crashed", victim));
        Ok(())
    }

    fn handle_eject(&mut self, event: &SimEvent) -> Result<(), EngineError> {
        if event.initiator.is_none() {
            return Err(EngineError::MalformedEvent(
                "eject event carries no initiator",
            ));
        }
        let actor = resolve_actor(event.initiator.as_deref(), &self.cfg);
        self.emit(event.time, LogLevel::Event, &format!("{} ejected", actor));
        Ok(())
    }

    /// One-way, idempotent Active → Finalizing transition. Emits the summary
    /// block exactly once and cancels the roster task.
    fn finalize(&mut self, now: f64) {
        if self.phase == SessionPhase::Finalizing {
            return;
        }
        self.phase = SessionPhase::Finalizing;
        self.roster_task.cancel_token().cancel();
        self.emit(now, LogLevel::Info, "session ended, emitting summary");
        for line in report::render_summary(&self.score) {
            self.emit(now, LogLevel::Info, &line);
        }
        self.notify("Session ended");
    }

    // --- Sink plumbing ---

    /// Write one log line, swallowing sink failures. A rejected write is
    /// counted and noted, never propagated: the log is fire-and-forget.
    fn emit(&mut self, now: f64, level: LogLevel, message: &str) {
        if level == LogLevel::Debug && !self.cfg.debug_enabled {
            return;
        }
        let line = sinks::format_line(now - self.started_at, level, message);
        if let Err(err) = self.log.write_line(&line) {
            self.dropped_lines += 1;
            log::warn!("log sink dropped a line: {err}");
        }
    }

    fn emit_provenance(&mut self, now: f64, provenance: Provenance) {
        if provenance == Provenance::WeaponLauncher {
            self.emit(now, LogLevel::Debug, "shooter attributed via weapon launcher");
        }
    }

    fn notify(&mut self, message: &str) {
        if !self.cfg.debug_enabled {
            return;
        }
        if let Err(err) = self.notice.show(message) {
            self.dropped_lines += 1;
            log::warn!("notice sink dropped a message: {err}");
        }
    }
}
