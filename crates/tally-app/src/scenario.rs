//! Scripted sortie — a small deterministic simulation standing in for the
//! real event source.
//!
//! Two flights (blue "Viper", red "Bandit") trade missile shots on a seeded
//! schedule. Unit handles are live objects: a kill flips the victim's
//! liveness flag, so later lookups against that handle degrade exactly the
//! way stale handles do in the real simulation.

use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tally_core::enums::{Coalition, EventKind};
use tally_core::events::SimEvent;
use tally_core::sim::{
    AccessResult, GroupAccess, GroupRef, UnitAccess, UnitRef, WeaponAccess, WorldAccess,
};
use tally_engine::pipeline::TelemetryPipeline;
use tally_engine::sinks::{LogSink, NoticeSink};

pub struct ScriptedUnit {
    live: Cell<bool>,
    controller: Option<String>,
    callsign: String,
    type_name: String,
    coalition: Coalition,
    group: String,
}

impl ScriptedUnit {
    fn player(
        controller: &str,
        callsign: &str,
        type_name: &str,
        coalition: Coalition,
        group: &str,
    ) -> Rc<Self> {
        Rc::new(Self {
            live: Cell::new(true),
            controller: Some(controller.to_string()),
            callsign: callsign.to_string(),
            type_name: type_name.to_string(),
            coalition,
            group: group.to_string(),
        })
    }

    fn ai(type_name: &str, coalition: Coalition, group: &str) -> Rc<Self> {
        Rc::new(Self {
            live: Cell::new(true),
            controller: None,
            callsign: String::new(),
            type_name: type_name.to_string(),
            coalition,
            group: group.to_string(),
        })
    }

    fn destroy(&self) {
        self.live.set(false);
    }
}

impl UnitAccess for ScriptedUnit {
    fn is_live(&self) -> AccessResult<bool> {
        Ok(self.live.get())
    }
    fn controller_name(&self) -> AccessResult<Option<String>> {
        Ok(self.controller.clone())
    }
    fn callsign(&self) -> AccessResult<String> {
        Ok(self.callsign.clone())
    }
    fn type_name(&self) -> AccessResult<String> {
        Ok(self.type_name.clone())
    }
    fn coalition(&self) -> AccessResult<Coalition> {
        Ok(self.coalition)
    }
    fn group_name(&self) -> AccessResult<String> {
        Ok(self.group.clone())
    }
}

struct ScriptedWeapon {
    type_name: String,
    launcher: Rc<ScriptedUnit>,
}

impl WeaponAccess for ScriptedWeapon {
    fn launcher(&self) -> AccessResult<Option<UnitRef>> {
        Ok(Some(self.launcher.clone() as UnitRef))
    }
    fn type_name(&self) -> AccessResult<String> {
        Ok(self.type_name.clone())
    }
}

struct ScriptedGroup {
    name: String,
    coalition: Coalition,
    units: Vec<Rc<ScriptedUnit>>,
}

impl GroupAccess for ScriptedGroup {
    fn name(&self) -> AccessResult<String> {
        Ok(self.name.clone())
    }
    fn units(&self) -> AccessResult<Vec<UnitRef>> {
        Ok(self
            .units
            .iter()
            .map(|u| u.clone() as UnitRef)
            .collect())
    }
}

pub struct ScriptedWorld {
    groups: Vec<Rc<ScriptedGroup>>,
}

impl WorldAccess for ScriptedWorld {
    fn groups(&self, coalition: Coalition) -> AccessResult<Vec<GroupRef>> {
        Ok(self
            .groups
            .iter()
            .filter(|g| g.coalition == coalition)
            .map(|g| g.clone() as GroupRef)
            .collect())
    }
}

/// One scheduled event, plus the unit it destroys once delivered.
struct Scheduled {
    event: SimEvent,
    destroys: Option<Rc<ScriptedUnit>>,
}

/// Drive `pipeline` through one scripted session.
pub fn run<L: LogSink, N: NoticeSink>(
    pipeline: &mut TelemetryPipeline<L, N>,
    seed: u64,
    duration_secs: f64,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let blue: Vec<Rc<ScriptedUnit>> = vec![
        ScriptedUnit::player("Maverick", "Viper-1", "F-16C", Coalition::Blue, "Viper"),
        ScriptedUnit::player("Iceman", "Viper-2", "F-16C", Coalition::Blue, "Viper"),
    ];
    let red: Vec<Rc<ScriptedUnit>> = vec![
        ScriptedUnit::player("Boris", "Bandit-1", "Su-27", Coalition::Red, "Bandit"),
        ScriptedUnit::ai("MiG-29A", Coalition::Red, "Bandit"),
    ];

    let world = ScriptedWorld {
        groups: vec![
            Rc::new(ScriptedGroup {
                name: "Viper".to_string(),
                coalition: Coalition::Blue,
                units: blue.clone(),
            }),
            Rc::new(ScriptedGroup {
                name: "Bandit".to_string(),
                coalition: Coalition::Red,
                units: red.clone(),
            }),
        ],
    };

    let schedule = build_schedule(&mut rng, &blue, &red, duration_secs);

    let mut next = 0;
    let mut now = 0.0;
    while now <= duration_secs {
        pipeline.on_tick(&world, now);
        while next < schedule.len() && schedule[next].event.time <= now {
            pipeline.on_event(&schedule[next].event);
            if let Some(victim) = &schedule[next].destroys {
                victim.destroy();
            }
            next += 1;
        }
        now += 1.0;
    }
}

/// Pre-compute the event schedule. Deaths are tracked locally during
/// generation so a destroyed unit never fires again; the liveness flags on
/// the shared handles are only flipped at delivery time.
fn build_schedule(
    rng: &mut ChaCha8Rng,
    blue: &[Rc<ScriptedUnit>],
    red: &[Rc<ScriptedUnit>],
    duration_secs: f64,
) -> Vec<Scheduled> {
    let mut schedule = Vec::new();
    let mut takeoff = 2.0;
    for unit in blue.iter().chain(red) {
        schedule.push(Scheduled {
            event: SimEvent::new(takeoff, EventKind::Takeoff).with_initiator(unit.clone()),
            destroys: None,
        });
        takeoff += 1.0;
    }

    let mut blue_alive: Vec<Rc<ScriptedUnit>> = blue.to_vec();
    let mut red_alive: Vec<Rc<ScriptedUnit>> = red.to_vec();

    let mut t = 15.0;
    while t < duration_secs - 20.0 && !blue_alive.is_empty() && !red_alive.is_empty() {
        let blue_fires = rng.gen_bool(0.5);
        let (shooters, targets, weapon) = if blue_fires {
            (&blue_alive, &mut red_alive, "AIM-120C")
        } else {
            (&red_alive, &mut blue_alive, "R-77")
        };
        let shooter = shooters[rng.gen_range(0..shooters.len())].clone();
        let target_idx = rng.gen_range(0..targets.len());
        let target = targets[target_idx].clone();

        let missile = Rc::new(ScriptedWeapon {
            type_name: weapon.to_string(),
            launcher: shooter.clone(),
        });

        schedule.push(Scheduled {
            event: SimEvent::new(t, EventKind::Shot)
                .with_initiator(shooter.clone())
                .with_weapon(missile.clone()),
            destroys: None,
        });

        if rng.gen_bool(0.7) {
            schedule.push(Scheduled {
                event: SimEvent::new(t + 3.0, EventKind::Hit)
                    .with_initiator(shooter.clone())
                    .with_target(target.clone())
                    .with_weapon(missile.clone()),
                destroys: None,
            });
            if rng.gen_bool(0.6) {
                schedule.push(Scheduled {
                    event: SimEvent::new(t + 4.0, EventKind::Kill)
                        .with_initiator(shooter)
                        .with_target(target.clone())
                        .with_weapon(missile),
                    destroys: Some(target.clone()),
                });
                if rng.gen_bool(0.5) {
                    schedule.push(Scheduled {
                        event: SimEvent::new(t + 5.0, EventKind::Eject)
                            .with_initiator(target.clone()),
                        destroys: None,
                    });
                }
                targets.remove(target_idx);
            }
        }

        t += rng.gen_range(8.0..20.0);
    }

    for unit in blue_alive.iter().chain(&red_alive) {
        schedule.push(Scheduled {
            event: SimEvent::new(duration_secs - 5.0, EventKind::Land)
                .with_initiator(unit.clone()),
            destroys: None,
        });
    }
    schedule.push(Scheduled {
        event: SimEvent::new(duration_secs, EventKind::SessionEnd),
        destroys: None,
    });

    schedule.sort_by(|a, b| a.event.time.total_cmp(&b.event.time));
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    use tally_core::config::TelemetryConfig;
    use tally_core::enums::SessionPhase;
    use tally_engine::sinks::{VecLogSink, VecNoticeSink};

    fn run_session(seed: u64) -> TelemetryPipeline<VecLogSink, VecNoticeSink> {
        let mut pipeline = TelemetryPipeline::start(
            TelemetryConfig::default(),
            0.0,
            VecLogSink::default(),
            VecNoticeSink::default(),
        )
        .expect("default config must start");
        run(&mut pipeline, seed, 180.0);
        pipeline
    }

    #[test]
    fn test_scenario_same_seed_is_deterministic() {
        let a = run_session(7);
        let b = run_session(7);
        assert_eq!(a.log_sink().lines, b.log_sink().lines);
        let summary_a = serde_json::to_string(&a.summary()).unwrap();
        let summary_b = serde_json::to_string(&b.summary()).unwrap();
        assert_eq!(summary_a, summary_b);
    }

    #[test]
    fn test_scenario_smoke() {
        let p = run_session(42);
        assert_eq!(p.phase(), SessionPhase::Finalizing);

        let summaries = p
            .log_sink()
            .lines
            .iter()
            .filter(|l| l.contains("SESSION SUMMARY"))
            .count();
        assert_eq!(summaries, 1);

        // Both factions flew and somebody fired.
        let total_shots: u32 = p.score().actors.values().map(|a| a.shots_fired).sum();
        assert!(total_shots > 0);
        assert!(p.score().groups.contains_key("Viper"));
        assert!(p.score().groups.contains_key("Bandit"));

        // The roster saw the three human controllers at some point.
        let joins = p
            .log_sink()
            .lines
            .iter()
            .filter(|l| l.contains("joined"))
            .count();
        assert!(joins >= 3);
    }
}
