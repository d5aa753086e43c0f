#[cfg(test)]
mod tests {
    use crate::config::TelemetryConfig;
    use crate::constants::{DEFAULT_AI_SENTINEL, UNKNOWN};
    use crate::enums::{Coalition, EventKind, LogLevel, Provenance};
    use crate::types::{ActorKey, ActorSnapshot};

    #[test]
    fn test_config_defaults() {
        let cfg = TelemetryConfig::default();
        assert!(cfg.debug_enabled);
        assert_eq!(cfg.roster_poll_interval_secs, 5.0);
        assert_eq!(cfg.ai_controller_sentinel, DEFAULT_AI_SENTINEL);
    }

    #[test]
    fn test_config_partial_json_fills_defaults() {
        let cfg: TelemetryConfig = serde_json::from_str(r#"{"debug_enabled": false}"#).unwrap();
        assert!(!cfg.debug_enabled);
        assert_eq!(cfg.roster_poll_interval_secs, 5.0);
        assert_eq!(cfg.ai_controller_sentinel, "AI");

        let cfg: TelemetryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, TelemetryConfig::default());
    }

    #[test]
    fn test_unknown_snapshot_has_no_undefined_fields() {
        let snap = ActorSnapshot::unknown();
        assert_eq!(snap.controller, UNKNOWN);
        assert_eq!(snap.designation, UNKNOWN);
        assert_eq!(snap.affiliation, Coalition::Neutral);
        assert_eq!(snap.group, UNKNOWN);
        assert!(!snap.exists);
        assert!(!snap.is_human("AI"));
    }

    #[test]
    fn test_actor_key_composite_identity() {
        // Same controller in two airframes must produce distinct keys.
        let a = ActorKey::new("Maverick", "Viper-1");
        let b = ActorKey::new("Maverick", "Viper-2");
        assert_ne!(a, b);
        assert_eq!(a, ActorKey::new("Maverick", "Viper-1"));
        assert_eq!(a.to_string(), "Maverick (Viper-1)");
    }

    #[test]
    fn test_coalition_and_provenance_serde_roundtrip() {
        for c in Coalition::ALL {
            let json = serde_json::to_string(&c).unwrap();
            let back: Coalition = serde_json::from_str(&json).unwrap();
            assert_eq!(c, back);
        }
        for p in [Provenance::WeaponLauncher, Provenance::EventInitiator] {
            let json = serde_json::to_string(&p).unwrap();
            let back: Provenance = serde_json::from_str(&json).unwrap();
            assert_eq!(p, back);
        }
    }

    #[test]
    fn test_event_kind_names() {
        assert_eq!(EventKind::Shot.name(), "SHOT");
        assert_eq!(EventKind::SessionEnd.name(), "SESSION_END");
        assert_eq!(EventKind::default(), EventKind::Other);
    }

    #[test]
    fn test_log_level_tags() {
        assert_eq!(LogLevel::Event.tag(), "EVENT");
        assert_eq!(LogLevel::Error.tag(), "ERROR");
    }
}
