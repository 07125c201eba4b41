#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::components::UnitId;
    use crate::enums::*;
    use crate::events::BattleEvent;
    use crate::state::BattleSnapshot;
    use crate::types::{frame_scale, Position, SimTime};

    #[test]
    fn test_profiles_are_shared_by_reference() {
        let a = UnitClass::Heavy.profile();
        let b = UnitClass::Heavy.profile();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.base_hp, 300.0);
        assert_eq!(a.engagement_range, 350.0);
    }

    #[test]
    fn test_profile_table_matches_class() {
        for class in UnitClass::ALL {
            assert_eq!(class.profile().class, class);
        }
    }

    #[test]
    fn test_unknown_class_name_falls_back_to_fighter() {
        assert_eq!(UnitClass::from_name("SCOUT"), UnitClass::Scout);
        assert_eq!(UnitClass::from_name("frigate"), UnitClass::Frigate);
        assert_eq!(UnitClass::from_name("DREADNOUGHT"), UnitClass::Fighter);
        assert_eq!(UnitClass::from_name(""), UnitClass::Fighter);
    }

    #[test]
    fn test_only_frigates_are_carriers() {
        assert_eq!(UnitClass::Frigate.kind(), UnitKind::Frigate);
        for class in UnitClass::LINE {
            assert_eq!(class.kind(), UnitKind::Standard);
        }
    }

    #[test]
    fn test_node_owner_from_team() {
        assert_eq!(NodeOwner::from(Team::Player), NodeOwner::Player);
        assert_eq!(NodeOwner::from(Team::Enemy), NodeOwner::Enemy);
        assert_eq!(NodeOwner::Neutral.team(), None);
        assert_eq!(Team::Player.opponent(), Team::Enemy);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..10 {
            time.advance(16.6);
        }
        assert_eq!(time.tick, 10);
        assert!((time.elapsed_ms - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_scale_reference_frame_is_one() {
        assert!((frame_scale(16.6) - 1.0).abs() < 1e-6);
        assert!((frame_scale(33.2) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_range_to() {
        let a = Position(Vec2::ZERO);
        let b = Position(Vec2::new(3.0, 4.0));
        assert!((a.range_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_command_json_shape() {
        let cmd = PlayerCommand::SetRallyPoint {
            team: Team::Player,
            position: Vec2::new(10.0, 20.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetRallyPoint\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            PlayerCommand::SetRallyPoint {
                team: Team::Player,
                ..
            }
        ));
    }

    #[test]
    fn test_unit_class_serializes_as_screaming_case() {
        let json = serde_json::to_string(&UnitClass::Heavy).unwrap();
        assert_eq!(json, "\"HEAVY\"");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut snapshot = BattleSnapshot::default();
        snapshot.battle_events.push(BattleEvent::Victory { team: Team::Enemy });
        snapshot.battle_events.push(BattleEvent::UnitDestroyed {
            unit: UnitId(3),
            team: Team::Player,
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BattleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.battle_events, snapshot.battle_events);
    }
}
