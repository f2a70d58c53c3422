#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{DroneView, EffectView, GameStateSnapshot};
    use crate::types::{box_contains, boxes_overlap, Color, FieldSize, Position, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_boxes_overlap_symmetry() {
        let a = Position::new(100.0, 100.0);
        let b = Position::new(130.0, 115.0);
        assert_eq!(
            boxes_overlap(&a, 20.0, &b, 20.0),
            boxes_overlap(&b, 20.0, &a, 20.0)
        );

        let far = Position::new(400.0, 400.0);
        assert!(!boxes_overlap(&a, 20.0, &far, 20.0));
        assert_eq!(
            boxes_overlap(&a, 20.0, &far, 20.0),
            boxes_overlap(&far, 20.0, &a, 20.0)
        );
    }

    #[test]
    fn test_boxes_overlap_requires_both_axes() {
        let a = Position::new(0.0, 0.0);
        // Close in x, far in y: no overlap.
        let b = Position::new(10.0, 300.0);
        assert!(!boxes_overlap(&a, 20.0, &b, 20.0));
        // Touching exactly at the combined reach counts as overlap.
        let c = Position::new(40.0, 40.0);
        assert!(boxes_overlap(&a, 20.0, &c, 20.0));
        let d = Position::new(40.1, 0.0);
        assert!(!boxes_overlap(&a, 20.0, &d, 20.0));
    }

    #[test]
    fn test_box_contains() {
        let center = Position::new(50.0, 50.0);
        assert!(box_contains(&center, 20.0, 50.0, 50.0));
        assert!(box_contains(&center, 20.0, 70.0, 30.0)); // corner, inclusive
        assert!(!box_contains(&center, 20.0, 70.1, 50.0));
        assert!(!box_contains(&center, 20.0, 50.0, 29.0));
    }

    // ---- Enums ----

    #[test]
    fn test_heading_opposite_is_involution() {
        for h in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
            assert_eq!(h.opposite().opposite(), h);
            assert_ne!(h.opposite(), h);
        }
    }

    #[test]
    fn test_drone_class_speeds() {
        assert_eq!(DroneClass::Normal.speed(), NORMAL_SPEED);
        assert_eq!(DroneClass::Fast.speed(), FAST_SPEED);
        assert!(DroneClass::Fast.speed() > DroneClass::Normal.speed());
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.spawn_interval_ms(), 2000.0);
        assert_eq!(Difficulty::Medium.spawn_interval_ms(), 1000.0);
        assert_eq!(Difficulty::Hard.spawn_interval_ms(), 500.0);
        assert_eq!(Difficulty::Insane.spawn_interval_ms(), 250.0);
    }

    #[test]
    fn test_hull_status_tiers() {
        assert_eq!(HullStatus::classify(STARTING_HULL), HullStatus::Nominal);
        assert_eq!(HullStatus::classify(7_000.0), HullStatus::Nominal);
        assert_eq!(HullStatus::classify(6_999.9), HullStatus::Caution);
        assert_eq!(HullStatus::classify(5_000.0), HullStatus::Caution);
        assert_eq!(HullStatus::classify(4_999.9), HullStatus::Warning);
        assert_eq!(HullStatus::classify(2_000.0), HullStatus::Warning);
        assert_eq!(HullStatus::classify(1_999.9), HullStatus::Critical);
        assert_eq!(HullStatus::classify(0.0), HullStatus::Critical);
    }

    // ---- Types ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(20.0);
        time.advance(17.5);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_ms - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_field_size_default() {
        let field = FieldSize::default();
        assert_eq!(field.width, FIELD_WIDTH);
        assert_eq!(field.height, FIELD_HEIGHT);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_enum_serde_round_trips() {
        for h in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
            let json = serde_json::to_string(&h).unwrap();
            let back: Heading = serde_json::from_str(&json).unwrap();
            assert_eq!(h, back);
        }
        for c in [DroneClass::Normal, DroneClass::Fast] {
            let json = serde_json::to_string(&c).unwrap();
            let back: DroneClass = serde_json::from_str(&json).unwrap();
            assert_eq!(c, back);
        }
        for p in [
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ] {
            let json = serde_json::to_string(&p).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(p, back);
        }
        for s in SpriteId::ALL {
            let json = serde_json::to_string(&s).unwrap();
            let back: SpriteId = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::Strike { x: 120.0, y: 240.0 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"Strike\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::Strike { x, y } if x == 120.0 && y == 240.0));
    }

    #[test]
    fn test_event_serde_tagged() {
        let event = GameEvent::DroneDestroyed { id: 7, points: 150 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"DroneDestroyed\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snapshot = GameStateSnapshot {
            nexus_name: "Nexus".into(),
            hull: 9_500.0,
            score: 150.0,
            hull_status: HullStatus::Nominal,
            drones: vec![DroneView {
                id: 1,
                x: 100.0,
                y: 200.0,
                class: DroneClass::Fast,
                heading: Heading::Left,
                half_extent: 22.0,
                moving: true,
                lifespan_ms: 340.0,
                links: vec![2],
            }],
            effects: vec![EffectView::ScoreText {
                x: 100.0,
                y: 200.0,
                text: "100".into(),
                color: Color::CYAN,
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.drones.len(), 1);
        assert_eq!(back.drones[0].links, vec![2]);
        assert_eq!(back.effects, snapshot.effects);
    }
}
