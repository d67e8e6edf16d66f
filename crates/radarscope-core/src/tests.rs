#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::aircraft::{Aircraft, AircraftId, EntityError, RenderHandle};
    use crate::commands::DisplayCommand;
    use crate::enums::SpawnOrigin;
    use crate::geometry::{heading_between, point_on_ring};
    use crate::radial::{parse_path_data, PathDataError, Radial};
    use crate::state::{AircraftView, ScopeSnapshot};
    use crate::types::Position;

    const EPS: f64 = 1e-9;

    fn sample_aircraft() -> Aircraft {
        Aircraft::new(AircraftId::new(7), "BAW123", 100.0, 50.0, 1000, 31, 45.0)
    }

    // ---- Aircraft entity ----

    #[test]
    fn test_formatted_level_is_three_digits() {
        let mut aircraft = sample_aircraft();
        for (level, expected) in [(1000, "100"), (1240, "124"), (1010, "101"), (50, "005"), (0, "000")] {
            aircraft.level = level;
            assert_eq!(aircraft.formatted_level(), expected);
        }
    }

    #[test]
    fn test_formatted_level_length_over_generated_range() {
        let mut aircraft = sample_aircraft();
        for level in (1000..=1240).step_by(10) {
            aircraft.level = level;
            assert_eq!(aircraft.formatted_level().len(), 3, "level {level}");
        }
    }

    #[test]
    fn test_formatted_speed_is_two_digits() {
        let mut aircraft = sample_aircraft();
        for speed in 0..=39 {
            aircraft.speed = speed;
            let text = aircraft.formatted_speed();
            assert_eq!(text.len(), 2, "speed {speed}");
            assert_eq!(text.parse::<u32>().unwrap(), speed);
        }
        aircraft.speed = 5;
        assert_eq!(aircraft.formatted_speed(), "05");
    }

    #[test]
    fn test_label_lines() {
        let aircraft = sample_aircraft();
        let [first, second] = aircraft.label_lines();
        assert_eq!(first, "BAW123");
        assert_eq!(second, "100 31");
    }

    #[test]
    fn test_update_position_is_pure_data() {
        let mut aircraft = sample_aircraft();
        aircraft.update_position(-3.5, 900.0);
        assert_eq!(aircraft.position(), Position::new(-3.5, 900.0));
        assert_eq!(aircraft.heading, 45.0);
        assert_eq!(aircraft.render_handle(), None);
    }

    #[test]
    fn test_render_handle_is_set_once() {
        let mut aircraft = sample_aircraft();
        assert!(aircraft.attach_render_handle(RenderHandle::new(3)).is_ok());
        let err = aircraft
            .attach_render_handle(RenderHandle::new(4))
            .unwrap_err();
        assert_eq!(
            err,
            EntityError::HandleAlreadyAttached {
                id: AircraftId::new(7),
                existing: RenderHandle::new(3),
            }
        );
        assert_eq!(aircraft.render_handle(), Some(RenderHandle::new(3)));
    }

    #[test]
    fn test_aircraft_id_display_and_parse() {
        let id = AircraftId::new(42);
        assert_eq!(id.to_string(), "ac-42");
        assert_eq!("ac-42".parse::<AircraftId>().unwrap(), id);
        assert_eq!(" 42 ".parse::<AircraftId>().unwrap(), id);
        assert!("ac-".parse::<AircraftId>().is_err());
        assert!("plane".parse::<AircraftId>().is_err());
    }

    #[test]
    fn test_new_aircraft_has_unspecified_origin() {
        let aircraft = sample_aircraft();
        assert_eq!(aircraft.origin(), SpawnOrigin::Unspecified);
        let aircraft = aircraft.with_origin(SpawnOrigin::Ring);
        assert_eq!(aircraft.origin(), SpawnOrigin::Ring);
        assert!(!aircraft.origin().is_radial());
    }

    // ---- Geometry ----

    #[test]
    fn test_heading_straight_up_is_zero() {
        assert!(heading_between(0.0, 0.0, 0.0, -10.0).abs() < EPS);
    }

    #[test]
    fn test_heading_right_is_ninety() {
        assert!((heading_between(0.0, 0.0, 10.0, 0.0) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_heading_down_and_left() {
        assert!((heading_between(0.0, 0.0, 0.0, 10.0) - 180.0).abs() < EPS);
        // Pointing left lands at 270, the top of the unnormalized range.
        assert!((heading_between(0.0, 0.0, -10.0, 0.0) - 270.0).abs() < EPS);
        // Up-left is negative; no normalization is applied.
        assert!((heading_between(0.0, 0.0, -10.0, -10.0) + 45.0).abs() < EPS);
    }

    #[test]
    fn test_point_on_ring() {
        let center = Position::new(500.0, 300.0);
        let p = point_on_ring(center, 400.0, 0.0);
        assert!((p.x - 900.0).abs() < EPS);
        assert!((p.y - 300.0).abs() < EPS);

        let p = point_on_ring(center, 400.0, std::f64::consts::FRAC_PI_2);
        assert!((p.x - 500.0).abs() < 1e-6);
        assert!((p.y - 700.0).abs() < 1e-6);
        assert!((center.range_to(&p) - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_ring_point_heading_points_at_center() {
        let center = Position::new(500.0, 300.0);
        // Below the center, an inbound aircraft flies straight up.
        let below = Position::new(500.0, 700.0);
        assert!(below.heading_to(&center).abs() < EPS);
        // Left of the center, it flies right.
        let left = Position::new(100.0, 300.0);
        assert!((left.heading_to(&center) - 90.0).abs() < EPS);
    }

    // ---- Path data ----

    #[test]
    fn test_parse_absolute_lines() {
        let points = parse_path_data("M 0 0 L 10 0 L 10 10").unwrap();
        assert_eq!(
            points,
            vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0)]
        );
    }

    #[test]
    fn test_parse_relative_and_axis_commands() {
        let points = parse_path_data("m 1 1 l 2 0 v 3 h -1 V 0 H 8").unwrap();
        assert_eq!(
            points,
            vec![
                DVec2::new(1.0, 1.0),
                DVec2::new(3.0, 1.0),
                DVec2::new(3.0, 4.0),
                DVec2::new(2.0, 4.0),
                DVec2::new(2.0, 0.0),
                DVec2::new(8.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_parse_implicit_lineto_after_moveto() {
        let points = parse_path_data("M0,0 10,0 10,10").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], DVec2::new(10.0, 10.0));

        let points = parse_path_data("m 5 5 1 0 0 1").unwrap();
        assert_eq!(points[1], DVec2::new(6.0, 5.0));
        assert_eq!(points[2], DVec2::new(6.0, 6.0));
    }

    #[test]
    fn test_parse_compact_numbers() {
        let points = parse_path_data("M0 0L10-5L.5.5L1e2 0").unwrap();
        assert_eq!(points[1], DVec2::new(10.0, -5.0));
        assert_eq!(points[2], DVec2::new(0.5, 0.5));
        assert_eq!(points[3], DVec2::new(100.0, 0.0));
    }

    #[test]
    fn test_parse_close_path() {
        let points = parse_path_data("M 0 0 L 4 0 L 4 3 Z").unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], DVec2::new(0.0, 0.0));
    }

    #[test]
    fn test_parse_rejects_curves() {
        let err = parse_path_data("M 0 0 C 1 1 2 2 3 3").unwrap_err();
        assert_eq!(
            err,
            PathDataError::UnsupportedCommand {
                command: 'C',
                offset: 6,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_path_data(""), Err(PathDataError::Empty));
        assert_eq!(parse_path_data("   ,  "), Err(PathDataError::Empty));
        assert_eq!(
            parse_path_data("L 1 2"),
            Err(PathDataError::MissingMoveTo { offset: 0 })
        );
        assert_eq!(
            parse_path_data("1 2"),
            Err(PathDataError::MissingMoveTo { offset: 0 })
        );
        assert_eq!(
            parse_path_data("M 1"),
            Err(PathDataError::MissingCoordinates {
                command: 'M',
                offset: 0,
                expected: 2,
            })
        );
        assert_eq!(
            parse_path_data("M 0 0 L 1 1 M 5 5"),
            Err(PathDataError::DisjointSubpath { offset: 12 })
        );
        assert_eq!(
            parse_path_data("M 0 0 Z 4 4"),
            Err(PathDataError::DanglingCoordinates { offset: 8 })
        );
        assert!(matches!(
            parse_path_data("M 0 0 # 1"),
            Err(PathDataError::UnexpectedChar { ch: '#', offset: 6 })
        ));
        assert!(matches!(
            parse_path_data("M - 0"),
            Err(PathDataError::InvalidNumber { .. })
        ));
    }

    // ---- Radial geometry ----

    fn bent_radial() -> Radial {
        Radial::from_points(
            "r1",
            vec![DVec2::new(0.0, 0.0), DVec2::new(3.0, 4.0), DVec2::new(3.0, 10.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_radial_length() {
        assert!((bent_radial().length() - 11.0).abs() < EPS);
    }

    #[test]
    fn test_radial_point_at_length() {
        let radial = bent_radial();
        assert!(radial.point_at_length(5.0).distance(DVec2::new(3.0, 4.0)) < EPS);
        assert!(radial.point_at_length(2.5).distance(DVec2::new(1.5, 2.0)) < EPS);
        assert!(radial.point_at_length(8.0).distance(DVec2::new(3.0, 7.0)) < EPS);
    }

    #[test]
    fn test_radial_point_at_length_clamps() {
        let radial = bent_radial();
        assert_eq!(radial.point_at_length(-1.0), DVec2::new(0.0, 0.0));
        assert_eq!(radial.point_at_length(100.0), DVec2::new(3.0, 10.0));
    }

    #[test]
    fn test_radial_with_repeated_vertex() {
        let radial = Radial::from_points(
            "dup",
            vec![DVec2::new(0.0, 0.0), DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)],
        )
        .unwrap();
        assert_eq!(radial.point_at_length(0.0), DVec2::new(0.0, 0.0));
        assert!(radial.point_at_length(5.0).distance(DVec2::new(5.0, 0.0)) < EPS);
    }

    #[test]
    fn test_zero_length_radial_yields_start() {
        let radial = Radial::from_path_data("dot", "M 7 8").unwrap();
        assert_eq!(radial.length(), 0.0);
        assert_eq!(radial.point_at_length(3.0), DVec2::new(7.0, 8.0));
        assert_eq!(radial.start(), DVec2::new(7.0, 8.0));
    }

    #[test]
    fn test_radial_requires_points() {
        assert_eq!(
            Radial::from_points("none", Vec::new()),
            Err(PathDataError::Empty)
        );
    }

    // ---- Serialization ----

    #[test]
    fn test_display_command_serde() {
        let commands = vec![
            DisplayCommand::Respawn { count: 10 },
            DisplayCommand::MoveAircraft {
                id: AircraftId::new(3),
                x: 1.0,
                y: 2.0,
            },
            DisplayCommand::Quit,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: DisplayCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
        let json = serde_json::to_string(&DisplayCommand::Respawn { count: 4 }).unwrap();
        assert_eq!(json, r#"{"type":"Respawn","count":4}"#);
    }

    #[test]
    fn test_spawn_origin_serde_tag() {
        let json = serde_json::to_string(&SpawnOrigin::Radial { radial_index: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"Radial","radial_index":2}"#);
    }

    #[test]
    fn test_snapshot_view_from_aircraft() {
        let aircraft = sample_aircraft().with_origin(SpawnOrigin::Ring);
        let view = AircraftView::from(&aircraft);
        assert_eq!(view.callsign, "BAW123");
        assert_eq!(view.data_block, "100 31");
        assert_eq!(view.position, Position::new(100.0, 50.0));

        let snapshot = ScopeSnapshot {
            spawn_pass: 1,
            airfield: Position::new(500.0, 300.0),
            radial_count: 0,
            aircraft: vec![view],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""id":7"#));
        let back: ScopeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
