#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::error::Rejection;
    use crate::events::GameEvent;
    use crate::state::{GameStateSnapshot, GridView};
    use crate::types::{GridCoord, Position, SimTime};

    #[test]
    fn test_step_towards_moves_fixed_distance() {
        let mut pos = Position::new(0.0, 0.0);
        let arrived = pos.step_towards(&Position::new(10.0, 0.0), 3.0);
        assert!(!arrived);
        assert!((pos.x - 3.0).abs() < 1e-12);
        assert!(pos.y.abs() < 1e-12);
    }

    #[test]
    fn test_step_towards_snaps_within_one_step() {
        let mut pos = Position::new(0.0, 0.0);
        let target = Position::new(3.0, 4.0);
        assert!(pos.step_towards(&target, 5.0), "exactly one step away");
        assert_eq!(pos, target);
    }

    #[test]
    fn test_distance() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(4.0, 5.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_coord_center_and_adjacency() {
        let c = GridCoord::new(1, 2);
        assert_eq!(c.center(), Position::new(100.0, 60.0));
        assert!(c.is_adjacent(&GridCoord::new(1, 3)));
        assert!(c.is_adjacent(&GridCoord::new(0, 2)));
        assert!(!c.is_adjacent(&GridCoord::new(2, 3)), "diagonal");
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn test_cell_state_codes() {
        for state in [CellState::Empty, CellState::Path, CellState::Occupied] {
            assert_eq!(CellState::from_code(state.code()), Some(state));
        }
        assert_eq!(CellState::from_code(7), None);
    }

    #[test]
    fn test_sim_time_one_second() {
        let mut t = SimTime::default();
        for _ in 0..60 {
            t.advance();
        }
        assert_eq!(t.tick, 60);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_command_json_shape() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"PlaceTower","row":2,"col":3,"kind":"frost"}"#)
                .unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::PlaceTower {
                row: 2,
                col: 3,
                kind: TowerKind::Frost
            }
        );

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"StartNextWave"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::StartNextWave);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_string(&GameEvent::Sound {
            cue: SoundCue::PlaceTower,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"Sound","cue":"place_tower"}"#);
    }

    #[test]
    fn test_rejection_messages() {
        let r = Rejection::InsufficientFunds {
            needed: 150,
            available: 90,
        };
        assert_eq!(r.to_string(), "Not enough money (need 150, have 90).");
        assert_eq!(
            Rejection::TileOccupied {
                cell: GridCoord::new(0, 0)
            }
            .to_string(),
            "This tile is occupied or part of the path."
        );
    }

    #[test]
    fn test_grid_view_cell_bounds() {
        let grid = GridView {
            rows: 2,
            cols: 2,
            cells: vec![
                CellState::Empty,
                CellState::Path,
                CellState::Occupied,
                CellState::Empty,
            ],
        };
        assert_eq!(grid.cell(0, 1), Some(CellState::Path));
        assert_eq!(grid.cell(1, 0), Some(CellState::Occupied));
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(0, 2), None);
    }

    #[test]
    fn test_default_snapshot_has_no_map() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::NoMap);
        assert!(snap.map.is_none());
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::NoMap);
    }
}
