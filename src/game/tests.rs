#[cfg(test)]
mod tests {
    use crate::config::game::{GRID_COL, GRID_ROW, NODE_LAYOUT};
    use crate::game::actions::PlayerAction;
    use crate::game::grid::*;
    use crate::game::state::GameState;
    use crate::game::systems::{compute_stability, is_connected};
    use crate::game::types::*;

    fn running_state() -> GameState {
        let mut state = GameState::new();
        state.is_running = true;
        state
    }

    fn place_at(state: &mut GameState, x: usize, y: usize) {
        state.cursor = Position { x, y };
        assert!(state.apply_player_action(PlayerAction::Place));
    }

    fn node(state: &GameState, x: usize, y: usize) -> &Node {
        cell_at(&state.grid, Position { x, y })
            .and_then(Cell::as_node)
            .expect("node expected")
    }

    #[test]
    fn test_starting_layout() {
        let state = GameState::new();
        assert_eq!(state.grid.len(), GRID_ROW);
        assert!(state.grid.iter().all(|row| row.len() == GRID_COL));
        assert_eq!(node_positions(&state.grid).len(), NODE_LAYOUT.len());
        for pos in NODE_LAYOUT {
            let cell = cell_at(&state.grid, pos).expect("node missing");
            assert_eq!(cell.pos(), pos);
            assert!(!cell.is_active());
        }
        assert_eq!(count_links(&state.grid), 0);
        assert_eq!(state.cursor, Position { x: 0, y: 0 });
        assert!(!state.is_running);
        assert_eq!(state.stability, 0.0);
    }

    #[test]
    fn test_cursor_stays_inside_grid() {
        let mut state = GameState::new();
        assert!(!state.apply_player_action(PlayerAction::Move(Direction::Up)));
        assert!(!state.apply_player_action(PlayerAction::Move(Direction::Left)));
        for _ in 0..10 {
            state.apply_player_action(PlayerAction::Move(Direction::Right));
            state.apply_player_action(PlayerAction::Move(Direction::Down));
        }
        assert_eq!(state.cursor, Position { x: 4, y: 4 });
    }

    #[test]
    fn test_place_only_on_empty_cell() {
        let mut state = GameState::new();
        place_at(&mut state, 0, 0);
        assert!(!state.apply_player_action(PlayerAction::Place));

        state.cursor = Position { x: 1, y: 1 };
        assert!(!state.apply_player_action(PlayerAction::Place));
        assert!(matches!(cell_at(&state.grid, state.cursor), Some(Cell::Node(_))));
        assert_eq!(count_links(&state.grid), 1);
    }

    #[test]
    fn test_new_link_is_horizontal_and_active() {
        let mut state = GameState::new();
        place_at(&mut state, 2, 0);
        let link = cell_at(&state.grid, Position { x: 2, y: 0 }).and_then(Cell::as_link).unwrap();
        assert_eq!(link.rotation, Rotation::Horizontal);
        assert!(link.is_active);
    }

    #[test]
    fn test_rotate_toggles_link_and_ignores_node() {
        let mut state = GameState::new();
        place_at(&mut state, 0, 0);
        assert!(state.apply_player_action(PlayerAction::Rotate));
        let rotation = |s: &GameState| cell_at(&s.grid, Position { x: 0, y: 0 }).and_then(Cell::as_link).unwrap().rotation;
        assert_eq!(rotation(&state), Rotation::Vertical);
        state.apply_player_action(PlayerAction::Rotate);
        assert_eq!(rotation(&state), Rotation::Horizontal);

        state.cursor = Position { x: 1, y: 1 };
        let before = state.grid.clone();
        assert!(!state.apply_player_action(PlayerAction::Rotate));
        assert_eq!(state.grid, before);

        state.cursor = Position { x: 2, y: 2 };
        assert!(!state.apply_player_action(PlayerAction::Rotate));
    }

    #[test]
    fn test_update_does_nothing_while_paused() {
        let mut state = GameState::new();
        place_at(&mut state, 0, 1);
        state.update();
        assert_eq!(state.stability, 0.0);
        assert_eq!(state.tick, 0);
        assert!(!node(&state, 1, 1).is_active);
    }

    #[test]
    fn test_stability_penalties_without_connections() {
        let mut state = running_state();
        state.update();
        assert_eq!(state.stability, 60.0);

        place_at(&mut state, 0, 4);
        place_at(&mut state, 4, 4);
        state.update();
        assert_eq!(state.stability, 70.0);
        assert_eq!(state.tick, 2);
    }

    #[test]
    fn test_horizontal_link_connects_left_and_right() {
        let mut state = running_state();
        place_at(&mut state, 2, 1); // right of (1,1)
        place_at(&mut state, 2, 3); // left of (3,3)
        state.update();
        assert!(node(&state, 1, 1).is_active);
        assert!(node(&state, 3, 3).is_active);
        assert!(!node(&state, 4, 2).is_active);
        assert_eq!(state.stability, 20.0 + 2.0 * 5.0);
    }

    #[test]
    fn test_vertical_link_required_above_and_below() {
        let mut state = running_state();
        place_at(&mut state, 4, 1); // above (4,2), horizontal
        state.update();
        assert!(!node(&state, 4, 2).is_active);

        state.apply_player_action(PlayerAction::Rotate);
        state.update();
        assert!(node(&state, 4, 2).is_active);
        assert_eq!(state.stability, 40.0 + 5.0);
    }

    #[test]
    fn test_vertical_link_beside_node_does_not_connect() {
        let mut state = running_state();
        place_at(&mut state, 0, 1);
        state.apply_player_action(PlayerAction::Rotate);
        assert!(!is_connected(&state.grid, Position { x: 1, y: 1 }));
        state.update();
        assert!(!node(&state, 1, 1).is_active);
    }

    #[test]
    fn test_adjacent_nodes_do_not_connect_each_other() {
        let pair = [Position { x: 1, y: 1 }, Position { x: 2, y: 1 }];
        let mut grid = generate_layout(GRID_ROW, GRID_COL, &pair);

        assert_eq!(compute_stability(&mut grid), 40.0);
        for pos in pair {
            assert!(!cell_at(&grid, pos).unwrap().is_active());
        }
    }

    #[test]
    fn test_inactive_link_does_not_connect() {
        let mut state = running_state();
        place_at(&mut state, 0, 1);
        if let Some(Cell::Link(link)) = cell_at_mut(&mut state.grid, Position { x: 0, y: 1 }) {
            link.is_active = false;
        }
        assert!(!is_connected(&state.grid, Position { x: 1, y: 1 }));
    }

    #[test]
    fn test_node_activation_latches() {
        let mut state = running_state();
        place_at(&mut state, 0, 1);
        state.update();
        assert!(node(&state, 1, 1).is_active);

        state.apply_player_action(PlayerAction::Rotate);
        state.update();
        assert!(node(&state, 1, 1).is_active);
        assert_eq!(state.stability, 40.0 + 5.0);
    }

    #[test]
    fn test_solving_every_node() {
        let mut state = running_state();
        place_at(&mut state, 0, 1);
        place_at(&mut state, 2, 3);
        place_at(&mut state, 4, 3);
        state.apply_player_action(PlayerAction::Rotate);
        state.update();
        assert!(state.is_solved());
        assert_eq!(state.active_node_count(), 3);
        assert_eq!(state.stability, 15.0);
    }

    #[test]
    fn test_reset_restores_layout_but_keeps_cursor() {
        let mut state = running_state();
        place_at(&mut state, 0, 1);
        state.update();
        state.cursor = Position { x: 3, y: 0 };

        state.apply_player_action(PlayerAction::Reset);
        assert_eq!(count_links(&state.grid), 0);
        assert_eq!(state.active_node_count(), 0);
        assert_eq!(state.stability, 0.0);
        assert_eq!(state.tick, 0);
        assert!(!state.is_running);
        assert_eq!(state.cursor, Position { x: 3, y: 0 });
    }

    #[test]
    fn test_toggle_run() {
        let mut state = GameState::new();
        state.apply_player_action(PlayerAction::ToggleRun);
        assert!(state.is_running);
        state.apply_player_action(PlayerAction::ToggleRun);
        assert!(!state.is_running);
    }

    #[test]
    fn test_compute_stability_on_bare_grid() {
        let mut grid = generate_layout(GRID_ROW, GRID_COL, &[Position { x: 0, y: 0 }]);
        assert_eq!(compute_stability(&mut grid), 20.0);

        place_link(&mut grid, Position { x: 1, y: 0 });
        assert_eq!(compute_stability(&mut grid), 5.0);
    }

    #[test]
    fn test_neighbor_at_border() {
        let grid = generate_grid(GRID_ROW, GRID_COL);
        let corner = Position { x: 4, y: 4 };
        assert_eq!(neighbor(&grid, corner, Direction::Right), None);
        assert_eq!(neighbor(&grid, corner, Direction::Down), None);
        assert_eq!(neighbor(&grid, corner, Direction::Up), Some(Position { x: 4, y: 3 }));
        assert_eq!(neighbor(&grid, Position { x: 0, y: 0 }, Direction::Left), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("Up".parse::<PlayerAction>().unwrap(), PlayerAction::Move(Direction::Up));
        assert_eq!(" place ".parse::<PlayerAction>().unwrap(), PlayerAction::Place);
        assert!("fly".parse::<PlayerAction>().is_err());
    }
}
