//! Per-frame simulation tick
//!
//! Advances the game state by one frame delta and runs the Running/GameOver
//! state machine.

use super::collision::player_hits_obstacle;
use super::state::{GameEvent, GamePhase, GameState, Obstacle, Player};
use crate::consts::SCREEN_WIDTH;
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (pressed this frame)
    pub jump: bool,
    /// Restart after game over (pressed this frame)
    pub restart: bool,
}

/// What happened to the player during `step_player`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStep {
    pub jumped: bool,
    pub landed: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // Frozen until restart; jump is ignored here
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
            state.events.push(GameEvent::Restarted);
        }
        return;
    }

    state.time_ticks += 1;

    let step = step_player(&mut state.player, input.jump, &state.tuning, dt);
    if step.jumped {
        state.events.push(GameEvent::Jumped);
    }
    if step.landed {
        state.events.push(GameEvent::Landed);
    }

    if advance_obstacle(&mut state.obstacle, dt) {
        state.score += 1;
        state.events.push(GameEvent::ObstacleCleared { score: state.score });
    }

    if player_hits_obstacle(&state.player, &state.obstacle) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Collided { score: state.score });
    }
}

/// Jump, integrate gravity, then clamp to the floor
pub fn step_player(player: &mut Player, jump: bool, tuning: &Tuning, dt: f32) -> PlayerStep {
    let mut step = PlayerStep::default();

    // No double jump, no buffering
    if jump && !player.airborne {
        player.airborne = true;
        player.velocity.y = tuning.jump_velocity;
        step.jumped = true;
    }

    player.velocity.y += tuning.gravity * dt;
    player.rect.pos.y += player.velocity.y * dt;

    let floor = player.floor_y();
    if player.rect.pos.y > floor {
        player.rect.pos.y = floor;
        player.velocity.y = 0.0;
        if player.airborne {
            player.airborne = false;
            step.landed = true;
        }
    }

    step
}

/// Scroll the obstacle left; returns true if it was recycled to the right edge.
///
/// At most one recycle per call, however large `dt` is.
pub fn advance_obstacle(obstacle: &mut Obstacle, dt: f32) -> bool {
    obstacle.rect.pos.x -= obstacle.speed * dt;

    if obstacle.rect.pos.x < -obstacle.rect.width() {
        obstacle.rect.pos.x = SCREEN_WIDTH;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use proptest::prelude::*;

    const FRAME_DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_resting_player_stays_on_floor() {
        let mut player = Player::default();
        let floor = player.floor_y();

        let step = step_player(&mut player, false, &Tuning::default(), 0.1);

        assert_eq!(player.rect.pos.y, floor);
        assert_eq!(player.velocity.y, 0.0);
        assert!(!player.airborne);
        assert_eq!(step, PlayerStep::default());
    }

    #[test]
    fn test_jump_sets_impulse() {
        let mut player = Player::default();
        let tuning = Tuning::default();

        let step = step_player(&mut player, true, &tuning, FRAME_DT);

        assert!(step.jumped);
        assert!(player.airborne);
        let expected_vel = tuning.jump_velocity + tuning.gravity * FRAME_DT;
        assert!((player.velocity.y - expected_vel).abs() < 1e-3);
        assert!(player.rect.pos.y < player.floor_y());
    }

    #[test]
    fn test_no_double_jump() {
        let mut player = Player::default();
        let tuning = Tuning::default();
        step_player(&mut player, true, &tuning, FRAME_DT);

        let mut ignored = player.clone();
        let mut plain = player.clone();
        let step = step_player(&mut ignored, true, &tuning, FRAME_DT);
        step_player(&mut plain, false, &tuning, FRAME_DT);

        assert!(!step.jumped);
        assert_eq!(ignored, plain);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut player = Player::default();
        player.rect.pos.y = 200.0;
        player.velocity.y = -120.0;
        player.airborne = true;
        let before = player.clone();

        step_player(&mut player, false, &Tuning::default(), 0.0);
        assert_eq!(player, before);

        let mut obstacle = Obstacle::spawn(200.0);
        obstacle.rect.pos.x = 321.0;
        assert!(!advance_obstacle(&mut obstacle, 0.0));
        assert_eq!(obstacle.rect.pos.x, 321.0);
    }

    #[test]
    fn test_full_jump_lands() {
        let mut player = Player::default();
        let tuning = Tuning::default();
        let mut landed_after = None;

        step_player(&mut player, true, &tuning, FRAME_DT);
        for frame in 1..120 {
            if step_player(&mut player, false, &tuning, FRAME_DT).landed {
                landed_after = Some(frame);
                break;
            }
        }

        let frames = landed_after.expect("player should land");
        // Roughly 0.9s of air time at 60 FPS
        assert!((50..=56).contains(&frames), "landed after {} frames", frames);
        assert!(player.on_ground());
    }

    #[test]
    fn test_obstacle_moves_without_recycle() {
        let mut obstacle = Obstacle::spawn(200.0);
        obstacle.rect.pos.x = 5.0;

        let recycled = advance_obstacle(&mut obstacle, 0.1);

        assert!(!recycled);
        assert!((obstacle.rect.pos.x - -15.0).abs() < 1e-4);
    }

    #[test]
    fn test_obstacle_recycles_past_left_edge() {
        let mut obstacle = Obstacle::spawn(200.0);
        obstacle.rect.pos.x = -35.0;

        assert!(advance_obstacle(&mut obstacle, 0.1));
        assert_eq!(obstacle.rect.pos.x, SCREEN_WIDTH);
        assert_eq!(obstacle.speed, 200.0);
    }

    #[test]
    fn test_tick_scores_on_recycle() {
        let mut state = GameState::default();
        state.obstacle.rect.pos.x = -39.0;

        tick(&mut state, &TickInput::default(), 0.1);

        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.events, vec![GameEvent::ObstacleCleared { score: 1 }]);
    }

    #[test]
    fn test_tick_collision_ends_run() {
        let mut state = GameState::default();
        state.player.rect = Rect::new(100.0, 390.0, 40.0, 40.0);
        state.obstacle.rect = Rect::new(100.0, 360.0, 40.0, 40.0);

        tick(&mut state, &TickInput::default(), FRAME_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::Collided { score: 0 }));
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = GameState::default();
        state.obstacle.rect.pos.x = state.player.rect.pos.x;
        state.score = 4;
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(state.is_over());

        let player = state.player.clone();
        let obstacle = state.obstacle.clone();
        let ticks = state.time_ticks;

        for _ in 0..10 {
            let input = TickInput {
                jump: true,
                ..Default::default()
            };
            tick(&mut state, &input, FRAME_DT);
        }

        assert!(state.is_over());
        assert_eq!(state.score, 4);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.player, player);
        assert_eq!(state.obstacle, obstacle);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_restart_from_game_over() {
        let fresh = GameState::default();
        let mut state = GameState::default();
        state.obstacle.rect.pos.x = state.player.rect.pos.x;
        state.score = 9;
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(state.is_over());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, FRAME_DT);

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.player, fresh.player);
        assert_eq!(state.obstacle, fresh.obstacle);
        assert_eq!(state.events, vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_restart_while_running_is_noop() {
        let mut with_restart = GameState::default();
        let mut without = GameState::default();
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };

        for _ in 0..30 {
            tick(&mut with_restart, &restart, FRAME_DT);
            tick(&mut without, &TickInput::default(), FRAME_DT);
        }

        assert_eq!(with_restart.phase, GamePhase::Running);
        assert_eq!(with_restart.time_ticks, 30);
        assert_eq!(with_restart.player, without.player);
        assert_eq!(with_restart.obstacle, without.obstacle);
    }

    #[test]
    fn test_determinism() {
        // Same inputs, same outcome
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();

        for frame in 0..600 {
            let input = TickInput {
                jump: frame % 45 == 0,
                restart: frame % 100 == 0,
            };
            tick(&mut state1, &input, FRAME_DT);
            tick(&mut state2, &input, FRAME_DT);
        }

        assert_eq!(state1.snapshot_json(), state2.snapshot_json());
    }

    #[test]
    fn test_idle_player_is_eventually_hit() {
        let mut state = GameState::default();
        for _ in 0..(10 * 60) {
            tick(&mut state, &TickInput::default(), FRAME_DT);
            if state.is_over() {
                break;
            }
        }
        assert!(state.is_over());
        assert_eq!(state.score, 0);
    }

    proptest! {
        #[test]
        fn prop_player_never_below_floor(
            y in -1000.0f32..360.0,
            vel in -5000.0f32..5000.0,
            airborne in any::<bool>(),
            jump in any::<bool>(),
            dt in 0.0f32..10.0,
        ) {
            let mut player = Player::default();
            player.rect.pos.y = y;
            player.velocity.y = vel;
            player.airborne = airborne;

            step_player(&mut player, jump, &Tuning::default(), dt);

            prop_assert!(player.rect.pos.y <= player.floor_y());
        }

        #[test]
        fn prop_airborne_jump_is_ignored(
            y in -500.0f32..300.0,
            vel in -1000.0f32..1000.0,
            dt in 0.0f32..0.1,
        ) {
            let mut player = Player::default();
            player.rect.pos.y = y;
            player.velocity.y = vel;
            player.airborne = true;

            let mut ignored = player.clone();
            let step = step_player(&mut ignored, true, &Tuning::default(), dt);
            step_player(&mut player, false, &Tuning::default(), dt);

            prop_assert!(!step.jumped);
            prop_assert_eq!(ignored, player);
        }

        #[test]
        fn prop_one_point_per_recycle(x in -40.0f32..800.0, dt in 0.0f32..1000.0) {
            let mut state = GameState::default();
            // Keep the obstacle clear of the player so only scoring is exercised
            state.obstacle.rect.pos.y = -200.0;
            state.obstacle.rect.pos.x = x;

            tick(&mut state, &TickInput::default(), dt);

            prop_assert!(state.score <= 1);
            let recycled = state.obstacle.rect.pos.x == SCREEN_WIDTH;
            prop_assert_eq!(state.score == 1, recycled);
        }
    }
}
