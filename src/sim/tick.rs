//! Fixed-rate simulation tick
//!
//! Core game loop step that advances the simulation deterministically:
//! input, movement, then player interactions.

use serde::{Deserialize, Serialize};

use super::autopilot;
use super::state::{GameEvent, GamePhase, GameState};

/// Directional intents for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    /// Travel with increasing angle
    Left,
    /// Travel with decreasing angle
    Right,
    /// Hop one orbit outward
    OrbitOut,
    /// Hop one orbit inward
    OrbitIn,
}

/// Session-level commands, triggered by on-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    NewGame,
    NextLevel,
    Quit,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Steering intents in the order they arrived
    pub steer: Vec<Steer>,
    /// Button pressed this tick
    pub command: Option<Command>,
    /// Window close / quit event
    pub quit: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Quit {
        return events;
    }
    if input.quit {
        state.quit();
        events.push(GameEvent::Quit);
        return events;
    }

    match input.command {
        Some(Command::NewGame) => {
            state.new_game();
            events.push(GameEvent::NewGame);
        }
        Some(Command::NextLevel) => {
            state.next_level();
            events.push(GameEvent::NextLevel);
        }
        Some(Command::Quit) => {
            state.quit();
            events.push(GameEvent::Quit);
            return events;
        }
        None => {}
    }

    state.time_ticks += 1;

    if state.player.is_alive() {
        let steering = if input.idle_mode {
            autopilot::steer(state)
        } else {
            input.steer.clone()
        };
        apply_steering(state, &steering);
    }

    move_characters(state);

    if state.player.is_alive() {
        check_player_interactions(state, &mut events);
    }

    events
}

fn apply_steering(state: &mut GameState, steering: &[Steer]) {
    for steer in steering {
        match steer {
            Steer::Left => state.player.move_left(),
            Steer::Right => state.player.move_right(),
            Steer::OrbitOut => state.player.increment_radius_index(),
            Steer::OrbitIn => state.player.decrement_radius_index(),
        }
    }
}

/// Killers always circle; the player only while alive. Goals stay put.
fn move_characters(state: &mut GameState) {
    let step = state.rules.angle_step;
    for killer in &mut state.killers {
        killer.step(step);
    }
    if state.player.is_alive() {
        state.player.step(step);
    }
}

fn check_player_interactions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let tolerance = state.rules.collision_tolerance;
    let player = &mut state.player;

    state.goals.retain(|goal| {
        if player.is_colliding_with(goal, tolerance) {
            player.pick_up_goal(goal);
            events.push(GameEvent::GoalCollected {
                orbit_index: goal.orbit_index(),
                points: player.points_collected(),
            });
            false
        } else {
            true
        }
    });

    if state.goals.is_empty() {
        state.respawn_goals();
        log::debug!("All goals collected, spawned {}", state.goals.len());
        events.push(GameEvent::GoalsRespawned {
            count: state.goals.len(),
        });
    }

    let player = &mut state.player;
    if state
        .killers
        .iter()
        .any(|killer| player.is_colliding_with(killer, tolerance))
    {
        player.die();
        state.phase = GamePhase::GameOver;
        log::info!(
            "Player caught on orbit {} with {} points",
            player.orbit_index(),
            player.points_collected()
        );
        events.push(GameEvent::PlayerDied {
            orbit_index: player.orbit_index(),
            points: player.points_collected(),
        });
    }
}
