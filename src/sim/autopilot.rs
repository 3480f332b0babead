//! Idle/demo steering
//!
//! Produces the same steering a player would: dodge a killer closing in on
//! the current orbit, otherwise work toward the nearest goal.

use super::character::Character;
use super::state::GameState;
use super::tick::Steer;
use crate::angular_distance;

/// Ticks of head-on closing speed treated as an imminent hit
const DANGER_TICKS: u16 = 2;

/// Steering for this tick; empty when the current course is fine
pub fn steer(state: &GameState) -> Vec<Steer> {
    let player = &state.player;
    let current = player.orbit_index();
    let step = state.rules.angle_step.unsigned_abs() as u16;
    let window = state.rules.collision_tolerance + DANGER_TICKS * 2 * step;

    let killer_on = |orbit: usize| state.killers.iter().find(|k| k.orbit_index() == orbit);
    let danger = |orbit: usize| {
        killer_on(orbit).is_some_and(|k| angular_distance(k.angle(), player.angle()) <= window)
    };

    let outward = current + 1 < state.orbits.len();
    let inward = current > 0;

    if danger(current) {
        if outward && !danger(current + 1) {
            return vec![Steer::OrbitOut];
        }
        if inward && !danger(current - 1) {
            return vec![Steer::OrbitIn];
        }
        // Nowhere to hop: run alongside the killer
        if let Some(killer) = killer_on(current) {
            return vec![if killer.is_moving_left() {
                Steer::Left
            } else {
                Steer::Right
            }];
        }
        return Vec::new();
    }

    let Some(goal) = nearest_goal(state) else {
        return Vec::new();
    };

    if goal.orbit_index() > current && !danger(current + 1) {
        return vec![Steer::OrbitOut];
    }
    if goal.orbit_index() < current && !danger(current - 1) {
        return vec![Steer::OrbitIn];
    }
    if goal.orbit_index() == current {
        // Moving left increases the angle
        let ahead_left =
            (i32::from(goal.angle()) - i32::from(player.angle())).rem_euclid(360) <= 180;
        if ahead_left != player.is_moving_left() {
            return vec![if ahead_left { Steer::Left } else { Steer::Right }];
        }
    }
    Vec::new()
}

/// Goal with the fewest orbit hops, ties broken by angular distance
fn nearest_goal(state: &GameState) -> Option<&Character> {
    let player = &state.player;
    state.goals.iter().min_by_key(|g| {
        (
            g.orbit_index().abs_diff(player.orbit_index()),
            angular_distance(g.angle(), player.angle()),
        )
    })
}
