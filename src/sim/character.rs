//! Characters positioned on orbits
//!
//! Player, goals and killers share one data shape: an orbit index and an
//! angle in whole degrees. They differ only in behavior, so the kind is a tag
//! rather than separate types. The player wraps a character with its own
//! alive flag and score.

use serde::{Deserialize, Serialize};

use crate::consts::FULL_TURN;
use crate::{angular_distance, normalize_degrees};

/// What a character is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKind {
    Player,
    Goal,
    Killer,
}

/// Palette slot a character is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorKey {
    Red,
    Green,
    HotPink,
}

impl CharacterKind {
    pub fn color_key(self) -> ColorKey {
        match self {
            CharacterKind::Player => ColorKey::HotPink,
            CharacterKind::Goal => ColorKey::Green,
            CharacterKind::Killer => ColorKey::Red,
        }
    }
}

/// Everything a renderer needs to place a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawData {
    pub orbit_index: usize,
    pub angle: u16,
    pub color: ColorKey,
}

/// A dot on an orbit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub kind: CharacterKind,
    /// Index into the session's orbit list
    orbit_index: usize,
    /// Degrees, always in [0, 360)
    angle: u16,
    /// Moving left means the angle increases each step
    moving_left: bool,
}

impl Character {
    pub fn new(kind: CharacterKind, orbit_index: usize, angle: i32) -> Self {
        Self {
            kind,
            orbit_index,
            angle: normalize_degrees(angle),
            moving_left: false,
        }
    }

    pub fn goal(orbit_index: usize, angle: i32) -> Self {
        Self::new(CharacterKind::Goal, orbit_index, angle)
    }

    pub fn killer(orbit_index: usize, angle: i32) -> Self {
        Self::new(CharacterKind::Killer, orbit_index, angle)
    }

    #[inline]
    pub fn angle(&self) -> u16 {
        self.angle
    }

    #[inline]
    pub fn orbit_index(&self) -> usize {
        self.orbit_index
    }

    /// Rotate by `delta` degrees, wrapping into [0, 360)
    pub fn change_angle(&mut self, delta: i32) {
        self.angle = normalize_degrees(i32::from(self.angle) + delta.rem_euclid(FULL_TURN));
    }

    /// Advance one tick of motion in the current direction
    pub fn step(&mut self, step: i32) {
        let step = step.rem_euclid(FULL_TURN);
        if self.moving_left {
            self.change_angle(step);
        } else {
            self.change_angle(-step);
        }
    }

    #[inline]
    pub fn is_moving_left(&self) -> bool {
        self.moving_left
    }

    pub fn move_left(&mut self) {
        self.moving_left = true;
    }

    pub fn move_right(&mut self) {
        self.moving_left = false;
    }

    pub fn draw_data(&self) -> DrawData {
        DrawData {
            orbit_index: self.orbit_index,
            angle: self.angle,
            color: self.kind.color_key(),
        }
    }

    /// Same orbit and within `tolerance` degrees of each other
    pub fn is_colliding_with(&self, other: &Character, tolerance: u16) -> bool {
        self.orbit_index == other.orbit_index
            && angular_distance(self.angle, other.angle) <= tolerance
    }
}

/// The player-controlled character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    character: Character,
    /// Number of orbits the player may move between
    orbit_count: usize,
    alive: bool,
    points_collected: u32,
}

impl Player {
    pub fn new(orbit_count: usize, orbit_index: usize, angle: i32) -> Self {
        let orbit_index = orbit_index.min(orbit_count.saturating_sub(1));
        Self {
            character: Character::new(CharacterKind::Player, orbit_index, angle),
            orbit_count,
            alive: true,
            points_collected: 0,
        }
    }

    /// Underlying character, for collision tests and drawing
    #[inline]
    pub fn character(&self) -> &Character {
        &self.character
    }

    #[inline]
    pub fn angle(&self) -> u16 {
        self.character.angle()
    }

    #[inline]
    pub fn orbit_index(&self) -> usize {
        self.character.orbit_index()
    }

    pub fn change_angle(&mut self, delta: i32) {
        self.character.change_angle(delta);
    }

    pub fn step(&mut self, step: i32) {
        self.character.step(step);
    }

    #[inline]
    pub fn is_moving_left(&self) -> bool {
        self.character.is_moving_left()
    }

    pub fn move_left(&mut self) {
        self.character.move_left();
    }

    pub fn move_right(&mut self) {
        self.character.move_right();
    }

    /// Move one orbit outward; no-op on the outermost orbit
    pub fn increment_radius_index(&mut self) {
        if self.character.orbit_index + 1 < self.orbit_count {
            self.character.orbit_index += 1;
        }
    }

    /// Move one orbit inward; no-op on the innermost orbit
    pub fn decrement_radius_index(&mut self) {
        self.character.orbit_index = self.character.orbit_index.saturating_sub(1);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn die(&mut self) {
        self.alive = false;
    }

    pub fn resurrect(&mut self) {
        self.alive = true;
    }

    /// Score a goal. Anything that is not a goal scores nothing.
    pub fn pick_up_goal(&mut self, goal: &Character) {
        if goal.kind != CharacterKind::Goal {
            return;
        }
        self.points_collected += 1;
    }

    pub fn renew_points(&mut self) {
        self.points_collected = 0;
    }

    #[inline]
    pub fn points_collected(&self) -> u32 {
        self.points_collected
    }

    /// Put the player back on an orbit at an angle and direction
    pub fn respawn(&mut self, orbit_index: usize, angle: i32, moving_left: bool) {
        self.character.orbit_index = orbit_index.min(self.orbit_count.saturating_sub(1));
        self.character.angle = normalize_degrees(angle);
        self.character.moving_left = moving_left;
    }

    pub fn is_colliding_with(&self, other: &Character, tolerance: u16) -> bool {
        self.character.is_colliding_with(other, tolerance)
    }

    pub fn draw_data(&self) -> DrawData {
        self.character.draw_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ANGLE_STEP, COLLISION_TOLERANCE};
    use proptest::prelude::*;

    #[test]
    fn test_change_angle_wraps_forward() {
        let mut player = Player::new(5, 2, 358);
        player.change_angle(5);
        assert_eq!(player.angle(), 3);
        assert_eq!(player.orbit_index(), 2);
    }

    #[test]
    fn test_change_angle_wraps_backward() {
        let mut killer = Character::killer(0, 2);
        killer.change_angle(-5);
        assert_eq!(killer.angle(), 357);
    }

    #[test]
    fn test_new_normalizes_angle() {
        assert_eq!(Character::goal(0, -180).angle(), 180);
        assert_eq!(Character::goal(0, 725).angle(), 5);
    }

    #[test]
    fn test_step_follows_direction() {
        let mut c = Character::killer(1, 100);
        c.step(ANGLE_STEP);
        assert_eq!(c.angle(), 95);
        c.move_left();
        assert!(c.is_moving_left());
        c.step(ANGLE_STEP);
        c.step(ANGLE_STEP);
        assert_eq!(c.angle(), 105);
        c.move_right();
        assert!(!c.is_moving_left());
    }

    #[test]
    fn test_radius_index_clamped_at_both_ends() {
        let mut player = Player::new(3, 2, 0);
        player.increment_radius_index();
        assert_eq!(player.orbit_index(), 2);

        player.decrement_radius_index();
        player.decrement_radius_index();
        assert_eq!(player.orbit_index(), 0);
        player.decrement_radius_index();
        assert_eq!(player.orbit_index(), 0);

        player.increment_radius_index();
        assert_eq!(player.orbit_index(), 1);
    }

    #[test]
    fn test_collision_requires_same_orbit() {
        let a = Character::killer(1, 90);
        let b = Character::goal(2, 90);
        assert!(!a.is_colliding_with(&b, COLLISION_TOLERANCE));
    }

    #[test]
    fn test_collision_tolerance_band() {
        let a = Character::killer(1, 90);
        assert!(a.is_colliding_with(&Character::goal(1, 95), COLLISION_TOLERANCE));
        assert!(a.is_colliding_with(&Character::goal(1, 85), COLLISION_TOLERANCE));
        assert!(!a.is_colliding_with(&Character::goal(1, 96), COLLISION_TOLERANCE));
        assert!(!a.is_colliding_with(&Character::goal(1, 84), COLLISION_TOLERANCE));
    }

    #[test]
    fn test_collision_across_zero() {
        let a = Character::killer(0, 358);
        assert!(a.is_colliding_with(&Character::goal(0, 2), COLLISION_TOLERANCE));
    }

    #[test]
    fn test_points_and_life() {
        let mut player = Player::new(5, 4, 0);
        assert!(player.is_alive());
        player.pick_up_goal(&Character::goal(4, 0));
        player.pick_up_goal(&Character::goal(3, 0));
        assert_eq!(player.points_collected(), 2);

        player.die();
        assert!(!player.is_alive());
        assert_eq!(player.points_collected(), 2);

        player.resurrect();
        assert!(player.is_alive());
        player.renew_points();
        assert_eq!(player.points_collected(), 0);
    }

    #[test]
    fn test_only_goals_score() {
        let mut player = Player::new(5, 4, 0);
        player.pick_up_goal(&Character::killer(4, 0));
        assert_eq!(player.points_collected(), 0);
        player.pick_up_goal(&Character::goal(4, 0));
        assert_eq!(player.points_collected(), 1);
    }

    #[test]
    fn test_extreme_deltas_wrap() {
        let mut c = Character::goal(0, 10);
        c.change_angle(i32::MAX);
        assert_eq!(c.angle(), 137);
        c.change_angle(i32::MIN);
        assert_eq!(c.angle(), 9);

        let mut k = Character::killer(0, 0);
        k.step(i32::MIN);
        assert_eq!(k.angle(), 128);
        k.move_left();
        k.step(i32::MAX);
        assert!(k.angle() < 360);
    }

    #[test]
    fn test_draw_data_colors() {
        assert_eq!(Player::new(1, 0, 10).draw_data().color, ColorKey::HotPink);
        assert_eq!(Character::goal(0, 10).draw_data().color, ColorKey::Green);
        let d = Character::killer(3, 42).draw_data();
        assert_eq!(d, DrawData { orbit_index: 3, angle: 42, color: ColorKey::Red });
    }

    #[test]
    fn test_respawn_clamps_orbit() {
        let mut player = Player::new(4, 0, 0);
        player.respawn(10, 370, true);
        assert_eq!(player.orbit_index(), 3);
        assert_eq!(player.angle(), 10);
        assert!(player.is_moving_left());
    }

    proptest! {
        #[test]
        fn prop_change_angle_stays_normalized(start in any::<i32>(), delta in any::<i32>()) {
            let mut c = Character::goal(0, start);
            c.change_angle(delta);
            prop_assert!(c.angle() < 360);
            prop_assert_eq!(i64::from(c.angle()), (i64::from(start) + i64::from(delta)).rem_euclid(360));
        }

        #[test]
        fn prop_orbit_index_always_valid(count in 1usize..12, moves in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut player = Player::new(count, count - 1, 0);
            for up in moves {
                if up {
                    player.increment_radius_index();
                } else {
                    player.decrement_radius_index();
                }
                prop_assert!(player.orbit_index() < count);
            }
        }

        #[test]
        fn prop_collision_is_symmetric(a in 0i32..360, b in 0i32..360, tol in 0u16..30) {
            let x = Character::killer(0, a);
            let y = Character::goal(0, b);
            prop_assert_eq!(x.is_colliding_with(&y, tol), y.is_colliding_with(&x, tol));
        }
    }
}
