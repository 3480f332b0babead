//! Session setup: orbit radii and initial character placement
//!
//! Orbits are evenly spaced rings around the viewport center. The list starts
//! at one spacing out and stops one slot short of the ring that would touch
//! the viewport edge, so every index in the list is a playable orbit.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::character::{Character, Player};
use super::convert::CoordinateConverter;
use crate::consts::FULL_TURN;

/// Reasons a session cannot be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Orbit spacing of zero would place every ring at the center
    ZeroSpacing,
    /// Viewport too small to hold a single orbit
    NoOrbits { width: u32, height: u32, spacing: u32 },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::ZeroSpacing => write!(f, "orbit spacing must be greater than zero"),
            SetupError::NoOrbits {
                width,
                height,
                spacing,
            } => write!(
                f,
                "viewport {}x{} has no room for orbits spaced {}px apart",
                width, height, spacing
            ),
        }
    }
}

impl std::error::Error for SetupError {}

/// Ordered radii (pixels) of the session's orbits, innermost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orbits {
    radii: Vec<u32>,
}

impl Orbits {
    pub fn radii(&self) -> &[u32] {
        &self.radii
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Radius of orbit `index`, if it exists
    pub fn radius(&self, index: usize) -> Option<u32> {
        self.radii.get(index).copied()
    }

    pub fn outermost_index(&self) -> usize {
        self.radii.len().saturating_sub(1)
    }
}

/// Compute the orbit list for a viewport
pub fn setup_orbits(viewport: &CoordinateConverter, spacing: u32) -> Result<Orbits, SetupError> {
    if spacing == 0 {
        return Err(SetupError::ZeroSpacing);
    }
    let orbit_count = (viewport.smaller_dimension() / 2) / spacing;
    let radii: Vec<u32> = (1..orbit_count).map(|i| spacing * i).collect();

    if radii.is_empty() {
        return Err(SetupError::NoOrbits {
            width: viewport.width,
            height: viewport.height,
            spacing,
        });
    }

    log::debug!("Orbits for {}x{}: {:?}", viewport.width, viewport.height, radii);
    Ok(Orbits { radii })
}

fn random_angle<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(0..FULL_TURN)
}

/// One goal per orbit at a random angle
pub fn setup_goals<R: Rng>(orbits: &Orbits, rng: &mut R) -> Vec<Character> {
    (0..orbits.len())
        .map(|i| Character::goal(i, random_angle(&mut *rng)))
        .collect()
}

/// One killer per orbit at a random angle and direction
pub fn setup_killers<R: Rng>(orbits: &Orbits, rng: &mut R) -> Vec<Character> {
    (0..orbits.len())
        .map(|i| {
            let mut killer = Character::killer(i, random_angle(&mut *rng));
            if rng.random_bool(0.5) {
                killer.move_left();
            }
            killer
        })
        .collect()
}

/// Where a fresh player goes: outermost orbit, opposite that orbit's killer,
/// travelling the same way so the two never close in.
pub fn spawn_point(orbits: &Orbits, killers: &[Character]) -> (usize, i32, bool) {
    let orbit_index = orbits.outermost_index();
    match killers.iter().find(|k| k.orbit_index() == orbit_index) {
        Some(killer) => (
            orbit_index,
            i32::from(killer.angle()) + FULL_TURN / 2,
            killer.is_moving_left(),
        ),
        None => (orbit_index, 0, false),
    }
}

/// Create the player. Must run after the killers are placed.
pub fn setup_player(orbits: &Orbits, killers: &[Character]) -> Player {
    let (orbit_index, angle, moving_left) = spawn_point(orbits, killers);
    let mut player = Player::new(orbits.len(), orbit_index, angle);
    if moving_left {
        player.move_left();
    }
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_orbits_800x600() {
        let orbits = setup_orbits(&CoordinateConverter::new(800, 600), 50).unwrap();
        assert_eq!(orbits.radii(), &[50, 100, 150, 200, 250]);
        assert_eq!(orbits.outermost_index(), 4);
        assert_eq!(orbits.radius(0), Some(50));
        assert_eq!(orbits.radius(5), None);
    }

    #[test]
    fn test_orbits_use_smaller_side() {
        let orbits = setup_orbits(&CoordinateConverter::new(300, 1000), 50).unwrap();
        assert_eq!(orbits.radii(), &[50, 100]);
    }

    #[test]
    fn test_orbits_too_small() {
        assert_eq!(
            setup_orbits(&CoordinateConverter::new(150, 150), 50),
            Err(SetupError::NoOrbits {
                width: 150,
                height: 150,
                spacing: 50
            })
        );
        assert_eq!(setup_orbits(&CoordinateConverter::new(800, 600), 0), Err(SetupError::ZeroSpacing));
    }

    #[test]
    fn test_one_goal_and_killer_per_orbit() {
        let orbits = setup_orbits(&CoordinateConverter::new(800, 600), 50).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        let goals = setup_goals(&orbits, &mut rng);
        let killers = setup_killers(&orbits, &mut rng);

        assert_eq!(goals.len(), orbits.len());
        assert_eq!(killers.len(), orbits.len());
        for (i, (g, k)) in goals.iter().zip(&killers).enumerate() {
            assert_eq!(g.orbit_index(), i);
            assert_eq!(k.orbit_index(), i);
            assert!(g.angle() < 360);
            assert!(k.angle() < 360);
        }
    }

    #[test]
    fn test_player_spawns_opposite_outer_killer() {
        let orbits = setup_orbits(&CoordinateConverter::new(800, 600), 50).unwrap();
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let killers = setup_killers(&orbits, &mut rng);
            let player = setup_player(&orbits, &killers);
            let outer = &killers[orbits.outermost_index()];

            assert_eq!(player.orbit_index(), orbits.outermost_index());
            assert_eq!(player.angle(), (outer.angle() + 180) % 360);
            assert_eq!(player.is_moving_left(), outer.is_moving_left());
            assert!(player.is_alive());
            assert_eq!(player.points_collected(), 0);
        }
    }

    #[test]
    fn test_setup_is_seed_deterministic() {
        let orbits = setup_orbits(&CoordinateConverter::new(800, 600), 50).unwrap();
        let a = setup_killers(&orbits, &mut Pcg32::seed_from_u64(42));
        let b = setup_killers(&orbits, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
