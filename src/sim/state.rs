//! Game state and core simulation types
//!
//! All state that must be persisted for a snapshot/determinism lives here.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::character::{Character, DrawData, Player};
use super::convert::CoordinateConverter;
use super::setup::{
    Orbits, SetupError, setup_goals, setup_killers, setup_orbits, setup_player, spawn_point,
};
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player alive and moving
    Running,
    /// Player dead; killers keep circling until New/Next
    GameOver,
    /// Quit requested, the loop should stop
    Quit,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GoalCollected { orbit_index: usize, points: u32 },
    GoalsRespawned { count: usize },
    PlayerDied { orbit_index: usize, points: u32 },
    NewGame,
    NextLevel,
    Quit,
}

/// RNG state wrapper for serialization
///
/// Every respawn draws from its own PCG stream, so the sequence depends only
/// on the seed and how many respawns happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Hand out a generator on the next unused stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Per-session movement and collision tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Degrees per tick for moving characters
    pub angle_step: i32,
    /// Degrees within which two characters on one orbit collide
    pub collision_tolerance: u16,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub rules: Rules,
    pub converter: CoordinateConverter,
    pub orbits: Orbits,
    /// Active goals, at most one per orbit
    pub goals: Vec<Character>,
    /// One killer per orbit for the whole session
    pub killers: Vec<Character>,
    pub player: Player,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session with default settings
    pub fn new(seed: u64) -> Result<Self, SetupError> {
        Self::with_settings(seed, &Settings::default())
    }

    /// Create a new session for the viewport and rules in `settings`
    pub fn with_settings(seed: u64, settings: &Settings) -> Result<Self, SetupError> {
        let converter = CoordinateConverter::new(settings.width, settings.height);
        let orbits = setup_orbits(&converter, settings.orbit_spacing)?;
        let mut rng_state = RngState::new(seed);

        let mut rng = rng_state.next_rng();
        let killers = setup_killers(&orbits, &mut rng);
        let player = setup_player(&orbits, &killers);
        let goals = setup_goals(&orbits, &mut rng_state.next_rng());

        log::info!(
            "Session seed {} with {} orbits, player at {} deg",
            seed,
            orbits.len(),
            player.angle()
        );

        Ok(Self {
            seed,
            rng_state,
            rules: Rules {
                angle_step: settings.angle_step,
                collision_tolerance: settings.collision_tolerance,
            },
            converter,
            orbits,
            goals,
            killers,
            player,
            phase: GamePhase::Running,
            time_ticks: 0,
        })
    }

    /// Replace the goal set with one fresh goal per orbit
    pub fn respawn_goals(&mut self) {
        self.goals = setup_goals(&self.orbits, &mut self.rng_state.next_rng());
    }

    /// Put the player back at the safe spawn point, alive
    pub fn respawn_player(&mut self) {
        let (orbit_index, angle, moving_left) = spawn_point(&self.orbits, &self.killers);
        self.player.respawn(orbit_index, angle, moving_left);
        self.player.resurrect();
    }

    /// "New": fresh score, fresh goals, player respawned
    pub fn new_game(&mut self) {
        self.player.renew_points();
        self.respawn_player();
        self.respawn_goals();
        self.phase = GamePhase::Running;
        log::info!("New game");
    }

    /// "Next": keep the score, fresh goals, player respawned
    pub fn next_level(&mut self) {
        self.respawn_player();
        self.respawn_goals();
        self.phase = GamePhase::Running;
        log::info!("Next round at {} points", self.player.points_collected());
    }

    pub fn quit(&mut self) {
        self.phase = GamePhase::Quit;
        log::info!("Quit requested");
    }

    pub fn points_collected(&self) -> u32 {
        self.player.points_collected()
    }

    /// Draw state for every visible character: goals, killers, then the
    /// player while alive.
    pub fn draw_data(&self) -> Vec<DrawData> {
        let mut data: Vec<DrawData> = self
            .goals
            .iter()
            .chain(&self.killers)
            .map(Character::draw_data)
            .collect();
        if self.player.is_alive() {
            data.push(self.player.draw_data());
        }
        data
    }
}
