//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable iteration order (by orbit index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod character;
pub mod convert;
pub mod setup;
pub mod state;
pub mod tick;

pub use character::{Character, CharacterKind, ColorKey, DrawData, Player};
pub use convert::CoordinateConverter;
pub use setup::{Orbits, SetupError, setup_goals, setup_killers, setup_orbits, setup_player};
pub use state::{GameEvent, GamePhase, GameState, Rules};
pub use tick::{Command, Steer, TickInput, tick};
