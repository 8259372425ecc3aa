//! Core engine types: cards, configuration, RNG, session state.
//!
//! This module contains the data model the transition logic operates on.
//! Hosts configure the engine via `EngineConfig` rather than modifying the core.

pub mod card;
pub mod config;
pub mod rng;
pub mod session;

pub use card::{Card, CardId, Symbol};
pub use config::EngineConfig;
pub use rng::{GameRng, GameRngState};
pub use session::{Session, Status};
