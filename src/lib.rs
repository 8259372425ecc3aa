//! # pairs-engine
//!
//! A single-player memory-matching (card-pairs) game engine.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: The engine owns the session state and mutates it
//!    only through discrete intents (`start`, `select_card`, `resolve`,
//!    `tick`). No rendering, no assets, no wall-clock sleeping.
//!
//! 2. **Host-Driven Time**: Timer ticks and the match-reveal delay are
//!    delivered by an external scheduler. The engine fences stale deliveries
//!    with session epochs, so a restart can never race a dead timer.
//!
//! 3. **Snapshot Rendering**: Hosts read immutable [`Session`] snapshots
//!    (O(1) clones via persistent data structures) and diff/re-render; the
//!    engine never calls back into the presentation layer.
//!
//! ## Modules
//!
//! - `core`: Cards, configuration, deterministic RNG, session state
//! - `engine`: Transition logic and stale-event fencing
//!
//! ## Example
//!
//! ```
//! use pairs_engine::{EngineConfig, GameEngine, Resolution, Selection};
//!
//! let mut engine = GameEngine::new(EngineConfig::new().with_symbol_count(1), 42);
//! engine.start();
//!
//! // A one-symbol deck holds exactly one pair; flip both cards.
//! let ids: Vec<_> = engine.session().active_cards().map(|card| card.id).collect();
//! assert_eq!(engine.select_card(ids[0]), Selection::Flipped);
//!
//! // The second flip hands back a ticket; the host schedules `resolve`
//! // after the reveal delay. Tests and examples may resolve immediately.
//! let ticket = match engine.select_card(ids[1]) {
//!     Selection::PairRevealed(ticket) => ticket,
//!     other => panic!("expected a revealed pair, got {:?}", other),
//! };
//!
//! assert_eq!(engine.resolve(ticket), Resolution::Won);
//! assert_eq!(engine.session().score(), 10);
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Symbol,
    EngineConfig,
    GameRng, GameRngState,
    Session, Status,
};

pub use crate::engine::{GameEngine, Resolution, ResolveTicket, Selection, SessionEpoch, Tick};
