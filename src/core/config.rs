//! Engine configuration: the tunable parameters of a session.
//!
//! Defaults mirror the classic ruleset: a 6-symbol deck (12 cards), a
//! 120-second timer, 10 points per pair, an 800 ms reveal window before a
//! pair resolves.
//!
//! `grid_columns` and `time_warning_threshold` are presentation hints carried
//! here so engine and host share one source of truth; the transition logic
//! never reads them.

use serde::{Deserialize, Serialize};

/// Complete engine configuration.
///
/// Built once per engine instance; not runtime-reconfigurable. Use the
/// `with_*` builders to deviate from the defaults:
///
/// ```
/// use pairs_engine::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_symbol_count(8)
///     .with_session_length(90);
///
/// assert_eq!(config.deck_size(), 16);
/// assert_eq!(config.session_length, 90);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Session length in seconds.
    pub session_length: u32,

    /// Points awarded per matched pair.
    pub match_score: u32,

    /// Delay in milliseconds between the second selection and resolution.
    /// The host's scheduler owns the delay; the engine only records it.
    pub match_reveal_delay_ms: u64,

    /// Milliseconds between timer ticks. One tick = one second of game time.
    pub tick_interval_ms: u64,

    /// Number of distinct symbols; the deck holds twice this many cards.
    pub symbol_count: u16,

    /// Grid width hint for the presentation layer. No engine semantics.
    pub grid_columns: u16,

    /// Seconds remaining at which hosts show a low-time cue. No engine semantics.
    pub time_warning_threshold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            session_length: 120,
            match_score: 10,
            match_reveal_delay_ms: 800,
            tick_interval_ms: 1000,
            symbol_count: 6,
            grid_columns: 3,
            time_warning_threshold: 30,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session length in seconds.
    #[must_use]
    pub fn with_session_length(mut self, seconds: u32) -> Self {
        assert!(seconds >= 1, "Session must last at least one second");
        self.session_length = seconds;
        self
    }

    /// Set the points awarded per matched pair.
    #[must_use]
    pub fn with_match_score(mut self, points: u32) -> Self {
        self.match_score = points;
        self
    }

    /// Set the reveal delay before a pair resolves.
    #[must_use]
    pub fn with_match_reveal_delay_ms(mut self, millis: u64) -> Self {
        self.match_reveal_delay_ms = millis;
        self
    }

    /// Set the timer tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, millis: u64) -> Self {
        self.tick_interval_ms = millis;
        self
    }

    /// Set the number of distinct symbols (half the deck size).
    #[must_use]
    pub fn with_symbol_count(mut self, count: u16) -> Self {
        assert!(count >= 1, "Deck needs at least one symbol pair");
        self.symbol_count = count;
        self
    }

    /// Set the grid width hint.
    #[must_use]
    pub fn with_grid_columns(mut self, columns: u16) -> Self {
        self.grid_columns = columns;
        self
    }

    /// Set the low-time warning threshold in seconds.
    #[must_use]
    pub fn with_time_warning_threshold(mut self, seconds: u32) -> Self {
        self.time_warning_threshold = seconds;
        self
    }

    /// Total number of cards in a freshly built deck.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.symbol_count as usize * 2
    }
}
