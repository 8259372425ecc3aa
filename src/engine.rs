//! The game engine: transition logic for a card-pairs session.
//!
//! ## Intents
//!
//! The host drives the engine with four intents:
//!
//! - [`GameEngine::start`] - shuffle a fresh deck, reset score/timer/status
//! - [`GameEngine::select_card`] - a tap on a card
//! - [`GameEngine::resolve`] - the delayed second phase of a revealed pair
//! - [`GameEngine::tick`] - one elapsed second from the host's timer
//!
//! Invalid intents (tapping a removed card, tapping during the reveal window,
//! tapping after the game ended) are silent no-ops reported as
//! [`Selection::Ignored`]; the precondition checks absorb racing or stale UI
//! events without an error channel. The one fail-fast condition is driving
//! the engine before the first `start()` - that is a caller bug, not a UI
//! race.
//!
//! ## Two-Phase Match Resolution
//!
//! Revealing the second card does not evaluate the match. It flags the
//! session as `resolving` and returns a [`ResolveTicket`]; the host schedules
//! a call to `resolve(ticket)` after `match_reveal_delay_ms`, giving the
//! player time to see both faces. The engine never sleeps.
//!
//! ## Epochs and Stale Events
//!
//! Every `start()` bumps the [`SessionEpoch`]. Tickets and ticks carry the
//! epoch they were issued under, and the engine ignores deliveries from a
//! superseded session. A restart while a resolve or tick is in flight
//! therefore cannot corrupt the new session, whether or not the host manages
//! to cancel its timers in time.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::card::{Card, CardId, Symbol};
use crate::core::config::EngineConfig;
use crate::core::rng::GameRng;
use crate::core::session::{Session, Status};

/// Monotonic session generation.
///
/// Bumped by every [`GameEngine::start`]. Scheduled events carry the epoch
/// they were issued under; the engine discards deliveries whose epoch no
/// longer matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    /// Get the raw generation counter.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Capability to resolve one revealed pair.
///
/// Issued by the second accepted selection, valid for exactly one resolution
/// within its epoch. Delivering it late or twice yields [`Resolution::Stale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveTicket {
    epoch: SessionEpoch,
}

impl ResolveTicket {
    /// The epoch this ticket was issued under.
    #[must_use]
    pub const fn epoch(self) -> SessionEpoch {
        self.epoch
    }
}

/// Outcome of [`GameEngine::select_card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A precondition failed; nothing changed.
    Ignored,
    /// The first card of a pair is now face-up.
    Flipped,
    /// The second card is face-up and the session entered the reveal window.
    /// The host must schedule `resolve(ticket)` after `match_reveal_delay_ms`.
    PairRevealed(ResolveTicket),
}

/// Outcome of [`GameEngine::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The ticket belonged to a superseded session, an already-resolved pair,
    /// or a session that ended while the reveal was pending. Nothing changed.
    Stale,
    /// The symbols matched; both cards were removed and the score advanced.
    Matched,
    /// The symbols differed; the cards flipped back down.
    NoMatch,
    /// The symbols matched and the board is now empty. The session is won.
    Won,
}

/// Outcome of [`GameEngine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The tick belonged to a superseded or finished session. Nothing changed.
    Stale,
    /// One second elapsed; the session continues.
    Ticked,
    /// The countdown reached zero with pairs remaining. The session is lost.
    Expired,
}

/// The card-pairs game engine.
///
/// Owns the live [`Session`], the deterministic shuffle RNG, and the epoch
/// counter. Not internally concurrent: a multi-threaded host must serialize
/// intents through a single mutual-exclusion boundary (e.g.
/// `Mutex<GameEngine>`).
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    session: Option<Session>,
    epoch: u64,
}

impl GameEngine {
    /// Create an engine with the given configuration and shuffle seed.
    ///
    /// No session exists until the first [`GameEngine::start`].
    #[must_use]
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            session: None,
            epoch: 0,
        }
    }

    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(config: EngineConfig) -> Self {
        Self {
            config,
            rng: GameRng::from_entropy(),
            session: None,
            epoch: 0,
        }
    }

    /// Start a fresh session, replacing any existing one.
    ///
    /// Builds the full pair deck (`symbol_count * 2` cards, the pair for
    /// symbol `k` holding ids `2k` and `2k + 1`), shuffles it, and resets
    /// score, timer, and status. Returns the new epoch; the host restarts its
    /// tick timer against it. Everything scheduled under earlier epochs is
    /// dead on arrival.
    pub fn start(&mut self) -> SessionEpoch {
        self.epoch += 1;

        let mut deck: Vec<Card> = (0..u32::from(self.config.symbol_count))
            .flat_map(|k| {
                let symbol = Symbol::new(k as u16);
                [
                    Card::new(CardId::new(k * 2), symbol),
                    Card::new(CardId::new(k * 2 + 1), symbol),
                ]
            })
            .collect();
        self.rng.shuffle(&mut deck);

        debug!(
            epoch = self.epoch,
            cards = deck.len(),
            session_length = self.config.session_length,
            "session started"
        );

        self.session = Some(Session::new(
            deck.into_iter().collect::<Vector<Card>>(),
            self.config.session_length,
        ));

        SessionEpoch(self.epoch)
    }

    /// Handle a tap on a card.
    ///
    /// The selection takes effect only while the session is active, outside
    /// the reveal window, for a card that is in play, not already selected,
    /// and with fewer than two cards face-up. Anything else is reported as
    /// [`Selection::Ignored`] with no state change.
    pub fn select_card(&mut self, id: CardId) -> Selection {
        let epoch = SessionEpoch(self.epoch);
        let session = self.session_mut();

        let accepted = session.status() == Status::Active
            && !session.resolving()
            && session.contains(id)
            && !session.is_face_up(id)
            && session.selected().len() < 2;

        if !accepted {
            trace!(card = id.raw(), "selection ignored");
            return Selection::Ignored;
        }

        session.selected.push(id);

        if session.selected.len() == 2 {
            session.resolving = true;
            trace!(card = id.raw(), "pair revealed");
            Selection::PairRevealed(ResolveTicket { epoch })
        } else {
            trace!(card = id.raw(), "card flipped");
            Selection::Flipped
        }
    }

    /// Resolve a revealed pair after the reveal delay.
    ///
    /// Evaluates the match, clears the selection, and closes the reveal
    /// window in one atomic step. Matching cards are removed and scored;
    /// emptying the board wins the session. A stale ticket - wrong epoch,
    /// already resolved, or the session went terminal while the reveal was
    /// pending - changes nothing.
    pub fn resolve(&mut self, ticket: ResolveTicket) -> Resolution {
        if ticket.epoch.0 != self.epoch {
            trace!(ticket = ticket.epoch.0, current = self.epoch, "stale resolve");
            return Resolution::Stale;
        }

        let match_score = self.config.match_score;
        let session = self.session_mut();

        if session.status() != Status::Active || !session.resolving() {
            trace!("resolve outside the reveal window");
            return Resolution::Stale;
        }

        let (first, second) = session
            .selected_pair()
            .expect("resolving window implies two selected cards");

        session.selected.clear();
        session.resolving = false;

        if !first.pairs_with(&second) {
            trace!(first = first.id.raw(), second = second.id.raw(), "no match");
            return Resolution::NoMatch;
        }

        session
            .active_cards
            .retain(|card| card.id != first.id && card.id != second.id);
        session.score += match_score;

        debug!(
            score = session.score,
            remaining = session.active_cards.len(),
            "pair matched"
        );

        if session.active_cards.is_empty() {
            session.status = Status::Won;
            debug!("all pairs matched");
            Resolution::Won
        } else {
            Resolution::Matched
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Delivered by the host's timer once per `tick_interval_ms`. Draining
    /// the countdown with pairs still on the board loses the session. Ticks
    /// from a superseded epoch or against a terminal session change nothing;
    /// a terminal status, once set, is never overwritten.
    pub fn tick(&mut self, epoch: SessionEpoch) -> Tick {
        if epoch.0 != self.epoch {
            trace!(tick = epoch.0, current = self.epoch, "stale tick");
            return Tick::Stale;
        }

        let session = self.session_mut();

        if session.status() != Status::Active {
            return Tick::Stale;
        }

        if session.time_remaining > 0 {
            session.time_remaining -= 1;
            if session.time_remaining == 0 && !session.active_cards.is_empty() {
                session.status = Status::Lost;
                debug!(score = session.score, "time expired");
                return Tick::Expired;
            }
        }

        Tick::Ticked
    }

    // === Queries ===

    /// Borrow the live session.
    ///
    /// ## Panics
    ///
    /// Panics if called before the first [`GameEngine::start`].
    #[must_use]
    pub fn session(&self) -> &Session {
        self.session
            .as_ref()
            .expect("start() must be called before the session is observed")
    }

    /// Take an immutable snapshot of the session for rendering.
    ///
    /// O(1): the card sequence is a persistent structure shared with the live
    /// session.
    ///
    /// ## Panics
    ///
    /// Panics if called before the first [`GameEngine::start`].
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session().clone()
    }

    /// Check whether a card is face-up. See [`Session::is_face_up`].
    ///
    /// ## Panics
    ///
    /// Panics if called before the first [`GameEngine::start`].
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.session().is_face_up(id)
    }

    /// Check whether the low-time cue should show, per the configured
    /// warning threshold.
    ///
    /// ## Panics
    ///
    /// Panics if called before the first [`GameEngine::start`].
    #[must_use]
    pub fn is_time_low(&self) -> bool {
        self.session().is_time_low(self.config.time_warning_threshold)
    }

    /// The epoch of the current session.
    ///
    /// `SessionEpoch(0)` means `start()` has never been called.
    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        SessionEpoch(self.epoch)
    }

    /// Borrow the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The seed the shuffle RNG was created with, for replaying sessions.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn session_mut(&mut self) -> &mut Session {
        self.session
            .as_mut()
            .expect("start() must be called before intents are delivered")
    }
}
