//! Session state: the complete aggregate for one game.
//!
//! A `Session` is a value, not a place. The engine mutates its live copy
//! through the transition operations and hands out O(1) snapshot clones
//! (persistent `im::Vector` underneath) for the host to diff and re-render.
//! Snapshots never go stale in the host's hands; they are simply superseded
//! by newer ones.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};

/// Session lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The timer runs and selections are accepted.
    Active,
    /// Every pair was matched before the timer expired. Terminal.
    Won,
    /// The timer expired with pairs still on the board. Terminal.
    Lost,
}

impl Status {
    /// Check whether this status ends the session.
    ///
    /// A terminal session absorbs all further intents until the next `start()`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The entire state of one game session.
///
/// Fields are private; the engine is the only writer. Hosts observe through
/// the query methods below.
///
/// ## Invariants
///
/// - `selected` holds at most two ids, each referencing a card in
///   `active_cards`
/// - `active_cards` keeps its shuffle order; it only ever shrinks, two cards
///   at a time
/// - `resolving` is true exactly between the second selection and resolution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Cards still in play, in shuffle order. Defines the grid layout.
    pub(crate) active_cards: Vector<Card>,

    /// Ids currently face-up by player action, in selection order.
    pub(crate) selected: SmallVec<[CardId; 2]>,

    /// Points scored so far.
    pub(crate) score: u32,

    /// Seconds left on the countdown.
    pub(crate) time_remaining: u32,

    /// Lifecycle status.
    pub(crate) status: Status,

    /// True while a revealed pair awaits its resolve event.
    pub(crate) resolving: bool,
}

impl Session {
    /// Create a fresh session over an already-shuffled deck.
    pub(crate) fn new(deck: Vector<Card>, session_length: u32) -> Self {
        Self {
            active_cards: deck,
            selected: SmallVec::new(),
            score: 0,
            time_remaining: session_length,
            status: Status::Active,
            resolving: false,
        }
    }

    // === Queries ===

    /// Iterate over the cards still in play, in grid order.
    pub fn active_cards(&self) -> impl Iterator<Item = &Card> {
        self.active_cards.iter()
    }

    /// Number of cards still in play.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.active_cards.len()
    }

    /// Number of unmatched pairs left on the board.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        self.active_cards.len() / 2
    }

    /// Look up an active card by id. Matched cards are simply absent.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.active_cards.iter().find(|card| card.id == id)
    }

    /// Check whether `id` references a card still in play.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.card(id).is_some()
    }

    /// Check whether a card is face-up by player selection.
    ///
    /// Removed cards have no face-up notion; this returns false for them.
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.selected.contains(&id)
    }

    /// Ids currently selected, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[CardId] {
        &self.selected
    }

    /// Points scored so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// True while a revealed pair awaits its resolve event.
    #[must_use]
    pub fn resolving(&self) -> bool {
        self.resolving
    }

    /// Render the remaining time as `mm:ss`.
    #[must_use]
    pub fn time_display(&self) -> String {
        format!("{:02}:{:02}", self.time_remaining / 60, self.time_remaining % 60)
    }

    /// Check whether the low-time presentation cue should show.
    ///
    /// Only an active session warns; terminal sessions show their dialog
    /// instead.
    #[must_use]
    pub fn is_time_low(&self, threshold: u32) -> bool {
        self.status == Status::Active && self.time_remaining <= threshold
    }

    /// The two selected cards, once two are selected.
    pub(crate) fn selected_pair(&self) -> Option<(Card, Card)> {
        match self.selected.as_slice() {
            &[first, second] => {
                let first = *self.card(first)?;
                let second = *self.card(second)?;
                Some((first, second))
            }
            _ => None,
        }
    }
}
