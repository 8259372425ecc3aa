//! Card identity and face values.
//!
//! Every physical card in a session is a `Card`: a stable `CardId` plus the
//! `Symbol` printed on its face. Exactly two cards per session share each
//! symbol; matching them removes both from play.
//!
//! ## ID Layout
//!
//! Ids are assigned at deck build time, before shuffling: the pair for symbol
//! `k` gets ids `2k` and `2k + 1`. Ids stay stable for the session's lifetime.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a session.
///
/// Hosts address taps by `CardId`; the engine never hands out indices into
/// the card sequence, since that sequence shrinks as pairs are removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A face value from the session's symbol alphabet.
///
/// The engine compares symbols for equality and nothing else. Hosts map them
/// to icons, glyphs, or whatever the presentation layer uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// One physical card: identity plus face value.
///
/// Immutable once created. Matched cards are not mutated in place; they are
/// removed from the session's active set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity within the session.
    pub id: CardId,

    /// Face value. Two cards per session share each symbol.
    pub symbol: Symbol,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self { id, symbol }
    }

    /// Check whether this card and `other` form a matching pair.
    ///
    /// A card never pairs with itself, even though the symbols trivially agree.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.symbol == other.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_symbol() {
        let symbol = Symbol::new(3);
        assert_eq!(symbol.raw(), 3);
        assert_eq!(format!("{}", symbol), "Symbol(3)");
        assert_eq!(symbol, Symbol::new(3));
        assert_ne!(symbol, Symbol::new(4));
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardId::new(0), Symbol::new(1));
        let b = Card::new(CardId::new(1), Symbol::new(1));
        let c = Card::new(CardId::new(2), Symbol::new(2));

        assert!(a.pairs_with(&b));
        assert!(b.pairs_with(&a));
        assert!(!a.pairs_with(&c));
    }

    #[test]
    fn test_card_never_pairs_with_itself() {
        let card = Card::new(CardId::new(7), Symbol::new(3));
        assert!(!card.pairs_with(&card));
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(4), Symbol::new(2));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
