//! Property tests: no intent sequence can break the session invariants.
//!
//! The engine promises that arbitrary interleavings of taps, ticks, resolves,
//! and restarts - valid or not - leave the session self-consistent. These
//! tests throw randomized intent streams at it and check the promises after
//! every step.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use pairs_engine::{CardId, EngineConfig, GameEngine, Selection, Status};

#[derive(Clone, Debug)]
enum Intent {
    /// Tap a card id, possibly one that was never dealt.
    Select(u32),
    /// Deliver a timer tick for the current epoch.
    Tick,
    /// Deliver the pending resolve ticket, if one exists.
    Resolve,
    /// Restart the session. Pending tickets deliberately survive, so the
    /// stream also exercises stale deliveries.
    Restart,
}

fn intent_strategy(id_space: u32) -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => (0..id_space).prop_map(Intent::Select),
        2 => Just(Intent::Tick),
        2 => Just(Intent::Resolve),
        1 => Just(Intent::Restart),
    ]
}

proptest! {
    #[test]
    fn deck_always_valid(seed in any::<u64>(), symbol_count in 1u16..=32) {
        let config = EngineConfig::new().with_symbol_count(symbol_count);
        let mut engine = GameEngine::new(config, seed);
        engine.start();

        let cards: Vec<_> = engine.session().active_cards().copied().collect();
        let expected = usize::from(symbol_count) * 2;
        prop_assert_eq!(cards.len(), expected);

        let ids: HashSet<_> = cards.iter().map(|card| card.id.raw()).collect();
        prop_assert_eq!(ids.len(), expected);
        prop_assert!(ids.iter().all(|&id| (id as usize) < expected));

        let mut per_symbol: HashMap<u16, usize> = HashMap::new();
        for card in &cards {
            *per_symbol.entry(card.symbol.raw()).or_default() += 1;
        }
        prop_assert_eq!(per_symbol.len(), usize::from(symbol_count));
        prop_assert!(per_symbol.values().all(|&count| count == 2));
    }

    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        symbol_count in 1u16..=8,
        intents in prop::collection::vec(intent_strategy(24), 0..200),
    ) {
        let config = EngineConfig::new()
            .with_symbol_count(symbol_count)
            .with_session_length(50);
        let mut engine = GameEngine::new(config, seed);
        let mut epoch = engine.start();
        let mut ticket = None;

        for intent in intents {
            match intent {
                Intent::Select(raw) => {
                    if let Selection::PairRevealed(fresh) = engine.select_card(CardId::new(raw)) {
                        ticket = Some(fresh);
                    }
                }
                Intent::Tick => {
                    let _ = engine.tick(epoch);
                }
                Intent::Resolve => {
                    if let Some(pending) = ticket.take() {
                        let _ = engine.resolve(pending);
                    }
                }
                Intent::Restart => {
                    epoch = engine.start();
                }
            }

            let session = engine.session();

            prop_assert!(session.selected().len() <= 2);
            for &id in session.selected() {
                prop_assert!(session.contains(id));
            }

            // Cards leave the board in pairs only.
            prop_assert_eq!(session.card_count() % 2, 0);
            prop_assert_eq!(session.pairs_remaining() * 2, session.card_count());

            // Score moves in whole match rewards.
            prop_assert_eq!(session.score() % config.match_score, 0);

            // The countdown never exceeds the configured length.
            prop_assert!(session.time_remaining() <= config.session_length);

            // The reveal window always holds a full pair of selections.
            if session.resolving() {
                prop_assert_eq!(session.selected().len(), 2);
            }

            match session.status() {
                Status::Won => {
                    prop_assert_eq!(session.card_count(), 0);
                    prop_assert!(session.selected().is_empty());
                    prop_assert!(!session.resolving());
                }
                Status::Lost => {
                    prop_assert!(session.card_count() > 0);
                    prop_assert_eq!(session.time_remaining(), 0);
                }
                Status::Active => {}
            }
        }
    }
}
