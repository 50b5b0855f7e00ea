#![allow(dead_code)]

use tracing_subscriber::EnvFilter;
use unocore::{
    card::{Card, CardColor, ColoredCard, PlayedCard},
    config::RoundConfig,
    deck::Deck,
    turn::Direction,
    uno::{RoundSetup, Uno},
};

/// Opt-in log output for a test run, e.g. `RUST_LOG=unocore=debug`.
pub fn init_logging() {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn number(color: CardColor, number: u8) -> Card {
    Card::Colored(color, ColoredCard::Number(number))
}

pub fn action(color: CardColor, card: ColoredCard) -> Card {
    Card::Colored(color, card)
}

pub fn top(color: CardColor, card: ColoredCard) -> PlayedCard {
    PlayedCard::Colored(color, card)
}

fn take(pool: &mut Vec<Card>, card: Card) {
    let index = pool
        .iter()
        .position(|x| *x == card)
        .unwrap_or_else(|| panic!("{card} is not left in the deck"));
    pool.remove(index);
}

fn leftovers(hands: &[Vec<Card>], top: PlayedCard) -> Vec<Card> {
    let mut pool = Deck::new().cards().to_vec();
    for card in hands.iter().flatten() {
        take(&mut pool, *card);
    }
    take(&mut pool, top.into_card());
    pool
}

/// A table where seat 0 is about to act on `top`; every other card is in the draw pile.
pub fn table(config: RoundConfig, hands: Vec<Vec<Card>>, top: PlayedCard) -> Uno {
    let draw_pile = leftovers(&hands, top);
    Uno::from_setup(
        config,
        RoundSetup {
            hands,
            draw_pile,
            discard_pile: vec![top],
            current_player: 0,
            direction: Direction::Clockwise,
        },
    )
    .unwrap()
}

/// Like [`table`], but the spare cards sit under `top` and the draw pile is empty.
pub fn table_with_empty_draw_pile(hands: Vec<Vec<Card>>, top: PlayedCard) -> Uno {
    let mut discard_pile = leftovers(&hands, top)
        .into_iter()
        .map(|card| card.bind(CardColor::Red))
        .collect::<Vec<_>>();
    discard_pile.push(top);

    Uno::from_setup(
        RoundConfig::new(hands.len()).with_seed(1),
        RoundSetup {
            hands,
            draw_pile: vec![],
            discard_pile,
            current_player: 0,
            direction: Direction::Clockwise,
        },
    )
    .unwrap()
}

pub fn human_table(hands: Vec<Vec<Card>>, top: PlayedCard) -> Uno {
    table(RoundConfig::new(hands.len()).with_seed(1), hands, top)
}

pub fn ai_table(hands: Vec<Vec<Card>>, top: PlayedCard) -> Uno {
    table(RoundConfig::new(hands.len()).with_seed(1).all_ai(), hands, top)
}

/// Number cards of one color, at most 18 of them.
pub fn filler(color: CardColor, count: usize) -> Vec<Card> {
    (1..=9)
        .cycle()
        .take(count)
        .map(|n| number(color, n))
        .collect()
}
