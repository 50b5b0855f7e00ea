use strum::IntoEnumIterator;

use crate::card::{Card, CardColor};
use crate::rules::is_legal;
use crate::uno::Uno;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play(Card),
    Draw,
}

/// Decision policy for an AI seat. Only sees the round through its public queries.
pub trait Strategy {
    fn decide(&self, game: &Uno, seat: usize) -> Decision;

    /// Color to bind to a wild card `seat` has just played.
    fn choose_color(&self, game: &Uno, seat: usize) -> CardColor;

    /// Asked only when `seat` is allowed to call UNO.
    fn calls_uno(&self, _game: &Uno, _seat: usize) -> bool {
        true
    }
}

/// Plays the first legal card in hand order, otherwise draws.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl Strategy for FirstLegal {
    fn decide(&self, game: &Uno, seat: usize) -> Decision {
        game.hand(seat)
            .unwrap_or_default()
            .iter()
            .find(|card| is_legal(card, game.top_card()))
            .map_or(Decision::Draw, |card| Decision::Play(*card))
    }

    fn choose_color(&self, game: &Uno, seat: usize) -> CardColor {
        most_common_color(game.hand(seat).unwrap_or_default())
    }
}

/// The color held most often, ties going to the earlier of Red, Blue, Green, Yellow.
pub fn most_common_color(hand: &[Card]) -> CardColor {
    let mut best = CardColor::Red;
    let mut best_count = 0;
    for color in CardColor::iter() {
        let count = hand.iter().filter(|card| card.color() == Some(color)).count();
        if count > best_count {
            best = color;
            best_count = count;
        }
    }
    best
}
