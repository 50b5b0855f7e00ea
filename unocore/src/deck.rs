use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, ColoredCard, PlayedCard},
    constants::*,
    error::{Result, UnoError},
};

/// The draw pile. The last element is the top of the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the standard, unshuffled 108-card deck.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

        // Colored Cards
        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }

            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::DrawTwo));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        Self(cards)
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn draw(&mut self) -> Result<Card> {
        self.0.pop().ok_or(UnoError::EmptyPile)
    }

    /// Puts a card back on top of the pile.
    pub(crate) fn put_back(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Played cards, most recent last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscardPile(pub(crate) Vec<PlayedCard>);

impl DiscardPile {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn top(&self) -> Option<&PlayedCard> {
        self.0.last()
    }

    pub fn push(&mut self, card: PlayedCard) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[PlayedCard] {
        &self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}
