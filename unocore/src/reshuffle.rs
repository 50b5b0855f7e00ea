use rand::Rng;
use tracing::debug;

use crate::card::PlayedCard;
use crate::deck::{Deck, DiscardPile};
use crate::error::{Result, UnoError};

/// Refills an empty draw pile from everything under the top discard.
///
/// The top discard stays where it is. Bound colors are dropped as the cards go
/// back into the draw pile. Fails with [`UnoError::DeckExhausted`] when fewer
/// than two cards have been discarded, leaving both piles untouched.
pub fn reshuffle<R: Rng + ?Sized>(
    deck: &mut Deck,
    discard: &mut DiscardPile,
    rng: &mut R,
) -> Result<()> {
    if discard.cards_count() < 2 {
        return Err(UnoError::DeckExhausted);
    }

    let below_top = discard.cards_count() - 1;
    deck.0.extend(discard.0.drain(..below_top).map(PlayedCard::into_card));
    deck.shuffle(rng);

    debug!(draw_pile = deck.cards_count(), "reshuffled discard pile");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{Card, CardColor, ColoredCard};

    fn discard_of(cards: &[PlayedCard]) -> DiscardPile {
        let mut pile = DiscardPile::new();
        for card in cards {
            pile.push(*card);
        }
        pile
    }

    #[test]
    fn keeps_top_card_and_recycles_the_rest() {
        let top = PlayedCard::Colored(CardColor::Blue, ColoredCard::Number(9));
        let mut discard = discard_of(&[
            PlayedCard::Colored(CardColor::Red, ColoredCard::Number(1)),
            PlayedCard::Wild(CardColor::Green),
            PlayedCard::WildDrawFour(CardColor::Red),
            top,
        ]);
        let mut deck = Deck::default();

        reshuffle(&mut deck, &mut discard, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert_eq!(deck.cards_count(), 3);
        assert_eq!(discard.cards(), &[top]);
        assert!(deck.cards().contains(&Card::Wild));
        assert!(deck.cards().contains(&Card::WildDrawFour));
        assert!(deck
            .cards()
            .contains(&Card::Colored(CardColor::Red, ColoredCard::Number(1))));
    }

    #[test]
    fn fails_without_two_discards() {
        let top = PlayedCard::Colored(CardColor::Blue, ColoredCard::Number(9));
        let mut discard = discard_of(&[top]);
        let mut deck = Deck::default();

        let result = reshuffle(&mut deck, &mut discard, &mut ChaCha8Rng::seed_from_u64(1));

        assert_eq!(result, Err(UnoError::DeckExhausted));
        assert!(deck.is_empty());
        assert_eq!(discard.cards(), &[top]);
    }
}
