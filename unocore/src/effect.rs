use tracing::debug;

use crate::card::{Card, CardColor, ColoredCard, PlayedCard};
use crate::constants::{DRAW_TWO_PENALTY, WILD_DRAW_FOUR_PENALTY};
use crate::error::Result;
use crate::event::GameEvent;
use crate::turn::{next_player, TurnActionResult};
use crate::uno::{PendingWild, Phase, Uno};

/// What a card does to the table once it lands on the discard pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
    Advance,
    Skip,
    Reverse,
    /// The next seat draws this many cards and loses its turn.
    Draw(usize),
}

impl Effect {
    pub(crate) fn of(card: &PlayedCard) -> Self {
        match card {
            PlayedCard::Colored(_, ColoredCard::Number(_)) => Effect::Advance,
            PlayedCard::Colored(_, ColoredCard::Skip) => Effect::Skip,
            PlayedCard::Colored(_, ColoredCard::Reverse) => Effect::Reverse,
            PlayedCard::Colored(_, ColoredCard::DrawTwo) => Effect::Draw(DRAW_TWO_PENALTY),
            PlayedCard::Wild(_) => Effect::Advance,
            PlayedCard::WildDrawFour(_) => Effect::Draw(WILD_DRAW_FOUR_PENALTY),
        }
    }
}

fn turn_action_result(card: &PlayedCard) -> TurnActionResult {
    match card {
        PlayedCard::Colored(_, ColoredCard::Number(_)) => TurnActionResult::Neutral,
        PlayedCard::Colored(_, ColoredCard::Skip) => TurnActionResult::Skip,
        PlayedCard::Colored(_, ColoredCard::Reverse) => TurnActionResult::Reverse,
        PlayedCard::Colored(_, ColoredCard::DrawTwo) => TurnActionResult::DrawTwo,
        PlayedCard::Wild(_) => TurnActionResult::Wild,
        PlayedCard::WildDrawFour(_) => TurnActionResult::WildDrawFour,
    }
}

impl Uno {
    /// Resolves a card that has just left `player`'s hand.
    ///
    /// Wild cards are parked until a color is chosen and the turn stays put.
    pub(crate) fn resolve_play(&mut self, player: usize, card: Card) -> Result<TurnActionResult> {
        match card {
            Card::Colored(color, colored_card) => {
                self.land(player, colored_card.into_played_card(color))
            }
            Card::Wild | Card::WildDrawFour => {
                debug!(player, %card, "waiting for a color");
                self.pending_wild = Some(PendingWild { player, card });
                self.phase = Phase::AwaitingColorChoice;
                Ok(TurnActionResult::WildPending)
            }
        }
    }

    pub(crate) fn bind_pending_wild(
        &mut self,
        pending: PendingWild,
        color: CardColor,
    ) -> Result<TurnActionResult> {
        let played = pending.card.bind(color);
        debug!(player = pending.player, card = %played, "color chosen");

        self.pending_wild = None;
        self.phase = Phase::AwaitingPlay;
        self.events.push(GameEvent::ColorChosen {
            player: pending.player,
            card: played,
        });
        self.land(pending.player, played)
    }

    /// Discards `card`, then either closes the round (the player went out) or
    /// carries out the card's effect.
    fn land(&mut self, player: usize, card: PlayedCard) -> Result<TurnActionResult> {
        self.discard.push(card);

        if self.players[player].cards_count() == 0 {
            self.end_round(Some(player));
        } else {
            self.apply(Effect::of(&card))?;
        }
        Ok(turn_action_result(&card))
    }

    pub(crate) fn apply(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Advance => self.advance(1),
            Effect::Skip => self.advance(2),
            Effect::Reverse => {
                self.direction = self.direction.reverse();
                self.events.push(GameEvent::DirectionReversed(self.direction));
                // Two seats: the turn comes straight back, same as a skip.
                let steps = if self.players.len() == 2 { 2 } else { 1 };
                self.advance(steps);
            }
            Effect::Draw(count) => {
                let victim = next_player(self.current_player, self.direction, self.players.len());
                debug!(victim, count, "forced draw");
                self.draw_to_player(victim, count)?;
                self.advance(2);
            }
        }
        Ok(())
    }
}
