use std::collections::HashMap;

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::ai::{Decision, Strategy};
use crate::card::{Card, CardColor, PlayedCard};
use crate::config::RoundConfig;
use crate::constants::{MISSED_UNO_PENALTY, STARTING_HAND_SIZE, UNO_CALL_HAND_SIZE};
use crate::deck::{Deck, DiscardPile};
use crate::error::{Result, UnoError};
use crate::event::{GameEvent, Observer, Observers};
use crate::player::Player;
use crate::reshuffle::reshuffle;
use crate::rules::is_legal;
use crate::turn::{nth_player, Direction, TurnAction, TurnActionResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlay,
    AwaitingColorChoice,
    /// `winner` is `None` when the cards ran out before anyone emptied their hand.
    RoundOver { winner: Option<usize> },
}

/// A wild card that has left its player's hand but has no color yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingWild {
    pub player: usize,
    pub card: Card,
}

/// Read-only copy of everything a display needs to redraw the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub hands: Vec<Vec<Card>>,
    pub top: Option<PlayedCard>,
    pub current_player: usize,
    pub direction: Direction,
    pub phase: Phase,
    pub pending_wild: Option<PendingWild>,
    pub draw_pile: usize,
    pub discard_pile: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub turn_action_result: TurnActionResult,
    /// Set when the play dropped the player to one card without an UNO call.
    pub uno_penalty: bool,
    pub won: bool,
    pub snapshot: RoundSnapshot,
}

/// Piles and turn state to resume a round from, e.g. a saved table.
#[derive(Clone, Debug, Default)]
pub struct RoundSetup {
    pub hands: Vec<Vec<Card>>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<PlayedCard>,
    pub current_player: usize,
    pub direction: Direction,
}

/// One round of UNO and the only owner of its piles and hands.
#[derive(Debug)]
pub struct Uno {
    pub(crate) deck: Deck,
    pub(crate) discard: DiscardPile,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player: usize,
    pub(crate) direction: Direction,
    pub(crate) phase: Phase,
    pub(crate) pending_wild: Option<PendingWild>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) events: Vec<GameEvent>,
    observers: Observers,
}

impl Uno {
    /// Starts a round with `players` seats, a human in seat 0.
    pub fn initialize(players: usize) -> Result<Self> {
        Self::new(RoundConfig::new(players))
    }

    pub fn new(config: RoundConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = config.rng();
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut players = (0..config.players)
            .map(|id| Player::new(id, config.seat_kind(id)))
            .collect::<Vec<_>>();

        // One card per seat per pass, seat 0 first.
        for _ in 0..STARTING_HAND_SIZE {
            for player in players.iter_mut() {
                player.add_card(deck.draw()?);
            }
        }

        let top = loop {
            match deck.draw()? {
                Card::Colored(color, card) => break card.into_played_card(color),
                wild => {
                    deck.put_back(wild);
                    deck.shuffle(&mut rng);
                }
            }
        };

        let mut discard = DiscardPile::new();
        discard.push(top);

        info!(players = config.players, %top, "round started");

        let mut uno = Self::assemble(deck, discard, players, 0, Direction::Clockwise, rng);
        uno.events.push(GameEvent::RoundStarted {
            players: config.players,
            top,
        });
        Ok(uno)
    }

    /// Resumes a round from explicit piles.
    ///
    /// The piles and hands together must hold exactly one standard deck.
    /// `config.players` is ignored in favour of the number of hands.
    pub fn from_setup(config: RoundConfig, setup: RoundSetup) -> Result<Self> {
        let config = RoundConfig {
            players: setup.hands.len(),
            ..config
        };
        config.validate()?;

        if setup.current_player >= config.players {
            return Err(UnoError::InvalidSetup(format!(
                "current player {} is not seated",
                setup.current_player
            )));
        }

        let mut expected: HashMap<Card, usize> = HashMap::new();
        for card in Deck::new().cards() {
            *expected.entry(*card).or_default() += 1;
        }
        let mut actual: HashMap<Card, usize> = HashMap::new();
        let played = setup.discard_pile.iter().map(|card| card.into_card());
        for card in setup
            .hands
            .iter()
            .flatten()
            .copied()
            .chain(setup.draw_pile.iter().copied())
            .chain(played)
        {
            *actual.entry(card).or_default() += 1;
        }
        if actual != expected {
            return Err(UnoError::InvalidSetup(
                "cards do not add up to one full deck".to_string(),
            ));
        }

        let players = setup
            .hands
            .into_iter()
            .enumerate()
            .map(|(id, hand)| {
                let mut player = Player::new(id, config.seat_kind(id));
                for card in hand {
                    player.add_card(card);
                }
                player
            })
            .collect();

        Ok(Self::assemble(
            Deck::from_cards(setup.draw_pile),
            DiscardPile(setup.discard_pile),
            players,
            setup.current_player,
            setup.direction,
            config.rng(),
        ))
    }

    fn assemble(
        deck: Deck,
        discard: DiscardPile,
        players: Vec<Player>,
        current_player: usize,
        direction: Direction,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            deck,
            discard,
            players,
            current_player,
            direction,
            phase: Phase::AwaitingPlay,
            pending_wild: None,
            rng,
            events: Vec::new(),
            observers: Observers::default(),
        }
    }

    /// Registers a display-side listener. Events not yet published, such as
    /// the round start, are delivered right away.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
        self.publish_events();
    }

    pub fn play_turn(&mut self, player: usize, turn_action: TurnAction) -> Result<PlayTurnResult> {
        match turn_action {
            TurnAction::Play(card) => self.request_play(player, card),
            TurnAction::Draw => self.request_draw(player),
            TurnAction::Uno => self.call_uno(player),
            TurnAction::ChooseColor(color) => {
                if player >= self.players.len() {
                    return Err(UnoError::UnknownPlayer(player));
                }
                match self.pending_wild {
                    Some(pending) if pending.player != player => Err(UnoError::NotYourTurn {
                        player,
                        current: pending.player,
                    }),
                    _ => self.resolve_color_choice(color),
                }
            }
        }
    }

    pub fn request_play(&mut self, player: usize, card: Card) -> Result<PlayTurnResult> {
        self.ensure_turn(player)?;

        let hand_index = self.players[player]
            .card_index(&card)
            .ok_or(UnoError::CardNotInHand(card))?;
        if let Some(top) = self.discard.top() {
            if !is_legal(&card, Some(top)) {
                return Err(UnoError::IllegalCard { card, top: *top });
            }
        }

        let outcome = self.commit_play(player, hand_index);
        self.conclude(player, outcome)
    }

    fn commit_play(&mut self, player: usize, hand_index: usize) -> Result<(TurnActionResult, bool)> {
        let called_uno = self.players[player].uno_called();
        let card = self.players[player].remove_card(hand_index);
        debug!(player, %card, "card played");
        self.events.push(GameEvent::CardPlayed { player, card });

        // The card has to land before any penalty draw can run the piles dry.
        let result = self.resolve_play(player, card)?;

        let uno_penalty = self.players[player].cards_count() == 1 && !called_uno;
        if uno_penalty {
            warn!(player, "missed UNO call");
            self.draw_to_player(player, MISSED_UNO_PENALTY)?;
            self.events.push(GameEvent::UnoPenalty {
                player,
                count: MISSED_UNO_PENALTY,
            });
        }
        Ok((result, uno_penalty))
    }

    pub fn request_draw(&mut self, player: usize) -> Result<PlayTurnResult> {
        self.ensure_turn(player)?;

        let outcome = self.draw_to_player(player, 1).map(|()| {
            self.advance(1);
            (TurnActionResult::SelfDraw, false)
        });
        self.conclude(player, outcome)
    }

    /// Declares UNO for `player`. Allowed out of turn, but only at two cards.
    pub fn call_uno(&mut self, player: usize) -> Result<PlayTurnResult> {
        self.ensure_open()?;
        let seat = self
            .players
            .get(player)
            .ok_or(UnoError::UnknownPlayer(player))?;
        let hand_size = seat.cards_count();
        if hand_size != UNO_CALL_HAND_SIZE {
            return Err(UnoError::InvalidUnoCall { hand_size });
        }
        if seat.uno_called() {
            return Err(UnoError::UnoAlreadyCalled(player));
        }

        self.players[player].uno();
        debug!(player, "UNO called");
        self.events.push(GameEvent::UnoCalled { player });
        self.conclude(player, Ok((TurnActionResult::UnoSuccessful, false)))
    }

    /// Binds `color` to the wild card waiting for one and carries out its effect.
    pub fn resolve_color_choice(&mut self, color: CardColor) -> Result<PlayTurnResult> {
        let pending = match (self.phase, self.pending_wild) {
            (Phase::AwaitingColorChoice, Some(pending)) => pending,
            _ => return Err(UnoError::NoPendingChoice),
        };

        let outcome = self.bind_pending_wild(pending, color).map(|result| (result, false));
        self.conclude(pending.player, outcome)
    }

    /// Plays one turn for the current seat using `strategy`.
    pub fn step_ai(&mut self, strategy: &dyn Strategy) -> Result<PlayTurnResult> {
        if matches!(self.phase, Phase::RoundOver { .. }) {
            return Err(UnoError::RoundOver);
        }
        let seat = self.current_player;
        if !self.players[seat].is_ai() {
            return Err(UnoError::NotAiSeat(seat));
        }

        if self.phase == Phase::AwaitingColorChoice {
            let color = strategy.choose_color(self, seat);
            return self.resolve_color_choice(color);
        }

        if self.can_call_uno(seat) && strategy.calls_uno(self, seat) {
            self.call_uno(seat)?;
        }

        match strategy.decide(self, seat) {
            Decision::Play(card) => {
                let played = self.request_play(seat, card)?;
                if self.phase != Phase::AwaitingColorChoice {
                    return Ok(played);
                }
                let color = strategy.choose_color(self, seat);
                let mut resolved = self.resolve_color_choice(color)?;
                resolved.uno_penalty |= played.uno_penalty;
                Ok(resolved)
            }
            Decision::Draw => self.request_draw(seat),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn hand(&self, seat: usize) -> Option<&[Card]> {
        self.players.get(seat).map(Player::hand)
    }

    pub fn top_card(&self) -> Option<&PlayedCard> {
        self.discard.top()
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_wild(&self) -> Option<PendingWild> {
        self.pending_wild
    }

    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::RoundOver { winner } => winner,
            _ => None,
        }
    }

    pub fn can_call_uno(&self, seat: usize) -> bool {
        self.phase == Phase::AwaitingPlay
            && self
                .players
                .get(seat)
                .map_or(false, |player| {
                    player.cards_count() == UNO_CALL_HAND_SIZE && !player.uno_called()
                })
    }

    /// Cards in `seat`'s hand that could go on the current top card.
    pub fn playable_cards(&self, seat: usize) -> Vec<Card> {
        self.hand(seat)
            .unwrap_or_default()
            .iter()
            .filter(|card| is_legal(card, self.top_card()))
            .copied()
            .collect()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.deck.cards_count()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard.cards_count()
    }

    /// Every card in the round, including a wild still waiting for its color.
    pub fn card_count(&self) -> usize {
        self.deck.cards_count()
            + self.discard.cards_count()
            + self.players.iter().map(Player::cards_count).sum::<usize>()
            + usize::from(self.pending_wild.is_some())
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            hands: self.players.iter().map(|p| p.hand().to_vec()).collect(),
            top: self.discard.top().copied(),
            current_player: self.current_player,
            direction: self.direction,
            phase: self.phase,
            pending_wild: self.pending_wild,
            draw_pile: self.deck.cards_count(),
            discard_pile: self.discard.cards_count(),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        match self.phase {
            Phase::RoundOver { .. } => Err(UnoError::RoundOver),
            Phase::AwaitingColorChoice => Err(UnoError::AwaitingColorChoice),
            Phase::AwaitingPlay => Ok(()),
        }
    }

    fn ensure_turn(&self, player: usize) -> Result<()> {
        if matches!(self.phase, Phase::RoundOver { .. }) {
            return Err(UnoError::RoundOver);
        }
        if player >= self.players.len() {
            return Err(UnoError::UnknownPlayer(player));
        }
        if player != self.current_player {
            return Err(UnoError::NotYourTurn {
                player,
                current: self.current_player,
            });
        }
        self.ensure_open()
    }

    /// Publishes the buffered events and wraps up a committed command.
    ///
    /// Running out of cards mid-command closes the round without a winner.
    fn conclude(
        &mut self,
        player: usize,
        outcome: Result<(TurnActionResult, bool)>,
    ) -> Result<PlayTurnResult> {
        let outcome = match outcome {
            Err(UnoError::DeckExhausted) => {
                warn!("no cards left to draw");
                self.end_round(None);
                Err(UnoError::DeckExhausted)
            }
            other => other,
        };

        self.publish_events();

        let (turn_action_result, uno_penalty) = outcome?;
        Ok(PlayTurnResult {
            turn_action_result,
            uno_penalty,
            won: self.winner() == Some(player),
            snapshot: self.snapshot(),
        })
    }

    fn publish_events(&mut self) {
        let events = std::mem::take(&mut self.events);
        self.observers.emit(&events);
    }

    pub(crate) fn end_round(&mut self, winner: Option<usize>) {
        info!(?winner, "round over");
        self.phase = Phase::RoundOver { winner };
        self.events.push(GameEvent::RoundOver { winner });
    }

    pub(crate) fn advance(&mut self, steps: usize) {
        self.current_player =
            nth_player(self.current_player, self.direction, self.players.len(), steps);
        self.events.push(GameEvent::TurnChanged {
            player: self.current_player,
        });
    }

    fn draw_one(&mut self) -> Result<Card> {
        if self.deck.is_empty() {
            reshuffle(&mut self.deck, &mut self.discard, &mut self.rng)?;
            self.events.push(GameEvent::Reshuffled {
                draw_pile: self.deck.cards_count(),
            });
        }
        self.deck.draw()
    }

    /// Moves `count` cards into `player`'s hand, reshuffling as needed.
    ///
    /// Cards drawn before the piles ran dry stay in the hand.
    pub(crate) fn draw_to_player(&mut self, player: usize, count: usize) -> Result<()> {
        for drawn in 0..count {
            match self.draw_one() {
                Ok(card) => self.players[player].add_card(card),
                Err(err) => {
                    if drawn > 0 {
                        self.events.push(GameEvent::CardsDrawn {
                            player,
                            count: drawn,
                        });
                    }
                    return Err(err);
                }
            }
        }
        debug!(player, count, "cards drawn");
        self.events.push(GameEvent::CardsDrawn { player, count });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ColoredCard;
    use crate::constants::TOTAL_CARDS_IN_DECK;

    fn seeded(players: usize, seed: u64) -> Uno {
        Uno::new(RoundConfig::new(players).with_seed(seed)).unwrap()
    }

    #[test]
    fn return_ok_if_enough_players() {
        assert!(Uno::initialize(2).is_ok());
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Uno::initialize(1).unwrap_err();
        assert!(matches!(error, UnoError::NotEnoughPlayers));
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Uno::initialize(11).unwrap_err();
        assert!(matches!(error, UnoError::TooManyPlayers));
    }

    #[test]
    fn all_players_start_with_7_cards() {
        let uno = seeded(4, 3);
        for player in uno.players() {
            assert_eq!(player.cards_count(), 7);
        }
        assert_eq!(uno.current_player(), 0);
        assert_eq!(uno.direction(), Direction::Clockwise);
        assert_eq!(uno.phase(), Phase::AwaitingPlay);
    }

    #[test]
    fn deal_goes_round_robin() {
        let mut deck = Deck::new();
        deck.shuffle(&mut RoundConfig::new(3).with_seed(11).rng());
        let uno = seeded(3, 11);

        // The top of the shuffled pile goes to seat 0, the next card to seat 1.
        let order = deck.cards().iter().rev().copied().collect::<Vec<_>>();
        assert_eq!(uno.hand(0).unwrap()[0], order[0]);
        assert_eq!(uno.hand(1).unwrap()[0], order[1]);
        assert_eq!(uno.hand(2).unwrap()[0], order[2]);
        assert_eq!(uno.hand(0).unwrap()[1], order[3]);
    }

    #[test]
    fn opening_card_is_never_wild() {
        for seed in 0..50 {
            let uno = seeded(4, seed);
            assert!(matches!(uno.top_card(), Some(PlayedCard::Colored(_, _))));
            assert_eq!(uno.card_count(), TOTAL_CARDS_IN_DECK);
        }
    }

    #[test]
    fn same_seed_same_deal() {
        let first = seeded(4, 42);
        let second = seeded(4, 42);
        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn play_out_of_turn_is_rejected() {
        let mut uno = seeded(3, 5);
        let card = uno.hand(1).unwrap()[0];
        let before = uno.snapshot();

        let error = uno.request_play(1, card).unwrap_err();

        assert_eq!(error, UnoError::NotYourTurn { player: 1, current: 0 });
        assert_eq!(uno.snapshot(), before);
    }

    #[test]
    fn play_of_missing_card_is_rejected() {
        let mut uno = seeded(3, 5);
        let missing = Deck::new()
            .cards()
            .iter()
            .copied()
            .find(|card| uno.hand(0).unwrap().iter().all(|held| held != card))
            .unwrap();

        let error = uno.request_play(0, missing).unwrap_err();
        assert_eq!(error, UnoError::CardNotInHand(missing));
    }

    #[test]
    fn draw_passes_the_turn() {
        let mut uno = seeded(3, 9);
        let result = uno.request_draw(0).unwrap();

        assert_eq!(result.turn_action_result, TurnActionResult::SelfDraw);
        assert_eq!(uno.hand(0).unwrap().len(), 8);
        assert_eq!(uno.current_player(), 1);
        assert_eq!(uno.card_count(), TOTAL_CARDS_IN_DECK);
    }

    #[test]
    fn uno_call_needs_two_cards() {
        let mut uno = seeded(3, 9);
        let error = uno.call_uno(0).unwrap_err();
        assert_eq!(error, UnoError::InvalidUnoCall { hand_size: 7 });
        assert!(!uno.can_call_uno(0));
    }

    #[test]
    fn color_choice_without_pending_wild_is_rejected() {
        let mut uno = seeded(3, 9);
        let error = uno.resolve_color_choice(CardColor::Red).unwrap_err();
        assert_eq!(error, UnoError::NoPendingChoice);
    }

    #[test]
    fn step_ai_refuses_the_human_seat() {
        let mut uno = seeded(3, 9);
        let error = uno.step_ai(&crate::ai::FirstLegal).unwrap_err();
        assert_eq!(error, UnoError::NotAiSeat(0));
    }

    #[test]
    fn setup_must_hold_a_full_deck() {
        let setup = RoundSetup {
            hands: vec![
                vec![Card::Colored(CardColor::Red, ColoredCard::Number(1))],
                vec![],
            ],
            discard_pile: vec![PlayedCard::Colored(CardColor::Red, ColoredCard::Number(2))],
            ..Default::default()
        };
        let error = Uno::from_setup(RoundConfig::new(2), setup).unwrap_err();
        assert!(matches!(error, UnoError::InvalidSetup(_)));
    }
}
