use thiserror::Error;

use crate::card::{Card, PlayedCard};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("It is player {current}'s turn, not player {player}'s")]
    NotYourTurn { player: usize, current: usize },
    #[error("{card} cannot be played on {top}")]
    IllegalCard { card: Card, top: PlayedCard },
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("A color has to be chosen for the wild card first")]
    AwaitingColorChoice,
    #[error("There is no wild card waiting for a color")]
    NoPendingChoice,
    #[error("The pile is empty")]
    EmptyPile,
    #[error("Neither the draw pile nor the discard pile can supply a card")]
    DeckExhausted,
    #[error("UNO can only be called with 2 cards in hand, player has {hand_size}")]
    InvalidUnoCall { hand_size: usize },
    #[error("Player {0} has already called UNO")]
    UnoAlreadyCalled(usize),
    #[error("The round is over")]
    RoundOver,
    #[error("Player {0} is not controlled by the AI")]
    NotAiSeat(usize),
    #[error("There is no player {0}")]
    UnknownPlayer(usize),
    #[error("Invalid round setup: {0}")]
    InvalidSetup(String),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
