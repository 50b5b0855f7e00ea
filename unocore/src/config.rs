use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{Result, UnoError};
use crate::player::SeatKind;

/// Settings for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    pub players: usize,
    /// Seat driven by a person. `None` makes every seat an AI.
    pub human_seat: Option<usize>,
    /// Fixes the deal, the opening card and every reshuffle.
    pub seed: Option<u64>,
}

impl RoundConfig {
    pub fn new(players: usize) -> Self {
        Self {
            players,
            human_seat: Some(0),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn all_ai(mut self) -> Self {
        self.human_seat = None;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.players < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if self.players > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }
        Ok(())
    }

    pub(crate) fn seat_kind(&self, seat: usize) -> SeatKind {
        if self.human_seat == Some(seat) {
            SeatKind::Human
        } else {
            SeatKind::Ai
        }
    }

    pub(crate) fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(4)
    }
}
