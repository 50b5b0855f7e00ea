use crate::card::Card;
use crate::constants::UNO_CALL_HAND_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatKind {
    Human,
    Ai,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub id: usize,
    pub kind: SeatKind,
    pub(crate) hand: Vec<Card>,
    pub(crate) uno_called: bool,
}

impl Player {
    pub fn new(id: usize, kind: SeatKind) -> Self {
        Self {
            id,
            kind,
            hand: Vec::new(),
            uno_called: false,
        }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn uno_called(&self) -> bool {
        self.uno_called
    }

    pub fn is_ai(&self) -> bool {
        self.kind == SeatKind::Ai
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.forget_stale_uno();
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        let card = self.hand.remove(index);
        self.forget_stale_uno();
        card
    }

    pub fn uno(&mut self) {
        self.uno_called = true;
    }

    // A call only protects the hand size it was made at.
    fn forget_stale_uno(&mut self) {
        if self.hand.len() != UNO_CALL_HAND_SIZE {
            self.uno_called = false;
        }
    }
}
