use std::fmt;

use crate::card::{Card, PlayedCard};
use crate::turn::Direction;

/// Something that changed in the round. Emitted after the change is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        players: usize,
        top: PlayedCard,
    },
    CardPlayed {
        player: usize,
        card: Card,
    },
    ColorChosen {
        player: usize,
        card: PlayedCard,
    },
    CardsDrawn {
        player: usize,
        count: usize,
    },
    UnoCalled {
        player: usize,
    },
    UnoPenalty {
        player: usize,
        count: usize,
    },
    DirectionReversed(Direction),
    TurnChanged {
        player: usize,
    },
    Reshuffled {
        draw_pile: usize,
    },
    RoundOver {
        winner: Option<usize>,
    },
}

/// Receives every [`GameEvent`] of the round it is subscribed to.
pub trait Observer {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

#[derive(Default)]
pub(crate) struct Observers(Vec<Box<dyn Observer>>);

impl Observers {
    pub(crate) fn push(&mut self, observer: Box<dyn Observer>) {
        self.0.push(observer);
    }

    pub(crate) fn emit(&mut self, events: &[GameEvent]) {
        for event in events {
            for observer in self.0.iter_mut() {
                observer.notify(event);
            }
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observers({})", self.0.len())
    }
}

