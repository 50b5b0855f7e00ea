use crate::card::{Card, CardColor};

/// Rotation of play around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Seat that follows `current` when moving in `direction` around `players` seats.
pub fn next_player(current: usize, direction: Direction, players: usize) -> usize {
    (current as isize + direction.step()).rem_euclid(players as isize) as usize
}

/// Seat reached after `steps` single advances.
pub fn nth_player(current: usize, direction: Direction, players: usize, steps: usize) -> usize {
    (0..steps).fold(current, |seat, _| next_player(seat, direction, players))
}

pub enum TurnAction {
    Play(Card),
    Draw,
    Uno,
    ChooseColor(CardColor),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    /// A wild card left the hand and now waits for its color.
    WildPending,
    Wild,
    WildDrawFour,
    SelfDraw,
    UnoSuccessful,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_player_turn_works_when_first_player() {
        assert_eq!(next_player(0, Direction::Clockwise, 4), 1);
    }

    #[test]
    fn next_player_turn_works_when_last_player() {
        assert_eq!(next_player(3, Direction::Clockwise, 4), 0);
    }

    #[test]
    fn next_player_wraps_backwards() {
        assert_eq!(next_player(0, Direction::CounterClockwise, 4), 3);
        assert_eq!(next_player(2, Direction::CounterClockwise, 4), 1);
    }

    #[test]
    fn skip_player_turn_works() {
        assert_eq!(nth_player(0, Direction::Clockwise, 4, 2), 2);
        assert_eq!(nth_player(3, Direction::Clockwise, 4, 2), 1);
        assert_eq!(nth_player(1, Direction::Clockwise, 2, 2), 1);
    }

    #[test]
    fn reverse_flips_back_and_forth() {
        assert_eq!(Direction::Clockwise.reverse(), Direction::CounterClockwise);
        assert_eq!(Direction::Clockwise.reverse().reverse(), Direction::Clockwise);
    }
}
