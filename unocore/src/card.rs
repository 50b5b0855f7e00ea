use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The four playable colors.
///
/// Declaration order doubles as the tie-break precedence when a color has to
/// be picked by count (Red, Blue, Green, Yellow).
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }
}

/// A card as it sits in a hand or in the draw pile.
///
/// Wild cards carry no color here; a color only exists once the card has been
/// played and turned into a [`PlayedCard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl Card {
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    /// Produces the discard-pile value of this card.
    ///
    /// Colored cards keep their own color and ignore `bound_color`; wild cards
    /// take it on.
    pub fn bind(self, bound_color: CardColor) -> PlayedCard {
        match self {
            Card::Colored(color, card) => card.into_played_card(color),
            Card::Wild => PlayedCard::Wild(bound_color),
            Card::WildDrawFour => PlayedCard::WildDrawFour(bound_color),
        }
    }
}

/// A card on the discard pile. Wild cards here always have a bound color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl PlayedCard {
    /// The bound color for wilds, the printed color otherwise.
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) => *color,
            PlayedCard::Wild(color) => *color,
            PlayedCard::WildDrawFour(color) => *color,
        }
    }

    pub fn colored_card(&self) -> Option<ColoredCard> {
        match self {
            PlayedCard::Colored(_, card) => Some(*card),
            PlayedCard::Wild(_) | PlayedCard::WildDrawFour(_) => None,
        }
    }

    /// Strips the bound color so the card can go back into the draw pile.
    pub fn into_card(self) -> Card {
        match self {
            PlayedCard::Colored(color, card) => Card::Colored(color, card),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDrawFour(_) => Card::WildDrawFour,
        }
    }
}

impl Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoredCard::Number(number) => write!(f, "{number}"),
            ColoredCard::Skip => write!(f, "Skip"),
            ColoredCard::Reverse => write!(f, "Reverse"),
            ColoredCard::DrawTwo => write!(f, "Draw Two"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{color} {card}"),
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, card) => write!(f, "{color} {card}"),
            PlayedCard::Wild(color) => write!(f, "Wild ({color})"),
            PlayedCard::WildDrawFour(color) => write!(f, "Wild Draw Four ({color})"),
        }
    }
}
