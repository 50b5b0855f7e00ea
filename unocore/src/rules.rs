use crate::card::{Card, PlayedCard};

/// Whether `card` may be played on `top`.
///
/// An empty discard pile accepts anything. Wild cards are always playable;
/// anything else has to share the top card's (bound) color or its rank.
pub fn is_legal(card: &Card, top: Option<&PlayedCard>) -> bool {
    let Some(top) = top else {
        return true;
    };

    match card {
        Card::Wild | Card::WildDrawFour => true,
        Card::Colored(color, colored_card) => {
            *color == top.color() || top.colored_card() == Some(*colored_card)
        }
    }
}
