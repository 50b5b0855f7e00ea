//! Turn and rule engine for UNO.
//!
//! [`uno::Uno`] owns a round: the piles, the hands, whose turn it is and which
//! way play is going. Displays drive it through commands such as
//! [`uno::Uno::request_play`], read it through its queries and can subscribe to
//! [`event::GameEvent`]s instead of polling.

pub mod ai;
pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
mod effect;
pub mod error;
pub mod event;
pub mod player;
pub mod reshuffle;
pub mod rules;
pub mod turn;
pub mod uno;
