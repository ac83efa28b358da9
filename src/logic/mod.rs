//! Tournament business logic: ranking, bye assignment, pairing, match recording.

mod bye;
mod pairing;
mod ranking;
mod recording;
mod registration;

pub use bye::assign_bye;
pub use pairing::pair;
pub use ranking::{rank, TieBreak};
pub use recording::record_match;
pub use registration::{register_player, reset_matches, reset_players};
