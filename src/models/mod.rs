//! Data structures for the tournament: players, standings, pairings, matches.

mod game;
mod player;
mod tournament;

pub use game::{MatchId, MatchRecord, Opponent, Pairing};
pub use player::{
    Player, PlayerId, PlayerStanding, RankedEntry, Standing, StandingRow, BYE_ID, BYE_NAME,
};
pub use tournament::{Tournament, TournamentError};
