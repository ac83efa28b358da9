//! Swiss-system tournament tracker: library with models, store interface and pairing logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{assign_bye, pair, rank, record_match, register_player, reset_matches, reset_players, TieBreak};
pub use models::{
    MatchId, MatchRecord, Opponent, Pairing, Player, PlayerId, PlayerStanding, RankedEntry, Standing,
    StandingRow, Tournament, TournamentError, BYE_ID, BYE_NAME,
};
pub use store::{with_transaction, MemoryStore, MemoryTx, StandingsStore, StandingsTx};
