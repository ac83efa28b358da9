//! Tournament facade and TournamentError.

use crate::logic::{self, TieBreak};
use crate::models::game::{MatchRecord, Opponent, Pairing};
use crate::models::player::{PlayerId, PlayerStanding};
use crate::store::{with_transaction, StandingsStore, StandingsTx};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The standings store could not be read or written. Not retried.
    StoreUnavailable(String),
    /// No registered player has this id.
    UnknownPlayer(PlayerId),
    /// Pairing was asked to pair an odd number of entries.
    OddEntryCount(usize),
    /// Odd player count, but every player has already had a bye.
    NoEligibleByeRecipient,
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// A match was reported with the same player on both sides.
    SamePlayer(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::StoreUnavailable(reason) => write!(f, "Standings store unavailable: {}", reason),
            TournamentError::UnknownPlayer(id) => write!(f, "No player with id {}", id),
            TournamentError::OddEntryCount(n) => write!(f, "Cannot pair an odd number of entries ({})", n),
            TournamentError::NoEligibleByeRecipient => {
                write!(f, "Every player has already received a bye")
            }
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::SamePlayer(id) => write!(f, "Player {} cannot play against themselves", id),
        }
    }
}

impl std::error::Error for TournamentError {}

/// A Swiss-system tournament over a standings store.
///
/// Holds no round state of its own: each call to [`Tournament::next_round_pairings`] ranks the
/// current standings afresh. Every operation runs in exactly one store transaction.
pub struct Tournament<S, R = StdRng> {
    store: S,
    rng: R,
    tie_break: TieBreak,
}

impl<S: StandingsStore> Tournament<S, StdRng> {
    /// Tournament with an entropy-seeded RNG for bye selection.
    pub fn new(store: S) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Tournament whose bye selection is reproducible from `seed`.
    pub fn seeded(store: S, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }
}

impl<S: StandingsStore, R: Rng> Tournament<S, R> {
    /// Tournament drawing byes from `rng`.
    pub fn with_rng(store: S, rng: R) -> Self {
        Self {
            store,
            rng,
            tie_break: TieBreak::default(),
        }
    }

    /// Use `tie_break` to order players with equal wins.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The underlying standings store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a player. Returns the id assigned by the store.
    pub fn register_player(&self, name: &str) -> Result<PlayerId, TournamentError> {
        with_transaction(&self.store, |tx| logic::register_player(tx, name))
    }

    /// Number of registered players.
    pub fn count_players(&self) -> Result<usize, TournamentError> {
        with_transaction(&self.store, |tx| tx.count_players())
    }

    /// Record that `winner_id` beat `loser`. Nothing is applied if either side is unknown.
    pub fn report_match(&self, winner_id: PlayerId, loser: Opponent) -> Result<MatchRecord, TournamentError> {
        with_transaction(&self.store, |tx| logic::record_match(tx, winner_id, loser))
    }

    /// Current standings, first place first.
    pub fn standings(&self) -> Result<Vec<PlayerStanding>, TournamentError> {
        let tie_break = self.tie_break;
        with_transaction(&self.store, |tx| {
            let entries = logic::rank(tx.snapshot()?, tie_break);
            Ok(entries.iter().map(PlayerStanding::from_entry).collect())
        })
    }

    /// Every reported match, oldest first.
    pub fn match_history(&self) -> Result<Vec<MatchRecord>, TournamentError> {
        with_transaction(&self.store, |tx| tx.matches())
    }

    /// Pairings for the next round.
    ///
    /// With an odd player count one pairing is against the bye, and the recipient's bye flag is
    /// set in the same transaction as the standings read.
    pub fn next_round_pairings(&mut self) -> Result<Vec<Pairing>, TournamentError> {
        let tie_break = self.tie_break;
        let rng = &mut self.rng;
        with_transaction(&self.store, |tx| {
            let mut entries = logic::rank(tx.snapshot()?, tie_break);
            match logic::assign_bye(&mut entries, rng) {
                Ok(Some(id)) => {
                    tx.toggle_bye(id)?;
                    log::info!("Player {} receives the bye this round", id);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Cannot pair {} players: {}", entries.len(), e);
                    return Err(e);
                }
            }
            logic::pair(&entries)
        })
    }

    /// Clear all results; players stay registered.
    pub fn reset_matches(&self) -> Result<(), TournamentError> {
        with_transaction(&self.store, |tx| logic::reset_matches(tx))
    }

    /// Remove all players.
    pub fn reset_players(&self) -> Result<(), TournamentError> {
        with_transaction(&self.store, |tx| logic::reset_players(tx))
    }
}
