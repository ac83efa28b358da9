//! Standings store: the storage collaborator the core reads snapshots from and writes updates to.
//!
//! Every interaction goes through a [`StandingsTx`] opened by [`StandingsStore::begin`]. A transaction
//! has exclusive access to the store until it is committed or dropped; dropping it without
//! [`StandingsTx::commit`] discards its changes.

mod memory;

pub use memory::{MemoryStore, MemoryTx};

use crate::models::{MatchRecord, PlayerId, StandingRow, TournamentError};

/// A unit of work against the store. Reads see one consistent snapshot.
pub trait StandingsTx {
    /// All players joined with their standings, in registration order.
    fn snapshot(&mut self) -> Result<Vec<StandingRow>, TournamentError>;

    fn count_players(&mut self) -> Result<usize, TournamentError>;

    /// Insert a player with a zeroed standing. Returns the newly assigned id.
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, TournamentError>;

    /// Add one win and one match. `UnknownPlayer` if `id` is not registered.
    fn increment_win(&mut self, id: PlayerId) -> Result<(), TournamentError>;

    /// Add one loss and one match. `UnknownPlayer` if `id` is not registered.
    fn increment_loss(&mut self, id: PlayerId) -> Result<(), TournamentError>;

    /// Flip `used_bye` for `id`. `UnknownPlayer` if `id` is not registered.
    fn toggle_bye(&mut self, id: PlayerId) -> Result<(), TournamentError>;

    fn append_match(&mut self, record: MatchRecord) -> Result<(), TournamentError>;

    /// Match log in report order.
    fn matches(&mut self) -> Result<Vec<MatchRecord>, TournamentError>;

    /// Clear the match log and zero every standing (players stay registered).
    fn delete_matches(&mut self) -> Result<(), TournamentError>;

    /// Remove all players, standings and the match log.
    fn delete_players(&mut self) -> Result<(), TournamentError>;

    /// Make every change in this transaction durable.
    fn commit(self) -> Result<(), TournamentError>
    where
        Self: Sized;
}

/// Something that can open transactions.
pub trait StandingsStore {
    type Tx<'a>: StandingsTx
    where
        Self: 'a;

    /// Open a transaction. `StoreUnavailable` if the store cannot be reached.
    fn begin(&self) -> Result<Self::Tx<'_>, TournamentError>;
}

/// Run `f` inside one transaction: commit on `Ok`, roll back on `Err` (or panic).
pub fn with_transaction<'s, S, T, F>(store: &'s S, f: F) -> Result<T, TournamentError>
where
    S: StandingsStore,
    F: FnOnce(&mut S::Tx<'s>) -> Result<T, TournamentError>,
{
    let mut tx = store.begin()?;
    let out = f(&mut tx)?;
    tx.commit()?;
    Ok(out)
}
