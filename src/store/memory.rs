//! In-memory standings store.

use crate::models::{MatchRecord, Player, PlayerId, Standing, StandingRow, TournamentError};
use crate::store::{StandingsStore, StandingsTx};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockWriteGuard};

#[derive(Clone, Debug, Default)]
struct Tables {
    /// Last id handed out. Ids are never reused, even after deleting all players.
    last_id: PlayerId,
    /// Registration order.
    players: Vec<Player>,
    standings: BTreeMap<PlayerId, Standing>,
    matches: Vec<MatchRecord>,
}

impl Tables {
    fn standing_mut(&mut self, id: PlayerId) -> Result<&mut Standing, TournamentError> {
        self.standings
            .get_mut(&id)
            .ok_or(TournamentError::UnknownPlayer(id))
    }
}

/// Store backed by a lock-guarded set of tables. Transactions hold the write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StandingsStore for MemoryStore {
    type Tx<'a> = MemoryTx<'a>;

    fn begin(&self) -> Result<MemoryTx<'_>, TournamentError> {
        // A transaction that panicked never wrote its copy back, so the tables are intact.
        let guard = self.tables.write().unwrap_or_else(|poisoned| {
            log::warn!("Recovering standings store after a panicked transaction");
            self.tables.clear_poison();
            poisoned.into_inner()
        });
        Ok(MemoryTx { guard, work: None })
    }
}

/// Open transaction on a [`MemoryStore`]. Reads go to the locked tables until the first write,
/// which takes a working copy; the copy replaces the tables on commit.
pub struct MemoryTx<'a> {
    guard: RwLockWriteGuard<'a, Tables>,
    work: Option<Tables>,
}

impl MemoryTx<'_> {
    fn tables(&self) -> &Tables {
        self.work.as_ref().unwrap_or(&*self.guard)
    }

    fn tables_mut(&mut self) -> &mut Tables {
        let guard = &self.guard;
        self.work.get_or_insert_with(|| Tables::clone(guard))
    }
}

impl StandingsTx for MemoryTx<'_> {
    fn snapshot(&mut self) -> Result<Vec<StandingRow>, TournamentError> {
        let tables = self.tables();
        let rows = tables
            .players
            .iter()
            .map(|p| StandingRow {
                player: p.clone(),
                standing: tables
                    .standings
                    .get(&p.id)
                    .copied()
                    .unwrap_or_else(|| Standing::new(p.id)),
            })
            .collect();
        Ok(rows)
    }

    fn count_players(&mut self) -> Result<usize, TournamentError> {
        Ok(self.tables().players.len())
    }

    fn insert_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        let tables = self.tables_mut();
        tables.last_id += 1;
        let id = tables.last_id;
        tables.players.push(Player {
            id,
            name: name.to_string(),
        });
        tables.standings.insert(id, Standing::new(id));
        Ok(id)
    }

    fn increment_win(&mut self, id: PlayerId) -> Result<(), TournamentError> {
        self.tables_mut().standing_mut(id)?.add_win();
        Ok(())
    }

    fn increment_loss(&mut self, id: PlayerId) -> Result<(), TournamentError> {
        self.tables_mut().standing_mut(id)?.add_loss();
        Ok(())
    }

    fn toggle_bye(&mut self, id: PlayerId) -> Result<(), TournamentError> {
        let s = self.tables_mut().standing_mut(id)?;
        s.used_bye = !s.used_bye;
        Ok(())
    }

    fn append_match(&mut self, record: MatchRecord) -> Result<(), TournamentError> {
        self.tables_mut().matches.push(record);
        Ok(())
    }

    fn matches(&mut self) -> Result<Vec<MatchRecord>, TournamentError> {
        Ok(self.tables().matches.clone())
    }

    fn delete_matches(&mut self) -> Result<(), TournamentError> {
        let tables = self.tables_mut();
        tables.matches.clear();
        for s in tables.standings.values_mut() {
            s.reset();
        }
        Ok(())
    }

    fn delete_players(&mut self) -> Result<(), TournamentError> {
        let tables = self.tables_mut();
        tables.players.clear();
        tables.standings.clear();
        tables.matches.clear();
        Ok(())
    }

    fn commit(mut self) -> Result<(), TournamentError> {
        if let Some(work) = self.work.take() {
            *self.guard = work;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::with_transaction;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn dropped_transaction_leaves_store_untouched() {
        let store = MemoryStore::new();
        {
            let mut tx = store.begin().unwrap();
            tx.insert_player("Ada").unwrap();
        }
        let mut tx = store.begin().unwrap();
        assert_eq!(tx.count_players().unwrap(), 0);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let mut tx = store.begin().unwrap();
        assert_eq!(tx.insert_player("Ada").unwrap(), 1);
        tx.delete_players().unwrap();
        assert_eq!(tx.insert_player("Bob").unwrap(), 2);
        tx.commit().unwrap();
    }

    #[test]
    fn panicked_transaction_keeps_store_usable() {
        let store = MemoryStore::new();
        with_transaction(&store, |tx| tx.insert_player("Ada")).unwrap();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            with_transaction(&store, |tx| -> Result<(), TournamentError> {
                tx.insert_player("Bob")?;
                panic!("transaction body failed");
            })
        }));
        assert!(result.is_err());

        let mut tx = store.begin().unwrap();
        let names: Vec<_> = tx
            .snapshot()
            .unwrap()
            .into_iter()
            .map(|r| r.player.name)
            .collect();
        assert_eq!(names, vec!["Ada".to_string()]);
        assert_eq!(tx.insert_player("Cy").unwrap(), 2);
    }

    #[test]
    fn reads_do_not_take_a_working_copy() {
        let store = MemoryStore::new();
        with_transaction(&store, |tx| tx.insert_player("Ada")).unwrap();

        let mut tx = store.begin().unwrap();
        assert_eq!(tx.count_players().unwrap(), 1);
        assert_eq!(tx.snapshot().unwrap().len(), 1);
        assert!(tx.matches().unwrap().is_empty());
        assert!(tx.work.is_none());

        tx.increment_win(1).unwrap();
        assert!(tx.work.is_some());
        assert_eq!(tx.snapshot().unwrap()[0].standing.wins, 1);
    }

    #[test]
    fn counter_updates_on_unknown_player_fail() {
        let store = MemoryStore::new();
        let mut tx = store.begin().unwrap();
        assert_eq!(tx.increment_win(7), Err(TournamentError::UnknownPlayer(7)));
        assert_eq!(tx.toggle_bye(7), Err(TournamentError::UnknownPlayer(7)));
    }
}
