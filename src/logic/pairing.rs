//! Pairing: adjacent ranked entries play each other.

use crate::models::{Pairing, RankedEntry, TournamentError};

/// Pair entries `(0,1), (2,3), …` in order. `OddEntryCount` if the length is odd.
pub fn pair(entries: &[RankedEntry]) -> Result<Vec<Pairing>, TournamentError> {
    if entries.len() % 2 != 0 {
        return Err(TournamentError::OddEntryCount(entries.len()));
    }
    let pairings: Vec<Pairing> = entries
        .chunks_exact(2)
        .map(|chunk| Pairing {
            player_id_1: chunk[0].player_id,
            name_1: chunk[0].name.clone(),
            player_id_2: chunk[1].player_id,
            name_2: chunk[1].name.clone(),
        })
        .collect();
    log::debug!("Paired {} entries into {} match(es)", entries.len(), pairings.len());
    Ok(pairings)
}
