//! Registration and bulk resets.

use crate::models::{PlayerId, TournamentError};
use crate::store::StandingsTx;

/// Register a player under `name` (trimmed). Names need not be unique.
pub fn register_player<T: StandingsTx>(tx: &mut T, name: &str) -> Result<PlayerId, TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyPlayerName);
    }
    let id = tx.insert_player(name)?;
    log::info!("Registered player {id} ({name})");
    Ok(id)
}

/// Forget all match results: zero every standing and clear bye flags and the match log.
pub fn reset_matches<T: StandingsTx>(tx: &mut T) -> Result<(), TournamentError> {
    tx.delete_matches()?;
    log::info!("Cleared all match results");
    Ok(())
}

/// Remove every player along with their standings and match history.
pub fn reset_players<T: StandingsTx>(tx: &mut T) -> Result<(), TournamentError> {
    tx.delete_players()?;
    log::info!("Removed all players");
    Ok(())
}
