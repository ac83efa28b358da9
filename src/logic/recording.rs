//! Match reporting: the only path that changes win/loss/match counters.

use crate::models::{MatchRecord, Opponent, PlayerId, TournamentError, BYE_ID};
use crate::store::StandingsTx;

/// Apply one match outcome inside `tx`.
///
/// The winner gets a win and a match. A real loser gets a loss and a match; [`Opponent::Bye`]
/// updates nobody else. The outcome is appended to the match log.
pub fn record_match<T: StandingsTx>(
    tx: &mut T,
    winner_id: PlayerId,
    loser: Opponent,
) -> Result<MatchRecord, TournamentError> {
    if winner_id == BYE_ID {
        return Err(TournamentError::UnknownPlayer(winner_id));
    }
    if loser == Opponent::Player(winner_id) {
        return Err(TournamentError::SamePlayer(winner_id));
    }

    tx.increment_win(winner_id)?;
    if let Opponent::Player(loser_id) = loser {
        tx.increment_loss(loser_id)?;
    }

    let record = MatchRecord::new(winner_id, loser);
    tx.append_match(record.clone())?;
    log::info!(
        "Recorded match {}: {} beat {}",
        record.id,
        winner_id,
        match loser {
            Opponent::Player(id) => id.to_string(),
            Opponent::Bye => "BYE".to_string(),
        }
    );
    Ok(record)
}
