//! Bye assignment for rounds with an odd number of players.

use crate::models::{PlayerId, RankedEntry, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Insert a bye slot next to a randomly chosen player who has not had a bye yet.
///
/// Returns `Ok(None)` and leaves `entries` alone when the count is already even. Otherwise the
/// recipient is drawn uniformly from players with `used_bye == false` and the bye is placed so
/// that recipient and bye share a pair boundary `(2k, 2k+1)`:
///
/// - recipient at an even index: bye goes right after it;
/// - recipient at an odd index: it swaps with its successor and the bye goes after it.
///
/// The recipient's `used_bye` is set on the returned sequence; persisting it is up to the caller.
/// Fails with `NoEligibleByeRecipient` when every player has already had a bye.
pub fn assign_bye<R: Rng + ?Sized>(
    entries: &mut Vec<RankedEntry>,
    rng: &mut R,
) -> Result<Option<PlayerId>, TournamentError> {
    if entries.len() % 2 == 0 {
        return Ok(None);
    }

    let eligible: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.used_bye && !e.is_bye())
        .map(|(i, _)| i)
        .collect();
    let pos = *eligible
        .choose(rng)
        .ok_or(TournamentError::NoEligibleByeRecipient)?;

    let bye_pos = if pos % 2 == 0 {
        pos + 1
    } else {
        // An odd index in an odd-length list always has a successor.
        entries.swap(pos, pos + 1);
        pos + 2
    };
    entries.insert(bye_pos, RankedEntry::bye(bye_pos));

    let recipient = &mut entries[bye_pos - 1];
    recipient.used_bye = true;
    let recipient_id = recipient.player_id;

    for (i, e) in entries.iter_mut().enumerate().skip(pos) {
        e.rank = i;
    }
    Ok(Some(recipient_id))
}
