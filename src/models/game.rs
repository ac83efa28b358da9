//! Pairings for the next round and recorded match outcomes.

use crate::models::player::{PlayerId, BYE_ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a recorded match.
pub type MatchId = Uuid;

/// The losing side of a reported match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    Player(PlayerId),
    /// Unopposed win: nobody takes the loss.
    Bye,
}

impl Opponent {
    /// Interpret a wire id, where [`BYE_ID`] means "no opponent".
    pub fn from_id(id: PlayerId) -> Self {
        if id == BYE_ID {
            Opponent::Bye
        } else {
            Opponent::Player(id)
        }
    }
}

/// One matchup of the next round: `(id1, name1, id2, name2)`. Either side may be the bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player_id_1: PlayerId,
    pub name_1: String,
    pub player_id_2: PlayerId,
    pub name_2: String,
}

impl Pairing {
    pub fn has_bye(&self) -> bool {
        self.player_id_1 == BYE_ID || self.player_id_2 == BYE_ID
    }

    /// The real player facing the bye, if this is the bye pairing.
    pub fn bye_recipient(&self) -> Option<PlayerId> {
        if self.player_id_2 == BYE_ID {
            Some(self.player_id_1)
        } else if self.player_id_1 == BYE_ID {
            Some(self.player_id_2)
        } else {
            None
        }
    }
}

/// A reported match, kept in the store's match log.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser: Opponent,
    pub reported_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(winner_id: PlayerId, loser: Opponent) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner_id,
            loser,
            reported_at: Utc::now(),
        }
    }
}
