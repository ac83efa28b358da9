//! Player, Standing, and the ranked views built from them.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store.
pub type PlayerId = i64;

/// Reserved identifier standing in for "no opponent" (the bye).
pub const BYE_ID: PlayerId = -1;

/// Display name of the bye slot.
pub const BYE_NAME: &str = "BYE";

/// A registered player. The id never changes once the store assigns it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Accumulated record for one player. `matches == wins + losses` always holds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub wins: u32,
    pub losses: u32,
    pub matches: u32,
    pub used_bye: bool,
}

impl Standing {
    /// Zeroed standing created alongside a new player.
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Self::default()
        }
    }

    /// Record a win (also counts the match).
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.matches += 1;
    }

    /// Record a loss (also counts the match).
    pub fn add_loss(&mut self) {
        self.losses += 1;
        self.matches += 1;
    }

    /// Clear counters and the bye flag.
    pub fn reset(&mut self) {
        *self = Self::new(self.player_id);
    }
}

/// One row of a store snapshot: a player joined with its standing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub player: Player,
    pub standing: Standing,
}

/// Public standings view: `(id, name, wins, matches)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl PlayerStanding {
    /// Public view of a ranked entry.
    pub fn from_entry(e: &RankedEntry) -> Self {
        Self {
            id: e.player_id,
            name: e.name.clone(),
            wins: e.wins,
            matches: e.matches,
        }
    }
}

/// A player's snapshot positioned in the sorted sequence for one pairing computation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Position after sorting (0 = first place).
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub matches: u32,
    pub used_bye: bool,
}

impl RankedEntry {
    pub fn from_row(rank: usize, row: &StandingRow) -> Self {
        Self {
            rank,
            player_id: row.player.id,
            name: row.player.name.clone(),
            wins: row.standing.wins,
            losses: row.standing.losses,
            matches: row.standing.matches,
            used_bye: row.standing.used_bye,
        }
    }

    /// The bye slot. Never persisted; `used_bye` is set so it can't be picked as a recipient.
    pub fn bye(rank: usize) -> Self {
        Self {
            rank,
            player_id: BYE_ID,
            name: BYE_NAME.to_string(),
            wins: 0,
            losses: 0,
            matches: 0,
            used_bye: true,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player_id == BYE_ID
    }
}
