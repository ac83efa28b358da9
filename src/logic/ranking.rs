//! Standings ranking: order players by wins with a deterministic tie-break.

use crate::models::{RankedEntry, StandingRow};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;

/// Secondary ordering applied among players with equal wins.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Fewer matches played first, then lower id.
    #[default]
    FewestMatches,
    /// Lower id (earlier registration) first.
    RegistrationOrder,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fewest-matches" => Ok(TieBreak::FewestMatches),
            "registration-order" => Ok(TieBreak::RegistrationOrder),
            other => Err(format!("unknown tie-break {other:?}")),
        }
    }
}

/// Sort a store snapshot into ranked order: wins descending, then `tie_break`.
///
/// Pure: the same rows always give the same sequence, whatever order they arrive in.
pub fn rank(mut rows: Vec<StandingRow>, tie_break: TieBreak) -> Vec<RankedEntry> {
    match tie_break {
        TieBreak::FewestMatches => rows.sort_by_key(|r| {
            (
                Reverse(r.standing.wins),
                r.standing.matches,
                r.player.id,
            )
        }),
        TieBreak::RegistrationOrder => {
            rows.sort_by_key(|r| (Reverse(r.standing.wins), r.player.id))
        }
    }
    log::debug!("Ranked {} player(s) by {:?}", rows.len(), tie_break);
    rows.iter()
        .enumerate()
        .map(|(i, r)| RankedEntry::from_row(i, r))
        .collect()
}
