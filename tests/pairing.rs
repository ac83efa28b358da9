//! Integration tests for next-round pairings and bye assignment.

use std::collections::HashSet;
use swiss_tournament::{
    pair, MemoryStore, Opponent, Pairing, PlayerId, RankedEntry, StandingsStore, StandingsTx,
    Tournament, TournamentError, BYE_ID,
};

fn tournament_with_players(n: usize, seed: u64) -> (Tournament<MemoryStore>, Vec<PlayerId>) {
    let t = Tournament::seeded(MemoryStore::new(), seed);
    let ids = (1..=n)
        .map(|i| t.register_player(&format!("P{i}")).unwrap())
        .collect();
    (t, ids)
}

fn paired_ids(pairings: &[Pairing]) -> Vec<PlayerId> {
    pairings
        .iter()
        .flat_map(|p| [p.player_id_1, p.player_id_2])
        .filter(|&id| id != BYE_ID)
        .collect()
}

fn used_bye(t: &Tournament<MemoryStore>) -> Vec<PlayerId> {
    let mut tx = t.store().begin().unwrap();
    let rows = tx.snapshot().unwrap();
    rows.into_iter()
        .filter(|r| r.standing.used_bye)
        .map(|r| r.player.id)
        .collect()
}

#[test]
fn four_fresh_players_pair_in_registration_order() {
    let (mut t, ids) = tournament_with_players(4, 1);
    let pairings = t.next_round_pairings().unwrap();

    assert_eq!(pairings.len(), 2);
    assert_eq!(
        (pairings[0].player_id_1, pairings[0].player_id_2),
        (ids[0], ids[1])
    );
    assert_eq!(
        (pairings[1].player_id_1, pairings[1].player_id_2),
        (ids[2], ids[3])
    );
    assert_eq!(pairings[0].name_1, "P1");
    assert!(pairings.iter().all(|p| !p.has_bye()));
    assert!(used_bye(&t).is_empty());
}

#[test]
fn five_players_get_exactly_one_bye() {
    let (mut t, ids) = tournament_with_players(5, 7);
    let pairings = t.next_round_pairings().unwrap();

    assert_eq!(pairings.len(), 3);
    let byes: Vec<_> = pairings.iter().filter_map(Pairing::bye_recipient).collect();
    assert_eq!(byes.len(), 1);
    assert_eq!(pairings.iter().filter(|p| !p.has_bye()).count(), 2);

    assert_eq!(used_bye(&t), byes);

    let mut seen = paired_ids(&pairings);
    seen.sort();
    assert_eq!(seen, ids);
}

#[test]
fn winners_are_paired_together() {
    let (mut t, ids) = tournament_with_players(4, 1);
    t.report_match(ids[3], Opponent::Player(ids[0])).unwrap();
    t.report_match(ids[2], Opponent::Player(ids[1])).unwrap();

    let pairings = t.next_round_pairings().unwrap();
    assert_eq!(
        (pairings[0].player_id_1, pairings[0].player_id_2),
        (ids[2], ids[3])
    );
    assert_eq!(
        (pairings[1].player_id_1, pairings[1].player_id_2),
        (ids[0], ids[1])
    );
}

#[test]
fn nobody_gets_a_second_bye_until_everyone_had_one() {
    let (mut t, ids) = tournament_with_players(5, 42);
    let mut recipients = HashSet::new();

    for _ in 0..ids.len() {
        let pairings = t.next_round_pairings().unwrap();
        let recipient = pairings
            .iter()
            .find_map(Pairing::bye_recipient)
            .expect("odd round has a bye");
        assert!(recipients.insert(recipient), "player {recipient} got a second bye");

        let mut seen = paired_ids(&pairings);
        seen.sort();
        assert_eq!(seen, ids);
    }
    assert_eq!(recipients.len(), ids.len());
}

#[test]
fn exhausted_byes_fail_instead_of_looping() {
    let (mut t, ids) = tournament_with_players(3, 3);
    for _ in 0..ids.len() {
        t.next_round_pairings().unwrap();
    }
    assert_eq!(
        t.next_round_pairings(),
        Err(TournamentError::NoEligibleByeRecipient)
    );
    // Failed computation left the flags as they were.
    assert_eq!(used_bye(&t).len(), ids.len());
}

#[test]
fn reset_matches_makes_byes_available_again() {
    let (mut t, _) = tournament_with_players(1, 3);
    t.next_round_pairings().unwrap();
    assert!(t.next_round_pairings().is_err());

    t.reset_matches().unwrap();
    let pairings = t.next_round_pairings().unwrap();
    assert_eq!(pairings.len(), 1);
    assert!(pairings[0].has_bye());
}

#[test]
fn same_seed_gives_same_bye() {
    let (mut a, _) = tournament_with_players(7, 99);
    let (mut b, _) = tournament_with_players(7, 99);
    assert_eq!(a.next_round_pairings().unwrap(), b.next_round_pairings().unwrap());
}

#[test]
fn no_players_means_no_pairings() {
    let (mut t, _) = tournament_with_players(0, 1);
    assert_eq!(t.next_round_pairings().unwrap(), Vec::new());
}

#[test]
fn pairing_an_odd_sequence_is_rejected() {
    let entries: Vec<RankedEntry> = (0..3).map(RankedEntry::bye).collect();
    assert_eq!(pair(&entries), Err(TournamentError::OddEntryCount(3)));
}
