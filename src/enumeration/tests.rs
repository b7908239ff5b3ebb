use super::*;
use crate::Count;
use crate::cards::Card;

fn card(s: &str) -> Card {
    Card::try_from(s).unwrap()
}

#[test]
fn shard_scores_every_hand_once() {
    let histogram = Enumerator::shard(card("7d"));
    assert_eq!(histogram.total(), crate::N_HANDS_PER_DRAW as Count);
}

#[test]
fn shard_finds_the_one_twenty_nine() {
    // only J of the draw's suit with the other three fives
    assert_eq!(Enumerator::shard(card("5h")).get(29), 1);
    assert_eq!(Enumerator::shard(card("Kh")).get(29), 0);
}

#[test]
fn shard_never_hits_impossible_totals() {
    let histogram = Enumerator::shard(card("5c"));
    for score in [19, 25, 26, 27] {
        assert_eq!(histogram.get(score), 0);
    }
}

#[test]
fn suits_are_symmetric_across_shards() {
    assert_eq!(
        Enumerator::shard(card("9c")).counts(),
        Enumerator::shard(card("9s")).counts()
    );
}

/// The strongest check available on the scoring engine: every bucket of
/// the full 12,994,800-hand pass must equal the published distribution.
/// Slow in debug builds, run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn full_enumeration_matches_reference() {
    let histogram = Enumerator::default().verbose(false).enumerate();
    assert_eq!(histogram.total(), crate::N_ENUMERATED as Count);
    let verification = Verifier::from(Histogram::reference().unwrap()).verify(&histogram);
    assert!(verification.is_match(), "{}", verification);
}

#[test]
#[ignore]
fn serial_and_parallel_agree() {
    let serial = Enumerator::default().verbose(false).serial(true).enumerate();
    let parallel = Enumerator::default().verbose(false).serial(false).enumerate();
    assert_eq!(serial, parallel);
}
