criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scoring_random_hand,
        reporting_random_hand,
        exhausting_hands_against_one_draw,
        exhausting_one_draw_shard,
}

fn scoring_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("score a random 5-card Hand", |b| {
        let hand = Deck::new().hand();
        b.iter(|| Evaluator::from(hand).score())
    });
}

fn reporting_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("report every category of a random Hand", |b| {
        let hand = Deck::new().hand();
        b.iter(|| ScoreReport::from(hand))
    });
}

fn exhausting_hands_against_one_draw(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 4-card subsets of 51 cards", |b| {
        let draw = Deck::new().draw();
        b.iter(|| HandSets::from(draw).count())
    });
}

fn exhausting_one_draw_shard(c: &mut criterion::Criterion) {
    c.bench_function("score every Hand against one draw card", |b| {
        let draw = Deck::new().draw();
        b.iter(|| Enumerator::shard(draw))
    });
}

use cribbage::cards::*;
use cribbage::enumeration::*;
use cribbage::scoring::*;
