use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use five_card_rank::cards::{Card, Suit};
use five_card_rank::dealer::{DealConfig, Dealer};
use five_card_rank::evaluator::{evaluate, evaluate_five, Ruleset};

fn bench_evaluate_five(c: &mut Criterion) {
    let hi = [
        Card::new(Suit::Heart, 1),
        Card::new(Suit::Diamond, 13),
        Card::new(Suit::Spade, 7),
        Card::new(Suit::Club, 5),
        Card::new(Suit::Diamond, 2),
    ];
    let royal = [
        Card::new(Suit::Spade, 1),
        Card::new(Suit::Spade, 13),
        Card::new(Suit::Spade, 12),
        Card::new(Suit::Spade, 11),
        Card::new(Suit::Spade, 10),
    ];

    let mut g = c.benchmark_group("evaluate_five");
    for ruleset in Ruleset::ALL {
        g.bench_with_input(BenchmarkId::new("high_cards", ruleset), &hi, |b, input| {
            b.iter(|| evaluate_five(black_box(input), ruleset))
        });
        g.bench_with_input(BenchmarkId::new("royal", ruleset), &royal, |b, input| {
            b.iter(|| evaluate_five(black_box(input), ruleset))
        });
    }
    g.finish();

    c.bench_function("evaluate_slice_wrong_length", |b| {
        b.iter(|| evaluate(black_box(&royal[..4])))
    });
}

fn bench_deal(c: &mut Criterion) {
    let mut dealer = Dealer::new(DealConfig { seed: Some(42), ruleset: Ruleset::Reference });
    c.bench_function("shuffle_deal_classify", |b| b.iter(|| dealer.deal()));
}

criterion_group!(benches, bench_evaluate_five, bench_deal);
criterion_main!(benches);
