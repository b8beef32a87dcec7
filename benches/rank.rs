#[macro_use]
extern crate criterion;
extern crate holdem_odds;
extern crate rand;

use criterion::Criterion;
use holdem_odds::core::{Card, Deck, Hand, Rankable, evaluate_hand};
use rand::{SeedableRng, rngs::StdRng};

fn deal(n: usize) -> Vec<Card> {
    let mut rng = StdRng::seed_from_u64(420);
    let mut deck = Deck::shuffled(&mut rng);
    (0..n).filter_map(|_| deck.draw()).collect()
}

fn rank_five(c: &mut Criterion) {
    let cards = deal(5);
    c.bench_function("Rank one 5 card hand", move |b| b.iter(|| cards.strength()));
}

fn rank_hole_and_board(c: &mut Criterion) {
    let cards = deal(7);
    let hand = Hand::new(cards[0], cards[1]).expect("Should be able to create a hand.");
    let board = cards[2..].to_vec();
    c.bench_function("Evaluate hole cards with a full board", move |b| {
        b.iter(|| evaluate_hand(&hand, &board))
    });
}

criterion_group!(benches, rank_five, rank_hole_and_board);
criterion_main!(benches);
