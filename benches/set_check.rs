use criterion::{black_box, criterion_group, criterion_main, Criterion};
use set_engine::cards::build_universe;
use set_engine::rules::{find_sets, is_a_set};
use set_engine::SetGame;

fn bench_is_a_set(c: &mut Criterion) {
    let cards = build_universe();

    c.bench_function("is_a_set_all_triples", |b| {
        b.iter(|| {
            let mut sets = 0;
            for i in 0..cards.len() {
                for j in (i + 1)..cards.len() {
                    for k in (j + 1)..cards.len() {
                        if is_a_set(&cards[i], &cards[j], &cards[k]) {
                            sets += 1;
                        }
                    }
                }
            }
            black_box(sets)
        })
    });
}

fn bench_find_sets(c: &mut Criterion) {
    let mut game = SetGame::new(12345);
    game.deal_cards();
    game.deal_cards();
    let board = game.board();

    c.bench_function("find_sets_15_cards", |b| {
        b.iter(|| find_sets(black_box(&board)))
    });
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game_and_deal", |b| {
        b.iter(|| {
            let mut game = SetGame::new(black_box(12345));
            game.deal_cards();
            game
        })
    });
}

criterion_group!(benches, bench_is_a_set, bench_find_sets, bench_new_game);
criterion_main!(benches);
