//! Benchmarks for turn generation and in-place apply/reverse.
//!
//! The search never clones states; these numbers bound the cost of
//! visiting one child node.
//!
//! Run with:
//!   cargo bench --package poke_search --bench state_mutation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poke_search::search::get_options;
use poke_search::{generate_instructions, Action, DamageRollMode, PokemonConfig, Side, State, StateMutator};

fn member(species: &str, moves: &[&str]) -> poke_search::Pokemon {
    PokemonConfig::new(species)
        .moves(moves)
        .build()
        .expect("species exists")
}

/// Three Pokémon a side with hazards, status and recovery in play.
fn setup_battle() -> State {
    let user = Side::new(
        member("garchomp", &["earthquake", "stoneedge", "swordsdance", "stealthrock"]),
        [
            member("toxapex", &["scald", "toxic", "recover"]),
            member("skarmory", &["bravebird", "spikes", "roost", "whirlwind"]),
        ],
    );
    let opponent = Side::new(
        member("heatran", &["flamethrower", "earthpower", "protect", "toxic"]),
        [
            member("blissey", &["seismictoss", "softboiled"]),
            member("tyranitar", &["stoneedge", "crunch"]),
        ],
    );
    State::new(user, opponent)
}

fn bench_generate_turn(c: &mut Criterion) {
    let mut state = setup_battle();
    let user = Action::parse("earthquake");
    let opponent = Action::parse("flamethrower");

    let mut group = c.benchmark_group("generate_instructions");
    for mode in [DamageRollMode::Average, DamageRollMode::All] {
        group.bench_function(format!("{mode:?}"), |b| {
            let mut mutator = StateMutator::new(&mut state);
            b.iter(|| generate_instructions(&mut mutator, black_box(&user), black_box(&opponent), mode))
        });
    }
    group.finish();
}

fn bench_apply_reverse(c: &mut Criterion) {
    let mut state = setup_battle();
    let mut mutator = StateMutator::new(&mut state);
    let branches = generate_instructions(
        &mut mutator,
        &Action::parse("switch toxapex"),
        &Action::parse("toxic"),
        DamageRollMode::Average,
    );

    c.bench_function("apply_reverse_branches", |b| {
        b.iter(|| {
            for branch in &branches {
                mutator.apply(black_box(&branch.instructions));
                mutator.reverse(&branch.instructions);
            }
        })
    });
}

fn bench_full_turn_grid(c: &mut Criterion) {
    let mut state = setup_battle();
    let (user_options, opponent_options) = get_options(&state);

    c.bench_function("turn_grid", |b| {
        let mut mutator = StateMutator::new(&mut state);
        b.iter(|| {
            let mut count = 0;
            for user in &user_options {
                for opponent in &opponent_options {
                    count += generate_instructions(&mut mutator, user, opponent, DamageRollMode::Average).len();
                }
            }
            count
        })
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let state = setup_battle();
    c.bench_function("state_fingerprint", |b| b.iter(|| black_box(&state).fingerprint()));
}

criterion_group!(
    benches,
    bench_generate_turn,
    bench_apply_reverse,
    bench_full_turn_grid,
    bench_fingerprint,
);

criterion_main!(benches);
