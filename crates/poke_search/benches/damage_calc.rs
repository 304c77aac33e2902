//! Benchmarks for the damage calculation.
//!
//! Run with:
//!   cargo bench --package poke_search --bench damage_calc

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use poke_search::chain::{modify_move, MoveContext};
use poke_search::damage::{calculate_damage, DamageConditions};
use poke_search::moves::lookup_move;
use poke_search::{DamageRollMode, PokemonConfig, Side, SideRef, State};

/// Garchomp into Tyranitar, both with typical spreads.
fn setup_singles_battle() -> State {
    let attacker = PokemonConfig::new("garchomp")
        .level(50)
        .evs([0, 252, 0, 0, 4, 252])
        .moves(&["earthquake", "stoneedge", "dragonclaw", "flamethrower"])
        .build()
        .expect("garchomp exists");
    let defender = PokemonConfig::new("tyranitar")
        .level(50)
        .evs([252, 0, 128, 0, 128, 0])
        .build()
        .expect("tyranitar exists");
    State::new(Side::new(attacker, []), Side::new(defender, []))
}

fn bench_single_damage_calc(c: &mut Criterion) {
    let state = setup_singles_battle();
    let ctx = MoveContext::new(&state, SideRef::User, None, true);
    let earthquake = modify_move(lookup_move("earthquake"), &ctx);
    let conditions = DamageConditions::from_state(&state, SideRef::Opponent);

    let mut group = c.benchmark_group("damage_calc_single");
    for mode in [DamageRollMode::Average, DamageRollMode::MinMax, DamageRollMode::All] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{mode:?}")), &mode, |b, &mode| {
            b.iter(|| {
                calculate_damage(
                    black_box(&state.user.active),
                    black_box(&state.opponent.active),
                    black_box(&earthquake),
                    black_box(&conditions),
                    mode,
                )
            })
        });
    }
    group.finish();
}

fn bench_modifier_chain(c: &mut Criterion) {
    let state = setup_singles_battle();

    c.bench_function("modify_move_4moves", |b| {
        b.iter(|| {
            let ctx = MoveContext::new(black_box(&state), SideRef::User, None, true);
            for m in &state.user.active.moves {
                black_box(modify_move(lookup_move(&m.id), &ctx));
            }
        })
    });
}

fn bench_damage_calc_throughput(c: &mut Criterion) {
    let state = setup_singles_battle();
    let ctx = MoveContext::new(&state, SideRef::User, None, true);
    let earthquake = modify_move(lookup_move("earthquake"), &ctx);
    let conditions = DamageConditions::from_state(&state, SideRef::Opponent);

    let mut group = c.benchmark_group("damage_calc_throughput");
    for batch_size in [100u64, 1000, 10000] {
        group.throughput(Throughput::Elements(batch_size));
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &batch_size, |b, &size| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(calculate_damage(
                        &state.user.active,
                        &state.opponent.active,
                        &earthquake,
                        &conditions,
                        DamageRollMode::Average,
                    ));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_damage_calc,
    bench_modifier_chain,
    bench_damage_calc_throughput,
);

criterion_main!(benches);
