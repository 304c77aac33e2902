//! End-to-end search and decision tests.

mod common;

use common::builders::{one_on_one, pokemon, teams, with_stats};
use poke_search::search::{get_options, WON_BATTLE};
use poke_search::{
    decide, search, search_state, Action, DecisionStrategy, PayoffMatrix, SearchConfig, State, StateMutator,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// The user outspeeds and knocks out the opponent's last Pokémon with Tackle.
fn knockout_state() -> State {
    one_on_one(
        with_stats("snorlax", &["growl", "tackle"], [300, 999, 100, 100, 100, 200]),
        with_stats("snorlax", &["tackle"], [100, 100, 10, 100, 100, 100]),
    )
}

fn config(depth: u8, strategy: DecisionStrategy) -> SearchConfig {
    SearchConfig {
        depth,
        strategy,
        ..SearchConfig::default()
    }
}

#[test]
fn test_knockout_row_scores_as_a_win() {
    let mut state = knockout_state();
    let (user, opponent) = get_options(&state);
    let config = config(0, DecisionStrategy::Maximin);
    let mut mutator = StateMutator::new(&mut state);
    let matrix = search(&mut mutator, &user, &opponent, 0, false, &config).unwrap();

    let tackle = matrix.value_of(&Action::parse("tackle"), &Action::parse("tackle")).unwrap();
    let growl = matrix.value_of(&Action::parse("growl"), &Action::parse("tackle")).unwrap();
    assert!(tackle > WON_BATTLE / 2.0, "tackle scored {tackle}");
    assert!(tackle > growl);
}

#[test]
fn test_decides_to_take_the_knockout() {
    let mut rng = SmallRng::seed_from_u64(1);
    for depth in 0..=2 {
        let config = config(depth, DecisionStrategy::Maximin);
        let mut state = knockout_state();
        let original = state.clone();
        let matrix = search_state(&mut state, &config).unwrap();
        assert_eq!(state, original);
        assert_eq!(decide(&matrix, &config, &mut rng).unwrap(), Action::parse("tackle"));
    }
}

#[test]
fn test_winning_sooner_scores_higher() {
    let mut state = knockout_state();
    let shallow = search_state(&mut state, &config(0, DecisionStrategy::Maximin)).unwrap();
    let deep = search_state(&mut state, &config(2, DecisionStrategy::Maximin)).unwrap();
    let tackle = Action::parse("tackle");
    // The win is found on the first turn either way; more remaining depth
    // means a larger bonus.
    assert!(deep.value_of(&tackle, &tackle).unwrap() > shallow.value_of(&tackle, &tackle).unwrap());
}

#[test]
fn test_forced_switch_searches_switches_only() {
    let mut state = teams(
        vec![
            pokemon("garchomp", &["earthquake"]),
            pokemon("skarmory", &["bravebird"]),
            pokemon("blissey", &["seismictoss"]),
        ],
        vec![pokemon("heatran", &["flamethrower", "earthpower"])],
    );
    state.user.active.hp = 0.0;

    let config = config(1, DecisionStrategy::Maximin);
    let matrix = search_state(&mut state, &config).unwrap();
    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.opponent_options, vec![Action::None]);
    assert!(matrix.user_options.iter().all(Action::is_switch));

    let mut rng = SmallRng::seed_from_u64(7);
    assert!(decide(&matrix, &config, &mut rng).unwrap().is_switch());
}

#[test]
fn test_unpruned_search_fills_every_cell() {
    let mut state = teams(
        vec![
            pokemon("garchomp", &["earthquake", "swordsdance", "stoneedge"]),
            pokemon("skarmory", &["bravebird", "roost"]),
        ],
        vec![
            pokemon("heatran", &["flamethrower", "earthpower", "protect"]),
            pokemon("toxapex", &["scald", "recover"]),
        ],
    );
    let equilibrium = search_state(&mut state, &config(1, DecisionStrategy::Equilibrium)).unwrap();
    assert!(equilibrium.is_complete());
    assert_eq!(equilibrium.rows(), 4);
    assert_eq!(equilibrium.cols(), 4);

    let pruned = search_state(&mut state, &config(1, DecisionStrategy::Maximin)).unwrap();
    assert!((pruned.safest_value() - equilibrium.safest_value()).abs() < 1e-9);
}

#[test]
fn test_mean_over_sampled_opponents() {
    let user = || pokemon("garchomp", &["earthquake", "swordsdance"]);
    let mut bulky = one_on_one(user(), with_stats("heatran", &["flamethrower"], [400, 200, 300, 300, 300, 150]));
    let mut frail = one_on_one(user(), with_stats("heatran", &["flamethrower"], [250, 200, 150, 300, 150, 150]));

    let config = config(0, DecisionStrategy::Equilibrium);
    let a = search_state(&mut bulky, &config).unwrap();
    let b = search_state(&mut frail, &config).unwrap();
    let mean = PayoffMatrix::mean(&[a.clone(), b.clone()]).unwrap();

    for row in 0..mean.rows() {
        let expected = (a.get(row, 0).unwrap() + b.get(row, 0).unwrap()) / 2.0;
        assert!((mean.get(row, 0).unwrap() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_mean_over_different_opponent_movesets() {
    let user = || pokemon("garchomp", &["earthquake", "swordsdance"]);
    let mut special = one_on_one(user(), pokemon("heatran", &["flamethrower", "earthpower"]));
    let mut hazards = one_on_one(user(), pokemon("heatran", &["flamethrower", "stealthrock"]));

    let config = config(0, DecisionStrategy::Maximin);
    let a = search_state(&mut special, &config).unwrap();
    let b = search_state(&mut hazards, &config).unwrap();
    let mean = PayoffMatrix::mean(&[a.clone(), b.clone()]).unwrap();

    let labels: Vec<String> = mean.opponent_options.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["flamethrower", "earthpower", "stealthrock"]);
    assert!(mean.is_complete());

    let earthquake = Action::parse("earthquake");
    let shared = Action::parse("flamethrower");
    let only_a = Action::parse("earthpower");
    let expected_shared = (a.estimate(&earthquake, &shared).unwrap() + b.estimate(&earthquake, &shared).unwrap()) / 2.0;
    assert!((mean.value_of(&earthquake, &shared).unwrap() - expected_shared).abs() < 1e-9);

    // The state without Earth Power contributes its best known reply
    let row = b.user_options.iter().position(|o| *o == earthquake).unwrap();
    let expected_only_a = (a.value_of(&earthquake, &only_a).unwrap() + b.worst_case(row).unwrap()) / 2.0;
    assert!((mean.value_of(&earthquake, &only_a).unwrap() - expected_only_a).abs() < 1e-9);

    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(decide(&mean, &config, &mut rng).unwrap(), earthquake);
}
