//! Move hook registry.
//!
//! Static registry mapping move ids to MoveHooks for conditional move logic.

use phf::phf_map;

use super::hooks::MoveHooks;
use super::implementations::*;

pub static MOVE_REGISTRY: phf::Map<&'static str, MoveHooks> = phf_map! {
    // =========================================================================
    // Conditional Base Power Moves (OnBasePowerCondition + multiplier)
    // =========================================================================

    // Knock Off: 1.5x if target has an item
    "knockoff" => MoveHooks {
        on_base_power_condition: Some(knockoff_condition),
        conditional_multiplier: 1.5,
        ..MoveHooks::NONE
    },
    "venoshock" => MoveHooks {
        on_base_power_condition: Some(venoshock_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    },
    "hex" => MoveHooks {
        on_base_power_condition: Some(hex_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    },
    "facade" => MoveHooks {
        on_base_power_condition: Some(facade_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    },
    "boltbeak" => MoveHooks {
        on_base_power_condition: Some(moves_first_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    },
    "fishiousrend" => MoveHooks {
        on_base_power_condition: Some(moves_first_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    },
    "acrobatics" => MoveHooks {
        on_base_power_condition: Some(acrobatics_condition),
        conditional_multiplier: 2.0,
        ..MoveHooks::NONE
    },

    // =========================================================================
    // Weather-dependent Moves
    // =========================================================================
    "weatherball" => MoveHooks { on_modify_move: Some(weather_ball), ..MoveHooks::NONE },
    "solarbeam" => MoveHooks { on_modify_move: Some(solar_beam), ..MoveHooks::NONE },
    "thunder" => MoveHooks { on_modify_move: Some(rain_accuracy), ..MoveHooks::NONE },
    "hurricane" => MoveHooks { on_modify_move: Some(rain_accuracy), ..MoveHooks::NONE },
    "blizzard" => MoveHooks { on_modify_move: Some(blizzard), ..MoveHooks::NONE },
    "synthesis" => MoveHooks { on_modify_move: Some(weather_heal), ..MoveHooks::NONE },
    "moonlight" => MoveHooks { on_modify_move: Some(weather_heal), ..MoveHooks::NONE },
    "morningsun" => MoveHooks { on_modify_move: Some(weather_heal), ..MoveHooks::NONE },
    "auroraveil" => MoveHooks { on_modify_move: Some(aurora_veil), ..MoveHooks::NONE },

    // =========================================================================
    // Variable Power Moves (Weight, HP, Speed, Boosts)
    // =========================================================================
    "eruption" => MoveHooks { on_modify_move: Some(hp_scaled_power), ..MoveHooks::NONE },
    "waterspout" => MoveHooks { on_modify_move: Some(hp_scaled_power), ..MoveHooks::NONE },
    "grassknot" => MoveHooks { on_modify_move: Some(target_weight_power), ..MoveHooks::NONE },
    "lowkick" => MoveHooks { on_modify_move: Some(target_weight_power), ..MoveHooks::NONE },
    "heavyslam" => MoveHooks { on_modify_move: Some(weight_ratio_power), ..MoveHooks::NONE },
    "gyroball" => MoveHooks { on_modify_move: Some(gyro_ball), ..MoveHooks::NONE },
    "electroball" => MoveHooks { on_modify_move: Some(electro_ball), ..MoveHooks::NONE },
    "storedpower" => MoveHooks { on_modify_move: Some(stored_power), ..MoveHooks::NONE },

    // =========================================================================
    // Moves That Fail in Context
    // =========================================================================
    "suckerpunch" => MoveHooks { on_modify_move: Some(sucker_punch), ..MoveHooks::NONE },
    "fakeout" => MoveHooks { on_modify_move: Some(first_turn_only), ..MoveHooks::NONE },
    "firstimpression" => MoveHooks { on_modify_move: Some(first_turn_only), ..MoveHooks::NONE },
    "poltergeist" => MoveHooks { on_modify_move: Some(poltergeist), ..MoveHooks::NONE },
    "bellydrum" => MoveHooks { on_modify_move: Some(belly_drum), ..MoveHooks::NONE },
};
