//! Ability hook registry.
//!
//! Static registry mapping normalized ability names to their hooks.

use phf::phf_map;

use crate::abilities::hooks::AbilityHooks;
use crate::abilities::implementations::{
    against, attacker, priority, residual, speed, stat_modifiers, switch,
};

pub static ABILITY_REGISTRY: phf::Map<&'static str, AbilityHooks> = phf_map! {
    // =========================================================================
    // Weather / Terrain Setters
    // =========================================================================
    "drizzle" => AbilityHooks { on_switch_in: Some(switch::drizzle), ..AbilityHooks::NONE },
    "drought" => AbilityHooks { on_switch_in: Some(switch::drought), ..AbilityHooks::NONE },
    "sandstream" => AbilityHooks { on_switch_in: Some(switch::sand_stream), ..AbilityHooks::NONE },
    "snowwarning" => AbilityHooks { on_switch_in: Some(switch::snow_warning), ..AbilityHooks::NONE },
    "primordialsea" => AbilityHooks { on_switch_in: Some(switch::primordial_sea), ..AbilityHooks::NONE },
    "desolateland" => AbilityHooks { on_switch_in: Some(switch::desolate_land), ..AbilityHooks::NONE },
    "electricsurge" => AbilityHooks { on_switch_in: Some(switch::electric_surge), ..AbilityHooks::NONE },
    "grassysurge" => AbilityHooks { on_switch_in: Some(switch::grassy_surge), ..AbilityHooks::NONE },
    "psychicsurge" => AbilityHooks { on_switch_in: Some(switch::psychic_surge), ..AbilityHooks::NONE },
    "mistysurge" => AbilityHooks { on_switch_in: Some(switch::misty_surge), ..AbilityHooks::NONE },

    // =========================================================================
    // Switch Effects
    // =========================================================================
    "intimidate" => AbilityHooks { on_switch_in: Some(switch::intimidate), ..AbilityHooks::NONE },
    "regenerator" => AbilityHooks { on_switch_out: Some(switch::regenerator), ..AbilityHooks::NONE },
    "naturalcure" => AbilityHooks { on_switch_out: Some(switch::natural_cure), ..AbilityHooks::NONE },

    // =========================================================================
    // Priority Modifiers
    // =========================================================================
    "prankster" => AbilityHooks {
        on_modify_priority: Some(priority::prankster),
        on_modify_attack_being_used: Some(attacker::prankster),
        ..AbilityHooks::NONE
    },
    "galewings" => AbilityHooks { on_modify_priority: Some(priority::gale_wings), ..AbilityHooks::NONE },
    "triage" => AbilityHooks { on_modify_priority: Some(priority::triage), ..AbilityHooks::NONE },

    // =========================================================================
    // Speed Modifiers
    // =========================================================================
    "swiftswim" => AbilityHooks { on_modify_speed: Some(speed::swift_swim), ..AbilityHooks::NONE },
    "chlorophyll" => AbilityHooks { on_modify_speed: Some(speed::chlorophyll), ..AbilityHooks::NONE },
    "sandrush" => AbilityHooks { on_modify_speed: Some(speed::sand_rush), ..AbilityHooks::NONE },
    "slushrush" => AbilityHooks { on_modify_speed: Some(speed::slush_rush), ..AbilityHooks::NONE },
    "surgesurfer" => AbilityHooks { on_modify_speed: Some(speed::surge_surfer), ..AbilityHooks::NONE },
    "quickfeet" => AbilityHooks { on_modify_speed: Some(speed::quick_feet), ..AbilityHooks::NONE },

    // =========================================================================
    // Stat Change Modifiers
    // =========================================================================
    "contrary" => AbilityHooks { on_stat_change: Some(stat_modifiers::contrary), ..AbilityHooks::NONE },
    "simple" => AbilityHooks { on_stat_change: Some(stat_modifiers::simple), ..AbilityHooks::NONE },

    // =========================================================================
    // Immunities (defender)
    // =========================================================================
    "levitate" => AbilityHooks { on_modify_attack_against: Some(against::levitate), ..AbilityHooks::NONE },
    "flashfire" => AbilityHooks { on_modify_attack_against: Some(against::flash_fire), ..AbilityHooks::NONE },
    "waterabsorb" => AbilityHooks { on_modify_attack_against: Some(against::water_absorb), ..AbilityHooks::NONE },
    "voltabsorb" => AbilityHooks { on_modify_attack_against: Some(against::volt_absorb), ..AbilityHooks::NONE },
    "eartheater" => AbilityHooks { on_modify_attack_against: Some(against::earth_eater), ..AbilityHooks::NONE },
    "dryskin" => AbilityHooks {
        on_modify_attack_against: Some(against::dry_skin),
        on_end_of_turn: Some(residual::dry_skin),
        ..AbilityHooks::NONE
    },
    "motordrive" => AbilityHooks { on_modify_attack_against: Some(against::motor_drive), ..AbilityHooks::NONE },
    "lightningrod" => AbilityHooks { on_modify_attack_against: Some(against::lightning_rod), ..AbilityHooks::NONE },
    "stormdrain" => AbilityHooks { on_modify_attack_against: Some(against::storm_drain), ..AbilityHooks::NONE },
    "sapsipper" => AbilityHooks { on_modify_attack_against: Some(against::sap_sipper), ..AbilityHooks::NONE },
    "wonderguard" => AbilityHooks { on_modify_attack_against: Some(against::wonder_guard), ..AbilityHooks::NONE },
    "bulletproof" => AbilityHooks { on_modify_attack_against: Some(against::bulletproof), ..AbilityHooks::NONE },
    "soundproof" => AbilityHooks { on_modify_attack_against: Some(against::soundproof), ..AbilityHooks::NONE },
    "goodasgold" => AbilityHooks { on_modify_attack_against: Some(against::good_as_gold), ..AbilityHooks::NONE },
    "dazzling" => AbilityHooks { on_modify_attack_against: Some(against::dazzling), ..AbilityHooks::NONE },
    "queenlymajesty" => AbilityHooks { on_modify_attack_against: Some(against::dazzling), ..AbilityHooks::NONE },
    "armortail" => AbilityHooks { on_modify_attack_against: Some(against::dazzling), ..AbilityHooks::NONE },

    // =========================================================================
    // Damage Reduction (defender)
    // =========================================================================
    "thickfat" => AbilityHooks { on_modify_attack_against: Some(against::thick_fat), ..AbilityHooks::NONE },
    "heatproof" => AbilityHooks { on_modify_attack_against: Some(against::heatproof), ..AbilityHooks::NONE },
    "fluffy" => AbilityHooks { on_modify_attack_against: Some(against::fluffy), ..AbilityHooks::NONE },
    "furcoat" => AbilityHooks { on_modify_attack_against: Some(against::fur_coat), ..AbilityHooks::NONE },
    "icescales" => AbilityHooks { on_modify_attack_against: Some(against::ice_scales), ..AbilityHooks::NONE },
    "purifyingsalt" => AbilityHooks { on_modify_attack_against: Some(against::purifying_salt), ..AbilityHooks::NONE },
    "multiscale" => AbilityHooks { on_modify_attack_against: Some(against::multiscale), ..AbilityHooks::NONE },
    "shadowshield" => AbilityHooks { on_modify_attack_against: Some(against::multiscale), ..AbilityHooks::NONE },
    "filter" => AbilityHooks { on_modify_attack_against: Some(against::filter), ..AbilityHooks::NONE },
    "solidrock" => AbilityHooks { on_modify_attack_against: Some(against::filter), ..AbilityHooks::NONE },
    "prismarmor" => AbilityHooks { on_modify_attack_against: Some(against::filter), ..AbilityHooks::NONE },

    // =========================================================================
    // Power Modifiers (attacker)
    // =========================================================================
    "technician" => AbilityHooks { on_modify_attack_being_used: Some(attacker::technician), ..AbilityHooks::NONE },
    "ironfist" => AbilityHooks { on_modify_attack_being_used: Some(attacker::iron_fist), ..AbilityHooks::NONE },
    "strongjaw" => AbilityHooks { on_modify_attack_being_used: Some(attacker::strong_jaw), ..AbilityHooks::NONE },
    "megalauncher" => AbilityHooks { on_modify_attack_being_used: Some(attacker::mega_launcher), ..AbilityHooks::NONE },
    "sharpness" => AbilityHooks { on_modify_attack_being_used: Some(attacker::sharpness), ..AbilityHooks::NONE },
    "toughclaws" => AbilityHooks { on_modify_attack_being_used: Some(attacker::tough_claws), ..AbilityHooks::NONE },
    "reckless" => AbilityHooks { on_modify_attack_being_used: Some(attacker::reckless), ..AbilityHooks::NONE },
    "sheerforce" => AbilityHooks { on_modify_attack_being_used: Some(attacker::sheer_force), ..AbilityHooks::NONE },
    "serenegrace" => AbilityHooks { on_modify_attack_being_used: Some(attacker::serene_grace), ..AbilityHooks::NONE },
    "adaptability" => AbilityHooks { on_modify_attack_being_used: Some(attacker::adaptability), ..AbilityHooks::NONE },
    "hugepower" => AbilityHooks { on_modify_attack_being_used: Some(attacker::huge_power), ..AbilityHooks::NONE },
    "purepower" => AbilityHooks { on_modify_attack_being_used: Some(attacker::huge_power), ..AbilityHooks::NONE },
    "hustle" => AbilityHooks { on_modify_attack_being_used: Some(attacker::hustle), ..AbilityHooks::NONE },
    "gorillatactics" => AbilityHooks { on_modify_attack_being_used: Some(attacker::gorilla_tactics), ..AbilityHooks::NONE },
    "guts" => AbilityHooks { on_modify_attack_being_used: Some(attacker::guts), ..AbilityHooks::NONE },
    "solarpower" => AbilityHooks {
        on_modify_attack_being_used: Some(attacker::solar_power),
        on_end_of_turn: Some(residual::solar_power),
        ..AbilityHooks::NONE
    },
    "compoundeyes" => AbilityHooks { on_modify_attack_being_used: Some(attacker::compound_eyes), ..AbilityHooks::NONE },
    "noguard" => AbilityHooks {
        on_modify_attack_being_used: Some(attacker::no_guard),
        on_modify_attack_against: Some(against::no_guard),
        ..AbilityHooks::NONE
    },
    "aerilate" => AbilityHooks { on_modify_attack_being_used: Some(attacker::aerilate), ..AbilityHooks::NONE },
    "pixilate" => AbilityHooks { on_modify_attack_being_used: Some(attacker::pixilate), ..AbilityHooks::NONE },
    "refrigerate" => AbilityHooks { on_modify_attack_being_used: Some(attacker::refrigerate), ..AbilityHooks::NONE },
    "galvanize" => AbilityHooks { on_modify_attack_being_used: Some(attacker::galvanize), ..AbilityHooks::NONE },
    "normalize" => AbilityHooks { on_modify_attack_being_used: Some(attacker::normalize), ..AbilityHooks::NONE },
    "tintedlens" => AbilityHooks { on_modify_attack_being_used: Some(attacker::tinted_lens), ..AbilityHooks::NONE },
    "analytic" => AbilityHooks { on_modify_attack_being_used: Some(attacker::analytic), ..AbilityHooks::NONE },
    "sandforce" => AbilityHooks { on_modify_attack_being_used: Some(attacker::sand_force), ..AbilityHooks::NONE },
    "blaze" => AbilityHooks { on_modify_attack_being_used: Some(attacker::blaze), ..AbilityHooks::NONE },
    "torrent" => AbilityHooks { on_modify_attack_being_used: Some(attacker::torrent), ..AbilityHooks::NONE },
    "overgrow" => AbilityHooks { on_modify_attack_being_used: Some(attacker::overgrow), ..AbilityHooks::NONE },
    "swarm" => AbilityHooks { on_modify_attack_being_used: Some(attacker::swarm), ..AbilityHooks::NONE },
    "steelworker" => AbilityHooks { on_modify_attack_being_used: Some(attacker::steelworker), ..AbilityHooks::NONE },
    "transistor" => AbilityHooks { on_modify_attack_being_used: Some(attacker::transistor), ..AbilityHooks::NONE },
    "dragonsmaw" => AbilityHooks { on_modify_attack_being_used: Some(attacker::dragons_maw), ..AbilityHooks::NONE },
    "punkrock" => AbilityHooks {
        on_modify_attack_being_used: Some(attacker::punk_rock),
        on_modify_attack_against: Some(against::punk_rock_defense),
        ..AbilityHooks::NONE
    },
    "waterbubble" => AbilityHooks {
        on_modify_attack_being_used: Some(attacker::water_bubble),
        on_modify_attack_against: Some(against::water_bubble_defense),
        ..AbilityHooks::NONE
    },

    // =========================================================================
    // End of Turn
    // =========================================================================
    "speedboost" => AbilityHooks { on_end_of_turn: Some(residual::speed_boost), ..AbilityHooks::NONE },
    "raindish" => AbilityHooks { on_end_of_turn: Some(residual::rain_dish), ..AbilityHooks::NONE },
    "icebody" => AbilityHooks { on_end_of_turn: Some(residual::ice_body), ..AbilityHooks::NONE },
};
