use phf::phf_map;

use crate::items::hooks::ItemHooks;
use crate::items::implementations::*;

pub static ITEM_REGISTRY: phf::Map<&'static str, ItemHooks> = phf_map! {
    // =========================================================================
    // Attacker Items
    // =========================================================================
    "choiceband" => ItemHooks { on_modify_attack_being_used: Some(choice_band), ..ItemHooks::NONE },
    "choicespecs" => ItemHooks { on_modify_attack_being_used: Some(choice_specs), ..ItemHooks::NONE },
    "lifeorb" => ItemHooks { on_modify_attack_being_used: Some(life_orb), ..ItemHooks::NONE },
    "expertbelt" => ItemHooks { on_modify_attack_being_used: Some(expert_belt), ..ItemHooks::NONE },
    "muscleband" => ItemHooks { on_modify_attack_being_used: Some(muscle_band), ..ItemHooks::NONE },
    "wiseglasses" => ItemHooks { on_modify_attack_being_used: Some(wise_glasses), ..ItemHooks::NONE },
    "punchingglove" => ItemHooks { on_modify_attack_being_used: Some(punching_glove), ..ItemHooks::NONE },
    "widelens" => ItemHooks { on_modify_attack_being_used: Some(wide_lens), ..ItemHooks::NONE },

    // Type boosters
    "silkscarf" => ItemHooks { on_modify_attack_being_used: Some(silk_scarf), ..ItemHooks::NONE },
    "charcoal" => ItemHooks { on_modify_attack_being_used: Some(charcoal), ..ItemHooks::NONE },
    "mysticwater" => ItemHooks { on_modify_attack_being_used: Some(mystic_water), ..ItemHooks::NONE },
    "magnet" => ItemHooks { on_modify_attack_being_used: Some(magnet), ..ItemHooks::NONE },
    "miracleseed" => ItemHooks { on_modify_attack_being_used: Some(miracle_seed), ..ItemHooks::NONE },
    "nevermeltice" => ItemHooks { on_modify_attack_being_used: Some(never_melt_ice), ..ItemHooks::NONE },
    "blackbelt" => ItemHooks { on_modify_attack_being_used: Some(black_belt), ..ItemHooks::NONE },
    "poisonbarb" => ItemHooks { on_modify_attack_being_used: Some(poison_barb), ..ItemHooks::NONE },
    "softsand" => ItemHooks { on_modify_attack_being_used: Some(soft_sand), ..ItemHooks::NONE },
    "sharpbeak" => ItemHooks { on_modify_attack_being_used: Some(sharp_beak), ..ItemHooks::NONE },
    "twistedspoon" => ItemHooks { on_modify_attack_being_used: Some(twisted_spoon), ..ItemHooks::NONE },
    "silverpowder" => ItemHooks { on_modify_attack_being_used: Some(silver_powder), ..ItemHooks::NONE },
    "hardstone" => ItemHooks { on_modify_attack_being_used: Some(hard_stone), ..ItemHooks::NONE },
    "spelltag" => ItemHooks { on_modify_attack_being_used: Some(spell_tag), ..ItemHooks::NONE },
    "dragonfang" => ItemHooks { on_modify_attack_being_used: Some(dragon_fang), ..ItemHooks::NONE },
    "blackglasses" => ItemHooks { on_modify_attack_being_used: Some(black_glasses), ..ItemHooks::NONE },
    "metalcoat" => ItemHooks { on_modify_attack_being_used: Some(metal_coat), ..ItemHooks::NONE },
    "fairyfeather" => ItemHooks { on_modify_attack_being_used: Some(fairy_feather), ..ItemHooks::NONE },

    // =========================================================================
    // Defender Items
    // =========================================================================
    "assaultvest" => ItemHooks { on_modify_attack_against: Some(assault_vest), ..ItemHooks::NONE },
    "eviolite" => ItemHooks { on_modify_attack_against: Some(eviolite), ..ItemHooks::NONE },
    "airballoon" => ItemHooks { on_modify_attack_against: Some(air_balloon), ..ItemHooks::NONE },
    "safetygoggles" => ItemHooks { on_modify_attack_against: Some(safety_goggles), ..ItemHooks::NONE },

    // =========================================================================
    // Speed
    // =========================================================================
    "choicescarf" => ItemHooks { on_modify_speed: Some(choice_scarf), ..ItemHooks::NONE },
    "ironball" => ItemHooks { on_modify_speed: Some(iron_ball), ..ItemHooks::NONE },

    // =========================================================================
    // End of Turn
    // =========================================================================
    "leftovers" => ItemHooks { on_end_of_turn: Some(leftovers), ..ItemHooks::NONE },
    "blacksludge" => ItemHooks { on_end_of_turn: Some(black_sludge), ..ItemHooks::NONE },
    "flameorb" => ItemHooks { on_end_of_turn: Some(flame_orb), ..ItemHooks::NONE },
    "toxicorb" => ItemHooks { on_end_of_turn: Some(toxic_orb), ..ItemHooks::NONE },
};
