//! Static move table.
//!
//! Entries are keyed by normalized id (lowercase, alphanumerics only).
//! Anything not listed resolves to [`UNKNOWN_MOVE`], a zero-priority move
//! with no effects.

use phf::phf_map;

use super::{
    Boosts, EffectTarget, FixedDamage, HazardClear, Move, MoveCategory, MoveFlags, MoveTarget,
    Secondary, SecondaryEffect, SpecialEffect,
};
use crate::state::{SideCondition, Stat, Status, Terrain, Volatiles, Weather};
use crate::types::Type;

// Flag shorthands
const C: MoveFlags = MoveFlags::CONTACT.union(MoveFlags::PROTECT);
const P: MoveFlags = MoveFlags::PROTECT;
const CPUNCH: MoveFlags = C.union(MoveFlags::PUNCH);
const CBITE: MoveFlags = C.union(MoveFlags::BITE);
const CSLICE: MoveFlags = C.union(MoveFlags::SLICING);
const BULLET: MoveFlags = P.union(MoveFlags::BULLET);
const PULSE: MoveFlags = P.union(MoveFlags::PULSE);
const SOUND: MoveFlags = P.union(MoveFlags::SOUND).union(MoveFlags::BYPASS_SUBSTITUTE);
const HEAL: MoveFlags = MoveFlags::HEAL;
const POWDER: MoveFlags = P.union(MoveFlags::POWDER);

const fn status(chance: f64, status: Status) -> Option<Secondary> {
    Some(Secondary {
        chance,
        effect: SecondaryEffect::Status(status),
    })
}

const fn flinch(chance: f64) -> Option<Secondary> {
    Some(Secondary {
        chance,
        effect: SecondaryEffect::Volatile(Volatiles::FLINCH),
    })
}

const fn confuse(chance: f64) -> Option<Secondary> {
    Some(Secondary {
        chance,
        effect: SecondaryEffect::Volatile(Volatiles::CONFUSION),
    })
}

const fn lower(chance: f64, stat: Stat, amount: i8) -> Option<Secondary> {
    Some(Secondary {
        chance,
        effect: SecondaryEffect::Boosts(Boosts::NONE.with(stat, amount), EffectTarget::Target),
    })
}

const fn raise_self(chance: f64, stat: Stat, amount: i8) -> Option<Secondary> {
    Some(Secondary {
        chance,
        effect: SecondaryEffect::Boosts(Boosts::NONE.with(stat, amount), EffectTarget::User),
    })
}

/// Returned for ids missing from the table.
pub static UNKNOWN_MOVE: Move = Move {
    id: "unknown",
    name: "Unknown",
    ..Move::BASE
};

pub static MOVES: phf::Map<&'static str, Move> = phf_map! {
    // =========================================================================
    // Normal
    // =========================================================================
    "tackle" => Move { id: "tackle", name: "Tackle", category: MoveCategory::Physical,
        base_power: 40.0, accuracy: Some(100.0), pp: 35, flags: C, ..Move::BASE },
    "bodyslam" => Move { id: "bodyslam", name: "Body Slam", category: MoveCategory::Physical,
        base_power: 85.0, accuracy: Some(100.0), pp: 15, flags: C,
        secondary: status(30.0, Status::Paralysis), ..Move::BASE },
    "doubleedge" => Move { id: "doubleedge", name: "Double-Edge", category: MoveCategory::Physical,
        base_power: 120.0, accuracy: Some(100.0), pp: 15, flags: C, recoil: 0.33, ..Move::BASE },
    "return" => Move { id: "return", name: "Return", category: MoveCategory::Physical,
        base_power: 102.0, accuracy: Some(100.0), pp: 20, flags: C, ..Move::BASE },
    "facade" => Move { id: "facade", name: "Facade", category: MoveCategory::Physical,
        base_power: 70.0, accuracy: Some(100.0), pp: 20, flags: C, ..Move::BASE },
    "quickattack" => Move { id: "quickattack", name: "Quick Attack", category: MoveCategory::Physical,
        base_power: 40.0, accuracy: Some(100.0), pp: 30, priority: 1, flags: C, ..Move::BASE },
    "extremespeed" => Move { id: "extremespeed", name: "Extreme Speed", category: MoveCategory::Physical,
        base_power: 80.0, accuracy: Some(100.0), pp: 5, priority: 2, flags: C, ..Move::BASE },
    "fakeout" => Move { id: "fakeout", name: "Fake Out", category: MoveCategory::Physical,
        base_power: 40.0, accuracy: Some(100.0), pp: 10, priority: 3,
        flags: C.union(MoveFlags::FIRST_TURN_ONLY), secondary: flinch(100.0), ..Move::BASE },
    "explosion" => Move { id: "explosion", name: "Explosion", category: MoveCategory::Physical,
        base_power: 250.0, accuracy: Some(100.0), pp: 5, flags: P, heal: -1.0, ..Move::BASE },
    "rapidspin" => Move { id: "rapidspin", name: "Rapid Spin", category: MoveCategory::Physical,
        base_power: 50.0, accuracy: Some(100.0), pp: 40, flags: C,
        self_boosts: Boosts::NONE.with(Stat::Speed, 1), hazard_clear: Some(HazardClear::RapidSpin),
        ..Move::BASE },
    "hypervoice" => Move { id: "hypervoice", name: "Hyper Voice", category: MoveCategory::Special,
        base_power: 90.0, accuracy: Some(100.0), pp: 10, flags: SOUND, ..Move::BASE },
    "boomburst" => Move { id: "boomburst", name: "Boomburst", category: MoveCategory::Special,
        base_power: 140.0, accuracy: Some(100.0), pp: 10, flags: SOUND, ..Move::BASE },
    "superfang" => Move { id: "superfang", name: "Super Fang", category: MoveCategory::Physical,
        accuracy: Some(90.0), pp: 10, flags: C, fixed_damage: Some(FixedDamage::HalfTargetHp),
        ..Move::BASE },
    "endeavor" => Move { id: "endeavor", name: "Endeavor", category: MoveCategory::Physical,
        accuracy: Some(100.0), pp: 5, flags: C, fixed_damage: Some(FixedDamage::TargetHpMinusUserHp),
        ..Move::BASE },
    "sonicboom" => Move { id: "sonicboom", name: "Sonic Boom", category: MoveCategory::Special,
        accuracy: Some(90.0), pp: 20, flags: P, fixed_damage: Some(FixedDamage::Constant(20.0)),
        ..Move::BASE },
    "weatherball" => Move { id: "weatherball", name: "Weather Ball", category: MoveCategory::Special,
        base_power: 50.0, accuracy: Some(100.0), pp: 10, flags: BULLET, ..Move::BASE },
    "swordsdance" => Move { id: "swordsdance", name: "Swords Dance", pp: 20, target: MoveTarget::User,
        boosts: Boosts::NONE.with(Stat::Attack, 2), ..Move::BASE },
    "growl" => Move { id: "growl", name: "Growl", accuracy: Some(100.0), pp: 40, flags: SOUND,
        boosts: Boosts::NONE.with(Stat::Attack, -1), ..Move::BASE },
    "protect" => Move { id: "protect", name: "Protect", pp: 10, priority: 4, target: MoveTarget::User,
        flags: MoveFlags::PROTECTION, volatile_status: Some(Volatiles::PROTECT), ..Move::BASE },
    "substitute" => Move { id: "substitute", name: "Substitute", pp: 10, target: MoveTarget::User,
        volatile_status: Some(Volatiles::SUBSTITUTE), ..Move::BASE },
    "recover" => Move { id: "recover", name: "Recover", pp: 5, target: MoveTarget::User, flags: HEAL,
        heal: 0.5, ..Move::BASE },
    "softboiled" => Move { id: "softboiled", name: "Soft-Boiled", pp: 5, target: MoveTarget::User,
        flags: HEAL, heal: 0.5, ..Move::BASE },
    "slackoff" => Move { id: "slackoff", name: "Slack Off", pp: 5, target: MoveTarget::User,
        flags: HEAL, heal: 0.5, ..Move::BASE },
    "morningsun" => Move { id: "morningsun", name: "Morning Sun", pp: 5, target: MoveTarget::User,
        flags: HEAL, heal: 0.5, ..Move::BASE },
    "wish" => Move { id: "wish", name: "Wish", pp: 10, target: MoveTarget::User, flags: HEAL,
        special: Some(SpecialEffect::Wish), ..Move::BASE },
    "roar" => Move { id: "roar", name: "Roar", pp: 20, priority: -6,
        flags: MoveFlags::SOUND.union(MoveFlags::BYPASS_SUBSTITUTE), force_switch: true, ..Move::BASE },
    "whirlwind" => Move { id: "whirlwind", name: "Whirlwind", pp: 20, priority: -6,
        flags: MoveFlags::BYPASS_SUBSTITUTE.union(MoveFlags::WIND), force_switch: true, ..Move::BASE },
    "shellsmash" => Move { id: "shellsmash", name: "Shell Smash", pp: 15, target: MoveTarget::User,
        boosts: Boosts::NONE.with(Stat::Attack, 2).with(Stat::SpecialAttack, 2).with(Stat::Speed, 2)
            .with(Stat::Defense, -1).with(Stat::SpecialDefense, -1),
        ..Move::BASE },
    "bellydrum" => Move { id: "bellydrum", name: "Belly Drum", pp: 10, target: MoveTarget::User,
        heal: -0.5, self_boosts: Boosts::NONE.with(Stat::Attack, 12), ..Move::BASE },
    "courtchange" => Move { id: "courtchange", name: "Court Change", accuracy: Some(100.0), pp: 10,
        hazard_clear: Some(HazardClear::CourtChange), ..Move::BASE },
    "struggle" => Move { id: "struggle", name: "Struggle", move_type: Type::Typeless,
        category: MoveCategory::Physical, base_power: 50.0, pp: 1, flags: C, heal: -0.25,
        ..Move::BASE },

    // =========================================================================
    // Fire
    // =========================================================================
    "flamethrower" => Move { id: "flamethrower", name: "Flamethrower", move_type: Type::Fire,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 15, flags: P,
        secondary: status(10.0, Status::Burn), ..Move::BASE },
    "fireblast" => Move { id: "fireblast", name: "Fire Blast", move_type: Type::Fire,
        category: MoveCategory::Special, base_power: 110.0, accuracy: Some(85.0), pp: 5, flags: P,
        secondary: status(10.0, Status::Burn), ..Move::BASE },
    "flareblitz" => Move { id: "flareblitz", name: "Flare Blitz", move_type: Type::Fire,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(100.0), pp: 15,
        flags: C.union(MoveFlags::DEFROST), recoil: 0.33, secondary: status(10.0, Status::Burn),
        ..Move::BASE },
    "firepunch" => Move { id: "firepunch", name: "Fire Punch", move_type: Type::Fire,
        category: MoveCategory::Physical, base_power: 75.0, accuracy: Some(100.0), pp: 15,
        flags: CPUNCH, secondary: status(10.0, Status::Burn), ..Move::BASE },
    "overheat" => Move { id: "overheat", name: "Overheat", move_type: Type::Fire,
        category: MoveCategory::Special, base_power: 130.0, accuracy: Some(90.0), pp: 5, flags: P,
        self_boosts: Boosts::NONE.with(Stat::SpecialAttack, -2), ..Move::BASE },
    "eruption" => Move { id: "eruption", name: "Eruption", move_type: Type::Fire,
        category: MoveCategory::Special, base_power: 150.0, accuracy: Some(100.0), pp: 5, flags: P,
        ..Move::BASE },
    "willowisp" => Move { id: "willowisp", name: "Will-O-Wisp", move_type: Type::Fire,
        accuracy: Some(85.0), pp: 15, flags: P, status: Some(Status::Burn), ..Move::BASE },
    "sunnyday" => Move { id: "sunnyday", name: "Sunny Day", move_type: Type::Fire, pp: 5,
        target: MoveTarget::User, weather: Some(Weather::Sun), ..Move::BASE },

    // =========================================================================
    // Water
    // =========================================================================
    "surf" => Move { id: "surf", name: "Surf", move_type: Type::Water, category: MoveCategory::Special,
        base_power: 90.0, accuracy: Some(100.0), pp: 15, flags: P, ..Move::BASE },
    "hydropump" => Move { id: "hydropump", name: "Hydro Pump", move_type: Type::Water,
        category: MoveCategory::Special, base_power: 110.0, accuracy: Some(80.0), pp: 5, flags: P,
        ..Move::BASE },
    "scald" => Move { id: "scald", name: "Scald", move_type: Type::Water, category: MoveCategory::Special,
        base_power: 80.0, accuracy: Some(100.0), pp: 15, flags: P.union(MoveFlags::DEFROST),
        secondary: status(30.0, Status::Burn), ..Move::BASE },
    "waterfall" => Move { id: "waterfall", name: "Waterfall", move_type: Type::Water,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 15, flags: C,
        secondary: flinch(20.0), ..Move::BASE },
    "aquajet" => Move { id: "aquajet", name: "Aqua Jet", move_type: Type::Water,
        category: MoveCategory::Physical, base_power: 40.0, accuracy: Some(100.0), pp: 20,
        priority: 1, flags: C, ..Move::BASE },
    "liquidation" => Move { id: "liquidation", name: "Liquidation", move_type: Type::Water,
        category: MoveCategory::Physical, base_power: 85.0, accuracy: Some(100.0), pp: 10, flags: C,
        secondary: lower(20.0, Stat::Defense, -1), ..Move::BASE },
    "flipturn" => Move { id: "flipturn", name: "Flip Turn", move_type: Type::Water,
        category: MoveCategory::Physical, base_power: 60.0, accuracy: Some(100.0), pp: 20, flags: C,
        self_switch: true, ..Move::BASE },
    "fishiousrend" => Move { id: "fishiousrend", name: "Fishious Rend", move_type: Type::Water,
        category: MoveCategory::Physical, base_power: 85.0, accuracy: Some(100.0), pp: 10,
        flags: CBITE, ..Move::BASE },
    "waterspout" => Move { id: "waterspout", name: "Water Spout", move_type: Type::Water,
        category: MoveCategory::Special, base_power: 150.0, accuracy: Some(100.0), pp: 5, flags: P,
        ..Move::BASE },
    "raindance" => Move { id: "raindance", name: "Rain Dance", move_type: Type::Water, pp: 5,
        target: MoveTarget::User, weather: Some(Weather::Rain), ..Move::BASE },
    "aquaring" => Move { id: "aquaring", name: "Aqua Ring", move_type: Type::Water, pp: 20,
        target: MoveTarget::User, volatile_status: Some(Volatiles::AQUA_RING), ..Move::BASE },

    // =========================================================================
    // Electric
    // =========================================================================
    "thunderbolt" => Move { id: "thunderbolt", name: "Thunderbolt", move_type: Type::Electric,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 15, flags: P,
        secondary: status(10.0, Status::Paralysis), ..Move::BASE },
    "thunder" => Move { id: "thunder", name: "Thunder", move_type: Type::Electric,
        category: MoveCategory::Special, base_power: 110.0, accuracy: Some(70.0), pp: 10, flags: P,
        secondary: status(30.0, Status::Paralysis), ..Move::BASE },
    "voltswitch" => Move { id: "voltswitch", name: "Volt Switch", move_type: Type::Electric,
        category: MoveCategory::Special, base_power: 70.0, accuracy: Some(100.0), pp: 20, flags: P,
        self_switch: true, ..Move::BASE },
    "wildcharge" => Move { id: "wildcharge", name: "Wild Charge", move_type: Type::Electric,
        category: MoveCategory::Physical, base_power: 90.0, accuracy: Some(100.0), pp: 15, flags: C,
        recoil: 0.25, ..Move::BASE },
    "thunderpunch" => Move { id: "thunderpunch", name: "Thunder Punch", move_type: Type::Electric,
        category: MoveCategory::Physical, base_power: 75.0, accuracy: Some(100.0), pp: 15,
        flags: CPUNCH, secondary: status(10.0, Status::Paralysis), ..Move::BASE },
    "boltbeak" => Move { id: "boltbeak", name: "Bolt Beak", move_type: Type::Electric,
        category: MoveCategory::Physical, base_power: 85.0, accuracy: Some(100.0), pp: 10, flags: C,
        ..Move::BASE },
    "electroball" => Move { id: "electroball", name: "Electro Ball", move_type: Type::Electric,
        category: MoveCategory::Special, base_power: 60.0, accuracy: Some(100.0), pp: 10,
        flags: BULLET, ..Move::BASE },
    "thunderwave" => Move { id: "thunderwave", name: "Thunder Wave", move_type: Type::Electric,
        accuracy: Some(90.0), pp: 20, flags: P, status: Some(Status::Paralysis), ..Move::BASE },
    "magnetrise" => Move { id: "magnetrise", name: "Magnet Rise", move_type: Type::Electric, pp: 10,
        target: MoveTarget::User, volatile_status: Some(Volatiles::MAGNET_RISE), ..Move::BASE },

    // =========================================================================
    // Grass
    // =========================================================================
    "gigadrain" => Move { id: "gigadrain", name: "Giga Drain", move_type: Type::Grass,
        category: MoveCategory::Special, base_power: 75.0, accuracy: Some(100.0), pp: 10,
        flags: P.union(HEAL), drain: 0.5, ..Move::BASE },
    "leafstorm" => Move { id: "leafstorm", name: "Leaf Storm", move_type: Type::Grass,
        category: MoveCategory::Special, base_power: 130.0, accuracy: Some(90.0), pp: 5, flags: P,
        self_boosts: Boosts::NONE.with(Stat::SpecialAttack, -2), ..Move::BASE },
    "energyball" => Move { id: "energyball", name: "Energy Ball", move_type: Type::Grass,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 10,
        flags: BULLET, secondary: lower(10.0, Stat::SpecialDefense, -1), ..Move::BASE },
    "woodhammer" => Move { id: "woodhammer", name: "Wood Hammer", move_type: Type::Grass,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(100.0), pp: 15, flags: C,
        recoil: 0.33, ..Move::BASE },
    "powerwhip" => Move { id: "powerwhip", name: "Power Whip", move_type: Type::Grass,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(85.0), pp: 10, flags: C,
        ..Move::BASE },
    "seedbomb" => Move { id: "seedbomb", name: "Seed Bomb", move_type: Type::Grass,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 15,
        flags: BULLET, ..Move::BASE },
    "grassknot" => Move { id: "grassknot", name: "Grass Knot", move_type: Type::Grass,
        category: MoveCategory::Special, base_power: 1.0, accuracy: Some(100.0), pp: 20, flags: C,
        ..Move::BASE },
    "solarbeam" => Move { id: "solarbeam", name: "Solar Beam", move_type: Type::Grass,
        category: MoveCategory::Special, base_power: 120.0, accuracy: Some(100.0), pp: 10, flags: P,
        ..Move::BASE },
    "flowertrick" => Move { id: "flowertrick", name: "Flower Trick", move_type: Type::Grass,
        category: MoveCategory::Physical, base_power: 70.0, pp: 10,
        flags: P.union(MoveFlags::WILL_CRIT), ..Move::BASE },
    "spore" => Move { id: "spore", name: "Spore", move_type: Type::Grass, accuracy: Some(100.0),
        pp: 15, flags: POWDER, status: Some(Status::Sleep), ..Move::BASE },
    "sleeppowder" => Move { id: "sleeppowder", name: "Sleep Powder", move_type: Type::Grass,
        accuracy: Some(75.0), pp: 15, flags: POWDER, status: Some(Status::Sleep), ..Move::BASE },
    "leechseed" => Move { id: "leechseed", name: "Leech Seed", move_type: Type::Grass,
        accuracy: Some(90.0), pp: 10, flags: P, volatile_status: Some(Volatiles::LEECH_SEED),
        ..Move::BASE },
    "synthesis" => Move { id: "synthesis", name: "Synthesis", move_type: Type::Grass, pp: 5,
        target: MoveTarget::User, flags: HEAL, heal: 0.5, ..Move::BASE },
    "ingrain" => Move { id: "ingrain", name: "Ingrain", move_type: Type::Grass, pp: 20,
        target: MoveTarget::User, volatile_status: Some(Volatiles::INGRAIN), ..Move::BASE },

    // =========================================================================
    // Ice
    // =========================================================================
    "icebeam" => Move { id: "icebeam", name: "Ice Beam", move_type: Type::Ice,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 10, flags: P,
        secondary: status(10.0, Status::Freeze), ..Move::BASE },
    "blizzard" => Move { id: "blizzard", name: "Blizzard", move_type: Type::Ice,
        category: MoveCategory::Special, base_power: 110.0, accuracy: Some(70.0), pp: 5,
        flags: P.union(MoveFlags::WIND), secondary: status(10.0, Status::Freeze), ..Move::BASE },
    "freezedry" => Move { id: "freezedry", name: "Freeze-Dry", move_type: Type::Ice,
        category: MoveCategory::Special, base_power: 70.0, accuracy: Some(100.0), pp: 20, flags: P,
        secondary: status(10.0, Status::Freeze), ..Move::BASE },
    "iciclecrash" => Move { id: "iciclecrash", name: "Icicle Crash", move_type: Type::Ice,
        category: MoveCategory::Physical, base_power: 85.0, accuracy: Some(90.0), pp: 10, flags: P,
        secondary: flinch(30.0), ..Move::BASE },
    "iceshard" => Move { id: "iceshard", name: "Ice Shard", move_type: Type::Ice,
        category: MoveCategory::Physical, base_power: 40.0, accuracy: Some(100.0), pp: 30,
        priority: 1, flags: P, ..Move::BASE },
    "icepunch" => Move { id: "icepunch", name: "Ice Punch", move_type: Type::Ice,
        category: MoveCategory::Physical, base_power: 75.0, accuracy: Some(100.0), pp: 15,
        flags: CPUNCH, secondary: status(10.0, Status::Freeze), ..Move::BASE },
    "haze" => Move { id: "haze", name: "Haze", move_type: Type::Ice, pp: 30, target: MoveTarget::User,
        flags: MoveFlags::BYPASS_SUBSTITUTE, special: Some(SpecialEffect::Haze), ..Move::BASE },
    "auroraveil" => Move { id: "auroraveil", name: "Aurora Veil", move_type: Type::Ice, pp: 20,
        target: MoveTarget::User, side_condition: Some(SideCondition::AuroraVeil), ..Move::BASE },
    "snowscape" => Move { id: "snowscape", name: "Snowscape", move_type: Type::Ice, pp: 10,
        target: MoveTarget::User, weather: Some(Weather::Snow), ..Move::BASE },

    // =========================================================================
    // Fighting
    // =========================================================================
    "closecombat" => Move { id: "closecombat", name: "Close Combat", move_type: Type::Fighting,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(100.0), pp: 5, flags: C,
        self_boosts: Boosts::NONE.with(Stat::Defense, -1).with(Stat::SpecialDefense, -1),
        ..Move::BASE },
    "superpower" => Move { id: "superpower", name: "Superpower", move_type: Type::Fighting,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(100.0), pp: 5, flags: C,
        self_boosts: Boosts::NONE.with(Stat::Attack, -1).with(Stat::Defense, -1), ..Move::BASE },
    "drainpunch" => Move { id: "drainpunch", name: "Drain Punch", move_type: Type::Fighting,
        category: MoveCategory::Physical, base_power: 75.0, accuracy: Some(100.0), pp: 10,
        flags: CPUNCH.union(HEAL), drain: 0.5, ..Move::BASE },
    "machpunch" => Move { id: "machpunch", name: "Mach Punch", move_type: Type::Fighting,
        category: MoveCategory::Physical, base_power: 40.0, accuracy: Some(100.0), pp: 30,
        priority: 1, flags: CPUNCH, ..Move::BASE },
    "highjumpkick" => Move { id: "highjumpkick", name: "High Jump Kick", move_type: Type::Fighting,
        category: MoveCategory::Physical, base_power: 130.0, accuracy: Some(90.0), pp: 10, flags: C,
        crash: 0.5, ..Move::BASE },
    "focusblast" => Move { id: "focusblast", name: "Focus Blast", move_type: Type::Fighting,
        category: MoveCategory::Special, base_power: 120.0, accuracy: Some(70.0), pp: 5,
        flags: BULLET, secondary: lower(10.0, Stat::SpecialDefense, -1), ..Move::BASE },
    "aurasphere" => Move { id: "aurasphere", name: "Aura Sphere", move_type: Type::Fighting,
        category: MoveCategory::Special, base_power: 80.0, pp: 20, flags: PULSE.union(MoveFlags::BULLET),
        ..Move::BASE },
    "bodypress" => Move { id: "bodypress", name: "Body Press", move_type: Type::Fighting,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 10,
        flags: C.union(MoveFlags::USES_DEFENSE_AS_ATTACK), ..Move::BASE },
    "seismictoss" => Move { id: "seismictoss", name: "Seismic Toss", move_type: Type::Fighting,
        category: MoveCategory::Physical, accuracy: Some(100.0), pp: 20, flags: C,
        fixed_damage: Some(FixedDamage::Level), ..Move::BASE },
    "lowkick" => Move { id: "lowkick", name: "Low Kick", move_type: Type::Fighting,
        category: MoveCategory::Physical, base_power: 1.0, accuracy: Some(100.0), pp: 20, flags: C,
        ..Move::BASE },
    "finalgambit" => Move { id: "finalgambit", name: "Final Gambit", move_type: Type::Fighting,
        category: MoveCategory::Special, accuracy: Some(100.0), pp: 5, flags: P,
        fixed_damage: Some(FixedDamage::UserHp), heal: -1.0, ..Move::BASE },
    "bulkup" => Move { id: "bulkup", name: "Bulk Up", move_type: Type::Fighting, pp: 20,
        target: MoveTarget::User, boosts: Boosts::NONE.with(Stat::Attack, 1).with(Stat::Defense, 1),
        ..Move::BASE },

    // =========================================================================
    // Poison
    // =========================================================================
    "sludgebomb" => Move { id: "sludgebomb", name: "Sludge Bomb", move_type: Type::Poison,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 10,
        flags: BULLET, secondary: status(30.0, Status::Poison), ..Move::BASE },
    "gunkshot" => Move { id: "gunkshot", name: "Gunk Shot", move_type: Type::Poison,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(80.0), pp: 5, flags: P,
        secondary: status(30.0, Status::Poison), ..Move::BASE },
    "poisonjab" => Move { id: "poisonjab", name: "Poison Jab", move_type: Type::Poison,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 20, flags: C,
        secondary: status(30.0, Status::Poison), ..Move::BASE },
    "venoshock" => Move { id: "venoshock", name: "Venoshock", move_type: Type::Poison,
        category: MoveCategory::Special, base_power: 65.0, accuracy: Some(100.0), pp: 10, flags: P,
        ..Move::BASE },
    "toxic" => Move { id: "toxic", name: "Toxic", move_type: Type::Poison, accuracy: Some(90.0),
        pp: 10, flags: P, status: Some(Status::Toxic), ..Move::BASE },
    "toxicspikes" => Move { id: "toxicspikes", name: "Toxic Spikes", move_type: Type::Poison, pp: 20,
        side_condition: Some(SideCondition::ToxicSpikes), ..Move::BASE },

    // =========================================================================
    // Ground
    // =========================================================================
    "earthquake" => Move { id: "earthquake", name: "Earthquake", move_type: Type::Ground,
        category: MoveCategory::Physical, base_power: 100.0, accuracy: Some(100.0), pp: 10, flags: P,
        ..Move::BASE },
    "earthpower" => Move { id: "earthpower", name: "Earth Power", move_type: Type::Ground,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 10, flags: P,
        secondary: lower(10.0, Stat::SpecialDefense, -1), ..Move::BASE },
    "highhorsepower" => Move { id: "highhorsepower", name: "High Horsepower", move_type: Type::Ground,
        category: MoveCategory::Physical, base_power: 95.0, accuracy: Some(95.0), pp: 10, flags: C,
        ..Move::BASE },
    "spikes" => Move { id: "spikes", name: "Spikes", move_type: Type::Ground, pp: 20,
        side_condition: Some(SideCondition::Spikes), ..Move::BASE },
    "sandstorm" => Move { id: "sandstorm", name: "Sandstorm", move_type: Type::Rock, pp: 10,
        target: MoveTarget::User, flags: MoveFlags::WIND, weather: Some(Weather::Sand), ..Move::BASE },

    // =========================================================================
    // Flying
    // =========================================================================
    "bravebird" => Move { id: "bravebird", name: "Brave Bird", move_type: Type::Flying,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(100.0), pp: 15, flags: C,
        recoil: 0.33, ..Move::BASE },
    "hurricane" => Move { id: "hurricane", name: "Hurricane", move_type: Type::Flying,
        category: MoveCategory::Special, base_power: 110.0, accuracy: Some(70.0), pp: 10,
        flags: P.union(MoveFlags::WIND), secondary: confuse(30.0), ..Move::BASE },
    "airslash" => Move { id: "airslash", name: "Air Slash", move_type: Type::Flying,
        category: MoveCategory::Special, base_power: 75.0, accuracy: Some(95.0), pp: 15,
        flags: P.union(MoveFlags::SLICING), secondary: flinch(30.0), ..Move::BASE },
    "acrobatics" => Move { id: "acrobatics", name: "Acrobatics", move_type: Type::Flying,
        category: MoveCategory::Physical, base_power: 55.0, accuracy: Some(100.0), pp: 15, flags: C,
        ..Move::BASE },
    "roost" => Move { id: "roost", name: "Roost", move_type: Type::Flying, pp: 5,
        target: MoveTarget::User, flags: HEAL, heal: 0.5, ..Move::BASE },
    "defog" => Move { id: "defog", name: "Defog", move_type: Type::Flying, pp: 15,
        flags: MoveFlags::BYPASS_SUBSTITUTE, boosts: Boosts::NONE.with(Stat::Evasion, -1),
        hazard_clear: Some(HazardClear::Defog), ..Move::BASE },
    "tailwind" => Move { id: "tailwind", name: "Tailwind", move_type: Type::Flying, pp: 15,
        target: MoveTarget::User, flags: MoveFlags::WIND, side_condition: Some(SideCondition::Tailwind),
        ..Move::BASE },

    // =========================================================================
    // Psychic
    // =========================================================================
    "psychic" => Move { id: "psychic", name: "Psychic", move_type: Type::Psychic,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 10, flags: P,
        secondary: lower(10.0, Stat::SpecialDefense, -1), ..Move::BASE },
    "psyshock" => Move { id: "psyshock", name: "Psyshock", move_type: Type::Psychic,
        category: MoveCategory::Special, base_power: 80.0, accuracy: Some(100.0), pp: 10,
        flags: P.union(MoveFlags::TARGETS_PHYSICAL_DEFENSE), ..Move::BASE },
    "zenheadbutt" => Move { id: "zenheadbutt", name: "Zen Headbutt", move_type: Type::Psychic,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(90.0), pp: 15, flags: C,
        secondary: flinch(20.0), ..Move::BASE },
    "storedpower" => Move { id: "storedpower", name: "Stored Power", move_type: Type::Psychic,
        category: MoveCategory::Special, base_power: 20.0, accuracy: Some(100.0), pp: 10, flags: P,
        ..Move::BASE },
    "futuresight" => Move { id: "futuresight", name: "Future Sight", move_type: Type::Psychic,
        category: MoveCategory::Special, base_power: 120.0, accuracy: Some(100.0), pp: 10,
        special: Some(SpecialEffect::FutureSight), ..Move::BASE },
    "calmmind" => Move { id: "calmmind", name: "Calm Mind", move_type: Type::Psychic, pp: 20,
        target: MoveTarget::User,
        boosts: Boosts::NONE.with(Stat::SpecialAttack, 1).with(Stat::SpecialDefense, 1),
        ..Move::BASE },
    "agility" => Move { id: "agility", name: "Agility", move_type: Type::Psychic, pp: 30,
        target: MoveTarget::User, boosts: Boosts::NONE.with(Stat::Speed, 2), ..Move::BASE },
    "reflect" => Move { id: "reflect", name: "Reflect", move_type: Type::Psychic, pp: 20,
        target: MoveTarget::User, side_condition: Some(SideCondition::Reflect), ..Move::BASE },
    "lightscreen" => Move { id: "lightscreen", name: "Light Screen", move_type: Type::Psychic, pp: 30,
        target: MoveTarget::User, side_condition: Some(SideCondition::LightScreen), ..Move::BASE },
    "trickroom" => Move { id: "trickroom", name: "Trick Room", move_type: Type::Psychic, pp: 5,
        priority: -7, target: MoveTarget::User, special: Some(SpecialEffect::TrickRoom), ..Move::BASE },
    "rest" => Move { id: "rest", name: "Rest", move_type: Type::Psychic, pp: 5,
        target: MoveTarget::User, flags: HEAL, special: Some(SpecialEffect::Rest), ..Move::BASE },
    "teleport" => Move { id: "teleport", name: "Teleport", move_type: Type::Psychic, pp: 20,
        priority: -6, target: MoveTarget::User, self_switch: true, ..Move::BASE },
    "psychicterrain" => Move { id: "psychicterrain", name: "Psychic Terrain", move_type: Type::Psychic,
        pp: 10, target: MoveTarget::User, terrain: Some(Terrain::Psychic), ..Move::BASE },

    // =========================================================================
    // Bug
    // =========================================================================
    "uturn" => Move { id: "uturn", name: "U-turn", move_type: Type::Bug,
        category: MoveCategory::Physical, base_power: 70.0, accuracy: Some(100.0), pp: 20, flags: C,
        self_switch: true, ..Move::BASE },
    "xscissor" => Move { id: "xscissor", name: "X-Scissor", move_type: Type::Bug,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 15,
        flags: CSLICE, ..Move::BASE },
    "bugbuzz" => Move { id: "bugbuzz", name: "Bug Buzz", move_type: Type::Bug,
        category: MoveCategory::Special, base_power: 90.0, accuracy: Some(100.0), pp: 10, flags: SOUND,
        secondary: lower(10.0, Stat::SpecialDefense, -1), ..Move::BASE },
    "firstimpression" => Move { id: "firstimpression", name: "First Impression", move_type: Type::Bug,
        category: MoveCategory::Physical, base_power: 90.0, accuracy: Some(100.0), pp: 10, priority: 2,
        flags: C.union(MoveFlags::FIRST_TURN_ONLY), ..Move::BASE },
    "leechlife" => Move { id: "leechlife", name: "Leech Life", move_type: Type::Bug,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 10,
        flags: C.union(HEAL), drain: 0.5, ..Move::BASE },
    "stickyweb" => Move { id: "stickyweb", name: "Sticky Web", move_type: Type::Bug, pp: 20,
        side_condition: Some(SideCondition::StickyWeb), ..Move::BASE },
    "quiverdance" => Move { id: "quiverdance", name: "Quiver Dance", move_type: Type::Bug, pp: 20,
        target: MoveTarget::User,
        boosts: Boosts::NONE.with(Stat::SpecialAttack, 1).with(Stat::SpecialDefense, 1)
            .with(Stat::Speed, 1),
        ..Move::BASE },

    // =========================================================================
    // Rock
    // =========================================================================
    "stoneedge" => Move { id: "stoneedge", name: "Stone Edge", move_type: Type::Rock,
        category: MoveCategory::Physical, base_power: 100.0, accuracy: Some(80.0), pp: 5, flags: P,
        ..Move::BASE },
    "rockslide" => Move { id: "rockslide", name: "Rock Slide", move_type: Type::Rock,
        category: MoveCategory::Physical, base_power: 75.0, accuracy: Some(90.0), pp: 10, flags: P,
        secondary: flinch(30.0), ..Move::BASE },
    "powergem" => Move { id: "powergem", name: "Power Gem", move_type: Type::Rock,
        category: MoveCategory::Special, base_power: 80.0, accuracy: Some(100.0), pp: 20, flags: P,
        ..Move::BASE },
    "headsmash" => Move { id: "headsmash", name: "Head Smash", move_type: Type::Rock,
        category: MoveCategory::Physical, base_power: 150.0, accuracy: Some(80.0), pp: 5, flags: C,
        recoil: 0.5, ..Move::BASE },
    "stealthrock" => Move { id: "stealthrock", name: "Stealth Rock", move_type: Type::Rock, pp: 20,
        side_condition: Some(SideCondition::StealthRock), ..Move::BASE },

    // =========================================================================
    // Ghost
    // =========================================================================
    "shadowball" => Move { id: "shadowball", name: "Shadow Ball", move_type: Type::Ghost,
        category: MoveCategory::Special, base_power: 80.0, accuracy: Some(100.0), pp: 15,
        flags: BULLET, secondary: lower(20.0, Stat::SpecialDefense, -1), ..Move::BASE },
    "shadowclaw" => Move { id: "shadowclaw", name: "Shadow Claw", move_type: Type::Ghost,
        category: MoveCategory::Physical, base_power: 70.0, accuracy: Some(100.0), pp: 15, flags: C,
        ..Move::BASE },
    "shadowsneak" => Move { id: "shadowsneak", name: "Shadow Sneak", move_type: Type::Ghost,
        category: MoveCategory::Physical, base_power: 40.0, accuracy: Some(100.0), pp: 30,
        priority: 1, flags: C, ..Move::BASE },
    "poltergeist" => Move { id: "poltergeist", name: "Poltergeist", move_type: Type::Ghost,
        category: MoveCategory::Physical, base_power: 110.0, accuracy: Some(90.0), pp: 5, flags: P,
        ..Move::BASE },
    "hex" => Move { id: "hex", name: "Hex", move_type: Type::Ghost, category: MoveCategory::Special,
        base_power: 65.0, accuracy: Some(100.0), pp: 10, flags: P, ..Move::BASE },
    "nightshade" => Move { id: "nightshade", name: "Night Shade", move_type: Type::Ghost,
        category: MoveCategory::Special, accuracy: Some(100.0), pp: 15, flags: P,
        fixed_damage: Some(FixedDamage::Level), ..Move::BASE },
    "confuseray" => Move { id: "confuseray", name: "Confuse Ray", move_type: Type::Ghost,
        accuracy: Some(100.0), pp: 10, flags: P, volatile_status: Some(Volatiles::CONFUSION),
        ..Move::BASE },

    // =========================================================================
    // Dragon
    // =========================================================================
    "dragonclaw" => Move { id: "dragonclaw", name: "Dragon Claw", move_type: Type::Dragon,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 15, flags: C,
        ..Move::BASE },
    "outrage" => Move { id: "outrage", name: "Outrage", move_type: Type::Dragon,
        category: MoveCategory::Physical, base_power: 120.0, accuracy: Some(100.0), pp: 10, flags: C,
        ..Move::BASE },
    "dracometeor" => Move { id: "dracometeor", name: "Draco Meteor", move_type: Type::Dragon,
        category: MoveCategory::Special, base_power: 130.0, accuracy: Some(90.0), pp: 5, flags: P,
        self_boosts: Boosts::NONE.with(Stat::SpecialAttack, -2), ..Move::BASE },
    "dragonpulse" => Move { id: "dragonpulse", name: "Dragon Pulse", move_type: Type::Dragon,
        category: MoveCategory::Special, base_power: 85.0, accuracy: Some(100.0), pp: 10,
        flags: PULSE, ..Move::BASE },
    "dragontail" => Move { id: "dragontail", name: "Dragon Tail", move_type: Type::Dragon,
        category: MoveCategory::Physical, base_power: 60.0, accuracy: Some(90.0), pp: 10,
        priority: -6, flags: C, force_switch: true, ..Move::BASE },
    "dragonrage" => Move { id: "dragonrage", name: "Dragon Rage", move_type: Type::Dragon,
        category: MoveCategory::Special, accuracy: Some(100.0), pp: 10, flags: P,
        fixed_damage: Some(FixedDamage::Constant(40.0)), ..Move::BASE },
    "dragondance" => Move { id: "dragondance", name: "Dragon Dance", move_type: Type::Dragon, pp: 20,
        target: MoveTarget::User, boosts: Boosts::NONE.with(Stat::Attack, 1).with(Stat::Speed, 1),
        ..Move::BASE },

    // =========================================================================
    // Dark
    // =========================================================================
    "darkpulse" => Move { id: "darkpulse", name: "Dark Pulse", move_type: Type::Dark,
        category: MoveCategory::Special, base_power: 80.0, accuracy: Some(100.0), pp: 15,
        flags: PULSE, secondary: flinch(20.0), ..Move::BASE },
    "knockoff" => Move { id: "knockoff", name: "Knock Off", move_type: Type::Dark,
        category: MoveCategory::Physical, base_power: 65.0, accuracy: Some(100.0), pp: 20, flags: C,
        ..Move::BASE },
    "suckerpunch" => Move { id: "suckerpunch", name: "Sucker Punch", move_type: Type::Dark,
        category: MoveCategory::Physical, base_power: 70.0, accuracy: Some(100.0), pp: 5,
        priority: 1, flags: C, ..Move::BASE },
    "crunch" => Move { id: "crunch", name: "Crunch", move_type: Type::Dark,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 15,
        flags: CBITE, secondary: lower(20.0, Stat::Defense, -1), ..Move::BASE },
    "foulplay" => Move { id: "foulplay", name: "Foul Play", move_type: Type::Dark,
        category: MoveCategory::Physical, base_power: 95.0, accuracy: Some(100.0), pp: 15,
        flags: C.union(MoveFlags::USES_TARGET_ATTACK), ..Move::BASE },
    "wickedblow" => Move { id: "wickedblow", name: "Wicked Blow", move_type: Type::Dark,
        category: MoveCategory::Physical, base_power: 75.0, accuracy: Some(100.0), pp: 5,
        flags: CPUNCH.union(MoveFlags::WILL_CRIT), ..Move::BASE },
    "nastyplot" => Move { id: "nastyplot", name: "Nasty Plot", move_type: Type::Dark, pp: 20,
        target: MoveTarget::User, boosts: Boosts::NONE.with(Stat::SpecialAttack, 2), ..Move::BASE },
    "taunt" => Move { id: "taunt", name: "Taunt", move_type: Type::Dark, accuracy: Some(100.0), pp: 20,
        flags: P.union(MoveFlags::BYPASS_SUBSTITUTE), volatile_status: Some(Volatiles::TAUNT),
        ..Move::BASE },
    "partingshot" => Move { id: "partingshot", name: "Parting Shot", move_type: Type::Dark,
        accuracy: Some(100.0), pp: 20, flags: SOUND,
        boosts: Boosts::NONE.with(Stat::Attack, -1).with(Stat::SpecialAttack, -1), self_switch: true,
        ..Move::BASE },

    // =========================================================================
    // Steel
    // =========================================================================
    "ironhead" => Move { id: "ironhead", name: "Iron Head", move_type: Type::Steel,
        category: MoveCategory::Physical, base_power: 80.0, accuracy: Some(100.0), pp: 15, flags: C,
        secondary: flinch(30.0), ..Move::BASE },
    "flashcannon" => Move { id: "flashcannon", name: "Flash Cannon", move_type: Type::Steel,
        category: MoveCategory::Special, base_power: 80.0, accuracy: Some(100.0), pp: 10, flags: P,
        secondary: lower(10.0, Stat::SpecialDefense, -1), ..Move::BASE },
    "bulletpunch" => Move { id: "bulletpunch", name: "Bullet Punch", move_type: Type::Steel,
        category: MoveCategory::Physical, base_power: 40.0, accuracy: Some(100.0), pp: 30,
        priority: 1, flags: CPUNCH, ..Move::BASE },
    "meteormash" => Move { id: "meteormash", name: "Meteor Mash", move_type: Type::Steel,
        category: MoveCategory::Physical, base_power: 90.0, accuracy: Some(90.0), pp: 10,
        flags: CPUNCH, secondary: raise_self(20.0, Stat::Attack, 1), ..Move::BASE },
    "gyroball" => Move { id: "gyroball", name: "Gyro Ball", move_type: Type::Steel,
        category: MoveCategory::Physical, base_power: 1.0, accuracy: Some(100.0), pp: 5,
        flags: C.union(MoveFlags::BULLET), ..Move::BASE },
    "heavyslam" => Move { id: "heavyslam", name: "Heavy Slam", move_type: Type::Steel,
        category: MoveCategory::Physical, base_power: 1.0, accuracy: Some(100.0), pp: 10, flags: C,
        ..Move::BASE },
    "makeitrain" => Move { id: "makeitrain", name: "Make It Rain", move_type: Type::Steel,
        category: MoveCategory::Special, base_power: 120.0, accuracy: Some(100.0), pp: 5, flags: P,
        self_boosts: Boosts::NONE.with(Stat::SpecialAttack, -1), ..Move::BASE },
    "irondefense" => Move { id: "irondefense", name: "Iron Defense", move_type: Type::Steel, pp: 15,
        target: MoveTarget::User, boosts: Boosts::NONE.with(Stat::Defense, 2), ..Move::BASE },

    // =========================================================================
    // Fairy
    // =========================================================================
    "moonblast" => Move { id: "moonblast", name: "Moonblast", move_type: Type::Fairy,
        category: MoveCategory::Special, base_power: 95.0, accuracy: Some(100.0), pp: 15, flags: P,
        secondary: lower(30.0, Stat::SpecialAttack, -1), ..Move::BASE },
    "playrough" => Move { id: "playrough", name: "Play Rough", move_type: Type::Fairy,
        category: MoveCategory::Physical, base_power: 90.0, accuracy: Some(90.0), pp: 10, flags: C,
        secondary: lower(10.0, Stat::Attack, -1), ..Move::BASE },
    "dazzlinggleam" => Move { id: "dazzlinggleam", name: "Dazzling Gleam", move_type: Type::Fairy,
        category: MoveCategory::Special, base_power: 80.0, accuracy: Some(100.0), pp: 10, flags: P,
        ..Move::BASE },
    "drainingkiss" => Move { id: "drainingkiss", name: "Draining Kiss", move_type: Type::Fairy,
        category: MoveCategory::Special, base_power: 50.0, accuracy: Some(100.0), pp: 10,
        flags: C.union(HEAL), drain: 0.75, ..Move::BASE },
    "moonlight" => Move { id: "moonlight", name: "Moonlight", move_type: Type::Fairy, pp: 5,
        target: MoveTarget::User, flags: HEAL, heal: 0.5, ..Move::BASE },
    "mistyterrain" => Move { id: "mistyterrain", name: "Misty Terrain", move_type: Type::Fairy,
        pp: 10, target: MoveTarget::User, terrain: Some(Terrain::Misty), ..Move::BASE },
    "grassyterrain" => Move { id: "grassyterrain", name: "Grassy Terrain", move_type: Type::Grass,
        pp: 10, target: MoveTarget::User, terrain: Some(Terrain::Grassy), ..Move::BASE },
    "electricterrain" => Move { id: "electricterrain", name: "Electric Terrain",
        move_type: Type::Electric, pp: 10, target: MoveTarget::User, terrain: Some(Terrain::Electric),
        ..Move::BASE },
};

/// Normalize a display name or id: lowercase, alphanumerics only.
///
/// "Will-O-Wisp" and "will o wisp" both become "willowisp".
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Look up a move by normalized id, falling back to [`UNKNOWN_MOVE`].
pub fn lookup_move(id: &str) -> &'static Move {
    if let Some(mv) = MOVES.get(id) {
        return mv;
    }
    let normalized = normalize_name(id);
    MOVES.get(normalized.as_str()).unwrap_or(&UNKNOWN_MOVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_ids() {
        for (key, mv) in MOVES.entries() {
            assert_eq!(*key, mv.id, "table key and id disagree for {}", mv.name);
            assert_eq!(normalize_name(mv.name), *key);
        }
    }

    #[test]
    fn test_lookup_normalizes() {
        assert_eq!(lookup_move("Will-O-Wisp").id, "willowisp");
        assert_eq!(lookup_move("thunderbolt").base_power, 90.0);
    }

    #[test]
    fn test_unknown_move_is_inert() {
        let mv = lookup_move("notarealmove");
        assert_eq!(mv.id, "unknown");
        assert_eq!(mv.priority, 0);
        assert!(!mv.has_effect());
    }

    #[test]
    fn test_damaging_moves_have_power_or_fixed_damage() {
        for mv in MOVES.values() {
            if mv.is_damaging() {
                assert!(
                    mv.base_power > 0.0 || mv.fixed_damage.is_some(),
                    "{} deals no damage",
                    mv.name
                );
            }
        }
    }
}
