//! Move data and move-specific hooks.
//!
//! `Move` is a plain `Copy` descriptor. The static table in [`dex`] holds the
//! base entries; hooks in the modifier chain return rewritten copies, so a
//! lookup never hands out anything mutable.

pub mod dex;
pub mod hooks;
pub mod implementations;
pub mod registry;

pub use dex::{lookup_move, MOVES};
pub use hooks::MoveHooks;
pub use registry::MOVE_REGISTRY;

use serde::{Deserialize, Serialize};

use crate::state::{SideCondition, Stat, Status, Terrain, Volatiles, Weather, BOOST_STATS};
use crate::types::Type;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    #[inline]
    pub fn is_damaging(self) -> bool {
        !matches!(self, MoveCategory::Status)
    }
}

/// Whom the primary effects of a move land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveTarget {
    /// The opposing active Pokémon (or its side, for hazards).
    Normal,
    /// The user (or its side, for screens and Tailwind).
    User,
}

/// Target of a heal or secondary effect, relative to the move's user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectTarget {
    Target,
    User,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u32 {
        const CONTACT                  = 1 << 0;
        /// Blocked by Protect and friends.
        const PROTECT                  = 1 << 1;
        const SOUND                    = 1 << 2;
        const PUNCH                    = 1 << 3;
        const BITE                     = 1 << 4;
        const PULSE                    = 1 << 5;
        const BULLET                   = 1 << 6;
        const POWDER                   = 1 << 7;
        /// Thaws a frozen user.
        const DEFROST                  = 1 << 8;
        const BYPASS_SUBSTITUTE        = 1 << 9;
        const SLICING                  = 1 << 10;
        const WIND                     = 1 << 11;
        /// Heals the user (Triage, Heal Block).
        const HEAL                     = 1 << 12;
        /// Protect, Detect, Spiky Shield...
        const PROTECTION               = 1 << 13;
        /// Fake Out, First Impression.
        const FIRST_TURN_ONLY          = 1 << 14;
        /// Foul Play
        const USES_TARGET_ATTACK       = 1 << 15;
        /// Body Press
        const USES_DEFENSE_AS_ATTACK   = 1 << 16;
        /// Psyshock, Psystrike, Secret Sword
        const TARGETS_PHYSICAL_DEFENSE = 1 << 17;
        /// Always lands a critical hit.
        const WILL_CRIT                = 1 << 18;
        /// Usable while asleep.
        const SLEEP_USABLE             = 1 << 19;
    }
}

/// Damage that ignores the damage formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FixedDamage {
    /// Night Shade, Seismic Toss
    Level,
    /// Dragon Rage, Sonic Boom
    Constant(f64),
    /// Super Fang, Nature's Madness
    HalfTargetHp,
    /// Endeavor
    TargetHpMinusUserHp,
    /// Final Gambit
    UserHp,
}

/// Stage changes, one per boostable stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Boosts(pub [i8; BOOST_STATS]);

impl Boosts {
    pub const NONE: Self = Self([0; BOOST_STATS]);

    /// Const builder: Boosts::NONE.with(Stat::Attack, 2)
    pub const fn with(self, stat: Stat, amount: i8) -> Self {
        let mut stages = self.0;
        stages[stat as usize] = amount;
        Self(stages)
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> i8 {
        self.0[stat as usize]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Non-zero stage changes.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i8)> + '_ {
        Stat::ALL
            .iter()
            .copied()
            .map(move |s| (s, self.get(s)))
            .filter(|(_, amount)| *amount != 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SecondaryEffect {
    Status(Status),
    /// Applied to the target. Flinch is resolved on its own stage.
    Volatile(Volatiles),
    Boosts(Boosts, EffectTarget),
}

/// A chance-based side effect of a damaging move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Secondary {
    /// Percent chance, 0..=100.
    pub chance: f64,
    pub effect: SecondaryEffect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardClear {
    /// Clears the user's side.
    RapidSpin,
    /// Clears hazards on both sides and screens on the target's.
    Defog,
    /// Swaps every side condition.
    CourtChange,
}

/// Effects that don't fit the generic stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialEffect {
    Wish,
    FutureSight,
    TrickRoom,
    Haze,
    Rest,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub id: &'static str,
    pub name: &'static str,
    pub move_type: Type,
    pub category: MoveCategory,
    pub base_power: f64,
    /// Percent; `None` never misses.
    pub accuracy: Option<f64>,
    pub pp: u8,
    pub priority: i8,
    pub target: MoveTarget,
    pub flags: MoveFlags,
    pub fixed_damage: Option<FixedDamage>,
    pub status: Option<Status>,
    pub volatile_status: Option<Volatiles>,
    pub side_condition: Option<SideCondition>,
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    /// Applied to `target`.
    pub boosts: Boosts,
    /// Applied to the user whenever the move hits.
    pub self_boosts: Boosts,
    pub secondary: Option<Secondary>,
    /// Fraction of max HP; negative values hurt (Explosion, Belly Drum).
    pub heal: f64,
    pub heal_target: EffectTarget,
    /// Fraction of damage dealt returned to the user.
    pub drain: f64,
    /// Fraction of damage dealt taken by the user.
    pub recoil: f64,
    /// Fraction of max HP lost on a miss.
    pub crash: f64,
    pub self_switch: bool,
    pub force_switch: bool,
    pub hazard_clear: Option<HazardClear>,
    pub special: Option<SpecialEffect>,
}

impl Move {
    /// Template for the static table; every entry overrides `id` and `name`.
    pub const BASE: Move = Move {
        id: "",
        name: "",
        move_type: Type::Normal,
        category: MoveCategory::Status,
        base_power: 0.0,
        accuracy: None,
        pp: 10,
        priority: 0,
        target: MoveTarget::Normal,
        flags: MoveFlags::empty(),
        fixed_damage: None,
        status: None,
        volatile_status: None,
        side_condition: None,
        weather: None,
        terrain: None,
        boosts: Boosts::NONE,
        self_boosts: Boosts::NONE,
        secondary: None,
        heal: 0.0,
        heal_target: EffectTarget::User,
        drain: 0.0,
        recoil: 0.0,
        crash: 0.0,
        self_switch: false,
        force_switch: false,
        hazard_clear: None,
        special: None,
    };

    #[inline]
    pub fn is_damaging(&self) -> bool {
        self.category.is_damaging()
    }

    /// Whether the move lands on the opposing Pokémon.
    #[inline]
    pub fn targets_opponent(&self) -> bool {
        self.target == MoveTarget::Normal
    }

    /// Copy of this move that does nothing when used. Hooks return this when
    /// a condition makes the move fail (Sucker Punch into a status move,
    /// Levitate against a Ground move).
    pub fn without_effects(&self) -> Move {
        Move {
            id: self.id,
            name: self.name,
            move_type: self.move_type,
            pp: self.pp,
            priority: self.priority,
            target: self.target,
            flags: self.flags,
            category: MoveCategory::Status,
            ..Move::BASE
        }
    }

    /// Whether the move can do anything at all.
    pub fn has_effect(&self) -> bool {
        self.is_damaging()
            || self.fixed_damage.is_some()
            || self.status.is_some()
            || self.volatile_status.is_some()
            || self.side_condition.is_some()
            || self.weather.is_some()
            || self.terrain.is_some()
            || !self.boosts.is_empty()
            || !self.self_boosts.is_empty()
            || self.heal != 0.0
            || self.self_switch
            || self.force_switch
            || self.hazard_clear.is_some()
            || self.special.is_some()
    }
}
