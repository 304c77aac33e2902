//! Battle state representation.
//!
//! A `State` is the complete snapshot the search engine reasons about: two
//! `Side`s (the bot's and the opponent's) plus field conditions. The search
//! never clones a `State` per branch; it mutates one instance in place through
//! [`StateMutator`](crate::mutator::StateMutator) and undoes its changes with
//! the inverse instructions.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// Number of stats affected by boosts (Atk, Def, SpA, SpD, Spe, Acc, Eva)
pub const BOOST_STATS: usize = 7;

/// Boost stages are clamped to this magnitude.
pub const MAX_BOOST: i8 = 6;

/// HP is kept on multiples of this step. Sums and differences of such
/// values are exact in `f64`.
pub const HP_STEP: f64 = 1.0 / 4096.0;

/// Nearest multiple of [`HP_STEP`].
pub fn round_hp(hp: f64) -> f64 {
    (hp / HP_STEP).round() * HP_STEP
}

fn deserialize_hp<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(round_hp)
}

// ============================================================================
// Side references
// ============================================================================

/// Which side of the battle an instruction or action refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideRef {
    /// The bot's side ("self").
    User,
    Opponent,
}

impl SideRef {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            SideRef::User => SideRef::Opponent,
            SideRef::Opponent => SideRef::User,
        }
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Index into `Pokemon::stats`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum StatIndex {
    Hp = 0,
    Attack = 1,
    Defense = 2,
    SpecialAttack = 3,
    SpecialDefense = 4,
    Speed = 5,
}

/// A boostable stat; also the index into `Pokemon::boosts`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Stat {
    Attack = 0,
    Defense = 1,
    SpecialAttack = 2,
    SpecialDefense = 3,
    Speed = 4,
    Accuracy = 5,
    Evasion = 6,
}

impl Stat {
    pub const ALL: [Stat; BOOST_STATS] = [
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
        Stat::Accuracy,
        Stat::Evasion,
    ];

    /// The raw stat this boost scales, if any (accuracy and evasion have none).
    pub const fn stat_index(self) -> Option<StatIndex> {
        match self {
            Stat::Attack => Some(StatIndex::Attack),
            Stat::Defense => Some(StatIndex::Defense),
            Stat::SpecialAttack => Some(StatIndex::SpecialAttack),
            Stat::SpecialDefense => Some(StatIndex::SpecialDefense),
            Stat::Speed => Some(StatIndex::Speed),
            Stat::Accuracy | Stat::Evasion => None,
        }
    }
}

/// Multiplier for a boost stage on a raw stat.
///
/// Positive stages scale by `(2 + n) / 2`, negative by `2 / (2 - n)`.
#[inline]
pub fn boost_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-MAX_BOOST, MAX_BOOST) as f64;
    if stage >= 0.0 {
        (2.0 + stage) / 2.0
    } else {
        2.0 / (2.0 - stage)
    }
}

/// Multiplier for a combined accuracy/evasion stage, using thirds.
#[inline]
pub fn accuracy_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-MAX_BOOST, MAX_BOOST) as f64;
    if stage >= 0.0 {
        (3.0 + stage) / 3.0
    } else {
        3.0 / (3.0 - stage)
    }
}

// ============================================================================
// Status & Volatile Flags
// ============================================================================

/// Major status condition. A Pokémon holds exactly one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    None,
    Burn,
    Freeze,
    Paralysis,
    Poison,
    /// Badly poisoned
    Toxic,
    Sleep,
}

impl Status {
    #[inline]
    pub fn is_none(self) -> bool {
        self == Status::None
    }
}

bitflags::bitflags! {
    /// Volatile status conditions (multiple can be active)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Volatiles: u32 {
        const CONFUSION     = 1 << 0;
        const FLINCH        = 1 << 1;
        const SUBSTITUTE    = 1 << 2;
        const LEECH_SEED    = 1 << 3;
        const TAUNT         = 1 << 4;
        const PROTECT       = 1 << 5;
        const INGRAIN       = 1 << 6;
        const AQUA_RING     = 1 << 7;
        const MAGNET_RISE   = 1 << 8;
        const FOCUS_ENERGY  = 1 << 9;
    }
}

// ============================================================================
// Side Conditions
// ============================================================================

/// Team-wide effects. Each is tracked as a counter: layers for hazards,
/// remaining turns for screens and timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SideCondition {
    Reflect = 0,
    LightScreen = 1,
    AuroraVeil = 2,
    Tailwind = 3,
    Safeguard = 4,
    Mist = 5,
    StealthRock = 6,
    Spikes = 7,
    ToxicSpikes = 8,
    StickyWeb = 9,
    /// Consecutive protect uses.
    Protect = 10,
    /// Turns spent badly poisoned.
    ToxicCount = 11,
}

impl SideCondition {
    pub const COUNT: usize = 12;

    pub const ALL: [SideCondition; Self::COUNT] = [
        SideCondition::Reflect,
        SideCondition::LightScreen,
        SideCondition::AuroraVeil,
        SideCondition::Tailwind,
        SideCondition::Safeguard,
        SideCondition::Mist,
        SideCondition::StealthRock,
        SideCondition::Spikes,
        SideCondition::ToxicSpikes,
        SideCondition::StickyWeb,
        SideCondition::Protect,
        SideCondition::ToxicCount,
    ];

    pub const HAZARDS: [SideCondition; 4] = [
        SideCondition::StealthRock,
        SideCondition::Spikes,
        SideCondition::ToxicSpikes,
        SideCondition::StickyWeb,
    ];

    /// Conditions that count down one per turn and expire at zero.
    pub const TIMED: [SideCondition; 6] = [
        SideCondition::Reflect,
        SideCondition::LightScreen,
        SideCondition::AuroraVeil,
        SideCondition::Tailwind,
        SideCondition::Safeguard,
        SideCondition::Mist,
    ];

    /// Maximum layers a move may stack.
    pub const fn max_layers(self) -> u8 {
        match self {
            SideCondition::Spikes => 3,
            SideCondition::ToxicSpikes => 2,
            _ => 1,
        }
    }
}

/// Counters for every `SideCondition`, serialized as a name -> count map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<SideCondition, u8>", into = "BTreeMap<SideCondition, u8>")]
pub struct SideConditions([u8; SideCondition::COUNT]);

impl SideConditions {
    #[inline]
    pub fn get(&self, condition: SideCondition) -> u8 {
        self.0[condition as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, condition: SideCondition) -> &mut u8 {
        &mut self.0[condition as usize]
    }

    #[inline]
    pub fn has(&self, condition: SideCondition) -> bool {
        self.get(condition) > 0
    }
}

impl From<BTreeMap<SideCondition, u8>> for SideConditions {
    fn from(map: BTreeMap<SideCondition, u8>) -> Self {
        let mut conditions = SideConditions::default();
        for (condition, count) in map {
            *conditions.get_mut(condition) = count;
        }
        conditions
    }
}

impl From<SideConditions> for BTreeMap<SideCondition, u8> {
    fn from(conditions: SideConditions) -> Self {
        SideCondition::ALL
            .iter()
            .filter(|c| conditions.has(**c))
            .map(|c| (*c, conditions.get(*c)))
            .collect()
    }
}

// ============================================================================
// Field
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
    Snow,
    HarshSun,
    HeavyRain,
}

impl Weather {
    #[inline]
    pub fn is_sun(self) -> bool {
        matches!(self, Weather::Sun | Weather::HarshSun)
    }

    #[inline]
    pub fn is_rain(self) -> bool {
        matches!(self, Weather::Rain | Weather::HeavyRain)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Electric,
    Grassy,
    Psychic,
    Misty,
}

// ============================================================================
// Pokemon
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonMove {
    pub id: String,
    pub pp: u8,
    #[serde(default)]
    pub disabled: bool,
}

impl PokemonMove {
    pub fn new(id: impl Into<String>, pp: u8) -> Self {
        Self {
            id: id.into(),
            pp,
            disabled: false,
        }
    }
}

/// A single Pokémon as the search sees it.
///
/// HP is stored as `f64` because a state read from a battle may carry
/// fractional HP. Both values and every damage or heal amount sit on the
/// [`HP_STEP`] grid, so undoing a change restores the same bits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Identity used for reserve keys and switch actions (normalized species name).
    pub id: String,
    #[serde(default = "default_level")]
    pub level: u8,
    pub types: Vec<Type>,
    #[serde(deserialize_with = "deserialize_hp")]
    pub hp: f64,
    #[serde(deserialize_with = "deserialize_hp")]
    pub max_hp: f64,
    /// Raw stats indexed by `StatIndex`.
    pub stats: [u16; 6],
    #[serde(default)]
    pub boosts: [i8; BOOST_STATS],
    #[serde(default)]
    pub ability: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub volatiles: Volatiles,
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub weight_kg: f64,
}

fn default_level() -> u8 {
    100
}

impl Pokemon {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    #[inline]
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    #[inline]
    pub fn boost(&self, stat: Stat) -> i8 {
        self.boosts[stat as usize]
    }

    #[inline]
    pub fn stat(&self, index: StatIndex) -> u16 {
        self.stats[index as usize]
    }

    /// Raw stat scaled by its boost stage.
    pub fn boosted_stat(&self, stat: Stat) -> f64 {
        match stat.stat_index() {
            Some(index) => self.stat(index) as f64 * boost_multiplier(self.boost(stat)),
            None => 1.0,
        }
    }

    #[inline]
    pub fn has_ability(&self, ability: &str) -> bool {
        self.ability == ability
    }

    #[inline]
    pub fn has_item(&self, item: &str) -> bool {
        self.item == item
    }

    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp <= 0.0 {
            0.0
        } else {
            self.hp / self.max_hp
        }
    }

    pub fn find_move(&self, id: &str) -> Option<&PokemonMove> {
        self.moves.iter().find(|m| m.id == id)
    }

    /// Whether the Pokémon touches the ground for hazards and terrain.
    pub fn is_grounded(&self) -> bool {
        if self.has_item("ironball") {
            return true;
        }
        !(self.has_type(Type::Flying)
            || self.has_ability("levitate")
            || self.has_item("airballoon")
            || self.volatiles.contains(Volatiles::MAGNET_RISE))
    }
}

impl Hash for Pokemon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.level.hash(state);
        self.types.hash(state);
        self.hp.to_bits().hash(state);
        self.max_hp.to_bits().hash(state);
        self.stats.hash(state);
        self.boosts.hash(state);
        self.ability.hash(state);
        self.item.hash(state);
        self.status.hash(state);
        self.volatiles.hash(state);
        self.moves.hash(state);
        self.weight_kg.to_bits().hash(state);
    }
}

// ============================================================================
// Side
// ============================================================================

/// Pending Wish: heals `amount` at the end of the turn `turns` reaches zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub turns: u8,
    pub amount: f64,
}

/// Pending Future Sight, launched by `source` (a Pokémon id on the other side).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FutureSight {
    pub turns: u8,
    pub source: String,
}

/// Last move a side used, or `switch <id>` when it last switched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastUsedMove {
    pub pokemon: String,
    pub move_id: String,
}

impl LastUsedMove {
    pub fn switched_in(&self) -> bool {
        self.move_id.starts_with("switch ")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Side {
    pub active: Pokemon,
    /// Benched Pokémon keyed by identity.
    #[serde(default)]
    pub reserve: BTreeMap<String, Pokemon>,
    #[serde(default)]
    pub side_conditions: SideConditions,
    #[serde(default)]
    pub wish: Wish,
    #[serde(default)]
    pub future_sight: FutureSight,
    #[serde(default)]
    pub trapped: bool,
    #[serde(default)]
    pub force_switch: bool,
    #[serde(default)]
    pub wait: bool,
    #[serde(default)]
    pub last_used_move: LastUsedMove,
}

impl Side {
    pub fn new(active: Pokemon, reserve: impl IntoIterator<Item = Pokemon>) -> Self {
        Self {
            active,
            reserve: reserve.into_iter().map(|p| (p.id.clone(), p)).collect(),
            side_conditions: SideConditions::default(),
            wish: Wish::default(),
            future_sight: FutureSight::default(),
            trapped: false,
            force_switch: false,
            wait: false,
            last_used_move: LastUsedMove::default(),
        }
    }

    /// Reserve Pokémon that can still be switched in.
    pub fn alive_reserves(&self) -> impl Iterator<Item = &Pokemon> {
        self.reserve.values().filter(|p| p.is_alive())
    }

    /// Look up a Pokémon on this side by id, active first.
    pub fn find(&self, id: &str) -> Option<&Pokemon> {
        if self.active.id == id {
            Some(&self.active)
        } else {
            self.reserve.get(id)
        }
    }

    pub fn any_alive(&self) -> bool {
        self.active.is_alive() || self.reserve.values().any(Pokemon::is_alive)
    }
}

impl Hash for Side {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.active.hash(state);
        self.reserve.hash(state);
        self.side_conditions.hash(state);
        self.wish.turns.hash(state);
        self.wish.amount.to_bits().hash(state);
        self.future_sight.hash(state);
        self.trapped.hash(state);
        self.force_switch.hash(state);
        self.wait.hash(state);
        self.last_used_move.hash(state);
    }
}

// ============================================================================
// Battle State
// ============================================================================

#[derive(Clone, Debug, PartialEq, Hash, Serialize, Deserialize)]
pub struct State {
    pub user: Side,
    pub opponent: Side,
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub terrain: Option<Terrain>,
    #[serde(default)]
    pub trick_room: bool,
}

impl State {
    pub fn new(user: Side, opponent: Side) -> Self {
        Self {
            user,
            opponent,
            weather: None,
            terrain: None,
            trick_room: false,
        }
    }

    #[inline]
    pub fn side(&self, side: SideRef) -> &Side {
        match side {
            SideRef::User => &self.user,
            SideRef::Opponent => &self.opponent,
        }
    }

    #[inline]
    pub fn side_mut(&mut self, side: SideRef) -> &mut Side {
        match side {
            SideRef::User => &mut self.user,
            SideRef::Opponent => &mut self.opponent,
        }
    }

    #[inline]
    pub fn active(&self, side: SideRef) -> &Pokemon {
        &self.side(side).active
    }

    #[inline]
    pub fn active_mut(&mut self, side: SideRef) -> &mut Pokemon {
        &mut self.side_mut(side).active
    }

    /// Weather as moves and abilities see it: suppressed by Cloud Nine or
    /// Air Lock on either active Pokémon.
    pub fn effective_weather(&self) -> Option<Weather> {
        let suppressed = [&self.user.active, &self.opponent.active]
            .iter()
            .any(|p| p.is_alive() && (p.has_ability("cloudnine") || p.has_ability("airlock")));
        if suppressed {
            None
        } else {
            self.weather
        }
    }

    /// `Some(1)` when the bot has won, `Some(-1)` when it has lost,
    /// `None` while both sides still have a Pokémon standing.
    pub fn battle_is_over(&self) -> Option<i8> {
        if !self.opponent.any_alive() {
            Some(1)
        } else if !self.user.any_alive() {
            Some(-1)
        } else {
            None
        }
    }

    /// Hash of the complete state, used as the search memo key.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mon(id: &str, hp: f64) -> Pokemon {
        Pokemon {
            id: id.to_string(),
            level: 100,
            types: vec![Type::Normal],
            hp,
            max_hp: 100.0,
            stats: [100; 6],
            boosts: [0; BOOST_STATS],
            ability: String::new(),
            item: String::new(),
            status: Status::None,
            volatiles: Volatiles::empty(),
            moves: vec![PokemonMove::new("tackle", 35)],
            weight_kg: 10.0,
        }
    }

    #[test]
    fn test_boost_multiplier() {
        assert_eq!(boost_multiplier(0), 1.0);
        assert_eq!(boost_multiplier(1), 1.5);
        assert_eq!(boost_multiplier(6), 4.0);
        assert_eq!(boost_multiplier(-1), 2.0 / 3.0);
        assert_eq!(boost_multiplier(-6), 0.25);
    }

    #[test]
    fn test_battle_is_over() {
        let mut state = State::new(
            Side::new(mon("a", 100.0), [mon("b", 0.0)]),
            Side::new(mon("c", 100.0), []),
        );
        assert_eq!(state.battle_is_over(), None);

        state.opponent.active.hp = 0.0;
        assert_eq!(state.battle_is_over(), Some(1));

        state.opponent.active.hp = 50.0;
        state.user.active.hp = 0.0;
        assert_eq!(state.battle_is_over(), Some(-1));
    }

    #[test]
    fn test_fingerprint_tracks_changes() {
        let mut state = State::new(Side::new(mon("a", 100.0), []), Side::new(mon("c", 100.0), []));
        let before = state.fingerprint();
        state.user.active.hp = 99.0;
        assert_ne!(before, state.fingerprint());
        state.user.active.hp = 100.0;
        assert_eq!(before, state.fingerprint());
    }

    #[test]
    fn test_side_conditions_serde() {
        let mut conditions = SideConditions::default();
        *conditions.get_mut(SideCondition::Spikes) = 2;
        let json = serde_json::to_string(&conditions).unwrap();
        assert_eq!(json, r#"{"spikes":2}"#);
        let back: SideConditions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, conditions);
    }
}
