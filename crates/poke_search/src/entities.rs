//! Entity blueprints for building Pokémon.
//!
//! `PokemonConfig` collects a species, spread and moveset, then builds the
//! `Pokemon` the search works with. Stats come from the species dex using the
//! in-game formulas unless final stats are given directly.

use crate::error::{Error, Result};
use crate::moves::lookup_move;
use crate::moves::dex::normalize_name;
use crate::natures::Nature;
use crate::species::{lookup_species, Species};
use crate::state::{round_hp, Pokemon, PokemonMove, StatIndex, Status, Volatiles, BOOST_STATS};
use crate::types::Type;

/// Maxed-out IVs, the usual competitive spread.
pub const DEFAULT_IVS: [u8; 6] = [31; 6];

pub const DEFAULT_EVS: [u8; 6] = [0; 6];

pub const DEFAULT_LEVEL: u8 = 100;

const MAX_EV: u8 = 252;
const MAX_EV_TOTAL: u16 = 510;

const STAT_ORDER: [StatIndex; 6] = [
    StatIndex::Hp,
    StatIndex::Attack,
    StatIndex::Defense,
    StatIndex::SpecialAttack,
    StatIndex::SpecialDefense,
    StatIndex::Speed,
];

/// Everything needed to put one Pokémon on a side.
///
/// Chain the setters, then call [`PokemonConfig::build`].
#[derive(Clone, Debug)]
pub struct PokemonConfig {
    /// Looked up in the species dex after normalization.
    pub species: String,
    pub level: u8,
    /// Ordered `[HP, Atk, Def, SpA, SpD, Spe]`, like every six-stat array here.
    pub ivs: [u8; 6],
    pub evs: [u8; 6],
    pub nature: Nature,
    pub ability: String,
    pub item: String,
    pub moves: Vec<String>,
    pub status: Status,
    pub types_override: Option<Vec<Type>>,
    /// Known final stats. When set, IVs, EVs, level and nature are not used
    /// for stats at all.
    pub stats_override: Option<[u16; 6]>,
    /// Starting HP; full when unset.
    pub current_hp: Option<f64>,
}

impl Default for PokemonConfig {
    fn default() -> Self {
        Self {
            species: String::new(),
            level: DEFAULT_LEVEL,
            ivs: DEFAULT_IVS,
            evs: DEFAULT_EVS,
            nature: Nature::default(),
            ability: String::new(),
            item: String::new(),
            moves: Vec::new(),
            status: Status::None,
            types_override: None,
            stats_override: None,
            current_hp: None,
        }
    }
}

impl PokemonConfig {
    pub fn new(species: &str) -> Self {
        Self {
            species: species.to_string(),
            ..Self::default()
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, 100);
        self
    }

    pub fn ivs(mut self, ivs: [u8; 6]) -> Self {
        self.ivs = ivs.map(|iv| iv.min(31));
        self
    }

    /// Each value is capped at 252; later stats lose what would push the
    /// spread past 510.
    pub fn evs(mut self, evs: [u8; 6]) -> Self {
        let mut spent: u16 = 0;
        for (slot, requested) in self.evs.iter_mut().zip(evs) {
            let budget = MAX_EV_TOTAL.saturating_sub(spent).min(u16::from(MAX_EV));
            *slot = requested.min(MAX_EV).min(budget as u8);
            spent += u16::from(*slot);
        }
        self
    }

    pub fn nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }

    pub fn ability(mut self, ability: &str) -> Self {
        self.ability = normalize_name(ability);
        self
    }

    pub fn item(mut self, item: &str) -> Self {
        self.item = normalize_name(item);
        self
    }

    pub fn moves(mut self, moves: &[&str]) -> Self {
        self.moves = moves.iter().map(|m| normalize_name(m)).collect();
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn types(mut self, types: &[Type]) -> Self {
        self.types_override = Some(types.to_vec());
        self
    }

    pub fn stats(mut self, stats: [u16; 6]) -> Self {
        self.stats_override = Some(stats);
        self
    }

    /// Rounded to the HP grid and clamped to `0..=max_hp` on build.
    pub fn current_hp(mut self, hp: f64) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Final stats from the species' base stats and this spread.
    pub fn calculate_stats(&self, species: &Species) -> [u16; 6] {
        let level = u32::from(self.level);
        let mut stats = [0u16; 6];
        for (i, base) in species.base_stats.iter().enumerate() {
            let iv = u32::from(self.ivs[i]);
            let ev = u32::from(self.evs[i]);
            let core = (2 * u32::from(*base) + iv + ev / 4) * level / 100;
            stats[i] = match STAT_ORDER[i] {
                StatIndex::Hp => (core + level + 10) as u16,
                index => ((core + 5) * self.nature.stat_modifier(index) / 10) as u16,
            };
        }
        stats
    }

    /// Look up the species and produce the Pokémon, at full HP unless
    /// `current_hp` was set.
    pub fn build(&self) -> Result<Pokemon> {
        let species = lookup_species(&self.species)
            .ok_or_else(|| Error::UnknownSpecies(self.species.clone()))?;
        let stats = self.stats_override.unwrap_or_else(|| self.calculate_stats(species));
        let max_hp = stats[StatIndex::Hp as usize] as f64;
        let hp = self.current_hp.map_or(max_hp, |hp| round_hp(hp).clamp(0.0, max_hp));

        let moves = self
            .moves
            .iter()
            .map(|id| PokemonMove::new(id.clone(), lookup_move(id).pp))
            .collect();

        Ok(Pokemon {
            id: normalize_name(&self.species),
            level: self.level,
            types: self.types_override.clone().unwrap_or_else(|| species.types()),
            hp,
            max_hp,
            stats,
            boosts: [0; BOOST_STATS],
            ability: self.ability.clone(),
            item: self.item.clone(),
            status: self.status,
            volatiles: Volatiles::empty(),
            moves,
            weight_kg: species.weight_kg,
        })
    }
}
