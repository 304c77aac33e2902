//! Damage fixture format.
//!
//! Each case pins both Pokémon's final stats so the expected rolls depend
//! only on the damage formula and the modifier chain.

use poke_search::state::{Status, Terrain, Weather};
use serde::Deserialize;

pub const DAMAGE_FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/damage.json");

#[derive(Deserialize)]
pub struct DamageFixture {
    pub cases: Vec<DamageTestCase>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DamageTestCase {
    pub id: String,
    pub description: String,
    pub attacker: PokemonData,
    pub defender: PokemonData,
    #[serde(rename = "move")]
    pub move_id: String,
    #[serde(default)]
    pub field: FieldData,
    pub expected: Expected,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PokemonData {
    pub species: String,
    pub stats: [u16; 6],
    pub level: Option<u8>,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub status: Option<Status>,
    #[serde(default)]
    pub boosts: BoostData,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct BoostData {
    pub attack: Option<i8>,
    pub defense: Option<i8>,
    pub special_attack: Option<i8>,
    pub special_defense: Option<i8>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct FieldData {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    #[serde(default)]
    pub reflect: bool,
    #[serde(default)]
    pub light_screen: bool,
}

/// All sixteen rolls, or a marker for moves that deal no damage.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Expected {
    Rolls(Vec<u32>),
    Marker(String),
}

pub fn load_damage_fixture() -> DamageFixture {
    let text = std::fs::read_to_string(DAMAGE_FIXTURES)
        .unwrap_or_else(|e| panic!("Failed to read {DAMAGE_FIXTURES}: {e}"));
    serde_json::from_str(&text).expect("Failed to parse damage.json")
}
