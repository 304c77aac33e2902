//! Species dex: base stats, types and weight.

use phf::phf_map;

use crate::types::Type;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Species {
    pub name: &'static str,
    pub primary_type: Type,
    pub secondary_type: Option<Type>,
    /// [HP, Atk, Def, SpA, SpD, Spe]
    pub base_stats: [u16; 6],
    pub weight_kg: f64,
    pub abilities: &'static [&'static str],
}

impl Species {
    pub fn types(&self) -> Vec<Type> {
        match self.secondary_type {
            Some(secondary) => vec![self.primary_type, secondary],
            None => vec![self.primary_type],
        }
    }
}

macro_rules! species {
    ($name:expr, $t1:ident, $t2:ident, $stats:expr, $weight:expr, $abilities:expr) => {
        Species {
            name: $name,
            primary_type: Type::$t1,
            secondary_type: Some(Type::$t2),
            base_stats: $stats,
            weight_kg: $weight,
            abilities: $abilities,
        }
    };
    ($name:expr, $t1:ident, $stats:expr, $weight:expr, $abilities:expr) => {
        Species {
            name: $name,
            primary_type: Type::$t1,
            secondary_type: None,
            base_stats: $stats,
            weight_kg: $weight,
            abilities: $abilities,
        }
    };
}

pub static SPECIES: phf::Map<&'static str, Species> = phf_map! {
    "alakazam" => species!("Alakazam", Psychic, [55, 50, 45, 135, 95, 120], 48.0, &["magicguard", "synchronize"]),
    "amoonguss" => species!("Amoonguss", Grass, Poison, [114, 85, 70, 85, 80, 30], 10.5, &["regenerator", "effectspore"]),
    "azumarill" => species!("Azumarill", Water, Fairy, [100, 50, 80, 60, 80, 50], 28.5, &["hugepower", "thickfat"]),
    "blissey" => species!("Blissey", Normal, [255, 10, 10, 75, 135, 55], 46.8, &["naturalcure", "serenegrace"]),
    "chansey" => species!("Chansey", Normal, [250, 5, 5, 35, 105, 50], 34.6, &["naturalcure", "serenegrace"]),
    "cinderace" => species!("Cinderace", Fire, [80, 116, 75, 65, 75, 119], 33.0, &["libero", "blaze"]),
    "clefable" => species!("Clefable", Fairy, [95, 70, 73, 95, 90, 60], 40.0, &["magicguard", "unaware"]),
    "corviknight" => species!("Corviknight", Flying, Steel, [98, 87, 105, 53, 85, 67], 75.0, &["pressure", "mirrorarmor"]),
    "dragapult" => species!("Dragapult", Dragon, Ghost, [88, 120, 75, 100, 75, 142], 2.0, &["infiltrator", "clearbody"]),
    "dragonite" => species!("Dragonite", Dragon, Flying, [91, 134, 95, 100, 100, 80], 210.0, &["multiscale", "innerfocus"]),
    "excadrill" => species!("Excadrill", Ground, Steel, [110, 135, 60, 50, 65, 88], 40.4, &["sandrush", "moldbreaker"]),
    "ferrothorn" => species!("Ferrothorn", Grass, Steel, [74, 94, 131, 54, 116, 20], 110.0, &["ironbarbs"]),
    "garchomp" => species!("Garchomp", Dragon, Ground, [108, 130, 95, 80, 85, 102], 95.0, &["roughskin", "sandveil"]),
    "gengar" => species!("Gengar", Ghost, Poison, [60, 65, 60, 130, 75, 110], 40.5, &["cursedbody"]),
    "gholdengo" => species!("Gholdengo", Steel, Ghost, [87, 60, 95, 133, 91, 84], 30.0, &["goodasgold"]),
    "gyarados" => species!("Gyarados", Water, Flying, [95, 125, 79, 60, 100, 81], 235.0, &["intimidate", "moxie"]),
    "heatran" => species!("Heatran", Fire, Steel, [91, 90, 106, 130, 106, 77], 430.0, &["flashfire", "flamebody"]),
    "hippowdon" => species!("Hippowdon", Ground, [108, 112, 118, 68, 72, 47], 300.0, &["sandstream", "sandforce"]),
    "jolteon" => species!("Jolteon", Electric, [65, 65, 60, 110, 95, 130], 24.5, &["voltabsorb", "quickfeet"]),
    "kingambit" => species!("Kingambit", Dark, Steel, [100, 135, 120, 60, 85, 50], 120.0, &["defiant", "supremeoverlord"]),
    "landorustherian" => species!("Landorus-Therian", Ground, Flying, [89, 145, 90, 105, 80, 91], 68.0, &["intimidate"]),
    "machamp" => species!("Machamp", Fighting, [90, 130, 80, 65, 85, 55], 130.0, &["guts", "noguard"]),
    "magikarp" => species!("Magikarp", Water, [20, 10, 55, 15, 20, 80], 10.0, &["swiftswim"]),
    "magnezone" => species!("Magnezone", Electric, Steel, [70, 70, 115, 130, 90, 60], 180.0, &["magnetpull", "sturdy"]),
    "mamoswine" => species!("Mamoswine", Ice, Ground, [110, 130, 80, 70, 60, 80], 291.0, &["oblivious", "thickfat"]),
    "ninetales" => species!("Ninetales", Fire, [73, 76, 75, 81, 100, 100], 19.9, &["flashfire", "drought"]),
    "pelipper" => species!("Pelipper", Water, Flying, [60, 50, 100, 95, 70, 65], 28.0, &["drizzle", "keeneye"]),
    "pikachu" => species!("Pikachu", Electric, [35, 55, 40, 50, 50, 90], 6.0, &["static", "lightningrod"]),
    "rillaboom" => species!("Rillaboom", Grass, [100, 125, 90, 60, 70, 85], 90.0, &["grassysurge", "overgrow"]),
    "rotomwash" => species!("Rotom-Wash", Electric, Water, [50, 65, 107, 105, 107, 86], 0.3, &["levitate"]),
    "scizor" => species!("Scizor", Bug, Steel, [70, 130, 100, 55, 80, 65], 118.0, &["technician", "swarm"]),
    "skarmory" => species!("Skarmory", Steel, Flying, [65, 80, 140, 40, 70, 70], 50.5, &["sturdy", "keeneye"]),
    "slowbro" => species!("Slowbro", Water, Psychic, [95, 75, 110, 100, 80, 30], 78.5, &["regenerator", "owntempo"]),
    "snorlax" => species!("Snorlax", Normal, [160, 110, 65, 65, 110, 30], 460.0, &["thickfat", "immunity"]),
    "swampert" => species!("Swampert", Water, Ground, [100, 110, 90, 85, 90, 60], 81.9, &["torrent", "damp"]),
    "toxapex" => species!("Toxapex", Poison, Water, [50, 63, 152, 53, 142, 35], 14.5, &["regenerator", "merciless"]),
    "tyranitar" => species!("Tyranitar", Rock, Dark, [100, 134, 110, 95, 100, 61], 202.0, &["sandstream", "unnerve"]),
    "vaporeon" => species!("Vaporeon", Water, [130, 65, 60, 110, 95, 65], 29.0, &["waterabsorb", "hydration"]),
    "volcarona" => species!("Volcarona", Bug, Fire, [85, 60, 65, 135, 105, 100], 46.0, &["flamebody", "swarm"]),
    "weavile" => species!("Weavile", Dark, Ice, [70, 120, 65, 45, 85, 125], 34.0, &["pressure", "pickpocket"]),
    "zapdos" => species!("Zapdos", Electric, Flying, [90, 90, 85, 125, 90, 100], 52.6, &["pressure", "static"]),
};

pub fn lookup_species(id: &str) -> Option<&'static Species> {
    SPECIES
        .get(id)
        .or_else(|| SPECIES.get(crate::moves::dex::normalize_name(id).as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_display_name() {
        let lando = lookup_species("Landorus-Therian").unwrap();
        assert_eq!(lando.types(), vec![Type::Ground, Type::Flying]);
        assert!(lookup_species("missingno").is_none());
    }

    #[test]
    fn test_mono_type_has_single_entry() {
        assert_eq!(lookup_species("blissey").unwrap().types(), vec![Type::Normal]);
    }
}
