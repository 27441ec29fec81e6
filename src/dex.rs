//! Pokédex catalogue, game eras and dex list projection.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::forms::{self, Region};
use crate::normalize::title_case;
use crate::state::{DisplayPokemon, PokedexListEntry, PokemonDb, PokemonDetail};

/// Highest species id with a real National Dex number.
pub const MAX_SPECIES_ID: u32 = 1025;

pub const DEFAULT_ERA: &str = "Gen IX";

/// `(generation, first species id, last species id)`.
pub const GENERATIONS: [(u8, u32, u32); 9] = [
    (1, 1, 151),
    (2, 152, 251),
    (3, 252, 386),
    (4, 387, 493),
    (5, 494, 649),
    (6, 650, 721),
    (7, 722, 809),
    (8, 810, 905),
    (9, 906, 1025),
];

/// Game eras and their version groups, oldest first.
pub const ERA_GROUPS: [(&str, &[&str]); 9] = [
    ("Gen I", &["red-blue", "yellow"]),
    ("Gen II", &["gold-silver", "crystal"]),
    (
        "Gen III",
        &["ruby-sapphire", "emerald", "firered-leafgreen"],
    ),
    (
        "Gen IV",
        &["diamond-pearl", "platinum", "heartgold-soulsilver"],
    ),
    ("Gen V", &["black-white", "black-2-white-2"]),
    ("Gen VI", &["x-y", "omega-ruby-alpha-sapphire"]),
    (
        "Gen VII",
        &[
            "sun-moon",
            "ultra-sun-ultra-moon",
            "lets-go-pikachu-lets-go-eevee",
        ],
    ),
    (
        "Gen VIII",
        &[
            "sword-shield",
            "the-isle-of-armor",
            "the-crown-tundra",
            "brilliant-diamond-and-shining-pearl",
            "legends-arceus",
        ],
    ),
    (
        "Gen IX",
        &["scarlet-violet", "the-teal-mask", "the-indigo-disk"],
    ),
];

/// Game version to the version group it was released in.
const VERSION_GROUPS: [(&str, &str); 37] = [
    ("red", "red-blue"),
    ("blue", "red-blue"),
    ("yellow", "yellow"),
    ("gold", "gold-silver"),
    ("silver", "gold-silver"),
    ("crystal", "crystal"),
    ("ruby", "ruby-sapphire"),
    ("sapphire", "ruby-sapphire"),
    ("emerald", "emerald"),
    ("firered", "firered-leafgreen"),
    ("leafgreen", "firered-leafgreen"),
    ("diamond", "diamond-pearl"),
    ("pearl", "diamond-pearl"),
    ("platinum", "platinum"),
    ("heartgold", "heartgold-soulsilver"),
    ("soulsilver", "heartgold-soulsilver"),
    ("black", "black-white"),
    ("white", "black-white"),
    ("black-2", "black-2-white-2"),
    ("white-2", "black-2-white-2"),
    ("x", "x-y"),
    ("y", "x-y"),
    ("omega-ruby", "omega-ruby-alpha-sapphire"),
    ("alpha-sapphire", "omega-ruby-alpha-sapphire"),
    ("sun", "sun-moon"),
    ("moon", "sun-moon"),
    ("ultra-sun", "ultra-sun-ultra-moon"),
    ("ultra-moon", "ultra-sun-ultra-moon"),
    ("lets-go-pikachu", "lets-go-pikachu-lets-go-eevee"),
    ("lets-go-eevee", "lets-go-pikachu-lets-go-eevee"),
    ("sword", "sword-shield"),
    ("shield", "sword-shield"),
    ("brilliant-diamond", "brilliant-diamond-and-shining-pearl"),
    ("shining-pearl", "brilliant-diamond-and-shining-pearl"),
    ("legends-arceus", "legends-arceus"),
    ("scarlet", "scarlet-violet"),
    ("violet", "scarlet-violet"),
];

const ROMAN: [&str; 9] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

pub fn eras() -> impl Iterator<Item = &'static str> {
    ERA_GROUPS.iter().map(|(era, _)| *era)
}

/// Position of a version group in release order.
pub fn version_group_rank(version_group: &str) -> Option<usize> {
    ERA_GROUPS
        .iter()
        .flat_map(|(_, groups)| groups.iter())
        .position(|group| *group == version_group)
}

pub fn era_for_version_group(version_group: &str) -> Option<&'static str> {
    ERA_GROUPS
        .iter()
        .find(|(_, groups)| groups.contains(&version_group))
        .map(|(era, _)| *era)
}

pub fn version_groups_for_era(era: &str) -> &'static [&'static str] {
    ERA_GROUPS
        .iter()
        .find(|(name, _)| *name == era)
        .map(|(_, groups)| *groups)
        .unwrap_or(&[])
}

pub fn version_group_of(version: &str) -> Option<&'static str> {
    VERSION_GROUPS
        .iter()
        .find(|(name, _)| *name == version)
        .map(|(_, group)| *group)
}

/// Whether a game version belongs to one of the era's version groups.
pub fn era_has_version(era: &str, version: &str) -> bool {
    version_group_of(version).is_some_and(|group| version_groups_for_era(era).contains(&group))
}

/// `"Gen IV"` -> `4`.
pub fn era_number(era: &str) -> Option<u8> {
    let numeral = era.strip_prefix("Gen ")?;
    ROMAN
        .iter()
        .position(|roman| *roman == numeral)
        .map(|index| index as u8 + 1)
}

/// Generation a species id belongs to; ids past the known range sort last.
pub fn species_generation(species_id: u32) -> u8 {
    GENERATIONS
        .iter()
        .find(|(_, start, end)| (*start..=*end).contains(&species_id))
        .map(|(generation, _, _)| *generation)
        .unwrap_or(99)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DexCategory {
    Generation,
    Game,
    Other,
    EggGroup,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexInfo {
    pub id: String,
    pub name: String,
    pub category: DexCategory,
    pub era: Option<String>,
    pub version_group: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DexKind<'a> {
    National,
    Extra,
    Generation(u8),
    EggGroup(&'a str),
    Regional(&'a str),
}

impl PokedexInfo {
    pub fn kind(&self) -> DexKind<'_> {
        if let Some(group) = self.id.strip_prefix(EGG_GROUP_PREFIX) {
            return DexKind::EggGroup(group);
        }
        if let Some(generation) = self
            .id
            .strip_prefix("gen-")
            .and_then(|number| number.parse().ok())
        {
            return DexKind::Generation(generation);
        }
        match self.id.as_str() {
            "national" => DexKind::National,
            "extra" => DexKind::Extra,
            other => DexKind::Regional(other),
        }
    }
}

const EGG_GROUP_PREFIX: &str = "egg-group-";

// (id, name, category, era, version group)
type DexRow = (
    &'static str,
    &'static str,
    DexCategory,
    Option<&'static str>,
    Option<&'static str>,
);

const DEX_ROWS: [DexRow; 29] = [
    ("gen-1", "Generation I", DexCategory::Generation, Some("Gen I"), None),
    ("gen-2", "Generation II", DexCategory::Generation, Some("Gen II"), None),
    ("gen-3", "Generation III", DexCategory::Generation, Some("Gen III"), None),
    ("gen-4", "Generation IV", DexCategory::Generation, Some("Gen IV"), None),
    ("gen-5", "Generation V", DexCategory::Generation, Some("Gen V"), None),
    ("gen-6", "Generation VI", DexCategory::Generation, Some("Gen VI"), None),
    ("gen-7", "Generation VII", DexCategory::Generation, Some("Gen VII"), None),
    ("gen-8", "Generation VIII", DexCategory::Generation, Some("Gen VIII"), None),
    ("gen-9", "Generation IX", DexCategory::Generation, Some("Gen IX"), None),
    ("kanto", "Kanto (R/B/Y)", DexCategory::Game, Some("Gen I"), Some("red-blue")),
    ("original-johto", "Johto (G/S/C)", DexCategory::Game, Some("Gen II"), Some("gold-silver")),
    ("hoenn", "Hoenn (R/S/E)", DexCategory::Game, Some("Gen III"), Some("ruby-sapphire")),
    ("original-sinnoh", "Sinnoh (D/P)", DexCategory::Game, Some("Gen IV"), Some("diamond-pearl")),
    ("original-unova", "Unova (B/W)", DexCategory::Game, Some("Gen V"), Some("black-white")),
    ("updated-unova", "Unova (B2/W2)", DexCategory::Game, Some("Gen V"), Some("black-2-white-2")),
    ("kalos-central", "Kalos (Central)", DexCategory::Game, Some("Gen VI"), Some("x-y")),
    ("galar", "Galar (Sw/Sh)", DexCategory::Game, Some("Gen VIII"), Some("sword-shield")),
    ("paldea", "Paldea (S/V)", DexCategory::Game, Some("Gen IX"), Some("scarlet-violet")),
    ("national", "National", DexCategory::Other, None, None),
    ("updated-johto", "Johto (HG/SS)", DexCategory::Other, Some("Gen IV"), None),
    ("updated-hoenn", "Hoenn (OR/AS)", DexCategory::Other, Some("Gen VI"), None),
    ("extended-sinnoh", "Sinnoh (Plat.)", DexCategory::Other, Some("Gen IV"), None),
    ("updated-alola", "Alola (US/UM)", DexCategory::Other, Some("Gen VII"), None),
    ("hisui", "Hisui", DexCategory::Other, Some("Gen VIII"), None),
    ("isle-of-armor", "Isle of Armor", DexCategory::Other, Some("Gen VIII"), None),
    ("crown-tundra", "Crown Tundra", DexCategory::Other, Some("Gen VIII"), None),
    ("kitakami", "Kitakami", DexCategory::Other, Some("Gen IX"), None),
    ("blueberry", "Blueberry", DexCategory::Other, Some("Gen IX"), None),
    ("extra", "Extra (ID > 1025)", DexCategory::Other, None, None),
];

fn info_from_row(row: &DexRow) -> PokedexInfo {
    let (id, name, category, era, version_group) = *row;
    PokedexInfo {
        id: id.to_string(),
        name: name.to_string(),
        category,
        era: era.map(str::to_string),
        version_group: version_group.map(str::to_string),
    }
}

/// Every selectable dex, in catalogue order.
pub fn catalogue() -> Vec<PokedexInfo> {
    DEX_ROWS.iter().map(info_from_row).collect()
}

pub fn find_pokedex(id: &str) -> Option<PokedexInfo> {
    if let Some(group) = id.strip_prefix(EGG_GROUP_PREFIX) {
        return Some(egg_group_dex(group));
    }
    DEX_ROWS
        .iter()
        .find(|row| row.0 == id)
        .map(info_from_row)
}

pub fn egg_group_dex(group: &str) -> PokedexInfo {
    PokedexInfo {
        id: format!("{EGG_GROUP_PREFIX}{group}"),
        name: format!("{} Egg Group", title_case(group)),
        category: DexCategory::EggGroup,
        era: None,
        version_group: None,
    }
}

/// Regional form preferred by a dex.
pub fn region_for_dex(id: &str) -> Option<Region> {
    match id {
        "updated-alola" => Some(Region::Alola),
        "galar" | "isle-of-armor" | "crown-tundra" => Some(Region::Galar),
        "hisui" => Some(Region::Hisui),
        "paldea" | "kitakami" | "blueberry" => Some(Region::Paldea),
        _ => None,
    }
}

/// Membership data fetched for a dex before projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DexMembership {
    All,
    Species(HashSet<String>),
    Numbered(HashMap<String, u32>),
}

pub fn project_list(
    dex: &PokedexInfo,
    db: &PokemonDb,
    membership: &DexMembership,
) -> Vec<PokedexListEntry> {
    let mut entries = match dex.kind() {
        DexKind::EggGroup(_) => project_egg_group(db, membership),
        kind => project_dex(dex, kind, db, membership),
    };
    entries.sort_by_key(|entry| (entry.number, entry.id));
    entries
}

fn project_egg_group(db: &PokemonDb, membership: &DexMembership) -> Vec<PokedexListEntry> {
    let DexMembership::Species(members) = membership else {
        return Vec::new();
    };
    let groups = group_by_base(db.displayable.iter().filter(|pokemon| {
        db.form_info
            .get(&pokemon.name)
            .is_some_and(|info| members.contains(&info.species_name))
    }));
    groups
        .into_iter()
        .filter_map(|(base_id, forms)| {
            let chosen = default_form(db, &forms).or_else(|| forms.first().copied())?;
            Some(list_entry(chosen, base_id))
        })
        .collect()
}

fn project_dex(
    dex: &PokedexInfo,
    kind: DexKind<'_>,
    db: &PokemonDb,
    membership: &DexMembership,
) -> Vec<PokedexListEntry> {
    let dex_generation = era_number(dex.era.as_deref().unwrap_or(DEFAULT_ERA)).unwrap_or(9);
    let gated = !matches!(kind, DexKind::National | DexKind::Extra);

    let candidates = db
        .displayable
        .iter()
        .filter(|pokemon| !forms::is_gigantamax(&pokemon.name) && !forms::is_mega(&pokemon.name))
        .filter(|pokemon| {
            if !gated {
                return true;
            }
            let form_generation = forms::classify(&pokemon.name, db.form_info.get(&pokemon.name))
                .intro_generation()
                .unwrap_or(0);
            species_generation(pokemon.base_id) <= dex_generation
                && form_generation <= dex_generation
        });

    let region = region_for_dex(&dex.id);
    let picks = group_by_base(candidates)
        .into_iter()
        .flat_map(|(_, forms)| pick_forms(db, &forms, region))
        .filter(|pokemon| match kind {
            DexKind::Extra => pokemon.base_id > MAX_SPECIES_ID,
            DexKind::National => true,
            _ => pokemon.base_id <= MAX_SPECIES_ID,
        });

    match kind {
        DexKind::National => picks.map(|pokemon| list_entry(pokemon, pokemon.base_id)).collect(),
        DexKind::Extra => picks.map(|pokemon| list_entry(pokemon, pokemon.id)).collect(),
        DexKind::Generation(generation) => picks
            .filter(|pokemon| species_generation(pokemon.base_id) == generation)
            .map(|pokemon| list_entry(pokemon, pokemon.base_id))
            .collect(),
        DexKind::Regional(_) | DexKind::EggGroup(_) => {
            let DexMembership::Numbered(numbers) = membership else {
                return Vec::new();
            };
            picks
                .filter_map(|pokemon| {
                    let species = &db.form_info.get(&pokemon.name)?.species_name;
                    let number = numbers.get(species)?;
                    Some(list_entry(pokemon, *number))
                })
                .collect()
        }
    }
}

fn pick_forms<'a>(
    db: &PokemonDb,
    candidates: &[&'a DisplayPokemon],
    region: Option<Region>,
) -> Vec<&'a DisplayPokemon> {
    match region {
        Some(region) => {
            let regional: Vec<&DisplayPokemon> = candidates
                .iter()
                .copied()
                .filter(|pokemon| forms::region_of(&pokemon.name) == Some(region))
                .collect();
            if regional.is_empty() {
                default_form(db, candidates).into_iter().collect()
            } else {
                regional
            }
        }
        None => default_form(db, candidates)
            .or_else(|| candidates.first().copied())
            .into_iter()
            .collect(),
    }
}

fn group_by_base<'a>(
    pokemon: impl Iterator<Item = &'a DisplayPokemon>,
) -> BTreeMap<u32, Vec<&'a DisplayPokemon>> {
    let mut groups: BTreeMap<u32, Vec<&DisplayPokemon>> = BTreeMap::new();
    for entry in pokemon {
        groups.entry(entry.base_id).or_default().push(entry);
    }
    groups
}

fn default_form<'a>(db: &PokemonDb, forms: &[&'a DisplayPokemon]) -> Option<&'a DisplayPokemon> {
    forms.iter().copied().find(|pokemon| {
        db.form_info
            .get(&pokemon.name)
            .is_some_and(|info| info.is_default)
    })
}

fn list_entry(pokemon: &DisplayPokemon, number: u32) -> PokedexListEntry {
    PokedexListEntry {
        id: pokemon.id,
        base_id: pokemon.base_id,
        name: pokemon.name.clone(),
        url: pokemon.url.clone(),
        number,
        types: pokemon.types.clone(),
        has_gmax: pokemon.has_gmax,
    }
}

/// Era to open a detail page in: explicit context, then the form's own era,
/// then the newest game the Pokémon has moves in.
pub fn best_era(detail: &PokemonDetail, era_context: Option<&str>) -> String {
    if let Some(era) = era_context {
        return era.to_string();
    }
    if let Some(era) = forms::era_of(&detail.name) {
        return era.to_string();
    }
    detail
        .moves
        .iter()
        .filter_map(|learned| version_group_rank(&learned.version_group).map(|rank| (rank, learned)))
        .max_by_key(|(rank, _)| *rank)
        .and_then(|(_, learned)| era_for_version_group(&learned.version_group))
        .unwrap_or(DEFAULT_ERA)
        .to_string()
}

/// Eras the Pokémon has move data for, oldest first. Falls back to every era.
pub fn available_eras(detail: &PokemonDetail) -> Vec<&'static str> {
    let groups: HashSet<&str> = detail
        .moves
        .iter()
        .map(|learned| learned.version_group.as_str())
        .collect();
    let covered: Vec<&'static str> = ERA_GROUPS
        .iter()
        .filter(|(_, era_groups)| era_groups.iter().any(|group| groups.contains(group)))
        .map(|(era, _)| *era)
        .collect();
    if covered.is_empty() {
        eras().collect()
    } else {
        covered
    }
}

/// Last English Pokédex entry from a game in the era.
pub fn flavor_for_era<'a>(detail: &'a PokemonDetail, era: &str) -> Option<&'a str> {
    detail
        .flavor_entries
        .iter()
        .rev()
        .find(|entry| era_has_version(era, &entry.version))
        .map(|entry| entry.text.as_str())
}

/// Held items obtainable in the era with their rarities, e.g. `("Oran Berry", "50/5")`.
pub fn held_items_for_era(detail: &PokemonDetail, era: &str) -> Vec<(String, String)> {
    detail
        .held_items
        .iter()
        .filter_map(|item| {
            let mut rarities: Vec<u32> = Vec::new();
            for version in &item.versions {
                if era_has_version(era, &version.version) && !rarities.contains(&version.rarity) {
                    rarities.push(version.rarity);
                }
            }
            if rarities.is_empty() {
                return None;
            }
            let joined = rarities
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join("/");
            Some((title_case(&item.name), joined))
        })
        .collect()
}

/// Location areas where the Pokémon is found in the era, sorted and deduplicated.
pub fn locations_for_era(detail: &PokemonDetail, era: &str) -> Vec<String> {
    let names: BTreeSet<String> = detail
        .encounters
        .iter()
        .filter(|encounter| {
            encounter
                .versions
                .iter()
                .any(|version| era_has_version(era, version))
        })
        .map(|encounter| title_case(&encounter.location_area))
        .collect();
    names.into_iter().collect()
}

/// Form a detail page should show once an era is picked.
pub fn target_form_for_era(era: &str, detail: &PokemonDetail) -> Option<String> {
    let names: Vec<&str> = std::iter::once(detail.name.as_str())
        .chain(detail.other_forms.iter().map(|form| form.name.as_str()))
        .collect();
    let find = |region: Region| {
        names
            .iter()
            .find(|name| forms::region_of(name) == Some(region))
            .map(|name| name.to_string())
    };
    let regional = match era {
        "Gen VII" => find(Region::Alola),
        "Gen VIII" => find(Region::Galar).or_else(|| find(Region::Hisui)),
        "Gen IX" => find(Region::Paldea),
        _ => None,
    };
    regional.or_else(|| detail.default_form.clone())
}
