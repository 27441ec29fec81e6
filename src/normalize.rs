//! Raw PokeAPI payloads and their normalization into display records.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::assets;
use crate::dex::version_group_rank;
use crate::forms;
use crate::state::{
    AbilityRecord, AttackRecord, DexNumber, DisplayPokemon, Encounter, FlavorEntry, FormInfo,
    HeldItem, ItemRecord, LearnedMove, MachineRecord, PokemonAbility, PokemonDetail,
    PokemonFamily, PokemonRef, PokemonStat, VersionRarity,
};
use crate::type_chart::PokemonType;

pub const NO_EFFECT_TEXT: &str = "No effect description available.";

#[derive(Clone, Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ResourceList {
    pub results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemFlavorText {
    pub text: String,
    pub language: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VersionedFlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version_group: Option<NamedResource>,
    /// Species entries are keyed by game version instead of version group.
    pub version: Option<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemPayload {
    pub id: u32,
    pub name: Option<String>,
    pub cost: Option<u32>,
    pub category: Option<NamedResource>,
    pub flavor_text_entries: Option<Vec<ItemFlavorText>>,
    pub effect_entries: Option<Vec<EffectEntry>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AbilityPokemonSlot {
    pub pokemon: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AbilityPayload {
    pub id: u32,
    pub name: Option<String>,
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<VersionedFlavorText>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub pokemon: Vec<AbilityPokemonSlot>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MachinePayload {
    pub item: Option<NamedResource>,
    #[serde(rename = "move")]
    pub move_ref: Option<NamedResource>,
    pub version_group: Option<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovePayload {
    pub id: u32,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub move_type: Option<NamedResource>,
    pub damage_class: Option<NamedResource>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    pub effect_chance: Option<u32>,
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<VersionedFlavorText>,
    #[serde(default)]
    pub learned_by_pokemon: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Variety {
    pub is_default: bool,
    pub pokemon: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokedexNumberEntry {
    pub entry_number: u32,
    pub pokedex: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SpeciesPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub varieties: Vec<Variety>,
    pub evolution_chain: Option<ApiResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<VersionedFlavorText>,
    #[serde(default)]
    pub genera: Vec<GenusEntry>,
    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,
    pub growth_rate: Option<NamedResource>,
    #[serde(default)]
    pub pokedex_numbers: Vec<PokedexNumberEntry>,
    pub capture_rate: Option<u32>,
    pub gender_rate: Option<i32>,
    pub base_happiness: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

/// The part of a `pokemon/{id}` document the bulk load needs.
#[derive(Clone, Debug, Deserialize)]
pub struct FormPayload {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VersionGroupDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HeldItemVersion {
    pub rarity: u32,
    pub version: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HeldItemSlot {
    pub item: NamedResource,
    #[serde(default)]
    pub version_details: Vec<HeldItemVersion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EncounterVersion {
    pub version: NamedResource,
}

/// One entry of a `pokemon/{id}/encounters` document.
#[derive(Clone, Debug, Deserialize)]
pub struct EncounterPayload {
    pub location_area: NamedResource,
    #[serde(default)]
    pub version_details: Vec<EncounterVersion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    pub species: NamedResource,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub held_items: Vec<HeldItemSlot>,
    pub location_area_encounters: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokedexEntryPayload {
    pub entry_number: u32,
    pub pokemon_species: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PokedexPayload {
    #[serde(default)]
    pub pokemon_entries: Vec<PokedexEntryPayload>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EggGroupPayload {
    #[serde(default)]
    pub pokemon_species: Vec<NamedResource>,
}

/// Why a record was left out of a bulk load.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("no English flavor text")]
    NoEnglishFlavorText,
    #[error("no resolvable forms")]
    NoForms,
    #[error("default form `{0}` could not be resolved")]
    MissingDefaultForm(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Keeps accepted records from one chunk. Each rejection is logged at debug,
/// with a single warning per chunk summarizing the drops.
pub fn settle<'a, T>(
    kind: &str,
    chunk: usize,
    outcomes: impl IntoIterator<Item = (&'a str, Result<T, Rejection>)>,
) -> Vec<T> {
    let mut kept = Vec::new();
    let mut dropped = 0usize;
    for (source, outcome) in outcomes {
        match outcome {
            Ok(record) => kept.push(record),
            Err(reason) => {
                dropped += 1;
                debug!(kind, source, %reason, "dropping record");
            }
        }
    }
    if dropped > 0 {
        warn!(kind, chunk, dropped, kept = kept.len(), "dropped records while loading");
    }
    kept
}

pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

pub fn clean_text(text: &str) -> String {
    text.replace(['\n', '\u{000C}'], " ")
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"thunder-stone"` -> `"Thunder Stone"`.
pub fn title_case(text: &str) -> String {
    text.replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"generation-iv"` -> `"Gen iv"`.
pub fn format_generation(name: &str) -> String {
    let spaced = name.replace('-', " ");
    match spaced.strip_prefix("generation") {
        Some(rest) => format!("Gen{rest}"),
        None => spaced,
    }
}

/// Height in decimetres as `"1.7 m (5'07\")"`.
pub fn format_height(decimetres: u32) -> String {
    let metres = decimetres as f64 / 10.0;
    let total_inches = (decimetres as f64 * 3.937).round() as u32;
    format!(
        "{metres:.1} m ({}'{:02}\")",
        total_inches / 12,
        total_inches % 12
    )
}

/// Weight in hectograms as `"90.5 kg (199.5 lbs)"`.
pub fn format_weight(hectograms: u32) -> String {
    let kilograms = hectograms as f64 / 10.0;
    let pounds = hectograms as f64 * 0.220462;
    format!("{kilograms:.1} kg ({pounds:.1} lbs)")
}

pub fn item_category(api_category: &str) -> String {
    let bucket = match api_category {
        "standard-balls" | "special-balls" | "apricorn-balls" => "Poké Balls",
        "healing" | "status-cures" | "revival" | "pp-recovery" | "vitamins" => "Medicine",
        "stat-boosts" | "in-a-pinch" | "picky-healing" | "type-enhancement"
        | "miracle-shooter" | "type-protection" | "flutes" => "Battle Items",
        "held-items" | "choice" | "effort-training" | "bad-held-items" | "training"
        | "species-specific" => "Held Items",
        "mega-stones" | "z-crystals" => "Mega Stones & Z-Crystals",
        "plates" | "memories" | "drives" => "Plates, Drives & Memories",
        "gems" => "Gems",
        "evolution" => "Evolution Items",
        "all-machines" => "TMs & HMs",
        "berries" => "Berries",
        "loot" | "fossils" | "dex-completion" => "Valuable Items",
        "key-items" | "plot-advancement" | "unused" | "data-cards" => "Key Items",
        "curry-ingredients" | "sandwich-ingredients" | "picnic" => "Ingredients",
        "catching-bonus" | "gameplay" | "other" | "collectibles" => "Other",
        other => return title_case(other),
    };
    bucket.to_string()
}

fn is_english(language: &NamedResource) -> bool {
    language.name == "en"
}

fn english_effect(entries: &[EffectEntry]) -> Option<&EffectEntry> {
    entries.iter().find(|entry| is_english(&entry.language))
}

fn last_english_flavor(entries: &[VersionedFlavorText]) -> Option<&VersionedFlavorText> {
    entries.iter().rev().find(|entry| is_english(&entry.language))
}

fn pokemon_ref(resource: &NamedResource) -> Option<PokemonRef> {
    Some(PokemonRef {
        name: resource.name.clone(),
        url: resource.url.clone(),
        id: id_from_url(&resource.url)?,
    })
}

fn learners(resources: &[NamedResource]) -> Vec<PokemonRef> {
    resources
        .iter()
        .filter(|resource| !forms::is_totem(&resource.name))
        .filter_map(pokemon_ref)
        .collect()
}

pub fn extract_item(payload: ItemPayload) -> Result<ItemRecord, Rejection> {
    let name = payload.name.ok_or(Rejection::MissingField("name"))?;
    let category = payload.category.ok_or(Rejection::MissingField("category"))?;
    let flavor_entries = payload
        .flavor_text_entries
        .ok_or(Rejection::MissingField("flavor_text_entries"))?;
    let effect_entries = payload
        .effect_entries
        .ok_or(Rejection::MissingField("effect_entries"))?;

    let flavor = flavor_entries
        .iter()
        .rev()
        .find(|entry| is_english(&entry.language))
        .ok_or(Rejection::NoEnglishFlavorText)?;

    let mut seen = HashSet::new();
    let games = flavor_entries
        .iter()
        .filter(|entry| seen.insert(entry.version_group.name.clone()))
        .map(|entry| title_case(&entry.version_group.name))
        .collect();

    let effect = english_effect(&effect_entries)
        .map(|entry| entry.short_effect.clone())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_EFFECT_TEXT.to_string());

    Ok(ItemRecord {
        id: payload.id,
        sprite_url: assets::item_sprite_url(&name),
        name: name.replace('-', " "),
        cost: payload.cost.unwrap_or_default(),
        category: item_category(&category.name),
        flavor_text: clean_text(&flavor.text),
        effect,
        games,
    })
}

pub fn extract_ability(payload: AbilityPayload) -> Result<AbilityRecord, Rejection> {
    let name = payload.name.ok_or(Rejection::MissingField("name"))?;
    let flavor = last_english_flavor(&payload.flavor_text_entries)
        .ok_or(Rejection::NoEnglishFlavorText)?;
    let effect = english_effect(&payload.effect_entries)
        .map(|entry| clean_text(&entry.effect))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_EFFECT_TEXT.to_string());
    let pokemon = payload
        .pokemon
        .iter()
        .map(|slot| slot.pokemon.clone())
        .collect::<Vec<_>>();

    Ok(AbilityRecord {
        id: payload.id,
        name: name.replace('-', " "),
        flavor_text: clean_text(&flavor.flavor_text),
        effect,
        generation: payload
            .generation
            .map(|generation| format_generation(&generation.name))
            .unwrap_or_default(),
        pokemon: learners(&pokemon),
    })
}

/// Groups TM/HM records by move name (spaced), most recent version group first.
pub fn build_machine_map(machines: Vec<MachinePayload>) -> HashMap<String, Vec<MachineRecord>> {
    let mut map: HashMap<String, Vec<MachineRecord>> = HashMap::new();
    for machine in machines {
        let (Some(item), Some(move_ref), Some(version_group)) =
            (machine.item, machine.move_ref, machine.version_group)
        else {
            continue;
        };
        map.entry(move_ref.name.replace('-', " "))
            .or_default()
            .push(MachineRecord {
                version_group: version_group.name,
                tm_number: machine_label(&item.name),
            });
    }
    for records in map.values_mut() {
        records.sort_by_key(|record| std::cmp::Reverse(version_group_rank(&record.version_group)));
    }
    map
}

/// `"tm-01"` -> `"TM01"`.
fn machine_label(item_name: &str) -> String {
    item_name.to_uppercase().replacen('-', "", 1)
}

pub fn extract_attack(
    payload: MovePayload,
    machines: &HashMap<String, Vec<MachineRecord>>,
) -> Result<AttackRecord, Rejection> {
    let name = payload.name.ok_or(Rejection::MissingField("name"))?;
    let move_type = payload.move_type.ok_or(Rejection::MissingField("type"))?;
    let damage_class = payload
        .damage_class
        .ok_or(Rejection::MissingField("damage_class"))?;

    let chance = payload
        .effect_chance
        .map(|chance| chance.to_string())
        .unwrap_or_default();
    let english = english_effect(&payload.effect_entries);
    let fill = |text: &str| clean_text(&text.replace("$effect_chance", &chance));
    let effect = english
        .map(|entry| fill(&entry.effect))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_EFFECT_TEXT.to_string());
    let short_effect = english
        .map(|entry| fill(&entry.short_effect))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_EFFECT_TEXT.to_string());

    let spaced = name.replace('-', " ");
    Ok(AttackRecord {
        id: payload.id,
        machines: machines.get(&spaced).cloned().unwrap_or_default(),
        name: spaced,
        move_type: capitalize(&move_type.name),
        damage_class: damage_class.name,
        power: payload.power,
        pp: payload.pp,
        accuracy: payload.accuracy,
        effect_chance: payload.effect_chance,
        effect,
        short_effect,
        flavor_text: last_english_flavor(&payload.flavor_text_entries)
            .map(|entry| clean_text(&entry.flavor_text))
            .unwrap_or_default(),
        generation: payload
            .generation
            .map(|generation| format_generation(&generation.name))
            .unwrap_or_default(),
        learned_by: learners(&payload.learned_by_pokemon),
    })
}

/// One species folded into its family and displayable forms.
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyBuild {
    pub family: PokemonFamily,
    pub forms: Vec<DisplayPokemon>,
}

/// Form info for every variety that has a known URL.
pub fn form_info_entries(
    species: &SpeciesPayload,
    urls: &HashMap<String, String>,
) -> Vec<(String, FormInfo)> {
    species
        .varieties
        .iter()
        .filter(|variety| urls.contains_key(&variety.pokemon.name))
        .map(|variety| {
            (
                variety.pokemon.name.clone(),
                FormInfo {
                    species_name: species.name.clone(),
                    is_default: variety.is_default,
                },
            )
        })
        .collect()
}

/// Variety URLs the family build needs details for.
pub fn variety_urls(species: &SpeciesPayload, urls: &HashMap<String, String>) -> Vec<String> {
    species
        .varieties
        .iter()
        .filter_map(|variety| urls.get(&variety.pokemon.name).cloned())
        .collect()
}

pub fn build_family(
    species: &SpeciesPayload,
    details: &HashMap<String, FormPayload>,
    urls: &HashMap<String, String>,
) -> Result<FamilyBuild, Rejection> {
    struct Resolved<'a> {
        reference: PokemonRef,
        types: Vec<PokemonType>,
        is_default: bool,
        name: &'a str,
    }

    let resolved: Vec<Resolved> = species
        .varieties
        .iter()
        .filter(|variety| !forms::is_totem(&variety.pokemon.name))
        .filter_map(|variety| {
            let name = variety.pokemon.name.as_str();
            let detail = details.get(name)?;
            let url = urls.get(name)?;
            Some(Resolved {
                reference: PokemonRef {
                    name: name.to_string(),
                    url: url.clone(),
                    id: id_from_url(url)?,
                },
                types: types_of(&detail.types),
                is_default: variety.is_default,
                name,
            })
        })
        .collect();

    if resolved.is_empty() {
        return Err(Rejection::NoForms);
    }

    let base = match species.varieties.iter().find(|variety| variety.is_default) {
        Some(default) => resolved
            .iter()
            .find(|form| form.name == default.pokemon.name)
            .ok_or_else(|| Rejection::MissingDefaultForm(default.pokemon.name.clone()))?,
        None => &resolved[0],
    };

    let has_gmax = resolved.iter().any(|form| forms::is_gigantamax(form.name));

    let family = PokemonFamily {
        base: PokemonRef {
            name: species.name.clone(),
            url: base.reference.url.clone(),
            id: species.id,
        },
        forms: resolved
            .iter()
            .filter(|form| form.reference.id != base.reference.id)
            .map(|form| form.reference.clone())
            .collect(),
    };

    let forms = resolved
        .iter()
        .map(|form| DisplayPokemon {
            id: form.reference.id,
            base_id: species.id,
            name: form.reference.name.clone(),
            url: form.reference.url.clone(),
            types: form.types.clone(),
            has_gmax: has_gmax && form.is_default,
        })
        .collect();

    Ok(FamilyBuild { family, forms })
}

pub fn types_of(slots: &[TypeSlot]) -> Vec<PokemonType> {
    slots
        .iter()
        .filter_map(|slot| PokemonType::from_api(&slot.type_info.name))
        .collect()
}

pub fn extract_detail(
    pokemon: PokemonPayload,
    species: SpeciesPayload,
    other_forms: Vec<PokemonRef>,
    encounters: Vec<EncounterPayload>,
) -> PokemonDetail {
    let moves = pokemon
        .moves
        .iter()
        .flat_map(|slot| {
            slot.version_group_details.iter().map(|detail| LearnedMove {
                name: slot.move_ref.name.clone(),
                method: detail.move_learn_method.name.clone(),
                level: detail.level_learned_at,
                version_group: detail.version_group.name.clone(),
            })
        })
        .collect();

    PokemonDetail {
        id: pokemon.id,
        name: pokemon.name,
        species_name: species.name.clone(),
        species_id: species.id,
        types: types_of(&pokemon.types),
        stats: pokemon
            .stats
            .into_iter()
            .map(|slot| PokemonStat {
                name: slot.stat.name,
                value: slot.base_stat,
                effort: slot.effort,
            })
            .collect(),
        abilities: pokemon
            .abilities
            .into_iter()
            .map(|slot| PokemonAbility {
                name: slot.ability.name,
                hidden: slot.is_hidden,
            })
            .collect(),
        height: pokemon.height.unwrap_or_default(),
        weight: pokemon.weight.unwrap_or_default(),
        genus: species
            .genera
            .iter()
            .find(|entry| is_english(&entry.language))
            .map(|entry| entry.genus.clone()),
        flavor_entries: species
            .flavor_text_entries
            .iter()
            .filter(|entry| is_english(&entry.language))
            .filter_map(|entry| {
                Some(FlavorEntry {
                    version: entry.version.as_ref()?.name.clone(),
                    text: clean_text(&entry.flavor_text),
                })
            })
            .collect(),
        egg_groups: species
            .egg_groups
            .iter()
            .map(|group| group.name.clone())
            .collect(),
        growth_rate: species.growth_rate.as_ref().map(|rate| rate.name.clone()),
        capture_rate: species.capture_rate,
        gender_rate: species.gender_rate,
        base_happiness: species.base_happiness,
        held_items: pokemon
            .held_items
            .into_iter()
            .map(|slot| HeldItem {
                name: slot.item.name,
                versions: slot
                    .version_details
                    .into_iter()
                    .map(|detail| VersionRarity {
                        version: detail.version.name,
                        rarity: detail.rarity,
                    })
                    .collect(),
            })
            .collect(),
        encounters: encounters
            .into_iter()
            .map(|encounter| Encounter {
                location_area: encounter.location_area.name,
                versions: encounter
                    .version_details
                    .into_iter()
                    .map(|detail| detail.version.name)
                    .collect(),
            })
            .collect(),
        evolution_chain_url: species.evolution_chain.as_ref().map(|chain| chain.url.clone()),
        default_form: species
            .varieties
            .iter()
            .find(|variety| variety.is_default)
            .map(|variety| variety.pokemon.name.clone()),
        other_forms,
        pokedex_numbers: species
            .pokedex_numbers
            .iter()
            .map(|entry| DexNumber {
                pokedex: entry.pokedex.name.clone(),
                number: entry.entry_number,
            })
            .collect(),
        moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn from<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    fn en() -> serde_json::Value {
        json!({"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"})
    }

    fn fr() -> serde_json::Value {
        json!({"name": "fr", "url": "https://pokeapi.co/api/v2/language/5/"})
    }

    fn vg(name: &str) -> serde_json::Value {
        json!({"name": name, "url": "https://pokeapi.co/api/v2/version-group/1/"})
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/10107/"), Some(10107));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(clean_text("A\nB\u{000C}C"), "A B C");
        assert_eq!(title_case("black-2-white-2"), "Black 2 White 2");
        assert_eq!(format_generation("generation-iv"), "Gen iv");
        assert_eq!(format_height(17), "1.7 m (5'07\")");
        assert_eq!(format_weight(905), "90.5 kg (199.5 lbs)");
    }

    #[test]
    fn test_item_category_buckets() {
        assert_eq!(item_category("apricorn-balls"), "Poké Balls");
        assert_eq!(item_category("z-crystals"), "Mega Stones & Z-Crystals");
        assert_eq!(item_category("sandwich-ingredients"), "Ingredients");
        assert_eq!(item_category("nature-mints"), "Nature Mints");
    }

    #[test]
    fn test_extract_item_uses_last_english_flavor() {
        let payload: ItemPayload = from(json!({
            "id": 1,
            "name": "master-ball",
            "cost": 0,
            "category": {"name": "standard-balls", "url": ""},
            "flavor_text_entries": [
                {"text": "Old\ntext", "language": en(), "version_group": vg("x-y")},
                {"text": "New\u{000C}text", "language": en(), "version_group": vg("sword-shield")},
                {"text": "Texte", "language": fr(), "version_group": vg("sword-shield")}
            ],
            "effect_entries": [
                {"effect": "Catches", "short_effect": "Always catches.", "language": en()}
            ]
        }));

        let item = extract_item(payload).unwrap();

        assert_eq!(item.name, "master ball");
        assert_eq!(item.category, "Poké Balls");
        assert_eq!(item.flavor_text, "New text");
        assert_eq!(item.effect, "Always catches.");
        assert_eq!(item.games, vec!["X Y".to_string(), "Sword Shield".to_string()]);
    }

    #[test]
    fn test_extract_item_rejects_missing_english() {
        let payload: ItemPayload = from(json!({
            "id": 2,
            "name": "odd-thing",
            "category": {"name": "unused", "url": ""},
            "flavor_text_entries": [
                {"text": "Texte", "language": fr(), "version_group": vg("x-y")}
            ],
            "effect_entries": []
        }));
        assert_eq!(extract_item(payload), Err(Rejection::NoEnglishFlavorText));

        let missing: ItemPayload = from(json!({"id": 3, "name": "x"}));
        assert_eq!(extract_item(missing), Err(Rejection::MissingField("category")));
    }

    #[test]
    fn test_extract_ability_excludes_totems() {
        let payload: AbilityPayload = from(json!({
            "id": 65,
            "name": "overgrow",
            "generation": {"name": "generation-iii", "url": ""},
            "flavor_text_entries": [
                {"flavor_text": "Powers up\nGrass moves.", "language": en(), "version_group": vg("sword-shield")}
            ],
            "effect_entries": [],
            "pokemon": [
                {"pokemon": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}},
                {"pokemon": {"name": "lurantis-totem", "url": "https://pokeapi.co/api/v2/pokemon/10128/"}}
            ]
        }));

        let ability = extract_ability(payload).unwrap();

        assert_eq!(ability.generation, "Gen iii");
        assert_eq!(ability.effect, NO_EFFECT_TEXT);
        assert_eq!(ability.flavor_text, "Powers up Grass moves.");
        assert_eq!(ability.pokemon.len(), 1);
        assert_eq!(ability.pokemon[0].id, 1);
    }

    #[test]
    fn test_machines_sort_newest_first_and_attach_to_moves() {
        let machines: Vec<MachinePayload> = from(json!([
            {"item": {"name": "tm-06", "url": ""}, "move": {"name": "toxic", "url": ""}, "version_group": vg("red-blue")},
            {"item": {"name": "tm-06", "url": ""}, "move": {"name": "toxic", "url": ""}, "version_group": vg("sun-moon")},
            {"item": {"name": "tm-01", "url": ""}, "move": null, "version_group": vg("x-y")}
        ]));
        let map = build_machine_map(machines);
        assert_eq!(map.len(), 1);
        assert_eq!(map["toxic"][0].version_group, "sun-moon");
        assert_eq!(map["toxic"][0].tm_number, "TM06");

        let payload: MovePayload = from(json!({
            "id": 92,
            "name": "toxic",
            "type": {"name": "poison", "url": ""},
            "damage_class": {"name": "status", "url": ""},
            "accuracy": 90,
            "pp": 10,
            "effect_chance": 30,
            "effect_entries": [
                {"effect": "Badly poisons.", "short_effect": "$effect_chance% chance.", "language": en()}
            ],
            "learned_by_pokemon": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]
        }));
        let attack = extract_attack(payload, &map).unwrap();
        assert_eq!(attack.move_type, "Poison");
        assert_eq!(attack.short_effect, "30% chance.");
        assert_eq!(attack.machines.len(), 2);
        assert_eq!(attack.flavor_text, "");
    }

    fn meowth_species() -> SpeciesPayload {
        from(json!({
            "id": 52,
            "name": "meowth",
            "varieties": [
                {"is_default": true, "pokemon": {"name": "meowth", "url": "https://pokeapi.co/api/v2/pokemon/52/"}},
                {"is_default": false, "pokemon": {"name": "meowth-alola", "url": "https://pokeapi.co/api/v2/pokemon/10107/"}},
                {"is_default": false, "pokemon": {"name": "meowth-gmax", "url": "https://pokeapi.co/api/v2/pokemon/10200/"}}
            ]
        }))
    }

    fn meowth_urls() -> HashMap<String, String> {
        [
            ("meowth", "https://pokeapi.co/api/v2/pokemon/52/"),
            ("meowth-alola", "https://pokeapi.co/api/v2/pokemon/10107/"),
            ("meowth-gmax", "https://pokeapi.co/api/v2/pokemon/10200/"),
        ]
        .into_iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect()
    }

    fn form(name: &str, ty: &str) -> (String, FormPayload) {
        (
            name.to_string(),
            from(json!({"name": name, "types": [{"type": {"name": ty, "url": ""}}]})),
        )
    }

    #[test]
    fn test_build_family_keeps_base_out_of_forms() {
        let details: HashMap<String, FormPayload> = [
            form("meowth", "normal"),
            form("meowth-alola", "dark"),
            form("meowth-gmax", "normal"),
        ]
        .into_iter()
        .collect();

        let build = build_family(&meowth_species(), &details, &meowth_urls()).unwrap();

        assert_eq!(build.family.base.id, 52);
        assert_eq!(build.family.base.url, "https://pokeapi.co/api/v2/pokemon/52/");
        let form_ids: Vec<u32> = build.family.forms.iter().map(|form| form.id).collect();
        assert_eq!(form_ids, vec![10107, 10200]);
        assert!(build.forms.iter().all(|form| form.base_id == 52));
        let gmax_flags: Vec<bool> = build.forms.iter().map(|form| form.has_gmax).collect();
        assert_eq!(gmax_flags, vec![true, false, false]);
        assert_eq!(build.forms[1].types, vec![PokemonType::Dark]);
    }

    #[test]
    fn test_build_family_rejects_unresolved_default() {
        let details: HashMap<String, FormPayload> =
            [form("meowth-alola", "dark")].into_iter().collect();
        assert_eq!(
            build_family(&meowth_species(), &details, &meowth_urls()),
            Err(Rejection::MissingDefaultForm("meowth".to_string()))
        );
        assert_eq!(
            build_family(&meowth_species(), &HashMap::new(), &meowth_urls()),
            Err(Rejection::NoForms)
        );
    }

    #[test]
    fn test_form_info_entries_cover_known_varieties() {
        let mut urls = meowth_urls();
        urls.remove("meowth-gmax");
        let entries = form_info_entries(&meowth_species(), &urls);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].1.is_default);
        assert_eq!(entries[1].1.species_name, "meowth");
    }

    #[test]
    fn test_settle_keeps_accepted() {
        let kept = settle(
            "item",
            0,
            vec![
                ("a", Ok(1)),
                ("b", Err(Rejection::NoEnglishFlavorText)),
                ("c", Ok(3)),
            ],
        );
        assert_eq!(kept, vec![1, 3]);
    }

    fn version(name: &str) -> serde_json::Value {
        json!({"name": name, "url": "https://pokeapi.co/api/v2/version/1/"})
    }

    #[test]
    fn test_extract_detail_keeps_training_and_versioned_data() {
        let pokemon: PokemonPayload = from(json!({
            "id": 25,
            "name": "pikachu",
            "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
            ],
            "held_items": [{
                "item": {"name": "light-ball", "url": ""},
                "version_details": [{"rarity": 5, "version": version("sword")}]
            }],
            "location_area_encounters": "https://pokeapi.co/api/v2/pokemon/25/encounters"
        }));
        let species: SpeciesPayload = from(json!({
            "id": 25,
            "name": "pikachu",
            "capture_rate": 190,
            "gender_rate": 4,
            "base_happiness": 50,
            "flavor_text_entries": [
                {"flavor_text": "Red\ntext", "language": en(), "version": version("red")},
                {"flavor_text": "Rouge", "language": fr(), "version": version("red")},
                {"flavor_text": "Sword text", "language": en(), "version": version("sword")}
            ]
        }));
        let encounters: Vec<EncounterPayload> = from(json!([{
            "location_area": {"name": "viridian-forest-area", "url": ""},
            "version_details": [{"version": version("red")}, {"version": version("blue")}]
        }]));

        let detail = extract_detail(pokemon, species, Vec::new(), encounters);

        assert_eq!(detail.stats[1].effort, 2);
        assert_eq!(detail.capture_rate, Some(190));
        assert_eq!(detail.gender_rate, Some(4));
        assert_eq!(detail.base_happiness, Some(50));
        assert_eq!(
            detail.flavor_entries,
            vec![
                FlavorEntry {
                    version: "red".to_string(),
                    text: "Red text".to_string(),
                },
                FlavorEntry {
                    version: "sword".to_string(),
                    text: "Sword text".to_string(),
                },
            ]
        );
        assert_eq!(detail.held_items[0].versions[0].rarity, 5);
        assert_eq!(detail.encounters[0].versions, vec!["red", "blue"]);
    }
}
