use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::dex::{self, PokedexInfo};
use crate::evolution::EvolutionNode;
use crate::type_chart::{self, PokemonType, Ruleset};

pub const DEFAULT_HISTORY_LIMIT: usize = 32;
pub const SEARCH_RESULT_LIMIT: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
    pub id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonFamily {
    /// Species name and id, with the URL of its base form.
    pub base: PokemonRef,
    pub forms: Vec<PokemonRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayPokemon {
    pub id: u32,
    pub base_id: u32,
    pub name: String,
    pub url: String,
    pub types: Vec<PokemonType>,
    pub has_gmax: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    pub species_name: String,
    pub is_default: bool,
}

/// Everything the bulk Pokémon load produces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonDb {
    pub families: Vec<PokemonFamily>,
    pub displayable: Vec<DisplayPokemon>,
    /// Form name -> `pokemon/{id}` URL.
    pub urls: HashMap<String, String>,
    pub form_info: HashMap<String, FormInfo>,
}

impl PokemonDb {
    pub fn is_empty(&self) -> bool {
        self.displayable.is_empty()
    }

    pub fn species_of(&self, form: &str) -> Option<&str> {
        self.form_info
            .get(form)
            .map(|info| info.species_name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokedexListEntry {
    pub id: u32,
    pub base_id: u32,
    pub name: String,
    pub url: String,
    pub number: u32,
    pub types: Vec<PokemonType>,
    pub has_gmax: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: u32,
    pub name: String,
    pub cost: u32,
    pub category: String,
    pub flavor_text: String,
    pub effect: String,
    pub games: Vec<String>,
    pub sprite_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub id: u32,
    pub name: String,
    pub flavor_text: String,
    pub effect: String,
    pub generation: String,
    pub pokemon: Vec<PokemonRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineRecord {
    pub version_group: String,
    pub tm_number: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub id: u32,
    pub name: String,
    pub move_type: String,
    pub damage_class: String,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    pub effect_chance: Option<u32>,
    pub effect: String,
    pub short_effect: String,
    pub flavor_text: String,
    pub generation: String,
    pub machines: Vec<MachineRecord>,
    pub learned_by: Vec<PokemonRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub value: u32,
    /// EV yield when defeated.
    #[serde(default)]
    pub effort: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub name: String,
    pub hidden: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnedMove {
    pub name: String,
    pub method: String,
    pub level: u32,
    pub version_group: String,
}

/// One game's chance of a wild Pokémon holding an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VersionRarity {
    pub version: String,
    pub rarity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeldItem {
    pub name: String,
    pub versions: Vec<VersionRarity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub location_area: String,
    pub versions: Vec<String>,
}

/// English Pokédex text for one game version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlavorEntry {
    pub version: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DexNumber {
    pub pokedex: String,
    pub number: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub species_name: String,
    pub species_id: u32,
    pub types: Vec<PokemonType>,
    pub stats: Vec<PokemonStat>,
    pub abilities: Vec<PokemonAbility>,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub genus: Option<String>,
    pub flavor_entries: Vec<FlavorEntry>,
    pub egg_groups: Vec<String>,
    pub growth_rate: Option<String>,
    pub capture_rate: Option<u32>,
    /// Female chance in eighths; `-1` is genderless.
    pub gender_rate: Option<i32>,
    pub base_happiness: Option<u32>,
    pub held_items: Vec<HeldItem>,
    pub encounters: Vec<Encounter>,
    pub evolution_chain_url: Option<String>,
    pub default_form: Option<String>,
    pub other_forms: Vec<PokemonRef>,
    pub pokedex_numbers: Vec<DexNumber>,
    pub moves: Vec<LearnedMove>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    #[default]
    Home,
    Chart,
    Pokedex,
    Items,
    Abilities,
    Attacks,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::Chart,
        View::Pokedex,
        View::Items,
        View::Abilities,
        View::Attacks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Chart => "Type Chart",
            View::Pokedex => "Pokédex",
            View::Items => "Items",
            View::Abilities => "Abilities",
            View::Attacks => "Attacks",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeMode {
    #[default]
    Selection,
    List,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemMode {
    #[default]
    Categories,
    List,
}

/// Sub-mode of the abilities and attacks views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListMode {
    #[default]
    List,
    Detail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub view: View,
    pub home_mode: HomeMode,
    pub url: Option<String>,
}

/// Back-navigation stack holding at most `limit` entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for NavHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl NavHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Pushes an entry, dropping the oldest once the limit is reached.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Monotonic tokens; a completion is applied only if it carries the latest one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTokens {
    pub list: u64,
    pub detail: u64,
    pub evolution: u64,
}

impl RequestTokens {
    pub fn next_list(&mut self) -> u64 {
        self.list += 1;
        self.list
    }

    pub fn next_detail(&mut self) -> u64 {
        self.detail += 1;
        self.detail
    }

    pub fn next_evolution(&mut self) -> u64 {
        self.evolution += 1;
        self.evolution
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingFlags {
    pub pokemon: bool,
    pub items: bool,
    pub abilities: bool,
    pub attacks: bool,
}

impl LoadingFlags {
    pub fn all() -> Self {
        Self {
            pokemon: true,
            items: true,
            abilities: true,
            attacks: true,
        }
    }

    pub fn any(&self) -> bool {
        self.pokemon || self.items || self.abilities || self.attacks
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub ruleset: Ruleset,
    pub defenders: Vec<PokemonType>,
    pub cursor: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeState {
    pub mode: HomeMode,
    pub selected_dex: Option<PokedexInfo>,
    pub list: Vec<PokedexListEntry>,
    pub list_loading: bool,
    pub catalogue_cursor: usize,
    pub list_cursor: usize,
    /// Species to put the cursor on once the list arrives.
    pub highlight_species: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailState {
    pub url: Option<String>,
    pub entry: Option<PokemonDetail>,
    pub loading: bool,
    pub failed: bool,
    pub active_form: Option<String>,
    pub evolution: Option<EvolutionNode>,
    pub evolution_loading: bool,
    pub era: Option<String>,
    pub era_context: Option<String>,
    pub cursor: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemViewState {
    pub mode: ItemMode,
    pub category: Option<String>,
    pub category_cursor: usize,
    pub cursor: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityViewState {
    pub mode: ListMode,
    pub filter: String,
    pub filtering: bool,
    pub selected: Option<AbilityRecord>,
    pub cursor: usize,
    pub pokemon_cursor: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackViewState {
    pub mode: ListMode,
    pub selected: Option<AttackRecord>,
    pub cursor: usize,
    pub pokemon_cursor: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub term: String,
    /// Keystrokes go to the search box.
    pub active: bool,
    pub cursor: usize,
}

impl SearchState {
    pub fn visible(&self) -> bool {
        !self.term.trim().is_empty()
    }

    pub fn close(&mut self) {
        self.term.clear();
        self.active = false;
        self.cursor = 0;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchHit {
    Pokemon { name: String, url: String },
    Item { name: String, category: String },
    Ability(String),
    Attack(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailLink {
    Form { name: String, url: String },
    Evolution { name: String, url: String },
    Ability(String),
    EggGroup(String),
    Dex(String),
    Move(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub view: View,
    pub history: NavHistory,
    pub pokemon: Arc<PokemonDb>,
    pub items: Vec<ItemRecord>,
    pub abilities: Vec<AbilityRecord>,
    pub attacks: Vec<AttackRecord>,
    pub loading: LoadingFlags,
    pub chart: ChartState,
    pub home: HomeState,
    pub detail: DetailState,
    pub item_view: ItemViewState,
    pub ability_view: AbilityViewState,
    pub attack_view: AttackViewState,
    pub search: SearchState,
    pub requests: RequestTokens,
    pub message: Option<String>,
    pub terminal_size: (u16, u16),
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl AppState {
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            view: View::Home,
            history: NavHistory::new(limit),
            pokemon: Arc::default(),
            items: Vec::new(),
            abilities: Vec::new(),
            attacks: Vec::new(),
            loading: LoadingFlags::default(),
            chart: ChartState::default(),
            home: HomeState::default(),
            detail: DetailState::default(),
            item_view: ItemViewState::default(),
            ability_view: AbilityViewState::default(),
            attack_view: AttackViewState::default(),
            search: SearchState::default(),
            requests: RequestTokens::default(),
            message: None,
            terminal_size: (80, 24),
            tick: 0,
        }
    }

    /// Input is going to a text box rather than to key bindings.
    pub fn is_typing(&self) -> bool {
        self.search.active || self.ability_view.filtering
    }

    pub fn displayed_types(&self) -> Vec<PokemonType> {
        type_chart::displayed_types(self.chart.ruleset)
    }

    /// Categories in item order, deduplicated.
    pub fn item_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if categories.last() != Some(&item.category.as_str()) {
                categories.push(item.category.as_str());
            }
        }
        categories
    }

    pub fn category_items(&self) -> Vec<&ItemRecord> {
        let Some(category) = &self.item_view.category else {
            return Vec::new();
        };
        self.items
            .iter()
            .filter(|item| &item.category == category)
            .collect()
    }

    pub fn filtered_abilities(&self) -> Vec<&AbilityRecord> {
        let filter = self.ability_view.filter.trim().to_lowercase();
        self.abilities
            .iter()
            .filter(|ability| filter.is_empty() || ability.name.to_lowercase().contains(&filter))
            .collect()
    }

    /// Global search results: up to ten per kind, Pokémon first.
    pub fn search_hits(&self) -> Vec<SearchHit> {
        let term = self.search.term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        let matches = |name: &str| name.to_lowercase().contains(&term);

        let pokemon = self
            .pokemon
            .displayable
            .iter()
            .filter(|pokemon| matches(&pokemon.name) || pokemon.base_id.to_string().contains(&term))
            .take(SEARCH_RESULT_LIMIT)
            .map(|pokemon| SearchHit::Pokemon {
                name: pokemon.name.clone(),
                url: pokemon.url.clone(),
            });
        let items = self
            .items
            .iter()
            .filter(|item| matches(&item.name))
            .take(SEARCH_RESULT_LIMIT)
            .map(|item| SearchHit::Item {
                name: item.name.clone(),
                category: item.category.clone(),
            });
        let abilities = self
            .abilities
            .iter()
            .filter(|ability| matches(&ability.name))
            .take(SEARCH_RESULT_LIMIT)
            .map(|ability| SearchHit::Ability(ability.name.clone()));
        let attacks = self
            .attacks
            .iter()
            .filter(|attack| matches(&attack.name))
            .take(SEARCH_RESULT_LIMIT)
            .map(|attack| SearchHit::Attack(attack.name.clone()));

        pokemon.chain(items).chain(abilities).chain(attacks).collect()
    }

    /// Moves learnable in the detail page's current era, deduplicated by name.
    pub fn era_moves(&self) -> Vec<&LearnedMove> {
        let Some(entry) = &self.detail.entry else {
            return Vec::new();
        };
        let groups = self
            .detail
            .era
            .as_deref()
            .map(dex::version_groups_for_era)
            .unwrap_or_default();
        let mut moves: Vec<&LearnedMove> = entry
            .moves
            .iter()
            .filter(|learned| groups.contains(&learned.version_group.as_str()))
            .collect();
        moves.sort_by(|a, b| {
            (a.method.as_str(), a.level, a.name.as_str())
                .cmp(&(b.method.as_str(), b.level, b.name.as_str()))
        });
        let mut seen = HashSet::new();
        moves.retain(|learned| {
            let learned: &LearnedMove = *learned;
            seen.insert(learned.name.as_str())
        });
        moves
    }

    /// Everything selectable on the detail page, in display order.
    pub fn detail_links(&self) -> Vec<DetailLink> {
        let Some(entry) = &self.detail.entry else {
            return Vec::new();
        };
        let mut links: Vec<DetailLink> = entry
            .other_forms
            .iter()
            .map(|form| DetailLink::Form {
                name: form.name.clone(),
                url: form.url.clone(),
            })
            .collect();
        if let Some(root) = &self.detail.evolution {
            let active = self.detail.active_form.as_deref().unwrap_or(&entry.name);
            if crate::evolution::should_show(active, Some(root)) {
                links.extend(
                    root.nodes()
                        .into_iter()
                        .filter(|node| node.name != entry.name)
                        .map(|node| DetailLink::Evolution {
                            name: node.name.clone(),
                            url: node.url.clone(),
                        }),
                );
            }
        }
        links.extend(
            entry
                .abilities
                .iter()
                .map(|ability| DetailLink::Ability(ability.name.replace('-', " "))),
        );
        links.extend(
            entry
                .egg_groups
                .iter()
                .map(|group| DetailLink::EggGroup(group.clone())),
        );
        links.extend(
            entry
                .pokedex_numbers
                .iter()
                .filter(|number| dex::find_pokedex(&number.pokedex).is_some())
                .map(|number| DetailLink::Dex(number.pokedex.clone())),
        );
        links.extend(
            self.era_moves()
                .into_iter()
                .map(|learned| DetailLink::Move(learned.name.replace('-', " "))),
        );
        links
    }

    /// Length of the list the cursor currently moves through.
    pub fn active_list_len(&self) -> usize {
        if self.search.visible() {
            return self.search_hits().len();
        }
        match self.view {
            View::Home => match self.home.mode {
                HomeMode::Selection => dex::catalogue().len(),
                HomeMode::List => self.home.list.len(),
            },
            View::Chart => self.displayed_types().len(),
            View::Pokedex => self.detail_links().len(),
            View::Items => match self.item_view.mode {
                ItemMode::Categories => self.item_categories().len(),
                ItemMode::List => self.category_items().len(),
            },
            View::Abilities => match self.ability_view.mode {
                ListMode::List => self.filtered_abilities().len(),
                ListMode::Detail => self
                    .ability_view
                    .selected
                    .as_ref()
                    .map_or(0, |ability| ability.pokemon.len()),
            },
            View::Attacks => match self.attack_view.mode {
                ListMode::List => self.attacks.len(),
                ListMode::Detail => self
                    .attack_view
                    .selected
                    .as_ref()
                    .map_or(0, |attack| attack.learned_by.len()),
            },
        }
    }

    pub fn active_cursor(&self) -> usize {
        if self.search.visible() {
            return self.search.cursor;
        }
        match self.view {
            View::Home => match self.home.mode {
                HomeMode::Selection => self.home.catalogue_cursor,
                HomeMode::List => self.home.list_cursor,
            },
            View::Chart => self.chart.cursor,
            View::Pokedex => self.detail.cursor,
            View::Items => match self.item_view.mode {
                ItemMode::Categories => self.item_view.category_cursor,
                ItemMode::List => self.item_view.cursor,
            },
            View::Abilities => match self.ability_view.mode {
                ListMode::List => self.ability_view.cursor,
                ListMode::Detail => self.ability_view.pokemon_cursor,
            },
            View::Attacks => match self.attack_view.mode {
                ListMode::List => self.attack_view.cursor,
                ListMode::Detail => self.attack_view.pokemon_cursor,
            },
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        if self.search.visible() {
            return &mut self.search.cursor;
        }
        match self.view {
            View::Home => match self.home.mode {
                HomeMode::Selection => &mut self.home.catalogue_cursor,
                HomeMode::List => &mut self.home.list_cursor,
            },
            View::Chart => &mut self.chart.cursor,
            View::Pokedex => &mut self.detail.cursor,
            View::Items => match self.item_view.mode {
                ItemMode::Categories => &mut self.item_view.category_cursor,
                ItemMode::List => &mut self.item_view.cursor,
            },
            View::Abilities => match self.ability_view.mode {
                ListMode::List => &mut self.ability_view.cursor,
                ListMode::Detail => &mut self.ability_view.pokemon_cursor,
            },
            View::Attacks => match self.attack_view.mode {
                ListMode::List => &mut self.attack_view.cursor,
                ListMode::Detail => &mut self.attack_view.pokemon_cursor,
            },
        }
    }

    /// Moves the active cursor, clamped to the list. Returns whether it moved.
    pub fn set_active_cursor(&mut self, index: usize) -> bool {
        let len = self.active_list_len();
        let clamped = index.min(len.saturating_sub(1));
        let cursor = self.active_cursor_mut();
        if *cursor == clamped {
            return false;
        }
        *cursor = clamped;
        true
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("View")
                .entry("view", ron_string(&self.view))
                .entry("history", ron_string(&self.history.len()))
                .entry("home_mode", ron_string(&self.home.mode))
                .entry(
                    "dex",
                    ron_string(&self.home.selected_dex.as_ref().map(|dex| dex.id.clone())),
                )
                .entry("item_mode", ron_string(&self.item_view.mode))
                .entry("ability_mode", ron_string(&self.ability_view.mode))
                .entry("attack_mode", ron_string(&self.attack_view.mode))
                .entry("search", ron_string(&self.search.term)),
            DebugSection::new("Detail")
                .entry("url", ron_string(&self.detail.url))
                .entry("active_form", ron_string(&self.detail.active_form))
                .entry("era", ron_string(&self.detail.era))
                .entry("ruleset", ron_string(&self.chart.ruleset))
                .entry("defenders", ron_string(&self.chart.defenders)),
            DebugSection::new("Data")
                .entry("pokemon", ron_string(&self.pokemon.displayable.len()))
                .entry("families", ron_string(&self.pokemon.families.len()))
                .entry("items", ron_string(&self.items.len()))
                .entry("abilities", ron_string(&self.abilities.len()))
                .entry("attacks", ron_string(&self.attacks.len()))
                .entry("dex_list", ron_string(&self.home.list.len())),
            DebugSection::new("Status")
                .entry("loading", ron_string(&self.loading))
                .entry("list_loading", ron_string(&self.home.list_loading))
                .entry("detail_loading", ron_string(&self.detail.loading))
                .entry("evolution_loading", ron_string(&self.detail.evolution_loading))
                .entry("requests", ron_string(&self.requests))
                .entry("message", ron_string(&self.message)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(view: View) -> HistoryEntry {
        HistoryEntry {
            view,
            home_mode: HomeMode::Selection,
            url: None,
        }
    }

    #[test]
    fn test_history_drops_oldest_at_limit() {
        let mut history = NavHistory::new(2);
        history.push(entry(View::Home));
        history.push(entry(View::Chart));
        history.push(entry(View::Items));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().map(|entry| entry.view), Some(View::Items));
        assert_eq!(history.pop().map(|entry| entry.view), Some(View::Chart));
        assert_eq!(history.pop(), None);
    }

    fn item(name: &str, category: &str) -> ItemRecord {
        ItemRecord {
            id: 1,
            name: name.to_string(),
            cost: 0,
            category: category.to_string(),
            flavor_text: String::new(),
            effect: String::new(),
            games: Vec::new(),
            sprite_url: String::new(),
        }
    }

    #[test]
    fn test_item_categories_follow_item_order() {
        let mut state = AppState::default();
        state.items = vec![
            item("berry a", "Berries"),
            item("berry b", "Berries"),
            item("potion", "Medicine"),
        ];
        assert_eq!(state.item_categories(), vec!["Berries", "Medicine"]);
        state.item_view.category = Some("Berries".to_string());
        assert_eq!(state.category_items().len(), 2);
    }

    #[test]
    fn test_search_hits_cap_and_match_ids() {
        let mut state = AppState::default();
        let mut db = PokemonDb::default();
        for id in 1..=30 {
            db.displayable.push(DisplayPokemon {
                id,
                base_id: id,
                name: format!("mon-{id}"),
                url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                types: Vec::new(),
                has_gmax: false,
            });
        }
        state.pokemon = Arc::new(db);
        state.items = vec![item("lemon drop", "Other")];

        state.search.term = "  mon ".to_string();
        let hits = state.search_hits();
        assert_eq!(hits.len(), SEARCH_RESULT_LIMIT + 1);
        assert!(matches!(hits.last(), Some(SearchHit::Item { .. })));

        state.search.term = "25".to_string();
        assert_eq!(
            state.search_hits(),
            vec![SearchHit::Pokemon {
                name: "mon-25".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
            }]
        );

        state.search.term = "   ".to_string();
        assert!(!state.search.visible());
        assert!(state.search_hits().is_empty());
    }

    #[test]
    fn test_set_active_cursor_clamps() {
        let mut state = AppState::default();
        assert!(state.set_active_cursor(100));
        assert_eq!(state.home.catalogue_cursor, dex::catalogue().len() - 1);
        assert!(!state.set_active_cursor(500));
    }
}
