use tui_dispatch::DispatchResult;
use tracing::debug;

use crate::action::Action;
use crate::dex::{self, PokedexInfo};
use crate::effect::Effect;
use crate::router::{self, NavOptions};
use crate::state::{
    AppState, DetailLink, DetailState, HomeMode, ItemMode, ListMode, SearchHit, View,
};
use crate::type_chart::{self, Ruleset};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            state.loading = crate::state::LoadingFlags::all();
            state.message = None;
            DispatchResult::changed_with_many(vec![
                Effect::LoadPokemonDb,
                Effect::LoadItems,
                Effect::LoadAbilities,
                Effect::LoadAttacks,
            ])
        }

        Action::PokemonDbDidLoad(db) => {
            state.pokemon = std::sync::Arc::new(db);
            state.loading.pokemon = false;
            // A dex opened before the data arrived is projected again.
            let pending = match &state.home.selected_dex {
                Some(dex) if state.home.mode == HomeMode::List && state.home.list.is_empty() => {
                    Some(dex.clone())
                }
                _ => None,
            };
            match pending {
                Some(dex) => DispatchResult::changed_with(request_list(state, dex)),
                None => DispatchResult::changed(),
            }
        }

        Action::PokemonDbDidError(error) => {
            state.loading.pokemon = false;
            state.message = Some(format!("Pokémon data error: {error}"));
            DispatchResult::changed()
        }

        Action::ItemsDidLoad(items) => {
            state.items = items;
            state.loading.items = false;
            DispatchResult::changed()
        }

        Action::ItemsDidError(error) => {
            state.loading.items = false;
            state.message = Some(format!("Item data error: {error}"));
            DispatchResult::changed()
        }

        Action::AbilitiesDidLoad(abilities) => {
            state.abilities = abilities;
            state.loading.abilities = false;
            DispatchResult::changed()
        }

        Action::AbilitiesDidError(error) => {
            state.loading.abilities = false;
            state.message = Some(format!("Ability data error: {error}"));
            DispatchResult::changed()
        }

        Action::AttacksDidLoad(attacks) => {
            state.attacks = attacks;
            state.loading.attacks = false;
            DispatchResult::changed()
        }

        Action::AttacksDidError(error) => {
            state.loading.attacks = false;
            state.message = Some(format!("Attack data error: {error}"));
            DispatchResult::changed()
        }

        Action::ViewSelect(view) => {
            if view == state.view && view != View::Home {
                return DispatchResult::unchanged();
            }
            state.search.close();
            let options = if view == View::Home {
                NavOptions::reset()
            } else {
                NavOptions::default()
            };
            router::navigate(state, view, options);
            DispatchResult::changed()
        }

        Action::NavigateBack => {
            if state.search.active || state.search.visible() {
                state.search.close();
                return DispatchResult::changed();
            }
            if state.ability_view.filtering {
                state.ability_view.filtering = false;
                return DispatchResult::changed();
            }
            if !router::go_back(state) {
                return DispatchResult::unchanged();
            }
            match reload_detail(state) {
                Some(effect) => DispatchResult::changed_with(effect),
                None => DispatchResult::changed(),
            }
        }

        Action::RulesetSelect(ruleset) => {
            if ruleset == state.chart.ruleset {
                return DispatchResult::unchanged();
            }
            set_ruleset(state, ruleset);
            DispatchResult::changed()
        }

        Action::RulesetNext => {
            let next = state.chart.ruleset.next();
            set_ruleset(state, next);
            DispatchResult::changed()
        }

        Action::DefenderToggle(ty) => {
            if !state.displayed_types().contains(&ty) {
                return DispatchResult::unchanged();
            }
            type_chart::toggle_defender(&mut state.chart.defenders, ty);
            DispatchResult::changed()
        }

        Action::DexSelect(id) => {
            let Some(dex) = dex::find_pokedex(&id) else {
                return DispatchResult::unchanged();
            };
            state.home.highlight_species = None;
            DispatchResult::changed_with(open_dex(state, dex))
        }

        Action::EggGroupSelect(group) => {
            let highlight = detail_species(state);
            let effect = open_dex(state, dex::egg_group_dex(&group));
            state.home.highlight_species = highlight;
            DispatchResult::changed_with(effect)
        }

        Action::DexEntryLink(pokedex) => {
            let Some(dex) = dex::find_pokedex(&pokedex) else {
                return DispatchResult::unchanged();
            };
            let highlight = detail_species(state);
            let effect = open_dex(state, dex);
            state.home.highlight_species = highlight;
            DispatchResult::changed_with(effect)
        }

        Action::PokedexListDidLoad { request, entries } => {
            if request != state.requests.list {
                debug!(request, latest = state.requests.list, "discarding stale dex list");
                return DispatchResult::unchanged();
            }
            state.home.list = entries;
            state.home.list_loading = false;
            let highlight = state.home.highlight_species.take();
            state.home.list_cursor = highlight
                .and_then(|species| {
                    state
                        .home
                        .list
                        .iter()
                        .position(|entry| state.pokemon.species_of(&entry.name) == Some(species.as_str()))
                })
                .unwrap_or(0);
            DispatchResult::changed()
        }

        Action::PokedexListDidError { request, error } => {
            if request != state.requests.list {
                return DispatchResult::unchanged();
            }
            state.home.list_loading = false;
            state.message = Some(format!("Pokédex list error: {error}"));
            DispatchResult::changed()
        }

        Action::PokemonSelect { url, era_context } => {
            DispatchResult::changed_with(open_detail(state, url, era_context))
        }

        Action::FormSelect { name, url } => {
            if state.detail.active_form.as_deref() == Some(name.as_str()) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed_with(open_detail(state, url, None))
        }

        Action::EraSelect(era) => {
            if state.detail.entry.is_none() || state.detail.era.as_deref() == Some(era.as_str()) {
                return DispatchResult::unchanged();
            }
            apply_era(state, era)
        }

        Action::EraNext => cycle_era(state, 1),
        Action::EraPrev => cycle_era(state, -1),

        Action::PokedexEntryDidLoad {
            request,
            detail,
            evolution,
        } => {
            if request != state.requests.detail {
                debug!(request, latest = state.requests.detail, "discarding stale entry");
                return DispatchResult::unchanged();
            }
            let era = dex::best_era(&detail, state.detail.era_context.as_deref());
            set_ruleset(state, Ruleset::for_era(&era));
            state.detail.active_form = Some(detail.name.clone());
            state.detail.entry = Some(detail);
            state.detail.evolution = evolution;
            state.detail.era = Some(era);
            state.detail.loading = false;
            state.detail.failed = false;
            state.detail.evolution_loading = false;
            state.detail.cursor = 0;
            DispatchResult::changed()
        }

        Action::PokedexEntryDidError { request, error } => {
            if request != state.requests.detail {
                return DispatchResult::unchanged();
            }
            state.detail.loading = false;
            state.detail.failed = true;
            state.message = Some(format!("Pokédex entry error: {error}"));
            DispatchResult::changed()
        }

        Action::EvolutionDidLoad { request, chain } => {
            if request != state.requests.evolution {
                debug!(request, latest = state.requests.evolution, "discarding stale evolution");
                return DispatchResult::unchanged();
            }
            state.detail.evolution = chain;
            state.detail.evolution_loading = false;
            DispatchResult::changed()
        }

        Action::ItemCategorySelect(category) => {
            if state.view != View::Items {
                router::navigate(state, View::Items, NavOptions::default());
            }
            state.item_view.mode = ItemMode::List;
            state.item_view.category = Some(category);
            state.item_view.cursor = 0;
            DispatchResult::changed()
        }

        Action::ItemSelectFromSearch { name, category } => {
            state.search.close();
            if state.view != View::Items {
                router::navigate(state, View::Items, NavOptions::default());
            }
            state.item_view.mode = ItemMode::List;
            state.item_view.category = Some(category);
            state.item_view.cursor = state
                .category_items()
                .iter()
                .position(|item| item.name == name)
                .unwrap_or(0);
            DispatchResult::changed()
        }

        Action::AbilityFilterStart => {
            if state.view != View::Abilities || state.ability_view.mode != ListMode::List {
                return DispatchResult::unchanged();
            }
            state.ability_view.filtering = true;
            DispatchResult::changed()
        }

        Action::AbilityFilterEnd => {
            state.ability_view.filtering = false;
            DispatchResult::changed()
        }

        Action::AbilityFilterInput(ch) => {
            state.ability_view.filter.push(ch);
            state.ability_view.cursor = 0;
            DispatchResult::changed()
        }

        Action::AbilityFilterBackspace => {
            if state.ability_view.filter.pop().is_none() {
                return DispatchResult::unchanged();
            }
            state.ability_view.cursor = 0;
            DispatchResult::changed()
        }

        Action::AbilitySelect(name) => {
            let wanted = name.to_lowercase();
            let Some(ability) = state
                .abilities
                .iter()
                .find(|ability| ability.name.to_lowercase() == wanted)
                .cloned()
            else {
                return DispatchResult::unchanged();
            };
            state.search.close();
            if state.view != View::Abilities {
                router::navigate(state, View::Abilities, NavOptions::default());
            }
            state.ability_view.mode = ListMode::Detail;
            state.ability_view.filtering = false;
            state.ability_view.selected = Some(ability);
            state.ability_view.pokemon_cursor = 0;
            DispatchResult::changed()
        }

        Action::AttackSelect(name) => {
            let wanted = name.to_lowercase();
            let Some(attack) = state
                .attacks
                .iter()
                .find(|attack| attack.name.to_lowercase() == wanted)
                .cloned()
            else {
                return DispatchResult::unchanged();
            };
            state.search.close();
            if state.view != View::Attacks {
                router::navigate(state, View::Attacks, NavOptions::default());
            }
            state.attack_view.mode = ListMode::Detail;
            state.attack_view.selected = Some(attack);
            state.attack_view.pokemon_cursor = 0;
            DispatchResult::changed()
        }

        Action::SearchStart => {
            if state.search.active {
                return DispatchResult::unchanged();
            }
            state.search.active = true;
            DispatchResult::changed()
        }

        Action::SearchInput(ch) => {
            state.search.term.push(ch);
            state.search.cursor = 0;
            DispatchResult::changed()
        }

        Action::SearchBackspace => {
            if state.search.term.pop().is_none() {
                return DispatchResult::unchanged();
            }
            state.search.cursor = 0;
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search.close();
            DispatchResult::changed()
        }

        Action::CursorSet(index) => {
            if state.set_active_cursor(index) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Confirm => {
            // Leaving the search box keeps the results open for selection.
            state.search.active = false;
            match confirm_action(state) {
                Some(next) => reducer(state, next),
                None => DispatchResult::unchanged(),
            }
        }

        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick = state.tick.wrapping_add(1);
            let busy = state.loading.any()
                || state.home.list_loading
                || state.detail.loading
                || state.detail.evolution_loading;
            if busy {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn set_ruleset(state: &mut AppState, ruleset: Ruleset) {
    state.chart.ruleset = ruleset;
    let displayed = type_chart::displayed_types(ruleset);
    state.chart.defenders.retain(|ty| displayed.contains(ty));
    state.chart.cursor = state.chart.cursor.min(displayed.len().saturating_sub(1));
}

fn detail_species(state: &AppState) -> Option<String> {
    state
        .detail
        .entry
        .as_ref()
        .map(|entry| entry.species_name.clone())
}

fn open_dex(state: &mut AppState, dex: PokedexInfo) -> Effect {
    state.search.close();
    if state.view != View::Home {
        router::navigate(state, View::Home, NavOptions::default());
    }
    state.home.mode = HomeMode::List;
    request_list(state, dex)
}

fn request_list(state: &mut AppState, dex: PokedexInfo) -> Effect {
    state.home.selected_dex = Some(dex.clone());
    state.home.list.clear();
    state.home.list_cursor = 0;
    state.home.list_loading = true;
    let request = state.requests.next_list();
    Effect::LoadPokedexList {
        request,
        dex,
        db: state.pokemon.clone(),
    }
}

fn open_detail(state: &mut AppState, url: String, era_context: Option<String>) -> Effect {
    state.search.close();
    router::navigate(state, View::Pokedex, NavOptions::to_url(url.clone()));
    state.detail = DetailState {
        url: Some(url.clone()),
        loading: true,
        era_context,
        ..DetailState::default()
    };
    let request = state.requests.next_detail();
    state.requests.next_evolution();
    Effect::LoadPokedexEntry {
        request,
        url,
        db: state.pokemon.clone(),
    }
}

/// Re-requests the detail page after a back step lands on an unloaded entry.
fn reload_detail(state: &mut AppState) -> Option<Effect> {
    if state.view != View::Pokedex || state.detail.entry.is_some() || state.detail.loading {
        return None;
    }
    let url = state.detail.url.clone()?;
    Some(open_detail_in_place(state, url))
}

fn open_detail_in_place(state: &mut AppState, url: String) -> Effect {
    state.detail.loading = true;
    state.detail.failed = false;
    let request = state.requests.next_detail();
    state.requests.next_evolution();
    Effect::LoadPokedexEntry {
        request,
        url,
        db: state.pokemon.clone(),
    }
}

fn apply_era(state: &mut AppState, era: String) -> DispatchResult<Effect> {
    let Some(entry) = &state.detail.entry else {
        return DispatchResult::unchanged();
    };
    let target = dex::target_form_for_era(&era, entry);
    let chain_url = entry.evolution_chain_url.clone();
    set_ruleset(state, Ruleset::for_era(&era));
    state.detail.era = Some(era);
    state.detail.cursor = 0;
    let Some(active_form) = target else {
        return DispatchResult::changed();
    };
    state.detail.active_form = Some(active_form.clone());
    state.detail.evolution_loading = true;
    let request = state.requests.next_evolution();
    DispatchResult::changed_with(Effect::LoadEvolution {
        request,
        chain_url,
        active_form,
        db: state.pokemon.clone(),
    })
}

fn cycle_era(state: &mut AppState, step: isize) -> DispatchResult<Effect> {
    let Some(entry) = &state.detail.entry else {
        return DispatchResult::unchanged();
    };
    let eras = dex::available_eras(entry);
    let current = state
        .detail
        .era
        .as_deref()
        .and_then(|era| eras.iter().position(|candidate| *candidate == era));
    let len = eras.len() as isize;
    let next = match current {
        Some(index) => (index as isize + step).rem_euclid(len),
        None => 0,
    };
    let era = eras[next as usize].to_string();
    if state.detail.era.as_deref() == Some(era.as_str()) {
        return DispatchResult::unchanged();
    }
    apply_era(state, era)
}

fn confirm_action(state: &AppState) -> Option<Action> {
    let cursor = state.active_cursor();
    if state.search.visible() {
        return state.search_hits().get(cursor).map(hit_action);
    }
    match state.view {
        View::Home => match state.home.mode {
            HomeMode::Selection => dex::catalogue()
                .get(cursor)
                .map(|dex| Action::DexSelect(dex.id.clone())),
            HomeMode::List => state.home.list.get(cursor).map(|entry| Action::PokemonSelect {
                url: entry.url.clone(),
                era_context: dex_era(state),
            }),
        },
        View::Chart => state
            .displayed_types()
            .get(cursor)
            .map(|ty| Action::DefenderToggle(*ty)),
        View::Pokedex => state
            .detail_links()
            .get(cursor)
            .map(|link| link_action(state, link)),
        View::Items => match state.item_view.mode {
            ItemMode::Categories => state
                .item_categories()
                .get(cursor)
                .map(|category| Action::ItemCategorySelect(category.to_string())),
            ItemMode::List => None,
        },
        View::Abilities => match state.ability_view.mode {
            ListMode::List => state
                .filtered_abilities()
                .get(cursor)
                .map(|ability| Action::AbilitySelect(ability.name.clone())),
            ListMode::Detail => state
                .ability_view
                .selected
                .as_ref()
                .and_then(|ability| ability.pokemon.get(cursor))
                .map(|pokemon| Action::PokemonSelect {
                    url: pokemon.url.clone(),
                    era_context: None,
                }),
        },
        View::Attacks => match state.attack_view.mode {
            ListMode::List => state
                .attacks
                .get(cursor)
                .map(|attack| Action::AttackSelect(attack.name.clone())),
            ListMode::Detail => state
                .attack_view
                .selected
                .as_ref()
                .and_then(|attack| attack.learned_by.get(cursor))
                .map(|pokemon| Action::PokemonSelect {
                    url: pokemon.url.clone(),
                    era_context: None,
                }),
        },
    }
}

fn dex_era(state: &AppState) -> Option<String> {
    state
        .home
        .selected_dex
        .as_ref()
        .and_then(|dex| dex.era.clone())
}

fn link_action(state: &AppState, link: &DetailLink) -> Action {
    match link {
        DetailLink::Form { name, url } => Action::FormSelect {
            name: name.clone(),
            url: url.clone(),
        },
        DetailLink::Evolution { url, .. } => Action::PokemonSelect {
            url: url.clone(),
            era_context: dex_era(state),
        },
        DetailLink::Ability(name) => Action::AbilitySelect(name.clone()),
        DetailLink::EggGroup(group) => Action::EggGroupSelect(group.clone()),
        DetailLink::Dex(pokedex) => Action::DexEntryLink(pokedex.clone()),
        DetailLink::Move(name) => Action::AttackSelect(name.clone()),
    }
}

fn hit_action(hit: &SearchHit) -> Action {
    match hit {
        SearchHit::Pokemon { url, .. } => Action::PokemonSelect {
            url: url.clone(),
            era_context: None,
        },
        SearchHit::Item { name, category } => Action::ItemSelectFromSearch {
            name: name.clone(),
            category: category.clone(),
        },
        SearchHit::Ability(name) => Action::AbilitySelect(name.clone()),
        SearchHit::Attack(name) => Action::AttackSelect(name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AbilityRecord, LearnedMove, PokedexListEntry, PokemonDetail, PokemonRef};
    use crate::type_chart::PokemonType;
    use pretty_assertions::assert_eq;

    const PIKACHU: &str = "https://pokeapi.co/api/v2/pokemon/25/";
    const RAICHU: &str = "https://pokeapi.co/api/v2/pokemon/26/";

    fn detail_request(result: &DispatchResult<Effect>) -> u64 {
        match result.effects.first() {
            Some(Effect::LoadPokedexEntry { request, .. }) => *request,
            other => panic!("expected entry load, got {other:?}"),
        }
    }

    fn raichu_detail() -> PokemonDetail {
        PokemonDetail {
            id: 26,
            name: "raichu".to_string(),
            species_name: "raichu".to_string(),
            species_id: 26,
            default_form: Some("raichu".to_string()),
            evolution_chain_url: Some("https://pokeapi.co/api/v2/evolution-chain/10/".to_string()),
            other_forms: vec![PokemonRef {
                name: "raichu-alola".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/10100/".to_string(),
                id: 10100,
            }],
            moves: vec![
                LearnedMove {
                    name: "thunder-shock".to_string(),
                    method: "level-up".to_string(),
                    level: 1,
                    version_group: "red-blue".to_string(),
                },
                LearnedMove {
                    name: "thunder-shock".to_string(),
                    method: "level-up".to_string(),
                    level: 1,
                    version_group: "sun-moon".to_string(),
                },
            ],
            ..PokemonDetail::default()
        }
    }

    #[test]
    fn test_init_requests_all_bulk_loads() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::Init);
        assert!(result.changed);
        assert_eq!(result.effects.len(), 4);
        assert!(state.loading.any());
    }

    #[test]
    fn test_stale_entry_completion_is_ignored() {
        let mut state = AppState::default();
        let first = reducer(
            &mut state,
            Action::PokemonSelect {
                url: PIKACHU.to_string(),
                era_context: None,
            },
        );
        let second = reducer(
            &mut state,
            Action::PokemonSelect {
                url: RAICHU.to_string(),
                era_context: None,
            },
        );
        let stale = detail_request(&first);
        let fresh = detail_request(&second);
        assert!(fresh > stale);

        let result = reducer(
            &mut state,
            Action::PokedexEntryDidLoad {
                request: stale,
                detail: PokemonDetail {
                    name: "pikachu".to_string(),
                    ..PokemonDetail::default()
                },
                evolution: None,
            },
        );
        assert!(!result.changed);
        assert!(state.detail.entry.is_none());

        reducer(
            &mut state,
            Action::PokedexEntryDidLoad {
                request: fresh,
                detail: raichu_detail(),
                evolution: None,
            },
        );
        assert_eq!(state.detail.active_form.as_deref(), Some("raichu"));
        assert_eq!(state.detail.era.as_deref(), Some("Gen VII"));
    }

    #[test]
    fn test_era_context_sets_era_and_ruleset() {
        let mut state = AppState::default();
        let result = reducer(
            &mut state,
            Action::PokemonSelect {
                url: RAICHU.to_string(),
                era_context: Some("Gen I".to_string()),
            },
        );
        reducer(
            &mut state,
            Action::PokedexEntryDidLoad {
                request: detail_request(&result),
                detail: raichu_detail(),
                evolution: None,
            },
        );
        assert_eq!(state.detail.era.as_deref(), Some("Gen I"));
        assert_eq!(state.chart.ruleset, Ruleset::Gen1);
    }

    #[test]
    fn test_era_change_switches_form_and_refetches_evolution() {
        let mut state = AppState::default();
        let result = reducer(
            &mut state,
            Action::PokemonSelect {
                url: RAICHU.to_string(),
                era_context: Some("Gen I".to_string()),
            },
        );
        reducer(
            &mut state,
            Action::PokedexEntryDidLoad {
                request: detail_request(&result),
                detail: raichu_detail(),
                evolution: None,
            },
        );

        let result = reducer(&mut state, Action::EraSelect("Gen VII".to_string()));

        assert_eq!(state.detail.active_form.as_deref(), Some("raichu-alola"));
        assert_eq!(state.chart.ruleset, Ruleset::Gen6Plus);
        assert!(matches!(
            result.effects.as_slice(),
            [Effect::LoadEvolution { active_form, .. }] if active_form == "raichu-alola"
        ));
        assert!(state.detail.evolution_loading);
    }

    #[test]
    fn test_era_next_cycles_available_eras() {
        let mut state = AppState::default();
        let result = reducer(
            &mut state,
            Action::PokemonSelect {
                url: RAICHU.to_string(),
                era_context: Some("Gen I".to_string()),
            },
        );
        reducer(
            &mut state,
            Action::PokedexEntryDidLoad {
                request: detail_request(&result),
                detail: raichu_detail(),
                evolution: None,
            },
        );
        reducer(&mut state, Action::EraNext);
        assert_eq!(state.detail.era.as_deref(), Some("Gen VII"));
        reducer(&mut state, Action::EraNext);
        assert_eq!(state.detail.era.as_deref(), Some("Gen I"));
    }

    #[test]
    fn test_ruleset_change_prunes_defenders() {
        let mut state = AppState::default();
        reducer(&mut state, Action::DefenderToggle(PokemonType::Steel));
        reducer(&mut state, Action::DefenderToggle(PokemonType::Water));
        reducer(&mut state, Action::RulesetSelect(Ruleset::Gen1));
        assert_eq!(state.chart.defenders, vec![PokemonType::Water]);
        let result = reducer(&mut state, Action::DefenderToggle(PokemonType::Fairy));
        assert!(!result.changed);
    }

    #[test]
    fn test_dex_list_highlights_linked_species() {
        let mut state = AppState::default();
        let mut db = crate::state::PokemonDb::default();
        db.form_info.insert(
            "raichu".to_string(),
            crate::state::FormInfo {
                species_name: "raichu".to_string(),
                is_default: true,
            },
        );
        state.pokemon = std::sync::Arc::new(db);
        state.detail.entry = Some(raichu_detail());
        state.view = View::Pokedex;

        let result = reducer(&mut state, Action::DexEntryLink("kanto".to_string()));
        let request = match result.effects.first() {
            Some(Effect::LoadPokedexList { request, dex, .. }) => {
                assert_eq!(dex.id, "kanto");
                *request
            }
            other => panic!("expected list load, got {other:?}"),
        };
        assert_eq!(state.view, View::Home);
        assert_eq!(state.home.mode, HomeMode::List);

        let entry = |name: &str, number: u32| PokedexListEntry {
            id: number,
            base_id: number,
            name: name.to_string(),
            url: String::new(),
            number,
            types: Vec::new(),
            has_gmax: false,
        };
        reducer(
            &mut state,
            Action::PokedexListDidLoad {
                request,
                entries: vec![entry("pichu", 25), entry("raichu", 26)],
            },
        );
        assert_eq!(state.home.list_cursor, 1);
        assert!(!state.home.list_loading);
    }

    #[test]
    fn test_confirm_on_catalogue_opens_dex() {
        let mut state = AppState::default();
        reducer(&mut state, Action::CursorSet(9));
        let result = reducer(&mut state, Action::Confirm);
        assert_eq!(state.home.selected_dex.as_ref().map(|dex| dex.id.as_str()), Some("kanto"));
        assert!(matches!(
            result.effects.as_slice(),
            [Effect::LoadPokedexList { .. }]
        ));
    }

    #[test]
    fn test_ability_select_from_search() {
        let mut state = AppState::default();
        state.abilities = vec![AbilityRecord {
            id: 9,
            name: "static".to_string(),
            flavor_text: String::new(),
            effect: String::new(),
            generation: "Gen iii".to_string(),
            pokemon: Vec::new(),
        }];
        reducer(&mut state, Action::SearchStart);
        for ch in "stat".chars() {
            reducer(&mut state, Action::SearchInput(ch));
        }
        assert!(state.search.visible());

        reducer(&mut state, Action::Confirm);

        assert_eq!(state.view, View::Abilities);
        assert_eq!(state.ability_view.mode, ListMode::Detail);
        assert!(!state.search.visible());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_back_closes_search_first() {
        let mut state = AppState::default();
        reducer(&mut state, Action::ViewSelect(View::Chart));
        reducer(&mut state, Action::SearchStart);
        reducer(&mut state, Action::SearchInput('x'));
        reducer(&mut state, Action::NavigateBack);
        assert_eq!(state.view, View::Chart);
        reducer(&mut state, Action::NavigateBack);
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn test_back_to_unloaded_detail_refetches() {
        let mut state = AppState::default();
        reducer(
            &mut state,
            Action::PokemonSelect {
                url: PIKACHU.to_string(),
                era_context: None,
            },
        );
        reducer(&mut state, Action::ViewSelect(View::Chart));
        let result = reducer(&mut state, Action::NavigateBack);
        assert_eq!(state.view, View::Pokedex);
        assert!(matches!(
            result.effects.as_slice(),
            [Effect::LoadPokedexEntry { url, .. }] if url == PIKACHU
        ));
    }
}
