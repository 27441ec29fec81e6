//! Full-frame renders through RenderHarness.

use std::sync::Arc;

use pokedex::{
    state::{AppState, DisplayPokemon, Encounter, FlavorEntry, PokemonDb, PokemonDetail, View},
    type_chart::{PokemonType, Ruleset},
    ui::PokedexUi,
};
use tui_dispatch::testing::*;

fn render(state: &AppState) -> String {
    render_sized(state, 110, 36)
}

fn render_sized(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut pokedex_ui = PokedexUi::new();
    render.render_to_string_plain(|frame| {
        pokedex_ui.draw(frame, frame.area(), state);
    })
}

#[test]
fn test_home_lists_catalogue() {
    let output = render(&AppState::default());

    assert!(output.contains("Type Chart"), "tabs should be drawn");
    assert!(output.contains("Generation I"));
    assert!(output.contains("Kanto (R/B/Y)"));
}

#[test]
fn test_chart_shows_multipliers_for_defender() {
    let mut state = AppState {
        view: View::Chart,
        ..AppState::default()
    };
    state.chart.defenders = vec![PokemonType::Fire];

    let output = render(&state);

    assert!(output.contains("[x]"));
    assert!(output.contains("Gen VI+"));
    assert!(output.contains("x2"));
    assert!(output.contains("x½"));
}

#[test]
fn test_detail_renders_loaded_entry() {
    let mut state = AppState {
        view: View::Pokedex,
        ..AppState::default()
    };
    state.detail.url = Some("https://pokeapi.co/api/v2/pokemon/25/".to_string());
    state.detail.entry = Some(PokemonDetail {
        id: 25,
        name: "pikachu".to_string(),
        species_name: "pikachu".to_string(),
        species_id: 25,
        types: vec![PokemonType::Electric],
        egg_groups: vec!["fairy".to_string()],
        ..PokemonDetail::default()
    });
    state.detail.era = Some("Gen I".to_string());

    let output = render(&state);

    assert!(output.contains("#0025 PIKACHU"));
    assert!(output.contains("ELECTRIC"));
    assert!(output.contains("Egg group"));
}

#[test]
fn test_detail_placeholder_while_loading() {
    let mut state = AppState {
        view: View::Pokedex,
        ..AppState::default()
    };
    state.detail.url = Some("https://pokeapi.co/api/v2/pokemon/25/".to_string());
    state.detail.loading = true;

    let output = render(&state);

    assert!(output.contains("Loading"));
}

#[test]
fn test_search_overlay_lists_hits() {
    let db = PokemonDb {
        displayable: vec![DisplayPokemon {
            id: 25,
            base_id: 25,
            name: "pikachu".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
            types: vec![PokemonType::Electric],
            has_gmax: true,
        }],
        ..PokemonDb::default()
    };
    let mut state = AppState {
        pokemon: Arc::new(db),
        ..AppState::default()
    };
    state.search.active = true;
    state.search.term = "pika".to_string();

    let output = render(&state);

    assert!(output.contains("SEARCH /pika_"));
    assert!(output.contains("pikachu"));
}

fn charizard_page(era: &str, ruleset: Ruleset) -> AppState {
    let mut state = AppState {
        view: View::Pokedex,
        ..AppState::default()
    };
    state.detail.url = Some("https://pokeapi.co/api/v2/pokemon/6/".to_string());
    state.detail.entry = Some(PokemonDetail {
        id: 6,
        name: "charizard".to_string(),
        species_name: "charizard".to_string(),
        species_id: 6,
        types: vec![PokemonType::Fire, PokemonType::Flying],
        flavor_entries: vec![
            FlavorEntry {
                version: "red".to_string(),
                text: "Spits fire that is hot enough to melt boulders.".to_string(),
            },
            FlavorEntry {
                version: "sword".to_string(),
                text: "It is said that Charizard's fire burns hotter".to_string(),
            },
        ],
        encounters: vec![Encounter {
            location_area: "kanto-route-24-area".to_string(),
            versions: vec!["red".to_string()],
        }],
        ..PokemonDetail::default()
    });
    state.detail.era = Some(era.to_string());
    state.chart.ruleset = ruleset;
    state
}

#[test]
fn test_detail_type_defenses_follow_ruleset() {
    let gen1 = render_sized(&charizard_page("Gen I", Ruleset::Gen1), 120, 60);
    assert!(gen1.contains("TYPE DEFENSES (vs. Gen I rules)"));
    assert!(gen1.contains("x4"));
    assert!(gen1.contains("ICE"));
    assert!(!gen1.contains("FAIRY"));

    let gen6 = render_sized(&charizard_page("Gen VI", Ruleset::Gen6Plus), 120, 60);
    assert!(gen6.contains("TYPE DEFENSES (vs. Gen VI+ rules)"));
    assert!(gen6.contains("FAIRY"));
    assert!(!gen6.contains("ICE"));
}

#[test]
fn test_detail_entry_text_follows_era() {
    let kanto = render_sized(&charizard_page("Gen I", Ruleset::Gen1), 120, 60);
    assert!(kanto.contains("melt boulders"));
    assert!(kanto.contains("Kanto Route 24 Area"));

    let galar = render_sized(&charizard_page("Gen VIII", Ruleset::Gen6Plus), 120, 60);
    assert!(galar.contains("burns hotter"));
    assert!(!galar.contains("Kanto Route 24 Area"));

    let sinnoh = render_sized(&charizard_page("Gen IV", Ruleset::Gen2To5), 120, 60);
    assert!(sinnoh.contains("No entry available for this game era."));
}
