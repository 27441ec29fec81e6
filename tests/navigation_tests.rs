//! Key handling: keys go through the ui handlers and the actions they return are checked.

use pokedex::{
    action::Action,
    reducer::reducer,
    state::{AppState, View},
    ui::{self, PokedexComponentId, PokedexUi},
};
use tui_dispatch::testing::*;

#[test]
fn test_digit_switches_view() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let actions = harness.send_keys::<PokedexComponentId, _, _>("2", |state, event| {
        ui::handle_global_event(&event.kind, state).actions
    });
    actions.assert_count(1);
    actions.assert_first(Action::ViewSelect(View::Chart));

    harness.dispatch_collect(Action::ViewSelect(View::Chart));
    harness.assert_state(|s| s.view == View::Chart);
}

#[test]
fn test_typing_bypasses_global_keys() {
    let state = AppState {
        search: pokedex::state::SearchState {
            active: true,
            ..Default::default()
        },
        ..AppState::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);
    let mut pokedex_ui = PokedexUi::new();

    let global = harness.send_keys::<PokedexComponentId, _, _>("q", |state, event| {
        ui::handle_global_event(&event.kind, state).actions
    });
    global.assert_count(0);

    let typed = harness.send_keys::<PokedexComponentId, _, _>("q", |state, event| {
        pokedex_ui.handle_search_event(&event.kind, state).actions
    });
    typed.assert_count(1);
    typed.assert_first(Action::SearchInput('q'));
}

#[test]
fn test_chart_key_cycles_ruleset() {
    let state = AppState {
        view: View::Chart,
        ..AppState::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);
    let mut pokedex_ui = PokedexUi::new();

    let actions = harness.send_keys::<PokedexComponentId, _, _>("g", |state, event| {
        pokedex_ui.handle_body_event(&event.kind, state).actions
    });
    actions.assert_first(Action::RulesetNext);
}

#[test]
fn test_ability_filter_keys() {
    let state = AppState {
        view: View::Abilities,
        ..AppState::default()
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);
    let mut pokedex_ui = PokedexUi::new();

    let start = harness.send_keys::<PokedexComponentId, _, _>("f", |state, event| {
        pokedex_ui.handle_body_event(&event.kind, state).actions
    });
    start.assert_first(Action::AbilityFilterStart);

    harness.dispatch_collect(Action::AbilityFilterStart);
    harness.assert_state(|s| s.is_typing());

    let typed = harness.send_keys::<PokedexComponentId, _, _>("f", |state, event| {
        pokedex_ui.handle_filter_event(&event.kind, state).actions
    });
    typed.assert_first(Action::AbilityFilterInput('f'));
}

#[test]
fn test_body_cursor_keys() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut pokedex_ui = PokedexUi::new();

    let down = harness.send_keys::<PokedexComponentId, _, _>("j", |state, event| {
        pokedex_ui.handle_body_event(&event.kind, state).actions
    });
    down.assert_first(Action::CursorSet(1));

    let up = harness.send_keys::<PokedexComponentId, _, _>("k", |state, event| {
        pokedex_ui.handle_body_event(&event.kind, state).actions
    });
    up.assert_first(Action::CursorSet(0));
}
