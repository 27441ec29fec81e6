//! View switching and back-navigation.

use crate::state::{
    AbilityViewState, AppState, AttackViewState, DetailState, HistoryEntry, HomeMode, ItemMode,
    ItemViewState, ListMode, View,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub url: Option<String>,
    pub is_back: bool,
    pub reset_mode: bool,
}

impl NavOptions {
    pub fn to_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn reset() -> Self {
        Self {
            reset_mode: true,
            ..Self::default()
        }
    }
}

/// Switches to `view`, recording the outgoing view unless this is a back step.
///
/// The view being left has its transient state cleared. Navigating to the
/// current view only updates the selected URL.
pub fn navigate(state: &mut AppState, view: View, options: NavOptions) {
    let previous = state.view;
    if view != previous {
        if !options.is_back {
            state.history.push(HistoryEntry {
                view: previous,
                home_mode: state.home.mode,
                url: state.detail.url.clone(),
            });
        }
        leave(state, previous);
    }
    if view == View::Home && options.reset_mode {
        reset_home(state);
    }
    state.view = view;
    state.detail.url = options.url;
}

fn leave(state: &mut AppState, view: View) {
    match view {
        View::Pokedex => state.detail = DetailState::default(),
        View::Items => state.item_view = ItemViewState::default(),
        View::Abilities => state.ability_view = AbilityViewState::default(),
        View::Attacks => state.attack_view = AttackViewState::default(),
        View::Home | View::Chart => {}
    }
}

pub fn reset_home(state: &mut AppState) {
    state.home.mode = HomeMode::Selection;
    state.home.selected_dex = None;
    state.home.list.clear();
    state.home.list_loading = false;
    state.home.list_cursor = 0;
    state.home.highlight_species = None;
    state.search.close();
}

/// One step back. Sub-views zoom out locally; everything else pops the history,
/// falling back to a reset home screen. Returns whether anything changed.
pub fn go_back(state: &mut AppState) -> bool {
    match state.view {
        View::Items if state.item_view.mode == ItemMode::List => {
            state.item_view.mode = ItemMode::Categories;
            state.item_view.category = None;
            state.item_view.cursor = 0;
            true
        }
        View::Abilities if state.ability_view.mode == ListMode::Detail => {
            state.ability_view.mode = ListMode::List;
            state.ability_view.selected = None;
            state.ability_view.pokemon_cursor = 0;
            true
        }
        View::Attacks if state.attack_view.mode == ListMode::Detail => {
            state.attack_view.mode = ListMode::List;
            state.attack_view.selected = None;
            state.attack_view.pokemon_cursor = 0;
            true
        }
        View::Home if state.home.mode == HomeMode::List => {
            reset_home(state);
            true
        }
        _ => match state.history.pop() {
            Some(entry) => {
                navigate(
                    state,
                    entry.view,
                    NavOptions {
                        url: entry.url,
                        is_back: true,
                        reset_mode: false,
                    },
                );
                if entry.view == View::Home {
                    state.home.mode = match entry.home_mode {
                        HomeMode::List if state.home.selected_dex.is_some() => HomeMode::List,
                        _ => HomeMode::Selection,
                    };
                }
                true
            }
            None if state.view != View::Home => {
                navigate(
                    state,
                    View::Home,
                    NavOptions {
                        is_back: true,
                        ..NavOptions::reset()
                    },
                );
                true
            }
            None => false,
        },
    }
}
