use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_dispatch::{
    Component, EventContext, EventKind, EventRoutingState, HandlerResponse, RenderContext,
};
use tui_dispatch_components::style::BorderStyle;
use tui_dispatch_components::{
    centered_rect, highlight_substring, BaseStyle, Padding, SelectList, SelectListBehavior,
    SelectListProps, SelectListStyle, SelectionStyle, StatusBar, StatusBarHint, StatusBarItem,
    StatusBarProps, StatusBarSection, StatusBarStyle,
};

use crate::action::Action;
use crate::assets;
use crate::dex;
use crate::evolution::{self, EvolutionNode};
use crate::forms;
use crate::normalize::{format_height, format_weight, title_case};
use crate::state::{
    AppState, DetailLink, HomeMode, ItemMode, ListMode, PokemonDetail, PokemonStat, SearchHit,
    View,
};
use crate::type_chart::{self, PokemonType, Ruleset};

const BG_BASE: Color = Color::Rgb(12, 18, 28);
const BG_PANEL: Color = Color::Rgb(20, 32, 46);
const BG_HIGHLIGHT: Color = Color::Rgb(28, 92, 110);
const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);
const ACCENT_RED: Color = Color::Rgb(232, 96, 88);

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PokedexComponentId {
    Body,
    Search,
    AbilityFilter,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokedexContext {
    Body,
    Search,
    AbilityFilter,
}

impl EventRoutingState<PokedexComponentId, PokedexContext> for AppState {
    fn focused(&self) -> Option<PokedexComponentId> {
        if self.search.active {
            Some(PokedexComponentId::Search)
        } else if self.ability_view.filtering {
            Some(PokedexComponentId::AbilityFilter)
        } else {
            Some(PokedexComponentId::Body)
        }
    }

    fn modal(&self) -> Option<PokedexComponentId> {
        if self.search.active {
            Some(PokedexComponentId::Search)
        } else if self.ability_view.filtering {
            Some(PokedexComponentId::AbilityFilter)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PokedexComponentId) -> PokedexContext {
        match id {
            PokedexComponentId::Body => PokedexContext::Body,
            PokedexComponentId::Search => PokedexContext::Search,
            PokedexComponentId::AbilityFilter => PokedexContext::AbilityFilter,
        }
    }

    fn default_context(&self) -> PokedexContext {
        PokedexContext::Body
    }
}

/// Which list the body cursor currently drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListSlot {
    Catalogue,
    DexEntries,
    Types,
    Links,
    Categories,
    Items,
    Abilities,
    AbilityPokemon,
    Attacks,
    AttackPokemon,
    Search,
}

impl ListSlot {
    fn of(state: &AppState) -> Self {
        if state.search.visible() {
            return ListSlot::Search;
        }
        match state.view {
            View::Home => match state.home.mode {
                HomeMode::Selection => ListSlot::Catalogue,
                HomeMode::List => ListSlot::DexEntries,
            },
            View::Chart => ListSlot::Types,
            View::Pokedex => ListSlot::Links,
            View::Items => match state.item_view.mode {
                ItemMode::Categories => ListSlot::Categories,
                ItemMode::List => ListSlot::Items,
            },
            View::Abilities => match state.ability_view.mode {
                ListMode::List => ListSlot::Abilities,
                ListMode::Detail => ListSlot::AbilityPokemon,
            },
            View::Attacks => match state.attack_view.mode {
                ListMode::List => ListSlot::Attacks,
                ListMode::Detail => ListSlot::AttackPokemon,
            },
        }
    }
}

pub struct PokedexUi {
    catalogue: SelectList,
    dex_entries: SelectList,
    types: SelectList,
    links: SelectList,
    categories: SelectList,
    items: SelectList,
    abilities: SelectList,
    ability_pokemon: SelectList,
    attacks: SelectList,
    attack_pokemon: SelectList,
    search: SelectList,
    status_bar: StatusBar,
}

impl Default for PokedexUi {
    fn default() -> Self {
        Self::new()
    }
}

impl PokedexUi {
    pub fn new() -> Self {
        Self {
            catalogue: SelectList::new(),
            dex_entries: SelectList::new(),
            types: SelectList::new(),
            links: SelectList::new(),
            categories: SelectList::new(),
            items: SelectList::new(),
            abilities: SelectList::new(),
            ability_pokemon: SelectList::new(),
            attacks: SelectList::new(),
            attack_pokemon: SelectList::new(),
            search: SelectList::new(),
            status_bar: StatusBar::new(),
        }
    }

    fn list_mut(&mut self, slot: ListSlot) -> &mut SelectList {
        match slot {
            ListSlot::Catalogue => &mut self.catalogue,
            ListSlot::DexEntries => &mut self.dex_entries,
            ListSlot::Types => &mut self.types,
            ListSlot::Links => &mut self.links,
            ListSlot::Categories => &mut self.categories,
            ListSlot::Items => &mut self.items,
            ListSlot::Abilities => &mut self.abilities,
            ListSlot::AbilityPokemon => &mut self.ability_pokemon,
            ListSlot::Attacks => &mut self.attacks,
            ListSlot::AttackPokemon => &mut self.attack_pokemon,
            ListSlot::Search => &mut self.search,
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        _render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokedexComponentId>,
    ) {
        let layout = frame_layout(area);
        event_ctx.set_component_area(PokedexComponentId::Body, layout[1]);
        if state.search.active {
            event_ctx.set_component_area(PokedexComponentId::Search, layout[0]);
        }
        if state.ability_view.filtering {
            event_ctx.set_component_area(PokedexComponentId::AbilityFilter, layout[1]);
        }
        self.draw(frame, area, state);
    }

    /// Draws the whole frame.
    pub fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);
        let layout = frame_layout(area);

        render_header(frame, layout[0], state);
        match state.view {
            View::Home => self.render_home(frame, layout[1], state),
            View::Chart => self.render_chart(frame, layout[1], state),
            View::Pokedex => self.render_detail(frame, layout[1], state),
            View::Items => self.render_items(frame, layout[1], state),
            View::Abilities => self.render_abilities(frame, layout[1], state),
            View::Attacks => self.render_attacks(frame, layout[1], state),
        }
        self.render_footer(frame, layout[2], state);

        if state.search.active || state.search.visible() {
            self.render_search(frame, layout[1], state);
        }
    }

    pub fn handle_body_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let cursor = state.active_cursor();
        let actions = match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter => vec![Action::Confirm],
                KeyCode::Char('g') if state.view == View::Chart => vec![Action::RulesetNext],
                KeyCode::Char('[') if state.view == View::Pokedex => vec![Action::EraPrev],
                KeyCode::Char(']') if state.view == View::Pokedex => vec![Action::EraNext],
                KeyCode::Char('f')
                    if state.view == View::Abilities
                        && state.ability_view.mode == ListMode::List =>
                {
                    vec![Action::AbilityFilterStart]
                }
                KeyCode::Char('j') => vec![Action::CursorSet(cursor + 1)],
                KeyCode::Char('k') => vec![Action::CursorSet(cursor.saturating_sub(1))],
                KeyCode::PageDown => vec![Action::CursorSet(cursor + page_size(state))],
                KeyCode::PageUp => vec![Action::CursorSet(cursor.saturating_sub(page_size(state)))],
                _ => return self.handle_list_event(event, state),
            },
            EventKind::Scroll { delta, .. } => {
                let next = cursor as i64 + (*delta as i64) * 3;
                vec![Action::CursorSet(next.max(0) as usize)]
            }
            _ => vec![],
        };
        handler_response(actions)
    }

    pub fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let actions = match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Esc => vec![Action::SearchClose],
                KeyCode::Enter => vec![Action::Confirm],
                KeyCode::Backspace => vec![Action::SearchBackspace],
                KeyCode::Up | KeyCode::Down => return self.handle_list_event(event, state),
                KeyCode::Char(ch) => vec![Action::SearchInput(ch)],
                _ => vec![],
            },
            _ => vec![],
        };
        handler_response(actions)
    }

    pub fn handle_filter_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let actions = match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter => vec![Action::AbilityFilterEnd],
                KeyCode::Backspace => vec![Action::AbilityFilterBackspace],
                KeyCode::Up | KeyCode::Down => return self.handle_list_event(event, state),
                KeyCode::Char(ch) => vec![Action::AbilityFilterInput(ch)],
                _ => vec![],
            },
            _ => vec![],
        };
        handler_response(actions)
    }

    fn handle_list_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let slot = ListSlot::of(state);
        let items = slot_items(slot, state);
        if items.is_empty() {
            return HandlerResponse::ignored();
        }
        let props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: state.active_cursor().min(items.len().saturating_sub(1)),
            is_focused: true,
            style: list_style(BG_PANEL),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::CursorSet,
            render_item: &|item| item.clone(),
        };
        let actions: Vec<_> = self
            .list_mut(slot)
            .handle_event(event, props)
            .into_iter()
            .collect();
        handler_response(actions)
    }

    fn render_slot(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        slot: ListSlot,
        empty: &str,
    ) {
        let items = slot_items(slot, state);
        if items.is_empty() {
            frame.render_widget(
                Paragraph::new(empty.to_string())
                    .style(Style::default().fg(TEXT_DIM))
                    .wrap(Wrap { trim: true }),
                area,
            );
            return;
        }
        let focused = ListSlot::of(state) == slot;
        let selected = if focused {
            state.active_cursor()
        } else {
            slot_cursor(slot, state)
        };
        let props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: selected.min(items.len().saturating_sub(1)),
            is_focused: focused,
            style: list_style(BG_PANEL),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::CursorSet,
            render_item: &|item| item.clone(),
        };
        self.list_mut(slot).render(frame, area, props);
    }

    fn render_home(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        match state.home.mode {
            HomeMode::Selection => {
                let inner = panel(frame, area, "POKÉDEXES", true);
                self.render_slot(frame, inner, state, ListSlot::Catalogue, "No Pokédexes.");
            }
            HomeMode::List => {
                let title = state
                    .home
                    .selected_dex
                    .as_ref()
                    .map(|dex| dex.name.to_uppercase())
                    .unwrap_or_else(|| "POKÉDEX".to_string());
                let inner = panel(frame, area, &title, true);
                if state.home.list_loading || (state.loading.pokemon && state.home.list.is_empty()) {
                    frame.render_widget(
                        Paragraph::new(format!("Loading{}", dots(state.tick)))
                            .style(Style::default().fg(ACCENT_GOLD)),
                        inner,
                    );
                    return;
                }
                self.render_slot(frame, inner, state, ListSlot::DexEntries, "No Pokémon found.");
            }
        }
    }

    fn render_chart(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(36), Constraint::Percentage(64)])
            .split(area);

        let inner = panel(frame, columns[0], "DEFENDING TYPES", true);
        self.render_slot(frame, inner, state, ListSlot::Types, "");

        let title = format!("ATTACK MULTIPLIERS ({})", state.chart.ruleset.label());
        let inner = panel(frame, columns[1], &title, false);
        frame.render_widget(
            Paragraph::new(chart_text(state)).style(Style::default().fg(TEXT_MAIN)),
            inner,
        );
    }

    fn render_detail(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let detail = &state.detail;
        let placeholder = if detail.url.is_none() {
            Some("Select a Pokémon from a Pokédex or search with /.".to_string())
        } else if detail.loading {
            Some(format!("Loading{}", dots(state.tick)))
        } else if detail.failed || detail.entry.is_none() {
            Some("Could not load this Pokémon.".to_string())
        } else {
            None
        };
        let Some(entry) = detail.entry.as_ref().filter(|_| placeholder.is_none()) else {
            let inner = panel(frame, area, "POKÉDEX", false);
            frame.render_widget(
                Paragraph::new(placeholder.unwrap_or_default())
                    .style(Style::default().fg(TEXT_DIM))
                    .wrap(Wrap { trim: true }),
                inner,
            );
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let (name, badges) = forms::name_and_badges(&entry.name, state.pokemon.form_info.get(&entry.name));
        let title = format!("#{:04} {}", entry.species_id, name.to_uppercase());
        let inner = panel(frame, columns[0], &title, false);
        let era = state.detail.era.as_deref().unwrap_or(dex::DEFAULT_ERA);
        let mut lines = profile_text(entry, &badges);
        lines.extend(era_text(entry, era));
        lines.extend(defenses_text(&entry.types, state.chart.ruleset));
        lines.extend(era_entry_text(entry, era));
        lines.extend(evolution_text(state));
        lines.extend(asset_text(entry));
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(TEXT_MAIN))
                .wrap(Wrap { trim: false }),
            inner,
        );

        let inner = panel(frame, columns[1], "LINKS", true);
        self.render_slot(frame, inner, state, ListSlot::Links, "Nothing to browse.");
    }

    fn render_items(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.loading.items && state.items.is_empty() {
            let inner = panel(frame, area, "ITEMS", false);
            frame.render_widget(loading_paragraph("items", state.tick), inner);
            return;
        }
        match state.item_view.mode {
            ItemMode::Categories => {
                let inner = panel(frame, area, "ITEM CATEGORIES", true);
                self.render_slot(frame, inner, state, ListSlot::Categories, "No items.");
            }
            ItemMode::List => {
                let columns = split_columns(area);
                let title = state
                    .item_view
                    .category
                    .as_deref()
                    .unwrap_or("ITEMS")
                    .to_uppercase();
                let inner = panel(frame, columns[0], &title, true);
                self.render_slot(frame, inner, state, ListSlot::Items, "No items.");

                let inner = panel(frame, columns[1], "ITEM", false);
                frame.render_widget(
                    Paragraph::new(item_text(state))
                        .style(Style::default().fg(TEXT_MAIN))
                        .wrap(Wrap { trim: true }),
                    inner,
                );
            }
        }
    }

    fn render_abilities(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.loading.abilities && state.abilities.is_empty() {
            let inner = panel(frame, area, "ABILITIES", false);
            frame.render_widget(loading_paragraph("abilities", state.tick), inner);
            return;
        }
        match state.ability_view.mode {
            ListMode::List => {
                let inner = panel(frame, area, "ABILITIES", true);
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(1)])
                    .split(inner);
                let cursor = if state.ability_view.filtering { "_" } else { "" };
                let filter = Line::from(vec![
                    Span::styled("Filter (f): ", Style::default().fg(TEXT_DIM)),
                    Span::styled(
                        format!("{}{cursor}", state.ability_view.filter),
                        Style::default().fg(ACCENT_TEAL),
                    ),
                ]);
                frame.render_widget(Paragraph::new(filter), rows[0]);
                self.render_slot(frame, rows[1], state, ListSlot::Abilities, "No matching abilities.");
            }
            ListMode::Detail => {
                let columns = split_columns(area);
                let Some(ability) = &state.ability_view.selected else {
                    return;
                };
                let inner = panel(frame, columns[0], &title_case(&ability.name).to_uppercase(), false);
                let text = Text::from(vec![
                    Line::from(Span::styled(
                        ability.generation.clone(),
                        Style::default().fg(ACCENT_GOLD),
                    )),
                    Line::default(),
                    Line::from(ability.flavor_text.clone()),
                    Line::default(),
                    Line::from(Span::styled("Effect", section_style())),
                    Line::from(ability.effect.clone()),
                ]);
                frame.render_widget(
                    Paragraph::new(text)
                        .style(Style::default().fg(TEXT_MAIN))
                        .wrap(Wrap { trim: true }),
                    inner,
                );
                let title = format!("POKÉMON ({})", ability.pokemon.len());
                let inner = panel(frame, columns[1], &title, true);
                self.render_slot(frame, inner, state, ListSlot::AbilityPokemon, "No Pokémon.");
            }
        }
    }

    fn render_attacks(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.loading.attacks && state.attacks.is_empty() {
            let inner = panel(frame, area, "ATTACKS", false);
            frame.render_widget(loading_paragraph("attacks", state.tick), inner);
            return;
        }
        let columns = split_columns(area);
        match state.attack_view.mode {
            ListMode::List => {
                let inner = panel(frame, columns[0], "ATTACKS", true);
                self.render_slot(frame, inner, state, ListSlot::Attacks, "No attacks.");
                let highlighted = state.attacks.get(state.attack_view.cursor);
                let inner = panel(frame, columns[1], "ATTACK", false);
                frame.render_widget(
                    Paragraph::new(highlighted.map(attack_text).unwrap_or_default())
                        .style(Style::default().fg(TEXT_MAIN))
                        .wrap(Wrap { trim: true }),
                    inner,
                );
            }
            ListMode::Detail => {
                let Some(attack) = &state.attack_view.selected else {
                    return;
                };
                let inner = panel(frame, columns[0], &title_case(&attack.name).to_uppercase(), false);
                frame.render_widget(
                    Paragraph::new(attack_text(attack))
                        .style(Style::default().fg(TEXT_MAIN))
                        .wrap(Wrap { trim: true }),
                    inner,
                );
                let title = format!("LEARNED BY ({})", attack.learned_by.len());
                let inner = panel(frame, columns[1], &title, true);
                self.render_slot(frame, inner, state, ListSlot::AttackPokemon, "No Pokémon.");
            }
        }
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let modal = centered_rect(60, 16, area);
        frame.render_widget(Clear, modal);
        let title = format!("SEARCH /{}_", state.search.term);
        let inner = panel(frame, modal, &title, true);
        let empty = if state.search.visible() {
            "No matches."
        } else {
            "Type to search Pokémon, items, abilities and attacks."
        };
        self.render_slot(frame, inner, state, ListSlot::Search, empty);
    }

    fn render_footer(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let status = status_text(state);
        let hints = status_hints(state);
        let status_span = Span::styled(status.as_str(), Style::default().fg(ACCENT_GOLD));
        let status_items = [StatusBarItem::span(status_span)];

        let style = StatusBarStyle {
            base: BaseStyle {
                border: Some(BorderStyle {
                    borders: Borders::ALL,
                    style: Style::default().fg(TEXT_DIM),
                    focused_style: Some(Style::default().fg(ACCENT_TEAL)),
                }),
                padding: Padding::xy(1, 0),
                bg: Some(BG_PANEL),
                fg: Some(TEXT_MAIN),
            },
            text: Style::default().fg(TEXT_DIM),
            hint_key: Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(TEXT_DIM),
            separator: Style::default().fg(TEXT_DIM),
        };

        let props = StatusBarProps {
            left: StatusBarSection::hints(&hints).with_separator("  "),
            center: StatusBarSection::empty(),
            right: StatusBarSection::items(&status_items).with_separator("  "),
            style,
            is_focused: false,
        };
        Component::<Action>::render(&mut self.status_bar, frame, area, props);
    }
}

pub fn handle_global_event(event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
    match event {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(*width, *height)).with_render()
        }
        EventKind::Key(key) if !state.is_typing() => match key.code {
            KeyCode::Char('q') => HandlerResponse::action(Action::Quit),
            KeyCode::Char('/') => HandlerResponse::action(Action::SearchStart),
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                HandlerResponse::action(Action::ViewSelect(View::ALL[index]))
            }
            KeyCode::Esc | KeyCode::Backspace => HandlerResponse::action(Action::NavigateBack),
            _ => HandlerResponse::ignored(),
        },
        _ => HandlerResponse::ignored(),
    }
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn frame_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area)
}

fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area)
}

/// Draws a bordered panel and returns its inner area.
fn panel(frame: &mut Frame, area: Rect, title: &str, focused: bool) -> Rect {
    let border = if focused {
        Style::default()
            .fg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(index, view)| Line::from(format!("{} {}", index + 1, view.label())))
        .collect();
    let selected = View::ALL
        .iter()
        .position(|view| *view == state.view)
        .unwrap_or(0);
    let search = if state.search.active {
        format!("  /{}_", state.search.term)
    } else {
        String::new()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("POKÉDEX{search}"))
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(ACCENT_TEAL));
    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .style(Style::default().fg(TEXT_DIM))
        .highlight_style(
            Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn slot_items(slot: ListSlot, state: &AppState) -> Vec<Line<'static>> {
    match slot {
        ListSlot::Catalogue => catalogue_items(),
        ListSlot::DexEntries => dex_entry_items(state),
        ListSlot::Types => type_items(state),
        ListSlot::Links => link_items(state),
        ListSlot::Categories => category_items(state),
        ListSlot::Items => state
            .category_items()
            .into_iter()
            .map(|item| Line::from(title_case(&item.name)))
            .collect(),
        ListSlot::Abilities => state
            .filtered_abilities()
            .into_iter()
            .map(|ability| Line::from(title_case(&ability.name)))
            .collect(),
        ListSlot::AbilityPokemon => state
            .ability_view
            .selected
            .as_ref()
            .map(|ability| pokemon_items(state, &ability.pokemon))
            .unwrap_or_default(),
        ListSlot::Attacks => state
            .attacks
            .iter()
            .map(|attack| {
                Line::from(vec![
                    Span::raw(format!("{:<22}", title_case(&attack.name))),
                    type_span(&attack.move_type),
                ])
            })
            .collect(),
        ListSlot::AttackPokemon => state
            .attack_view
            .selected
            .as_ref()
            .map(|attack| pokemon_items(state, &attack.learned_by))
            .unwrap_or_default(),
        ListSlot::Search => search_items(state),
    }
}

/// Cursor a list shows while some other list has focus.
fn slot_cursor(slot: ListSlot, state: &AppState) -> usize {
    match slot {
        ListSlot::Catalogue => state.home.catalogue_cursor,
        ListSlot::DexEntries => state.home.list_cursor,
        ListSlot::Types => state.chart.cursor,
        ListSlot::Links => state.detail.cursor,
        ListSlot::Categories => state.item_view.category_cursor,
        ListSlot::Items => state.item_view.cursor,
        ListSlot::Abilities => state.ability_view.cursor,
        ListSlot::AbilityPokemon => state.ability_view.pokemon_cursor,
        ListSlot::Attacks => state.attack_view.cursor,
        ListSlot::AttackPokemon => state.attack_view.pokemon_cursor,
        ListSlot::Search => state.search.cursor,
    }
}

fn catalogue_items() -> Vec<Line<'static>> {
    dex::catalogue()
        .into_iter()
        .map(|dex| {
            let group = match dex.category {
                dex::DexCategory::Generation => "GEN",
                dex::DexCategory::Game => "GAME",
                dex::DexCategory::Other => "OTHER",
                dex::DexCategory::EggGroup => "EGG",
            };
            Line::from(vec![
                Span::styled(format!("{group:<6}"), Style::default().fg(TEXT_DIM)),
                Span::raw(dex.name),
            ])
        })
        .collect()
}

fn dex_entry_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .home
        .list
        .iter()
        .map(|entry| {
            let (name, badges) =
                forms::name_and_badges(&entry.name, state.pokemon.form_info.get(&entry.name));
            let mut spans = vec![
                Span::styled(format!("#{:04} ", entry.number), Style::default().fg(TEXT_DIM)),
                Span::raw(format!("{name:<14}")),
            ];
            spans.extend(entry.types.iter().map(|ty| type_tag(*ty)));
            if !badges.is_empty() {
                spans.push(Span::styled(
                    format!(" [{}]", badges.join(", ")),
                    Style::default().fg(ACCENT_TEAL),
                ));
            }
            if entry.has_gmax {
                spans.push(Span::styled(" G-Max", Style::default().fg(ACCENT_RED)));
            }
            Line::from(spans)
        })
        .collect()
}

fn type_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .displayed_types()
        .into_iter()
        .map(|ty| {
            let marker = if state.chart.defenders.contains(&ty) {
                "[x] "
            } else {
                "[ ] "
            };
            Line::from(vec![Span::raw(marker), type_tag(ty)])
        })
        .collect()
}

fn chart_text(state: &AppState) -> Text<'static> {
    let ruleset = state.chart.ruleset;
    let defenders = &state.chart.defenders;
    if defenders.is_empty() {
        return Text::from(Line::from(Span::styled(
            "Pick up to two defending types with Enter. g cycles the ruleset.",
            Style::default().fg(TEXT_DIM),
        )));
    }
    let names: Vec<&str> = defenders.iter().map(|ty| ty.name()).collect();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Defending: ", Style::default().fg(TEXT_DIM)),
            Span::styled(names.join(" / "), section_style()),
        ]),
        Line::default(),
    ];
    lines.extend(type_chart::displayed_types(ruleset).into_iter().map(|attacker| {
        let value = type_chart::multiplier(attacker, defenders, ruleset);
        Line::from(vec![
            Span::raw(format!("{:<10}", attacker.name())),
            Span::styled(format_multiplier(value), multiplier_style(value)),
        ])
    }));
    Text::from(lines)
}

fn format_multiplier(value: f64) -> String {
    match value {
        v if v == 0.0 => "x0".to_string(),
        v if v == 0.25 => "x¼".to_string(),
        v if v == 0.5 => "x½".to_string(),
        v => format!("x{v}"),
    }
}

fn multiplier_style(value: f64) -> Style {
    if value == 0.0 {
        Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM)
    } else if value > 1.0 {
        Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD)
    } else if value < 1.0 {
        Style::default().fg(ACCENT_TEAL)
    } else {
        Style::default().fg(TEXT_MAIN)
    }
}

fn profile_text(entry: &PokemonDetail, badges: &[String]) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        entry.genus.clone().unwrap_or_default(),
        Style::default().fg(TEXT_DIM),
    )];
    if !badges.is_empty() {
        header.push(Span::styled(
            format!("  [{}]", badges.join(", ")),
            Style::default().fg(ACCENT_TEAL),
        ));
    }
    let mut types = vec![Span::styled(format!("{:<12}", "Type"), Style::default().fg(TEXT_DIM))];
    types.extend(entry.types.iter().map(|ty| type_tag(*ty)));

    let abilities: Vec<String> = entry
        .abilities
        .iter()
        .map(|ability| {
            let name = title_case(&ability.name);
            if ability.hidden {
                format!("{name} (hidden)")
            } else {
                name
            }
        })
        .collect();
    let optional = |value: Option<u32>| value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string());

    let mut lines = vec![
        Line::from(header),
        Line::from(types),
        labeled("Height", format_height(entry.height)),
        labeled("Weight", format_weight(entry.weight)),
        labeled("Abilities", abilities.join(", ")),
        Line::default(),
        labeled("EV yield", ev_yield(entry)),
        labeled("Catch rate", optional(entry.capture_rate)),
        labeled("Friendship", optional(entry.base_happiness)),
        labeled(
            "Growth",
            entry.growth_rate.as_deref().map(title_case).unwrap_or_default(),
        ),
        labeled("Gender", gender_ratio(entry.gender_rate)),
        labeled(
            "Egg groups",
            entry
                .egg_groups
                .iter()
                .map(|group| title_case(group))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Line::default(),
    ];
    lines.extend(entry.stats.iter().map(|stat| Line::from(render_stat(stat))));
    lines
}

/// Entry text and encounter data for the selected game era.
fn era_entry_text(entry: &PokemonDetail, era: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    lines.push(match dex::flavor_for_era(entry, era) {
        Some(flavor) => Line::from(Span::styled(
            flavor.to_string(),
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
        )),
        None => Line::from(Span::styled(
            "No entry available for this game era.",
            Style::default().fg(TEXT_DIM),
        )),
    });
    if !entry.held_items.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("HELD ITEMS", section_style())));
        let held = dex::held_items_for_era(entry, era);
        if held.is_empty() {
            lines.push(Line::from(Span::styled(
                "None in this generation.",
                Style::default().fg(TEXT_DIM),
            )));
        }
        lines.extend(
            held.into_iter()
                .map(|(name, rarity)| labeled_wide(&name, format!("{rarity}%"))),
        );
    }
    let locations = dex::locations_for_era(entry, era);
    if !locations.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("LOCATIONS", section_style())));
        lines.extend(locations.into_iter().map(Line::from));
    }
    lines
}

fn asset_text(entry: &PokemonDetail) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        labeled("Artwork", assets::artwork_url(entry.id)),
        labeled("Sprite", assets::sprite_url(entry.id)),
        labeled("Cry", assets::cry_url(entry.id)),
    ]
}

/// `+2 Speed, +1 Sp. Atk`, or `None`.
fn ev_yield(entry: &PokemonDetail) -> String {
    let gains: Vec<String> = entry
        .stats
        .iter()
        .filter(|stat| stat.effort > 0)
        .map(|stat| {
            let name = match stat.name.as_str() {
                "special-attack" => "Sp. Atk".to_string(),
                "special-defense" => "Sp. Def".to_string(),
                "hp" => "HP".to_string(),
                other => title_case(other),
            };
            format!("+{} {name}", stat.effort)
        })
        .collect();
    if gains.is_empty() {
        "None".to_string()
    } else {
        gains.join(", ")
    }
}

/// Gender rate is the female chance in eighths.
fn gender_ratio(rate: Option<i32>) -> String {
    match rate {
        None => "N/A".to_string(),
        Some(rate) if rate < 0 => "Genderless".to_string(),
        Some(rate) => {
            let female = f64::from(rate.min(8)) * 12.5;
            format!("♂ {}%  ♀ {}%", 100.0 - female, female)
        }
    }
}

/// Non-neutral multipliers against the given defending types, strongest first.
fn defense_groups(types: &[PokemonType], ruleset: Ruleset) -> Vec<(f64, Vec<PokemonType>)> {
    let mut groups: Vec<(f64, Vec<PokemonType>)> = [4.0, 2.0, 0.5, 0.25, 0.0]
        .into_iter()
        .map(|value| (value, Vec::new()))
        .collect();
    for attacker in type_chart::displayed_types(ruleset) {
        let value = type_chart::multiplier(attacker, types, ruleset);
        if let Some((_, members)) = groups.iter_mut().find(|(group, _)| *group == value) {
            members.push(attacker);
        }
    }
    groups.retain(|(_, members)| !members.is_empty());
    groups
}

fn defenses_text(types: &[PokemonType], ruleset: Ruleset) -> Vec<Line<'static>> {
    if types.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("TYPE DEFENSES (vs. {} rules)", ruleset.label()),
            section_style(),
        )),
    ];
    lines.extend(defense_groups(types, ruleset).into_iter().map(|(value, members)| {
        let mut spans = vec![Span::styled(
            format!("{:<5}", format_multiplier(value)),
            multiplier_style(value),
        )];
        for ty in members {
            spans.push(type_tag(ty));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }));
    lines
}

fn labeled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(TEXT_DIM)),
        Span::raw(value),
    ])
}

fn labeled_wide(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<24}"), Style::default().fg(TEXT_MAIN)),
        Span::styled(value, Style::default().fg(TEXT_DIM)),
    ])
}

fn era_text(entry: &PokemonDetail, current: &str) -> Vec<Line<'static>> {
    let mut spans = vec![Span::styled(format!("{:<12}", "Era [ ]"), Style::default().fg(TEXT_DIM))];
    for era in dex::available_eras(entry) {
        let style = if era == current {
            Style::default()
                .fg(BG_BASE)
                .bg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_DIM)
        };
        spans.push(Span::styled(format!(" {} ", era.trim_start_matches("Gen ")), style));
    }
    vec![Line::default(), Line::from(spans)]
}

fn evolution_text(state: &AppState) -> Vec<Line<'static>> {
    if state.detail.evolution_loading {
        return vec![
            Line::default(),
            Line::from(Span::styled("Loading evolution...", Style::default().fg(ACCENT_GOLD))),
        ];
    }
    let active = state.detail.active_form.as_deref().unwrap_or_default();
    let Some(root) = state.detail.evolution.as_ref() else {
        return Vec::new();
    };
    if !evolution::should_show(active, Some(root)) {
        return Vec::new();
    }
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("EVOLUTION", section_style())),
    ];
    evolution_lines(root, 0, None, active, &mut lines);
    lines
}

fn evolution_lines(
    node: &EvolutionNode,
    depth: usize,
    condition: Option<&str>,
    active: &str,
    out: &mut Vec<Line<'static>>,
) {
    let indent = "  ".repeat(depth);
    let arrow = if depth == 0 { "" } else { "→ " };
    let name_style = if node.name == active {
        Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MAIN)
    };
    let mut spans = vec![
        Span::raw(format!("{indent}{arrow}")),
        Span::styled(title_case(&node.name), name_style),
    ];
    if let Some(condition) = condition.filter(|text| !text.is_empty()) {
        spans.push(Span::styled(format!(" ({condition})"), Style::default().fg(TEXT_DIM)));
    }
    out.push(Line::from(spans));
    for edge in &node.evolves_to {
        evolution_lines(&edge.node, depth + 1, Some(&edge.condition), active, out);
    }
}

fn link_items(state: &AppState) -> Vec<Line<'static>> {
    let Some(entry) = &state.detail.entry else {
        return Vec::new();
    };
    state
        .detail_links()
        .into_iter()
        .map(|link| {
            let (kind, label) = match link {
                DetailLink::Form { name, .. } => {
                    let (species, badges) =
                        forms::name_and_badges(&name, state.pokemon.form_info.get(&name));
                    let label = if badges.is_empty() {
                        title_case(&name)
                    } else {
                        format!("{species} ({})", badges.join(", "))
                    };
                    ("Form", label)
                }
                DetailLink::Evolution { name, .. } => ("Evolution", title_case(&name)),
                DetailLink::Ability(name) => ("Ability", title_case(&name)),
                DetailLink::EggGroup(group) => ("Egg group", title_case(&group)),
                DetailLink::Dex(pokedex) => {
                    let dex_name = dex::find_pokedex(&pokedex)
                        .map(|dex| dex.name)
                        .unwrap_or_else(|| title_case(&pokedex));
                    let number = entry
                        .pokedex_numbers
                        .iter()
                        .find(|number| number.pokedex == pokedex)
                        .map(|number| number.number)
                        .unwrap_or_default();
                    ("Dex", format!("{dex_name} #{number:03}"))
                }
                DetailLink::Move(name) => ("Move", title_case(&name)),
            };
            Line::from(vec![
                Span::styled(format!("{kind:<10}"), Style::default().fg(TEXT_DIM)),
                Span::raw(label),
            ])
        })
        .collect()
}

fn category_items(state: &AppState) -> Vec<Line<'static>> {
    state
        .item_categories()
        .into_iter()
        .map(|category| {
            let count = state
                .items
                .iter()
                .filter(|item| item.category == category)
                .count();
            Line::from(vec![
                Span::raw(format!("{category:<24}")),
                Span::styled(format!("{count:>4}"), Style::default().fg(TEXT_DIM)),
            ])
        })
        .collect()
}

fn item_text(state: &AppState) -> Text<'static> {
    let items = state.category_items();
    let Some(item) = items.get(state.item_view.cursor) else {
        return Text::default();
    };
    Text::from(vec![
        Line::from(Span::styled(title_case(&item.name), section_style())),
        labeled("Cost", format!("₽{}", item.cost)),
        labeled("Category", item.category.clone()),
        Line::default(),
        Line::from(item.effect.clone()),
        Line::default(),
        Line::from(Span::styled(
            item.flavor_text.clone(),
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        labeled("Games", item.games.join(", ")),
        labeled("Sprite", item.sprite_url.clone()),
    ])
}

fn attack_text(attack: &crate::state::AttackRecord) -> Text<'static> {
    let stat = |value: Option<u32>| value.map(|value| value.to_string()).unwrap_or_else(|| "-".to_string());
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<10}", "Type"), Style::default().fg(TEXT_DIM)),
            type_span(&attack.move_type),
        ]),
        labeled("Class", title_case(&attack.damage_class)),
        labeled("Power", stat(attack.power)),
        labeled("PP", stat(attack.pp)),
        labeled("Accuracy", stat(attack.accuracy)),
        labeled("Intro", attack.generation.clone()),
        Line::default(),
        Line::from(attack.short_effect.clone()),
    ];
    if !attack.flavor_text.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            attack.flavor_text.clone(),
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC),
        )));
    }
    if !attack.machines.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Machines", section_style())));
        lines.extend(attack.machines.iter().map(|machine| {
            labeled(&machine.tm_number, title_case(&machine.version_group))
        }));
    }
    Text::from(lines)
}

fn pokemon_items(state: &AppState, pokemon: &[crate::state::PokemonRef]) -> Vec<Line<'static>> {
    pokemon
        .iter()
        .map(|reference| {
            let (name, badges) = forms::name_and_badges(
                &reference.name,
                state.pokemon.form_info.get(&reference.name),
            );
            let mut spans = vec![Span::raw(name)];
            if !badges.is_empty() {
                spans.push(Span::styled(
                    format!(" [{}]", badges.join(", ")),
                    Style::default().fg(ACCENT_TEAL),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

fn search_items(state: &AppState) -> Vec<Line<'static>> {
    let term = state.search.term.trim().to_string();
    let base = Style::default().fg(TEXT_MAIN);
    let highlight = Style::default()
        .fg(ACCENT_GOLD)
        .add_modifier(Modifier::BOLD);
    state
        .search_hits()
        .into_iter()
        .map(|hit| {
            let (kind, name) = match hit {
                SearchHit::Pokemon { name, .. } => ("Pokémon", name),
                SearchHit::Item { name, .. } => ("Item", name),
                SearchHit::Ability(name) => ("Ability", name),
                SearchHit::Attack(name) => ("Attack", name),
            };
            let mut line = highlight_substring(&name, &term, base, highlight);
            line.spans.insert(
                0,
                Span::styled(format!("{kind:<9}"), Style::default().fg(TEXT_DIM)),
            );
            line
        })
        .collect()
}

fn status_text(state: &AppState) -> String {
    if let Some(message) = &state.message {
        return message.clone();
    }
    let pending: Vec<&str> = [
        (state.loading.pokemon, "Pokémon"),
        (state.loading.items, "items"),
        (state.loading.abilities, "abilities"),
        (state.loading.attacks, "attacks"),
    ]
    .into_iter()
    .filter(|(loading, _)| *loading)
    .map(|(_, label)| label)
    .collect();
    if pending.is_empty() {
        String::new()
    } else {
        format!("Loading {}{}", pending.join(", "), dots(state.tick))
    }
}

fn status_hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
    if state.search.active {
        return vec![
            StatusBarHint::new("Enter", "Open"),
            StatusBarHint::new("Esc", "Close"),
            StatusBarHint::new("↑↓", "Move"),
        ];
    }
    if state.ability_view.filtering {
        return vec![
            StatusBarHint::new("Enter", "Done"),
            StatusBarHint::new("Bksp", "Delete"),
        ];
    }
    let mut hints = vec![
        StatusBarHint::new("1-6", "View"),
        StatusBarHint::new("Enter", "Select"),
        StatusBarHint::new("Esc", "Back"),
        StatusBarHint::new("/", "Search"),
    ];
    match state.view {
        View::Chart => hints.push(StatusBarHint::new("g", "Ruleset")),
        View::Pokedex => hints.push(StatusBarHint::new("[ ]", "Era")),
        View::Abilities if state.ability_view.mode == ListMode::List => {
            hints.push(StatusBarHint::new("f", "Filter"))
        }
        _ => {}
    }
    hints.push(StatusBarHint::new("q", "Quit"));
    hints
}

fn loading_paragraph(what: &str, tick: u64) -> Paragraph<'static> {
    Paragraph::new(format!("Loading {what}{}", dots(tick))).style(Style::default().fg(ACCENT_GOLD))
}

fn dots(tick: u64) -> &'static str {
    match tick % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

fn page_size(state: &AppState) -> usize {
    (state.terminal_size.1.saturating_sub(8) as usize).max(1)
}

fn section_style() -> Style {
    Style::default()
        .fg(ACCENT_TEAL)
        .add_modifier(Modifier::BOLD)
}

fn list_style(bg: Color) -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(bg),
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}

fn type_tag(ty: PokemonType) -> Span<'static> {
    Span::styled(
        format!(" {} ", ty.name().to_uppercase()),
        Style::default()
            .fg(BG_BASE)
            .bg(type_color(ty))
            .add_modifier(Modifier::BOLD),
    )
}

fn type_span(name: &str) -> Span<'static> {
    match PokemonType::from_api(name) {
        Some(ty) => type_tag(ty),
        None => Span::raw(name.to_string()),
    }
}

fn type_color(ty: PokemonType) -> Color {
    match ty {
        PokemonType::Normal => Color::Rgb(168, 167, 122),
        PokemonType::Fire => Color::Rgb(238, 129, 48),
        PokemonType::Water => Color::Rgb(99, 144, 240),
        PokemonType::Grass => Color::Rgb(122, 199, 76),
        PokemonType::Electric => Color::Rgb(247, 208, 44),
        PokemonType::Ice => Color::Rgb(150, 217, 214),
        PokemonType::Fighting => Color::Rgb(194, 46, 40),
        PokemonType::Poison => Color::Rgb(163, 62, 161),
        PokemonType::Ground => Color::Rgb(226, 191, 101),
        PokemonType::Flying => Color::Rgb(169, 143, 243),
        PokemonType::Psychic => Color::Rgb(249, 85, 135),
        PokemonType::Bug => Color::Rgb(166, 185, 26),
        PokemonType::Rock => Color::Rgb(182, 161, 54),
        PokemonType::Ghost => Color::Rgb(115, 87, 151),
        PokemonType::Dragon => Color::Rgb(111, 53, 252),
        PokemonType::Dark => Color::Rgb(112, 87, 70),
        PokemonType::Steel => Color::Rgb(183, 183, 206),
        PokemonType::Fairy => Color::Rgb(214, 133, 173),
    }
}

fn render_stat(stat: &PokemonStat) -> String {
    let label = shorten_stat(&stat.name);
    let bar_len = (stat.value as usize / 10).clamp(1, 20);
    let bar = "#".repeat(bar_len);
    format!("{label:>4} {value:>3} {bar}", value = stat.value)
}

fn shorten_stat(name: &str) -> String {
    match name {
        "hp" => " HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SAT".to_string(),
        "special-defense" => "SDF".to_string(),
        "speed" => "SPD".to_string(),
        _ => name.to_ascii_uppercase(),
    }
}
