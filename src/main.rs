use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, Keybindings, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use pokedex::action::Action;
use pokedex::api::PokeApi;
use pokedex::config::Config;
use pokedex::effect::Effect;
use pokedex::fetch::ReqwestTransport;
use pokedex::logging;
use pokedex::reducer::reducer;
use pokedex::state::AppState;
use pokedex::ui::{self, PokedexComponentId, PokedexContext, PokedexUi};

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse Pokémon, items, abilities and attacks from PokeAPI")]
struct Args {
    #[command(flatten)]
    debug: DebugCliArgs,

    /// PokeAPI base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Directory for the log file
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log filter, e.g. "pokedex=debug"
    #[arg(long)]
    log_level: Option<String>,

    /// Disable the log file
    #[arg(long)]
    no_log: bool,

    /// Maximum back-navigation depth
    #[arg(long)]
    history_limit: Option<usize>,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(base) = &self.api_base {
            config.api_base = base.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.log.dir = dir.clone();
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if self.no_log {
            config.log.enabled = false;
        }
        if let Some(limit) = self.history_limit {
            config.history_limit = limit;
        }
        config
    }
}

static API: OnceLock<PokeApi<ReqwestTransport>> = OnceLock::new();

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = args.config();
    let _log_guard = logging::init(&config.log);

    let client = reqwest::Client::builder()
        .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(io::Error::other)?;
    let api = PokeApi::new(
        ReqwestTransport::new(client),
        config.retry,
        config.api_base.clone(),
        config.tuning,
    );
    if API.set(api).is_err() {
        return Err(io::Error::other("API client initialized twice"));
    }
    info!(base = %config.api_base, "starting pokedex");

    let debug = DebugSession::new(args.debug);
    let history_limit = config.history_limit;
    let state = debug
        .load_state_or_else_async(|| async move {
            Ok::<AppState, io::Error>(AppState::with_history_limit(history_limit))
        })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    info!("pokedex exited");
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokedexComponentId, PokedexContext> =
        EventBus::new();
    let keybindings: Keybindings<PokedexContext> = Keybindings::new();

    let ui_body = Rc::clone(&ui);
    bus.register(PokedexComponentId::Body, move |event, state| {
        ui_body.borrow_mut().handle_body_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(PokedexComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    let ui_filter = Rc::clone(&ui);
    bus.register(PokedexComponentId::AbilityFilter, move |event, state| {
        ui_filter
            .borrow_mut()
            .handle_filter_event(&event.kind, state)
    });

    bus.register_global(|event, state| ui::handle_global_event(&event.kind, state));

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime
                    .subscriptions()
                    .interval("tick", Duration::from_millis(90), || Action::Tick);
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    let Some(api) = API.get() else {
        error!("effect dispatched before the API client was ready");
        return;
    };
    match effect {
        Effect::LoadPokemonDb => {
            ctx.tasks().spawn(TaskKey::new("pokemon_db"), async move {
                match api.load_pokemon().await {
                    Ok(db) => Action::PokemonDbDidLoad(db),
                    Err(err) => {
                        error!(error = %err, "pokemon load failed");
                        Action::PokemonDbDidError(err.to_string())
                    }
                }
            });
        }
        Effect::LoadItems => {
            ctx.tasks().spawn(TaskKey::new("items"), async move {
                match api.load_items().await {
                    Ok(items) => Action::ItemsDidLoad(items),
                    Err(err) => {
                        error!(error = %err, "item load failed");
                        Action::ItemsDidError(err.to_string())
                    }
                }
            });
        }
        Effect::LoadAbilities => {
            ctx.tasks().spawn(TaskKey::new("abilities"), async move {
                match api.load_abilities().await {
                    Ok(abilities) => Action::AbilitiesDidLoad(abilities),
                    Err(err) => {
                        error!(error = %err, "ability load failed");
                        Action::AbilitiesDidError(err.to_string())
                    }
                }
            });
        }
        Effect::LoadAttacks => {
            ctx.tasks().spawn(TaskKey::new("attacks"), async move {
                match api.load_attacks().await {
                    Ok(attacks) => Action::AttacksDidLoad(attacks),
                    Err(err) => {
                        error!(error = %err, "attack load failed");
                        Action::AttacksDidError(err.to_string())
                    }
                }
            });
        }
        Effect::LoadPokedexList { request, dex, db } => {
            ctx.tasks().spawn(TaskKey::new("pokedex_list"), async move {
                match api.fetch_pokedex_list(&dex, &db).await {
                    Ok(entries) => Action::PokedexListDidLoad { request, entries },
                    Err(err) => {
                        error!(dex = %dex.id, error = %err, "pokedex list failed");
                        Action::PokedexListDidError {
                            request,
                            error: err.to_string(),
                        }
                    }
                }
            });
        }
        Effect::LoadPokedexEntry { request, url, db } => {
            ctx.tasks().spawn(TaskKey::new("pokedex_entry"), async move {
                match api.fetch_pokedex_entry(&url, &db).await {
                    Ok((detail, evolution)) => Action::PokedexEntryDidLoad {
                        request,
                        detail,
                        evolution,
                    },
                    Err(err) => {
                        error!(%url, error = %err, "pokedex entry failed");
                        Action::PokedexEntryDidError {
                            request,
                            error: err.to_string(),
                        }
                    }
                }
            });
        }
        Effect::LoadEvolution {
            request,
            chain_url,
            active_form,
            db,
        } => {
            ctx.tasks().spawn(TaskKey::new("evolution"), async move {
                let chain = api
                    .fetch_evolution(chain_url.as_deref(), &active_form, &db)
                    .await;
                Action::EvolutionDidLoad { request, chain }
            });
        }
    }
}
