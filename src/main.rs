mod app;
mod catalog;
mod cli;
mod config;
mod datasources;
mod db;
mod error;
mod i18n;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use catalog::{CROP_CALENDAR, SCHEMES};
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use db::Database;
use error::Result;
use i18n::Language;
use logic::DataSyncService;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{
    CalendarScreen, CommunityScreen, DashboardScreen, LanguageScreen, RecommendationsScreen,
    SchemesScreen,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.data_dir.as_ref())?;

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Some(Commands::Check) => return run_check(cli.config, cli.data_dir.as_ref()).await,
        None => {}
    }

    let config = if Config::exists(cli.config.as_ref()) {
        match Config::load(cli.config.clone()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                eprintln!("Run `farmgpt init` to create a new configuration");
                std::process::exit(1);
            }
        }
    } else {
        Config::setup_interactive()?.0
    };

    let db = Database::open(cli.data_dir.as_ref())?;
    let data_sync = DataSyncService::new(&config, db.clone())?;
    let mut app = App::new(config, db)?;

    // First refresh happens inside the loop so the loading screen is drawn
    app.request_refresh();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &data_sync).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data directory; stdout belongs to the TUI.
fn init_logging(verbose: u8, data_dir: Option<&PathBuf>) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("farmgpt=debug"),
        _ => EnvFilter::new("farmgpt=trace"),
    };

    let log_path = Config::log_path(data_dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run_check(config_path: Option<PathBuf>, data_dir: Option<&PathBuf>) -> Result<()> {
    let config = Config::load(config_path)?;
    println!("Config: OK");

    match config.location {
        Some(loc) => println!("Location: {:.4}, {:.4}", loc.latitude, loc.longitude),
        None => println!("Location: not configured"),
    }

    let db = Database::open(data_dir)?;
    println!("Database: {}", db.path().display());

    let data_sync = DataSyncService::new(&config, db)?;
    let status = if data_sync.check_connection().await {
        "OK"
    } else {
        "OFFLINE"
    };
    println!("Backend ({}): {}", config.backend.url, status);

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    data_sync: &DataSyncService,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code, key.modifiers);
                }
            }
        }

        if app.needs_refresh {
            app.needs_refresh = false;
            // Redraw so the loading state is visible while the requests run
            terminal.draw(|f| draw(f, app))?;
            match data_sync.refresh().await {
                Ok(snapshot) => {
                    app.apply_snapshot(snapshot);
                    app.clear_status();
                }
                Err(e) => app.refresh_failed(&e),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(f: &mut ratatui::Frame, app: &App) {
    let area = f.area();
    let lang = app.language;

    match app.screen {
        Screen::Dashboard => {
            let screen = DashboardScreen::new(lang, &app.load_state, &app.forecast)
                .with_place(app.place.as_ref(), app.soil)
                .with_weather(app.weather.as_ref(), app.last_updated)
                .with_status(app.status_message.as_deref());
            f.render_widget(screen, area);
        }
        Screen::Recommendations => {
            let screen = RecommendationsScreen::new(lang, &app.recommendations, &app.conditions)
                .with_selection(app.recommendations_state.selected_index);
            f.render_widget(screen, area);
        }
        Screen::Calendar => {
            let screen = CalendarScreen::new(lang, CROP_CALENDAR)
                .with_selection(app.calendar_state.selected_index);
            f.render_widget(screen, area);
        }
        Screen::Schemes => {
            let screen = SchemesScreen::new(lang, SCHEMES)
                .with_selection(app.schemes_state.selected_index);
            f.render_widget(screen, area);
        }
        Screen::Community => {
            let state = &app.community_state;
            let screen = CommunityScreen::new(lang, &app.messages, Utc::now())
                .with_selection(state.selection.selected_index)
                .composing(state.composing, &state.input);
            f.render_widget(screen, area);
        }
        Screen::Language => {
            let screen =
                LanguageScreen::new(lang).with_highlight(app.language_state.selected_index);
            f.render_widget(screen, area);
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The composer swallows every key until it is sent or cancelled
    if app.screen == Screen::Community && app.community_state.composing {
        handle_composer_input(app, code);
        return;
    }

    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.switch_screen(Screen::Dashboard),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('t') => {
            let next = app.language.toggle();
            report(app, |app| app.set_language(next));
        }
        KeyCode::Char(c) => match Screen::from_key(c) {
            Some(screen) => app.switch_screen(screen),
            None => handle_screen_input(app, code),
        },
        _ => handle_screen_input(app, code),
    }
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Dashboard => {
            if code == KeyCode::Enter && !app.has_data() {
                app.request_refresh();
            }
        }
        Screen::Recommendations => {
            let count = app.recommendations.len();
            navigate(&mut app.recommendations_state, code, count);
        }
        Screen::Calendar => {
            let count = app.season_count();
            navigate(&mut app.calendar_state, code, count);
        }
        Screen::Schemes => {
            let count = app.scheme_count();
            navigate(&mut app.schemes_state, code, count);
        }
        Screen::Community => match code {
            KeyCode::Char('n') | KeyCode::Char('i') => app.community_state.start_composing(),
            KeyCode::Char('d') => report(app, App::delete_selected_message),
            _ => {
                let count = app.messages.len();
                navigate(&mut app.community_state.selection, code, count);
            }
        },
        Screen::Language => match code {
            KeyCode::Enter => report(app, App::select_highlighted_language),
            _ => navigate(&mut app.language_state, code, Language::all().len()),
        },
    }
}

fn handle_composer_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.community_state.cancel_composing(),
        KeyCode::Enter => report(app, |app| app.post_message().map(|_| ())),
        KeyCode::Backspace => {
            app.community_state.input.pop();
        }
        KeyCode::Char(c) => app.community_state.input.push(c),
        _ => {}
    }
}

fn navigate(state: &mut app::SelectionState, code: KeyCode, count: usize) {
    match code {
        KeyCode::Up => state.prev(),
        KeyCode::Down => state.next(count),
        _ => {}
    }
}

/// Run a fallible app action and surface any error in the status line
fn report(app: &mut App, action: impl FnOnce(&mut App) -> Result<()>) {
    if let Err(e) = action(app) {
        tracing::warn!("{}", e);
        app.set_status(&format!("Action failed: {}", e));
    }
}
