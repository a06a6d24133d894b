mod app;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::AppSettings;
use crate::state::messages::{NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::{LoadingState, NetworkWorker};
use crate::state::refresher::PeriodicRefresher;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::info;
use sports_api::League;
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tui::{Terminal, backend::CrosstermBackend};

enum CliAction {
    Run { league: Option<League> },
    Exit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let league_override = match handle_cli_args(std::env::args().skip(1)) {
        CliAction::Run { league } => league,
        CliAction::Exit => return Ok(()),
    };

    better_panic::install();

    let mut settings = AppSettings::load();
    if let Some(league) = league_override {
        settings.league = league;
    }

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(log::LevelFilter::Debug)?;
    tui_logger::set_default_level(log::LevelFilter::Info);

    info!("starting with {} (refresh every {:?})", settings.league, settings.refresh_interval);

    let endpoints = settings.endpoints.clone();
    let refresh_interval = settings.refresh_interval;
    let app = Arc::new(Mutex::new(App::new(settings)));

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Network thread
    let network_worker = NetworkWorker::new(endpoints, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    // Periodic refresh of the active tab
    let periodic_updater = PeriodicRefresher::new(ui_event_tx.clone(), refresh_interval);
    let periodic_task = tokio::spawn(periodic_updater.run());

    // Trigger the first load on startup
    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, network_req_tx, network_resp_rx).await;

    input_handler.abort();
    network_task.abort();
    periodic_task.abort();

    cleanup_terminal();
    Ok(())
}

fn handle_cli_args(args: impl IntoIterator<Item = String>) -> CliAction {
    let mut args = args.into_iter();
    let mut league = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", usage_text());
                return CliAction::Exit;
            }
            "-V" | "--version" => {
                println!("sportsline {}", env!("CARGO_PKG_VERSION"));
                return CliAction::Exit;
            }
            "-l" | "--league" => match args.next() {
                Some(id) => league = Some(League::from_id(&id)),
                None => {
                    eprintln!("--league needs a value (nhl, nba, nfl, mlb)\n\n{}", usage_text());
                    std::process::exit(2);
                }
            },
            _ => {
                eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
                std::process::exit(2);
            }
        }
    }

    CliAction::Run { league }
}

fn usage_text() -> &'static str {
    "sportsline - NHL / NBA / NFL / MLB scores, schedule and standings in your terminal

Usage:
  sportsline [--league <nhl|nba|nfl|mlb>]
  sportsline --help
  sportsline --version

Environment:
  SPORTSLINE_LEAGUE           Starting league (default nhl; unknown ids fall back to nhl)
  SPORTSLINE_REFRESH_SECS     Refresh period for the active tab (default 60, min 10)
  SPORTSLINE_LOG              Log level for the log pane (error, warn, info, debug, trace)
  SPORTSLINE_API_BASE         Scoreboard base URL (default ESPN site v2)
  SPORTSLINE_STANDINGS_BASE   Standings base URL (default ESPN v2)"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
) {
    let mut loading = LoadingState::default();

    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                let should_redraw = handle_ui_event(ui_event, &app, &network_requests).await;
                if should_redraw {
                    let mut app_guard = app.lock().await;
                    draw::draw(&mut terminal, &mut app_guard, loading);
                }
            }

            Some(response) = network_responses.recv() => {
                handle_network_response(response, &app, &mut loading).await;
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }

            else => break,
        }
    }
}

async fn handle_ui_event(
    ui_event: UiEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) -> bool {
    match ui_event {
        UiEvent::AppStarted | UiEvent::RefreshTick => {
            let request = app.lock().await.refresh_request();
            let _ = network_requests.send(request).await;
            true
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app, network_requests).await;
            true
        }
        UiEvent::Resize => true,
    }
}

async fn handle_network_response(
    response: NetworkResponse,
    app: &Arc<Mutex<App>>,
    loading: &mut LoadingState,
) {
    let mut guard = app.lock().await;
    match response {
        NetworkResponse::LoadingStateChanged { loading_state } => *loading = loading_state,
        NetworkResponse::ScoresLoaded { league, games } => guard.on_scores_loaded(league, games),
        NetworkResponse::ScheduleLoaded { league, games } => guard.on_schedule_loaded(league, games),
        NetworkResponse::StandingsLoaded { standings } => guard.on_standings_loaded(standings),
        NetworkResponse::Error { message } => guard.on_error(message),
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        if let Ok(event) = crossterm_event::read() {
            let ui_event = match event {
                Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
                Event::Resize(_, _) => Some(UiEvent::Resize),
                _ => None,
            };

            if let Some(ui_event) = ui_event
                && ui_events.send(ui_event).await.is_err()
            {
                break;
            }
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

/// Best effort: runs on quit and from the panic hook, where there is no one
/// left to report a failure to.
pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
