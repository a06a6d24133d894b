use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;
    let mut request: Option<NetworkRequest> = None;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => {
            guard.update_tab(MenuItem::Scores);
            request = guard.pending_request();
        }
        (_, Char('2'), _) => {
            guard.update_tab(MenuItem::Schedule);
            request = guard.pending_request();
        }
        (_, Char('3'), _) => {
            guard.update_tab(MenuItem::Standings);
            request = guard.pending_request();
        }
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // League selection
        (_, Char('l') | KeyCode::Right, _) => {
            guard.next_league();
            request = Some(guard.refresh_request());
        }
        (_, Char('h') | KeyCode::Left, _) => {
            guard.prev_league();
            request = Some(guard.refresh_request());
        }
        (_, Char('r'), _) => request = Some(guard.refresh_request()),

        // Table scrolling
        (_, Char('j') | KeyCode::Down, _) => guard.scroll_down(),
        (_, Char('k') | KeyCode::Up, _) => guard.scroll_up(),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }

    if let Some(request) = request {
        drop(guard);
        let _ = network_requests.send(request).await;
    }
}
