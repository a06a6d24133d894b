use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, Loaded, items_for};
use crate::state::messages::NetworkRequest;
use sports_api::{GameScore, League, ScheduledGame, Standings};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Scores,
    Schedule,
    Standings,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let app = Self {
            state: AppState::new(settings.league),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Responses for a league that is no longer selected are dropped.
    pub fn on_scores_loaded(&mut self, league: League, games: Vec<GameScore>) {
        if league != self.state.league {
            return;
        }
        self.state.last_error = None;
        self.state.scores = Some(Loaded::new(league, games));
        self.clamp_scroll();
    }

    pub fn on_schedule_loaded(&mut self, league: League, games: Vec<ScheduledGame>) {
        if league != self.state.league {
            return;
        }
        self.state.last_error = None;
        self.state.schedule = Some(Loaded::new(league, games));
        self.clamp_scroll();
    }

    pub fn on_standings_loaded(&mut self, standings: Standings) {
        if standings.league != self.state.league {
            return;
        }
        self.state.last_error = None;
        self.state.standings = Some(Loaded::new(standings.league, standings.entries));
        self.clamp_scroll();
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        self.state.scroll_offset = 0;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // League selection
    // -----------------------------------------------------------------------

    pub fn next_league(&mut self) {
        self.select_league(self.state.league.next());
    }

    pub fn prev_league(&mut self) {
        self.select_league(self.state.league.prev());
    }

    fn select_league(&mut self, league: League) {
        log::info!("switching to {league}");
        self.state.league = league;
        self.state.last_error = None;
        self.state.scroll_offset = 0;
    }

    // -----------------------------------------------------------------------
    // Requests
    // -----------------------------------------------------------------------

    /// Request that reloads the active tab. Help reloads the tab underneath it.
    pub fn refresh_request(&self) -> NetworkRequest {
        let league = self.state.league;
        let tab = match self.state.active_tab {
            MenuItem::Help => self.state.previous_tab,
            tab => tab,
        };
        match tab {
            MenuItem::Schedule => NetworkRequest::LoadSchedule { league },
            MenuItem::Standings => NetworkRequest::LoadStandings { league },
            MenuItem::Scores | MenuItem::Help => NetworkRequest::LoadScores { league },
        }
    }

    /// Request for the active tab only when it has nothing for the current league yet.
    pub fn pending_request(&self) -> Option<NetworkRequest> {
        let league = self.state.league;
        let loaded = match self.state.active_tab {
            MenuItem::Scores => items_for(&self.state.scores, league).is_some(),
            MenuItem::Schedule => items_for(&self.state.schedule, league).is_some(),
            MenuItem::Standings => items_for(&self.state.standings, league).is_some(),
            MenuItem::Help => true,
        };
        (!loaded).then(|| self.refresh_request())
    }

    // -----------------------------------------------------------------------
    // Scrolling
    // -----------------------------------------------------------------------

    pub fn scroll_down(&mut self) {
        self.state.scroll_offset = self.state.scroll_offset.saturating_add(1);
        self.clamp_scroll();
    }

    pub fn scroll_up(&mut self) {
        self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
    }

    fn clamp_scroll(&mut self) {
        let max = max_scroll(self.state.rows_in_view());
        self.state.scroll_offset = self.state.scroll_offset.min(max);
    }
}

/// Largest scroll offset that still shows a row.
fn max_scroll(rows: usize) -> u16 {
    u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
}
