use crate::app::MenuItem;
use chrono::{DateTime, Local};
use sports_api::{GameScore, League, ScheduledGame, StandingsEntry};

// ---------------------------------------------------------------------------
// Per-tab data
// ---------------------------------------------------------------------------

/// The last successful load for one tab, tagged with the league it belongs to.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub league: League,
    pub items: Vec<T>,
    pub updated_at: DateTime<Local>,
}

impl<T> Loaded<T> {
    pub fn new(league: League, items: Vec<T>) -> Self {
        Self { league, items, updated_at: Local::now() }
    }
}

/// Items of `loaded` if they belong to `league`. A tab never shows another
/// league's data while a reload is in flight.
pub fn items_for<T>(loaded: &Option<Loaded<T>>, league: League) -> Option<&Loaded<T>> {
    loaded.as_ref().filter(|l| l.league == league)
}

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub league: League,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub scores: Option<Loaded<GameScore>>,
    pub schedule: Option<Loaded<ScheduledGame>>,
    pub standings: Option<Loaded<StandingsEntry>>,
    /// Vertical scroll offset for tables longer than the pane.
    pub scroll_offset: u16,
}

impl AppState {
    pub fn new(league: League) -> Self {
        Self { league, ..Self::default() }
    }

    /// Row count of the table on the active tab, for clamping the scroll.
    pub fn rows_in_view(&self) -> usize {
        match self.active_tab {
            MenuItem::Scores => items_for(&self.scores, self.league).map_or(0, |l| l.items.len()),
            MenuItem::Schedule => items_for(&self.schedule, self.league).map_or(0, |l| l.items.len()),
            MenuItem::Standings => items_for(&self.standings, self.league).map_or(0, |l| l.items.len()),
            MenuItem::Help => 0,
        }
    }
}
