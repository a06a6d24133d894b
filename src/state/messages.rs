use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use sports_api::{GameScore, League, ScheduledGame, Standings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkRequest {
    LoadScores { league: League },
    LoadSchedule { league: League },
    LoadStandings { league: League },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ScoresLoaded { league: League, games: Vec<GameScore> },
    ScheduleLoaded { league: League, games: Vec<ScheduledGame> },
    StandingsLoaded { standings: Standings },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    /// Periodic reload of whatever the active tab shows.
    RefreshTick,
}
