pub mod client;
pub mod endpoints;
pub mod espn;
pub mod normalize;
pub mod stats;

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types: UI-ready records, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// The four supported leagues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    #[default]
    Nhl,
    Nba,
    Nfl,
    Mlb,
}

impl League {
    pub const ALL: [League; 4] = [League::Nhl, League::Nba, League::Nfl, League::Mlb];

    /// Map a short league id ("nhl", "nba", "nfl", "mlb") to a league.
    ///
    /// Matching ignores case. Any other input falls back to `League::Nhl`
    /// rather than failing.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "nba" => League::Nba,
            "nfl" => League::Nfl,
            "mlb" => League::Mlb,
            _ => League::Nhl,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            League::Nhl => "nhl",
            League::Nba => "nba",
            League::Nfl => "nfl",
            League::Mlb => "mlb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            League::Nhl => "NHL",
            League::Nba => "NBA",
            League::Nfl => "NFL",
            League::Mlb => "MLB",
        }
    }

    /// Standings are ranked by points in hockey and by wins everywhere else.
    pub fn ranks_by_points(&self) -> bool {
        matches!(self, League::Nhl)
    }

    pub fn next(self) -> Self {
        match self {
            League::Nhl => League::Nba,
            League::Nba => League::Nfl,
            League::Nfl => League::Mlb,
            League::Mlb => League::Nhl,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            League::Nhl => League::Mlb,
            League::Nba => League::Nhl,
            League::Nfl => League::Nba,
            League::Mlb => League::Nfl,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which provider document a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Scores,
    Schedule,
    Standings,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Scores => "scores",
            ResourceKind::Schedule => "schedule",
            ResourceKind::Standings => "standings",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub home_team: Option<String>, // None when no competitor is tagged "home"
    pub away_team: Option<String>,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub home_logo: Option<String>,
    pub away_logo: Option<String>,
    pub status: String, // "Final", "2nd 12:34", "7:00 PM ET"
    pub is_live: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub date: String, // "10/19/2026"
    pub time: String, // "07:30 PM"
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    pub rank: usize,
    pub team: String,
    pub logo: Option<String>,
    pub wins: f64,
    pub losses: f64,
    /// Only meaningful for hockey; zero elsewhere unless the provider sends it.
    pub ot_losses: f64,
    pub points: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Standings {
    pub league: League,
    pub entries: Vec<StandingsEntry>,
}
