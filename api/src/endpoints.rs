use crate::{League, ResourceKind};

pub const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports";
pub const ESPN_V2: &str = "https://site.api.espn.com/apis/v2/sports";

/// Base URLs for the provider. Built once at startup and handed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    standings_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(ESPN_SITE_V2, ESPN_V2)
    }
}

impl Endpoints {
    pub fn new(api_base: impl Into<String>, standings_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_base(api_base.into()),
            standings_base: trim_base(standings_base.into()),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn standings_base(&self) -> &str {
        &self.standings_base
    }

    pub fn scores_url(&self, league: League) -> String {
        format!("{}/{}/scoreboard", self.api_base, sport_path(league))
    }

    /// Schedule and scores share the scoreboard document.
    pub fn schedule_url(&self, league: League) -> String {
        format!("{}/{}/scoreboard", self.api_base, sport_path(league))
    }

    pub fn standings_url(&self, league: League) -> String {
        format!("{}/{}/standings", self.standings_base, sport_path(league))
    }

    pub fn url(&self, league: League, kind: ResourceKind) -> String {
        match kind {
            ResourceKind::Scores => self.scores_url(league),
            ResourceKind::Schedule => self.schedule_url(league),
            ResourceKind::Standings => self.standings_url(league),
        }
    }
}

/// ESPN's `{sport}/{league}` path segment.
pub fn sport_path(league: League) -> &'static str {
    match league {
        League::Nhl => "hockey/nhl",
        League::Nba => "basketball/nba",
        League::Nfl => "football/nfl",
        League::Mlb => "baseball/mlb",
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
