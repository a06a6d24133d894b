use log::LevelFilter;
use sports_api::League;
use sports_api::endpoints::{ESPN_SITE_V2, ESPN_V2, Endpoints};
use std::time::Duration;

const DEFAULT_REFRESH_SECS: u64 = 60;
const MIN_REFRESH_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub league: League,
    pub refresh_interval: Duration,
    pub endpoints: Endpoints,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            league: League::default(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            endpoints: Endpoints::default(),
        }
    }
}

impl AppSettings {
    /// Settings from `SPORTSLINE_*` environment variables, falling back to defaults.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let league = var("SPORTSLINE_LEAGUE").map(|id| League::from_id(&id)).unwrap_or_default();

        let refresh_secs = var("SPORTSLINE_REFRESH_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS)
            .max(MIN_REFRESH_SECS);

        let log_level = var("SPORTSLINE_LOG").and_then(|s| s.parse::<LevelFilter>().ok());

        let endpoints = Endpoints::new(
            var("SPORTSLINE_API_BASE").unwrap_or_else(|| ESPN_SITE_V2.to_owned()),
            var("SPORTSLINE_STANDINGS_BASE").unwrap_or_else(|| ESPN_V2.to_owned()),
        );

        Self {
            full_screen: false,
            log_level,
            league,
            refresh_interval: Duration::from_secs(refresh_secs),
            endpoints,
        }
    }
}
