use crate::endpoints::Endpoints;
use crate::espn::{ScoreboardResponse, StandingsResponse};
use crate::normalize::{normalize_schedule, normalize_scores, normalize_standings};
use crate::{GameScore, League, ResourceKind, ScheduledGame, Standings};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

/// ESPN client: one GET per call, body handed to the matching normalizer.
#[derive(Debug, Clone)]
pub struct SportsApi {
    client: Client,
    endpoints: Endpoints,
    timeout: Duration,
}

impl Default for SportsApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("sportsline/0.1 (terminal scoreboard)")
                .build()
                .unwrap_or_default(),
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, body read).
    Network(reqwest::Error, String),
    /// The provider answered with a non-success status.
    Transport { kind: ResourceKind, status: u16 },
    /// The body was not a document of the expected shape.
    Parse { kind: ResourceKind, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Transport { kind, status } => write!(f, "Failed to fetch {kind}: HTTP {status}"),
            ApiError::Parse { kind, message } => write!(f, "Failed to parse {kind} data: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl SportsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self { endpoints, ..Self::default() }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Current scoreboard for `league`: finished, live and upcoming games.
    pub async fn fetch_scores(&self, league: League) -> ApiResult<Vec<GameScore>> {
        let body = self.get_text(league, ResourceKind::Scores).await?;
        parse_scores(&body, league)
    }

    pub async fn fetch_schedule(&self, league: League) -> ApiResult<Vec<ScheduledGame>> {
        let body = self.get_text(league, ResourceKind::Schedule).await?;
        parse_schedule(&body, league)
    }

    pub async fn fetch_standings(&self, league: League) -> ApiResult<Standings> {
        let body = self.get_text(league, ResourceKind::Standings).await?;
        parse_standings(&body, league)
    }

    async fn get_text(&self, league: League, kind: ResourceKind) -> ApiResult<String> {
        let url = self.endpoints.url(league, kind);
        debug!("fetching {kind} for {league}: {url}");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.clone()))?;

        let status = response.status();
        debug!("{url} responded {status}");
        if !status.is_success() {
            return Err(ApiError::Transport { kind, status: status.as_u16() });
        }

        response.text().await.map_err(|e| ApiError::Network(e, url))
    }
}

// ---------------------------------------------------------------------------
// Parse-and-normalize entry points: raw body text → domain records
// ---------------------------------------------------------------------------

pub fn parse_scores(body: &str, league: League) -> ApiResult<Vec<GameScore>> {
    let doc: ScoreboardResponse = parse_document(body, ResourceKind::Scores)?;
    normalize_scores(&doc, league)
}

pub fn parse_schedule(body: &str, league: League) -> ApiResult<Vec<ScheduledGame>> {
    let doc: ScoreboardResponse = parse_document(body, ResourceKind::Schedule)?;
    normalize_schedule(&doc, league)
}

pub fn parse_standings(body: &str, league: League) -> ApiResult<Standings> {
    let doc: StandingsResponse = parse_document(body, ResourceKind::Standings)?;
    normalize_standings(&doc, league)
}

fn parse_document<T: DeserializeOwned>(body: &str, kind: ResourceKind) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse { kind, message: e.to_string() })
}
