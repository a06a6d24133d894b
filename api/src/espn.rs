//! ESPN API raw wire types: serde shapes for deserializing ESPN responses.
//! These map to our domain types via the normalizers in normalize.rs.
//!
//! Nearly every field is optional. ESPN omits keys freely, and whether an
//! absent key is tolerable is decided by the normalizer, not by serde.

use serde::{Deserialize, Deserializer, de};

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API): feeds both scores and schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>, // "2026-10-19T23:00Z", seconds are usually omitted
    pub status: Option<EspnStatus>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStatusType {
    pub name: Option<String>,  // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", "STATUS_FINAL"
    pub state: Option<String>, // "pre" | "in" | "post"
    pub detail: Option<String>,
    #[serde(rename = "shortDetail")]
    pub short_detail: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    /// The scoreboard sends scores as strings; some feeds send numbers.
    #[serde(default, deserialize_with = "de_score")]
    pub score: Option<u16>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName")]
    pub short_display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub logo: Option<String>,
    pub logos: Option<Vec<EspnLogo>>, // standings endpoint only
}

impl EspnTeam {
    /// Short display name when present, otherwise the full display name.
    pub fn preferred_name(&self) -> Option<&str> {
        self.short_display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.display_name.as_deref().filter(|n| !n.is_empty()))
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnLogo {
    pub href: Option<String>,
}

// ---------------------------------------------------------------------------
// Standings  (v2 API)
//
//   children[]                 conferences / leagues
//     .children[]              divisions (not every league has this level)
//       .standings.entries[]
//     .standings.entries[]     used when a conference has no divisions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    pub children: Option<Vec<EspnGroup>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnGroup {
    pub name: Option<String>,
    pub children: Option<Vec<EspnGroup>>,
    pub standings: Option<EspnStandings>,
}

impl EspnGroup {
    pub fn entries(&self) -> &[EspnStandingsEntry] {
        self.standings
            .as_ref()
            .and_then(|s| s.entries.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandings {
    pub entries: Option<Vec<EspnStandingsEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandingsEntry {
    pub team: Option<EspnTeam>,
    pub stats: Option<Vec<EspnStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStat {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub value: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

/// Scores arrive as `"3"`, `"3.0"` or `3`. A blank string means no score
/// yet; anything that is not a whole number in `u16` range is rejected.
fn de_score<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<RawScore>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawScore::Number(n)) => n,
        Some(RawScore::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(RawScore::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("score {s:?} is not a number")))?,
    };
    whole_score(value)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("score {value} is not a whole number in 0..=65535")))
}

fn whole_score(value: f64) -> Option<u16> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&value) {
        return None;
    }
    Some(value as u16)
}
