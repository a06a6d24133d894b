use crate::client::{ApiError, ApiResult};
use crate::espn::{
    EspnCompetitor, EspnEvent, EspnGroup, EspnStandingsEntry, EspnStat, EspnTeam,
    ScoreboardResponse, StandingsResponse,
};
use crate::stats::StatKind;
use crate::{GameScore, League, ResourceKind, ScheduledGame, Standings, StandingsEntry};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt;

/// `status.type.state` while a game is being played.
const STATE_IN_PROGRESS: &str = "in";

// ---------------------------------------------------------------------------
// Scoreboard: scores and schedule
// ---------------------------------------------------------------------------

/// Map a scoreboard document to one `GameScore` per event, in event order.
///
/// A document without `events` yields an empty list. Structural gaps inside
/// an event (no competition, no competitors, a competitor without a team)
/// fail the whole call.
pub fn normalize_scores(doc: &ScoreboardResponse, _league: League) -> ApiResult<Vec<GameScore>> {
    let kind = ResourceKind::Scores;
    events(doc)
        .iter()
        .enumerate()
        .map(|(index, event)| -> ApiResult<GameScore> {
            let matchup = Matchup::from_event(event, kind, index)?;
            let status_type = event
                .status
                .as_ref()
                .and_then(|s| s.status_type.as_ref())
                .ok_or_else(|| missing(kind, index, "status"))?;

            let status = non_empty(status_type.short_detail.as_deref())
                .or_else(|| non_empty(status_type.detail.as_deref()))
                .unwrap_or_default()
                .to_owned();
            let is_live = status_type.state.as_deref() == Some(STATE_IN_PROGRESS);

            Ok(GameScore {
                home_team: matchup.home.map(|s| s.name.to_owned()),
                away_team: matchup.away.map(|s| s.name.to_owned()),
                home_score: matchup.home.and_then(|s| s.score),
                away_score: matchup.away.and_then(|s| s.score),
                home_logo: matchup.home.and_then(|s| s.logo.map(str::to_owned)),
                away_logo: matchup.away.and_then(|s| s.logo.map(str::to_owned)),
                status,
                is_live,
            })
        })
        .collect()
}

/// Map a scoreboard document to scheduled games with kickoff rendered in the
/// local time zone.
pub fn normalize_schedule(doc: &ScoreboardResponse, league: League) -> ApiResult<Vec<ScheduledGame>> {
    normalize_schedule_in(doc, league, &Local)
}

pub fn normalize_schedule_in<Tz>(
    doc: &ScoreboardResponse,
    _league: League,
    tz: &Tz,
) -> ApiResult<Vec<ScheduledGame>>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let kind = ResourceKind::Schedule;
    events(doc)
        .iter()
        .enumerate()
        .map(|(index, event)| -> ApiResult<ScheduledGame> {
            let matchup = Matchup::from_event(event, kind, index)?;
            let raw_date = event.date.as_deref().ok_or_else(|| missing(kind, index, "date"))?;
            let kickoff = parse_event_date(raw_date).ok_or_else(|| ApiError::Parse {
                kind,
                message: format!("event {index} has an unreadable date {raw_date:?}"),
            })?;
            let (date, time) = format_kickoff(&kickoff, tz);

            Ok(ScheduledGame {
                home_team: matchup.home.map(|s| s.name.to_owned()),
                away_team: matchup.away.map(|s| s.name.to_owned()),
                date,
                time,
            })
        })
        .collect()
}

fn events(doc: &ScoreboardResponse) -> &[EspnEvent] {
    doc.events.as_deref().unwrap_or_default()
}

/// One side of a game after team resolution.
#[derive(Debug, Clone, Copy)]
struct Side<'a> {
    name: &'a str,
    logo: Option<&'a str>,
    score: Option<u16>,
}

/// Home and away sides picked by the `homeAway` tag. A side stays `None`
/// when no competitor carries its tag; when several carry the same tag the
/// first one listed wins.
#[derive(Debug, Default)]
struct Matchup<'a> {
    home: Option<Side<'a>>,
    away: Option<Side<'a>>,
}

impl<'a> Matchup<'a> {
    fn from_event(event: &'a EspnEvent, kind: ResourceKind, index: usize) -> ApiResult<Self> {
        let competition = event
            .competitions
            .as_deref()
            .and_then(|c| c.first())
            .ok_or_else(|| missing(kind, index, "competition"))?;
        let competitors = competition
            .competitors
            .as_deref()
            .ok_or_else(|| missing(kind, index, "competitors"))?;

        let mut matchup = Matchup::default();
        for competitor in competitors {
            let side = side(competitor, kind, index)?;
            let slot = match competitor.home_away.as_deref() {
                Some("home") => &mut matchup.home,
                Some("away") => &mut matchup.away,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(side);
            }
        }
        Ok(matchup)
    }
}

fn side<'a>(competitor: &'a EspnCompetitor, kind: ResourceKind, index: usize) -> ApiResult<Side<'a>> {
    let team = competitor
        .team
        .as_ref()
        .ok_or_else(|| missing(kind, index, "competitor team"))?;
    Ok(Side {
        name: team_name(team, kind, || format!("event {index}"))?,
        logo: non_empty(team.logo.as_deref()),
        score: competitor.score,
    })
}

// ---------------------------------------------------------------------------
// Kickoff formatting
// ---------------------------------------------------------------------------

/// Parse an ESPN event timestamp. Accepts RFC 3339 and the scoreboard's
/// minute-precision form `2026-10-19T23:00Z`.
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Render a kickoff as `(date, time)` in `tz`, e.g. `("10/19/2026", "07:30 PM")`.
pub fn format_kickoff<Tz>(kickoff: &DateTime<Utc>, tz: &Tz) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let local = kickoff.with_timezone(tz);
    (
        local.format("%m/%d/%Y").to_string(),
        local.format("%I:%M %p").to_string(),
    )
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

/// Flatten, rank and materialize a standings document.
///
/// Hockey ranks by points, every other league by wins. The sort is stable, so
/// teams with equal keys keep the order in which the document listed them.
pub fn normalize_standings(doc: &StandingsResponse, league: League) -> ApiResult<Standings> {
    let sort_key = if league.ranks_by_points() { StatKind::Points } else { StatKind::Wins };

    let mut ranked = flatten_groups(doc.children.as_deref().unwrap_or_default())
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Ranked::new(entry, sort_key, index))
        .collect::<ApiResult<Vec<_>>>()?;

    ranked.sort_by(|a, b| b.key.total_cmp(&a.key));

    let entries = ranked
        .into_iter()
        .enumerate()
        .map(|(position, r)| StandingsEntry {
            rank: position + 1,
            team: r.name.to_owned(),
            logo: team_logo(r.team),
            wins: StatKind::Wins.resolve(r.stats),
            losses: StatKind::Losses.resolve(r.stats),
            ot_losses: StatKind::OtLosses.resolve(r.stats),
            points: StatKind::Points.resolve(r.stats),
        })
        .collect();

    Ok(Standings { league, entries })
}

/// A flattened entry with its sort key, checked for the fields ranking needs.
struct Ranked<'a> {
    key: f64,
    name: &'a str,
    team: &'a EspnTeam,
    stats: &'a [EspnStat],
}

impl<'a> Ranked<'a> {
    fn new(entry: &'a EspnStandingsEntry, sort_key: StatKind, index: usize) -> ApiResult<Self> {
        let kind = ResourceKind::Standings;
        let team = entry.team.as_ref().ok_or_else(|| ApiError::Parse {
            kind,
            message: format!("standings entry {index} has no team"),
        })?;
        let stats = entry.stats.as_deref().ok_or_else(|| ApiError::Parse {
            kind,
            message: format!("standings entry {index} has no stats"),
        })?;
        let name = team_name(team, kind, || format!("standings entry {index}"))?;
        Ok(Self { key: sort_key.resolve(stats), name, team, stats })
    }
}

/// Concatenate the entries of a conference/division tree in document order.
///
/// A conference with divisions contributes its divisions' entries; one
/// without divisions contributes its own entries.
pub fn flatten_groups(groups: &[EspnGroup]) -> Vec<&EspnStandingsEntry> {
    let mut entries = Vec::new();
    for group in groups {
        match group.children.as_deref() {
            Some(divisions) if !divisions.is_empty() => {
                for division in divisions {
                    entries.extend(division.entries());
                }
            }
            _ => entries.extend(group.entries()),
        }
    }
    entries
}

fn team_logo(team: &EspnTeam) -> Option<String> {
    let first = team.logos.as_deref().and_then(|logos| logos.first());
    non_empty(first.and_then(|logo| logo.href.as_deref()))
        .or_else(|| non_empty(team.logo.as_deref()))
        .map(str::to_owned)
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn team_name<'a>(
    team: &'a EspnTeam,
    kind: ResourceKind,
    context: impl FnOnce() -> String,
) -> ApiResult<&'a str> {
    team.preferred_name().ok_or_else(|| ApiError::Parse {
        kind,
        message: format!("{} has a team without a display name", context()),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn missing(kind: ResourceKind, index: usize, what: &str) -> ApiError {
    ApiError::Parse { kind, message: format!("event {index} has no {what}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn scoreboard(value: Value) -> ScoreboardResponse {
        serde_json::from_value(value).unwrap()
    }

    fn standings(value: Value) -> StandingsResponse {
        serde_json::from_value(value).unwrap()
    }

    fn event(state: &str, detail: &str, home: Value, away: Value) -> Value {
        json!({
            "date": "2026-10-19T23:00Z",
            "status": { "type": { "state": state, "detail": detail } },
            "competitions": [{ "competitors": [home, away] }]
        })
    }

    fn competitor(tag: &str, name: &str, score: &str) -> Value {
        json!({
            "homeAway": tag,
            "score": score,
            "team": { "displayName": name, "logo": format!("https://a.espncdn.com/{name}.png") }
        })
    }

    fn entry(short: &str, stats: Value) -> Value {
        json!({
            "team": { "displayName": format!("{short} Full"), "shortDisplayName": short },
            "stats": stats
        })
    }

    fn nested_standings(stat: &str) -> Value {
        json!({
            "children": [
                {
                    "name": "Eastern",
                    "children": [
                        { "standings": { "entries": [entry("Bruins", json!([{ "name": stat, "value": 90 }]))] } },
                        { "standings": { "entries": [entry("Rangers", json!([{ "name": stat, "value": 75 }]))] } }
                    ]
                },
                {
                    "name": "Western",
                    "standings": { "entries": [entry("Oilers", json!([{ "name": stat, "value": 80 }]))] }
                }
            ]
        })
    }

    #[test]
    fn final_game_maps_home_and_away() {
        let doc = scoreboard(json!({
            "events": [event(
                "post",
                "Final",
                competitor("home", "Boston Bruins", "3"),
                competitor("away", "Toronto Maple Leafs", "2"),
            )]
        }));
        let games = normalize_scores(&doc, League::Nhl).unwrap();
        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert!(!game.is_live);
        assert_eq!(game.status, "Final");
        assert_eq!(game.home_team.as_deref(), Some("Boston Bruins"));
        assert_eq!(game.away_team.as_deref(), Some("Toronto Maple Leafs"));
        assert_eq!(game.home_score, Some(3));
        assert_eq!(game.away_score, Some(2));
        assert_eq!(game.home_logo.as_deref(), Some("https://a.espncdn.com/Boston Bruins.png"));
    }

    #[test]
    fn away_listed_first_still_maps_by_tag() {
        let doc = scoreboard(json!({
            "events": [event("post", "Final", competitor("away", "Lakers", "101"), competitor("home", "Celtics", "99"))]
        }));
        let game = &normalize_scores(&doc, League::Nba).unwrap()[0];
        assert_eq!(game.home_team.as_deref(), Some("Celtics"));
        assert_eq!(game.home_score, Some(99));
        assert_eq!(game.away_score, Some(101));
    }

    #[test]
    fn in_progress_state_is_live() {
        let doc = scoreboard(json!({
            "events": [event("in", "2nd Period", competitor("home", "A", "1"), competitor("away", "B", "0"))]
        }));
        assert!(normalize_scores(&doc, League::Nhl).unwrap()[0].is_live);
    }

    #[test]
    fn short_detail_preferred_over_detail() {
        let doc = scoreboard(json!({
            "events": [{
                "status": { "type": { "state": "pre", "detail": "Sun, October 19th at 7:00 PM EDT", "shortDetail": "10/19 - 7:00 PM EDT" } },
                "competitions": [{ "competitors": [competitor("home", "A", ""), competitor("away", "B", "")] }]
            }]
        }));
        let game = &normalize_scores(&doc, League::Nfl).unwrap()[0];
        assert_eq!(game.status, "10/19 - 7:00 PM EDT");
        assert_eq!(game.home_score, None);
    }

    #[test]
    fn empty_short_detail_falls_back_to_detail() {
        let doc = scoreboard(json!({
            "events": [{
                "status": { "type": { "state": "post", "detail": "Final", "shortDetail": "" } },
                "competitions": [{ "competitors": [competitor("home", "A", "3"), competitor("away", "B", "1")] }]
            }]
        }));
        assert_eq!(normalize_scores(&doc, League::Nhl).unwrap()[0].status, "Final");
    }

    #[test]
    fn first_competitor_wins_a_shared_tag() {
        let doc = scoreboard(json!({
            "events": [event("post", "Final", competitor("home", "First", "2"), competitor("home", "Second", "5"))]
        }));
        let game = &normalize_scores(&doc, League::Nba).unwrap()[0];
        assert_eq!(game.home_team.as_deref(), Some("First"));
        assert_eq!(game.home_score, Some(2));
        assert_eq!(game.away_team, None);
    }

    #[test]
    fn events_keep_document_order() {
        let doc = scoreboard(json!({
            "events": [
                event("post", "Final", competitor("home", "First", "1"), competitor("away", "X", "0")),
                event("pre", "7:00 PM", competitor("home", "Second", ""), competitor("away", "Y", "")),
                event("in", "Top 3rd", competitor("home", "Third", "2"), competitor("away", "Z", "2")),
            ]
        }));
        let homes: Vec<_> = normalize_scores(&doc, League::Mlb)
            .unwrap()
            .into_iter()
            .map(|g| g.home_team.unwrap())
            .collect();
        assert_eq!(homes, ["First", "Second", "Third"]);
    }

    #[test]
    fn untagged_competitor_leaves_side_empty() {
        let doc = scoreboard(json!({
            "events": [event("post", "Final", competitor("home", "A", "1"), competitor("neutral", "B", "2"))]
        }));
        let game = &normalize_scores(&doc, League::Nhl).unwrap()[0];
        assert_eq!(game.home_team.as_deref(), Some("A"));
        assert_eq!(game.away_team, None);
        assert_eq!(game.away_score, None);
        assert_eq!(game.away_logo, None);
    }

    #[test]
    fn missing_or_empty_events_yield_empty_lists() {
        for doc in [scoreboard(json!({})), scoreboard(json!({ "events": [] })), scoreboard(json!({ "events": null }))] {
            assert!(normalize_scores(&doc, League::Nhl).unwrap().is_empty());
            assert!(normalize_schedule_in(&doc, League::Nhl, &Utc).unwrap().is_empty());
        }
    }

    #[test]
    fn event_without_competitions_is_a_parse_error() {
        let doc = scoreboard(json!({
            "events": [{ "status": { "type": { "state": "pre" } }, "date": "2026-10-19T23:00Z" }]
        }));
        let err = normalize_scores(&doc, League::Nhl).unwrap_err();
        assert!(matches!(err, ApiError::Parse { kind: ResourceKind::Scores, .. }));
        assert!(normalize_schedule_in(&doc, League::Nhl, &Utc).is_err());
    }

    #[test]
    fn competitor_without_team_is_a_parse_error() {
        let doc = scoreboard(json!({
            "events": [event("post", "Final", json!({ "homeAway": "home", "score": "1" }), competitor("away", "B", "0"))]
        }));
        let err = normalize_scores(&doc, League::Nhl).unwrap_err();
        assert!(err.to_string().contains("competitor team"), "{err}");
    }

    #[test]
    fn schedule_formats_kickoff_in_zone() {
        let doc = scoreboard(json!({
            "events": [event("pre", "", competitor("home", "Chiefs", ""), competitor("away", "Bills", ""))]
        }));
        let games = normalize_schedule_in(&doc, League::Nfl, &Utc).unwrap();
        assert_eq!(
            games,
            vec![ScheduledGame {
                home_team: Some("Chiefs".into()),
                away_team: Some("Bills".into()),
                date: "10/19/2026".into(),
                time: "11:00 PM".into(),
            }]
        );
    }

    #[test]
    fn schedule_requires_a_readable_date() {
        let doc = scoreboard(json!({
            "events": [{
                "date": "next tuesday",
                "competitions": [{ "competitors": [competitor("home", "A", ""), competitor("away", "B", "")] }]
            }]
        }));
        let err = normalize_schedule_in(&doc, League::Nfl, &Utc).unwrap_err();
        assert!(matches!(err, ApiError::Parse { kind: ResourceKind::Schedule, .. }));
    }

    #[test]
    fn event_dates_parse_with_and_without_seconds() {
        let short = parse_event_date("2026-10-19T23:00Z").unwrap();
        let full = parse_event_date("2026-10-19T23:00:00Z").unwrap();
        let offset = parse_event_date("2026-10-19T19:00:00-04:00").unwrap();
        assert_eq!(short, full);
        assert_eq!(full, offset);
        assert!(parse_event_date("").is_none());
    }

    #[test]
    fn flatten_keeps_division_then_conference_order() {
        let doc = standings(nested_standings("points"));
        let names: Vec<_> = flatten_groups(doc.children.as_deref().unwrap())
            .into_iter()
            .map(|e| e.team.as_ref().unwrap().preferred_name().unwrap())
            .collect();
        assert_eq!(names, ["Bruins", "Rangers", "Oilers"]);
    }

    #[test]
    fn conference_with_empty_divisions_uses_own_entries() {
        let doc = standings(json!({
            "children": [{
                "name": "Atlantic",
                "children": [],
                "standings": { "entries": [entry("Bruins", json!([{ "name": "points", "value": 90 }]))] }
            }]
        }));
        let names: Vec<_> = flatten_groups(doc.children.as_deref().unwrap())
            .into_iter()
            .map(|e| e.team.as_ref().unwrap().preferred_name().unwrap())
            .collect();
        assert_eq!(names, ["Bruins"]);

        let result = normalize_standings(&doc, League::Nhl).unwrap();
        assert_eq!(result.entries[0].points, 90.0);
    }

    #[test]
    fn hockey_ranks_by_points() {
        let result = normalize_standings(&standings(nested_standings("points")), League::Nhl).unwrap();
        assert_eq!(result.league, League::Nhl);
        let rows: Vec<_> = result.entries.iter().map(|e| (e.rank, e.team.as_str(), e.points)).collect();
        assert_eq!(rows, [(1, "Bruins", 90.0), (2, "Oilers", 80.0), (3, "Rangers", 75.0)]);
    }

    #[test]
    fn other_leagues_rank_by_wins_and_default_points() {
        let result = normalize_standings(&standings(nested_standings("wins")), League::Nba).unwrap();
        let rows: Vec<_> = result.entries.iter().map(|e| (e.rank, e.team.as_str(), e.wins)).collect();
        assert_eq!(rows, [(1, "Bruins", 90.0), (2, "Oilers", 80.0), (3, "Rangers", 75.0)]);
        assert!(result.entries.iter().all(|e| e.points == 0.0 && e.ot_losses == 0.0 && e.losses == 0.0));
    }

    #[test]
    fn hockey_ignores_wins_when_ranking() {
        let doc = standings(json!({
            "children": [{ "standings": { "entries": [
                entry("Many Wins", json!([{ "name": "wins", "value": 50 }, { "abbreviation": "PTS", "value": 100 }])),
                entry("Many Points", json!([{ "name": "wins", "value": 45 }, { "abbreviation": "PTS", "value": 104 }])),
            ] } }]
        }));
        let result = normalize_standings(&doc, League::Nhl).unwrap();
        assert_eq!(result.entries[0].team, "Many Points");
        assert_eq!(result.entries[0].wins, 45.0);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let doc = standings(json!({
            "children": [
                { "standings": { "entries": [
                    entry("A", json!([{ "name": "wins", "value": 10 }])),
                    entry("B", json!([{ "name": "wins", "value": 12 }])),
                    entry("C", json!([{ "name": "wins", "value": 10 }])),
                ] } },
                { "standings": { "entries": [entry("D", json!([{ "name": "wins", "value": 10 }]))] } }
            ]
        }));
        let teams: Vec<_> = normalize_standings(&doc, League::Mlb)
            .unwrap()
            .entries
            .into_iter()
            .map(|e| e.team)
            .collect();
        assert_eq!(teams, ["B", "A", "C", "D"]);
    }

    #[test]
    fn ranks_are_contiguous_and_keys_non_increasing() {
        let values = [3, 17, 8, 8, 0, 25, 11, 4];
        let entries: Vec<Value> = values
            .iter()
            .enumerate()
            .map(|(i, w)| entry(&format!("T{i}"), json!([{ "abbreviation": "W", "value": w }])))
            .collect();
        let doc = standings(json!({
            "children": [
                { "children": [{ "standings": { "entries": entries[..3].to_vec() } }, { "standings": { "entries": entries[3..5].to_vec() } }] },
                { "standings": { "entries": entries[5..].to_vec() } }
            ]
        }));
        let result = normalize_standings(&doc, League::Nfl).unwrap();
        let ranks: Vec<_> = result.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=values.len()).collect::<Vec<_>>());
        assert!(result.entries.windows(2).all(|w| w[0].wins >= w[1].wins));
    }

    #[test]
    fn all_stats_resolved_through_aliases() {
        let doc = standings(json!({
            "children": [{ "standings": { "entries": [entry("Bruins", json!([
                { "name": "wins", "abbreviation": "W", "value": 47 },
                { "name": "losses", "abbreviation": "L", "value": 20 },
                { "name": "otLosses", "abbreviation": "OTL", "value": 15 },
                { "name": "points", "abbreviation": "PTS", "value": 109 }
            ]))] } }]
        }));
        let entry = &normalize_standings(&doc, League::Nhl).unwrap().entries[0];
        assert_eq!((entry.wins, entry.losses, entry.ot_losses, entry.points), (47.0, 20.0, 15.0, 109.0));
    }

    #[test]
    fn logo_prefers_logo_list() {
        let doc = standings(json!({
            "children": [{ "standings": { "entries": [
                { "team": { "displayName": "A", "logo": "single.png", "logos": [{ "href": "first.png" }, { "href": "second.png" }] }, "stats": [] },
                { "team": { "displayName": "B", "logo": "single.png" }, "stats": [] },
                { "team": { "displayName": "C" }, "stats": [] }
            ] } }]
        }));
        let logos: Vec<_> = normalize_standings(&doc, League::Nba)
            .unwrap()
            .entries
            .into_iter()
            .map(|e| e.logo)
            .collect();
        assert_eq!(logos, [Some("first.png".to_string()), Some("single.png".to_string()), None]);
    }

    #[test]
    fn empty_logo_href_falls_back_to_team_logo() {
        let doc = standings(json!({
            "children": [{ "standings": { "entries": [
                { "team": { "displayName": "A", "logo": "single.png", "logos": [{ "href": "" }] }, "stats": [] },
                { "team": { "displayName": "B", "logo": "" }, "stats": [] }
            ] } }]
        }));
        let logos: Vec<_> = normalize_standings(&doc, League::Nba)
            .unwrap()
            .entries
            .into_iter()
            .map(|e| e.logo)
            .collect();
        assert_eq!(logos, [Some("single.png".to_string()), None]);
    }

    #[test]
    fn standings_name_prefers_short_display_name() {
        let doc = standings(json!({
            "children": [{ "standings": { "entries": [
                entry("Bruins", json!([])),
                { "team": { "displayName": "Boston Celtics" }, "stats": [] }
            ] } }]
        }));
        let teams: Vec<_> = normalize_standings(&doc, League::Nba)
            .unwrap()
            .entries
            .into_iter()
            .map(|e| e.team)
            .collect();
        assert_eq!(teams, ["Bruins", "Boston Celtics"]);
    }

    #[test]
    fn missing_children_yield_empty_standings() {
        for doc in [standings(json!({})), standings(json!({ "children": [] })), standings(json!({ "children": [{ "name": "Empty" }] }))] {
            let result = normalize_standings(&doc, League::Nfl).unwrap();
            assert!(result.entries.is_empty());
            assert_eq!(result.league, League::Nfl);
        }
    }

    #[test]
    fn entry_without_team_fails_whole_call() {
        let doc = standings(json!({
            "children": [{ "standings": { "entries": [
                entry("Bruins", json!([{ "name": "points", "value": 90 }])),
                { "stats": [{ "name": "points", "value": 80 }] }
            ] } }]
        }));
        let err = normalize_standings(&doc, League::Nhl).unwrap_err();
        assert!(matches!(err, ApiError::Parse { kind: ResourceKind::Standings, .. }));
        assert!(err.to_string().contains("has no team"), "{err}");
    }

    #[test]
    fn entry_without_stats_fails_whole_call() {
        let doc = standings(json!({
            "children": [{ "standings": { "entries": [{ "team": { "displayName": "A" } }] } }]
        }));
        assert!(normalize_standings(&doc, League::Nhl).is_err());
    }
}
