use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::state::app_state::{Loaded, items_for};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use sports_api::{GameScore, League, ScheduledGame, StandingsEntry};

static TABS: &[&str; 3] = &["Scores", "Schedule", "Standings"];

const HELP_TEXT: &str = "\
1 / 2 / 3     Scores / Schedule / Standings
h l  ← →      previous / next league
r             refresh now
j k  ↓ ↑      scroll
f             full screen
\"             toggle log pane
?  Esc        help / back
q  Ctrl-C     quit";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Scores => draw_scores(f, layout.main, app),
            MenuItem::Schedule => draw_schedule(f, layout.main, app),
            MenuItem::Standings => draw_standings(f, layout.main, app),
            MenuItem::Help => draw_placeholder(f, layout.main, HELP_TEXT),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        error!("failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Scores => 0,
        MenuItem::Schedule => 1,
        MenuItem::Standings => 2,
        MenuItem::Help => match app.state.previous_tab {
            MenuItem::Schedule => 1,
            MenuItem::Standings => 2,
            _ => 0,
        },
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let league = Paragraph::new(format!("◀ {} ▶  Help: ? ", app.state.league.label()))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(league, tab_bar[1]);
}

/// Pane title, e.g. " NHL Scores · updated 19:42 ".
fn pane_title<T>(league: League, what: &str, loaded: Option<&Loaded<T>>) -> String {
    match loaded {
        Some(l) => format!(" {league} {what} · updated {} ", l.updated_at.format("%H:%M")),
        None => format!(" {league} {what} "),
    }
}

/// Draw the pane border and, when there are no rows for the current league,
/// a status message instead. Returns the inner area and rows to tabulate.
fn draw_frame<'a, T>(
    f: &mut Frame,
    area: Rect,
    app: &App,
    what: &str,
    loaded: &'a Option<Loaded<T>>,
) -> Option<(Rect, &'a [T])> {
    let league = app.state.league;
    let current = items_for(loaded, league);
    let mut block = default_border(Color::White).title(pane_title(league, what, current));
    if let Some(err) = app.state.last_error.as_deref() {
        block = block.title_bottom(Line::from(format!(" {err} ")).style(Style::default().fg(Color::Red)));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let msg = match (current, app.state.last_error.as_deref()) {
        (Some(l), _) if !l.items.is_empty() => return Some((inner, l.items.as_slice())),
        (_, Some(err)) => format!("{err}\n\nPress r to retry."),
        (None, None) => format!("Loading {league} {}...", what.to_lowercase()),
        (Some(_), None) => format!("No {league} {} right now.", what.to_lowercase()),
    };

    let color = if app.state.last_error.is_some() { Color::Red } else { Color::DarkGray };
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        inner,
    );
    None
}

fn draw_scores(f: &mut Frame, area: Rect, app: &App) {
    let Some((inner, games)) = draw_frame(f, area, app, "Scores", &app.state.scores) else {
        return;
    };

    let rows = games
        .iter()
        .skip(app.state.scroll_offset as usize)
        .map(score_row);
    let header = Row::new(["Away", "", "Home", "", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(4),
            Constraint::Fill(2),
            Constraint::Length(4),
            Constraint::Fill(2),
        ],
    )
    .header(header)
    .column_spacing(1);
    f.render_widget(table, inner);
}

fn score_row(game: &GameScore) -> Row<'static> {
    let score = |s: Option<u16>| s.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
    let style = if game.is_live {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let status = if game.is_live { format!("● {}", game.status) } else { game.status.clone() };

    Row::new([
        Cell::from(team_or_tbd(&game.away_team)),
        Cell::from(score(game.away_score)),
        Cell::from(team_or_tbd(&game.home_team)),
        Cell::from(score(game.home_score)),
        Cell::from(status),
    ])
    .style(style)
}

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
    let Some((inner, games)) = draw_frame(f, area, app, "Schedule", &app.state.schedule) else {
        return;
    };

    let rows = games
        .iter()
        .skip(app.state.scroll_offset as usize)
        .map(schedule_row);
    let header = Row::new(["Date", "Time", "Matchup"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [Constraint::Length(10), Constraint::Length(8), Constraint::Fill(1)],
    )
    .header(header)
    .column_spacing(2);
    f.render_widget(table, inner);
}

fn schedule_row(game: &ScheduledGame) -> Row<'static> {
    Row::new([
        game.date.clone(),
        game.time.clone(),
        format!("{} @ {}", team_or_tbd(&game.away_team), team_or_tbd(&game.home_team)),
    ])
}

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let Some((inner, entries)) = draw_frame(f, area, app, "Standings", &app.state.standings) else {
        return;
    };

    let hockey = app.state.league.ranks_by_points();
    let rows = entries
        .iter()
        .skip(app.state.scroll_offset as usize)
        .map(|e| standings_row(e, hockey));

    let (header, widths): (Vec<&str>, Vec<Constraint>) = if hockey {
        (
            vec!["#", "Team", "W", "L", "OTL", "PTS"],
            vec![
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
            ],
        )
    } else {
        (
            vec!["#", "Team", "W", "L"],
            vec![
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(4),
                Constraint::Length(4),
            ],
        )
    };

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)))
        .column_spacing(1);
    f.render_widget(table, inner);
}

fn standings_row(entry: &StandingsEntry, hockey: bool) -> Row<'static> {
    let mut cells = vec![
        entry.rank.to_string(),
        entry.team.clone(),
        entry.wins.to_string(),
        entry.losses.to_string(),
    ];
    if hockey {
        cells.push(entry.ot_losses.to_string());
        cells.push(entry.points.to_string());
    }
    Row::new(cells)
}

fn team_or_tbd(team: &Option<String>) -> String {
    team.clone().unwrap_or_else(|| "TBD".into())
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray))
        .style_debug(Style::default().fg(Color::DarkGray));
    f.render_widget(logs, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Left),
        inner,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(22), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
