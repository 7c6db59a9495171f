//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::features::focus::{FocusDuration, Mode, CYCLES_BEFORE_LONG_BREAK};
use crate::features::stats::{today_index, weekly_activity, DayActivity};
use crate::tui::app::App;

/// Days with more focus than this are drawn in the accent color.
const BUSY_DAY_MINUTES: u32 = 150;

const HELP_LINE: &str =
    "space:start/pause | r:reset | f/b/l:mode | 1/2:25m/50m | t:theme | m:music | ?:help | q:quit";

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Mode tabs
            Constraint::Length(3), // Duration presets
            Constraint::Min(5),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(9), // Weekly chart
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_mode_tabs(frame, app, chunks[1]);
    render_presets(frame, app, chunks[2]);
    render_countdown(frame, app, chunks[3]);
    render_progress(frame, app, chunks[4]);
    render_week(frame, app, chunks[5]);
    render_status_bar(frame, app, chunks[6]);

    if app.show_help {
        render_help(frame, app);
    }

    if app.alert.is_some() {
        render_alert(frame, app);
    }
}

/// Render the title, theme, and music state.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let accent = app.theme.accent();

    let music = if app.music.is_playing() {
        Span::styled(
            format!("♪ Playing {:.0}%", app.music.volume() * 100.0),
            Style::default().fg(accent),
        )
    } else {
        Span::styled("BGM OFF", Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled(
            " Focus Study ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· long break after {CYCLES_BEFORE_LONG_BREAK} sessions  "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("theme: {}  ", app.theme)),
        music,
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );

    frame.render_widget(header, area);
}

/// Render the focus / break / long break selector.
fn render_mode_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mode = app.session.mode();
    let selected = Mode::ALL.iter().position(|m| *m == mode).unwrap_or(0);

    let tabs = Tabs::new(Mode::ALL.iter().map(|m| m.display_name()))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(app.theme.mode_color(mode))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" Mode "));

    frame.render_widget(tabs, area);
}

/// Render the 25 / 50 minute selector and the preset label.
fn render_presets(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let current = app.session.focus_duration();
    let accent = app.theme.accent();

    let mut spans = Vec::new();
    for duration in FocusDuration::ALL {
        let style = if duration == current {
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {duration} "), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        current.preset().label,
        Style::default().fg(Color::Gray),
    ));

    let presets = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Duration "));

    frame.render_widget(presets, area);
}

/// Render the remaining time, cycle dots, and what comes next.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = &app.session;
    let color = app.theme.mode_color(session.mode());

    let state = if session.is_running() { "RUNNING" } else { "PAUSED" };

    let dots: Vec<Span<'_>> = (0..CYCLES_BEFORE_LONG_BREAK)
        .map(|i| {
            if i < session.cycle_count() {
                Span::styled("● ", Style::default().fg(color))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            session.format_time(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state, Style::default().fg(Color::Gray))),
        Line::from(dots),
        Line::from(Span::styled(
            format!("next: {}", session.next_mode()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let countdown = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", session.mode())),
    );

    frame.render_widget(countdown, area);
}

/// Render the remaining-time gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let progress = app.session.progress().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(app.theme.mode_color(app.session.mode())))
        .ratio(progress)
        .label(format!("{:.0}% left", progress * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the weekly focus chart.
fn render_week(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let today = today_index();
    let accent = app.theme.accent();

    let bars: Vec<Bar<'_>> = weekly_activity()
        .iter()
        .enumerate()
        .map(|(i, day)| {
            Bar::default()
                .value(u64::from(day.minutes))
                .text_value(format!("{}m", day.minutes))
                .label(Line::from(day.day))
                .style(bar_style(day, i == today, accent))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" This week "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}

/// Accent for busy days and today; today is also bold.
fn bar_style(day: &DayActivity, is_today: bool, accent: Color) -> Style {
    let style = if is_today || day.minutes > BUSY_DAY_MINUTES {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    if is_today {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP_LINE);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the blocking alert shown after a countdown expires.
fn render_alert(frame: &mut Frame<'_>, app: &App) {
    let Some(completion) = app.alert else {
        return;
    };
    let area = centered_rect(50, 30, frame.area());
    let color = app.theme.mode_color(app.session.mode());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            completion.message(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let alert = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!(" {} ", completion.title())),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
}

/// Render the key help overlay.
fn render_help(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 60, frame.area());

    let keys = [
        ("space", "Start / pause"),
        ("r", "Reset current mode"),
        ("f b l", "Focus / break / long break"),
        ("1 2", "25 / 50 minute focus"),
        ("t", "Next theme"),
        ("m", "Music on / off"),
        ("+ -", "Music volume"),
        ("s", "Test alarm sound"),
        ("q", "Quit"),
    ];

    let lines: Vec<Line<'_>> = keys
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:>7}  "),
                    Style::default()
                        .fg(app.theme.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*desc),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys (any key to close) "),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Rectangle of the given percentage size centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
