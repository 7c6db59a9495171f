use colored::{ColoredString, Colorize};

use crate::features::focus::{
    format_minutes, render_progress_bar, Completion, FocusDuration, Mode, Session, CYCLES_BEFORE_LONG_BREAK,
};
use crate::features::stats::{render_bar_chart, render_sparkline, DayActivity, WeeklySummary};

/// Color a mode name the way the timer screen does
fn mode_label(mode: Mode) -> ColoredString {
    match mode {
        Mode::Focus => mode.display_name().magenta().bold(),
        Mode::Break => mode.display_name().cyan().bold(),
        Mode::LongBreak => mode.display_name().yellow().bold(),
    }
}

/// Cycle dots, filled for each completed focus session
#[must_use]
pub fn format_cycle_dots(cycle_count: u8) -> String {
    (0..CYCLES_BEFORE_LONG_BREAK)
        .map(|i| if i < cycle_count { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the duration preset table
pub fn format_presets_pretty(current: FocusDuration) -> String {
    let mut output = format!("Focus presets ({} items)\n", FocusDuration::ALL.len());
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for duration in FocusDuration::ALL {
        let preset = duration.preset();
        let marker = if duration == current { "▶".green() } else { " ".normal() };
        output.push_str(&format!(
            "{marker} {:>3}  break {:>2}m  long break {:>2}m  {}\n",
            duration.to_string().bold(),
            preset.break_minutes,
            preset.long_break_minutes,
            preset.label.dimmed()
        ));
    }

    output.push_str(&format!(
        "\nLong break after {CYCLES_BEFORE_LONG_BREAK} focus sessions."
    ));
    output
}

/// Format the weekly chart with a summary
pub fn format_week_pretty(days: &[DayActivity], summary: &WeeklySummary, today: usize) -> String {
    let mut lines = vec!["Weekly focus".bold().to_string(), "─".repeat(50)];

    lines.push(render_bar_chart(days, 30, Some(today)));
    lines.push(String::new());

    let minutes: Vec<u32> = days.iter().map(|d| d.minutes).collect();
    lines.push(format!("Trend:     {}", render_sparkline(&minutes).cyan()));
    lines.push(format!("Total:     {}", format_minutes(summary.total_minutes)));
    lines.push(format!("Average:   {:.0}m per day", summary.daily_average));
    if let Some(best) = summary.best_day {
        lines.push(format!("Best day:  {} ({}m)", best.day.green(), best.minutes));
    }
    lines.push(format!("Active:    {}/{} days", summary.active_days, days.len()));

    lines.join("\n")
}

/// Format a single-line countdown status
pub fn format_status_line(session: &Session) -> String {
    let state = if session.is_running() { "▶" } else { "⏸" };
    format!(
        "{state} {} {} {} {}",
        mode_label(session.mode()),
        session.format_time().bold(),
        render_progress_bar(session.progress(), 20),
        format_cycle_dots(session.cycle_count()).dimmed()
    )
}

/// Format a completion alert
pub fn format_completion_pretty(completion: Completion, session: &Session) -> String {
    let icon = match completion {
        Completion::FocusComplete => "✅",
        Completion::LongBreakEarned => "🏆",
        Completion::BreakOver => "🎯",
    };

    format!(
        "{icon} {}\n   Next: {} {}",
        completion.message().green(),
        mode_label(session.mode()),
        session.format_time()
    )
}
