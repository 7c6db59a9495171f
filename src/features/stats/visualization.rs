//! Terminal visualization for the weekly chart.
//!
//! Provides ASCII charts for CLI output. The TUI draws its own chart with
//! ratatui widgets.

use crate::features::stats::DayActivity;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart of daily minutes.
///
/// # Arguments
///
/// * `days` - Days to chart, in display order
/// * `bar_width` - Width of the bar portion
/// * `highlight` - Index of a day to mark (usually today)
///
/// # Returns
///
/// A multi-line string with the chart.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart(days: &[DayActivity], bar_width: usize, highlight: Option<usize>) -> String {
    if days.is_empty() {
        return String::new();
    }

    let max_value = days.iter().map(|d| d.minutes).max().unwrap_or(1).max(1);
    let label_width = days.iter().map(|d| d.day.chars().count()).max().unwrap_or(0);
    let mut lines = Vec::new();

    for (i, day) in days.iter().enumerate() {
        let bar_length =
            ((f64::from(day.minutes) / f64::from(max_value)) * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);
        let marker = if highlight == Some(i) { " ◀ today" } else { "" };

        lines.push(format!(
            "{:label_width$} |{bar}{padding} {}m{marker}",
            day.day, day.minutes
        ));
    }

    lines.join("\n")
}

/// Render a sparkline (compact inline chart).
///
/// # Arguments
///
/// * `values` - Slice of values to render
///
/// # Returns
///
/// A single-line string with the sparkline.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_sparkline(values: &[u32]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let normalized = (f64::from(v) / f64::from(max_value) * 7.0) as usize;
                BAR_CHARS[normalized.clamp(1, 7)]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stats::weekly_activity;

    #[test]
    fn test_render_bar_chart() {
        let chart = render_bar_chart(weekly_activity(), 21, Some(3));
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Mon |"));
        assert!(lines[0].ends_with("120m"));
        // Thursday is the longest day and fills the bar.
        assert!(lines[3].contains(&"█".repeat(21)));
        assert!(lines[3].ends_with("◀ today"));
        assert!(!lines[6].contains('█'));
    }

    #[test]
    fn test_render_bar_chart_empty() {
        assert_eq!(render_bar_chart(&[], 10, None), "");
    }

    #[test]
    fn test_render_sparkline() {
        let spark = render_sparkline(&[0, 70, 140]);
        assert_eq!(spark.chars().count(), 3);
        assert_eq!(spark.chars().next(), Some(' '));
        assert_eq!(spark.chars().last(), Some('▇'));
    }
}
