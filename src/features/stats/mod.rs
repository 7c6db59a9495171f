//! Weekly activity chart.
//!
//! Provides the static weekly dataset, a summary of it, and text
//! renderings for the CLI.

pub mod visualization;
pub mod weekly;

pub use visualization::{render_bar_chart, render_sparkline};
pub use weekly::{day_index, today_index, weekly_activity, DayActivity, WeeklySummary};
