//! Weekly focus activity.
//!
//! The figures are fixed sample data; nothing is recorded between runs.

use chrono::{Datelike, Weekday};
use serde::Serialize;

/// Focus minutes for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    /// Short day label (Mon - Sun)
    pub day: &'static str,
    /// Minutes spent focusing
    pub minutes: u32,
}

const WEEK_DATA: [DayActivity; 7] = [
    DayActivity { day: "Mon", minutes: 120 },
    DayActivity { day: "Tue", minutes: 180 },
    DayActivity { day: "Wed", minutes: 150 },
    DayActivity { day: "Thu", minutes: 210 },
    DayActivity { day: "Fri", minutes: 90 },
    DayActivity { day: "Sat", minutes: 45 },
    DayActivity { day: "Sun", minutes: 0 },
];

/// The week's activity, Monday first.
#[must_use]
pub const fn weekly_activity() -> &'static [DayActivity; 7] {
    &WEEK_DATA
}

/// Index into the week for a weekday (Monday = 0).
#[must_use]
pub fn day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

/// Index of today in the local timezone.
#[must_use]
pub fn today_index() -> usize {
    day_index(chrono::Local::now().weekday())
}

/// Totals derived from a week of activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklySummary {
    /// Total focus minutes
    pub total_minutes: u32,
    /// Average per day
    pub daily_average: f64,
    /// Day with the most focus time
    pub best_day: Option<DayActivity>,
    /// Days with any focus time
    pub active_days: usize,
}

impl WeeklySummary {
    /// Summarize a set of days.
    #[must_use]
    pub fn from_days(days: &[DayActivity]) -> Self {
        let total_minutes: u32 = days.iter().map(|d| d.minutes).sum();
        #[allow(clippy::cast_precision_loss)]
        let daily_average = if days.is_empty() {
            0.0
        } else {
            f64::from(total_minutes) / days.len() as f64
        };
        let best_day = days
            .iter()
            .filter(|d| d.minutes > 0)
            .max_by_key(|d| d.minutes)
            .copied();
        let active_days = days.iter().filter(|d| d.minutes > 0).count();

        Self {
            total_minutes,
            daily_average,
            best_day,
            active_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_activity() {
        let week = weekly_activity();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], DayActivity { day: "Mon", minutes: 120 });
        assert_eq!(week[6], DayActivity { day: "Sun", minutes: 0 });
    }

    #[test]
    fn test_day_index() {
        assert_eq!(day_index(Weekday::Mon), 0);
        assert_eq!(day_index(Weekday::Thu), 3);
        assert_eq!(day_index(Weekday::Sun), 6);
        assert!(today_index() < 7);
    }

    #[test]
    fn test_summary() {
        let summary = WeeklySummary::from_days(weekly_activity());
        assert_eq!(summary.total_minutes, 795);
        assert!((summary.daily_average - 795.0 / 7.0).abs() < 1e-9);
        assert_eq!(summary.best_day.map(|d| d.day), Some("Thu"));
        assert_eq!(summary.active_days, 6);
    }

    #[test]
    fn test_summary_empty() {
        let summary = WeeklySummary::from_days(&[]);
        assert_eq!(summary.total_minutes, 0);
        assert!(summary.best_day.is_none());
    }
}
