// SPDX-License-Identifier: MIT

//! Month calendar view: per-date activity counts for one month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::Activity;

/// One day in the month grid.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    /// UTC date, "YYYY-MM-DD"
    pub date: String,
    /// Day of month, 1-based
    pub day: u32,
    /// Number of activities logged on this date
    pub count: u32,
}

/// Calendar for one month, with enough layout info to render a grid
/// without client-side date math.
#[derive(Debug, Clone, Serialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of the 1st, Monday = 0
    pub first_weekday: u32,
    /// One entry per day of the month, in order; zero-count days included
    pub days: Vec<CalendarDay>,
}

/// Build the calendar for `year`/`month` from the given activities.
///
/// Activities outside the month are ignored, so callers may pass either a
/// pre-filtered range query result or the whole journal. Returns `None`
/// for an invalid year/month combination.
pub fn build_month(activities: &[Activity], year: i32, month: u32) -> Option<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days_in_month = days_in_month(year, month)?;

    let mut days: Vec<CalendarDay> = (1..=days_in_month)
        .map(|day| {
            // from_ymd_opt cannot fail for days we just counted
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            CalendarDay {
                date: date.to_string(),
                day,
                count: 0,
            }
        })
        .collect();

    for activity in activities {
        let date = activity.activity_time.date_naive();
        if date.year() == year && date.month() == month {
            days[date.day() as usize - 1].count += 1;
        }
    }

    Some(MonthCalendar {
        year,
        month,
        days_in_month,
        first_weekday: first.weekday().num_days_from_monday(),
        days,
    })
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_month - first).num_days() as u32)
}
