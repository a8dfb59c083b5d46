//! Aggregate statistics over the activity journal.
//!
//! Counts and daily averages over fixed trailing windows, computed from
//! a fresh query each time. The journal is small (a puppy only does so
//! much in a day), so there is no pre-computed aggregate document.

use chrono::{DateTime, Days, Utc};
use serde::Serialize;

use crate::models::{Activity, ActivityType};

/// Trailing window sizes in days.
const WEEK_DAYS: u32 = 7;
const MONTH_DAYS: u32 = 30;

/// Stats for one activity type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeStats {
    pub activity_type: ActivityType,
    /// All-time count
    pub total: u32,
    /// Count over the trailing week
    pub week_count: u32,
    /// Mean count per day over the trailing week
    pub week_daily_avg: f64,
    /// Count over the trailing month
    pub month_count: u32,
    /// Mean count per day over the trailing month
    pub month_daily_avg: f64,
}

/// Full stats response.
#[derive(Debug, Clone, Serialize)]
pub struct JournalStats {
    pub total_activities: u32,
    /// One entry per activity type, including types with zero records
    pub by_type: Vec<TypeStats>,
    pub week_days: u32,
    pub month_days: u32,
}

/// Compute journal stats as of `now`.
///
/// Windows are inclusive of today's UTC date: the week window covers
/// today and the 6 days before it. Averages divide by the window length,
/// not by the number of days with records.
pub fn compute_stats(activities: &[Activity], now: DateTime<Utc>) -> JournalStats {
    let today = now.date_naive();
    let week_start = today - Days::new(u64::from(WEEK_DAYS) - 1);
    let month_start = today - Days::new(u64::from(MONTH_DAYS) - 1);

    let by_type = ActivityType::ALL
        .iter()
        .map(|&activity_type| {
            let mut total = 0u32;
            let mut week_count = 0u32;
            let mut month_count = 0u32;

            for activity in activities {
                if activity.activity_type != activity_type {
                    continue;
                }
                total += 1;

                let date = activity.activity_time.date_naive();
                if date > today {
                    // Future-dated records are possible (the form allows
                    // picking any time); keep them out of the windows
                    continue;
                }
                if date >= week_start {
                    week_count += 1;
                }
                if date >= month_start {
                    month_count += 1;
                }
            }

            TypeStats {
                activity_type,
                total,
                week_count,
                week_daily_avg: f64::from(week_count) / f64::from(WEEK_DAYS),
                month_count,
                month_daily_avg: f64::from(month_count) / f64::from(MONTH_DAYS),
            }
        })
        .collect();

    JournalStats {
        total_activities: activities.len() as u32,
        by_type,
        week_days: WEEK_DAYS,
        month_days: MONTH_DAYS,
    }
}
