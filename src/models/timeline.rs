// SPDX-License-Identifier: MIT

//! Timeline view: activities grouped by calendar day, most recent first.
//!
//! The input list comes straight from the descending Firestore query, so
//! grouping is a single linear scan. Nap durations are derived by pairing
//! each wake with the nearest prior sleep on the same day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Activity, ActivityType};
use crate::time_utils::format_utc_rfc3339;

/// One activity as rendered in the timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub id: String,
    pub activity_type: ActivityType,
    pub activity_time: String,
    pub notes: String,
    pub auto: bool,
    /// Minutes slept, present only on wake entries with a paired sleep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nap_minutes: Option<i64>,
}

/// One calendar day's worth of entries, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineDay {
    /// UTC date, "YYYY-MM-DD"
    pub date: String,
    pub entries: Vec<TimelineEntry>,
}

/// Group a descending activity list into per-day timeline sections.
pub fn build_timeline(activities: &[Activity]) -> Vec<TimelineDay> {
    let mut days: Vec<TimelineDay> = Vec::new();
    let mut current_date: Option<NaiveDate> = None;

    for (idx, activity) in activities.iter().enumerate() {
        let date = activity.activity_time.date_naive();
        if current_date != Some(date) {
            days.push(TimelineDay {
                date: date.to_string(),
                entries: Vec::new(),
            });
            current_date = Some(date);
        }

        let nap_minutes = if activity.activity_type == ActivityType::Wake {
            nap_duration_minutes(activities, idx)
        } else {
            None
        };

        // Safe: a day was pushed above if the list was empty
        days.last_mut().unwrap().entries.push(TimelineEntry {
            id: activity.id.clone(),
            activity_type: activity.activity_type,
            activity_time: format_utc_rfc3339(activity.activity_time),
            notes: activity.notes.clone(),
            auto: activity.auto,
            nap_minutes,
        });
    }

    days
}

/// Find the nearest prior sleep for the wake at `wake_idx` and return the
/// nap length in whole minutes.
///
/// The list is descending, so "prior" entries sit at higher indices. The
/// scan stops at the day boundary: a sleep on a previous calendar day does
/// not pair (same policy as the timeline grouping itself).
fn nap_duration_minutes(activities: &[Activity], wake_idx: usize) -> Option<i64> {
    let wake = &activities[wake_idx];
    let wake_date = wake.activity_time.date_naive();

    for earlier in &activities[wake_idx + 1..] {
        if earlier.activity_time.date_naive() != wake_date {
            return None;
        }
        if earlier.activity_type == ActivityType::Sleep {
            let minutes = (wake.activity_time - earlier.activity_time).num_minutes();
            return (minutes >= 0).then_some(minutes);
        }
    }

    None
}
