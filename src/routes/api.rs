// SPDX-License-Identifier: MIT

//! API routes for the activity journal.
//!
//! Reads are open; mutations sit behind the passcode gate. Every mutation
//! responds with a freshly re-queried timeline so the client never has to
//! patch local state.

use crate::error::Result;
use crate::models::stats::{compute_stats, JournalStats};
use crate::models::timeline::{build_timeline, TimelineDay};
use crate::models::{calendar, Activity, MonthCalendar, NewActivity};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_LIMIT: u32 = 500;

/// API routes. Mutating routes require the passcode cookie.
pub fn routes() -> Router<Arc<AppState>> {
    let mutating = Router::new()
        .route("/api/activities", post(create_activity))
        .route("/api/activities/{id}", delete(delete_activity))
        .route_layer(axum::middleware::from_fn(
            crate::middleware::require_passcode,
        ));

    Router::new()
        .route("/api/activities", get(get_timeline))
        .route("/api/stats", get(get_stats))
        .route("/api/calendar/{year}/{month}", get(get_calendar))
        .merge(mutating)
}

// ─── Timeline ────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimelineQuery {
    /// Cap on the number of activities fetched (newest first)
    limit: Option<u32>,
}

#[derive(Serialize)]
pub struct TimelineResponse {
    pub days: Vec<TimelineDay>,
    pub total: u32,
}

fn timeline_response(activities: &[Activity]) -> TimelineResponse {
    TimelineResponse {
        days: build_timeline(activities),
        total: activities.len() as u32,
    }
}

/// Get the journal as a day-grouped timeline, newest first.
async fn get_timeline(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TimelineQuery>,
) -> Result<Json<TimelineResponse>> {
    if let Some(limit) = params.limit {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(crate::error::AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }
    }

    tracing::debug!(limit = ?params.limit, "Fetching timeline");

    let activities = state.db.list_activities(params.limit).await?;
    Ok(Json(timeline_response(&activities)))
}

// ─── Create / Delete ─────────────────────────────────────────

#[derive(Serialize)]
pub struct CreateActivityResponse {
    pub activity: Activity,
    /// Auto-generated wake record, if the journal ended in an open sleep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_wake: Option<Activity>,
    /// Refreshed timeline after the write
    pub days: Vec<TimelineDay>,
    pub total: u32,
}

/// Create an activity (passcode required).
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewActivity>,
) -> Result<Json<CreateActivityResponse>> {
    let outcome = state.journal.add_activity(new).await?;

    // The store is the source of truth: re-query rather than splice the
    // new records into anything
    let activities = state.db.list_activities(None).await?;
    let timeline = timeline_response(&activities);

    Ok(Json(CreateActivityResponse {
        activity: outcome.activity,
        auto_wake: outcome.auto_wake,
        days: timeline.days,
        total: timeline.total,
    }))
}

#[derive(Serialize)]
pub struct DeleteActivityResponse {
    pub deleted_id: String,
    pub days: Vec<TimelineDay>,
    pub total: u32,
}

/// Delete an activity by ID (passcode required).
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteActivityResponse>> {
    state.journal.delete_activity(&id).await?;

    let activities = state.db.list_activities(None).await?;
    let timeline = timeline_response(&activities);

    Ok(Json(DeleteActivityResponse {
        deleted_id: id,
        days: timeline.days,
        total: timeline.total,
    }))
}

// ─── Stats ───────────────────────────────────────────────────

/// Get aggregate stats over the trailing week and month.
async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<JournalStats>> {
    let activities = state.db.list_activities(None).await?;
    Ok(Json(compute_stats(&activities, chrono::Utc::now())))
}

// ─── Calendar ────────────────────────────────────────────────

/// Get the month calendar with per-date activity counts.
async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthCalendar>> {
    let invalid_month = || {
        crate::error::AppError::BadRequest(format!("Invalid year/month: {}/{}", year, month))
    };

    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(invalid_month)?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(invalid_month)?
        .and_utc();
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid_month)?
    .and_hms_opt(0, 0, 0)
    .ok_or_else(invalid_month)?
    .and_utc();

    let activities = state.db.activities_in_range(start, end).await?;

    let calendar = calendar::build_month(&activities, year, month).ok_or_else(invalid_month)?;
    Ok(Json(calendar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use chrono::{DateTime, Utc};

    fn make_activity(id: &str, time: &str) -> Activity {
        Activity {
            id: id.to_string(),
            activity_type: ActivityType::Meal,
            activity_time: time.parse::<DateTime<Utc>>().unwrap(),
            notes: String::new(),
            created_at: time.parse::<DateTime<Utc>>().unwrap(),
            auto: false,
        }
    }

    #[test]
    fn test_timeline_response_counts_entries() {
        let activities = vec![
            make_activity("a", "2024-06-02T08:00:00Z"),
            make_activity("b", "2024-06-01T08:00:00Z"),
        ];

        let response = timeline_response(&activities);

        assert_eq!(response.total, 2);
        assert_eq!(response.days.len(), 2);
    }
}
