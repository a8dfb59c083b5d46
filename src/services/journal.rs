// SPDX-License-Identifier: MIT

//! Journal service.
//!
//! Handles the core workflow around the activity collection:
//! 1. Validate the incoming record
//! 2. Apply the auto-wake rule against the most recent record
//! 3. Write the record(s) to Firestore
//!
//! Reads are left to the handlers, which re-query after every mutation.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType, NewActivity};

/// Business logic around activity creation and deletion.
#[derive(Clone)]
pub struct JournalService {
    db: FirestoreDb,
}

impl JournalService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Create an activity, inserting an auto-wake record first when the
    /// journal currently ends in an open sleep.
    pub async fn add_activity(&self, new: NewActivity) -> Result<AddOutcome> {
        new.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let latest = self.db.latest_activity().await?;
        let created_at = Utc::now();

        let auto_wake = if should_auto_wake(latest.as_ref(), new.activity_type) {
            let wake = Activity {
                id: Uuid::new_v4().to_string(),
                activity_type: ActivityType::Wake,
                // Waking is observed at the moment the new event happens
                activity_time: new.activity_time,
                notes: String::new(),
                created_at,
                auto: true,
            };
            self.db.add_activity(&wake).await?;
            tracing::info!(id = %wake.id, "Inserted auto-wake record");
            Some(wake)
        } else {
            None
        };

        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            activity_type: new.activity_type,
            activity_time: new.activity_time,
            notes: new.notes,
            created_at,
            auto: false,
        };
        self.db.add_activity(&activity).await?;

        tracing::info!(
            id = %activity.id,
            activity_type = activity.activity_type.as_str(),
            auto_wake = auto_wake.is_some(),
            "Activity created"
        );

        Ok(AddOutcome {
            activity,
            auto_wake,
        })
    }

    /// Delete an activity by ID. Returns `NotFound` if no such record.
    pub async fn delete_activity(&self, id: &str) -> Result<()> {
        if self.db.get_activity(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Activity {} not found", id)));
        }

        self.db.delete_activity(id).await?;
        tracing::info!(id, "Activity deleted");
        Ok(())
    }
}

/// Result of creating an activity.
#[derive(Debug)]
pub struct AddOutcome {
    pub activity: Activity,
    /// The auto-generated wake record, if one was inserted
    pub auto_wake: Option<Activity>,
}

/// Whether creating a record of `new_type` should first close the journal's
/// open sleep with an auto-wake record.
///
/// An explicit wake stands alone; inserting an auto one next to it would
/// double-log the same event.
fn should_auto_wake(latest: Option<&Activity>, new_type: ActivityType) -> bool {
    matches!(latest, Some(a) if a.activity_type == ActivityType::Sleep)
        && new_type != ActivityType::Sleep
        && new_type != ActivityType::Wake
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleeping() -> Activity {
        Activity {
            id: "sleep-1".to_string(),
            activity_type: ActivityType::Sleep,
            activity_time: "2024-06-01T13:00:00Z".parse().unwrap(),
            notes: String::new(),
            created_at: "2024-06-01T13:00:00Z".parse().unwrap(),
            auto: false,
        }
    }

    #[test]
    fn test_auto_wake_after_sleep() {
        let latest = sleeping();
        assert!(should_auto_wake(Some(&latest), ActivityType::Meal));
        assert!(should_auto_wake(Some(&latest), ActivityType::Walk));
    }

    #[test]
    fn test_no_auto_wake_for_sleep_after_sleep() {
        let latest = sleeping();
        assert!(!should_auto_wake(Some(&latest), ActivityType::Sleep));
    }

    #[test]
    fn test_no_auto_wake_for_explicit_wake() {
        let latest = sleeping();
        assert!(!should_auto_wake(Some(&latest), ActivityType::Wake));
    }

    #[test]
    fn test_no_auto_wake_when_latest_not_sleep() {
        let mut latest = sleeping();
        latest.activity_type = ActivityType::Meal;
        assert!(!should_auto_wake(Some(&latest), ActivityType::Walk));
    }

    #[test]
    fn test_no_auto_wake_on_empty_journal() {
        assert!(!should_auto_wake(None, ActivityType::Meal));
    }
}
