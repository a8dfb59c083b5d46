// SPDX-License-Identifier: MIT

//! Activity record model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// The kind of event being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Wee,
    Poo,
    Meal,
    Walk,
    Play,
    Training,
    Sleep,
    Wake,
    Other,
}

impl ActivityType {
    /// All activity types, in display order.
    pub const ALL: [ActivityType; 9] = [
        ActivityType::Wee,
        ActivityType::Poo,
        ActivityType::Meal,
        ActivityType::Walk,
        ActivityType::Play,
        ActivityType::Training,
        ActivityType::Sleep,
        ActivityType::Wake,
        ActivityType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Wee => "wee",
            ActivityType::Poo => "poo",
            ActivityType::Meal => "meal",
            ActivityType::Walk => "walk",
            ActivityType::Play => "play",
            ActivityType::Training => "training",
            ActivityType::Sleep => "sleep",
            ActivityType::Wake => "wake",
            ActivityType::Other => "other",
        }
    }
}

/// Stored activity record in Firestore.
///
/// Records are created and deleted, never edited. `auto` marks wake
/// records the server inserted to close out a sleep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Document ID (UUID v4)
    pub id: String,
    /// What happened
    pub activity_type: ActivityType,
    /// When it happened (UTC)
    pub activity_time: DateTime<Utc>,
    /// Free-form notes; required non-empty for `other`
    #[serde(default)]
    pub notes: String,
    /// When this record was written
    pub created_at: DateTime<Utc>,
    /// True for server-generated wake records
    #[serde(default)]
    pub auto: bool,
}

/// Request body for creating an activity.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_other_has_notes))]
pub struct NewActivity {
    pub activity_type: ActivityType,
    pub activity_time: DateTime<Utc>,
    #[serde(default)]
    #[validate(length(max = 500, message = "notes must be at most 500 characters"))]
    pub notes: String,
}

/// `other` is meaningless without a description of what happened.
fn validate_other_has_notes(new: &NewActivity) -> Result<(), ValidationError> {
    if new.activity_type == ActivityType::Other && new.notes.trim().is_empty() {
        return Err(ValidationError::new("notes_required_for_other")
            .with_message("notes are required when activity_type is 'other'".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_activity(activity_type: ActivityType, notes: &str) -> NewActivity {
        NewActivity {
            activity_type,
            activity_time: "2024-06-01T09:30:00Z".parse().unwrap(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_other_with_empty_notes_rejected() {
        let new = new_activity(ActivityType::Other, "");
        assert!(new.validate().is_err());
    }

    #[test]
    fn test_other_with_whitespace_notes_rejected() {
        let new = new_activity(ActivityType::Other, "   ");
        assert!(new.validate().is_err());
    }

    #[test]
    fn test_other_with_notes_accepted() {
        let new = new_activity(ActivityType::Other, "chewed the remote");
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_non_other_with_empty_notes_accepted() {
        let new = new_activity(ActivityType::Meal, "");
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_overlong_notes_rejected() {
        let new = new_activity(ActivityType::Walk, &"a".repeat(501));
        assert!(new.validate().is_err());
    }

    #[test]
    fn test_activity_type_serde_lowercase() {
        let json = serde_json::to_string(&ActivityType::Training).unwrap();
        assert_eq!(json, "\"training\"");

        let parsed: ActivityType = serde_json::from_str("\"wee\"").unwrap();
        assert_eq!(parsed, ActivityType::Wee);
    }

    #[test]
    fn test_activity_missing_auto_defaults_false() {
        // Documents written before the auto flag existed must still deserialize
        let json = r#"{
            "id": "abc",
            "activity_type": "sleep",
            "activity_time": "2024-06-01T09:30:00Z",
            "notes": "",
            "created_at": "2024-06-01T09:31:00Z"
        }"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert!(!activity.auto);
    }
}
