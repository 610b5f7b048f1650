//! Goal Entity
//!
//! A tracked objective with a clamped progress percentage.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Upper bound of `Goal::progress`
pub const MAX_PROGRESS: u8 = 100;

/// Opaque goal identifier
///
/// New ids are random UUIDs. Older saved data used millisecond timestamps,
/// so any string is accepted when loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GoalId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for GoalId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user goal, serialized with the camelCase field names of the storage slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Percentage in 0..=100
    pub progress: u8,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a fresh goal at 0% progress
    ///
    /// Title and description are trimmed. Callers reject empty titles before
    /// getting here (see `GoalStore::create`).
    pub fn new(
        id: GoalId,
        title: &str,
        description: &str,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            category,
            progress: 0,
            completed: false,
            created_at,
        }
    }

    /// Move progress by `delta` points, clamped to 0..=100.
    /// Reaching 100 completes the goal; anything lower un-completes it.
    pub fn adjust_progress(&mut self, delta: i32) {
        let next = (i64::from(self.progress) + i64::from(delta)).clamp(0, i64::from(MAX_PROGRESS));
        self.progress = next as u8;
        self.completed = self.progress == MAX_PROGRESS;
    }

    /// Complete (forcing 100%) or reopen (keeping progress as is)
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
        if self.completed {
            self.progress = MAX_PROGRESS;
        }
    }

    /// Restore the progress invariants on a record read from storage.
    /// Progress above 100 is capped; a completed goal is pinned to 100.
    /// Returns true when anything was changed.
    pub fn normalize(&mut self) -> bool {
        let before = (self.progress, self.completed);
        self.progress = self.progress.min(MAX_PROGRESS);
        if self.completed {
            self.progress = MAX_PROGRESS;
        }
        (self.progress, self.completed) != before
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_goal(progress: u8) -> Goal {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let mut goal = Goal::new(GoalId::from("g1"), "Run 5k", "", Category::Health, created_at);
        goal.progress = progress;
        goal
    }

    #[test]
    fn test_goal_creation_trims() {
        let goal = Goal::new(
            GoalId::from("1"),
            "  Learn Rust  ",
            "\n the book \n",
            Category::Learning,
            Utc::now(),
        );
        assert_eq!(goal.title, "Learn Rust");
        assert_eq!(goal.description, "the book");
        assert_eq!(goal.progress, 0);
        assert!(!goal.completed);
        assert!(goal.has_description());
    }

    #[test]
    fn test_adjust_progress_clamps() {
        let mut goal = make_goal(95);
        goal.adjust_progress(10);
        assert_eq!(goal.progress, 100);
        assert!(goal.completed);

        goal.adjust_progress(-10);
        assert_eq!(goal.progress, 90);
        assert!(!goal.completed);

        goal.adjust_progress(i32::MIN);
        assert_eq!(goal.progress, 0);

        goal.adjust_progress(i32::MAX);
        assert_eq!(goal.progress, 100);
        assert!(goal.completed);
    }

    #[test]
    fn test_toggle_complete_forces_full_progress() {
        let mut goal = make_goal(40);
        goal.toggle_complete();
        assert!(goal.completed);
        assert_eq!(goal.progress, 100);
    }

    #[test]
    fn test_reopen_keeps_progress() {
        let mut goal = make_goal(40);
        goal.toggle_complete();
        goal.toggle_complete();
        assert!(!goal.completed);
        assert_eq!(goal.progress, 100);
    }

    #[test]
    fn test_normalize_caps_progress() {
        let mut goal = make_goal(150);
        assert!(goal.normalize());
        assert_eq!(goal.progress, 100);
        assert!(!goal.completed);

        goal.adjust_progress(-10);
        assert_eq!(goal.progress, 90);
        assert!(!goal.completed);
    }

    #[test]
    fn test_normalize_completed_goal() {
        let mut goal = make_goal(40);
        goal.completed = true;
        assert!(goal.normalize());
        assert_eq!(goal.progress, 100);

        let mut reopened = make_goal(100);
        assert!(!reopened.normalize());
        assert!(!reopened.completed);
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| GoalId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_serialized_shape() {
        let goal = make_goal(30);
        let value = serde_json::to_value(&goal).unwrap();
        assert_eq!(value["id"], "g1");
        assert_eq!(value["category"], "health");
        assert_eq!(value["progress"], 30);
        assert_eq!(value["completed"], false);
        assert_eq!(value["createdAt"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn test_accepts_legacy_record() {
        let raw = r#"{
            "id": "1712345678901",
            "title": "Save money",
            "description": "",
            "category": "finance",
            "progress": 20,
            "completed": false,
            "createdAt": "2024-04-05T19:34:38.901Z"
        }"#;
        let goal: Goal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.id.as_str(), "1712345678901");
        assert_eq!(goal.category, Category::Finance);
        assert!(!goal.has_description());
    }
}
