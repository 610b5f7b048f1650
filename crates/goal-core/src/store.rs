//! Goal Store
//!
//! Owns the ordered goal list (newest first). Mutations report whether they
//! matched anything; persisting and re-rendering are left to the caller.

use chrono::Utc;

use crate::domain::{Category, Goal, GoalId, GoalStats};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already ordered list, e.g. one read back from storage
    pub fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| &goal.id == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Prepend a new goal. Returns `None` (and changes nothing) when the
    /// trimmed title is empty.
    pub fn create(&mut self, title: &str, description: &str, category: Category) -> Option<GoalId> {
        if title.trim().is_empty() {
            tracing::debug!("ignoring goal with empty title");
            return None;
        }

        let goal = Goal::new(GoalId::generate(), title, description, category, Utc::now());
        let id = goal.id.clone();
        tracing::debug!(goal_id = %id, category = %category, "created goal");
        self.goals.insert(0, goal);
        Some(id)
    }

    /// Shift progress of the goal with `id` by `delta`; false if not found
    pub fn adjust_progress(&mut self, id: &GoalId, delta: i32) -> bool {
        match self.find_mut(id) {
            Some(goal) => {
                goal.adjust_progress(delta);
                tracing::debug!(goal_id = %id, delta, progress = goal.progress, "adjusted progress");
                true
            }
            None => false,
        }
    }

    /// Complete or reopen the goal with `id`; false if not found
    pub fn toggle_complete(&mut self, id: &GoalId) -> bool {
        match self.find_mut(id) {
            Some(goal) => {
                goal.toggle_complete();
                tracing::debug!(goal_id = %id, completed = goal.completed, "toggled goal");
                true
            }
            None => false,
        }
    }

    /// Remove the goal with `id`; false if not found
    pub fn delete(&mut self, id: &GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| &goal.id != id);
        let removed = self.goals.len() != before;
        if removed {
            tracing::debug!(goal_id = %id, "deleted goal");
        }
        removed
    }

    pub fn stats(&self) -> GoalStats {
        GoalStats::from_goals(&self.goals)
    }

    fn find_mut(&mut self, id: &GoalId) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| &goal.id == id)
    }
}
