//! Goal Statistics
//!
//! Summary numbers shown above the goal list. Computed, never stored.

use super::goal::Goal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    /// Mean progress rounded to the nearest integer, 0 for no goals
    pub average_progress: u8,
}

impl GoalStats {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let total = goals.len();
        if total == 0 {
            return Self::default();
        }

        let completed = goals.iter().filter(|goal| goal.completed).count();
        let sum: u64 = goals.iter().map(|goal| u64::from(goal.progress)).sum();
        let n = total as u64;
        // Round half up: (2*sum + n) / (2*n)
        let average = (2 * sum + n) / (2 * n);

        Self {
            total,
            completed,
            average_progress: average.min(100) as u8,
        }
    }
}
