//! Helpers for savings-goal balances and progress.

use bolso_domain::SavingsGoal;

use crate::CoreError;

/// Aggregate progress across every goal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsTotals {
    pub total_goal: f64,
    pub total_saved: f64,
    pub progress_percent: f64,
}

/// Provides safe helpers for funding and reading savings goals.
pub struct SavingsService;

impl SavingsService {
    /// Adds a deposit to the goal. Balances only ever grow; amounts at or
    /// below zero are rejected.
    pub fn deposit(goal: &mut SavingsGoal, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::InvalidOperation(format!(
                "deposit into `{}` must be a positive amount, got {amount}",
                goal.name
            )));
        }
        goal.current_amount += amount;
        Ok(())
    }

    /// Progress toward the goal as a percentage. May pass 100 since the
    /// balance is never clamped to the target.
    pub fn progress_percent(goal: &SavingsGoal) -> f64 {
        if goal.goal_amount > 0.0 {
            goal.current_amount / goal.goal_amount * 100.0
        } else {
            0.0
        }
    }

    /// Amount still missing, floored at zero once the goal is reached.
    pub fn remaining(goal: &SavingsGoal) -> f64 {
        (goal.goal_amount - goal.current_amount).max(0.0)
    }

    /// Rolls every goal up into a single progress figure.
    pub fn totals(goals: &[SavingsGoal]) -> SavingsTotals {
        let total_goal: f64 = goals.iter().map(|goal| goal.goal_amount).sum();
        let total_saved: f64 = goals.iter().map(|goal| goal.current_amount).sum();
        let progress_percent = if total_goal > 0.0 {
            total_saved / total_goal * 100.0
        } else {
            0.0
        };
        SavingsTotals {
            total_goal,
            total_saved,
            progress_percent,
        }
    }
}
