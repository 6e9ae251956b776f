//! Domain type for savings goals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A savings target funded by explicit deposits.
///
/// `current_amount` only ever grows and is allowed to pass `goal_amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub goal_amount: f64,
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, goal_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            goal_amount,
            current_amount: 0.0,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for SavingsGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for SavingsGoal {
    fn display_label(&self) -> String {
        format!(
            "{} ({:.2}/{:.2})",
            self.name, self.current_amount, self.goal_amount
        )
    }
}
