//! Domain type for income entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single income entry, possibly repeating every month.
///
/// Recurring income counts toward every month's totals without the engine
/// materializing per-month instances; `recurring_day` only records which day
/// of the month the money arrives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_day: Option<u32>,
    pub active: bool,
}

impl Income {
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date,
            is_recurring: false,
            recurring_day: None,
            active: true,
        }
    }

    /// Marks the entry as arriving on `day` of every month.
    pub fn recurring(mut self, day: u32) -> Self {
        self.is_recurring = true;
        self.recurring_day = Some(day);
        self
    }

    /// Excludes the entry from month totals without deleting it.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for Income {
    fn effective_date(&self) -> NaiveDate {
        self.date
    }
}

impl Displayable for Income {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.description, self.amount)
    }
}
