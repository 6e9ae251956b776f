//! Domain type for expenses and their recurrence bookkeeping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A committed expense, pending until paid.
///
/// A recurring expense is stored once; the stored record carries the
/// 1-based `current_recurrence` sequence number of the installment it
/// represents, and later months rebuild their virtual instances from it.
/// `recurrence_count` of zero means the series never ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub is_recurring: bool,
    pub recurrence_count: u32,
    pub current_recurrence: u32,
    pub was_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: f64, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            due_date,
            is_recurring: false,
            recurrence_count: 0,
            current_recurrence: 1,
            was_paid: false,
            paid_at: None,
            category_id: None,
        }
    }

    /// Turns the expense into the first installment of a recurring series.
    /// `installments` of zero makes the series unbounded.
    pub fn recurring(mut self, installments: u32) -> Self {
        self.is_recurring = true;
        self.recurrence_count = installments;
        self.current_recurrence = 1;
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Settles the expense on `date`.
    pub fn mark_paid(&mut self, date: NaiveDate) {
        self.was_paid = true;
        self.paid_at = Some(date);
    }

    /// Reverts the expense to pending.
    pub fn mark_unpaid(&mut self) {
        self.was_paid = false;
        self.paid_at = None;
    }

    /// Returns `true` for recurring series that never stop generating
    /// installments.
    pub fn is_unbounded(&self) -> bool {
        self.is_recurring && self.recurrence_count == 0
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BelongsToCategory for Expense {
    fn category_id(&self) -> Option<Uuid> {
        self.category_id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for Expense {
    fn effective_date(&self) -> NaiveDate {
        self.due_date
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        if self.is_recurring && self.recurrence_count > 0 {
            format!(
                "{} ({}/{})",
                self.name, self.current_recurrence, self.recurrence_count
            )
        } else {
            self.name.clone()
        }
    }
}
