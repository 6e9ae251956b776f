//! Domain type for completed discretionary spending.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A one-off purchase attributed to a category.
///
/// Unlike an [`crate::Expense`], a transaction is always settled; it records
/// money already spent rather than a commitment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        category_id: Uuid,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            description: description.into(),
            date,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToCategory for Transaction {
    fn category_id(&self) -> Option<Uuid> {
        Some(self.category_id)
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for Transaction {
    fn effective_date(&self) -> NaiveDate {
        self.date
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.description, self.amount)
    }
}
