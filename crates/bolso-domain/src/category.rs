//! Domain type for spending categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Groups discretionary spending for budgeting and reporting.
///
/// The amount spent against a category in a given month is derived by the
/// engine, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Monthly spending cap. Zero means the category has no limit.
    pub monthly_limit: f64,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, monthly_limit: f64, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            monthly_limit,
            color: color.into(),
        }
    }

    /// Returns `true` when the category enforces a spending limit.
    pub fn has_limit(&self) -> bool {
        self.monthly_limit > 0.0
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        if self.has_limit() {
            format!("{} (limit {:.2})", self.name, self.monthly_limit)
        } else {
            self.name.clone()
        }
    }
}
