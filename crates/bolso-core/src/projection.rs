//! Materializes the effective expense set for a target month.
//!
//! A recurring expense is persisted once, in the month it originated.
//! Every later month rebuilds its virtual installments on demand from that
//! stored record; nothing the projection produces is ever written back.

use bolso_domain::{Expense, Month};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::validation::validate_expense;
use crate::CoreError;

/// Returns every expense due in `month`: stored records whose `due_date`
/// falls inside the month verbatim, plus one synthesized instance for each
/// recurring series that originated earlier and still has installments
/// left.
///
/// Pass the complete expense history; the function does its own month
/// filtering. Stored rows that violate the invariants of
/// [`crate::validation::validate_expense`] fail the whole call.
pub fn project_month(expenses: &[Expense], month: Month) -> Result<Vec<Expense>, CoreError> {
    for expense in expenses {
        validate_expense(expense)?;
    }

    let mut effective: Vec<Expense> = expenses
        .iter()
        .filter(|expense| month.contains(expense.due_date))
        .cloned()
        .collect();
    effective.sort_by_key(|expense| expense.due_date);

    for source in expenses
        .iter()
        .filter(|expense| expense.is_recurring && expense.due_date < month.start())
    {
        let elapsed = month.months_since(Month::of(source.due_date));
        if elapsed <= 0 {
            continue;
        }
        let sequence = source.current_recurrence + elapsed as u32;
        if source.recurrence_count > 0 && sequence > source.recurrence_count {
            // Series exhausted before reaching this month.
            continue;
        }
        let Some(due_date) = month.date_with_day(source.due_date.day()) else {
            // The source day does not exist in this month (e.g. the 31st in
            // April). The installment is skipped for the month, not clamped
            // to the last day.
            warn!(
                name = %source.name,
                day = source.due_date.day(),
                month = %month,
                "skipping recurring installment whose day is missing from the target month"
            );
            continue;
        };
        let already_present = effective
            .iter()
            .any(|existing| existing.name == source.name && month.contains(existing.due_date));
        if already_present {
            continue;
        }
        effective.push(occurrence_for(source, month, sequence, due_date));
    }

    debug!(month = %month, count = effective.len(), "projected effective expenses");
    Ok(effective)
}

/// Builds the virtual installment of `source` for `month`.
fn occurrence_for(source: &Expense, month: Month, sequence: u32, due_date: NaiveDate) -> Expense {
    let mut instance = source.clone();
    instance.id = occurrence_id(source.id, month);
    instance.due_date = due_date;
    instance.was_paid = false;
    instance.paid_at = None;
    instance.current_recurrence = sequence;
    instance
}

/// Derives the id of a projected installment from the source record and the
/// target month, so re-projections are stable without colliding with the
/// stored record or with other months of the same series.
fn occurrence_id(source: Uuid, month: Month) -> Uuid {
    let tag = format!("{source}:{month}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, tag.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrence_ids_are_stable_and_distinct_per_month() {
        let source = Uuid::new_v4();
        let april = Month::new(2024, 4).unwrap();
        let may = Month::new(2024, 5).unwrap();

        assert_eq!(occurrence_id(source, april), occurrence_id(source, april));
        assert_ne!(occurrence_id(source, april), occurrence_id(source, may));
        assert_ne!(occurrence_id(source, april), source);
    }
}
