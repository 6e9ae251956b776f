//! Fail-fast precondition checks for records entering the engine.
//!
//! Inconsistent stored data is surfaced as a [`CoreError::Validation`]
//! naming the offending record instead of being silently clamped.

use bolso_domain::{Expense, Income};

use crate::CoreError;

/// Rejects expenses that violate stored-record invariants.
pub fn validate_expense(expense: &Expense) -> Result<(), CoreError> {
    if expense.current_recurrence == 0 {
        return Err(CoreError::Validation(format!(
            "expense `{}` ({}): current_recurrence is 1-based and must be at least 1",
            expense.name, expense.id
        )));
    }
    if expense.recurrence_count > 0 && expense.current_recurrence > expense.recurrence_count {
        return Err(CoreError::Validation(format!(
            "expense `{}` ({}): current_recurrence {} exceeds recurrence_count {}",
            expense.name, expense.id, expense.current_recurrence, expense.recurrence_count
        )));
    }
    if expense.was_paid != expense.paid_at.is_some() {
        return Err(CoreError::Validation(format!(
            "expense `{}` ({}): paid_at must be set exactly when was_paid is true",
            expense.name, expense.id
        )));
    }
    Ok(())
}

/// Rejects income rows with inconsistent recurrence metadata.
pub fn validate_income(income: &Income) -> Result<(), CoreError> {
    match income.recurring_day {
        Some(day) if !(1..=31).contains(&day) => Err(CoreError::Validation(format!(
            "income `{}` ({}): recurring_day {} is outside 1-31",
            income.description, income.id, day
        ))),
        Some(_) if !income.is_recurring => Err(CoreError::Validation(format!(
            "income `{}` ({}): recurring_day set on a non-recurring entry",
            income.description, income.id
        ))),
        None if income.is_recurring => Err(CoreError::Validation(format!(
            "income `{}` ({}): recurring income must declare recurring_day",
            income.description, income.id
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_well_formed_records() {
        let expense = Expense::new("Internet", 120.0, date(2024, 1, 20)).recurring(12);
        assert!(validate_expense(&expense).is_ok());

        let income = Income::new("Salary", 5000.0, date(2024, 1, 5)).recurring(5);
        assert!(validate_income(&income).is_ok());
    }

    #[test]
    fn rejects_sequence_past_installment_count() {
        let mut expense = Expense::new("Financing", 350.0, date(2024, 1, 5)).recurring(3);
        expense.current_recurrence = 4;
        let err = validate_expense(&expense).unwrap_err();
        assert!(err.to_string().contains("Financing"), "got: {err}");
    }

    #[test]
    fn rejects_zero_sequence_number() {
        let mut expense = Expense::new("Rent", 1500.0, date(2024, 1, 10));
        expense.current_recurrence = 0;
        assert!(validate_expense(&expense).is_err());
    }

    #[test]
    fn rejects_paid_flag_without_paid_date() {
        let mut expense = Expense::new("Power", 180.0, date(2024, 1, 15));
        expense.was_paid = true;
        assert!(validate_expense(&expense).is_err());

        expense.was_paid = false;
        expense.paid_at = Some(date(2024, 1, 15));
        assert!(validate_expense(&expense).is_err());
    }

    #[test]
    fn rejects_inconsistent_income_recurrence() {
        let mut income = Income::new("Salary", 5000.0, date(2024, 1, 5)).recurring(32);
        assert!(validate_income(&income).is_err());

        income.recurring_day = None;
        assert!(validate_income(&income).is_err());

        let mut one_off = Income::new("Freelance", 1200.0, date(2024, 1, 15));
        one_off.recurring_day = Some(15);
        assert!(validate_income(&one_off).is_err());
    }
}
