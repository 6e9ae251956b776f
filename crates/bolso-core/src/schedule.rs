//! Due-date classification for unpaid expenses.

use bolso_domain::Expense;
use chrono::{Duration, NaiveDate};

const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Where an unpaid expense sits relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    Upcoming,
    Future,
}

impl DueStatus {
    /// Classifies a due date against `reference`. Anything due within the
    /// next seven days counts as upcoming.
    pub fn classify(due: NaiveDate, reference: NaiveDate) -> DueStatus {
        if due < reference {
            return DueStatus::Overdue;
        }
        let upcoming_cutoff = reference + Duration::days(UPCOMING_WINDOW_DAYS);
        if due <= upcoming_cutoff {
            DueStatus::Upcoming
        } else {
            DueStatus::Future
        }
    }
}

/// Unpaid expenses needing attention, split by urgency.
#[derive(Debug, Clone, Default)]
pub struct PendingAlerts {
    pub overdue: Vec<Expense>,
    pub upcoming: Vec<Expense>,
}

/// Splits the unpaid entries of `expenses` into overdue and soon-due lists,
/// each ordered by due date. Paid expenses and anything due further out are
/// ignored.
pub fn pending_alerts(expenses: &[Expense], reference: NaiveDate) -> PendingAlerts {
    let mut alerts = PendingAlerts::default();
    for expense in expenses.iter().filter(|expense| !expense.was_paid) {
        match DueStatus::classify(expense.due_date, reference) {
            DueStatus::Overdue => alerts.overdue.push(expense.clone()),
            DueStatus::Upcoming => alerts.upcoming.push(expense.clone()),
            DueStatus::Future => {}
        }
    }
    alerts.overdue.sort_by_key(|expense| expense.due_date);
    alerts.upcoming.sort_by_key(|expense| expense.due_date);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classify_boundaries() {
        let reference = date(2024, 5, 10);
        assert_eq!(
            DueStatus::classify(date(2024, 5, 9), reference),
            DueStatus::Overdue
        );
        assert_eq!(
            DueStatus::classify(reference, reference),
            DueStatus::Upcoming
        );
        assert_eq!(
            DueStatus::classify(date(2024, 5, 17), reference),
            DueStatus::Upcoming
        );
        assert_eq!(
            DueStatus::classify(date(2024, 5, 18), reference),
            DueStatus::Future
        );
    }

    #[test]
    fn alerts_ignore_paid_and_far_future_expenses() {
        let reference = date(2024, 5, 10);
        let mut rent = Expense::new("Rent", 1500.0, date(2024, 5, 5));
        let power = Expense::new("Power", 180.0, date(2024, 5, 4));
        let internet = Expense::new("Internet", 120.0, date(2024, 5, 12));
        let insurance = Expense::new("Insurance", 90.0, date(2024, 5, 28));
        rent.mark_paid(date(2024, 5, 5));

        let alerts = pending_alerts(&[rent, power, internet, insurance], reference);
        assert_eq!(alerts.overdue.len(), 1);
        assert_eq!(alerts.overdue[0].name, "Power");
        assert_eq!(alerts.upcoming.len(), 1);
        assert_eq!(alerts.upcoming[0].name, "Internet");
    }
}
