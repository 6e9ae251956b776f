//! Month-scoped aggregation: per-category spend and the financial summary.

use bolso_domain::{
    Amounted, BelongsToCategory, Category, Dated, Expense, Income, Month, Transaction,
};
use uuid::Uuid;

/// A category annotated with the spend derived for one month.
///
/// Kept separate from [`Category`] so the persisted entity shape never
/// carries computed values.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithSpend {
    pub category: Category,
    pub spent: f64,
}

impl CategoryWithSpend {
    /// Share of the monthly limit consumed, as a percentage. `None` when
    /// the category has no limit.
    pub fn limit_usage_percent(&self) -> Option<f64> {
        self.category
            .has_limit()
            .then(|| self.spent / self.category.monthly_limit * 100.0)
    }

    /// Limit left to spend this month, floored at zero. `None` when the
    /// category has no limit.
    pub fn remaining_limit(&self) -> Option<f64> {
        self.category
            .has_limit()
            .then(|| (self.category.monthly_limit - self.spent).max(0.0))
    }

    pub fn is_over_limit(&self) -> bool {
        self.category.has_limit() && self.spent > self.category.monthly_limit
    }
}

/// Top-level currency totals for one month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    pub total_income: f64,
    pub total_expenses_paid: f64,
    pub total_transactions: f64,
    pub pending_expenses: f64,
    /// Money already gone: paid expenses plus transactions.
    pub total_spent: f64,
    /// What is truly free to spend: income minus realized spending minus
    /// still-pending commitments.
    pub available_balance: f64,
}

/// Aggregation output for one month.
#[derive(Debug, Clone)]
pub struct MonthReport {
    pub month: Month,
    pub categories: Vec<CategoryWithSpend>,
    pub summary: MonthlySummary,
}

/// Income entries counting toward `month`: active, and either recurring or
/// dated inside the month.
pub fn income_for_month(income: &[Income], month: Month) -> Vec<Income> {
    income
        .iter()
        .filter(|entry| entry.active && (entry.is_recurring || month.contains(entry.date)))
        .cloned()
        .collect()
}

/// Rolls the month records up into per-category spend and the summary
/// totals.
///
/// `effective_expenses` must be the output of
/// [`crate::projection::project_month`] for the same `month`, not raw
/// stored rows. Categories are reported sorted by name. Spend without a
/// category still counts toward the totals, so the per-category figures can
/// sum to less than `total_spent`.
pub fn aggregate_month(
    categories: &[Category],
    income: &[Income],
    effective_expenses: &[Expense],
    transactions: &[Transaction],
    month: Month,
) -> MonthReport {
    let paid_expenses: Vec<&Expense> = effective_expenses
        .iter()
        .filter(|expense| expense.was_paid)
        .collect();

    let mut annotated: Vec<CategoryWithSpend> = categories
        .iter()
        .map(|category| {
            let spent = categorized_total(transactions, category.id, month)
                + categorized_total(paid_expenses.iter().copied(), category.id, month);
            CategoryWithSpend {
                category: category.clone(),
                spent,
            }
        })
        .collect();
    annotated.sort_by(|a, b| a.category.name.cmp(&b.category.name));

    let total_income: f64 = income_for_month(income, month)
        .iter()
        .map(|entry| entry.amount)
        .sum();
    let total_expenses_paid: f64 = paid_expenses
        .iter()
        .filter(|expense| month.contains(expense.due_date))
        .map(|expense| expense.amount)
        .sum();
    let total_transactions: f64 = transactions
        .iter()
        .filter(|txn| month.contains(txn.date))
        .map(|txn| txn.amount)
        .sum();
    let pending_expenses: f64 = effective_expenses
        .iter()
        .filter(|expense| !expense.was_paid && month.contains(expense.due_date))
        .map(|expense| expense.amount)
        .sum();

    let summary = MonthlySummary {
        total_income,
        total_expenses_paid,
        total_transactions,
        pending_expenses,
        total_spent: total_expenses_paid + total_transactions,
        available_balance: total_income
            - total_expenses_paid
            - total_transactions
            - pending_expenses,
    };

    MonthReport {
        month,
        categories: annotated,
        summary,
    }
}

/// Sums the amounts attributed to `category_id` within `month`.
fn categorized_total<'a, T>(
    items: impl IntoIterator<Item = &'a T>,
    category_id: Uuid,
    month: Month,
) -> f64
where
    T: BelongsToCategory + Amounted + Dated + 'a,
{
    items
        .into_iter()
        .filter(|item| item.category_id() == Some(category_id))
        .filter(|item| month.contains(item.effective_date()))
        .map(Amounted::amount)
        .sum()
}
