//! bolso-domain
//!
//! Pure domain records (Category, Income, Expense, Transaction, SavingsGoal)
//! plus the calendar `Month` type and shared traits. No I/O, no services,
//! no storage. Only data types.

pub mod category;
pub mod common;
pub mod expense;
pub mod income;
pub mod savings;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use income::*;
pub use savings::*;
pub use transaction::*;
