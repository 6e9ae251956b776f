//! bolso-core
//!
//! Month-scoped computation engine for the bolso personal-finance records:
//! recurrence projection, aggregation, due-status classification, and
//! savings-goal helpers. Depends on bolso-domain. No I/O, no storage, no UI.
//!
//! The engine is a set of pure functions: the caller fetches the raw
//! records, picks a target [`bolso_domain::Month`], runs
//! [`projection::project_month`] over the full expense history, and feeds
//! the result into [`summary::aggregate_month`].

pub mod error;
pub mod projection;
pub mod savings_service;
pub mod schedule;
pub mod summary;
pub mod validation;

pub use error::CoreError;
pub use projection::*;
pub use savings_service::*;
pub use schedule::*;
pub use summary::*;
pub use validation::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber with sensible defaults.
///
/// Host applications that already configure tracing can skip this.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bolso_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
