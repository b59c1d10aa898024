// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod dependency;
mod display;
mod error;
mod fine;
mod metrics;
mod rollup;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{DEFAULT_TIMEZONE, local_calendar_day, parse_iso_date, parse_stored_date};
pub use dependency::{
    AlertSeverity, DependencyAlert, DependencyRule, DocumentSnapshot, evaluate_dependencies,
};
pub use display::{DisplayNames, builtin_display_name};
pub use error::DomainError;
pub use fine::{DAYS_PER_BILLING_MONTH, estimate_fine};
pub use metrics::{ComplianceMetrics, days_in_penalty, days_remaining, grace_days_remaining};
pub use rollup::{EmployeeRollup, roll_up_documents};
pub use status::{EXPIRY_WARNING_WINDOW_DAYS, days_until_expiry, resolve_status};
pub use types::{ComplianceStatus, DocumentFact, DocumentType, FineType};
