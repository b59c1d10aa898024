// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Compliance status resolution for a single document.
//!
//! Status is **computed**, not stored. It's a pure function of the
//! document's stored facts and the evaluation day.
//!
//! ## Invariants
//!
//! - Severity checks run before the incompleteness check: an expired,
//!   in-grace, or near-expiry document is never reported as merely
//!   incomplete.
//! - The day on which the grace period ends still counts as in grace;
//!   penalty starts the day after.
//! - Time of day is ignored; all comparisons are calendar-day comparisons.

use crate::types::ComplianceStatus;
use time::Date;

/// Days before expiry within which a document counts as expiring soon.
pub const EXPIRY_WARNING_WINDOW_DAYS: i64 = 30;

/// Returns the signed number of whole days from `today` until `expiry`.
///
/// Negative values mean the document is overdue.
#[must_use]
pub fn days_until_expiry(expiry: Date, today: Date) -> i64 {
    (expiry - today).whole_days()
}

/// Resolves a document's compliance status on the given day.
///
/// The checks run in strict severity order:
///
/// 1. No expiry date at all: `Incomplete` (not yet submitted, whatever the
///    number says).
/// 2. On or past expiry with no grace period, or past the grace period:
///    `PenaltyActive`.
/// 3. On or past expiry but within the grace period: `InGrace`.
/// 4. Within the warning window before expiry: `ExpiringSoon`.
/// 5. No identifying number: `Incomplete`.
/// 6. Otherwise: `Valid`.
///
/// # Arguments
///
/// * `expiry` - The document's expiry date, if any
/// * `grace_period_days` - Days after expiry during which no fine accrues
/// * `document_number` - The identifying number; `None` or blank means missing
/// * `today` - The evaluation day
#[must_use]
pub fn resolve_status(
    expiry: Option<Date>,
    grace_period_days: u16,
    document_number: Option<&str>,
    today: Date,
) -> ComplianceStatus {
    let Some(expiry_date) = expiry else {
        return ComplianceStatus::Incomplete;
    };

    let remaining: i64 = days_until_expiry(expiry_date, today);
    let grace: i64 = i64::from(grace_period_days);

    if remaining <= 0 {
        let overdue: i64 = -remaining;
        // The boundary day (overdue == grace) belongs to the grace period.
        if grace == 0 || overdue > grace {
            return ComplianceStatus::PenaltyActive;
        }
        return ComplianceStatus::InGrace;
    }

    if remaining <= EXPIRY_WARNING_WINDOW_DAYS {
        return ComplianceStatus::ExpiringSoon;
    }

    let has_number: bool = document_number.is_some_and(|number| !number.trim().is_empty());
    if has_number {
        ComplianceStatus::Valid
    } else {
        ComplianceStatus::Incomplete
    }
}
