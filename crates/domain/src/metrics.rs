// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remaining-time metrics for a single document.
//!
//! This module provides read-only derivation of day counts around a
//! document's expiry, grace, and penalty windows.

use crate::status::days_until_expiry;
use crate::types::DocumentFact;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// Derived time metrics and estimated fine for one document.
///
/// All fields are computed for the same evaluation day, so they are
/// mutually consistent with the document's resolved status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceMetrics {
    /// Signed days until expiry. Negative means overdue. `None` when the
    /// document has no expiry date.
    pub days_remaining: Option<i64>,
    /// Days left until the grace period ends. `None` unless the document is
    /// currently inside its grace period.
    pub grace_days_remaining: Option<i64>,
    /// Days elapsed since the penalty period started. `None` unless the
    /// document is past its grace period.
    pub days_in_penalty: Option<i64>,
    /// Estimated accumulated fine. Zero unless a penalty is accruing.
    pub estimated_fine: Decimal,
}

impl ComplianceMetrics {
    /// Derives the metrics for a document on the given day.
    #[must_use]
    pub fn for_document(fact: &DocumentFact, today: Date) -> Self {
        Self {
            days_remaining: days_remaining(fact.expiry_date, today),
            grace_days_remaining: grace_days_remaining(
                fact.expiry_date,
                fact.grace_period_days,
                today,
            ),
            days_in_penalty: days_in_penalty(fact.expiry_date, fact.grace_period_days, today),
            estimated_fine: fact.estimated_fine(today),
        }
    }
}

/// Signed days from `today` until the expiry date.
///
/// Always computable when an expiry date exists, whatever the status.
#[must_use]
pub fn days_remaining(expiry: Option<Date>, today: Date) -> Option<i64> {
    expiry.map(|expiry_date| days_until_expiry(expiry_date, today))
}

/// Days left until the grace period ends.
///
/// `None` when there is no expiry date, no grace period, the grace period
/// has not started (today is before expiry), or the grace period has already
/// ended. Zero on the final grace day.
#[must_use]
pub fn grace_days_remaining(expiry: Option<Date>, grace_period_days: u16, today: Date) -> Option<i64> {
    let expiry_date: Date = expiry?;
    if grace_period_days == 0 {
        return None;
    }

    let overdue: i64 = -days_until_expiry(expiry_date, today);
    let grace: i64 = i64::from(grace_period_days);
    if overdue < 0 || overdue > grace {
        return None;
    }

    Some(grace - overdue)
}

/// Days elapsed since the penalty period started.
///
/// The penalty period starts the day after `expiry + grace_period_days`.
/// `None` when there is no expiry date or today is still on or before the
/// grace boundary.
#[must_use]
pub fn days_in_penalty(expiry: Option<Date>, grace_period_days: u16, today: Date) -> Option<i64> {
    let expiry_date: Date = expiry?;

    let overdue: i64 = -days_until_expiry(expiry_date, today);
    let elapsed: i64 = overdue - i64::from(grace_period_days);
    if elapsed <= 0 {
        return None;
    }

    Some(elapsed)
}
