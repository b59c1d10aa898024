// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fine estimation for a document past its grace period.
//!
//! This module provides pure, deterministic fine accrual based on the
//! document's fine schedule and explicit boundary rules:
//!
//! - A non-positive rate never accrues.
//! - The penalty period starts the day after `expiry + grace_period_days`;
//!   the boundary day itself is free.
//! - Monthly schedules bill any started 30-day block as a full month.
//! - A positive cap clamps the result; a zero cap means uncapped.
//! - Results are rounded to 2 decimal places.

use crate::status::days_until_expiry;
use crate::types::FineType;
use rust_decimal::Decimal;
use time::Date;

/// Days in one billing block of a monthly fine schedule.
pub const DAYS_PER_BILLING_MONTH: i64 = 30;

/// Decimal places in a fine amount.
const FINE_SCALE: u32 = 2;

/// Estimates the fine accrued by an expired document as of the given day.
///
/// # Arguments
///
/// * `expiry` - The document's expiry date
/// * `grace_period_days` - Days after expiry during which no fine accrues
/// * `fine_per_day` - The fine rate; non-positive rates never accrue
/// * `fine_type` - The fine schedule kind
/// * `fine_cap` - Upper bound on the fine; zero means uncapped
/// * `today` - The evaluation day
///
/// # Returns
///
/// A non-negative amount rounded to 2 decimal places.
#[must_use]
pub fn estimate_fine(
    expiry: Date,
    grace_period_days: u16,
    fine_per_day: Decimal,
    fine_type: FineType,
    fine_cap: Decimal,
    today: Date,
) -> Decimal {
    if fine_per_day <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let overdue: i64 = -days_until_expiry(expiry, today);
    let days_in_penalty: i64 = overdue - i64::from(grace_period_days);
    if days_in_penalty <= 0 {
        return Decimal::ZERO;
    }

    let fine: Decimal = match fine_type {
        FineType::Daily => fine_per_day * Decimal::from(days_in_penalty),
        FineType::Monthly => {
            let billed_months: i64 =
                (days_in_penalty as u64).div_ceil(DAYS_PER_BILLING_MONTH as u64) as i64;
            fine_per_day * Decimal::from(billed_months)
        }
        FineType::OneTime => fine_per_day,
    };

    let clamped: Decimal = if fine_cap > Decimal::ZERO && fine > fine_cap {
        fine_cap
    } else {
        fine
    };

    clamped.round_dp(FINE_SCALE)
}
