// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day resolution for compliance evaluation.
//!
//! All derivations compare calendar days, never times of day. Callers
//! supply one instant per evaluation; this module resolves it to the
//! calendar day in the company's declared timezone so that every value
//! derived for that evaluation is mutually consistent. Nothing in this
//! crate reads the system clock.

use crate::error::DomainError;
use chrono::Datelike;
use chrono_tz::Tz;
use time::{Date, OffsetDateTime};

/// Default timezone for compliance evaluation (Gulf Standard Time).
pub const DEFAULT_TIMEZONE: &str = "Asia/Dubai";

/// Resolves a UTC instant to the calendar day in a named timezone.
///
/// # Arguments
///
/// * `instant` - The evaluation instant (UTC)
/// * `timezone` - An IANA timezone name, e.g. `Asia/Dubai`
///
/// # Errors
///
/// Returns an error if:
/// - The timezone name is not a valid IANA timezone
/// - The instant is outside the representable date range
pub fn local_calendar_day(instant: OffsetDateTime, timezone: &str) -> Result<Date, DomainError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))?;

    let utc: chrono::DateTime<chrono::Utc> =
        chrono::DateTime::from_timestamp(instant.unix_timestamp(), instant.nanosecond())
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: "converting evaluation instant to a UTC datetime".to_string(),
            })?;

    let local: chrono::NaiveDate = utc.with_timezone(&tz).date_naive();

    // Convert chrono::NaiveDate to time::Date.
    let month_number: u8 =
        u8::try_from(local.month()).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("converting local month of {local}"),
        })?;
    let month: time::Month =
        time::Month::try_from(month_number).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("converting local month of {local}"),
        })?;
    let day: u8 = u8::try_from(local.day()).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("converting local day of {local}"),
    })?;

    Date::from_calendar_date(local.year(), month, day).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("building local calendar day from {local}"),
        }
    })
}

/// Parses an ISO 8601 date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// ISO 8601 date.
pub fn parse_iso_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(
        date_string,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Interprets a stored date string, treating anything unparsable as unset.
///
/// Stored records can carry blank or malformed dates; those documents are
/// evaluated as not yet submitted rather than rejected.
#[must_use]
pub fn parse_stored_date(date_string: &str) -> Option<Date> {
    parse_iso_date(date_string.trim()).ok()
}
