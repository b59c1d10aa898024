// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Document type key is empty or invalid.
    InvalidDocumentType(String),
    /// Fine type string is not a recognized schedule.
    InvalidFineType(String),
    /// Compliance status string is not a recognized status.
    InvalidComplianceStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A dependency rule names the same document type on both sides.
    SelfReferentialDependency {
        /// The document type used as both blocking and blocked.
        document_type: String,
    },
    /// Timezone name could not be resolved.
    InvalidTimezone(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A monetary amount was negative.
    NegativeAmount {
        /// The field holding the amount.
        field: String,
        /// The rejected value.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDocumentType(msg) => write!(f, "Invalid document type: {msg}"),
            Self::InvalidFineType(value) => {
                write!(f, "Invalid fine type '{value}'. Must be daily, monthly, or one_time")
            }
            Self::InvalidComplianceStatus { status } => {
                write!(f, "Invalid compliance status '{status}'")
            }
            Self::SelfReferentialDependency { document_type } => {
                write!(
                    f,
                    "Dependency rule for '{document_type}' cannot block its own document type"
                )
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: {name}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "Amount for {field} must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
