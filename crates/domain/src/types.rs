// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Represents a document type key.
///
/// Keys are normalized to lowercase to ensure case-insensitive matching
/// between stored documents, catalog configuration, and dependency rules.
/// The ordering derived from the key is used for deterministic tie-breaking
/// in rollups.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentType {
    /// The normalized type key (e.g., "passport").
    key: String,
}

impl DocumentType {
    /// The canonical key for passports.
    pub const PASSPORT: &'static str = "passport";
    /// The canonical key for residence visas.
    pub const VISA: &'static str = "visa";
    /// The canonical key for Emirates ID cards.
    pub const EMIRATES_ID: &'static str = "emirates_id";
    /// The canonical key for work permits.
    pub const WORK_PERMIT: &'static str = "work_permit";
    /// The canonical key for labour cards.
    pub const LABOUR_CARD: &'static str = "labour_card";
    /// The canonical key for medical insurance policies.
    pub const MEDICAL_INSURANCE: &'static str = "medical_insurance";
    /// The canonical key for employment contracts.
    pub const EMPLOYMENT_CONTRACT: &'static str = "employment_contract";

    /// Creates a new `DocumentType`.
    ///
    /// Keys are trimmed and normalized to lowercase.
    ///
    /// # Arguments
    ///
    /// * `key` - The type key (will be normalized)
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self {
            key: key.trim().to_lowercase(),
        }
    }

    /// Returns the normalized type key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Validates that the key is non-empty.
    ///
    /// Normalization happens at construction; emptiness is checked here so
    /// configuration loading can reject blank entries with a typed error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDocumentType` if the key is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.key.is_empty() {
            return Err(DomainError::InvalidDocumentType(String::from(
                "Document type key cannot be empty",
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// Fine schedule kinds for an expired document past its grace period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineType {
    /// Fine accrues per day in penalty.
    Daily,
    /// Fine bills per started 30-day block in penalty.
    Monthly,
    /// Flat fee charged once, however long the penalty runs.
    OneTime,
}

impl FineType {
    /// Returns the string representation of the fine type.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::OneTime => "one_time",
        }
    }

    /// Parses a fine type from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            "one_time" => Ok(Self::OneTime),
            _ => Err(DomainError::InvalidFineType(s.to_string())),
        }
    }

    /// Interprets a stored fine-type value, falling back to `Daily`.
    ///
    /// Stored records can carry stale or misspelled schedule values; an
    /// unrecognized value must still accrue rather than silently zero out,
    /// so it is billed on the daily formula.
    #[must_use]
    pub fn from_stored(s: &str) -> Self {
        Self::parse_str(s.trim()).unwrap_or(Self::Daily)
    }
}

impl FromStr for FineType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for FineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compliance status of a single document on a given evaluation day.
///
/// Never persisted; recomputed on every read from the document's stored
/// facts and the evaluation day. Exactly one status applies to a given
/// (document, day) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Missing expiry date or identifying number; no urgency detected.
    Incomplete,
    /// Complete and more than 30 days from expiry.
    Valid,
    /// Expires within the next 30 days.
    ExpiringSoon,
    /// Expired, but still inside the grace period.
    InGrace,
    /// Expired and past the grace period; fines accrue.
    PenaltyActive,
}

impl ComplianceStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Valid => "valid",
            Self::ExpiringSoon => "expiring_soon",
            Self::InGrace => "in_grace",
            Self::PenaltyActive => "penalty_active",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "incomplete" => Ok(Self::Incomplete),
            "valid" => Ok(Self::Valid),
            "expiring_soon" => Ok(Self::ExpiringSoon),
            "in_grace" => Ok(Self::InGrace),
            "penalty_active" => Ok(Self::PenaltyActive),
            _ => Err(DomainError::InvalidComplianceStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns the severity rank of this status.
    ///
    /// Higher is worse: `penalty_active` > `in_grace` > `expiring_soon` >
    /// `incomplete` > `valid`. Rollups take the maximum rank present.
    #[must_use]
    pub const fn severity(&self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Incomplete => 1,
            Self::ExpiringSoon => 2,
            Self::InGrace => 3,
            Self::PenaltyActive => 4,
        }
    }

    /// Returns true if fines accrue in this status.
    #[must_use]
    pub const fn is_penalty(&self) -> bool {
        matches!(self, Self::PenaltyActive)
    }
}

impl FromStr for ComplianceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a tracked document's stored facts.
///
/// Owned and persisted elsewhere; the derivation functions only read
/// snapshots passed by value and never mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFact {
    /// The document type.
    pub document_type: DocumentType,
    /// The identifying number, if filled in. An empty string is treated
    /// the same as a missing number.
    pub document_number: Option<String>,
    /// Issue date, if known.
    pub issue_date: Option<Date>,
    /// Expiry date. A document without one has not been submitted yet.
    pub expiry_date: Option<Date>,
    /// Days after expiry during which no fine accrues.
    pub grace_period_days: u16,
    /// Fine rate. Interpretation depends on `fine_type`.
    pub fine_per_day: Decimal,
    /// The fine schedule kind.
    pub fine_type: FineType,
    /// Upper bound on the accrued fine. Zero means uncapped.
    pub fine_cap: Decimal,
    /// Whether the employee is required to hold this document.
    pub is_mandatory: bool,
}

impl DocumentFact {
    /// Creates a new `DocumentFact`.
    ///
    /// # Arguments
    ///
    /// * `document_type` - The document type
    /// * `document_number` - The identifying number, if filled in
    /// * `issue_date` - Issue date, if known
    /// * `expiry_date` - Expiry date, if known
    /// * `grace_period_days` - Days after expiry without fines
    /// * `fine_per_day` - Fine rate
    /// * `fine_type` - The fine schedule kind
    /// * `fine_cap` - Fine upper bound (zero = uncapped)
    /// * `is_mandatory` - Whether the document is required
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        document_type: DocumentType,
        document_number: Option<String>,
        issue_date: Option<Date>,
        expiry_date: Option<Date>,
        grace_period_days: u16,
        fine_per_day: Decimal,
        fine_type: FineType,
        fine_cap: Decimal,
        is_mandatory: bool,
    ) -> Self {
        Self {
            document_type,
            document_number,
            issue_date,
            expiry_date,
            grace_period_days,
            fine_per_day,
            fine_type,
            fine_cap,
            is_mandatory,
        }
    }

    /// Creates the empty mandatory slot recorded when an employee is created.
    #[must_use]
    pub const fn mandatory_placeholder(document_type: DocumentType) -> Self {
        Self {
            document_type,
            document_number: None,
            issue_date: None,
            expiry_date: None,
            grace_period_days: 0,
            fine_per_day: Decimal::ZERO,
            fine_type: FineType::Daily,
            fine_cap: Decimal::ZERO,
            is_mandatory: true,
        }
    }

    /// Returns true if the identifying number is filled in and non-blank.
    #[must_use]
    pub fn has_number(&self) -> bool {
        self.document_number
            .as_deref()
            .is_some_and(|number| !number.trim().is_empty())
    }

    /// Returns true if the document counts as complete.
    ///
    /// A document is complete when it has both an expiry date and a
    /// non-blank identifying number. This is the single completeness
    /// predicate; rollup counting and status resolution both go through it.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.expiry_date.is_some() && self.has_number()
    }

    /// Resolves this document's compliance status on the given day.
    #[must_use]
    pub fn status(&self, today: Date) -> ComplianceStatus {
        crate::status::resolve_status(
            self.expiry_date,
            self.grace_period_days,
            self.document_number.as_deref(),
            today,
        )
    }

    /// Derives this document's time metrics and estimated fine on the given day.
    #[must_use]
    pub fn metrics(&self, today: Date) -> crate::metrics::ComplianceMetrics {
        crate::metrics::ComplianceMetrics::for_document(self, today)
    }

    /// Estimates the fine accrued by this document as of the given day.
    ///
    /// Zero whenever the document has no expiry date or the penalty period
    /// has not started.
    #[must_use]
    pub fn estimated_fine(&self, today: Date) -> Decimal {
        self.expiry_date.map_or(Decimal::ZERO, |expiry| {
            crate::fine::estimate_fine(
                expiry,
                self.grace_period_days,
                self.fine_per_day,
                self.fine_type,
                self.fine_cap,
                today,
            )
        })
    }
}
