// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee-level compliance rollup.
//!
//! This module aggregates the per-document status of an employee's
//! mandatory documents into one worst-case posture plus counts.
//!
//! The rollup is **computed**, not stored. Bulk callers evaluate it per
//! employee through this one function so that single-document and
//! many-document reads share the same severity ladder.

use crate::metrics::days_remaining;
use crate::types::{ComplianceStatus, DocumentFact, DocumentType};
use serde::{Deserialize, Serialize};
use time::Date;

/// Aggregated compliance posture for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRollup {
    /// The worst status among the employee's mandatory documents.
    /// `None` when the employee has no mandatory documents at all.
    pub compliance_status: Option<ComplianceStatus>,
    /// Mandatory documents with both an expiry date and a number.
    pub docs_complete: usize,
    /// Total mandatory documents.
    pub docs_total: usize,
    /// Mandatory documents past their grace period.
    pub expired_count: usize,
    /// Mandatory documents expiring within the warning window.
    pub expiring_count: usize,
    /// The smallest signed days-remaining among documents with an expiry
    /// date. Negative when the most urgent document is already overdue.
    pub nearest_expiry_days: Option<i64>,
    /// The document type holding the nearest expiry. Ties resolve to the
    /// lexicographically smallest type key.
    pub urgent_doc_type: Option<DocumentType>,
}

impl EmployeeRollup {
    /// Returns the rollup for an employee with no mandatory documents.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            compliance_status: None,
            docs_complete: 0,
            docs_total: 0,
            expired_count: 0,
            expiring_count: 0,
            nearest_expiry_days: None,
            urgent_doc_type: None,
        }
    }
}

/// Rolls an employee's mandatory documents up into one posture.
///
/// Non-mandatory documents in the input are ignored. Each document's status
/// is resolved with the same per-document rules used everywhere else; the
/// employee-level status is the highest severity present. A document with
/// no expiry date contributes to the totals and completeness accounting but
/// never to the nearest-expiry fields.
///
/// # Arguments
///
/// * `documents` - The employee's document snapshots
/// * `today` - The evaluation day
#[must_use]
pub fn roll_up_documents(documents: &[DocumentFact], today: Date) -> EmployeeRollup {
    let mut rollup: EmployeeRollup = EmployeeRollup::empty();

    for fact in documents.iter().filter(|fact| fact.is_mandatory) {
        rollup.docs_total += 1;
        if fact.is_complete() {
            rollup.docs_complete += 1;
        }

        let status: ComplianceStatus = fact.status(today);
        match status {
            ComplianceStatus::PenaltyActive => rollup.expired_count += 1,
            ComplianceStatus::ExpiringSoon => rollup.expiring_count += 1,
            _ => {}
        }

        rollup.compliance_status = Some(match rollup.compliance_status {
            Some(worst) if worst.severity() >= status.severity() => worst,
            _ => status,
        });

        if let Some(days) = days_remaining(fact.expiry_date, today) {
            let more_urgent: bool = match (rollup.nearest_expiry_days, &rollup.urgent_doc_type) {
                (None, _) => true,
                (Some(nearest), _) if days < nearest => true,
                (Some(nearest), Some(current)) if days == nearest => {
                    fact.document_type < *current
                }
                _ => false,
            };
            if more_urgent {
                rollup.nearest_expiry_days = Some(days);
                rollup.urgent_doc_type = Some(fact.document_type.clone());
            }
        }
    }

    rollup
}
