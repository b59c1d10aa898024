// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation entry points.
//!
//! Single-document, employee, and company evaluation all run through the
//! same per-document derivation functions, so there is exactly one severity
//! ladder in the product however many rows are being read.

use crate::catalog::{CompanyPolicy, ComplianceCatalog};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tawtheeq_domain::{
    ComplianceMetrics, ComplianceStatus, DependencyAlert, DocumentFact, DocumentSnapshot,
    DocumentType, EmployeeRollup, evaluate_dependencies, roll_up_documents,
};
use time::Date;

/// Derived compliance view of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCompliance {
    /// The document type.
    pub document_type: DocumentType,
    /// Display label for the document type.
    pub display_name: String,
    /// Resolved compliance status.
    pub status: ComplianceStatus,
    /// Time metrics and estimated fine.
    pub metrics: ComplianceMetrics,
}

/// Derived compliance view of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCompliance {
    /// Worst-case rollup over the employee's mandatory documents.
    pub rollup: EmployeeRollup,
    /// Per-document views, in input order.
    pub documents: Vec<DocumentCompliance>,
    /// Dependency alerts, in rule order.
    pub alerts: Vec<DependencyAlert>,
}

/// One employee's entry in a company evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Caller-supplied employee identifier.
    pub employee: String,
    /// The employee's derived compliance view.
    pub compliance: EmployeeCompliance,
}

/// Derived compliance posture of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCompliance {
    /// The worst employee-level status present, if any employee has
    /// mandatory documents.
    pub compliance_status: Option<ComplianceStatus>,
    /// Total employees evaluated.
    pub employees_total: usize,
    /// Employees whose worst status is `penalty_active`.
    pub employees_in_penalty: usize,
    /// Employees whose worst status is `in_grace`.
    pub employees_in_grace: usize,
    /// Employees whose worst status is `expiring_soon`.
    pub employees_expiring: usize,
    /// Employees whose worst status is `incomplete`.
    pub employees_incomplete: usize,
    /// Employees whose worst status is `valid`.
    pub employees_valid: usize,
    /// Sum of all estimated fines across all documents. Amounts are summed
    /// without currency awareness.
    pub total_estimated_fine: Decimal,
    /// Per-employee reports, in input order.
    pub employees: Vec<EmployeeReport>,
}

/// Evaluates one document against the catalog.
///
/// The document's schedule values are resolved through the catalog chain
/// (company override, global default, stored value) before derivation.
///
/// # Arguments
///
/// * `catalog` - The validated catalog
/// * `company` - Company-specific overrides, if any
/// * `fact` - The document snapshot
/// * `today` - The evaluation day
#[must_use]
pub fn evaluate_document(
    catalog: &ComplianceCatalog,
    company: Option<&CompanyPolicy>,
    fact: &DocumentFact,
    today: Date,
) -> DocumentCompliance {
    let effective: DocumentFact = catalog.effective_schedule(company, fact).apply_to(fact);

    DocumentCompliance {
        document_type: effective.document_type.clone(),
        display_name: catalog.display_name(&effective.document_type),
        status: effective.status(today),
        metrics: ComplianceMetrics::for_document(&effective, today),
    }
}

/// Evaluates one employee's documents against the catalog.
///
/// Produces per-document views, the worst-case rollup over mandatory
/// documents, and dependency alerts, all derived from the same resolved
/// snapshots and the same evaluation day.
///
/// # Arguments
///
/// * `catalog` - The validated catalog
/// * `company` - Company-specific overrides, if any
/// * `documents` - The employee's document snapshots
/// * `today` - The evaluation day
#[must_use]
pub fn evaluate_employee(
    catalog: &ComplianceCatalog,
    company: Option<&CompanyPolicy>,
    documents: &[DocumentFact],
    today: Date,
) -> EmployeeCompliance {
    let effective: Vec<DocumentFact> = documents
        .iter()
        .map(|fact| catalog.effective_schedule(company, fact).apply_to(fact))
        .collect();

    let document_views: Vec<DocumentCompliance> = effective
        .iter()
        .map(|fact| DocumentCompliance {
            document_type: fact.document_type.clone(),
            display_name: catalog.display_name(&fact.document_type),
            status: fact.status(today),
            metrics: ComplianceMetrics::for_document(fact, today),
        })
        .collect();

    let rollup: EmployeeRollup = roll_up_documents(&effective, today);

    let snapshots: BTreeMap<DocumentType, DocumentSnapshot> = effective
        .iter()
        .map(|fact| {
            (
                fact.document_type.clone(),
                DocumentSnapshot::new(fact.expiry_date, fact.has_number()),
            )
        })
        .collect();
    let alerts: Vec<DependencyAlert> = evaluate_dependencies(
        catalog.dependency_rules(),
        &snapshots,
        catalog.display_names(),
        today,
    );

    tracing::debug!(
        documents = document_views.len(),
        alerts = alerts.len(),
        status = rollup.compliance_status.map(|status| status.as_str()),
        "evaluated employee compliance"
    );

    EmployeeCompliance {
        rollup,
        documents: document_views,
        alerts,
    }
}

/// Evaluates a whole company roster against the catalog.
///
/// Each employee is evaluated with [`evaluate_employee`]; company counts
/// and totals are folded from those results. An employee with no mandatory
/// documents counts toward the total but toward none of the status buckets.
///
/// # Arguments
///
/// * `catalog` - The validated catalog
/// * `company` - Company-specific overrides, if any
/// * `roster` - (employee identifier, document snapshots) pairs
/// * `today` - The evaluation day
#[must_use]
pub fn evaluate_company(
    catalog: &ComplianceCatalog,
    company: Option<&CompanyPolicy>,
    roster: &[(String, Vec<DocumentFact>)],
    today: Date,
) -> CompanyCompliance {
    let mut result: CompanyCompliance = CompanyCompliance {
        compliance_status: None,
        employees_total: 0,
        employees_in_penalty: 0,
        employees_in_grace: 0,
        employees_expiring: 0,
        employees_incomplete: 0,
        employees_valid: 0,
        total_estimated_fine: Decimal::ZERO,
        employees: Vec::with_capacity(roster.len()),
    };

    for (employee, documents) in roster {
        let compliance: EmployeeCompliance =
            evaluate_employee(catalog, company, documents, today);

        result.employees_total += 1;
        for view in &compliance.documents {
            result.total_estimated_fine += view.metrics.estimated_fine;
        }

        if let Some(status) = compliance.rollup.compliance_status {
            match status {
                ComplianceStatus::PenaltyActive => result.employees_in_penalty += 1,
                ComplianceStatus::InGrace => result.employees_in_grace += 1,
                ComplianceStatus::ExpiringSoon => result.employees_expiring += 1,
                ComplianceStatus::Incomplete => result.employees_incomplete += 1,
                ComplianceStatus::Valid => result.employees_valid += 1,
            }

            result.compliance_status = Some(match result.compliance_status {
                Some(worst) if worst.severity() >= status.severity() => worst,
                _ => status,
            });
        }

        result.employees.push(EmployeeReport {
            employee: employee.clone(),
            compliance,
        });
    }

    tracing::debug!(
        employees = result.employees_total,
        in_penalty = result.employees_in_penalty,
        total_fine = %result.total_estimated_fine,
        "evaluated company compliance"
    );

    result
}
