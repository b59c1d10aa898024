// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end aggregation over one employee's full document portfolio:
//! rollup and dependency alerts derived from the same snapshots.

use crate::{
    AlertSeverity, ComplianceStatus, DependencyRule, DisplayNames, DocumentFact, DocumentSnapshot,
    DocumentType, EmployeeRollup, FineType, evaluate_dependencies, roll_up_documents,
};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use time::macros::date;
use time::{Date, Duration};

const TODAY: Date = date!(2026 - 08 - 06);

fn shifted(days: i64) -> Date {
    TODAY.checked_add(Duration::days(days)).unwrap()
}

fn document(key: &str, expiry: Option<Date>, number: Option<&str>) -> DocumentFact {
    DocumentFact::new(
        DocumentType::new(key),
        number.map(String::from),
        None,
        expiry,
        30,
        dec!(25),
        FineType::Daily,
        dec!(2000),
        true,
    )
}

fn default_rules() -> Vec<DependencyRule> {
    vec![
        DependencyRule::new(
            DocumentType::new(DocumentType::PASSPORT),
            DocumentType::new(DocumentType::VISA),
            String::from("Visa renewal requires a valid passport"),
        )
        .unwrap(),
        DependencyRule::new(
            DocumentType::new(DocumentType::VISA),
            DocumentType::new(DocumentType::EMIRATES_ID),
            String::from("Emirates ID renewal requires a valid residence visa"),
        )
        .unwrap(),
    ]
}

fn snapshots_of(documents: &[DocumentFact]) -> BTreeMap<DocumentType, DocumentSnapshot> {
    documents
        .iter()
        .map(|fact| {
            (
                fact.document_type.clone(),
                DocumentSnapshot::new(fact.expiry_date, fact.has_number()),
            )
        })
        .collect()
}

#[test]
fn test_portfolio_with_expiring_passport() {
    let documents = vec![
        document("passport", Some(shifted(20)), Some("P7731182")),
        document("visa", Some(shifted(180)), Some("101-2026-1234567")),
        document("emirates_id", Some(shifted(180)), Some("784-1990-1234567-1")),
    ];

    let rollup: EmployeeRollup = roll_up_documents(&documents, TODAY);
    assert_eq!(rollup.compliance_status, Some(ComplianceStatus::ExpiringSoon));
    assert_eq!(rollup.expiring_count, 1);
    assert_eq!(rollup.nearest_expiry_days, Some(20));
    assert_eq!(
        rollup.urgent_doc_type,
        Some(DocumentType::new(DocumentType::PASSPORT))
    );

    // The passport threatens the visa renewal but the visa itself is fine.
    let alerts = evaluate_dependencies(
        &default_rules(),
        &snapshots_of(&documents),
        &DisplayNames::default(),
        TODAY,
    );
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    assert_eq!(alerts[0].blocking_doc, "Passport");
    assert_eq!(alerts[0].blocked_doc, "Residence Visa");
}

#[test]
fn test_portfolio_with_expired_visa_cascades() {
    let documents = vec![
        document("passport", Some(shifted(300)), Some("P7731182")),
        document("visa", Some(shifted(-45)), Some("101-2026-1234567")),
        document("emirates_id", Some(shifted(90)), Some("784-1990-1234567-1")),
    ];

    let rollup: EmployeeRollup = roll_up_documents(&documents, TODAY);
    assert_eq!(
        rollup.compliance_status,
        Some(ComplianceStatus::PenaltyActive)
    );
    assert_eq!(rollup.expired_count, 1);
    assert_eq!(rollup.nearest_expiry_days, Some(-45));

    let alerts = evaluate_dependencies(
        &default_rules(),
        &snapshots_of(&documents),
        &DisplayNames::default(),
        TODAY,
    );
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[0].blocking_doc, "Residence Visa");
    assert_eq!(alerts[0].blocked_doc, "Emirates ID");
    assert!(alerts[0].message.contains("has EXPIRED"));
}

#[test]
fn test_fresh_employee_with_placeholder_slots() {
    let documents = vec![
        DocumentFact::mandatory_placeholder(DocumentType::new(DocumentType::PASSPORT)),
        DocumentFact::mandatory_placeholder(DocumentType::new(DocumentType::VISA)),
        DocumentFact::mandatory_placeholder(DocumentType::new(DocumentType::EMIRATES_ID)),
    ];

    let rollup: EmployeeRollup = roll_up_documents(&documents, TODAY);
    assert_eq!(rollup.compliance_status, Some(ComplianceStatus::Incomplete));
    assert_eq!(rollup.docs_total, 3);
    assert_eq!(rollup.docs_complete, 0);
    assert_eq!(rollup.nearest_expiry_days, None);
    assert_eq!(rollup.urgent_doc_type, None);

    // No expiry dates anywhere, so no dependency alerts either.
    let alerts = evaluate_dependencies(
        &default_rules(),
        &snapshots_of(&documents),
        &DisplayNames::default(),
        TODAY,
    );
    assert!(alerts.is_empty());
}
