// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-document dependency alerts.
//!
//! A dependency rule says that one document type's renewal needs another
//! document type to be in force (a residence visa renewal needs a live
//! passport). Alerts measure only the urgency of the **blocking** document;
//! the blocked document's own status is never inspected, because the
//! renewal is at risk as soon as its prerequisite is about to lapse.

use crate::display::DisplayNames;
use crate::error::DomainError;
use crate::status::{EXPIRY_WARNING_WINDOW_DAYS, days_until_expiry};
use crate::types::DocumentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Severity of a dependency alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// The blocking document has already expired.
    Critical,
    /// The blocking document expires within the warning window.
    Warning,
}

impl AlertSeverity {
    /// Returns the string representation of the severity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured relationship between two document types.
///
/// Many-to-many over document types; a rule may never name the same type
/// on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRule {
    /// The prerequisite document type.
    blocking: DocumentType,
    /// The document type whose renewal depends on the prerequisite.
    blocked: DocumentType,
    /// Human-readable explanation appended to alert messages.
    description: String,
}

impl DependencyRule {
    /// Creates a new `DependencyRule`.
    ///
    /// # Arguments
    ///
    /// * `blocking` - The prerequisite document type
    /// * `blocked` - The dependent document type
    /// * `description` - Explanation appended to alert messages
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfReferentialDependency` if both sides name
    /// the same document type.
    pub fn new(
        blocking: DocumentType,
        blocked: DocumentType,
        description: String,
    ) -> Result<Self, DomainError> {
        if blocking == blocked {
            return Err(DomainError::SelfReferentialDependency {
                document_type: blocking.key().to_string(),
            });
        }
        Ok(Self {
            blocking,
            blocked,
            description,
        })
    }

    /// Returns the prerequisite document type.
    #[must_use]
    pub const fn blocking(&self) -> &DocumentType {
        &self.blocking
    }

    /// Returns the dependent document type.
    #[must_use]
    pub const fn blocked(&self) -> &DocumentType {
        &self.blocked
    }

    /// Returns the rule description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The per-type facts the dependency evaluator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSnapshot {
    /// Expiry date of the document, if set.
    pub expiry_date: Option<Date>,
    /// Whether the identifying number is filled in.
    pub has_number: bool,
}

impl DocumentSnapshot {
    /// Creates a new `DocumentSnapshot`.
    #[must_use]
    pub const fn new(expiry_date: Option<Date>, has_number: bool) -> Self {
        Self {
            expiry_date,
            has_number,
        }
    }
}

/// A severity-tagged warning produced by one dependency rule.
///
/// Ephemeral; rebuilt on every evaluation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyAlert {
    /// Alert severity.
    pub severity: AlertSeverity,
    /// Display label of the blocking document type.
    pub blocking_doc: String,
    /// Display label of the blocked document type.
    pub blocked_doc: String,
    /// Human-readable alert text.
    pub message: String,
    /// ISO 8601 expiry date of the blocking document.
    pub blocking_expiry: String,
    /// ISO 8601 expiry date of the blocked document, if set.
    pub blocked_expiry: Option<String>,
}

/// Evaluates dependency rules against one employee's documents.
///
/// Rules whose blocking document is absent or has no expiry date are
/// skipped: there is nothing to warn about yet. The output follows the
/// rule order, so repeated evaluation of identical input is stable.
///
/// # Arguments
///
/// * `rules` - The configured dependency rules
/// * `documents` - Per-type snapshots of the employee's documents
/// * `names` - Display-name overrides for message text
/// * `today` - The evaluation day
#[must_use]
pub fn evaluate_dependencies(
    rules: &[DependencyRule],
    documents: &BTreeMap<DocumentType, DocumentSnapshot>,
    names: &DisplayNames,
    today: Date,
) -> Vec<DependencyAlert> {
    let mut alerts: Vec<DependencyAlert> = Vec::new();

    for rule in rules {
        let Some(blocking_expiry) = documents
            .get(rule.blocking())
            .and_then(|snapshot| snapshot.expiry_date)
        else {
            continue;
        };

        let remaining: i64 = days_until_expiry(blocking_expiry, today);
        let blocking_name: String = names.resolve(rule.blocking());
        let blocked_name: String = names.resolve(rule.blocked());

        let (severity, message) = if remaining < 0 {
            (
                AlertSeverity::Critical,
                format!("{blocking_name} has EXPIRED. {}", rule.description()),
            )
        } else if remaining <= EXPIRY_WARNING_WINDOW_DAYS {
            (
                AlertSeverity::Warning,
                format!(
                    "{blocking_name} expires in {remaining} days. {}",
                    rule.description()
                ),
            )
        } else {
            continue;
        };

        let blocked_expiry: Option<String> = documents
            .get(rule.blocked())
            .and_then(|snapshot| snapshot.expiry_date)
            .map(|date| date.to_string());

        alerts.push(DependencyAlert {
            severity,
            blocking_doc: blocking_name,
            blocked_doc: blocked_name,
            message,
            blocking_expiry: blocking_expiry.to_string(),
            blocked_expiry,
        });
    }

    alerts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Duration;
    use time::macros::date;

    const TODAY: Date = date!(2026 - 08 - 06);

    fn shifted(days: i64) -> Date {
        TODAY.checked_add(Duration::days(days)).unwrap()
    }

    fn passport_blocks_visa() -> DependencyRule {
        DependencyRule::new(
            DocumentType::new("passport"),
            DocumentType::new("visa"),
            String::from("Visa renewal requires a passport valid for six months"),
        )
        .unwrap()
    }

    fn snapshots(
        entries: &[(&str, Option<Date>)],
    ) -> BTreeMap<DocumentType, DocumentSnapshot> {
        entries
            .iter()
            .map(|(key, expiry)| {
                (
                    DocumentType::new(key),
                    DocumentSnapshot::new(*expiry, true),
                )
            })
            .collect()
    }

    #[test]
    fn test_self_referential_rule_rejected() {
        let result = DependencyRule::new(
            DocumentType::new("passport"),
            DocumentType::new("Passport"),
            String::from("self"),
        );

        assert_eq!(
            result,
            Err(DomainError::SelfReferentialDependency {
                document_type: String::from("passport"),
            })
        );
    }

    #[test]
    fn test_expired_blocking_document_is_critical() {
        let rules = vec![passport_blocks_visa()];
        let documents = snapshots(&[
            ("passport", Some(shifted(-3))),
            ("visa", Some(shifted(120))),
        ]);

        let alerts = evaluate_dependencies(&rules, &documents, &DisplayNames::default(), TODAY);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].blocking_doc, "Passport");
        assert_eq!(alerts[0].blocked_doc, "Residence Visa");
        assert!(alerts[0].message.contains("has EXPIRED"));
        assert!(alerts[0].message.contains("six months"));
        assert_eq!(alerts[0].blocked_expiry, Some(shifted(120).to_string()));
    }

    #[test]
    fn test_blocking_document_inside_window_is_warning() {
        let rules = vec![passport_blocks_visa()];
        let documents = snapshots(&[("passport", Some(shifted(12)))]);

        let alerts = evaluate_dependencies(&rules, &documents, &DisplayNames::default(), TODAY);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert!(alerts[0].message.contains("expires in 12 days"));
        assert_eq!(alerts[0].blocked_expiry, None);
    }

    #[test]
    fn test_window_boundaries() {
        let rules = vec![passport_blocks_visa()];

        // Expiry day itself warns.
        let on_expiry = snapshots(&[("passport", Some(TODAY))]);
        let alerts = evaluate_dependencies(&rules, &on_expiry, &DisplayNames::default(), TODAY);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert!(alerts[0].message.contains("expires in 0 days"));

        // Day 30 warns, day 31 stays quiet.
        let at_window = snapshots(&[("passport", Some(shifted(30)))]);
        assert_eq!(
            evaluate_dependencies(&rules, &at_window, &DisplayNames::default(), TODAY).len(),
            1
        );
        let outside = snapshots(&[("passport", Some(shifted(31)))]);
        assert!(
            evaluate_dependencies(&rules, &outside, &DisplayNames::default(), TODAY).is_empty()
        );
    }

    #[test]
    fn test_blocking_document_without_expiry_is_skipped() {
        let rules = vec![passport_blocks_visa()];

        let missing_expiry = snapshots(&[("passport", None)]);
        assert!(
            evaluate_dependencies(&rules, &missing_expiry, &DisplayNames::default(), TODAY)
                .is_empty()
        );

        let absent: BTreeMap<DocumentType, DocumentSnapshot> = BTreeMap::new();
        assert!(evaluate_dependencies(&rules, &absent, &DisplayNames::default(), TODAY).is_empty());
    }

    #[test]
    fn test_blocked_document_status_is_not_inspected() {
        // The blocked visa is itself long expired; only the passport's
        // urgency decides whether an alert fires.
        let rules = vec![passport_blocks_visa()];
        let documents = snapshots(&[
            ("passport", Some(shifted(200))),
            ("visa", Some(shifted(-200))),
        ]);

        let alerts = evaluate_dependencies(&rules, &documents, &DisplayNames::default(), TODAY);

        assert!(alerts.is_empty());
    }

    #[test]
    fn test_output_follows_rule_order() {
        let rules = vec![
            DependencyRule::new(
                DocumentType::new("emirates_id"),
                DocumentType::new("labour_card"),
                String::from("Labour card renewal requires an Emirates ID"),
            )
            .unwrap(),
            passport_blocks_visa(),
        ];
        let documents = snapshots(&[
            ("passport", Some(shifted(-1))),
            ("emirates_id", Some(shifted(5))),
        ]);

        let alerts = evaluate_dependencies(&rules, &documents, &DisplayNames::default(), TODAY);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].blocking_doc, "Emirates ID");
        assert_eq!(alerts[1].blocking_doc, "Passport");

        let again = evaluate_dependencies(&rules, &documents, &DisplayNames::default(), TODAY);
        assert_eq!(alerts, again);
    }
}
