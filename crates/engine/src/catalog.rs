// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog configuration for compliance evaluation.
//!
//! The catalog is the immutable lookup table the engine evaluates against:
//! which document types are mandatory, the default fine schedule per type,
//! display-name overrides, and the dependency rules. It is loaded once at
//! startup (typically from JSON) and passed in read-only; the engine never
//! holds process-wide mutable state.
//!
//! Effective schedule values resolve per field: company override, then
//! global default, then the value stored on the document itself.

use crate::error::EngineError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tawtheeq_domain::{
    DEFAULT_TIMEZONE, DependencyRule, DisplayNames, DocumentFact, DocumentType, DomainError,
    FineType,
};

/// Partial fine-schedule values for one document type.
///
/// Unset fields fall through to the next layer of the resolution chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleDefaults {
    /// Days after expiry without fines.
    pub grace_period_days: Option<u16>,
    /// Fine rate.
    pub fine_per_day: Option<Decimal>,
    /// Fine schedule kind.
    pub fine_type: Option<FineType>,
    /// Fine upper bound (zero = uncapped).
    pub fine_cap: Option<Decimal>,
}

/// Fully resolved schedule values for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedSchedule {
    /// Days after expiry without fines.
    pub grace_period_days: u16,
    /// Fine rate.
    pub fine_per_day: Decimal,
    /// Fine schedule kind.
    pub fine_type: FineType,
    /// Fine upper bound (zero = uncapped).
    pub fine_cap: Decimal,
}

impl ResolvedSchedule {
    /// Returns a copy of the document with these schedule values in place
    /// of its stored ones.
    #[must_use]
    pub fn apply_to(&self, fact: &DocumentFact) -> DocumentFact {
        DocumentFact {
            grace_period_days: self.grace_period_days,
            fine_per_day: self.fine_per_day,
            fine_type: self.fine_type,
            fine_cap: self.fine_cap,
            ..fact.clone()
        }
    }
}

/// Company-specific schedule overrides, keyed by document type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyPolicy {
    overrides: BTreeMap<String, ScheduleDefaults>,
}

impl CompanyPolicy {
    /// Creates a `CompanyPolicy` from override entries keyed by type key.
    #[must_use]
    pub fn new(overrides: BTreeMap<String, ScheduleDefaults>) -> Self {
        let normalized: BTreeMap<String, ScheduleDefaults> = overrides
            .into_iter()
            .map(|(key, defaults)| (DocumentType::new(&key).key().to_string(), defaults))
            .collect();
        Self {
            overrides: normalized,
        }
    }

    /// Returns the override entry for a document type, if configured.
    #[must_use]
    pub fn override_for(&self, document_type: &DocumentType) -> Option<&ScheduleDefaults> {
        self.overrides.get(document_type.key())
    }
}

/// One dependency rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRuleConfig {
    /// The prerequisite document type key.
    pub blocking: String,
    /// The dependent document type key.
    pub blocked: String,
    /// Explanation appended to alert messages.
    pub description: String,
}

/// Raw catalog configuration as written in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// IANA timezone used to resolve evaluation instants to calendar days.
    pub timezone: String,
    /// Document types every employee must hold.
    pub mandatory_documents: Vec<String>,
    /// Display-name overrides keyed by type key.
    pub display_names: BTreeMap<String, String>,
    /// Global fine-schedule defaults keyed by type key.
    pub schedule_defaults: BTreeMap<String, ScheduleDefaults>,
    /// Dependency rules between document types.
    pub dependency_rules: Vec<DependencyRuleConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            timezone: String::from(DEFAULT_TIMEZONE),
            mandatory_documents: Vec::new(),
            display_names: BTreeMap::new(),
            schedule_defaults: BTreeMap::new(),
            dependency_rules: Vec::new(),
        }
    }
}

/// Validated, immutable catalog the engine evaluates against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceCatalog {
    timezone: String,
    mandatory_documents: Vec<DocumentType>,
    display_names: DisplayNames,
    schedule_defaults: BTreeMap<DocumentType, ScheduleDefaults>,
    dependency_rules: Vec<DependencyRule>,
}

impl Default for ComplianceCatalog {
    fn default() -> Self {
        Self {
            timezone: String::from(DEFAULT_TIMEZONE),
            mandatory_documents: Vec::new(),
            display_names: DisplayNames::default(),
            schedule_defaults: BTreeMap::new(),
            dependency_rules: Vec::new(),
        }
    }
}

impl ComplianceCatalog {
    /// Builds a validated catalog from raw configuration.
    ///
    /// Type keys are normalized; duplicate mandatory entries collapse to
    /// one. Rules and amounts are validated here so that a bad catalog
    /// fails at startup instead of mid-evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any document type key is empty
    /// - Any fine rate or cap is negative
    /// - Any dependency rule names the same type on both sides
    pub fn from_config(config: CatalogConfig) -> Result<Self, EngineError> {
        let mut mandatory_documents: Vec<DocumentType> = Vec::new();
        for key in &config.mandatory_documents {
            let document_type: DocumentType = DocumentType::new(key);
            document_type.validate()?;
            if !mandatory_documents.contains(&document_type) {
                mandatory_documents.push(document_type);
            }
        }
        mandatory_documents.sort();

        let mut schedule_defaults: BTreeMap<DocumentType, ScheduleDefaults> = BTreeMap::new();
        for (key, defaults) in config.schedule_defaults {
            let document_type: DocumentType = DocumentType::new(&key);
            document_type.validate()?;
            validate_amounts(&document_type, &defaults)?;
            schedule_defaults.insert(document_type, defaults);
        }

        let mut dependency_rules: Vec<DependencyRule> =
            Vec::with_capacity(config.dependency_rules.len());
        for rule in config.dependency_rules {
            let blocking: DocumentType = DocumentType::new(&rule.blocking);
            blocking.validate()?;
            let blocked: DocumentType = DocumentType::new(&rule.blocked);
            blocked.validate()?;
            dependency_rules.push(DependencyRule::new(blocking, blocked, rule.description)?);
        }

        Ok(Self {
            timezone: config.timezone,
            mandatory_documents,
            display_names: DisplayNames::new(config.display_names),
            schedule_defaults,
            dependency_rules,
        })
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the contents fail
    /// validation.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Reads, parses, and validates a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the JSON is malformed,
    /// or the contents fail validation.
    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let contents: String = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Returns the catalog timezone.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Returns the mandatory document types, sorted by key.
    #[must_use]
    pub fn mandatory_documents(&self) -> &[DocumentType] {
        &self.mandatory_documents
    }

    /// Returns the display-name overrides.
    #[must_use]
    pub const fn display_names(&self) -> &DisplayNames {
        &self.display_names
    }

    /// Returns the dependency rules.
    #[must_use]
    pub fn dependency_rules(&self) -> &[DependencyRule] {
        &self.dependency_rules
    }

    /// Resolves the display label for a document type.
    #[must_use]
    pub fn display_name(&self, document_type: &DocumentType) -> String {
        self.display_names.resolve(document_type)
    }

    /// Resolves the effective schedule for one document.
    ///
    /// Each field resolves independently: company override, then global
    /// default, then the value stored on the document.
    #[must_use]
    pub fn effective_schedule(
        &self,
        company: Option<&CompanyPolicy>,
        fact: &DocumentFact,
    ) -> ResolvedSchedule {
        let global: Option<&ScheduleDefaults> = self.schedule_defaults.get(&fact.document_type);
        let company_override: Option<&ScheduleDefaults> =
            company.and_then(|policy| policy.override_for(&fact.document_type));

        ResolvedSchedule {
            grace_period_days: company_override
                .and_then(|defaults| defaults.grace_period_days)
                .or_else(|| global.and_then(|defaults| defaults.grace_period_days))
                .unwrap_or(fact.grace_period_days),
            fine_per_day: company_override
                .and_then(|defaults| defaults.fine_per_day)
                .or_else(|| global.and_then(|defaults| defaults.fine_per_day))
                .unwrap_or(fact.fine_per_day),
            fine_type: company_override
                .and_then(|defaults| defaults.fine_type)
                .or_else(|| global.and_then(|defaults| defaults.fine_type))
                .unwrap_or(fact.fine_type),
            fine_cap: company_override
                .and_then(|defaults| defaults.fine_cap)
                .or_else(|| global.and_then(|defaults| defaults.fine_cap))
                .unwrap_or(fact.fine_cap),
        }
    }

    /// Returns the empty mandatory slots recorded when an employee is
    /// created, with global schedule defaults applied.
    #[must_use]
    pub fn mandatory_placeholders(&self) -> Vec<DocumentFact> {
        self.mandatory_documents
            .iter()
            .map(|document_type| {
                let placeholder: DocumentFact =
                    DocumentFact::mandatory_placeholder(document_type.clone());
                self.effective_schedule(None, &placeholder).apply_to(&placeholder)
            })
            .collect()
    }
}

/// Rejects negative rates and caps in one schedule entry.
fn validate_amounts(
    document_type: &DocumentType,
    defaults: &ScheduleDefaults,
) -> Result<(), EngineError> {
    if let Some(rate) = defaults.fine_per_day
        && rate < Decimal::ZERO
    {
        return Err(EngineError::Domain(DomainError::NegativeAmount {
            field: format!("{document_type} fine_per_day"),
            value: rate.to_string(),
        }));
    }
    if let Some(cap) = defaults.fine_cap
        && cap < Decimal::ZERO
    {
        return Err(EngineError::Domain(DomainError::NegativeAmount {
            field: format!("{document_type} fine_cap"),
            value: cap.to_string(),
        }));
    }
    Ok(())
}
