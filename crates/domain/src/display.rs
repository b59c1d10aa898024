// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Human-readable labels for document types.
//!
//! Labels resolve in order: configured override, built-in table,
//! humanized type key.

use crate::types::DocumentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Returns the built-in label for a well-known document type key.
#[must_use]
pub fn builtin_display_name(key: &str) -> Option<&'static str> {
    match key {
        DocumentType::PASSPORT => Some("Passport"),
        DocumentType::VISA => Some("Residence Visa"),
        DocumentType::EMIRATES_ID => Some("Emirates ID"),
        DocumentType::WORK_PERMIT => Some("Work Permit"),
        DocumentType::LABOUR_CARD => Some("Labour Card"),
        DocumentType::MEDICAL_INSURANCE => Some("Medical Insurance"),
        DocumentType::EMPLOYMENT_CONTRACT => Some("Employment Contract"),
        _ => None,
    }
}

/// Configurable display-name overrides.
///
/// Loaded once at startup as part of the catalog and passed in read-only;
/// the derivation functions never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayNames {
    overrides: BTreeMap<String, String>,
}

impl DisplayNames {
    /// Creates a `DisplayNames` from override entries keyed by type key.
    #[must_use]
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        let normalized: BTreeMap<String, String> = overrides
            .into_iter()
            .map(|(key, label)| (DocumentType::new(&key).key().to_string(), label))
            .collect();
        Self {
            overrides: normalized,
        }
    }

    /// Resolves the label for a document type.
    #[must_use]
    pub fn resolve(&self, document_type: &DocumentType) -> String {
        if let Some(label) = self.overrides.get(document_type.key()) {
            return label.clone();
        }
        builtin_display_name(document_type.key())
            .map_or_else(|| humanize(document_type.key()), String::from)
    }
}

/// Turns a snake_case type key into a title-cased label.
fn humanize(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
