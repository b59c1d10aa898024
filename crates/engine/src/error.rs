// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the evaluation engine.

use tawtheeq_domain::DomainError;
use thiserror::Error;

/// Errors raised while loading or validating catalog configuration.
///
/// The derivation functions themselves are total; errors only exist at the
/// configuration edge.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog JSON was malformed.
    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog contents violated a domain rule.
    #[error("Invalid catalog: {0}")]
    Domain(#[from] DomainError),
}
