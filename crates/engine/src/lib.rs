// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! # tawtheeq
//!
//! Compliance evaluation engine for the Tawtheeq HR Compliance System.
//!
//! This crate answers, for one document, one employee, or one company:
//! - Is each tracked labor document compliant right now?
//! - How many days remain before (or since) each expiry?
//! - What fine has accrued, and what is the worst-case posture?
//! - Which expiring documents threaten the renewal of others?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same documents + same evaluation day means the
//!    same output, always.
//! 2. **Stateless**: no I/O, no shared mutable state, no system clock.
//!    The evaluation day is supplied by the caller.
//! 3. **One severity ladder**: bulk evaluation calls the same
//!    per-document rules as single-document evaluation, so the two can
//!    never drift apart.

mod catalog;
mod error;
mod evaluate;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogConfig, CompanyPolicy, ComplianceCatalog, DependencyRuleConfig, ResolvedSchedule,
    ScheduleDefaults,
};
pub use error::EngineError;
pub use evaluate::{
    CompanyCompliance, DocumentCompliance, EmployeeCompliance, EmployeeReport, evaluate_company,
    evaluate_document, evaluate_employee,
};
