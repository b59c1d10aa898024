// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ComplianceCatalog;
use rust_decimal_macros::dec;
use tawtheeq_domain::{DocumentFact, DocumentType, FineType};
use time::macros::date;
use time::{Date, Duration};

pub const TODAY: Date = date!(2026 - 08 - 06);

pub fn shifted(days: i64) -> Date {
    TODAY.checked_add(Duration::days(days)).unwrap()
}

pub fn create_test_catalog() -> ComplianceCatalog {
    ComplianceCatalog::from_json_str(
        r#"{
            "timezone": "Asia/Dubai",
            "mandatory_documents": ["passport", "visa", "emirates_id"],
            "display_names": {
                "labour_card": "MoHRE Labour Card"
            },
            "schedule_defaults": {
                "visa": {
                    "grace_period_days": 30,
                    "fine_per_day": "50",
                    "fine_type": "daily",
                    "fine_cap": "0"
                },
                "emirates_id": {
                    "grace_period_days": 30,
                    "fine_per_day": "20",
                    "fine_type": "daily",
                    "fine_cap": "1000"
                }
            },
            "dependency_rules": [
                {
                    "blocking": "passport",
                    "blocked": "visa",
                    "description": "Visa renewal requires a valid passport"
                },
                {
                    "blocking": "visa",
                    "blocked": "emirates_id",
                    "description": "Emirates ID renewal requires a valid residence visa"
                }
            ]
        }"#,
    )
    .unwrap()
}

pub fn create_test_document(
    key: &str,
    expiry: Option<Date>,
    number: Option<&str>,
) -> DocumentFact {
    DocumentFact::new(
        DocumentType::new(key),
        number.map(String::from),
        None,
        expiry,
        0,
        dec!(0),
        FineType::Daily,
        dec!(0),
        true,
    )
}
