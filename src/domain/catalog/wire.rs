//! Wire types for `GET /api/intervals` and `GET /api/periods`.

use std::collections::BTreeMap;

/// `{code: label}`, e.g. `{"5m": "5 Minutes"}`.
pub type LabelMap = BTreeMap<String, String>;
