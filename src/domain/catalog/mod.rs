//! Catalog domain: the interval and period choices the backend offers.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::{Interval, Period};
use wire::LabelMap;

/// A selectable option with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

/// Intervals and periods, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub intervals: Vec<Choice<Interval>>,
    pub periods: Vec<Choice<Period>>,
}

impl Default for Catalog {
    /// The built-in catalog, used when the backend is unreachable.
    fn default() -> Self {
        Self {
            intervals: Interval::ALL
                .iter()
                .map(|i| Choice {
                    value: *i,
                    label: i.label().to_string(),
                })
                .collect(),
            periods: Period::ALL
                .iter()
                .map(|p| Choice {
                    value: *p,
                    label: p.label().to_string(),
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// Build from the backend's `{code: label}` maps. Unknown codes are skipped.
    pub fn from_wire(intervals: LabelMap, periods: LabelMap) -> Self {
        Self {
            intervals: choices(&Interval::ALL, Interval::as_str, &intervals),
            periods: choices(&Period::ALL, Period::as_str, &periods),
        }
    }
}

fn choices<T: Copy>(all: &[T], code: fn(&T) -> &'static str, labels: &LabelMap) -> Vec<Choice<T>> {
    for unknown in labels.keys().filter(|k| !all.iter().any(|v| code(v) == k.as_str())) {
        tracing::debug!(code = %unknown, "Skipping unknown catalog code");
    }
    all.iter()
        .filter_map(|v| {
            labels.get(code(v)).map(|label| Choice {
                value: *v,
                label: label.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_orders_canonically_and_skips_unknown() {
        let intervals: LabelMap = [
            ("1d".to_string(), "Daily".to_string()),
            ("5m".to_string(), "5 Minutes".to_string()),
            ("3h".to_string(), "Three Hours".to_string()),
        ]
        .into_iter()
        .collect();
        let periods: LabelMap = [("1y".to_string(), "1 Year".to_string())]
            .into_iter()
            .collect();

        let catalog = Catalog::from_wire(intervals, periods);
        let codes: Vec<_> = catalog.intervals.iter().map(|c| c.value).collect();
        assert_eq!(codes, [Interval::Minute5, Interval::Day1]);
        assert_eq!(catalog.periods.len(), 1);
        assert_eq!(catalog.periods[0].label, "1 Year");
    }

    #[test]
    fn test_default_catalog_is_complete() {
        let catalog = Catalog::default();
        assert_eq!(catalog.intervals.len(), 6);
        assert_eq!(catalog.periods.len(), 8);
        assert_eq!(catalog.intervals[4].label, "Daily");
    }
}
