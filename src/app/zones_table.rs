//! Zones table presenter: ranks, caps and formats zones for display.

use crate::domain::zone::{by_strength_desc, Zone, ZoneType};
use crate::shared::fmt;

/// Display cap; the backend may return more.
pub const MAX_ROWS: usize = 10;

pub const EMPTY_MESSAGE: &str = "No zones identified with current settings.";
pub const INITIAL_MESSAGE: &str = "No zones identified yet. Run an analysis to view zones.";
pub const NO_UPLOAD_MESSAGE: &str = "No zones identified yet. Upload a CSV file to view zones.";

/// One rendered table row. Every cell is display-ready text.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRow {
    pub zone_type: ZoneType,
    pub type_label: &'static str,
    pub type_class: &'static str,
    pub level: String,
    pub strength: String,
    pub method: &'static str,
    pub volume: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZonesTable {
    /// A single full-width row with a message.
    Placeholder(String),
    Rows(Vec<ZoneRow>),
}

impl ZonesTable {
    pub fn rows(&self) -> &[ZoneRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::Placeholder(_) => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZonesTablePresenter {
    table: ZonesTable,
}

impl Default for ZonesTablePresenter {
    fn default() -> Self {
        Self {
            table: ZonesTable::Placeholder(INITIAL_MESSAGE.to_string()),
        }
    }
}

impl ZonesTablePresenter {
    /// Replace the table with the strongest zones.
    ///
    /// `current_price` is best-effort: without it the distance annotation is
    /// simply left off.
    pub fn render(&mut self, zones: &[Zone], current_price: Option<f64>) -> &ZonesTable {
        if zones.is_empty() {
            self.table = ZonesTable::Placeholder(EMPTY_MESSAGE.to_string());
            return &self.table;
        }

        if current_price.is_none() {
            tracing::debug!("Current price unavailable; omitting zone distances");
        }

        let rows = by_strength_desc(zones)
            .iter()
            .take(MAX_ROWS)
            .map(|z| format_row(z, current_price))
            .collect();
        self.table = ZonesTable::Rows(rows);
        &self.table
    }

    pub fn show_placeholder(&mut self, message: impl Into<String>) {
        self.table = ZonesTable::Placeholder(message.into());
    }

    pub fn table(&self) -> &ZonesTable {
        &self.table
    }
}

fn format_row(zone: &Zone, current_price: Option<f64>) -> ZoneRow {
    let info = &zone.info;
    ZoneRow {
        zone_type: zone.zone_type,
        type_label: zone.zone_type.as_str(),
        type_class: zone.zone_type.css_class(),
        level: level_text(info.level, current_price),
        strength: fmt::percent(info.strength),
        method: info.method_label(),
        volume: fmt::volume_ratio(info.volume, info.avg_volume).unwrap_or_else(|| "N/A".to_string()),
        date: fmt::format_timestamp(&zone.timestamp),
    }
}

fn level_text(level: f64, current_price: Option<f64>) -> String {
    let price = fmt::fixed(level, 2);
    match current_price.filter(|p| p.is_finite() && *p != 0.0) {
        Some(p) => {
            let distance = (level - p).abs() / p * 100.0;
            format!("{} ({}% away)", price, fmt::fixed(distance, 1))
        }
        None => price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::zone::ZoneInfo;

    fn zone(zone_type: ZoneType, level: f64, strength: f64) -> Zone {
        Zone {
            timestamp: "2024-01-05 09:30:00".to_string(),
            zone_type,
            info: ZoneInfo {
                level,
                strength,
                consolidation: false,
                volume: None,
                avg_volume: None,
                upper: None,
                lower: None,
            },
        }
    }

    #[test]
    fn test_empty_renders_single_placeholder() {
        let mut p = ZonesTablePresenter::default();
        let table = p.render(&[], Some(100.0));
        assert_eq!(table, &ZonesTable::Placeholder(EMPTY_MESSAGE.to_string()));
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_rows_sorted_by_strength_and_capped() {
        let strengths = [5.0, 95.0, 40.0, 60.0, 10.0, 70.0, 20.0, 80.0, 30.0, 50.0, 90.0, 15.0];
        let zones: Vec<_> = strengths
            .iter()
            .map(|s| zone(ZoneType::Supply, 100.0, *s))
            .collect();
        let mut p = ZonesTablePresenter::default();
        let rows = p.render(&zones, None).rows().to_vec();

        assert_eq!(rows.len(), MAX_ROWS);
        let shown: Vec<_> = rows.iter().map(|r| r.strength.as_str()).collect();
        assert_eq!(
            shown,
            ["95%", "90%", "80%", "70%", "60%", "50%", "40%", "30%", "20%", "15%"]
        );
    }

    #[test]
    fn test_fewer_than_cap_renders_all() {
        let zones = vec![zone(ZoneType::Demand, 1.0, 10.0), zone(ZoneType::Supply, 2.0, 20.0)];
        let mut p = ZonesTablePresenter::default();
        let rows = p.render(&zones, None).rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].type_label, "Supply");
        assert_eq!(rows[0].type_class, "supply-color");
    }

    #[test]
    fn test_reference_row_formatting() {
        let mut z = zone(ZoneType::Supply, 150.004, 67.2);
        z.info.volume = Some(200.0);
        z.info.avg_volume = Some(100.0);
        let mut p = ZonesTablePresenter::default();
        let row = p.render(&[z], Some(148.0)).rows()[0].clone();

        assert_eq!(row.level, "150.00 (1.4% away)");
        assert_eq!(row.strength, "67%");
        assert_eq!(row.volume, "2.0x avg");
        assert_eq!(row.method, "Price Action");
        assert_eq!(row.date, "1/5/2024, 9:30:00 AM");
    }

    #[test]
    fn test_missing_price_omits_distance() {
        let mut p = ZonesTablePresenter::default();
        let row = p.render(&[zone(ZoneType::Demand, 99.5, 50.0)], None).rows()[0].clone();
        assert_eq!(row.level, "99.50");
    }

    #[test]
    fn test_missing_volume_is_na() {
        let mut z = zone(ZoneType::Demand, 10.0, 50.0);
        z.info.volume = Some(500.0);
        let mut p = ZonesTablePresenter::default();
        assert_eq!(p.render(&[z], None).rows()[0].volume, "N/A");
    }

    #[test]
    fn test_consolidation_method_label() {
        let mut z = zone(ZoneType::Demand, 10.0, 50.0);
        z.info.consolidation = true;
        let mut p = ZonesTablePresenter::default();
        assert_eq!(p.render(&[z], None).rows()[0].method, "Consolidation");
    }

    #[test]
    fn test_render_replaces_previous_table() {
        let mut p = ZonesTablePresenter::default();
        p.render(&[zone(ZoneType::Demand, 10.0, 50.0)], None);
        p.render(&[], None);
        assert_eq!(p.table(), &ZonesTable::Placeholder(EMPTY_MESSAGE.to_string()));
    }
}
