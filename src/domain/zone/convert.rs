//! Conversions from wire types to domain types for zones.

use super::wire::WireZone;
use super::Zone;

impl From<WireZone> for Zone {
    fn from(WireZone(timestamp, zone_type, info): WireZone) -> Self {
        Self {
            timestamp,
            zone_type,
            info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::zone::ZoneType;

    #[test]
    fn test_wire_zone_from_array() {
        let json = r#"["2024-02-01 10:00:00", "Supply",
            {"level": 101.5, "strength": 72.0, "consolidation": true,
             "volume": 3000.0, "avg_volume": 1500.0, "upper": 102.0, "lower": 101.0}]"#;
        let wire: WireZone = serde_json::from_str(json).unwrap();
        let zone: Zone = wire.into();
        assert_eq!(zone.timestamp, "2024-02-01 10:00:00");
        assert_eq!(zone.zone_type, ZoneType::Supply);
        assert_eq!(zone.info.level, 101.5);
        assert!(zone.info.consolidation);
        assert_eq!(zone.info.volume, Some(3000.0));
        assert_eq!(zone.info.upper, Some(102.0));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"["2024-02-01 10:00:00", "Demand", {"level": 99.0, "strength": 40.0}]"#;
        let zone: Zone = serde_json::from_str::<WireZone>(json).unwrap().into();
        assert!(!zone.info.consolidation);
        assert_eq!(zone.info.volume, None);
        assert_eq!(zone.info.avg_volume, None);
    }

    #[test]
    fn test_unknown_zone_type_is_rejected() {
        let json = r#"["2024-02-01 10:00:00", "Sideways", {"level": 1.0, "strength": 1.0}]"#;
        assert!(serde_json::from_str::<WireZone>(json).is_err());
    }
}
