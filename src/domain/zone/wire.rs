//! Wire types for zones.

use super::{ZoneInfo, ZoneType};
use serde::{Deserialize, Serialize};

/// A zone as the backend sends it: a `[timestamp, type, info]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireZone(pub String, pub ZoneType, pub ZoneInfo);
