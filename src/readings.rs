use serde::{Deserialize, Serialize};

/// Header metadata common to all published readings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Header {
    /// Device kind name, e.g. "VL6180"
    pub device: String,
    /// Configured sensor instance identifier
    pub sensor_id: String,
    /// Sequence number for reading ordering
    pub seq: u64,
    /// UTC timestamp in nanoseconds
    pub t_utc_ns: u64,
    /// Message schema version for evolution
    pub schema_v: u16,
}

impl Header {
    /// Create a new header stamped with the current time
    pub fn new(device: String, sensor_id: String, seq: u64) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let t_utc_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;

        Self {
            device,
            sensor_id,
            seq,
            t_utc_ns,
            schema_v: 1,
        }
    }
}

/// One published measurement, carrying the value pre-rendered the way
/// the accessor surface reports it
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Reading {
    pub h: Header,
    /// Value name, e.g. "range" or "lux"
    pub name: String,
    /// Value type, e.g. "integer" or "float"
    pub kind: String,
    /// Rendered value
    pub value: String,
}

impl Reading {
    /// Serialize to a single JSON line for the output stream
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
