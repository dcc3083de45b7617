use serde::{Deserialize, Serialize};

/// One historical daily record as handed over by the data-access layer.
///
/// The date is kept as the upstream `YYYY-MM-DD` string; decomposition into
/// numeric calendar fields happens in the feature pipeline. Records with
/// missing weather fields are filtered out before they reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: String,
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
}
