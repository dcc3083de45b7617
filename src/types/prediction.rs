use serde::{Deserialize, Serialize};

/// One prediction for a held-out observation, paired with the actual values.
///
/// The storage collaborator upserts these keyed on `(station_name, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Reconstructed `YYYY-MM-DD` string for the observation.
    pub date: String,
    pub predicted_precip: f64,
    pub predicted_temp_max: f64,
    pub predicted_temp_min: f64,
    pub actual_precip: f64,
    pub actual_temp_max: f64,
    pub actual_temp_min: f64,
}

/// Metrics and predictions from one training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Held-out MSE on the standardized targets.
    pub test_loss: f64,
    /// Final-epoch training MSE on the standardized targets.
    pub training_loss: f64,
    pub training_samples: usize,
    pub test_samples: usize,
    /// Sorted by `(station_name, date)` ascending.
    pub predictions: Vec<Prediction>,
}
