use crate::error::ClimacastError;
use crate::features::decompose::decompose_dates;
use crate::features::encode::encode_seasons;
use crate::features::lag::add_weather_lags;
use crate::model::trainer::{train, TrainerConfig, TrainingOutcome};
use crate::types::observation::RawObservation;
use log::info;

/// Runs the full batch pipeline over raw observations.
///
/// Stages run strictly downstream: date decomposition, season encoding,
/// weather lags, then preprocessing, the seeded split and the regression fit.
/// The caller is expected to hand in rows ordered by station then date; that
/// order is the time axis the lag builder uses. Any malformed date or
/// out-of-range month aborts the run. Each invocation fits scalers and model
/// fresh; nothing is shared between runs.
pub fn run_training(
    observations: &[RawObservation],
    config: &TrainerConfig,
) -> Result<TrainingOutcome, ClimacastError> {
    info!(
        "training pipeline starting on {} observations",
        observations.len()
    );

    let rows = decompose_dates(observations)?;
    let rows = encode_seasons(rows)?;
    let rows = add_weather_lags(rows);

    let outcome = train(&rows, config)?;
    info!(
        "training pipeline finished: {} predictions, test mse {:.6}",
        outcome.report.predictions.len(),
        outcome.report.test_loss
    );
    Ok(outcome)
}
