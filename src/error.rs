use crate::features::error::FeatureError;
use crate::ingest::IngestError;
use crate::model::error::TrainingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimacastError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Training(#[from] TrainingError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}
