use crate::features::error::FeatureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Cannot train on an empty observation set")]
    EmptyInput,

    #[error("Train/test split left the {0} partition empty")]
    EmptyPartition(&'static str),

    #[error("Model fit diverged: loss became non-finite at epoch {epoch}")]
    NonFiniteLoss { epoch: usize },

    #[error(transparent)]
    Feature(#[from] FeatureError),
}
