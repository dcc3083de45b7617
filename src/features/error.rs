use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Malformed date string '{0}': expected three numeric parts separated by '-'")]
    MalformedDate(String),

    #[error("Month {0} is outside the calendar range 1-12")]
    InvalidMonth(u32),

    #[error("Row has {found} numeric values but the fitted transform expects {expected}")]
    ShapeMismatch { expected: usize, found: usize },
}
