use crate::features::decompose::DecomposedRow;
use crate::features::error::FeatureError;
use crate::types::season::Season;

/// Decomposed row with its derived season category.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonedRow {
    pub decomposed: DecomposedRow,
    pub season: Season,
}

/// Maps a calendar month onto its season bucket.
///
/// Every month 1-12 maps to exactly one season; anything else is rejected.
pub fn season_for_month(month: u32) -> Result<Season, FeatureError> {
    match month {
        12 | 1 | 2 => Ok(Season::Winter),
        3..=5 => Ok(Season::Spring),
        6..=8 => Ok(Season::Summer),
        9..=11 => Ok(Season::Fall),
        other => Err(FeatureError::InvalidMonth(other)),
    }
}

/// Appends the season category to each row, order preserved.
///
/// A month outside 1-12 aborts the run; skipping the row instead would break
/// the dense row sequence the lag builder depends on.
pub fn encode_seasons(rows: Vec<DecomposedRow>) -> Result<Vec<SeasonedRow>, FeatureError> {
    rows.into_iter()
        .map(|decomposed| {
            let season = season_for_month(decomposed.month)?;
            Ok(SeasonedRow { decomposed, season })
        })
        .collect()
}
