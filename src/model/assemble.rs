use crate::types::prediction::Prediction;
use std::collections::BTreeMap;

/// Groups a sorted flat prediction list into per-station lists.
///
/// Pure reshaping: within each station the order of the input list is kept,
/// so feeding in the trainer's `(station_name, date)`-sorted output yields
/// date-sorted value lists. Map iteration order is station name ascending,
/// matching the flat sort.
pub fn group_by_station(predictions: Vec<Prediction>) -> BTreeMap<String, Vec<Prediction>> {
    let mut grouped: BTreeMap<String, Vec<Prediction>> = BTreeMap::new();
    for prediction in predictions {
        grouped
            .entry(prediction.station_name.clone())
            .or_default()
            .push(prediction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(station: &str, date: &str) -> Prediction {
        Prediction {
            station_name: station.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            year: 2020,
            month: 1,
            day: 1,
            date: date.to_string(),
            predicted_precip: 0.0,
            predicted_temp_max: 0.0,
            predicted_temp_min: 0.0,
            actual_precip: 0.0,
            actual_temp_max: 0.0,
            actual_temp_min: 0.0,
        }
    }

    #[test]
    fn interleaved_stations_group_into_sorted_lists() {
        // Sorted flat output from the trainer: stations interleave only in
        // the sense that both are present.
        let flat = vec![
            prediction("A", "2020-01-01"),
            prediction("A", "2020-01-03"),
            prediction("B", "2020-01-02"),
            prediction("B", "2020-01-04"),
        ];

        let grouped = group_by_station(flat);
        assert_eq!(grouped.len(), 2);

        let a_dates: Vec<&str> = grouped["A"].iter().map(|p| p.date.as_str()).collect();
        assert_eq!(a_dates, vec!["2020-01-01", "2020-01-03"]);
        let b_dates: Vec<&str> = grouped["B"].iter().map(|p| p.date.as_str()).collect();
        assert_eq!(b_dates, vec!["2020-01-02", "2020-01-04"]);

        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(group_by_station(Vec::new()).is_empty());
    }
}
