//! Lap classification: validity, outliers, segment symbols.

use std::collections::HashSet;

use super::report::{LapAnalytics, SegmentStatus};
use crate::records::Lap;

/// Classify a full lap set, preserving input order and length.
///
/// Validity and the outlier threshold are computed once over the whole set,
/// then applied per lap. A lap is valid iff it is timed, not a pit-out lap,
/// and all three sector durations are present. A lap (valid or not) is an
/// outlier iff it is timed and slower than 1.05x the median valid lap time;
/// with zero valid laps there is no threshold and nothing is flagged.
pub fn classify(laps: &[Lap]) -> Vec<LapAnalytics> {
    let valid = valid_laps(laps);
    let valid_numbers: HashSet<u32> = valid.iter().map(|lap| lap.lap_number).collect();
    let threshold = outlier_threshold(&valid);

    laps.iter()
        .map(|lap| LapAnalytics {
            lap_number: lap.lap_number,
            lap_duration: lap.lap_duration,
            date_start: lap.date_start.clone(),
            duration_sector_1: lap.duration_sector_1,
            duration_sector_2: lap.duration_sector_2,
            duration_sector_3: lap.duration_sector_3,
            is_valid: valid_numbers.contains(&lap.lap_number),
            is_outlier: is_outlier(lap, threshold),
            segments_sector_1: segment_statuses(&lap.segments_sector_1),
            segments_sector_2: segment_statuses(&lap.segments_sector_2),
            segments_sector_3: segment_statuses(&lap.segments_sector_3),
        })
        .collect()
}

/// Laps that are complete: timed, not pit-out, all three sectors present.
pub(crate) fn valid_laps(laps: &[Lap]) -> Vec<&Lap> {
    laps.iter()
        .filter(|lap| {
            lap.lap_duration.is_some()
                && !lap.is_pit_out_lap
                && lap.duration_sector_1.is_some()
                && lap.duration_sector_2.is_some()
                && lap.duration_sector_3.is_some()
        })
        .collect()
}

/// The fastest timed lap of the given set.
///
/// Laps without a duration are skipped rather than aborting the reduction;
/// ties keep the earlier lap.
pub fn best_lap<'a>(laps: impl IntoIterator<Item = &'a Lap>) -> Option<&'a Lap> {
    laps.into_iter().filter(|lap| lap.lap_duration.is_some()).fold(None, |best, lap| match best {
        None => Some(lap),
        Some(current) if lap.lap_duration < current.lap_duration => Some(lap),
        Some(current) => Some(current),
    })
}

/// Outlier threshold: 1.05x the median valid lap time. `None` when there
/// are no valid laps — the median of an empty set produces no threshold.
pub(crate) fn outlier_threshold(valid: &[&Lap]) -> Option<f64> {
    let mut durations: Vec<f64> = valid.iter().filter_map(|lap| lap.lap_duration).collect();
    if durations.is_empty() {
        return None;
    }
    durations.sort_by(|a, b| a.total_cmp(b));
    Some(median(&durations) * 1.05)
}

fn is_outlier(lap: &Lap, threshold: Option<f64>) -> bool {
    match (lap.lap_duration, threshold) {
        (Some(duration), Some(threshold)) => duration > threshold,
        _ => false,
    }
}

/// Median of a non-empty, ascending-sorted slice; even lengths take the
/// mean of the two middle values.
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 { sorted[mid] } else { (sorted[mid - 1] + sorted[mid]) / 2.0 }
}

fn segment_statuses(codes: &[Option<i64>]) -> Vec<SegmentStatus> {
    codes.iter().map(|code| SegmentStatus::from_code(*code)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn timed_lap(lap_number: u32, duration: f64) -> Lap {
        Lap {
            lap_number,
            lap_duration: Some(duration),
            is_pit_out_lap: false,
            duration_sector_1: Some(duration / 3.0),
            duration_sector_2: Some(duration / 3.0),
            duration_sector_3: Some(duration / 3.0),
            ..Default::default()
        }
    }

    #[test]
    fn classify_preserves_order_and_length() {
        let laps = vec![timed_lap(3, 91.0), timed_lap(1, 90.0), timed_lap(2, 92.0)];
        let classified = classify(&laps);

        assert_eq!(classified.len(), 3);
        let numbers: Vec<u32> = classified.iter().map(|l| l.lap_number).collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn incomplete_laps_are_never_valid() {
        let untimed = Lap { lap_duration: None, ..timed_lap(1, 90.0) };
        let pit_out = Lap { is_pit_out_lap: true, ..timed_lap(2, 90.0) };
        let no_sector = Lap { duration_sector_2: None, ..timed_lap(3, 90.0) };

        let classified = classify(&[untimed, pit_out, no_sector, timed_lap(4, 90.0)]);
        assert_eq!(
            classified.iter().map(|l| l.is_valid).collect::<Vec<_>>(),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn laps_beyond_the_median_threshold_are_outliers() {
        // median 91.0, threshold 95.55
        let laps = vec![timed_lap(1, 90.0), timed_lap(2, 200.0), timed_lap(3, 91.0)];
        let classified = classify(&laps);

        assert!(!classified[0].is_outlier);
        assert!(classified[1].is_outlier);
        assert!(!classified[2].is_outlier);
        // the slow lap is complete, so it stays valid
        assert!(classified[1].is_valid);
    }

    #[test]
    fn invalid_laps_can_still_be_flagged_as_outliers() {
        let mut slow_pit_out = timed_lap(3, 200.0);
        slow_pit_out.is_pit_out_lap = true;

        let classified = classify(&[timed_lap(1, 90.0), timed_lap(2, 91.0), slow_pit_out]);
        assert!(!classified[2].is_valid);
        assert!(classified[2].is_outlier);
    }

    #[test]
    fn no_valid_laps_means_no_outliers() {
        let laps = vec![
            Lap { lap_number: 1, lap_duration: Some(500.0), is_pit_out_lap: true, ..Default::default() },
            Lap { lap_number: 2, lap_duration: None, ..Default::default() },
        ];
        let classified = classify(&laps);
        assert!(classified.iter().all(|l| !l.is_outlier));
    }

    #[test]
    fn segment_codes_translate_per_mini_sector() {
        let lap = Lap {
            segments_sector_1: vec![Some(2048), Some(2049), Some(2051), Some(0), None],
            ..timed_lap(1, 90.0)
        };
        let classified = classify(&[lap]);

        use SegmentStatus::*;
        assert_eq!(classified[0].segments_sector_1, vec![Yellow, Green, Purple, Unknown, Unknown]);
    }

    #[test]
    fn best_lap_takes_the_minimum_duration() {
        let laps = vec![timed_lap(1, 92.0), timed_lap(2, 90.5), timed_lap(3, 91.0)];
        let best = best_lap(&laps).unwrap();
        assert_eq!(best.lap_number, 2);
    }

    #[test]
    fn best_lap_skips_untimed_laps_instead_of_aborting() {
        let laps = vec![
            timed_lap(1, 91.0),
            Lap { lap_number: 2, lap_duration: None, ..Default::default() },
            timed_lap(3, 90.0),
        ];
        let best = best_lap(&laps).unwrap();
        assert_eq!(best.lap_number, 3);
    }

    #[test]
    fn best_lap_of_nothing_is_none() {
        assert!(best_lap(&[]).is_none());
        let untimed = vec![Lap { lap_number: 1, lap_duration: None, ..Default::default() }];
        assert!(best_lap(&untimed).is_none());
    }

    #[test]
    fn best_lap_tie_keeps_the_earlier_lap() {
        let laps = vec![timed_lap(5, 90.0), timed_lap(7, 90.0)];
        assert_eq!(best_lap(&laps).unwrap().lap_number, 5);
    }

    #[test]
    fn even_lap_counts_take_the_mean_of_the_middle_pair() {
        let laps =
            vec![timed_lap(1, 90.0), timed_lap(2, 92.0), timed_lap(3, 94.0), timed_lap(4, 96.0)];
        let valid = valid_laps(&laps);
        // median (92 + 94) / 2 = 93, threshold 97.65
        let threshold = outlier_threshold(&valid).unwrap();
        assert!((threshold - 97.65).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn classify_always_preserves_length_and_numbers(
            durations in prop::collection::vec(60.0f64..200.0, 0..30)
        ) {
            let laps: Vec<Lap> = durations
                .iter()
                .enumerate()
                .map(|(i, d)| timed_lap(i as u32 + 1, *d))
                .collect();
            let classified = classify(&laps);

            prop_assert_eq!(classified.len(), laps.len());
            for (lap, report) in laps.iter().zip(&classified) {
                prop_assert_eq!(lap.lap_number, report.lap_number);
            }
        }

        #[test]
        fn threshold_scales_linearly_with_the_durations(
            durations in prop::collection::vec(60.0f64..200.0, 1..20),
            scale in 0.5f64..4.0
        ) {
            let base: Vec<Lap> = durations
                .iter()
                .enumerate()
                .map(|(i, d)| timed_lap(i as u32 + 1, *d))
                .collect();
            let scaled: Vec<Lap> = durations
                .iter()
                .enumerate()
                .map(|(i, d)| timed_lap(i as u32 + 1, *d * scale))
                .collect();

            let base_threshold = outlier_threshold(&valid_laps(&base)).unwrap();
            let scaled_threshold = outlier_threshold(&valid_laps(&scaled)).unwrap();

            let expected = base_threshold * scale;
            prop_assert!((scaled_threshold - expected).abs() <= expected.abs() * 1e-12 + 1e-12);
        }
    }
}
