//! Per-stint aggregation: best lap, mean pace, consistency, degradation.

use super::laps::{best_lap, valid_laps};
use super::report::StintAnalytics;
use crate::records::{Lap, Stint};

/// Aggregate stint metrics from a driver's stints and full lap set.
///
/// Valid laps are selected over the whole lap set, then partitioned by each
/// stint's inclusive `[lap_start, lap_end]` range. The result is sorted
/// ascending by stint number regardless of input order.
pub fn aggregate(stints: &[Stint], laps: &[Lap]) -> Vec<StintAnalytics> {
    let valid = valid_laps(laps);

    let mut reports: Vec<StintAnalytics> = stints
        .iter()
        .map(|stint| {
            let stint_laps: Vec<&Lap> = valid
                .iter()
                .copied()
                .filter(|lap| lap.lap_number >= stint.lap_start && lap.lap_number <= stint.lap_end)
                .collect();
            let durations: Vec<f64> =
                stint_laps.iter().filter_map(|lap| lap.lap_duration).collect();

            StintAnalytics {
                stint_number: stint.stint_number,
                compound: stint.compound.clone(),
                tyre_age_at_start: stint.tyre_age_at_start,
                lap_start: stint.lap_start,
                lap_end: stint.lap_end,
                lap_count: stint.lap_end - stint.lap_start + 1,
                best_lap_duration: best_lap(stint_laps.iter().copied())
                    .and_then(|lap| lap.lap_duration),
                avg_lap_duration: mean(&durations).map(round3),
                tyre_lap_degradation: degradation_slope(&stint_laps).map(round3),
                consistency: population_std_dev(&durations).map(round3),
            }
        })
        .collect();

    reports.sort_by_key(|report| report.stint_number);
    reports
}

/// Arithmetic mean; `None` for an empty set rather than a NaN division.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation; `None` below two samples, where spread
/// has no meaning.
fn population_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Slope of the least-squares fit of lap time against absolute lap number.
///
/// `None` below two points. A zero denominator (every point sharing one lap
/// number) yields a slope of 0 instead of a division error.
fn degradation_slope(laps: &[&Lap]) -> Option<f64> {
    if laps.len() < 2 {
        return None;
    }

    let n = laps.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for lap in laps {
        let x = f64::from(lap.lap_number);
        let y = lap.lap_duration.unwrap_or_default();
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Some(0.0);
    }
    Some((n * sum_xy - sum_x * sum_y) / denominator)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
