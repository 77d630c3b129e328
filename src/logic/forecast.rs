//! Buckets 3-hour forecast samples into per-day summaries.

use super::calculations::{round_half_up, round_to_tenth};
use crate::models::{DailySummary, ForecastSample};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

/// Number of days shown in the forecast strip
pub const FORECAST_DAYS: usize = 7;

/// Group samples by calendar date and keep the first [`FORECAST_DAYS`] dates
/// in order of first appearance.
///
/// The first sample of a day provides its description, icon and humidity.
/// Later samples only widen the min/max range and add to the rainfall.
/// Temperatures are rounded to whole degrees and rainfall to one decimal.
pub fn aggregate(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut days: Vec<DailySummary> = Vec::with_capacity(FORECAST_DAYS);

    for sample in samples {
        match index.get(sample.date.as_str()).copied() {
            Some(i) => {
                let day = &mut days[i];
                day.temp_min = day.temp_min.min(sample.temp_min);
                day.temp_max = day.temp_max.max(sample.temp_max);
                day.rainfall_mm += sample.rainfall_mm;
            }
            // Dates past the cutoff can never be emitted
            None if days.len() < FORECAST_DAYS => {
                index.insert(sample.date.as_str(), days.len());
                days.push(seed_day(sample));
            }
            None => {}
        }
    }

    tracing::debug!(
        samples = samples.len(),
        days = days.len(),
        "Aggregated forecast"
    );

    days.into_iter()
        .map(|mut day| {
            day.temp_min = round_half_up(day.temp_min);
            day.temp_max = round_half_up(day.temp_max);
            day.rainfall_mm = round_to_tenth(day.rainfall_mm);
            day
        })
        .collect()
}

fn seed_day(sample: &ForecastSample) -> DailySummary {
    DailySummary {
        date: sample.date.clone(),
        day_name: day_name(sample),
        temp_min: sample.temp_min,
        temp_max: sample.temp_max,
        rainfall_mm: sample.rainfall_mm,
        humidity: sample.humidity,
        description: sample.description.clone(),
        icon: sample.icon.clone(),
    }
}

/// Three-letter English weekday of the sample's timestamp in UTC
fn day_name(sample: &ForecastSample) -> String {
    if let Some(dt) = DateTime::<Utc>::from_timestamp(sample.timestamp, 0) {
        return dt.format("%a").to_string();
    }
    NaiveDate::parse_from_str(&sample.date, "%Y-%m-%d")
        .map(|d| d.format("%a").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-06-01 00:00:00 UTC, a Saturday
    const JUNE_1: i64 = 1_717_200_000;
    const DAY: i64 = 86_400;

    fn sample(timestamp: i64, temp_min: f64, temp_max: f64, rain: f64) -> ForecastSample {
        ForecastSample {
            timestamp,
            date: ForecastSample::date_from_timestamp(timestamp).unwrap(),
            temp_min,
            temp_max,
            humidity: 60.0,
            rainfall_mm: rain,
            description: "clear sky".into(),
            icon: "01d".into(),
        }
    }

    #[test]
    fn merges_samples_of_one_day() {
        let samples = vec![
            sample(JUNE_1, 20.0, 28.0, 1.2),
            sample(JUNE_1 + 3 * 3600, 18.0, 30.0, 0.5),
        ];
        let days = aggregate(&samples);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2024-06-01");
        assert_eq!(days[0].day_name, "Sat");
        assert_eq!(days[0].temp_min, 18.0);
        assert_eq!(days[0].temp_max, 30.0);
        assert_eq!(days[0].rainfall_mm, 1.7);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn keeps_first_seven_dates() {
        let samples: Vec<ForecastSample> = (0..10)
            .flat_map(|d| {
                let start = JUNE_1 + d * DAY;
                vec![sample(start, 20.0, 25.0, 0.0), sample(start + 43_200, 22.0, 31.0, 0.0)]
            })
            .collect();
        let days = aggregate(&samples);

        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2024-06-01",
                "2024-06-02",
                "2024-06-03",
                "2024-06-04",
                "2024-06-05",
                "2024-06-06",
                "2024-06-07"
            ]
        );
        assert!(days.iter().all(|d| d.temp_min == 20.0 && d.temp_max == 31.0));
    }

    #[test]
    fn late_samples_still_update_kept_days() {
        let mut samples: Vec<ForecastSample> = (0..8)
            .map(|d| sample(JUNE_1 + d * DAY, 20.0, 25.0, 0.0))
            .collect();
        samples.push(sample(JUNE_1 + 3600, 15.0, 33.0, 2.0));
        let days = aggregate(&samples);

        assert_eq!(days.len(), FORECAST_DAYS);
        assert_eq!(days[0].temp_min, 15.0);
        assert_eq!(days[0].temp_max, 33.0);
        assert_eq!(days[0].rainfall_mm, 2.0);
    }

    #[test]
    fn interleaved_dates_keep_first_seen_order() {
        let samples = vec![
            sample(JUNE_1 + DAY, 21.0, 26.0, 0.0),
            sample(JUNE_1, 19.0, 27.0, 0.0),
            sample(JUNE_1 + DAY + 3600, 17.0, 29.0, 0.0),
        ];
        let days = aggregate(&samples);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2024-06-02");
        assert_eq!(days[0].temp_min, 17.0);
        assert_eq!(days[0].temp_max, 29.0);
        assert_eq!(days[1].date, "2024-06-01");
    }

    #[test]
    fn first_sample_wins_for_description_icon_humidity() {
        let mut first = sample(JUNE_1, 20.0, 28.0, 0.0);
        first.description = "light rain".into();
        first.icon = "10d".into();
        first.humidity = 85.0;
        let mut second = sample(JUNE_1 + 3600, 22.0, 29.0, 0.0);
        second.description = "clear sky".into();
        second.icon = "01d".into();
        second.humidity = 40.0;

        let days = aggregate(&[first, second]);
        assert_eq!(days[0].description, "light rain");
        assert_eq!(days[0].icon, "10d");
        assert_eq!(days[0].humidity, 85.0);
    }

    #[test]
    fn min_max_rain_do_not_depend_on_order() {
        let samples = vec![
            sample(JUNE_1, 20.0, 28.0, 1.2),
            sample(JUNE_1 + 3600, 18.0, 30.0, 0.5),
            sample(JUNE_1 + 7200, 23.0, 26.0, 0.3),
        ];
        let mut reversed = samples.clone();
        reversed.reverse();

        let a = &aggregate(&samples)[0];
        let b = &aggregate(&reversed)[0];
        assert_eq!(a.temp_min, b.temp_min);
        assert_eq!(a.temp_max, b.temp_max);
        assert_eq!(a.rainfall_mm, b.rainfall_mm);
        assert_eq!(a.rainfall_mm, 2.0);
    }

    #[test]
    fn one_sample_per_day_is_idempotent() {
        let samples: Vec<ForecastSample> = (0..5)
            .map(|d| sample(JUNE_1 + d * DAY, 20.0 + d as f64, 30.0 + d as f64, 1.5))
            .collect();
        let once = aggregate(&samples);

        let again: Vec<ForecastSample> = once
            .iter()
            .zip(&samples)
            .map(|(day, s)| ForecastSample {
                timestamp: s.timestamp,
                date: day.date.clone(),
                temp_min: day.temp_min,
                temp_max: day.temp_max,
                humidity: day.humidity,
                rainfall_mm: day.rainfall_mm,
                description: day.description.clone(),
                icon: day.icon.clone(),
            })
            .collect();
        assert_eq!(aggregate(&again), once);
    }

    #[test]
    fn rounds_temperatures_half_up() {
        let days = aggregate(&[sample(JUNE_1, 20.5, 29.4, 0.04)]);
        assert_eq!(days[0].temp_min, 21.0);
        assert_eq!(days[0].temp_max, 29.0);
        assert_eq!(days[0].rainfall_mm, 0.0);
    }

    #[test]
    fn weekday_comes_from_timestamp() {
        let days = aggregate(&[
            sample(JUNE_1 + DAY, 20.0, 25.0, 0.0),
            sample(JUNE_1 + 2 * DAY, 20.0, 25.0, 0.0),
        ]);
        assert_eq!(days[0].day_name, "Sun");
        assert_eq!(days[1].day_name, "Mon");
    }
}
