use super::percentage;
use super::trend::LinearTrend;
use crate::dataset::LaunchRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Launch activity for a single calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyAggregate {
    pub year: i32,
    pub launch_count: usize,
    pub success_count: usize,
    pub total_payload: f64,
    pub successful_payload: f64,
    pub success_rate: f64,
}

/// Per-year aggregates in ascending year order.
///
/// Records whose date segment cannot be parsed have no year; they are left
/// out of `points` and counted in `undated`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    pub points: Vec<YearlyAggregate>,
    pub undated: usize,
}

#[derive(Default)]
struct YearAccumulator {
    launch_count: usize,
    success_count: usize,
    total_payload: f64,
    successful_payload: f64,
}

impl TimeSeries {
    pub fn by_year(records: &[LaunchRecord]) -> Self {
        let mut years: BTreeMap<i32, YearAccumulator> = BTreeMap::new();
        let mut undated = 0;

        for record in records {
            let Some(year) = record.year() else {
                undated += 1;
                continue;
            };

            let mass = record.payload_mass_or_zero();
            let bucket = years.entry(year).or_default();
            bucket.launch_count += 1;
            bucket.total_payload += mass;
            if record.is_success() {
                bucket.success_count += 1;
                bucket.successful_payload += mass;
            }
        }

        let points = years
            .into_iter()
            .map(|(year, bucket)| YearlyAggregate {
                year,
                launch_count: bucket.launch_count,
                success_count: bucket.success_count,
                total_payload: bucket.total_payload,
                successful_payload: bucket.successful_payload,
                success_rate: percentage(bucket.success_count, bucket.launch_count),
            })
            .collect();

        Self { points, undated }
    }

    pub fn successful_payloads(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|point| point.successful_payload)
            .collect()
    }

    /// OLS fit of successful payload mass against the series index.
    pub fn payload_trend(&self) -> Option<LinearTrend> {
        LinearTrend::fit(&self.successful_payloads())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
