use super::{mean, percentage};
use crate::dataset::LaunchRecord;
use serde::Serialize;

/// Headline statistics over a whole launch collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewStats {
    pub total_launches: usize,
    pub successful_launches: usize,
    pub success_rate: f64,
    pub average_payload: f64,
    pub payload_std_dev: f64,
    pub heaviest_payload: f64,
    pub total_payload: f64,
}

/// [`OverviewStats`] with every measure fixed to one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewDisplay {
    pub total_launches: usize,
    pub success_rate: String,
    pub average_payload: String,
    pub payload_std_dev: String,
    pub heaviest_payload: String,
    pub total_payload: String,
}

impl OverviewStats {
    pub fn compute(records: &[LaunchRecord]) -> Self {
        let payloads: Vec<f64> = records
            .iter()
            .map(LaunchRecord::payload_mass_or_zero)
            .collect();
        let successful_launches = records.iter().filter(|record| record.is_success()).count();

        let total_payload: f64 = payloads.iter().sum();
        let average_payload = mean(&payloads);
        let variance = if payloads.is_empty() {
            0.0
        } else {
            payloads
                .iter()
                .map(|mass| (mass - average_payload).powi(2))
                .sum::<f64>()
                / payloads.len() as f64
        };
        let heaviest_payload = payloads
            .iter()
            .copied()
            .reduce(f64::max)
            .unwrap_or(0.0);

        Self {
            total_launches: records.len(),
            successful_launches,
            success_rate: percentage(successful_launches, records.len()),
            average_payload,
            payload_std_dev: variance.sqrt(),
            heaviest_payload,
            total_payload,
        }
    }

    pub fn display(&self) -> OverviewDisplay {
        OverviewDisplay {
            total_launches: self.total_launches,
            success_rate: format!("{:.1}", self.success_rate),
            average_payload: format!("{:.1}", self.average_payload),
            payload_std_dev: format!("{:.1}", self.payload_std_dev),
            heaviest_payload: format!("{:.1}", self.heaviest_payload),
            total_payload: format!("{:.1}", self.total_payload),
        }
    }
}
