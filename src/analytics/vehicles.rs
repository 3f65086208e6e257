use super::percentage;
use crate::dataset::LaunchRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Launch count, payload and reliability of one rocket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocketStats {
    pub name: String,
    pub launches: usize,
    pub successes: usize,
    pub total_payload: f64,
    pub success_rate: f64,
}

/// Rocket statistics in first-occurrence order.
pub fn rocket_statistics(records: &[LaunchRecord]) -> Vec<RocketStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<RocketStats> = Vec::new();

    for record in records {
        let name = record.rocket_label();
        let position = *index.entry(name).or_insert_with(|| {
            stats.push(RocketStats {
                name: name.to_string(),
                launches: 0,
                successes: 0,
                total_payload: 0.0,
                success_rate: 0.0,
            });
            stats.len() - 1
        });

        let entry = &mut stats[position];
        entry.launches += 1;
        entry.total_payload += record.payload_mass_or_zero();
        if record.is_success() {
            entry.successes += 1;
        }
    }

    for entry in &mut stats {
        entry.success_rate = percentage(entry.successes, entry.launches);
    }

    stats
}
