use super::percentage;
use crate::dataset::LaunchRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Categorical record fields a breakdown can group on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    Rocket,
    LaunchSite,
    Orbit,
    Outcome,
}

impl CategoryField {
    pub const fn ordered() -> [Self; 4] {
        [Self::Rocket, Self::LaunchSite, Self::Orbit, Self::Outcome]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rocket => "Rocket",
            Self::LaunchSite => "Launch Site",
            Self::Orbit => "Orbit",
            Self::Outcome => "Outcome",
        }
    }

    pub fn extract(self, record: &LaunchRecord) -> &str {
        match self {
            Self::Rocket => record.rocket_label(),
            Self::LaunchSite => record.site_label(),
            Self::Orbit => record.orbit_label(),
            Self::Outcome => record.outcome_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub category: String,
    pub total: usize,
    pub success: usize,
}

impl CategoryEntry {
    pub fn success_rate(&self) -> f64 {
        percentage(self.success, self.total)
    }
}

/// Ordering applied to a breakdown after it has been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakdownOrder {
    #[default]
    FirstSeen,
    Name,
    Total,
    Success,
    SuccessRate,
}

/// Per-category launch and success counts, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    entries: Vec<CategoryEntry>,
}

impl CategoryBreakdown {
    pub fn by_field(records: &[LaunchRecord], field: CategoryField) -> Self {
        Self::by(records, |record| field.extract(record))
    }

    pub fn by<F>(records: &[LaunchRecord], extract: F) -> Self
    where
        F: Fn(&LaunchRecord) -> &str,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<CategoryEntry> = Vec::new();

        for record in records {
            let key = extract(record);
            let position = match index.get(key) {
                Some(position) => *position,
                None => {
                    index.insert(key.to_string(), entries.len());
                    entries.push(CategoryEntry {
                        category: key.to_string(),
                        total: 0,
                        success: 0,
                    });
                    entries.len() - 1
                }
            };

            let entry = &mut entries[position];
            entry.total += 1;
            if record.is_success() {
                entry.success += 1;
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn get(&self, category: &str) -> Option<&CategoryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count-based orders are descending; ties keep first-occurrence order.
    pub fn sorted(mut self, order: BreakdownOrder) -> Self {
        match order {
            BreakdownOrder::FirstSeen => {}
            BreakdownOrder::Name => self.entries.sort_by(|a, b| a.category.cmp(&b.category)),
            BreakdownOrder::Total => self.entries.sort_by(|a, b| b.total.cmp(&a.total)),
            BreakdownOrder::Success => self.entries.sort_by(|a, b| b.success.cmp(&a.success)),
            BreakdownOrder::SuccessRate => self
                .entries
                .sort_by(|a, b| b.success_rate().total_cmp(&a.success_rate())),
        }
        self
    }
}

/// One slice of the orbital distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitSummary {
    pub orbit: String,
    pub count: usize,
    pub success_rate: f64,
}

pub fn orbit_summary(records: &[LaunchRecord]) -> Vec<OrbitSummary> {
    CategoryBreakdown::by_field(records, CategoryField::Orbit)
        .entries
        .into_iter()
        .map(|entry| OrbitSummary {
            success_rate: entry.success_rate(),
            orbit: entry.category,
            count: entry.total,
        })
        .collect()
}
