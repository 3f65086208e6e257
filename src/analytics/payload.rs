use crate::dataset::LaunchRecord;
use serde::Serialize;

/// Launcher lineages tracked by the delivered-payload card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleFamily {
    Pslv,
    GslvMk1,
    GslvMk2,
    Lvm3,
}

impl VehicleFamily {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pslv, Self::GslvMk1, Self::GslvMk2, Self::Lvm3]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pslv => "PSLV",
            Self::GslvMk1 => "GSLV Mk I",
            Self::GslvMk2 => "GSLV Mk II",
            Self::Lvm3 => "LVM3 / GSLV Mk III",
        }
    }

    /// GSLV variants are recognised either by rocket name or by the
    /// `"GSLV"` rocket paired with a configuration.
    pub fn classify(record: &LaunchRecord) -> Option<Self> {
        let rocket = record.rocket.as_deref()?;
        let configuration = record.configuration.as_deref();
        match (rocket, configuration) {
            ("PSLV", _) => Some(Self::Pslv),
            ("GSLV Mk I", _) | ("GSLV", Some("Mk I")) => Some(Self::GslvMk1),
            ("GSLV Mk II", _) | ("GSLV", Some("Mk II")) => Some(Self::GslvMk2),
            ("LVM3", _) | ("GSLV Mk III", _) => Some(Self::Lvm3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyPayload {
    pub family: VehicleFamily,
    pub label: &'static str,
    pub mass: f64,
    pub formatted: String,
}

/// Payload mass placed in orbit by successful launches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveredPayload {
    pub total: f64,
    pub total_formatted: String,
    pub families: Vec<FamilyPayload>,
}

impl DeliveredPayload {
    /// Only successful launches with a known payload mass contribute.
    pub fn compute(records: &[LaunchRecord]) -> Self {
        let mut total = 0.0;
        let mut family_totals = [0.0_f64; 4];

        for record in records.iter().filter(|record| record.is_success()) {
            let Some(mass) = record.payload_mass else {
                continue;
            };
            total += mass;
            if let Some(family) = VehicleFamily::classify(record) {
                family_totals[family as usize] += mass;
            }
        }

        let families = VehicleFamily::ordered()
            .into_iter()
            .map(|family| {
                let mass = family_totals[family as usize];
                FamilyPayload {
                    family,
                    label: family.label(),
                    mass,
                    formatted: format_mass(mass),
                }
            })
            .collect();

        Self {
            total,
            total_formatted: format_mass(total),
            families,
        }
    }

    pub fn family(&self, family: VehicleFamily) -> Option<&FamilyPayload> {
        self.families.iter().find(|entry| entry.family == family)
    }
}

/// Tonnes with one decimal from 1000 kg upwards, whole kilograms below.
pub fn format_mass(mass: f64) -> String {
    if mass >= 1000.0 {
        format!("{:.1} tonnes", mass / 1000.0)
    } else {
        format!("{} kg", mass.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(
        rocket: &str,
        configuration: Option<&str>,
        mass: Option<f64>,
        outcome: &str,
    ) -> LaunchRecord {
        LaunchRecord {
            rocket: Some(rocket.to_string()),
            configuration: configuration.map(str::to_string),
            payload_mass: mass,
            launch_outcome: Some(outcome.to_string()),
            ..LaunchRecord::default()
        }
    }

    #[test]
    fn classifies_gslv_variants_by_name_or_configuration() {
        assert_eq!(
            VehicleFamily::classify(&launch("GSLV", Some("Mk I"), None, "Success")),
            Some(VehicleFamily::GslvMk1)
        );
        assert_eq!(
            VehicleFamily::classify(&launch("GSLV Mk II", None, None, "Success")),
            Some(VehicleFamily::GslvMk2)
        );
        assert_eq!(
            VehicleFamily::classify(&launch("GSLV Mk III", None, None, "Success")),
            Some(VehicleFamily::Lvm3)
        );
        assert_eq!(
            VehicleFamily::classify(&launch("GSLV", None, None, "Success")),
            None
        );
        assert_eq!(
            VehicleFamily::classify(&launch("SSLV", None, None, "Success")),
            None
        );
    }

    #[test]
    fn only_successful_launches_with_mass_count() {
        let records = vec![
            launch("PSLV", None, Some(1200.0), "Success"),
            launch("PSLV", None, Some(900.0), "Failure"),
            launch("LVM3", None, None, "Success"),
            launch("GSLV", Some("Mk II"), Some(2230.0), "Success"),
            launch("SSLV", None, Some(156.0), "Success"),
        ];
        let delivered = DeliveredPayload::compute(&records);
        assert_eq!(delivered.total, 3586.0);
        assert_eq!(delivered.total_formatted, "3.6 tonnes");
        assert_eq!(
            delivered.family(VehicleFamily::Pslv).map(|entry| entry.mass),
            Some(1200.0)
        );
        assert_eq!(
            delivered.family(VehicleFamily::Lvm3).map(|entry| entry.formatted.as_str()),
            Some("0 kg")
        );
    }

    #[test]
    fn formats_mass_with_unit_threshold() {
        assert_eq!(format_mass(999.4), "999 kg");
        assert_eq!(format_mass(156.5), "157 kg");
        assert_eq!(format_mass(1000.0), "1.0 tonnes");
        assert_eq!(format_mass(5796.0), "5.8 tonnes");
    }
}
