use crate::dataset::LaunchRecord;
use serde::Serialize;

/// A single point of the payload-versus-launch-number scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionPoint {
    pub launch_no: Option<u32>,
    pub date: String,
    pub payload_mass: f64,
    pub success: bool,
    pub rocket: String,
}

impl MissionPoint {
    pub fn from_record(record: &LaunchRecord) -> Self {
        Self {
            launch_no: record.launch_number(),
            date: record.date_part().to_string(),
            payload_mass: record.payload_mass_or_zero(),
            success: record.is_success(),
            rocket: record.rocket_label().to_string(),
        }
    }
}

pub fn mission_points(records: &[LaunchRecord]) -> Vec<MissionPoint> {
    records.iter().map(MissionPoint::from_record).collect()
}
