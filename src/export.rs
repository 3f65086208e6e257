use crate::analytics::{mission_points, MissionPoint, TimeSeries, YearlyAggregate};
use crate::dataset::LaunchDataset;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open export destination: {0}")]
    Io(#[from] std::io::Error),
}

/// Tables that can be exported as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTable {
    Yearly,
    Missions,
}

impl ExportTable {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Missions => "missions",
        }
    }
}

/// Writes `table` as CSV: a header row of field names, then one row per
/// aggregate. Returns the number of data rows written.
pub fn export_table<W: Write>(
    table: ExportTable,
    dataset: &LaunchDataset,
    writer: W,
) -> Result<usize, ExportError> {
    match table {
        ExportTable::Yearly => export_yearly(&TimeSeries::by_year(dataset.records()).points, writer),
        ExportTable::Missions => export_missions(&mission_points(dataset.records()), writer),
    }
}

pub fn export_table_to_path<P: AsRef<Path>>(
    table: ExportTable,
    dataset: &LaunchDataset,
    path: P,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let rows = export_table(table, dataset, file)?;
    info!(table = table.label(), rows, path = %path.display(), "csv export written");
    Ok(rows)
}

pub fn export_yearly<W: Write>(
    points: &[YearlyAggregate],
    writer: W,
) -> Result<usize, ExportError> {
    write_rows(points, writer)
}

pub fn export_missions<W: Write>(
    points: &[MissionPoint],
    writer: W,
) -> Result<usize, ExportError> {
    write_rows(points, writer)
}

fn write_rows<T: Serialize, W: Write>(rows: &[T], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}
