use crate::export::model::LogExport;
use csv::Writer;

/// Write the log rows as CSV to the given path.
pub fn write_csv(path: &str, rows: &[LogExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["tracker", "date", "timezone", "canonical_utc", "accomplished"])?;

    for row in rows {
        wtr.write_record(&[
            row.tracker.clone(),
            row.date.clone(),
            row.timezone.clone(),
            row.canonical_utc.clone(),
            row.accomplished.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
