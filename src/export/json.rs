use crate::export::model::LogExport;

/// Write the log rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[LogExport]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| std::io::Error::other(format!("serialize export: {e}")))?;
    std::fs::write(path, json)
}
