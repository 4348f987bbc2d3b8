//! CSV export of a participant's transfer history.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::transfer::HistoryRow;

/// Write rows as CSV. The header goes out with the first row, so no rows
/// means no output at all.
pub fn write_history_csv<W: Write>(rows: &[HistoryRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Create or truncate the report at `path` and write `rows` into it.
pub fn export_history<P: AsRef<Path>>(rows: &[HistoryRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_history_csv(rows, file)?;
    info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
