//! Command-line clients for the HawKoin ledger REST API.
//!
//! This crate backs two tools: `make_faculty`, which adds a Faculty participant
//! to the ledger, and `participant_history`, which exports the transfers a
//! participant sent to a CSV report. Each tool is a single request followed by
//! a console message; nothing is cached between runs.
//!
//! # Example
//!
//! ```no_run
//! use hawkoin_cli::{HistoryArgs, LedgerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let args = HistoryArgs { id: "42".to_string() };
//!     let code = hawkoin_cli::participant_history(&LedgerConfig::default(), &args, std::io::stdout()).await?;
//!     std::process::exit(code)
//! }
//! ```

use std::io::{self, Write};

pub mod cli;
mod client;
mod config;
mod decimal;
mod error;
pub mod logging;
mod participant;
mod report;
mod transfer;

pub use cli::{FacultyArgs, HistoryArgs, Invocation};
pub use client::{LedgerClient, Reply};
pub use config::{LedgerConfig, NAMESPACE};
pub use decimal::{Decimal, ParseDecimalError};
pub use error::{EXIT_OK, EXIT_TRANSPORT, EXIT_USAGE, Error, ErrorKind, Result};
pub use participant::{ContactInfo, ParticipantRecord, SubmitOutcome};
pub use report::{export_history, write_history_csv};
pub use transfer::{HistoryRow, TransferRecord, participant_id};

const SUBMIT_FAILED: &str = "*** ERROR *** Unable to post user";
const QUERY_FAILED: &str = "Could not perform query";

/// Submit a new Faculty participant and report the ledger's answer to `out`.
///
/// Returns the process exit code.
pub async fn make_faculty<W: Write>(
    config: &LedgerConfig,
    args: &FacultyArgs,
    mut out: W,
) -> io::Result<i32> {
    match submit_faculty(config, args).await {
        Ok(SubmitOutcome::Created(id)) => {
            writeln!(out, "Successfully added Faculty {}", id)?;
            Ok(EXIT_OK)
        }
        Ok(SubmitOutcome::Rejected(message)) => {
            writeln!(out, "{}", message)?;
            Ok(EXIT_OK)
        }
        Err(e) => report_failure(&e, SUBMIT_FAILED, &mut out),
    }
}

/// Export the transfers sent by `args.id` to the configured report path.
///
/// Nothing is printed on success. Returns the process exit code.
pub async fn participant_history<W: Write>(
    config: &LedgerConfig,
    args: &HistoryArgs,
    mut out: W,
) -> io::Result<i32> {
    match export_participant_history(config, args).await {
        Ok(_) => Ok(EXIT_OK),
        Err(e) => report_failure(&e, QUERY_FAILED, &mut out),
    }
}

async fn submit_faculty(config: &LedgerConfig, args: &FacultyArgs) -> Result<SubmitOutcome> {
    let client = LedgerClient::new(config)?;
    let record = ParticipantRecord::faculty(args);
    participant::submit(&client, &record).await
}

/// Returns the number of rows written.
async fn export_participant_history(config: &LedgerConfig, args: &HistoryArgs) -> Result<usize> {
    let client = LedgerClient::new(config)?;
    let records = transfer::fetch_all(&client).await?;
    let rows = transfer::sent_by(&records, &args.id)?;
    export_history(&rows, &config.report_path)?;
    Ok(rows.len())
}

/// Log the full failure, print the terse console line, pick the exit code.
fn report_failure<W: Write>(err: &Error, fallback: &str, out: &mut W) -> io::Result<i32> {
    tracing::error!("{:?}: {}", err.kind(), err.chain());
    match err.kind() {
        ErrorKind::Timeout => writeln!(out, "***Error***: Timeout")?,
        ErrorKind::TooManyRedirects => writeln!(out, "***Error***: URL is bad")?,
        ErrorKind::TransportError => writeln!(out, "{}", err)?,
        ErrorKind::ParseError | ErrorKind::Other => writeln!(out, "{}", fallback)?,
    }
    Ok(err.exit_code())
}
