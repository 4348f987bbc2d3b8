//! Command-line options for both tools.

use std::ffi::OsString;

use clap::Parser;

use crate::decimal::Decimal;

/// Add a Faculty participant to the ledger.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "make_faculty")]
pub struct FacultyArgs {
    /// Participant id
    #[arg(short, long)]
    pub id: String,

    #[arg(short, long = "firstName", default_value = "")]
    pub first_name: String,

    #[arg(short, long = "lastName", default_value = "")]
    pub last_name: String,

    /// Opening balance
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub balance: Decimal,

    /// Department
    #[arg(short, long, default_value = "")]
    pub dept: String,
}

/// Export the transfers a participant sent to a CSV report.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "participant_history")]
pub struct HistoryArgs {
    /// Participant id, without namespace
    #[arg(short, long)]
    pub id: String,
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation<T> {
    Run(T),
    /// Invoked with no arguments at all: show usage and stop.
    Usage,
}

/// Parse `args` (program name first) into `T`.
///
/// `--help` and malformed input come back as a [`clap::Error`]; calling
/// `exit()` on it prints the right text and exits 0 or 2 respectively.
pub fn parse_from<T, I, S>(args: I) -> Result<Invocation<T>, clap::Error>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Ok(Invocation::Usage);
    }
    T::try_parse_from(args).map(Invocation::Run)
}
