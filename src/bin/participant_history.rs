//! Export the transfers a participant sent to `../../Reports/transactionReport.csv`.
//!
//! Usage: `participant_history -i <id>`

use std::process;

use clap::CommandFactory;
use hawkoin_cli::{EXIT_OK, EXIT_TRANSPORT, HistoryArgs, Invocation, LedgerConfig, cli, logging};

#[tokio::main]
async fn main() {
    logging::init_logging();

    let args = match cli::parse_from::<HistoryArgs, _, _>(std::env::args_os()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Usage) => {
            println!("{}", HistoryArgs::command().render_usage());
            process::exit(EXIT_OK);
        }
        Err(e) => e.exit(),
    };

    match hawkoin_cli::participant_history(&LedgerConfig::default(), &args, std::io::stdout()).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::error!("failed to write to stdout: {}", e);
            process::exit(EXIT_TRANSPORT);
        }
    }
}
