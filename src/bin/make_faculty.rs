//! Add a Faculty participant to the ledger.
//!
//! Usage: `make_faculty -i <id> -f <firstName> -l <lastName> -b <balance> -d <dept>`

use std::process;

use clap::CommandFactory;
use hawkoin_cli::{EXIT_OK, EXIT_TRANSPORT, FacultyArgs, Invocation, LedgerConfig, cli, logging};

#[tokio::main]
async fn main() {
    logging::init_logging();

    let args = match cli::parse_from::<FacultyArgs, _, _>(std::env::args_os()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Usage) => {
            println!("{}", FacultyArgs::command().render_usage());
            process::exit(EXIT_OK);
        }
        Err(e) => e.exit(),
    };

    match hawkoin_cli::make_faculty(&LedgerConfig::default(), &args, std::io::stdout()).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::error!("failed to write to stdout: {}", e);
            process::exit(EXIT_TRANSPORT);
        }
    }
}
