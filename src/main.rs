//! `rosty` - add, list and remove entries in the hosts file.

use anyhow::Result;
use clap::Parser;

use rosty::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let exit_code = rosty::engine::run(cli, stdin.lock(), std::io::stdout().lock())?;
    std::process::exit(exit_code);
}
