use clap::Parser;

mod commands;
mod config;
mod trace;

use commands::Commands;

#[derive(Parser)]
#[command(name = "envhash")]
#[command(about = "Resolve which environment variables feed a task's cache key", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    trace::init()?;
    cli.command.execute()
}
