use clap::Parser;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "sftext")]
#[command(about = "SpellForce text asset toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
