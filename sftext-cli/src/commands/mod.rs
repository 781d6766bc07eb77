use clap::Subcommand;
use std::path::PathBuf;

pub mod batch;
pub mod convert;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert one file between binary and JSON
    Convert {
        /// Source file
        #[arg(short, long)]
        source: PathBuf,

        /// Destination file (defaults to source with .json added or removed)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Format override: ctx, quests, dialogues, or glossary
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Convert every recognized file in a directory
    Batch {
        /// Directory holding the game data files
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory
        #[arg(short, long)]
        destination: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                format,
            } => convert::execute(source, destination.as_deref(), format.as_deref()),
            Commands::Batch {
                source,
                destination,
            } => batch::execute(source, destination),
        }
    }
}
