use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Rotaeno Rating",
    long_about = "Tracks chart records and computes the best 30 rating for Rotaeno"
)]
pub struct Args {
    /// Song catalog JSON, as produced by the catalog update pipeline
    #[arg(short, long, env = "ROTAENO_CATALOG", help = "Path to the song catalog")]
    pub catalog: PathBuf,

    /// Read the catalog as the raw wiki song list instead of the bundled format
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub wiki_catalog: bool,

    /// Flat JSON array of chart records. Created when missing.
    #[arg(short, long, env = "ROTAENO_RECORDS", help = "Path to the stored chart records")]
    pub records: PathBuf,

    /// Cloud save or social data response to import into the stored records
    #[arg(short, long)]
    pub import: Option<PathBuf>,

    /// Overwrite the stored records with the import instead of merging
    #[arg(long, action = clap::ArgAction::SetTrue, requires = "import")]
    pub replace: bool,

    /// Write the rated records as CSV
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Skip records whose chart is missing from the catalog instead of failing
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub skip_orphans: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
