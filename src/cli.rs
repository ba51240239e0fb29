use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Configuration file (toml, yaml or json), layered over the user's.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging; repeat for more detail. Ignored when RUST_LOG is set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a Mihon .tachibk backup into a Kotatsu archive.
    MihonToKotatsu(ConvertArgs),
    /// Convert a Kotatsu archive into a Mihon .tachibk backup.
    KotatsuToMihon(ConvertArgs),
    /// Summarize a Mihon backup and point out common problems.
    Inspect(InputArgs),
    /// List the sources registered in a Mihon backup.
    Sources(InputArgs),
    /// Compute the Mihon id of a source.
    SourceId(SourceIdArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Destination; replaced if it exists.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Mihon backup (.tachibk), gzipped or raw.
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct SourceIdArgs {
    /// Source name as Mihon shows it, or a Kotatsu source key.
    pub name: String,

    #[arg(long, default_value = "all")]
    pub lang: String,

    #[arg(long = "version", value_name = "VERSION", default_value_t = 1)]
    pub source_version: u32,
}
