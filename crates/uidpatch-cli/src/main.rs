// crates/uidpatch-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod session;

#[derive(Parser)]
#[command(name = "uidpatch-cli")]
#[command(about = "Edit the marker-delimited varint id inside opaque blobs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Locate the embedded id field and report it
    Detect(cmd::detect::DetectArgs),

    /// Rewrite the id field to a new value
    Set(cmd::set::SetArgs),

    /// Zero the id field (shorthand for set --value 0)
    Clear(cmd::clear::ClearArgs),

    /// Report fingerprints and hex context around the id field
    Inspect(cmd::inspect::InspectArgs),

    /// Interactive edit session (load/update/clear over stdin)
    Session(cmd::session::SessionArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Detect(args) => cmd::detect::run(args),
        Commands::Set(args) => cmd::set::run(args),
        Commands::Clear(args) => cmd::clear::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Session(args) => cmd::session::run(args),
    }
}
