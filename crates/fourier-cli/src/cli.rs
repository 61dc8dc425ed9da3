use std::path::PathBuf;

use clap::{Parser, Subcommand, Args};

use fourier_server::DEFAULT_PORT;

#[derive(Parser)]
#[command(
    name = "fourier",
    about = "FourierDB, a minimal document datastore served over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start a FourierDB server
    Run(RunArgs),
    /// List the databases stored on this machine
    Databases(DatabasesArgs),
    /// Check whether a FourierDB server is running
    Status(StatusArgs),
}

#[derive(Args)]
pub struct RunArgs {
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct DatabasesArgs {
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct StatusArgs {
    #[arg(long)]
    pub root: Option<PathBuf>,
}
