use std::path::PathBuf;

use colored::Colorize;

use fourier_server::{FourierServer, ServerConfig, DEFAULT_PORT};
use fourier_store::{read_status, DatabaseStore, FileStore, StorageLayout};

use crate::cli::{Cli, Command, DatabasesArgs, RunArgs, StatusArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run(args) => cmd_run(args),
        Command::Databases(args) => cmd_databases(args),
        Command::Status(args) => cmd_status(args),
    }
}

fn storage_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(StorageLayout::default_root)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    println!(
        "{}",
        format!("Starting FourierDB server on port {}", args.port).green()
    );
    println!(
        "{}",
        format!("FourierDB running on port {} ✓", args.port)
            .green()
            .bold()
    );
    let config = ServerConfig {
        port: args.port,
        root: storage_root(args.root),
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(FourierServer::new(config).serve())?;
    Ok(())
}

fn cmd_databases(args: DatabasesArgs) -> anyhow::Result<()> {
    let store = FileStore::open(StorageLayout::from_root(storage_root(args.root)))?;
    let names = store.list()?;
    println!(
        "You currently have {} databases",
        names.len().to_string().bright_cyan()
    );
    for (position, name) in names.iter().enumerate() {
        println!("{}. {}", (position + 1).to_string().yellow(), name);
    }
    Ok(())
}

fn cmd_status(args: StatusArgs) -> anyhow::Result<()> {
    let layout = StorageLayout::from_root(storage_root(args.root));
    match read_status(&layout)? {
        Some(record) if record.server => {
            println!("You have a FourierDB server running {}", "✓".green());
            if let Some(port) = record.port {
                println!("Running on port {}", port.to_string().bright_cyan());
            }
        }
        _ => {
            println!("You do not currently have a FourierDB server running");
            println!(
                "{} Try {} to see how to start one",
                "HINT:".yellow(),
                "fourier run --help".white().on_black()
            );
            println!(
                "{} The default port is {}",
                "HINT:".yellow(),
                DEFAULT_PORT.to_string().bright_cyan()
            );
        }
    }
    Ok(())
}
