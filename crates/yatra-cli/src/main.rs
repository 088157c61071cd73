use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "yatra")]
#[command(about = "Yatra - conversational rail and air booking assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the booking assistant on stdin/stdout
    Chat {
        /// Directory for persisted bookings (in-memory when omitted)
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Station/airport reference data file (built-in tables when omitted)
        #[arg(long)]
        reference: Option<PathBuf>,
        /// Sender identity for the session
        #[arg(long, default_value = "local")]
        sender: String,
    },
    /// List persisted bookings
    Bookings {
        /// Directory the bookings were persisted to (default: ~/.yatra/bookings)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            data_dir,
            reference,
            sender,
        } => commands::chat::run(data_dir, reference, sender).await?,
        Commands::Bookings { data_dir } => commands::bookings::run(data_dir).await?,
    }

    Ok(())
}
