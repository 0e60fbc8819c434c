use anyhow::Result;
use clap::{Parser, Subcommand};
use seismap::cli::{fetch_cmd, legend_cmd};
use seismap::config::DEFAULT_FEED_URL;

#[derive(Parser)]
#[command(name = "seismap", version, about = "Earthquake feed to classified map markers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the feed and print the classified marker list
    Fetch {
        /// Feed URL (Atom with GeoRSS extensions)
        #[arg(long, default_value = DEFAULT_FEED_URL)]
        url: String,
        /// Abort the whole load on the first malformed numeric field
        #[arg(long)]
        strict: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Fetch the feed and print the legend summary
    Legend {
        /// Feed URL (Atom with GeoRSS extensions)
        #[arg(long, default_value = DEFAULT_FEED_URL)]
        url: String,
        /// Abort the whole load on the first malformed numeric field
        #[arg(long)]
        strict: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seismap=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fetch { url, strict, json } => fetch_cmd::run(&url, strict, json).await,
        Command::Legend { url, strict, json } => legend_cmd::run(&url, strict, json).await,
    }
}
