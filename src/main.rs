use anyhow::Result;
use clap::{Parser, Subcommand};
use recipebox_shared::PopularitySignal;

mod cli;

/// recipebox - recipe sharing with trending and mood recommendations
#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Recipe sharing with trending and mood based recommendations", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Print trending recipes and save new ever-top flags
    Trending {
        /// views or likes (overrides config file)
        #[arg(long)]
        signal: Option<PopularitySignal>,

        /// Number of trending recipes (overrides config file)
        #[arg(long)]
        size: Option<usize>,
    },
    /// Print recipes matching a mood
    Recommend {
        /// Adventurous, Comforting, Healthy, Indulgent or Quick
        mood: String,

        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recipebox::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    recipebox::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Serve { host, port } => cli::serve(config, host, port).await,
        Commands::Migrate => recipebox::migrate::migrate(&config).await,
        Commands::Trending { signal, size } => cli::trending(config, signal, size).await,
        Commands::Recommend { mood, limit } => cli::recommend(config, mood, limit).await,
    }
}
