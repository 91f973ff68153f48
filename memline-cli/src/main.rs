mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use memline_core::config::MemlineConfig;
use memline_core::date_range::DateRange;

#[derive(Parser)]
#[command(name = "memline")]
#[command(about = "Keep a photo timeline in a spreadsheet and render it for the timeline widget")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the filtered timeline document as JSON
    Show {
        /// Only include events with this tag (repeatable; "All" disables tag filtering)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Include events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Include events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Add a new event (missing fields are prompted)
    Add {
        #[arg(long)]
        headline: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Path to the image to upload
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Caption for the uploaded image
        #[arg(long)]
        caption: Option<String>,

        /// Event date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Tag for the event (skips the tag prompt)
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// List the distinct tags across all events
    Tags,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing or incomplete configuration is the one fatal startup condition
    let config = MemlineConfig::load()?;

    match cli.command {
        Commands::Show { tag, from, to, out } => {
            let range = DateRange::from_args(from.as_deref(), to.as_deref())
                .map_err(|e| anyhow::anyhow!(e))?;
            commands::show::run(&config, tag, range, out).await
        }
        Commands::Add {
            headline,
            description,
            image,
            caption,
            date,
            tag,
        } => {
            let args = commands::add::AddArgs {
                headline,
                description,
                image,
                caption,
                date,
                tag,
            };
            commands::add::run(&config, args).await
        }
        Commands::Tags => commands::tags::run(&config).await,
    }
}
