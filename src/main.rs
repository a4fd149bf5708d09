mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rsvp")]
#[command(about = "RSVP to Mazin's Walima and add the celebration to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the RSVP flow
    Rsvp {
        #[arg(long = "hp", hide = true, default_value = "")]
        hp: String,
    },
    /// Show the celebration details
    Details,
    /// Add the celebration to your calendar
    Calendar {
        #[command(subcommand)]
        target: CalendarTarget,
    },
}

#[derive(Subcommand)]
enum CalendarTarget {
    /// Open a pre-filled Google Calendar event in the browser
    Google,
    /// Write an .ics file for Apple Calendar and friends
    Ics {
        /// Where to write the file (defaults to the event title)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Rsvp { hp }) => commands::rsvp::run(&hp).await,
        Some(Commands::Details) => commands::details::run(),
        Some(Commands::Calendar { target }) => match target {
            CalendarTarget::Google => commands::calendar::google(),
            CalendarTarget::Ics { out } => commands::calendar::ics(out),
        },
        // Bare invocation goes straight to the RSVP flow
        None => commands::rsvp::run("").await,
    }
}
