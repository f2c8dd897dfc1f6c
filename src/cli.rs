use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vidrelay")]
#[command(author, version, about = "Telegram bot that fetches videos from links and sends them back", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (default)
    Run,

    /// Resolve a video URL through the download site and print the direct link
    Resolve {
        /// Source video URL
        url: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
