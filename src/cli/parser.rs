use clap::{Parser, Subcommand};

/// Command-line interface definition for dailybrief
/// CLI application that turns today's calendar into a morning briefing
#[derive(Parser)]
#[command(
    name = "dailybrief",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze today's calendar, estimate free focus time and compose a morning briefing",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a default configuration file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Show the day analysis (meetings, free hours, focus slot, category)
    Analyze {
        /// Analysis date (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,

        /// Override "now" (HH:MM on the analysis date)
        #[arg(long = "now")]
        now: Option<String>,

        #[arg(long = "json", help = "Print the analysis as JSON")]
        json: bool,
    },

    /// Compose the briefing message and deliver it
    Brief {
        /// Briefing date (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,

        /// Override "now" (HH:MM on the briefing date)
        #[arg(long = "now")]
        now: Option<String>,

        #[arg(long = "json", help = "Print the run result as JSON")]
        json: bool,

        #[arg(long = "dry-run", help = "Compose the message without delivering it")]
        dry_run: bool,
    },
}
