pub mod cli;
pub mod render;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "country-time-finder")]
#[command(about = "Look up a country by dialing code or name and whether it is a good time to call")]
pub struct CliConfig {
    /// A phone number, dialing code, or free-text search query.
    pub query: String,

    /// Treat the input as unstructured page text and scan it for numbers.
    #[arg(long)]
    pub scan: bool,

    /// Emit the render payloads as JSON instead of text lines.
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML render configuration file.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
