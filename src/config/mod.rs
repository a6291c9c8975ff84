pub mod session;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-roster")]
#[command(about = "Replays a scripted session against a repeatable user-info form")]
pub struct CliConfig {
    #[arg(long, help = "Path to the TOML session script")]
    pub script: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Do not print the form after each step")]
    pub quiet_render: bool,

    #[arg(long, help = "Exit with status 2 when the final form is invalid")]
    pub require_valid: bool,
}
