pub mod info;
pub mod resolve;
pub mod scan;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use passprobe_common::config::Config;

#[derive(Parser)]
#[command(name = "passprobe")]
#[command(about = "A default-credential scanner.")]
pub struct CommandLine {
    /// Show diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show supported categories, default ports and credential sets
    #[command(alias = "i")]
    Info,
    /// Resolve target specs without probing or dispatching
    #[command(alias = "r")]
    Resolve(TargetArgs),
    /// Resolve targets, probe them and build scanner jobs
    #[command(alias = "s")]
    Scan(TargetArgs),
}

#[derive(Args)]
pub struct TargetArgs {
    /// Target specs: IP, CIDR, scheme://host[:port], host[:port]
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Port override for targets without an explicit port
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=65534))]
    pub port: Option<u16>,

    /// Restrict the run to these categories
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Liveness probe timeout in seconds
    #[arg(short, long, default_value_t = 3)]
    pub timeout: u64,

    /// Dispatch every resolved target without probing first
    #[arg(long)]
    pub no_probe: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl TargetArgs {
    /// Folds the flags over the built-in defaults.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::default();
        cfg.port = self.port;
        cfg.timeout = Duration::from_secs(self.timeout);
        cfg.restrict_categories(&self.category);
        cfg
    }
}
