//! Binary crate for the `weathernow` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompting (city search, API key setup)
//! - Terminal output of the rendered view

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);
    cmd.run().await
}

/// Log level used when `RUST_LOG` is unset: `-v` info, `-vv` debug.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(5), "debug");
    }

    #[test]
    fn repeated_short_flag_counts() {
        let cli = cli::Cli::parse_from(["weathernow", "-vv", "show", "London"]);
        assert_eq!(default_level(cli.verbose), "debug");
    }
}
