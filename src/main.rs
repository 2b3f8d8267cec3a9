// Entrypoint for the CLI application.
// - Keeps `main` small: parse two arguments, build the client, dispatch.
// - Returns `anyhow::Result` so any dispatch error ends the process with a
//   non-zero exit and the error chain on stderr.

use std::io;

use clap::Parser;
use cvtest::{api::ApiClient, dispatch::dispatch, ui};
use tracing_subscriber::EnvFilter;

/// Exactly two positionals. Hyphen-leading input is kept as data.
#[derive(Debug, Parser)]
#[command(disable_help_flag = true)]
struct Cli {
    #[arg(allow_hyphen_values = true)]
    action: String,
    #[arg(allow_hyphen_values = true)]
    url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Wrong argument count is not an error: show usage and stop.
    let Ok(Cli { action, url }) = Cli::try_parse() else {
        ui::print_usage(&mut out)?;
        return Ok(());
    };

    let api = ApiClient::new()?;
    dispatch(&api, &action, &url, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_two_arguments() {
        assert!(Cli::try_parse_from(["cvtest"]).is_err());
        assert!(Cli::try_parse_from(["cvtest", "segment"]).is_err());
        assert!(Cli::try_parse_from(["cvtest", "segment", "a", "b"]).is_err());

        let cli = Cli::try_parse_from(["cvtest", "analysis", "hello world"]).unwrap();
        assert_eq!(cli.action, "analysis");
        assert_eq!(cli.url, "hello world");
    }

    #[test]
    fn hyphen_leading_input_is_positional() {
        let cli = Cli::try_parse_from(["cvtest", "analysis", "-h"]).unwrap();
        assert_eq!(cli.url, "-h");
    }
}
