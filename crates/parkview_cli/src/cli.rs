//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use parkview_theme::ThemeVariant;

/// Browse the park catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "parkview")]
#[command(about = "Browse theme parks and their roller coasters")]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, value_name = "PATH", default_value = "parkview.toml")]
    pub config: PathBuf,

    /// Pick a theme, overriding the system appearance
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List parks in display order
    List,

    /// Show a park and replay scroll offsets against its header
    Show(ShowArgs),

    /// Print the resolved theme and navigation colors
    Theme {
        /// Toggle the theme before printing
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Park name, matched exactly
    pub name: String,

    /// Measured bottom edge of the large title
    #[arg(long, value_name = "Y")]
    pub title_bottom: Option<f32>,

    /// Measured top edge of the info block
    #[arg(long, value_name = "Y")]
    pub info_top: Option<f32>,

    /// Scroll offsets to replay, in order
    #[arg(long = "scroll", value_name = "Y", allow_negative_numbers = true)]
    pub scroll: Vec<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeVariant {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeVariant::Light,
            ThemeArg::Dark => ThemeVariant::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_collects_scrolls() {
        let cli = Cli::try_parse_from([
            "parkview",
            "--theme",
            "dark",
            "show",
            "Six Flags",
            "--title-bottom",
            "64",
            "--scroll",
            "10",
            "--scroll",
            "60",
        ])
        .unwrap();

        assert_eq!(cli.theme, Some(ThemeArg::Dark));
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.name, "Six Flags");
                assert_eq!(args.title_bottom, Some(64.0));
                assert_eq!(args.scroll, vec![10.0, 60.0]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
