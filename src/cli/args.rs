use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mastral-snapshot")]
#[command(about = "Poll personal weather stations and write a JSON snapshot of fresh readings")]
#[command(version)]
pub struct Cli {
    /// Defaults to `fetch` with built-in settings
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll every station and write the snapshot
    Fetch(FetchArgs),

    /// Validate the station registry without fetching anything
    Validate {
        #[arg(short, long, help = "Settings file (TOML, JSON or YAML)")]
        config: Option<PathBuf>,
    },

    /// Display information about a snapshot file
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(long, default_value = "false", help = "List every station in the snapshot")]
        stations: bool,
    },
}

#[derive(Args, Default)]
pub struct FetchArgs {
    #[arg(short, long, help = "Settings file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Output JSON path [default: scripts/datos_meteorologicos.json]"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "publish-dir", help = "Copy the snapshot into this directory (repeatable)")]
    pub publish_dirs: Vec<PathBuf>,

    #[arg(long, default_value = "false", help = "Show a progress bar while polling")]
    pub progress: bool,
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
    fn test_no_arguments_means_default_fetch() {
        let cli = Cli::try_parse_from(["mastral-snapshot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_fetch_arguments() {
        let cli = Cli::try_parse_from([
            "mastral-snapshot",
            "fetch",
            "--output",
            "out.json",
            "--publish-dir",
            "public",
            "--publish-dir",
            "dist",
            "-v",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Fetch(args)) => {
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
                assert_eq!(args.publish_dirs, vec![PathBuf::from("public"), PathBuf::from("dist")]);
                assert!(!args.progress);
            }
            _ => panic!("expected fetch command"),
        }
        assert!(cli.verbose);
    }
}
