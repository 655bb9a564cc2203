use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chores")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Move images, extract email addresses, and scrape a page title")]
#[command(after_help = "EXAMPLES:\n  \
    chores\n  \
    chores --config my-chores.ron --verbose\n  \
    chores --generate-config --config my-chores.ron")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "chores.ron", help = "Path to RON configuration file")]
    pub config: PathBuf,

    /// Log file path (overrides the configuration file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log debug-level detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Log to the file only, not the terminal
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write a configuration file with default values to --config and exit
    #[arg(long)]
    pub generate_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["chores"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("chores.ron"));
        assert!(cli.log_file.is_none());
        assert!(!cli.verbose && !cli.quiet && !cli.generate_config);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["chores", "-v", "-q"]).is_err());
    }

    #[test]
    fn overrides_are_parsed() {
        let cli =
            Cli::try_parse_from(["chores", "-c", "x.ron", "--log-file", "run.log", "-q"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("x.ron"));
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        assert!(cli.quiet);
    }
}
