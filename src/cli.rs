// Command-line flags.
// Everything here overrides or relocates the settings file for one session.

use std::path::PathBuf;

use clap::Parser;

use crate::state::BoundaryPolicy;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Arrange, reorder, and edit the pages of a multi-page form", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file to use instead of the platform config location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Previous/next behavior at the first and last page.
    #[arg(long, value_enum)]
    pub navigation: Option<BoundaryPolicy>,

    /// Log file to use instead of the platform cache location.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write the effective settings to the settings file and exit.
    #[arg(long)]
    pub write_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.navigation.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.write_config);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "folio",
            "--config",
            "/tmp/folio.json",
            "--navigation",
            "wrapping",
            "--log-file",
            "/tmp/folio.log",
            "--write-config",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/folio.json")));
        assert_eq!(cli.navigation, Some(BoundaryPolicy::Wrapping));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/folio.log")));
        assert!(cli.write_config);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["folio", "--navigation", "bounce"]).is_err());
    }
}
