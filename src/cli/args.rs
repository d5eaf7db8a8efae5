//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// snapsearch - keyword image search with a local thumbnail cache
///
/// Searches a remote image repository and keeps each result's thumbnail
/// on disk so repeated views do not re-fetch it.
#[derive(Parser, Debug)]
#[command(name = "snapsearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SNAPSEARCH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search images by keyword and cache their thumbnails
    Search(SearchArgs),

    /// Inspect the thumbnail cache
    Cache(CacheArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search keywords
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// API access key (overrides api.client_id)
    #[arg(long, env = "SNAPSEARCH_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Do not download thumbnails into the cache
    #[arg(long)]
    pub no_cache: bool,
}

impl SearchArgs {
    /// Keywords joined into a single query string
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Print the cache directory
    Path,

    /// Check whether an image id is cached
    Check {
        /// Image id as returned by a search
        id: String,
    },
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., api.client_id)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Image ids, one per line
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_search() {
        let cli = Cli::parse_from(["snapsearch", "search", "snowy", "peaks"]);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query_string(), "snowy peaks");
                assert_eq!(args.format, OutputFormat::Table);
                assert!(!args.no_cache);
            }
            _ => panic!("expected Search command"),
        }
    }

    #[test]
    fn cli_parses_search_flags() {
        let cli = Cli::parse_from([
            "snapsearch",
            "search",
            "--format",
            "json",
            "--no-cache",
            "--client-id",
            "abc",
            "cats",
        ]);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.no_cache);
                assert_eq!(args.client_id.as_deref(), Some("abc"));
                assert_eq!(args.query, vec!["cats"]);
            }
            _ => panic!("expected Search command"),
        }
    }

    #[test]
    fn cli_search_requires_query() {
        assert!(Cli::try_parse_from(["snapsearch", "search"]).is_err());
    }

    #[test]
    fn cli_parses_cache_check() {
        let cli = Cli::parse_from(["snapsearch", "cache", "check", "a1"]);
        match cli.command {
            Commands::Cache(CacheArgs {
                action: CacheAction::Check { id },
            }) => assert_eq!(id, "a1"),
            _ => panic!("expected cache check"),
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["snapsearch", "config", "set", "cache.enabled", "false"]);
        match cli.command {
            Commands::Config(ConfigArgs {
                action: Some(ConfigAction::Set { key, value }),
            }) => {
                assert_eq!(key, "cache.enabled");
                assert_eq!(value, "false");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["snapsearch", "cache", "path"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["snapsearch", "-vv", "cache", "path"]);
        assert_eq!(cli.verbose, 2);
    }
}
