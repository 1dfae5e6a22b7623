use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "querykit",
    bin_name = "querykit",
    version,
    disable_help_subcommand = true,
    after_help = "Set QUERYKIT_LOG (e.g. QUERYKIT_LOG=debug) to see query plans on stderr."
)]
#[command(about = "Validate and run paginated extended-attribute queries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML file with query limits
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an extended-attribute filter file
    Validate {
        /// JSON filter file
        #[arg(value_name = "FILTER")]
        filter: PathBuf,
    },

    /// Run a filter against a file of attribute rows and print the page
    Query {
        /// JSON array of attribute storage rows
        #[arg(short, long, value_name = "FILE")]
        records: PathBuf,

        /// JSON filter file
        #[arg(short, long, value_name = "FILE")]
        filter: PathBuf,
    },

    /// Print the query-surface document
    Schema {
        /// Host the document is served under
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Base path of the API
        #[arg(long, default_value = "/")]
        base_path: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_query_with_global_config() {
        let cli = Cli::try_parse_from([
            "querykit",
            "query",
            "--records",
            "rows.json",
            "-f",
            "filter.json",
            "--config",
            "qk.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("qk.toml")));
        match cli.command {
            Commands::Query { records, filter } => {
                assert_eq!(records, PathBuf::from("rows.json"));
                assert_eq!(filter, PathBuf::from("filter.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn schema_defaults() {
        let cli = Cli::try_parse_from(["querykit", "schema"]).unwrap();
        match cli.command {
            Commands::Schema { host, base_path } => {
                assert_eq!(host, "localhost");
                assert_eq!(base_path, "/");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
