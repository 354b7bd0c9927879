use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version,
    disable_help_subcommand = true,
    after_help = "Run `folio browse` for an interactive session (type `help` inside)."
)]
#[command(about = "Browse a bilingual portfolio catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Display language (en, jp)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub locale: Option<String>,

    /// JSON catalog to load instead of the bundled sample
    #[arg(long, global = true, help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to folio.toml in the user config directory)
    #[arg(long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of styled text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List catalog entries
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only show entries with this tag ("all" shows everything)
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Show one entry in full
    #[command(alias = "v", display_order = 2)]
    View {
        /// Entry id (e.g. ink-ui)
        id: String,
    },

    /// Show the filter tabs and every tag in the catalog
    #[command(display_order = 3)]
    Tags,

    /// Interactive session: filter, open, close and switch language
    #[command(display_order = 4)]
    Browse,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::List {
            filter: "all".to_string(),
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(
            Commands::default(),
            Commands::List {
                filter: "all".into()
            }
        );
    }

    #[test]
    fn test_list_filter_and_global_locale() {
        let cli = Cli::try_parse_from(["folio", "ls", "-f", "web", "--locale", "jp"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                filter: "web".into()
            })
        );
        assert_eq!(cli.locale.as_deref(), Some("jp"));
    }

    #[test]
    fn test_view_requires_id() {
        assert!(Cli::try_parse_from(["folio", "view"]).is_err());
        let cli = Cli::try_parse_from(["folio", "v", "ink-ui", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::View {
                id: "ink-ui".into()
            })
        );
        assert!(cli.json);
    }
}
