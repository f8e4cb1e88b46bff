use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CacheCommands, Commands};

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - knowledge-base section browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides `api.base_url`)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Section cache database (overrides `cache.path`)
    #[arg(long, global = true)]
    pub cache_path: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            base_url: self.base_url.clone(),
            cache_path: self.cache_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{CacheCommands, Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tree_accepts_initial_section() {
        let cli = Cli::try_parse_from(["folio", "tree", "repo1", "--section", "s2a"])
            .expect("cli should parse");
        match cli.command {
            Commands::Tree(args) => {
                assert_eq!(args.repository, "repo1");
                assert_eq!(args.section.as_deref(), Some("s2a"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "folio",
            "show",
            "repo1",
            "s1",
            "--format",
            "text",
            "--base-url",
            "http://localhost:8080",
        ])
        .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Text);
        let flags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn comments_page_defaults_to_zero() {
        let cli = Cli::try_parse_from(["folio", "comments", "section", "s1"])
            .expect("cli should parse");
        match cli.command {
            Commands::Comments(args) => {
                assert_eq!(args.page, 0);
                assert!(args.size.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cache_subcommands_parse() {
        let cli = Cli::try_parse_from(["folio", "cache", "list", "repo1"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Cache {
                action: CacheCommands::List { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["folio", "--format", "xml", "cache", "stats"]).is_err());
    }
}
