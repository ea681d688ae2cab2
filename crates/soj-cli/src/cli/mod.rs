use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `soj` binary.
#[derive(Debug, Parser)]
#[command(name = "soj", version, about = "Sojourn - community listings client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::AuthCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "soj", "--format", "table", "--limit", "7", "--verbose", "auth", "status",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);

        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.limit, Some(7));

        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["soj", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["soj", "--format", "xml", "auth", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn arg_structs_are_reachable_through_the_subcommands_module() {
        use super::subcommands::{AuthLoginArgs, PushCommands, PushRegisterArgs};

        let cli = Cli::try_parse_from([
            "soj", "auth", "login", "--email", "mai@example.com", "--password", "pw",
        ])
        .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login(AuthLoginArgs { email, password }),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(email, "mai@example.com");
        assert_eq!(password, "pw");

        let cli = Cli::try_parse_from(["soj", "push", "register", "--token", "expo_tok"])
            .expect("cli should parse");
        let Commands::Push {
            action: PushCommands::Register(PushRegisterArgs { token, .. }),
        } = cli.command
        else {
            panic!("expected push register");
        };
        assert_eq!(token, "expo_tok");
    }

    #[test]
    fn resource_command_parses_kind_and_action() {
        let cli = Cli::try_parse_from(["soj", "resource", "condos", "get", "c_1"])
            .expect("cli should parse");
        let Commands::Resource(args) = cli.command else {
            panic!("expected resource command");
        };
        assert_eq!(args.kind, soj_core::ResourceKind::Condos);
    }

    #[test]
    fn resource_command_rejects_unknown_kind() {
        let parsed = Cli::try_parse_from(["soj", "resource", "boats", "list"]);
        assert!(parsed.is_err());
    }
}
