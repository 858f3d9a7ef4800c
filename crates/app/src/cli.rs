//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use foodapp_domain::catalog::DictKind;

/// Procurement admin client for the Foodapp backend.
#[derive(Debug, Parser)]
#[command(name = "foodapp", version, about)]
pub struct Cli {
    /// Configuration file (default: <config dir>/foodapp/config.toml)
    #[arg(short = 'c', long, global = true, env = "FOODAPP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:8080
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Session storage file
    #[arg(long, global = true, conflicts_with = "ephemeral")]
    pub storage: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Top-level commands. Each resource command maps to one admin page.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        /// Account name
        username: String,
        /// Password
        #[arg(long, env = "FOODAPP_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the signed-in account
    Whoami,
    /// List the admin pages
    Routes,
    /// Units, specifications and meal times
    Dict {
        /// unit, spec or meal-time
        kind: DictKind,
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Accounts
    #[command(subcommand)]
    Account(AccountAction),
    /// Organizations
    #[command(subcommand)]
    Organ(OrganAction),
    /// Goods categories
    #[command(subcommand)]
    Category(CrudAction),
    /// Goods
    #[command(subcommand)]
    Goods(CrudAction),
    /// Suppliers
    #[command(subcommand)]
    Supplier(CrudAction),
    /// Supplier settlements
    #[command(subcommand)]
    Settlement(CrudAction),
    /// Markets
    #[command(subcommand)]
    Market(CrudAction),
    /// Inquiry sheets
    #[command(subcommand)]
    Inquiry(CrudAction),
    /// Lines of an inquiry sheet
    #[command(subcommand)]
    InquiryItem(CrudAction),
    /// Market quotes for inquiry lines
    #[command(subcommand)]
    MarketInquiry(CrudAction),
}

/// A JSON document given inline or as `@path`.
#[derive(Debug, Clone, Args)]
pub struct JsonArg {
    /// JSON document, or @file to read it from a file
    #[arg(long, short = 'd', value_name = "JSON")]
    pub data: String,
}

/// Actions every resource supports.
#[derive(Debug, Subcommand)]
pub enum CrudAction {
    /// List records
    List {
        /// Filters and paging as JSON, or @file
        #[arg(long, short = 'q', value_name = "JSON")]
        query: Option<String>,
    },
    /// Show one record
    Get {
        /// Record ID
        id: String,
    },
    /// Create a record
    Create(JsonArg),
    /// Update a record; the JSON must carry its ID
    Update(JsonArg),
    /// Delete a record
    Delete {
        /// Record ID
        id: String,
    },
}

/// Account actions.
#[derive(Debug, Subcommand)]
pub enum AccountAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// Look an account up by name
    GetByUsername {
        /// Account name
        username: String,
    },
    /// Reset an account's password (administrators)
    SetPassword(JsonArg),
    /// Change a password with the current one
    ChangePassword(JsonArg),
    /// Delete an account permanently
    HardDelete {
        /// Account ID
        id: String,
    },
}

/// Organization actions.
#[derive(Debug, Subcommand)]
pub enum OrganAction {
    #[command(flatten)]
    Crud(CrudAction),
    /// Delete an organization permanently
    HardDelete {
        /// Organization ID
        id: String,
    },
}

impl Command {
    /// Admin page the command operates on, if it needs a session.
    pub const fn page(&self) -> Option<&'static str> {
        match self {
            Self::Login { .. } | Self::Logout | Self::Whoami | Self::Routes => None,
            Self::Dict { kind, .. } => Some(match kind {
                DictKind::Unit => "/dict/units",
                DictKind::Spec => "/dict/specs",
                DictKind::MealTime => "/dict/mealtimes",
            }),
            Self::Account(_) => Some("/acl/accounts"),
            Self::Organ(_) => Some("/acl/organizations"),
            Self::Category(_) => Some("/catalog/categories"),
            Self::Goods(_) => Some("/catalog/goods"),
            Self::Supplier(_) => Some("/suppliers"),
            Self::Settlement(_) => Some("/price/settlements"),
            Self::Market(_) => Some("/markets"),
            Self::Inquiry(_) | Self::InquiryItem(_) | Self::MarketInquiry(_) => {
                Some("/price/inquiries")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use foodapp_domain::route::find_route;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("foodapp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&[
            "--base-url",
            "http://10.0.0.2:8080",
            "--timeout-ms",
            "3000",
            "dict",
            "unit",
            "list",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.2:8080"));
        assert_eq!(cli.timeout_ms, Some(3000));
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(!cli.ephemeral);
    }

    #[test]
    fn test_dict_kind_parses() {
        let cli = parse(&["dict", "meal-time", "get", "m-1"]);
        match cli.command {
            Command::Dict { kind, action } => {
                assert_eq!(kind, DictKind::MealTime);
                assert!(matches!(action, CrudAction::Get { id } if id == "m-1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["foodapp", "dict", "colour", "list"]).is_err());
    }

    #[test]
    fn test_account_actions_include_crud() {
        let cli = parse(&["account", "delete", "a-1"]);
        assert!(matches!(
            cli.command,
            Command::Account(AccountAction::Crud(CrudAction::Delete { ref id })) if id == "a-1"
        ));

        let cli = parse(&["account", "set-password", "--data", r#"{"id":"a-1","password":"x"}"#]);
        assert!(matches!(
            cli.command,
            Command::Account(AccountAction::SetPassword(_))
        ));
    }

    #[test]
    fn test_login_password_flag() {
        let cli = parse(&["login", "admin", "--password", "secret"]);
        assert!(matches!(
            cli.command,
            Command::Login { ref username, ref password } if username == "admin" && password == "secret"
        ));
    }

    #[test]
    fn test_storage_conflicts_with_ephemeral() {
        let result =
            Cli::try_parse_from(["foodapp", "--ephemeral", "--storage", "/tmp/s.json", "logout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_every_page_is_a_guarded_route() {
        let commands = [
            parse(&["dict", "unit", "list"]).command,
            parse(&["dict", "spec", "list"]).command,
            parse(&["dict", "meal-time", "list"]).command,
            parse(&["account", "list"]).command,
            parse(&["organ", "list"]).command,
            parse(&["category", "list"]).command,
            parse(&["goods", "list"]).command,
            parse(&["supplier", "list"]).command,
            parse(&["settlement", "list"]).command,
            parse(&["market", "list"]).command,
            parse(&["inquiry", "list"]).command,
            parse(&["inquiry-item", "list"]).command,
            parse(&["market-inquiry", "list"]).command,
        ];
        for command in &commands {
            let page = command.page().unwrap();
            let meta = find_route(page).and_then(|route| route.meta).unwrap();
            assert!(meta.requires_auth, "{page}");
        }
        assert_eq!(parse(&["whoami"]).command.page(), None);
    }
}
