//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConnectionConfig, SecureString};
use crate::resolve::SourceSelection;
use crate::sources::{BlacklistSource, WhitelistSource};

#[derive(Parser, Debug)]
#[command(name = "adguard-list-manager")]
#[command(author, version, about = "Bulk blocklist/allowlist management for AdGuard Home")]
pub struct Cli {
    /// List to operate on (blacklist, whitelist)
    #[arg(long)]
    pub list_type: Option<String>,

    /// Action to perform (add, clear)
    #[arg(long)]
    pub list_action: Option<String>,

    /// Use one of the predefined blacklist sources
    #[arg(long, value_enum)]
    pub blacklist_source: Option<BlacklistSource>,

    /// Use one of the predefined whitelist sources
    #[arg(long, value_enum)]
    pub whitelist_source: Option<WhitelistSource>,

    /// URL listing further filter-list URLs, one per line. Repeat for each URL
    #[arg(long = "custom-source-list", value_name = "URL")]
    pub custom_source_list: Vec<String>,

    /// Filter-list URL added directly. Repeat for each URL
    #[arg(long = "custom-url", value_name = "URL")]
    pub custom_url: Vec<String>,

    /// AdGuard Home host, e.g. 192.168.1.5
    #[arg(long, env = "ADGUARD_HOST")]
    pub host: Option<String>,

    /// AdGuard Home web port, e.g. 80
    #[arg(long, env = "ADGUARD_PORT")]
    pub port: Option<u16>,

    /// Username to log in to the AdGuard UI
    #[arg(long, env = "ADGUARD_USERNAME")]
    pub username: Option<String>,

    /// Password to log in to the AdGuard UI
    #[arg(long, env = "ADGUARD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Optional YAML file with connection defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be added or removed without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Connection parameters given by flags or environment
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone().map(SecureString::new),
        }
    }

    pub fn selection(&self) -> SourceSelection {
        SourceSelection {
            custom_source_lists: self.custom_source_list.clone(),
            custom_urls: self.custom_url.clone(),
            blacklist_source: self.blacklist_source,
            whitelist_source: self.whitelist_source,
        }
    }
}
