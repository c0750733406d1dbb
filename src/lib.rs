//! # adguard-list-manager
//!
//! Bulk management of AdGuard Home blocklists and allowlists through the
//! appliance's control API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (clap) + Prompt (stdin)                                │
//! │    └── list type, action, sources, connection               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Dispatch                                                   │
//! │    └── blacklist/whitelist × add/clear                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Resolve + Fetcher (reqwest)                                │
//! │    ├── custom source lists → index expansion                │
//! │    ├── custom urls → direct                                 │
//! │    └── predefined sources (firebog, anudeepND)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Manager + Session (reqwest, cookie store)                  │
//! │    └── /control/login, filtering/add_url, remove_url,       │
//! │        filtering/status                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use adguard_list_manager::{manager, ListKind, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = Session::login("http://192.168.1.5:80", "admin", "secret").await?;
//!     let report = manager::add(
//!         &session,
//!         ["https://adaway.org/hosts.txt"],
//!         ListKind::Blacklist,
//!         false,
//!     )
//!     .await?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`config`] - Connection settings and optional YAML file
//! - [`dispatch`] - List type × action state machine
//! - [`error`] - Error taxonomy
//! - [`fetcher`] - Index URL download and parsing
//! - [`manager`] - Bulk add and clear
//! - [`prompt`] - Interactive input
//! - [`resolve`] - Source selection precedence
//! - [`session`] - Authenticated appliance client
//! - [`sources`] - Predefined source tables
//! - [`validation`] - Host, port and URL validation

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fetcher;
pub mod manager;
pub mod prompt;
pub mod resolve;
pub mod session;
pub mod sources;
pub mod validation;

pub use cli::Cli;
pub use error::ListError;
pub use manager::{ListKind, Report};
pub use session::Session;
