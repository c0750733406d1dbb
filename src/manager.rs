//! Bulk add/clear of filter lists on the appliance.

use std::fmt;
use tracing::{debug, info, warn};

use crate::error::{ListError, Result};
use crate::session::Session;

/// Which of the appliance's lists an operation targets.
///
/// Threaded through every call as the API's `whitelist` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Blacklist,
    Whitelist,
}

impl ListKind {
    pub fn is_whitelist(self) -> bool {
        matches!(self, ListKind::Whitelist)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Blacklist => "blacklist",
            ListKind::Whitelist => "whitelist",
        }
    }

    /// Parse a list type as typed on the command line or at a prompt
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blacklist" => Some(ListKind::Blacklist),
            "whitelist" => Some(ListKind::Whitelist),
            _ => None,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a completed add or clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ListKind,
    pub action: &'static str,
    pub count: usize,
    pub dry_run: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "[DRY-RUN] Would have {} {} entries ({})",
                self.action, self.count, self.kind
            )
        } else {
            write!(f, "[OK] {} {} entries ({})", capitalize(self.action), self.count, self.kind)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Register every URL on the appliance.
///
/// Stops at the first rejected URL; the error records how many entries were
/// registered before it.
pub async fn add<I, S>(session: &Session, urls: I, kind: ListKind, dry_run: bool) -> Result<Report>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let urls: Vec<S> = urls.into_iter().collect();
    let total = urls.len();
    let mut completed = 0;

    info!("Adding {} entries to {}", total, kind);

    for url in &urls {
        let url = url.as_ref();
        if url.trim().is_empty() {
            warn!("Skipping blank entry");
            continue;
        }
        if dry_run {
            println!("  + {}", url);
        } else {
            debug!("Adding {} to {}", url, kind);
            session
                .add_url(url, kind.is_whitelist())
                .await
                .map_err(|e| submission_error(url, e, completed, total))?;
        }
        completed += 1;
    }

    Ok(Report {
        kind,
        action: "added",
        count: completed,
        dry_run,
    })
}

/// Remove every filter currently registered on the appliance.
///
/// An empty or missing filter list is a no-op.
pub async fn clear(session: &Session, kind: ListKind, dry_run: bool) -> Result<Report> {
    let filters = session.filtering_status().await?.into_filters();
    let total = filters.len();
    let mut completed = 0;

    if filters.is_empty() {
        info!("No filters registered, nothing to clear");
    } else {
        info!("Removing {} entries from {}", total, kind);
    }

    for filter in &filters {
        if dry_run {
            println!("  - {}", filter.url);
        } else {
            debug!("Removing {} from {}", filter.url, kind);
            session
                .remove_url(&filter.url, kind.is_whitelist())
                .await
                .map_err(|e| submission_error(&filter.url, e, completed, total))?;
        }
        completed += 1;
    }

    Ok(Report {
        kind,
        action: "removed",
        count: completed,
        dry_run,
    })
}

fn submission_error(url: &str, err: ListError, completed: usize, total: usize) -> ListError {
    let reason = match err {
        ListError::Rejected(reason) => reason,
        other => other.to_string(),
    };
    ListError::Submission {
        url: url.to_string(),
        reason,
        completed,
        total,
    }
}
