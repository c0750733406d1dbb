//! Turn a source selection into the URLs to submit.
//!
//! Precedence, first non-empty wins:
//! 1. custom source lists (expanded like a blacklist index)
//! 2. custom URLs (submitted as-is)
//! 3. the predefined source for the list kind
//! 4. an interactive prompt for a predefined source

use anyhow::Result;
use clap::ValueEnum;
use std::collections::HashSet;

use crate::fetcher::Fetcher;
use crate::manager::ListKind;
use crate::prompt::{ask_choice, Prompt};
use crate::sources::{source_names, BlacklistSource, WhitelistSource};

/// Every way a user can name the lists to add
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSelection {
    pub custom_source_lists: Vec<String>,
    pub custom_urls: Vec<String>,
    pub blacklist_source: Option<BlacklistSource>,
    pub whitelist_source: Option<WhitelistSource>,
}

/// URLs a selection resolves to before any network access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Index URLs whose bodies list the filter lists
    Indexes(Vec<String>),
    /// Filter-list URLs to submit directly
    Direct(Vec<String>),
}

impl Resolution {
    pub fn from_blacklist_source(source: BlacklistSource) -> Self {
        Resolution::Indexes(vec![source.index_url().to_string()])
    }

    pub fn from_whitelist_source(source: WhitelistSource) -> Self {
        Resolution::Direct(source.urls().iter().map(|u| u.to_string()).collect())
    }

    /// Fetch index URLs if needed and return the final entries
    pub async fn into_entries(self, fetcher: &Fetcher) -> Result<Vec<String>> {
        match self {
            Resolution::Direct(urls) => Ok(urls),
            Resolution::Indexes(indexes) => {
                Ok(fetcher.expand_indexes(&indexes).await?.into_iter().collect())
            }
        }
    }
}

/// Apply the precedence rules; `None` means the user must be asked.
pub fn resolve(kind: ListKind, selection: &SourceSelection) -> Option<Resolution> {
    if !selection.custom_source_lists.is_empty() {
        return Some(Resolution::Indexes(dedup(&selection.custom_source_lists)));
    }

    if !selection.custom_urls.is_empty() {
        return Some(Resolution::Direct(dedup(&selection.custom_urls)));
    }

    match kind {
        ListKind::Blacklist => selection
            .blacklist_source
            .map(Resolution::from_blacklist_source),
        ListKind::Whitelist => selection
            .whitelist_source
            .map(Resolution::from_whitelist_source),
    }
}

/// Resolve a selection, falling back to asking for a predefined source
pub fn resolve_or_ask(
    kind: ListKind,
    selection: &SourceSelection,
    prompt: &dyn Prompt,
) -> Result<Resolution> {
    if let Some(resolution) = resolve(kind, selection) {
        return Ok(resolution);
    }

    let choices = source_names(kind);
    let resolution = match kind {
        ListKind::Blacklist => {
            let source = ask_choice(prompt, "Blacklist source", &choices, |s| {
                BlacklistSource::from_str(s, true).ok()
            })?;
            Resolution::from_blacklist_source(source)
        }
        ListKind::Whitelist => {
            let source = ask_choice(prompt, "Whitelist source", &choices, |s| {
                WhitelistSource::from_str(s, true).ok()
            })?;
            Resolution::from_whitelist_source(source)
        }
    };
    Ok(resolution)
}

/// Drop blank and repeated URLs, keeping first-seen order
fn dedup(urls: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .filter(|u| seen.insert(*u))
        .map(str::to_string)
        .collect()
}
