//! Command dispatch: list type × action → behavior.

use anyhow::{Context, Result};
use std::fmt;
use tracing::{info, warn};

use crate::config::Connection;
use crate::fetcher::Fetcher;
use crate::manager::{self, ListKind, Report};
use crate::prompt::Prompt;
use crate::resolve::{resolve_or_ask, SourceSelection};
use crate::session::Session;
use crate::validation::validate_list_url;

pub const UNIMPLEMENTED_MESSAGE: &str = "Unknown or unimplemented path. Sorry!";

/// What a list-type/action pair asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Add(ListKind),
    Clear(ListKind),
    Unimplemented { list_type: String, action: String },
}

impl Plan {
    pub fn from_parts(list_type: &str, action: &str) -> Self {
        let kind = ListKind::parse(list_type);
        match (kind, action.trim().to_ascii_lowercase().as_str()) {
            (Some(kind), "add") => Plan::Add(kind),
            (Some(kind), "clear") => Plan::Clear(kind),
            _ => Plan::Unimplemented {
                list_type: list_type.to_string(),
                action: action.to_string(),
            },
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Add(kind) => write!(f, "{} add", kind),
            Plan::Clear(kind) => write!(f, "{} clear", kind),
            Plan::Unimplemented { list_type, action } => write!(f, "{} {}", list_type, action),
        }
    }
}

/// Everything one invocation needs, already gathered from the user
#[derive(Debug, Clone)]
pub struct Request {
    pub plan: Plan,
    pub selection: SourceSelection,
    pub connection: Connection,
    pub dry_run: bool,
}

/// Outcome of a run that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Report),
    Unimplemented,
}

/// Ask for list type and action when not given on the command line
pub fn plan_from(
    list_type: Option<String>,
    action: Option<String>,
    prompt: &dyn Prompt,
) -> Result<Plan> {
    let list_type = match list_type {
        Some(value) => value,
        None => prompt.ask("List type [blacklist, whitelist]")?,
    };
    let action = match action {
        Some(value) => value,
        None => prompt.ask("List action [add, clear]")?,
    };
    Ok(Plan::from_parts(&list_type, &action))
}

/// Log in, carry out the plan, and release the session on every path.
pub async fn run(request: Request, prompt: &dyn Prompt) -> Result<Outcome> {
    // Custom URLs only feed an add; check them before logging in
    if let Plan::Add(_) = request.plan {
        for url in request
            .selection
            .custom_source_lists
            .iter()
            .chain(&request.selection.custom_urls)
        {
            validate_list_url(url)?;
        }
    }

    let connection = &request.connection;
    let session = Session::login(
        &connection.base_url(),
        &connection.username,
        connection.password.as_str(),
    )
    .await?;

    // `session` is dropped when this function returns, success or not
    execute(&session, &request, prompt).await
}

async fn execute(session: &Session, request: &Request, prompt: &dyn Prompt) -> Result<Outcome> {
    info!("Running {} against {}", request.plan, session.base_url());

    let report = match &request.plan {
        Plan::Add(kind) => {
            let resolution = resolve_or_ask(*kind, &request.selection, prompt)?;
            let fetcher = Fetcher::new()?;
            let entries = resolution
                .into_entries(&fetcher)
                .await
                .context("Failed to resolve source lists")?;
            manager::add(session, &entries, *kind, request.dry_run).await?
        }
        Plan::Clear(kind) => manager::clear(session, *kind, request.dry_run).await?,
        Plan::Unimplemented { list_type, action } => {
            warn!("No behavior for list type '{}' with action '{}'", list_type, action);
            println!("{}", UNIMPLEMENTED_MESSAGE);
            return Ok(Outcome::Unimplemented);
        }
    };

    Ok(Outcome::Completed(report))
}
