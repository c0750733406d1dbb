//! Predefined list sources.
//!
//! Blacklist sources point at a single index URL whose body lists further
//! filter lists. Whitelist sources point directly at one or more filter lists.

use clap::ValueEnum;
use std::fmt;

use crate::ListKind;

/// Curated blocklist collections published by firebog.net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum BlacklistSource {
    #[value(name = "firebog_ticked")]
    FirebogTicked,
    #[value(name = "firebog_noncrossed")]
    FirebogNoncrossed,
    #[value(name = "firebog_all")]
    FirebogAll,
}

impl BlacklistSource {
    pub const ALL: [BlacklistSource; 3] = [
        BlacklistSource::FirebogTicked,
        BlacklistSource::FirebogNoncrossed,
        BlacklistSource::FirebogAll,
    ];

    /// Index URL returning one filter-list URL per line
    pub fn index_url(self) -> &'static str {
        match self {
            BlacklistSource::FirebogTicked => "https://v.firebog.net/hosts/lists.php?type=tick",
            BlacklistSource::FirebogNoncrossed => {
                "https://v.firebog.net/hosts/lists.php?type=nocross"
            }
            BlacklistSource::FirebogAll => "https://v.firebog.net/hosts/lists.php?type=all",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlacklistSource::FirebogTicked => "firebog_ticked",
            BlacklistSource::FirebogNoncrossed => "firebog_noncrossed",
            BlacklistSource::FirebogAll => "firebog_all",
        }
    }
}

impl fmt::Display for BlacklistSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ANUDEEPND_SAFE: &str =
    "https://raw.githubusercontent.com/anudeepND/whitelist/master/domains/whitelist.txt";
const ANUDEEPND_OPTIONAL: &str =
    "https://raw.githubusercontent.com/anudeepND/whitelist/master/domains/optional-list.txt";
const ANUDEEPND_REFERRAL: &str =
    "https://raw.githubusercontent.com/anudeepND/whitelist/master/domains/referral-sites.txt";

/// Allowlists maintained by anudeepND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WhitelistSource {
    #[value(name = "anudeepND_safe")]
    AnudeepNdSafe,
    #[value(name = "anudeepND_optional")]
    AnudeepNdOptional,
    #[value(name = "anudeepND_referral")]
    AnudeepNdReferral,
    #[value(name = "anudeepND_safe_plus_optional")]
    AnudeepNdSafePlusOptional,
}

impl WhitelistSource {
    pub const ALL: [WhitelistSource; 4] = [
        WhitelistSource::AnudeepNdSafe,
        WhitelistSource::AnudeepNdOptional,
        WhitelistSource::AnudeepNdReferral,
        WhitelistSource::AnudeepNdSafePlusOptional,
    ];

    /// Filter-list URLs registered directly, without indirection
    pub fn urls(self) -> &'static [&'static str] {
        match self {
            WhitelistSource::AnudeepNdSafe => &[ANUDEEPND_SAFE],
            WhitelistSource::AnudeepNdOptional => &[ANUDEEPND_OPTIONAL],
            WhitelistSource::AnudeepNdReferral => &[ANUDEEPND_REFERRAL],
            WhitelistSource::AnudeepNdSafePlusOptional => &[ANUDEEPND_OPTIONAL, ANUDEEPND_SAFE],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WhitelistSource::AnudeepNdSafe => "anudeepND_safe",
            WhitelistSource::AnudeepNdOptional => "anudeepND_optional",
            WhitelistSource::AnudeepNdReferral => "anudeepND_referral",
            WhitelistSource::AnudeepNdSafePlusOptional => "anudeepND_safe_plus_optional",
        }
    }
}

impl fmt::Display for WhitelistSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names accepted by the interactive source prompt for a list kind.
pub fn source_names(kind: ListKind) -> Vec<&'static str> {
    match kind {
        ListKind::Blacklist => BlacklistSource::ALL.iter().map(|s| s.name()).collect(),
        ListKind::Whitelist => WhitelistSource::ALL.iter().map(|s| s.name()).collect(),
    }
}
