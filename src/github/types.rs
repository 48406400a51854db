use serde::{Deserialize, Serialize};

/// Organization entry as returned by the listing helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgSummary {
    pub id: String,
    pub name: String,
}

/// Repository entry as returned by the listing helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrgEntry {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepoEntry {
    pub name: String,
}

/// JSON body GitHub returns alongside non-success status codes.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub message: String,
}

impl From<OrgEntry> for OrgSummary {
    fn from(entry: OrgEntry) -> Self {
        Self {
            id: entry.login.clone(),
            name: entry.login,
        }
    }
}

impl From<RepoEntry> for RepoSummary {
    fn from(entry: RepoEntry) -> Self {
        Self {
            id: entry.name.clone(),
            name: entry.name,
        }
    }
}
