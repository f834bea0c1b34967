use thiserror::Error;
use typedex_coverage::{CoverageError, SpeciesTypeProfile};

/// A failed fetch from the species or type source
///
/// `Clone` so that every caller coalesced onto one fetch receives the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Fetch task aborted: {0}")]
    Aborted(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => FetchError::Transport(e.to_string()),
        }
    }
}

/// A roster member that could not be resolved
#[derive(Debug, Clone, PartialEq)]
pub struct FailedMember {
    pub name: String,
    pub error: FetchError,
}

/// Some roster members resolved and others did not
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to resolve {}", list_names(.failed))]
pub struct PartialFailure {
    pub resolved: Vec<SpeciesTypeProfile>,
    pub failed: Vec<FailedMember>,
}

impl PartialFailure {
    pub fn failed_names(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.name.as_str()).collect()
    }
}

fn list_names(failed: &[FailedMember]) -> String {
    failed
        .iter()
        .map(|f| format!("{} ({})", f.name, f.error))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Loading the type graph failed; nothing was kept
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Failed to fetch type data: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid type data: {0}")]
    Invalid(#[from] CoverageError),
}

/// Why a team analysis produced no report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Team {team}: {failure}")]
    Roster { team: u8, failure: PartialFailure },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Coverage(#[from] CoverageError),
}
