use std::{error::Error, fmt};

use crate::store::{FileCampaignStore, StoreError};

pub mod query;

pub use query::QueryType;

/// Errors surfaced at the query boundary. All variants are recoverable
/// by the caller; none should take the process down.
#[derive(Debug)]
pub enum ControlError {
    /// The query selector is not one of the recognized values.
    InvalidQueryType(String),
    /// A campaign-name filter matched nothing in the record set.
    CampaignNotFound(String),
    /// The backing file is missing or malformed.
    Store(StoreError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQueryType(value) => write!(
                f,
                "unrecognized query_type '{value}': expected one of all, performance, subjects, metrics"
            ),
            Self::CampaignNotFound(name) => {
                write!(f, "no campaign named '{name}' in the record set")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidQueryType(_) | Self::CampaignNotFound(_) => None,
        }
    }
}

impl From<StoreError> for ControlError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Query entry point over the campaign store.
///
/// Holds no mutable state; the record set is re-read from disk per call,
/// so identical calls over an unchanged file yield identical reports.
#[derive(Debug, Clone)]
pub struct CampaignControlPlane {
    store: FileCampaignStore,
}

impl CampaignControlPlane {
    #[must_use]
    pub const fn new(store: FileCampaignStore) -> Self {
        Self { store }
    }

    /// Builds a control plane over the record set at `path`.
    #[must_use]
    pub fn from_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileCampaignStore::new(path))
    }

    #[must_use]
    pub const fn store(&self) -> &FileCampaignStore {
        &self.store
    }
}
