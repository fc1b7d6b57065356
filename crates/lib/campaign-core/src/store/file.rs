use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::CampaignDataset;

/// Failure loading the record set. Either way the data is unavailable;
/// the distinction only matters for the message.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(
                    f,
                    "campaign data unavailable: cannot read {}: {source}",
                    path.display()
                )
            }
            Self::Parse { path, source } => {
                write!(
                    f,
                    "campaign data unavailable: malformed record set in {}: {source}",
                    path.display()
                )
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only store over a single JSON record set on disk.
///
/// The file is re-read on every load; the source is static so there is
/// nothing to invalidate and no cache to manage.
#[derive(Debug, Clone)]
pub struct FileCampaignStore {
    path: PathBuf,
}

impl FileCampaignStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record set fresh from disk.
    ///
    /// # Errors
    /// Returns `StoreError::Io` when the file is missing or unreadable and
    /// `StoreError::Parse` when it does not decode as a campaign dataset.
    pub async fn load(&self) -> StoreResult<CampaignDataset> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        let dataset: CampaignDataset =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            campaigns = dataset.campaigns.len(),
            "loaded campaign record set"
        );
        Ok(dataset)
    }
}
