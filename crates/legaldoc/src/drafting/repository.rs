use std::fmt;

use serde::{Deserialize, Serialize};

use super::outline::ContractOutline;

/// Identifier of a stored outline draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutlineId(pub String);

impl fmt::Display for OutlineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outline being edited by one user, as held by the shell between actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineDraft {
    pub id: OutlineId,
    pub outline: ContractOutline,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait OutlineRepository: Send + Sync {
    fn insert(&self, draft: OutlineDraft) -> Result<OutlineDraft, RepositoryError>;
    fn fetch(&self, id: &OutlineId) -> Result<Option<OutlineDraft>, RepositoryError>;

    /// Runs `edit` against the stored outline with no other writer in between. The stored
    /// outline is replaced only when `edit` succeeds.
    fn modify<E, F>(&self, id: &OutlineId, edit: F) -> Result<OutlineDraft, E>
    where
        F: FnOnce(&mut ContractOutline) -> Result<(), E>,
        E: From<RepositoryError>;

    fn remove(&self, id: &OutlineId) -> Result<OutlineDraft, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("outline already exists")]
    Conflict,
    #[error("outline not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
