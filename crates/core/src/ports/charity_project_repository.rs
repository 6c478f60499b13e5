use thiserror::Error;

use crate::domain::charity_project::CharityProject;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Failed to connect to the project store")]
    ConnectionFailed,
    #[error("Failed to query charity projects")]
    QueryFailed,
    #[error("Invalid charity project: {details}")]
    InvalidProject { details: String },
}

#[async_trait::async_trait]
pub trait CharityProjectRepository: Send + Sync {
    /// Returns every fully invested project, fastest to close first.
    async fn fully_funded_by_duration(
        &self,
    ) -> error_stack::Result<Vec<CharityProject>, RepositoryError>;
}
