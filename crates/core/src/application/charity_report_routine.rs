use std::sync::Arc;

use error_stack::ResultExt;
use tracing::instrument;

use crate::{
    application::report_publisher::ReportPublisher,
    ports::{
        charity_project_repository::CharityProjectRepository,
        routine::{Routine, RoutineError},
    },
};

/// Publishes the closing-speed ranking of fully invested projects.
pub struct CharityReportRoutine {
    repository: Arc<dyn CharityProjectRepository>,
    publisher: Arc<ReportPublisher>,
}

impl std::fmt::Debug for CharityReportRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharityReportRoutine")
            .field("repository", &"<CharityProjectRepository>")
            .field("publisher", &self.publisher)
            .finish()
    }
}

impl CharityReportRoutine {
    pub fn new(
        repository: Arc<dyn CharityProjectRepository>,
        publisher: Arc<ReportPublisher>,
    ) -> Self {
        Self {
            repository,
            publisher,
        }
    }
}

#[async_trait::async_trait]
impl Routine for CharityReportRoutine {
    fn name(&self) -> &'static str {
        "CharityReportRoutine"
    }

    #[instrument(skip(self), name = "CharityReportRoutine::run")]
    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        tracing::info!("Ranking: 📋 Loading fully invested projects");
        let projects = self
            .repository
            .fully_funded_by_duration()
            .await
            .change_context(RoutineError::routine_failure(
                "Failed to load fully invested projects",
            ))?;

        tracing::info!("Ranking: 📤 Publishing {} projects", projects.len());
        let document_id = self
            .publisher
            .publish(&projects)
            .await
            .change_context(RoutineError::routine_failure("Failed to publish report"))?;

        tracing::info!("Ranking: ✅ Report available at {}", document_id.url());
        Ok(())
    }
}
