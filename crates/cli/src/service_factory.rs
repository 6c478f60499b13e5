use std::sync::Arc;

use charity_report_core::{
    adapters::{
        clock::SystemClock,
        config::app_config::AppConfig,
        persistence::sqlite_charity_project_repository::SqliteCharityProjectRepository,
        sheets::google_spreadsheet_service::GoogleSpreadsheetService,
    },
    application::{
        charity_report_routine::CharityReportRoutine,
        report_publisher::{ReportPublisher, ReportPublisherConfig},
    },
    ports::charity_project_repository::CharityProjectRepository,
};
use error_stack::ResultExt;
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum ServiceFactoryError {
    #[error("Failed to open the project database")]
    Database,
    #[error("Failed to set up the spreadsheet client")]
    Spreadsheet,
}

/// Everything the CLI commands need, wired from configuration.
pub struct Services {
    pub repository: Arc<dyn CharityProjectRepository>,
    pub report_routine: CharityReportRoutine,
}

pub struct ServiceFactory;

impl ServiceFactory {
    #[instrument(skip(config))]
    pub async fn create(config: &AppConfig) -> error_stack::Result<Services, ServiceFactoryError> {
        let repository =
            SqliteCharityProjectRepository::connect(config.database.url.as_ref())
                .await
                .change_context(ServiceFactoryError::Database)?;
        let repository: Arc<dyn CharityProjectRepository> = Arc::new(repository);

        let spreadsheet_service = GoogleSpreadsheetService::new(&config.sheets)
            .await
            .change_context(ServiceFactoryError::Spreadsheet)?;

        let publisher = ReportPublisher::new(
            Arc::new(spreadsheet_service),
            Arc::new(SystemClock),
            ReportPublisherConfig {
                writer_email: config.sheets.email.clone(),
                template: config.report.clone(),
            },
        );

        Ok(Services {
            report_routine: CharityReportRoutine::new(
                Arc::clone(&repository),
                Arc::new(publisher),
            ),
            repository,
        })
    }
}
