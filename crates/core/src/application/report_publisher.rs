use std::sync::Arc;

use chrono::NaiveDateTime;
use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::instrument;

use crate::{
    domain::{
        charity_project::{format_elapsed, CharityProject},
        email::EmailAddress,
        report::{
            build_document_config, build_header_block, build_permission_grant,
            build_value_request, DocumentId, ReportTemplate, REPORT_COLUMN_COUNT,
        },
        sheets::{
            a1_notation::{A1Notation, ToA1Notation},
            cell_range::CellRange,
        },
    },
    ports::{clock::Clock, spreadsheet_service::SpreadsheetService},
};

#[derive(Error, Debug)]
pub enum ReportPublisherError {
    #[error("Invalid email address for permission grant")]
    InvalidEmail,
    #[error("Project '{name}' is fully invested but has no close date")]
    InvalidProject { name: String },
    #[error("Failed to create report document")]
    CreateDocument,
    #[error("Failed to grant access to report document {document_id}")]
    GrantAccess { document_id: String },
    #[error("Failed to write report rows")]
    WriteReport,
}

#[derive(Debug, Clone)]
pub struct ReportPublisherConfig {
    pub writer_email: EmailAddress,
    pub template: ReportTemplate,
}

/// Creates a report spreadsheet, shares it and fills it with a project
/// ranking. Every publish produces a brand new document.
pub struct ReportPublisher {
    service: Arc<dyn SpreadsheetService>,
    clock: Arc<dyn Clock>,
    config: ReportPublisherConfig,
}

impl std::fmt::Debug for ReportPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReportPublisher {{ config: {:?} }}", self.config)
    }
}

impl ReportPublisher {
    pub fn new(
        service: Arc<dyn SpreadsheetService>,
        clock: Arc<dyn Clock>,
        config: ReportPublisherConfig,
    ) -> Self {
        Self {
            service,
            clock,
            config,
        }
    }

    #[instrument]
    pub async fn create_document(
        &self,
    ) -> error_stack::Result<DocumentId, ReportPublisherError> {
        self.create_document_at(self.clock.now()).await
    }

    #[instrument]
    pub async fn grant_access(
        &self,
        document_id: &DocumentId,
        email: &str,
    ) -> error_stack::Result<(), ReportPublisherError> {
        let email_address = EmailAddress::parse(email)
            .change_context(ReportPublisherError::InvalidEmail)
            .attach_printable_lazy(|| format!("Rejected email address '{}'", email))?;

        tracing::info!("Granting writer access on {} to {}", document_id, email_address);
        let grant = build_permission_grant(email_address);
        self.service
            .create_permission(document_id, &grant)
            .await
            .change_context(ReportPublisherError::GrantAccess {
                document_id: document_id.to_string(),
            })
    }

    #[instrument(skip(projects), fields(projects = projects.len()))]
    pub async fn write_report(
        &self,
        document_id: &DocumentId,
        projects: &[CharityProject],
    ) -> error_stack::Result<(), ReportPublisherError> {
        let header = build_header_block(&self.config.template, self.clock.now());
        let rows = report_rows(header, projects)?;
        self.append_rows(document_id, rows).await
    }

    /// Runs create, grant and write in order, stopping at the first failure.
    /// Nothing already created on the service is rolled back.
    #[instrument(skip(projects), fields(projects = projects.len()))]
    pub async fn publish(
        &self,
        projects: &[CharityProject],
    ) -> error_stack::Result<DocumentId, ReportPublisherError> {
        let timestamp = self.clock.now();
        let header = build_header_block(&self.config.template, timestamp);
        let rows = report_rows(header, projects)?;

        let document_id = self.create_document_at(timestamp).await?;

        if let Err(report) = self
            .grant_access(&document_id, self.config.writer_email.as_ref())
            .await
        {
            tracing::warn!(
                "Document {} was created but could not be shared; it is left in place",
                document_id
            );
            return Err(report);
        }

        self.append_rows(&document_id, rows).await?;

        tracing::info!("Report published to {}", document_id.url());
        Ok(document_id)
    }

    async fn create_document_at(
        &self,
        timestamp: NaiveDateTime,
    ) -> error_stack::Result<DocumentId, ReportPublisherError> {
        let document_config = build_document_config(&self.config.template, timestamp);
        tracing::info!("Creating document '{}'", document_config.properties.title);

        let document_id = self
            .service
            .create_document(&document_config)
            .await
            .change_context(ReportPublisherError::CreateDocument)?;

        tracing::info!("Created document {}", document_id);
        Ok(document_id)
    }

    async fn append_rows(
        &self,
        document_id: &DocumentId,
        rows: Vec<Vec<String>>,
    ) -> error_stack::Result<(), ReportPublisherError> {
        let range = report_range(rows.len())?;
        tracing::info!("Writing {} rows to {} on {}", rows.len(), range, document_id);

        let request = build_value_request(rows);
        self.service
            .append_values(document_id, &range, &request)
            .await
            .change_context(ReportPublisherError::WriteReport)
            .attach_printable_lazy(|| format!("Failed to write range {}", range))
    }
}

/// Header rows followed by `[name, elapsed, description]` per project.
pub fn report_rows(
    header: Vec<Vec<String>>,
    projects: &[CharityProject],
) -> error_stack::Result<Vec<Vec<String>>, ReportPublisherError> {
    let mut rows = header;
    rows.reserve(projects.len());

    for project in projects {
        let elapsed = project.collection_time().ok_or_else(|| {
            report!(ReportPublisherError::InvalidProject {
                name: project.name.clone(),
            })
        })?;
        rows.push(vec![
            project.name.clone(),
            format_elapsed(elapsed),
            project.description.clone(),
        ]);
    }

    Ok(rows)
}

/// `A1:C<row_count>`. Fails when the count does not fit a sheet row number.
pub fn report_range(
    row_count: usize,
) -> error_stack::Result<A1Notation, ReportPublisherError> {
    let row_count = u32::try_from(row_count)
        .change_context(ReportPublisherError::WriteReport)
        .attach_printable_lazy(|| format!("{} rows do not fit in a sheet", row_count))?;
    Ok(CellRange::from_origin(REPORT_COLUMN_COUNT as u32, row_count).to_a1_notation())
}
