use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use error_stack::report;

use crate::{
    adapters::clock::FixedClock,
    application::report_publisher::{ReportPublisher, ReportPublisherConfig},
    domain::{
        charity_project::CharityProject,
        email::EmailAddress,
        report::{DocumentConfig, DocumentId, PermissionGrant, ReportTemplate, ValueRequest},
        sheets::a1_notation::A1Notation,
    },
    ports::spreadsheet_service::{SpreadsheetService, SpreadsheetServiceError},
};

pub const WRITER_EMAIL: &str = "writer@example.com";
pub const DOCUMENT_ID: &str = "doc-123";

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    CreateDocument(DocumentConfig),
    CreatePermission(DocumentId, PermissionGrant),
    AppendValues(DocumentId, A1Notation, ValueRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingStep {
    CreateDocument,
    CreatePermission,
    AppendValues,
}

/// Records every request and answers with canned results.
#[derive(Debug, Default)]
pub struct RecordingSpreadsheetService {
    pub calls: Mutex<Vec<RecordedCall>>,
    pub failing_step: Option<FailingStep>,
}

impl RecordingSpreadsheetService {
    pub fn failing_at(step: FailingStep) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing_step: Some(step),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl SpreadsheetService for RecordingSpreadsheetService {
    async fn create_document(
        &self,
        config: &DocumentConfig,
    ) -> error_stack::Result<DocumentId, SpreadsheetServiceError> {
        self.record(RecordedCall::CreateDocument(config.clone()));
        if self.failing_step == Some(FailingStep::CreateDocument) {
            return Err(report!(SpreadsheetServiceError::CreateDocument));
        }
        Ok(DocumentId::new(DOCUMENT_ID))
    }

    async fn create_permission(
        &self,
        document_id: &DocumentId,
        grant: &PermissionGrant,
    ) -> error_stack::Result<(), SpreadsheetServiceError> {
        self.record(RecordedCall::CreatePermission(
            document_id.clone(),
            grant.clone(),
        ));
        if self.failing_step == Some(FailingStep::CreatePermission) {
            return Err(report!(SpreadsheetServiceError::CreatePermission));
        }
        Ok(())
    }

    async fn append_values(
        &self,
        document_id: &DocumentId,
        range: &A1Notation,
        request: &ValueRequest,
    ) -> error_stack::Result<(), SpreadsheetServiceError> {
        self.record(RecordedCall::AppendValues(
            document_id.clone(),
            range.clone(),
            request.clone(),
        ));
        if self.failing_step == Some(FailingStep::AppendValues) {
            return Err(report!(SpreadsheetServiceError::AppendValues));
        }
        Ok(())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn report_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 10)
        .unwrap()
        .and_hms_opt(15, 30, 0)
        .unwrap()
}

pub fn closed_project(
    id: i64,
    name: &str,
    create: NaiveDateTime,
    close: NaiveDateTime,
) -> CharityProject {
    CharityProject {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        full_amount: 1000,
        invested_amount: 1000,
        fully_invested: true,
        create_date: create,
        close_date: Some(close),
    }
}

pub fn publisher_with(service: Arc<RecordingSpreadsheetService>) -> ReportPublisher {
    ReportPublisher::new(
        service,
        Arc::new(FixedClock(report_time())),
        ReportPublisherConfig {
            writer_email: EmailAddress::parse(WRITER_EMAIL).unwrap(),
            template: ReportTemplate::default(),
        },
    )
}
