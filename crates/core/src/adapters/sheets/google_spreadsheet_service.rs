use std::fmt::Debug;

use error_stack::{report, ResultExt};
use google_drive3::{api::Permission, DriveHub};
use google_sheets4::{
    api::{Spreadsheet, ValueRange},
    Sheets,
};
use tracing::instrument;

use crate::{
    adapters::config::sheets_config::SpreadsheetConfig,
    domain::{
        report::{DocumentConfig, DocumentId, PermissionGrant, ValueRequest},
        sheets::a1_notation::A1Notation,
    },
    ports::spreadsheet_service::{SpreadsheetService, SpreadsheetServiceError},
};

use super::{
    auth,
    http_client::{self, HttpsConnector},
    permission_factory::PermissionFactory,
    spreadsheet_factory::SpreadsheetFactory,
    value_range_factory::ValueRangeFactory,
};

const VALUE_INPUT_OPTION: &str = "USER_ENTERED";
const INSERT_DATA_OPTION: &str = "OVERWRITE";

/// Google Sheets v4 for documents and values, Drive v3 for sharing.
pub struct GoogleSpreadsheetService {
    sheets_hub: Sheets<HttpsConnector>,
    drive_hub: DriveHub<HttpsConnector>,
}

impl Debug for GoogleSpreadsheetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoogleSpreadsheetService")
    }
}

impl GoogleSpreadsheetService {
    #[instrument(name = "GoogleSpreadsheetService::new")]
    pub async fn new(
        config: &SpreadsheetConfig,
    ) -> error_stack::Result<Self, SpreadsheetServiceError> {
        let client = http_client::http_client()?;
        let sheets_auth = auth::auth(config, client.clone()).await?;
        let drive_auth = auth::auth(config, client.clone()).await?;

        Ok(Self {
            sheets_hub: Sheets::new(client.clone(), sheets_auth),
            drive_hub: DriveHub::new(client, drive_auth),
        })
    }
}

#[async_trait::async_trait]
impl SpreadsheetService for GoogleSpreadsheetService {
    #[instrument(skip(config))]
    async fn create_document(
        &self,
        config: &DocumentConfig,
    ) -> error_stack::Result<DocumentId, SpreadsheetServiceError> {
        let response = self
            .sheets_hub
            .spreadsheets()
            .create(Spreadsheet::from_document_config(config))
            .doit()
            .await
            .change_context(SpreadsheetServiceError::CreateDocument)
            .attach_printable_lazy(|| {
                format!("Failed to create spreadsheet '{}'", config.properties.title)
            })?;

        let spreadsheet_id = response
            .1
            .spreadsheet_id
            .ok_or(report!(SpreadsheetServiceError::MissingDocumentId))?;

        Ok(DocumentId::new(spreadsheet_id))
    }

    #[instrument(skip(grant))]
    async fn create_permission(
        &self,
        document_id: &DocumentId,
        grant: &PermissionGrant,
    ) -> error_stack::Result<(), SpreadsheetServiceError> {
        self.drive_hub
            .permissions()
            .create(Permission::from_grant(grant), document_id.as_ref())
            .param("fields", "id")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetServiceError::CreatePermission)
            .attach_printable_lazy(|| {
                format!(
                    "Failed to grant {} to {} on {}",
                    grant.role, grant.email_address, document_id
                )
            })
    }

    #[instrument(skip(request), fields(rows = request.values.len()))]
    async fn append_values(
        &self,
        document_id: &DocumentId,
        range: &A1Notation,
        request: &ValueRequest,
    ) -> error_stack::Result<(), SpreadsheetServiceError> {
        self.sheets_hub
            .spreadsheets()
            .values_append(
                ValueRange::from_value_request(request),
                document_id.as_ref(),
                range.as_ref(),
            )
            .value_input_option(VALUE_INPUT_OPTION)
            .insert_data_option(INSERT_DATA_OPTION)
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetServiceError::AppendValues)
            .attach_printable_lazy(|| format!("Failed to append to range {}", range))
    }
}
