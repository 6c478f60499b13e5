use thiserror::Error;

use crate::domain::{
    report::{DocumentConfig, DocumentId, PermissionGrant, ValueRequest},
    sheets::a1_notation::A1Notation,
};

#[derive(Error, Debug)]
pub enum SpreadsheetServiceError {
    #[error("Failed to authenticate against the spreadsheet service")]
    Authentication,
    #[error("Failed to create spreadsheet document")]
    CreateDocument,
    #[error("Spreadsheet service response has no document id")]
    MissingDocumentId,
    #[error("Failed to create permission on document")]
    CreatePermission,
    #[error("Failed to append values to document")]
    AppendValues,
}

/// The three calls a report publish needs from the document service.
#[async_trait::async_trait]
pub trait SpreadsheetService: Send + Sync {
    async fn create_document(
        &self,
        config: &DocumentConfig,
    ) -> error_stack::Result<DocumentId, SpreadsheetServiceError>;

    async fn create_permission(
        &self,
        document_id: &DocumentId,
        grant: &PermissionGrant,
    ) -> error_stack::Result<(), SpreadsheetServiceError>;

    /// Appends `request` over `range`, overwriting existing cells.
    async fn append_values(
        &self,
        document_id: &DocumentId,
        range: &A1Notation,
        request: &ValueRequest,
    ) -> error_stack::Result<(), SpreadsheetServiceError>;
}
