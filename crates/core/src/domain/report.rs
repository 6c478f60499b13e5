use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::email::EmailAddress;

pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
pub const REPORT_SHEET_ID: i32 = 0;
pub const REPORT_ROW_COUNT: i32 = 100;
pub const REPORT_COLUMN_COUNT: i32 = 3;

/// Identifier issued by the spreadsheet service for a created document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn url(&self) -> String {
        format!("https://docs.google.com/spreadsheets/d/{}", self.0)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed texts of the generated report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportTemplate {
    pub title_prefix: String,
    pub locale: String,
    pub sheet_title: String,
    pub report_label: String,
    pub section_title: String,
    pub column_headers: [String; 3],
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self {
            title_prefix: "Отчет по инвестициям на".to_string(),
            locale: "ru_RU".to_string(),
            sheet_title: "Лист1".to_string(),
            report_label: "Отчет от".to_string(),
            section_title: "Топ проектов по скорости закрытия".to_string(),
            column_headers: [
                "Название проекта".to_string(),
                "Время сбора".to_string(),
                "Описание".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SheetType {
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorDimension {
    Rows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GranteeType {
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PermissionRole {
    Writer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSize {
    pub row_count: i32,
    pub column_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_type: SheetType,
    pub sheet_id: i32,
    pub title: String,
    pub grid_properties: GridSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetConfig {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentProperties {
    pub title: String,
    pub locale: String,
}

/// Body of a spreadsheet creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentConfig {
    pub properties: DocumentProperties,
    pub sheets: Vec<SheetConfig>,
}

/// Access-control entry attached to a created document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrant {
    #[serde(rename = "type")]
    pub grantee_type: GranteeType,
    pub role: PermissionRole,
    pub email_address: EmailAddress,
}

/// Body of a value-append request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRequest {
    pub major_dimension: MajorDimension,
    pub values: Vec<Vec<String>>,
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn build_document_config(
    template: &ReportTemplate,
    timestamp: NaiveDateTime,
) -> DocumentConfig {
    DocumentConfig {
        properties: DocumentProperties {
            title: format!("{} {}", template.title_prefix, format_timestamp(timestamp)),
            locale: template.locale.clone(),
        },
        sheets: vec![SheetConfig {
            properties: SheetProperties {
                sheet_type: SheetType::Grid,
                sheet_id: REPORT_SHEET_ID,
                title: template.sheet_title.clone(),
                grid_properties: GridSize {
                    row_count: REPORT_ROW_COUNT,
                    column_count: REPORT_COLUMN_COUNT,
                },
            },
        }],
    }
}

pub fn build_header_block(
    template: &ReportTemplate,
    timestamp: NaiveDateTime,
) -> Vec<Vec<String>> {
    vec![
        vec![template.report_label.clone(), format_timestamp(timestamp)],
        vec![template.section_title.clone()],
        template.column_headers.to_vec(),
    ]
}

pub fn build_permission_grant(email_address: EmailAddress) -> PermissionGrant {
    PermissionGrant {
        grantee_type: GranteeType::User,
        role: PermissionRole::Writer,
        email_address,
    }
}

pub fn build_value_request(rows: Vec<Vec<String>>) -> ValueRequest {
    ValueRequest {
        major_dimension: MajorDimension::Rows,
        values: rows,
    }
}
