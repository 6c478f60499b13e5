use crate::domain::email::EmailAddress;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    /// Path to the service account JSON key.
    pub priv_key: Box<str>,
    /// Principal that receives writer access to every generated report.
    pub email: EmailAddress,
}
