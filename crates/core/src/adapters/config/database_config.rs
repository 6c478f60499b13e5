#[derive(serde::Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite://charity.db`.
    pub url: Box<str>,
}
