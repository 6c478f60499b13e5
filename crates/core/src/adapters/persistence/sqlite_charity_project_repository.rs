use chrono::NaiveDateTime;
use error_stack::{report, ResultExt};
use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::instrument;

use crate::{
    domain::charity_project::CharityProject,
    ports::charity_project_repository::{CharityProjectRepository, RepositoryError},
};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS charityproject (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL UNIQUE,
    description TEXT NOT NULL,
    full_amount INTEGER NOT NULL,
    invested_amount INTEGER NOT NULL DEFAULT 0,
    fully_invested BOOLEAN NOT NULL DEFAULT 0,
    create_date DATETIME NOT NULL,
    close_date DATETIME
)";

const SELECT_FULLY_FUNDED_BY_DURATION: &str = "SELECT id, name, description, full_amount,
        invested_amount, fully_invested, create_date, close_date
    FROM charityproject
    WHERE fully_invested = 1
    ORDER BY julianday(close_date) - julianday(create_date), create_date, id";

/// Fields needed to store a project. `fully_invested` follows from
/// `close_date`.
#[derive(Debug, Clone)]
pub struct NewCharityProject {
    pub name: String,
    pub description: String,
    pub full_amount: i64,
    pub invested_amount: i64,
    pub create_date: NaiveDateTime,
    pub close_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct SqliteCharityProjectRepository {
    pool: SqlitePool,
}

impl SqliteCharityProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[instrument]
    pub async fn connect(url: &str) -> error_stack::Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .change_context(RepositoryError::ConnectionFailed)
            .attach_printable_lazy(|| format!("Invalid database url {}", url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .change_context(RepositoryError::ConnectionFailed)
            .attach_printable_lazy(|| format!("Could not open database at {}", url))?;
        Ok(Self::new(pool))
    }

    /// Creates the project table when it does not exist yet.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> error_stack::Result<(), RepositoryError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .change_context(RepositoryError::QueryFailed)
            .attach_printable("Failed to create charityproject table")?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn insert(
        &self,
        project: &NewCharityProject,
    ) -> error_stack::Result<i64, RepositoryError> {
        if let Some(close_date) = project.close_date {
            if close_date < project.create_date {
                return Err(report!(RepositoryError::InvalidProject {
                    details: format!("'{}' closes before it was created", project.name),
                }));
            }
        }

        let result = sqlx::query(
            "INSERT INTO charityproject
                (name, description, full_amount, invested_amount, fully_invested, create_date, close_date)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.full_amount)
        .bind(project.invested_amount)
        .bind(project.close_date.is_some())
        .bind(project.create_date)
        .bind(project.close_date)
        .execute(&self.pool)
        .await
        .change_context(RepositoryError::QueryFailed)
        .attach_printable_lazy(|| format!("Failed to insert project '{}'", project.name))?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait::async_trait]
impl CharityProjectRepository for SqliteCharityProjectRepository {
    #[instrument(skip(self))]
    async fn fully_funded_by_duration(
        &self,
    ) -> error_stack::Result<Vec<CharityProject>, RepositoryError> {
        let projects = sqlx::query_as::<_, CharityProject>(SELECT_FULLY_FUNDED_BY_DURATION)
            .fetch_all(&self.pool)
            .await
            .change_context(RepositoryError::QueryFailed)?;

        tracing::debug!("Found {} fully invested projects", projects.len());
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn project(
        name: &str,
        create_date: NaiveDateTime,
        close_date: Option<NaiveDateTime>,
    ) -> NewCharityProject {
        NewCharityProject {
            name: name.to_string(),
            description: format!("{name} description"),
            full_amount: 1000,
            invested_amount: if close_date.is_some() { 1000 } else { 10 },
            create_date,
            close_date,
        }
    }

    async fn repository() -> SqliteCharityProjectRepository {
        // One connection, otherwise every pooled connection gets its own
        // in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let repository = SqliteCharityProjectRepository::new(pool);
        repository.ensure_schema().await.unwrap();
        repository
    }

    fn names(projects: &[CharityProject]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_ranks_by_duration_and_excludes_open_projects() {
        let repository = repository().await;
        repository
            .insert(&project("A", at(2023, 1, 1, 0), Some(at(2023, 1, 4, 0))))
            .await
            .unwrap();
        repository
            .insert(&project("B", at(2023, 1, 1, 0), Some(at(2023, 1, 2, 0))))
            .await
            .unwrap();
        repository
            .insert(&project("C", at(2023, 1, 1, 0), None))
            .await
            .unwrap();

        let ranked = repository.fully_funded_by_duration().await.unwrap();
        assert_eq!(names(&ranked), vec!["B", "A"]);
        assert!(ranked.iter().all(|p| p.fully_invested));
        assert_eq!(ranked[0].close_date, Some(at(2023, 1, 2, 0)));
    }

    #[tokio::test]
    async fn test_orders_numerically_not_lexically() {
        let repository = repository().await;
        // 10 days vs 9 days vs 2 hours: text comparison would put "10" first.
        repository
            .insert(&project("ten", at(2023, 1, 1, 0), Some(at(2023, 1, 11, 0))))
            .await
            .unwrap();
        repository
            .insert(&project("nine", at(2023, 3, 1, 0), Some(at(2023, 3, 10, 0))))
            .await
            .unwrap();
        repository
            .insert(&project("hours", at(2022, 12, 31, 22), Some(at(2023, 1, 1, 0))))
            .await
            .unwrap();

        let ranked = repository.fully_funded_by_duration().await.unwrap();
        assert_eq!(names(&ranked), vec!["hours", "nine", "ten"]);
    }

    #[tokio::test]
    async fn test_equal_durations_fall_back_to_creation_date() {
        let repository = repository().await;
        repository
            .insert(&project("later", at(2023, 5, 1, 0), Some(at(2023, 5, 3, 0))))
            .await
            .unwrap();
        repository
            .insert(&project("earlier", at(2023, 4, 1, 0), Some(at(2023, 4, 3, 0))))
            .await
            .unwrap();

        let ranked = repository.fully_funded_by_duration().await.unwrap();
        assert_eq!(names(&ranked), vec!["earlier", "later"]);
    }

    #[tokio::test]
    async fn test_empty_when_nothing_is_fully_invested() {
        let repository = repository().await;
        repository
            .insert(&project("open", at(2023, 1, 1, 0), None))
            .await
            .unwrap();

        let ranked = repository.fully_funded_by_duration().await.unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_insert_rejects_close_before_create() {
        let repository = repository().await;
        let error = repository
            .insert(&project("bad", at(2023, 1, 2, 0), Some(at(2023, 1, 1, 0))))
            .await
            .unwrap_err();
        assert!(matches!(
            error.current_context(),
            RepositoryError::InvalidProject { .. }
        ));
    }

    #[tokio::test]
    async fn test_query_fails_without_schema() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let repository = SqliteCharityProjectRepository::new(pool);

        let error = repository.fully_funded_by_duration().await.unwrap_err();
        assert!(matches!(
            error.current_context(),
            RepositoryError::QueryFailed
        ));
    }
}
