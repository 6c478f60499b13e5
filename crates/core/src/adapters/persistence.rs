pub mod sqlite_charity_project_repository;
