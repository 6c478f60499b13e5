pub mod charity_project_repository;
pub mod clock;
pub mod command_handler;
pub mod routine;
pub mod spreadsheet_service;
