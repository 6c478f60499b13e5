pub mod auth;
pub mod google_spreadsheet_service;
pub mod http_client;
pub mod permission_factory;
pub mod spreadsheet_factory;
pub mod value_range_factory;
