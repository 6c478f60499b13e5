pub mod charity_project;
pub mod email;
pub mod report;
pub mod sheets;

pub use charity_project::CharityProject;
pub use email::EmailAddress;
