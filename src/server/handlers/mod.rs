pub mod customizations;
pub mod dynamic_data;
pub mod emails;
pub mod field_masters;
pub mod files;
pub mod health;
pub mod issues;
pub mod lookups;
pub mod module_masters;
pub mod projects;
pub mod transfer_checks;
pub mod users;
pub mod verifications;
pub mod web_tables;
