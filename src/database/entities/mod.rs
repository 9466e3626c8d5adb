pub mod customization_points;
pub mod data_transfer_checks;
pub mod dynamic_module_data;
pub mod field_masters;
pub mod lookup_data;
pub mod migration_issues;
pub mod module_masters;
pub mod project_emails;
pub mod projects;
pub mod users;
pub mod verification_records;
pub mod web_tables;

pub use customization_points::*;
pub use data_transfer_checks::*;
pub use dynamic_module_data::*;
pub use field_masters::*;
pub use lookup_data::*;
pub use migration_issues::*;
pub use module_masters::*;
pub use project_emails::*;
pub use projects::*;
pub use users::*;
pub use verification_records::*;
pub use web_tables::*;
