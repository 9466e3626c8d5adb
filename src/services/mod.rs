pub mod checklist_service;
pub mod clone_service;
pub mod dashboard_service;
pub mod storage_service;

pub use checklist_service::*;
pub use clone_service::*;
pub use dashboard_service::*;
pub use storage_service::*;
