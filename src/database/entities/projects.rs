use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A client migration engagement. Root aggregate for every per-engagement
/// child record; removed via the `is_active` soft-delete flag, never deleted
/// through the API.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_name: String,
    pub status: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::data_transfer_checks::Entity")]
    DataTransferChecks,
    #[sea_orm(has_many = "super::verification_records::Entity")]
    VerificationRecords,
    #[sea_orm(has_many = "super::customization_points::Entity")]
    CustomizationPoints,
    #[sea_orm(has_many = "super::migration_issues::Entity")]
    MigrationIssues,
    #[sea_orm(has_many = "super::project_emails::Entity")]
    ProjectEmails,
    #[sea_orm(has_many = "super::dynamic_module_data::Entity")]
    DynamicModuleData,
}

impl Related<super::data_transfer_checks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataTransferChecks.def()
    }
}

impl Related<super::verification_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VerificationRecords.def()
    }
}

impl Related<super::customization_points::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomizationPoints.def()
    }
}

impl Related<super::migration_issues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MigrationIssues.def()
    }
}

impl Related<super::project_emails::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectEmails.def()
    }
}

impl Related<super::dynamic_module_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DynamicModuleData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
