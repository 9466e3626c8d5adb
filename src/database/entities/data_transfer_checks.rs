use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One source-table-to-target-table row count comparison.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "data_transfer_checks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    pub module_name: Option<String>,
    pub desktop_table: String,
    pub web_table: String,
    pub desktop_count: Option<i32>,
    pub web_count: Option<i32>,
    pub status: String,
    pub is_completed: bool,
    pub remarks: Option<String>,
    pub checked_by: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Project,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
