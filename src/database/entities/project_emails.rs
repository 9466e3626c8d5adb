use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Correspondence logged against an engagement. `attachment_path` is relative
/// to the configured upload root.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_emails")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    pub subject: String,
    pub body: Option<String>,
    pub from_address: String,
    pub to_address: String,
    pub sent_at: Option<ChronoDateTimeUtc>,
    pub attachment_path: Option<String>,
    pub created_at: ChronoDateTimeUtc,
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
