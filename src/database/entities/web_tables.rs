use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "web_tables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub module_id: Option<i32>,
    pub table_name: String,
    pub display_name: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module_masters::Entity",
        from = "Column::ModuleId",
        to = "super::module_masters::Column::Id"
    )]
    Module,
}

impl Related<super::module_masters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
