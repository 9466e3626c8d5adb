use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "module_masters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub module_name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::web_tables::Entity")]
    WebTables,
}

impl Related<super::web_tables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebTables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
