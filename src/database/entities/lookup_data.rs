use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reference labels (statuses, priorities, customization types) grouped by
/// `lookup_type`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lookup_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lookup_type: String,
    pub code: String,
    pub label: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
