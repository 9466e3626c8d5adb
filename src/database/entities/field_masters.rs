use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Schema row driving dynamic form rendering and checklist templates.
/// Rows tagged with [`TRANSFER_TEMPLATE_GROUP`] seed a project's transfer
/// checklist the first time it is listed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "field_masters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    pub field_name: String,
    pub field_label: Option<String>,
    pub data_type: String,
    pub options: Option<String>,
    pub is_required: bool,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Reserved group id marking field rows that act as the transfer-check
/// checklist template.
pub const TRANSFER_TEMPLATE_GROUP: i32 = 9;

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Discriminator for how a dynamic form field is captured. Stored as its
/// string form in `data_type`; unknown stored values are rejected at the API
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldDataType {
    Text,
    Number,
    Date,
    Checkbox,
    Dropdown,
    TextArea,
}

impl FieldDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldDataType::Text => "text",
            FieldDataType::Number => "number",
            FieldDataType::Date => "date",
            FieldDataType::Checkbox => "checkbox",
            FieldDataType::Dropdown => "dropdown",
            FieldDataType::TextArea => "textarea",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(FieldDataType::Text),
            "number" => Some(FieldDataType::Number),
            "date" => Some(FieldDataType::Date),
            "checkbox" => Some(FieldDataType::Checkbox),
            "dropdown" => Some(FieldDataType::Dropdown),
            "textarea" => Some(FieldDataType::TextArea),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_round_trips_stored_form() {
        for dt in [
            FieldDataType::Text,
            FieldDataType::Number,
            FieldDataType::Date,
            FieldDataType::Checkbox,
            FieldDataType::Dropdown,
            FieldDataType::TextArea,
        ] {
            assert_eq!(FieldDataType::parse(dt.as_str()), Some(dt));
        }
    }

    #[test]
    fn unknown_data_type_is_rejected() {
        assert_eq!(FieldDataType::parse("richtext"), None);
    }
}
