use anyhow::Result;
use chrono::Utc;
use sea_orm::*;
use tracing::info;

use crate::database::entities::{
    data_transfer_checks, field_masters, field_masters::TRANSFER_TEMPLATE_GROUP,
};

/// Seeds a project's transfer checklist from the active field-master template
/// rows the first time the checklist is listed.
#[derive(Clone)]
pub struct ChecklistService {
    db: DatabaseConnection,
}

impl ChecklistService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// No-op once the project has any checks, or when the template group is
    /// empty.
    pub async fn ensure_template_rows(&self, project_id: i32) -> Result<()> {
        let existing = data_transfer_checks::Entity::find()
            .filter(data_transfer_checks::Column::ProjectId.eq(project_id))
            .count(&self.db)
            .await?;
        if existing > 0 {
            return Ok(());
        }

        let template_rows = field_masters::Entity::find()
            .filter(field_masters::Column::GroupId.eq(TRANSFER_TEMPLATE_GROUP))
            .filter(field_masters::Column::IsActive.eq(true))
            .order_by_asc(field_masters::Column::SortOrder)
            .all(&self.db)
            .await?;
        if template_rows.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let checks: Vec<data_transfer_checks::ActiveModel> = template_rows
            .into_iter()
            .map(|field| data_transfer_checks::ActiveModel {
                project_id: Set(project_id),
                module_name: Set(None),
                desktop_table: Set(field.field_name.clone()),
                web_table: Set(field.field_label.unwrap_or(field.field_name)),
                desktop_count: Set(None),
                web_count: Set(None),
                status: Set("Pending".to_string()),
                is_completed: Set(false),
                remarks: Set(None),
                checked_by: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        let seeded = checks.len();
        data_transfer_checks::Entity::insert_many(checks)
            .exec(&self.db)
            .await?;

        info!(
            "Seeded {} transfer checks for project {} from template group",
            seeded, project_id
        );
        Ok(())
    }
}
