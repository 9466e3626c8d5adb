use anyhow::Result;
use chrono::Utc;
use sea_orm::*;
use tracing::info;

use crate::database::entities::{
    customization_points, data_transfer_checks, migration_issues, projects, verification_records,
};

/// Copies a source project's transfer checks, verifications, customizations,
/// and issues into a target project inside one all-or-nothing transaction.
/// Used to reuse a finished engagement as a template for a new one.
#[derive(Clone)]
pub struct CloneService {
    db: DatabaseConnection,
}

impl CloneService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns `Ok(false)` without side effects when either project id does
    /// not resolve. Any database error mid-copy rolls back every category and
    /// propagates to the caller.
    pub async fn clone_project_data(
        &self,
        source_project_id: i32,
        target_project_id: i32,
    ) -> Result<bool> {
        let source = projects::Entity::find_by_id(source_project_id)
            .one(&self.db)
            .await?;
        let target = projects::Entity::find_by_id(target_project_id)
            .one(&self.db)
            .await?;
        if source.is_none() || target.is_none() {
            return Ok(false);
        }

        let txn = self.db.begin().await?;
        let now = Utc::now();

        // Categories are copied in a fixed order so generated issue ids stay
        // monotonic relative to log output.
        let transfer_count =
            Self::clone_transfer_checks(&txn, source_project_id, target_project_id, now).await?;
        let verification_count =
            Self::clone_verifications(&txn, source_project_id, target_project_id, now).await?;
        let customization_count =
            Self::clone_customizations(&txn, source_project_id, target_project_id, now).await?;
        let issue_count =
            Self::clone_issues(&txn, source_project_id, target_project_id, now).await?;

        txn.commit().await?;

        info!(
            "Cloned project {} into {}: {} checks, {} verifications, {} customizations, {} issues",
            source_project_id,
            target_project_id,
            transfer_count,
            verification_count,
            customization_count,
            issue_count
        );

        Ok(true)
    }

    async fn clone_transfer_checks(
        txn: &DatabaseTransaction,
        source_project_id: i32,
        target_project_id: i32,
        now: chrono::DateTime<Utc>,
    ) -> Result<usize> {
        let rows = data_transfer_checks::Entity::find()
            .filter(data_transfer_checks::Column::ProjectId.eq(source_project_id))
            .all(txn)
            .await?;

        let copies: Vec<data_transfer_checks::ActiveModel> = rows
            .into_iter()
            .map(|row| data_transfer_checks::ActiveModel {
                project_id: Set(target_project_id),
                module_name: Set(row.module_name),
                desktop_table: Set(row.desktop_table),
                web_table: Set(row.web_table),
                desktop_count: Set(row.desktop_count),
                web_count: Set(row.web_count),
                status: Set(row.status),
                is_completed: Set(row.is_completed),
                remarks: Set(row.remarks),
                checked_by: Set(row.checked_by),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        let count = copies.len();
        if !copies.is_empty() {
            data_transfer_checks::Entity::insert_many(copies)
                .exec(txn)
                .await?;
        }
        Ok(count)
    }

    async fn clone_verifications(
        txn: &DatabaseTransaction,
        source_project_id: i32,
        target_project_id: i32,
        now: chrono::DateTime<Utc>,
    ) -> Result<usize> {
        let rows = verification_records::Entity::find()
            .filter(verification_records::Column::ProjectId.eq(source_project_id))
            .all(txn)
            .await?;

        let copies: Vec<verification_records::ActiveModel> = rows
            .into_iter()
            .map(|row| verification_records::ActiveModel {
                project_id: Set(target_project_id),
                check_name: Set(row.check_name),
                sql_query: Set(row.sql_query),
                expected_value: Set(row.expected_value),
                actual_value: Set(row.actual_value),
                status: Set(row.status),
                is_verified: Set(row.is_verified),
                verified_by: Set(row.verified_by),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        let count = copies.len();
        if !copies.is_empty() {
            verification_records::Entity::insert_many(copies)
                .exec(txn)
                .await?;
        }
        Ok(count)
    }

    async fn clone_customizations(
        txn: &DatabaseTransaction,
        source_project_id: i32,
        target_project_id: i32,
        now: chrono::DateTime<Utc>,
    ) -> Result<usize> {
        let rows = customization_points::Entity::find()
            .filter(customization_points::Column::ProjectId.eq(source_project_id))
            .all(txn)
            .await?;

        let copies: Vec<customization_points::ActiveModel> = rows
            .into_iter()
            .map(|row| customization_points::ActiveModel {
                project_id: Set(target_project_id),
                title: Set(row.title),
                description: Set(row.description),
                customization_type: Set(row.customization_type),
                status: Set(row.status),
                is_billable: Set(row.is_billable),
                estimated_hours: Set(row.estimated_hours),
                estimated_cost: Set(row.estimated_cost),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();

        let count = copies.len();
        if !copies.is_empty() {
            customization_points::Entity::insert_many(copies)
                .exec(txn)
                .await?;
        }
        Ok(count)
    }

    async fn clone_issues(
        txn: &DatabaseTransaction,
        source_project_id: i32,
        target_project_id: i32,
        now: chrono::DateTime<Utc>,
    ) -> Result<usize> {
        let rows = migration_issues::Entity::find()
            .filter(migration_issues::Column::ProjectId.eq(source_project_id))
            .all(txn)
            .await?;

        // Issues carry a string business key, so each copy gets a freshly
        // generated id. The HHmmss stamp can collide if the same target is
        // cloned into twice within one second; accepted limitation.
        let copies: Vec<migration_issues::ActiveModel> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let issue_id = generate_issue_id(target_project_id, now, i + 1);
                migration_issues::ActiveModel {
                    issue_id: Set(issue_id.clone()),
                    issue_number: Set(issue_id),
                    project_id: Set(target_project_id),
                    title: Set(row.title),
                    description: Set(row.description),
                    status: Set(row.status),
                    priority: Set(row.priority),
                    reported_by: Set(row.reported_by),
                    assigned_to: Set(row.assigned_to),
                    resolution: Set(row.resolution),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
            })
            .collect();

        let count = copies.len();
        if !copies.is_empty() {
            migration_issues::Entity::insert_many(copies).exec(txn).await?;
        }
        Ok(count)
    }
}

/// Issue ids look like `ISS-12-143059-001`: target project id, HHmmss stamp,
/// then a zero-padded per-call sequence starting at 1.
pub fn generate_issue_id(project_id: i32, stamp: chrono::DateTime<Utc>, sequence: usize) -> String {
    format!(
        "ISS-{}-{}-{:03}",
        project_id,
        stamp.format("%H%M%S"),
        sequence
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn issue_id_format() {
        let stamp = Utc.with_ymd_and_hms(2025, 3, 4, 14, 30, 59).unwrap();
        assert_eq!(generate_issue_id(12, stamp, 1), "ISS-12-143059-001");
        assert_eq!(generate_issue_id(12, stamp, 42), "ISS-12-143059-042");
    }

    #[test]
    fn issue_ids_distinct_within_call() {
        let stamp = Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 1).unwrap();
        let ids: Vec<String> = (1..=5).map(|i| generate_issue_id(7, stamp, i)).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
