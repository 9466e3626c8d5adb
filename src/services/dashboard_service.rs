use anyhow::Result;
use sea_orm::*;
use serde::Serialize;

use crate::database::entities::{data_transfer_checks, migration_issues, verification_records};

/// Read-only progress summary for one project. Field names follow the JSON
/// contract the SPA consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDashboard {
    pub project_id: i32,
    pub total_transfers: u64,
    pub completed_transfers: u64,
    pub pending_migrations: u64,
    pub total_issues: u64,
    pub total_verifications: u64,
    pub completed_verifications: u64,
    pub transfer_progress: f64,
    pub verification_progress: f64,
    pub completion_percentage: f64,
    pub total_modules: u64,
}

/// Computes per-project summary counts and percentages. Each call re-queries
/// the store; there is no caching and no side effect. A project id with no
/// rows yields all-zero counts.
#[derive(Clone)]
pub struct DashboardService {
    db: DatabaseConnection,
}

impl DashboardService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn project_dashboard(&self, project_id: i32) -> Result<ProjectDashboard> {
        let total_transfers = data_transfer_checks::Entity::find()
            .filter(data_transfer_checks::Column::ProjectId.eq(project_id))
            .count(&self.db)
            .await?;

        let completed_transfers = data_transfer_checks::Entity::find()
            .filter(data_transfer_checks::Column::ProjectId.eq(project_id))
            .filter(data_transfer_checks::Column::IsCompleted.eq(true))
            .count(&self.db)
            .await?;

        let total_issues = migration_issues::Entity::find()
            .filter(migration_issues::Column::ProjectId.eq(project_id))
            .filter(migration_issues::Column::Status.is_in(["Open", "In Progress"]))
            .count(&self.db)
            .await?;

        let total_verifications = verification_records::Entity::find()
            .filter(verification_records::Column::ProjectId.eq(project_id))
            .count(&self.db)
            .await?;

        let completed_verifications = verification_records::Entity::find()
            .filter(verification_records::Column::ProjectId.eq(project_id))
            .filter(verification_records::Column::IsVerified.eq(true))
            .count(&self.db)
            .await?;

        let transfer_progress = percentage(completed_transfers, total_transfers);
        let verification_progress = percentage(completed_verifications, total_verifications);

        Ok(ProjectDashboard {
            project_id,
            total_transfers,
            completed_transfers,
            pending_migrations: total_transfers - completed_transfers,
            total_issues,
            total_verifications,
            completed_verifications,
            transfer_progress,
            verification_progress,
            completion_percentage: transfer_progress,
            total_modules: total_transfers + total_verifications,
        })
    }
}

/// `completed / total * 100` rounded to two decimals; 0 when `total` is 0.
fn percentage(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = completed as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(6, 10), 60.0);
        assert_eq!(percentage(2, 4), 50.0);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
    }
}
