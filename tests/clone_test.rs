//! Clone orchestrator tests
//!
//! Covers precondition failures, the all-or-nothing transaction, and
//! generated issue ids.

use anyhow::Result;
use chrono::Utc;
use migratrack::database::entities::*;
use migratrack::database::setup_database;
use migratrack::services::CloneService;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use tempfile::NamedTempFile;

async fn setup_test_db() -> Result<(DatabaseConnection, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_file))
}

async fn insert_project(db: &DatabaseConnection, client_name: &str) -> Result<projects::Model> {
    let now = Utc::now();
    let project = projects::ActiveModel {
        client_name: Set(client_name.to_string()),
        status: Set("Planned".to_string()),
        description: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(project)
}

async fn insert_check(db: &DatabaseConnection, project_id: i32, table: &str) -> Result<()> {
    let now = Utc::now();
    data_transfer_checks::ActiveModel {
        project_id: Set(project_id),
        desktop_table: Set(table.to_string()),
        web_table: Set(table.to_string()),
        status: Set("Pending".to_string()),
        is_completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

async fn insert_verification(db: &DatabaseConnection, project_id: i32, name: &str) -> Result<()> {
    let now = Utc::now();
    verification_records::ActiveModel {
        project_id: Set(project_id),
        check_name: Set(name.to_string()),
        status: Set("Pending".to_string()),
        is_verified: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

async fn insert_customization(db: &DatabaseConnection, project_id: i32, title: &str) -> Result<()> {
    let now = Utc::now();
    customization_points::ActiveModel {
        project_id: Set(project_id),
        title: Set(title.to_string()),
        customization_type: Set("Report".to_string()),
        status: Set("Requested".to_string()),
        is_billable: Set(true),
        estimated_hours: Set(Some(8.0)),
        estimated_cost: Set(Some(1200.0)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

async fn insert_issue(db: &DatabaseConnection, project_id: i32, suffix: &str) -> Result<()> {
    let now = Utc::now();
    let id = format!("ISS-{}-{}", project_id, suffix);
    migration_issues::ActiveModel {
        issue_id: Set(id.clone()),
        issue_number: Set(id),
        project_id: Set(project_id),
        title: Set(format!("Issue {}", suffix)),
        description: Set(None),
        status: Set("Open".to_string()),
        priority: Set("Medium".to_string()),
        reported_by: Set(None),
        assigned_to: Set(None),
        resolution: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(())
}

async fn child_counts(db: &DatabaseConnection, project_id: i32) -> Result<(u64, u64, u64, u64)> {
    let checks = data_transfer_checks::Entity::find()
        .filter(data_transfer_checks::Column::ProjectId.eq(project_id))
        .count(db)
        .await?;
    let verifications = verification_records::Entity::find()
        .filter(verification_records::Column::ProjectId.eq(project_id))
        .count(db)
        .await?;
    let customizations = customization_points::Entity::find()
        .filter(customization_points::Column::ProjectId.eq(project_id))
        .count(db)
        .await?;
    let issues = migration_issues::Entity::find()
        .filter(migration_issues::Column::ProjectId.eq(project_id))
        .count(db)
        .await?;
    Ok((checks, verifications, customizations, issues))
}

fn assert_issue_id_format(id: &str, target: i32) {
    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 4, "unexpected issue id shape: {}", id);
    assert_eq!(parts[0], "ISS");
    assert_eq!(parts[1], target.to_string());
    assert_eq!(parts[2].len(), 6, "stamp should be HHmmss: {}", id);
    assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[3].len(), 3, "sequence should be zero-padded: {}", id);
    assert!(parts[3].chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn clone_with_missing_project_returns_false_without_side_effects() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let source = insert_project(&db, "Source Co").await?;
    insert_check(&db, source.id, "customers").await?;
    insert_issue(&db, source.id, "120000-001").await?;

    let clone_service = CloneService::new(db.clone());

    assert!(!clone_service.clone_project_data(source.id, 9999).await?);
    assert!(!clone_service.clone_project_data(9999, source.id).await?);

    // Source untouched, phantom target untouched
    assert_eq!(child_counts(&db, source.id).await?, (1, 0, 0, 1));
    assert_eq!(child_counts(&db, 9999).await?, (0, 0, 0, 0));

    Ok(())
}

#[tokio::test]
async fn clone_copies_every_category_into_target() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let source = insert_project(&db, "Template Co").await?;
    let target = insert_project(&db, "New Client").await?;

    insert_check(&db, source.id, "customers").await?;
    insert_check(&db, source.id, "vendors").await?;
    insert_verification(&db, source.id, "GL totals").await?;
    insert_customization(&db, source.id, "Custom aging report").await?;
    insert_customization(&db, source.id, "Invoice template").await?;
    insert_issue(&db, source.id, "120000-001").await?;
    insert_issue(&db, source.id, "120000-002").await?;
    insert_issue(&db, source.id, "120000-003").await?;

    // Target already has one check of its own
    insert_check(&db, target.id, "items").await?;

    let before_target = child_counts(&db, target.id).await?;
    let before_source = child_counts(&db, source.id).await?;

    let clone_service = CloneService::new(db.clone());
    assert!(clone_service.clone_project_data(source.id, target.id).await?);

    let after_target = child_counts(&db, target.id).await?;
    assert_eq!(after_target.0, before_target.0 + before_source.0);
    assert_eq!(after_target.1, before_target.1 + before_source.1);
    assert_eq!(after_target.2, before_target.2 + before_source.2);
    assert_eq!(after_target.3, before_target.3 + before_source.3);

    // Source rows unchanged
    assert_eq!(child_counts(&db, source.id).await?, before_source);

    // Every copied row points at the target
    let copied_checks = data_transfer_checks::Entity::find()
        .filter(data_transfer_checks::Column::ProjectId.eq(target.id))
        .all(&db)
        .await?;
    assert!(copied_checks.iter().all(|c| c.project_id == target.id));

    Ok(())
}

#[tokio::test]
async fn cloned_issue_ids_are_fresh_distinct_and_well_formed() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let source = insert_project(&db, "Template Co").await?;
    let target = insert_project(&db, "New Client").await?;

    insert_issue(&db, source.id, "120000-001").await?;
    insert_issue(&db, source.id, "120000-002").await?;
    insert_issue(&db, source.id, "120000-003").await?;

    let clone_service = CloneService::new(db.clone());
    assert!(clone_service.clone_project_data(source.id, target.id).await?);

    let cloned = migration_issues::Entity::find()
        .filter(migration_issues::Column::ProjectId.eq(target.id))
        .all(&db)
        .await?;
    assert_eq!(cloned.len(), 3);

    let mut ids: Vec<&str> = cloned.iter().map(|i| i.issue_id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3, "cloned issue ids must be pairwise distinct");

    for issue in &cloned {
        assert_issue_id_format(&issue.issue_id, target.id);
        assert_eq!(issue.issue_number, issue.issue_id);
    }

    // Source ids untouched
    let source_issues = migration_issues::Entity::find()
        .filter(migration_issues::Column::ProjectId.eq(source.id))
        .all(&db)
        .await?;
    assert_eq!(source_issues.len(), 3);
    assert!(source_issues
        .iter()
        .all(|i| i.issue_id.starts_with(&format!("ISS-{}-120000", source.id))));

    Ok(())
}

#[tokio::test]
async fn clone_rolls_back_all_categories_when_issue_insert_fails() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let source = insert_project(&db, "Template Co").await?;
    let target = insert_project(&db, "New Client").await?;

    insert_check(&db, source.id, "customers").await?;
    insert_verification(&db, source.id, "GL totals").await?;
    insert_customization(&db, source.id, "Custom aging report").await?;
    insert_issue(&db, source.id, "120000-001").await?;

    // Injected failure: the fourth category's table is gone, so the issue
    // step errors after the first three categories were queued.
    db.execute_unprepared("DROP TABLE migration_issues").await?;

    let clone_service = CloneService::new(db.clone());
    let result = clone_service.clone_project_data(source.id, target.id).await;
    assert!(result.is_err());

    // Nothing from the earlier categories may survive the rollback
    let checks = data_transfer_checks::Entity::find()
        .filter(data_transfer_checks::Column::ProjectId.eq(target.id))
        .count(&db)
        .await?;
    let verifications = verification_records::Entity::find()
        .filter(verification_records::Column::ProjectId.eq(target.id))
        .count(&db)
        .await?;
    let customizations = customization_points::Entity::find()
        .filter(customization_points::Column::ProjectId.eq(target.id))
        .count(&db)
        .await?;
    assert_eq!((checks, verifications, customizations), (0, 0, 0));

    Ok(())
}

#[tokio::test]
async fn clone_into_empty_project_matches_source_exactly() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let source = insert_project(&db, "Template Co").await?;
    let target = insert_project(&db, "Empty Co").await?;

    insert_issue(&db, source.id, "120000-001").await?;
    insert_issue(&db, source.id, "120000-002").await?;
    insert_issue(&db, source.id, "120000-003").await?;
    insert_customization(&db, source.id, "Custom aging report").await?;
    insert_customization(&db, source.id, "Invoice template").await?;

    let clone_service = CloneService::new(db.clone());
    assert!(clone_service.clone_project_data(source.id, target.id).await?);

    assert_eq!(child_counts(&db, target.id).await?, (0, 0, 2, 3));
    assert_eq!(child_counts(&db, source.id).await?, (0, 0, 2, 3));

    Ok(())
}
