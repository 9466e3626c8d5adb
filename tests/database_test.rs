//! Database functionality tests
//!
//! Tests for migrations, entity operations, and data integrity

use anyhow::Result;
use chrono::Utc;
use migratrack::database::entities::*;
use migratrack::database::setup_database;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tempfile::NamedTempFile;

/// Create a test database connection with migrations
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

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    // Verify all tables exist by attempting to query them
    assert_eq!(projects::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(data_transfer_checks::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(verification_records::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(customization_points::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(migration_issues::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(field_masters::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(lookup_data::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(module_masters::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(web_tables::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(users::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(project_emails::Entity::find().all(&db).await?.len(), 0);
    assert_eq!(dynamic_module_data::Entity::find().all(&db).await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_project_crud_operations() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    // Create project
    let project = insert_project(&db, "Acme Corp").await?;
    assert_eq!(project.client_name, "Acme Corp");
    assert!(project.is_active);

    // Read project
    let found_project = projects::Entity::find_by_id(project.id)
        .one(&db)
        .await?
        .expect("Project should exist");

    assert_eq!(found_project.id, project.id);
    assert_eq!(found_project.client_name, "Acme Corp");

    // Update project
    let mut project_update: projects::ActiveModel = found_project.into();
    project_update.status = Set("In Progress".to_string());

    let updated_project = project_update.update(&db).await?;
    assert_eq!(updated_project.status, "In Progress");

    // Soft delete: flip is_active rather than removing the row
    let mut project_update: projects::ActiveModel = updated_project.into();
    project_update.is_active = Set(false);
    let deactivated = project_update.update(&db).await?;
    assert!(!deactivated.is_active);

    let still_there = projects::Entity::find_by_id(deactivated.id).one(&db).await?;
    assert!(still_there.is_some());

    Ok(())
}

#[tokio::test]
async fn test_child_rows_reference_project() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    let project = insert_project(&db, "Globex").await?;
    let now = Utc::now();

    data_transfer_checks::ActiveModel {
        project_id: Set(project.id),
        desktop_table: Set("customers".to_string()),
        web_table: Set("Customers".to_string()),
        status: Set("Pending".to_string()),
        is_completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    verification_records::ActiveModel {
        project_id: Set(project.id),
        check_name: Set("Customer balance totals".to_string()),
        status: Set("Pending".to_string()),
        is_verified: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    migration_issues::ActiveModel {
        issue_id: Set(format!("ISS-{}-120000-001", project.id)),
        issue_number: Set(format!("ISS-{}-120000-001", project.id)),
        project_id: Set(project.id),
        title: Set("Missing invoices".to_string()),
        description: Set(None),
        status: Set("Open".to_string()),
        priority: Set("High".to_string()),
        reported_by: Set(None),
        assigned_to: Set(None),
        resolution: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;

    // Cascade delete: hard-deleting the project removes all child rows
    projects::Entity::delete_by_id(project.id).exec(&db).await?;

    let remaining_checks = data_transfer_checks::Entity::find()
        .filter(data_transfer_checks::Column::ProjectId.eq(project.id))
        .all(&db)
        .await?;
    assert_eq!(remaining_checks.len(), 0);

    let remaining_records = verification_records::Entity::find()
        .filter(verification_records::Column::ProjectId.eq(project.id))
        .all(&db)
        .await?;
    assert_eq!(remaining_records.len(), 0);

    let remaining_issues = migration_issues::Entity::find()
        .filter(migration_issues::Column::ProjectId.eq(project.id))
        .all(&db)
        .await?;
    assert_eq!(remaining_issues.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_seed_reference_data_is_idempotent() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;

    migratrack::database::seed_data::seed_reference_data(&db).await?;
    let lookups_after_first = lookup_data::Entity::find().all(&db).await?.len();
    let fields_after_first = field_masters::Entity::find().all(&db).await?.len();
    assert!(lookups_after_first > 0);
    assert!(fields_after_first > 0);

    migratrack::database::seed_data::seed_reference_data(&db).await?;
    assert_eq!(lookup_data::Entity::find().all(&db).await?.len(), lookups_after_first);
    assert_eq!(field_masters::Entity::find().all(&db).await?.len(), fields_after_first);

    Ok(())
}
