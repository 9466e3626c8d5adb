//! Dashboard aggregation tests

use anyhow::Result;
use chrono::Utc;
use migratrack::database::entities::*;
use migratrack::database::setup_database;
use migratrack::services::DashboardService;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
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
        status: Set("In Progress".to_string()),
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

async fn insert_check(db: &DatabaseConnection, project_id: i32, completed: bool) -> Result<()> {
    let now = Utc::now();
    data_transfer_checks::ActiveModel {
        project_id: Set(project_id),
        desktop_table: Set("table".to_string()),
        web_table: Set("table".to_string()),
        status: Set(if completed { "Completed" } else { "Pending" }.to_string()),
        is_completed: Set(completed),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

async fn insert_verification(db: &DatabaseConnection, project_id: i32, verified: bool) -> Result<()> {
    let now = Utc::now();
    verification_records::ActiveModel {
        project_id: Set(project_id),
        check_name: Set("check".to_string()),
        status: Set(if verified { "Verified" } else { "Pending" }.to_string()),
        is_verified: Set(verified),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}

async fn insert_issue(
    db: &DatabaseConnection,
    project_id: i32,
    suffix: &str,
    status: &str,
) -> Result<()> {
    let now = Utc::now();
    let id = format!("ISS-{}-{}", project_id, suffix);
    migration_issues::ActiveModel {
        issue_id: Set(id.clone()),
        issue_number: Set(id),
        project_id: Set(project_id),
        title: Set("issue".to_string()),
        description: Set(None),
        status: Set(status.to_string()),
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

#[tokio::test]
async fn dashboard_for_project_without_rows_is_all_zero() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let project = insert_project(&db, "Fresh Co").await?;

    let dashboard = DashboardService::new(db.clone())
        .project_dashboard(project.id)
        .await?;

    assert_eq!(dashboard.total_transfers, 0);
    assert_eq!(dashboard.completed_transfers, 0);
    assert_eq!(dashboard.pending_migrations, 0);
    assert_eq!(dashboard.total_issues, 0);
    assert_eq!(dashboard.total_verifications, 0);
    assert_eq!(dashboard.transfer_progress, 0.0);
    assert_eq!(dashboard.verification_progress, 0.0);
    assert_eq!(dashboard.completion_percentage, 0.0);
    assert_eq!(dashboard.total_modules, 0);

    Ok(())
}

#[tokio::test]
async fn dashboard_scenario_matches_expected_percentages() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let project = insert_project(&db, "Acme Corp").await?;

    // 10 transfer checks, 6 completed
    for i in 0..10 {
        insert_check(&db, project.id, i < 6).await?;
    }
    // 4 verification records, 2 verified
    for i in 0..4 {
        insert_verification(&db, project.id, i < 2).await?;
    }

    let dashboard = DashboardService::new(db.clone())
        .project_dashboard(project.id)
        .await?;

    assert_eq!(dashboard.total_transfers, 10);
    assert_eq!(dashboard.completed_transfers, 6);
    assert_eq!(dashboard.transfer_progress, 60.00);
    assert_eq!(dashboard.verification_progress, 50.00);
    assert_eq!(dashboard.completion_percentage, 60.00);
    assert_eq!(dashboard.total_modules, 14);
    assert_eq!(
        dashboard.pending_migrations,
        dashboard.total_transfers - dashboard.completed_transfers
    );

    Ok(())
}

#[tokio::test]
async fn dashboard_counts_only_open_and_in_progress_issues() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let project = insert_project(&db, "Acme Corp").await?;

    insert_issue(&db, project.id, "120000-001", "Open").await?;
    insert_issue(&db, project.id, "120000-002", "In Progress").await?;
    insert_issue(&db, project.id, "120000-003", "Resolved").await?;
    insert_issue(&db, project.id, "120000-004", "Closed").await?;

    let dashboard = DashboardService::new(db.clone())
        .project_dashboard(project.id)
        .await?;

    assert_eq!(dashboard.total_issues, 2);

    Ok(())
}

#[tokio::test]
async fn dashboard_does_not_mutate_anything() -> Result<()> {
    let (db, _temp_file) = setup_test_db().await?;
    let project = insert_project(&db, "Acme Corp").await?;
    insert_check(&db, project.id, true).await?;

    let service = DashboardService::new(db.clone());
    let first = service.project_dashboard(project.id).await?;
    let second = service.project_dashboard(project.id).await?;

    assert_eq!(first, second);

    Ok(())
}
