pub mod app;
pub mod error;
pub mod handlers;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

use crate::database::{connection::*, migrations::Migrator, seed_data};
use anyhow::Result;
use sea_orm_migration::prelude::*;
use tracing::info;

pub struct ServerConfig {
    pub port: u16,
    pub database_path: String,
    pub cors_origin: Option<String>,
    pub upload_dir: String,
}

pub async fn start_server(config: ServerConfig) -> Result<()> {
    let database_url = get_database_url(Some(&config.database_path));
    let db = establish_connection(&database_url).await?;

    // Run migrations
    Migrator::up(&db, None).await?;
    info!("Database migrations completed");

    seed_reference_data(&db).await?;

    let app = app::create_app(db, config.cors_origin.as_deref(), &config.upload_dir).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed_reference_data(db: &sea_orm::DatabaseConnection) -> Result<()> {
    seed_data::seed_reference_data(db).await?;
    info!("Reference data seeded");
    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                          - Health check");
    info!("  /api/projects                    - Projects (CRUD, dashboard, clone)");
    info!("  /api/data-transfer-checks        - Transfer checklist");
    info!("  /api/verification-records        - Verification records");
    info!("  /api/customization-points        - Customization points");
    info!("  /api/migration-issues            - Migration issues");
    info!("  /api/field-masters               - Dynamic form field definitions");
    info!("  /api/dynamic-data                - Dynamic form submissions");
    info!("  /api/lookups                     - Lookup labels");
    info!("  /api/module-masters              - Module reference data");
    info!("  /api/web-tables                  - Web table reference data");
    info!("  /api/users                       - User reference data");
    info!("  /api/project-emails              - Project correspondence + attachments");
    info!("  /api/files                       - Upload staging and downloads");
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}
