use anyhow::Result;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::handlers::{
    customizations, dynamic_data, emails, field_masters, files, health, issues, lookups,
    module_masters, projects, transfer_checks, users, verifications, web_tables,
};
use crate::services::StorageService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: StorageService,
}

pub async fn create_app(
    db: DatabaseConnection,
    cors_origin: Option<&str>,
    upload_dir: &str,
) -> Result<Router> {
    let storage = StorageService::new(upload_dir);
    let serve_uploads = ServeDir::new(storage.root().to_path_buf());
    let state = AppState { db, storage };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // API routes
        .nest("/api", api_routes())
        // Stored uploads (email attachments, spreadsheet staging)
        .nest_service("/api/files/download", serve_uploads)
        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Project routes
        .route("/projects", get(projects::list_projects))
        .route("/projects", post(projects::create_project))
        .route("/projects/:id", get(projects::get_project))
        .route("/projects/:id", put(projects::update_project))
        .route("/projects/:id", delete(projects::delete_project))
        .route("/projects/:id/dashboard", get(projects::project_dashboard))
        .route(
            "/projects/:source_id/clone/:target_id",
            post(projects::clone_project),
        )
        // Transfer checklist routes
        .route("/data-transfer-checks", get(transfer_checks::list_checks))
        .route("/data-transfer-checks", post(transfer_checks::create_check))
        .route(
            "/data-transfer-checks/project/:project_id",
            get(transfer_checks::list_checks_for_project),
        )
        .route("/data-transfer-checks/:id", get(transfer_checks::get_check))
        .route(
            "/data-transfer-checks/:id",
            put(transfer_checks::update_check),
        )
        .route(
            "/data-transfer-checks/:id",
            delete(transfer_checks::delete_check),
        )
        // Verification record routes
        .route("/verification-records", get(verifications::list_records))
        .route("/verification-records", post(verifications::create_record))
        .route(
            "/verification-records/project/:project_id",
            get(verifications::list_records_for_project),
        )
        .route("/verification-records/:id", get(verifications::get_record))
        .route(
            "/verification-records/:id",
            put(verifications::update_record),
        )
        .route(
            "/verification-records/:id",
            delete(verifications::delete_record),
        )
        // Customization point routes
        .route("/customization-points", get(customizations::list_points))
        .route("/customization-points", post(customizations::create_point))
        .route(
            "/customization-points/project/:project_id",
            get(customizations::list_points_for_project),
        )
        .route("/customization-points/:id", get(customizations::get_point))
        .route(
            "/customization-points/:id",
            put(customizations::update_point),
        )
        .route(
            "/customization-points/:id",
            delete(customizations::delete_point),
        )
        // Migration issue routes (string ids)
        .route("/migration-issues", get(issues::list_issues))
        .route("/migration-issues", post(issues::create_issue))
        .route(
            "/migration-issues/project/:project_id",
            get(issues::list_issues_for_project),
        )
        .route("/migration-issues/:id", get(issues::get_issue))
        .route("/migration-issues/:id", put(issues::update_issue))
        .route("/migration-issues/:id", delete(issues::delete_issue))
        // Field master routes
        .route("/field-masters", get(field_masters::list_fields))
        .route("/field-masters", post(field_masters::create_field))
        .route(
            "/field-masters/group/:group_id",
            get(field_masters::list_fields_for_group),
        )
        .route("/field-masters/:id", get(field_masters::get_field))
        .route("/field-masters/:id", put(field_masters::update_field))
        .route("/field-masters/:id", delete(field_masters::delete_field))
        // Dynamic form submission routes
        .route("/dynamic-data", get(dynamic_data::list_entries))
        .route("/dynamic-data", post(dynamic_data::create_entry))
        .route(
            "/dynamic-data/project/:project_id",
            get(dynamic_data::list_entries_for_project),
        )
        .route("/dynamic-data/:id", get(dynamic_data::get_entry))
        .route("/dynamic-data/:id", put(dynamic_data::update_entry))
        .route("/dynamic-data/:id", delete(dynamic_data::delete_entry))
        // Lookup routes
        .route("/lookups", get(lookups::list_lookups))
        .route("/lookups", post(lookups::create_lookup))
        .route("/lookups/type/:lookup_type", get(lookups::list_lookups_by_type))
        .route("/lookups/:id", get(lookups::get_lookup))
        .route("/lookups/:id", put(lookups::update_lookup))
        .route("/lookups/:id", delete(lookups::delete_lookup))
        // Module master routes
        .route("/module-masters", get(module_masters::list_modules))
        .route("/module-masters", post(module_masters::create_module))
        .route("/module-masters/:id", get(module_masters::get_module))
        .route("/module-masters/:id", put(module_masters::update_module))
        .route("/module-masters/:id", delete(module_masters::delete_module))
        // Web table routes
        .route("/web-tables", get(web_tables::list_tables))
        .route("/web-tables", post(web_tables::create_table))
        .route("/web-tables/:id", get(web_tables::get_table))
        .route("/web-tables/:id", put(web_tables::update_table))
        .route("/web-tables/:id", delete(web_tables::delete_table))
        // User routes (reference data only)
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        // Project email routes
        .route("/project-emails", get(emails::list_emails))
        .route("/project-emails", post(emails::create_email))
        .route(
            "/project-emails/project/:project_id",
            get(emails::list_emails_for_project),
        )
        .route("/project-emails/:id", get(emails::get_email))
        .route("/project-emails/:id", put(emails::update_email))
        .route("/project-emails/:id", delete(emails::delete_email))
        .route(
            "/project-emails/:id/attachment",
            post(emails::upload_attachment),
        )
        // Spreadsheet upload staging
        .route("/files/upload", post(files::upload_file))
}
