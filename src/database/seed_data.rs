use anyhow::Result;
use sea_orm::*;
use tracing::info;

use crate::database::entities::{field_masters, field_masters::TRANSFER_TEMPLATE_GROUP, lookup_data};

/// Seed reference labels and the transfer-check template group. Safe to call
/// on every startup; existing rows are left alone.
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<()> {
    seed_lookup_data(db).await?;
    seed_transfer_template(db).await?;
    Ok(())
}

async fn seed_lookup_data(db: &DatabaseConnection) -> Result<()> {
    let existing = lookup_data::Entity::find().count(db).await?;
    if existing > 0 {
        info!("Lookup data already present, skipping seed");
        return Ok(());
    }

    info!("Seeding lookup data");

    let rows = vec![
        ("status", "Pending", "Pending"),
        ("status", "In Progress", "In Progress"),
        ("status", "Completed", "Completed"),
        ("status", "Failed", "Failed"),
        ("issue_status", "Open", "Open"),
        ("issue_status", "In Progress", "In Progress"),
        ("issue_status", "Resolved", "Resolved"),
        ("issue_status", "Closed", "Closed"),
        ("priority", "Low", "Low"),
        ("priority", "Medium", "Medium"),
        ("priority", "High", "High"),
        ("priority", "Critical", "Critical"),
        ("customization_type", "Report", "Report"),
        ("customization_type", "Form", "Form"),
        ("customization_type", "Workflow", "Workflow"),
        ("customization_type", "Integration", "Integration"),
    ];

    let models: Vec<lookup_data::ActiveModel> = rows
        .into_iter()
        .enumerate()
        .map(|(i, (lookup_type, code, label))| lookup_data::ActiveModel {
            lookup_type: Set(lookup_type.to_string()),
            code: Set(code.to_string()),
            label: Set(label.to_string()),
            sort_order: Set(i as i32),
            is_active: Set(true),
            ..Default::default()
        })
        .collect();

    lookup_data::Entity::insert_many(models).exec(db).await?;
    Ok(())
}

async fn seed_transfer_template(db: &DatabaseConnection) -> Result<()> {
    let existing = field_masters::Entity::find()
        .filter(field_masters::Column::GroupId.eq(TRANSFER_TEMPLATE_GROUP))
        .count(db)
        .await?;
    if existing > 0 {
        info!("Transfer-check template already present, skipping seed");
        return Ok(());
    }

    info!("Seeding transfer-check template field group");

    let tables = vec![
        ("customers", "Customers"),
        ("vendors", "Vendors"),
        ("items", "Items"),
        ("invoices", "Invoices"),
        ("payments", "Payments"),
        ("gl_accounts", "GL Accounts"),
    ];

    let models: Vec<field_masters::ActiveModel> = tables
        .into_iter()
        .enumerate()
        .map(|(i, (name, label))| field_masters::ActiveModel {
            group_id: Set(TRANSFER_TEMPLATE_GROUP),
            field_name: Set(name.to_string()),
            field_label: Set(Some(label.to_string())),
            data_type: Set("text".to_string()),
            options: Set(None),
            is_required: Set(false),
            sort_order: Set(i as i32),
            is_active: Set(true),
            ..Default::default()
        })
        .collect();

    field_masters::Entity::insert_many(models).exec(db).await?;
    Ok(())
}
