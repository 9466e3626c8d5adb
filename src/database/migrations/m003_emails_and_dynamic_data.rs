use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create project_emails table
        manager
            .create_table(
                Table::create()
                    .table(ProjectEmails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectEmails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmails::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectEmails::Subject).string().not_null())
                    .col(ColumnDef::new(ProjectEmails::Body).text())
                    .col(
                        ColumnDef::new(ProjectEmails::FromAddress)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectEmails::ToAddress).string().not_null())
                    .col(ColumnDef::new(ProjectEmails::SentAt).timestamp())
                    .col(ColumnDef::new(ProjectEmails::AttachmentPath).string())
                    .col(
                        ColumnDef::new(ProjectEmails::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_emails_project_id")
                            .from(ProjectEmails::Table, ProjectEmails::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_emails_project_id")
                    .table(ProjectEmails::Table)
                    .col(ProjectEmails::ProjectId)
                    .to_owned(),
            )
            .await?;

        // Create dynamic_module_data table
        manager
            .create_table(
                Table::create()
                    .table(DynamicModuleData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DynamicModuleData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DynamicModuleData::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DynamicModuleData::GroupId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DynamicModuleData::FieldValues)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DynamicModuleData::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DynamicModuleData::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dynamic_module_data_project_id")
                            .from(DynamicModuleData::Table, DynamicModuleData::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dynamic_module_data_project_group")
                    .table(DynamicModuleData::Table)
                    .col(DynamicModuleData::ProjectId)
                    .col(DynamicModuleData::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DynamicModuleData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectEmails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum ProjectEmails {
    Table,
    Id,
    ProjectId,
    Subject,
    Body,
    FromAddress,
    ToAddress,
    SentAt,
    AttachmentPath,
    CreatedAt,
}

#[derive(Iden)]
enum DynamicModuleData {
    Table,
    Id,
    ProjectId,
    GroupId,
    FieldValues,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
}
