use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::ClientName).string().not_null())
                    .col(
                        ColumnDef::new(Projects::Status)
                            .string()
                            .not_null()
                            .default("Planned"),
                    )
                    .col(ColumnDef::new(Projects::Description).string())
                    .col(
                        ColumnDef::new(Projects::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Projects::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Projects::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create data_transfer_checks table
        manager
            .create_table(
                Table::create()
                    .table(DataTransferChecks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DataTransferChecks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DataTransferChecks::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DataTransferChecks::ModuleName).string())
                    .col(
                        ColumnDef::new(DataTransferChecks::DesktopTable)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataTransferChecks::WebTable)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DataTransferChecks::DesktopCount).integer())
                    .col(ColumnDef::new(DataTransferChecks::WebCount).integer())
                    .col(
                        ColumnDef::new(DataTransferChecks::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(DataTransferChecks::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(DataTransferChecks::Remarks).string())
                    .col(ColumnDef::new(DataTransferChecks::CheckedBy).string())
                    .col(
                        ColumnDef::new(DataTransferChecks::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataTransferChecks::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_data_transfer_checks_project_id")
                            .from(DataTransferChecks::Table, DataTransferChecks::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_data_transfer_checks_project_id")
                    .table(DataTransferChecks::Table)
                    .col(DataTransferChecks::ProjectId)
                    .to_owned(),
            )
            .await?;

        // Create verification_records table
        manager
            .create_table(
                Table::create()
                    .table(VerificationRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VerificationRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VerificationRecords::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationRecords::CheckName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VerificationRecords::SqlQuery).text())
                    .col(ColumnDef::new(VerificationRecords::ExpectedValue).string())
                    .col(ColumnDef::new(VerificationRecords::ActualValue).string())
                    .col(
                        ColumnDef::new(VerificationRecords::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(VerificationRecords::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(VerificationRecords::VerifiedBy).string())
                    .col(
                        ColumnDef::new(VerificationRecords::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationRecords::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_verification_records_project_id")
                            .from(VerificationRecords::Table, VerificationRecords::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_verification_records_project_id")
                    .table(VerificationRecords::Table)
                    .col(VerificationRecords::ProjectId)
                    .to_owned(),
            )
            .await?;

        // Create customization_points table
        manager
            .create_table(
                Table::create()
                    .table(CustomizationPoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomizationPoints::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomizationPoints::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomizationPoints::Title)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomizationPoints::Description).text())
                    .col(
                        ColumnDef::new(CustomizationPoints::CustomizationType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomizationPoints::Status)
                            .string()
                            .not_null()
                            .default("Requested"),
                    )
                    .col(
                        ColumnDef::new(CustomizationPoints::IsBillable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(CustomizationPoints::EstimatedHours).double())
                    .col(ColumnDef::new(CustomizationPoints::EstimatedCost).double())
                    .col(
                        ColumnDef::new(CustomizationPoints::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomizationPoints::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customization_points_project_id")
                            .from(CustomizationPoints::Table, CustomizationPoints::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customization_points_project_id")
                    .table(CustomizationPoints::Table)
                    .col(CustomizationPoints::ProjectId)
                    .to_owned(),
            )
            .await?;

        // Create migration_issues table; the primary key is the externally
        // visible issue id string, not an auto-increment integer
        manager
            .create_table(
                Table::create()
                    .table(MigrationIssues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MigrationIssues::IssueId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MigrationIssues::IssueNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MigrationIssues::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MigrationIssues::Title).string().not_null())
                    .col(ColumnDef::new(MigrationIssues::Description).text())
                    .col(
                        ColumnDef::new(MigrationIssues::Status)
                            .string()
                            .not_null()
                            .default("Open"),
                    )
                    .col(
                        ColumnDef::new(MigrationIssues::Priority)
                            .string()
                            .not_null()
                            .default("Medium"),
                    )
                    .col(ColumnDef::new(MigrationIssues::ReportedBy).string())
                    .col(ColumnDef::new(MigrationIssues::AssignedTo).string())
                    .col(ColumnDef::new(MigrationIssues::Resolution).text())
                    .col(
                        ColumnDef::new(MigrationIssues::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MigrationIssues::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_migration_issues_project_id")
                            .from(MigrationIssues::Table, MigrationIssues::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_migration_issues_project_id")
                    .table(MigrationIssues::Table)
                    .col(MigrationIssues::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MigrationIssues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomizationPoints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VerificationRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DataTransferChecks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    ClientName,
    Status,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum DataTransferChecks {
    Table,
    Id,
    ProjectId,
    ModuleName,
    DesktopTable,
    WebTable,
    DesktopCount,
    WebCount,
    Status,
    IsCompleted,
    Remarks,
    CheckedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum VerificationRecords {
    Table,
    Id,
    ProjectId,
    CheckName,
    SqlQuery,
    ExpectedValue,
    ActualValue,
    Status,
    IsVerified,
    VerifiedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CustomizationPoints {
    Table,
    Id,
    ProjectId,
    Title,
    Description,
    CustomizationType,
    Status,
    IsBillable,
    EstimatedHours,
    EstimatedCost,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MigrationIssues {
    Table,
    IssueId,
    IssueNumber,
    ProjectId,
    Title,
    Description,
    Status,
    Priority,
    ReportedBy,
    AssignedTo,
    Resolution,
    CreatedAt,
    UpdatedAt,
}
