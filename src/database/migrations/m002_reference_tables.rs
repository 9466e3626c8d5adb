use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create field_masters table
        manager
            .create_table(
                Table::create()
                    .table(FieldMasters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FieldMasters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FieldMasters::GroupId).integer().not_null())
                    .col(ColumnDef::new(FieldMasters::FieldName).string().not_null())
                    .col(ColumnDef::new(FieldMasters::FieldLabel).string())
                    .col(ColumnDef::new(FieldMasters::DataType).string().not_null())
                    .col(ColumnDef::new(FieldMasters::Options).text())
                    .col(
                        ColumnDef::new(FieldMasters::IsRequired)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FieldMasters::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FieldMasters::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .index(
                        Index::create()
                            .name("idx_field_masters_group_field")
                            .table(FieldMasters::Table)
                            .col(FieldMasters::GroupId)
                            .col(FieldMasters::FieldName)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lookup_data table
        manager
            .create_table(
                Table::create()
                    .table(LookupData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LookupData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LookupData::LookupType).string().not_null())
                    .col(ColumnDef::new(LookupData::Code).string().not_null())
                    .col(ColumnDef::new(LookupData::Label).string().not_null())
                    .col(
                        ColumnDef::new(LookupData::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LookupData::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .index(
                        Index::create()
                            .name("idx_lookup_data_type_code")
                            .table(LookupData::Table)
                            .col(LookupData::LookupType)
                            .col(LookupData::Code)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create module_masters table
        manager
            .create_table(
                Table::create()
                    .table(ModuleMasters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModuleMasters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ModuleMasters::ModuleName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ModuleMasters::Description).string())
                    .col(
                        ColumnDef::new(ModuleMasters::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Create web_tables table
        manager
            .create_table(
                Table::create()
                    .table(WebTables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebTables::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WebTables::ModuleId).integer())
                    .col(ColumnDef::new(WebTables::TableName).string().not_null())
                    .col(ColumnDef::new(WebTables::DisplayName).string())
                    .col(
                        ColumnDef::new(WebTables::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_web_tables_module_id")
                            .from(WebTables::Table, WebTables::ModuleId)
                            .to(ModuleMasters::Table, ModuleMasters::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("member"),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .index(
                        Index::create()
                            .name("idx_users_username")
                            .table(Users::Table)
                            .col(Users::Username)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WebTables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ModuleMasters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LookupData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FieldMasters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum FieldMasters {
    Table,
    Id,
    GroupId,
    FieldName,
    FieldLabel,
    DataType,
    Options,
    IsRequired,
    SortOrder,
    IsActive,
}

#[derive(Iden)]
enum LookupData {
    Table,
    Id,
    LookupType,
    Code,
    Label,
    SortOrder,
    IsActive,
}

#[derive(Iden)]
enum ModuleMasters {
    Table,
    Id,
    ModuleName,
    Description,
    IsActive,
}

#[derive(Iden)]
enum WebTables {
    Table,
    Id,
    ModuleId,
    TableName,
    DisplayName,
    IsActive,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    DisplayName,
    Email,
    Role,
    IsActive,
    CreatedAt,
}
