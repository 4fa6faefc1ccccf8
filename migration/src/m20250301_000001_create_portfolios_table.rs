use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolios` table and its columns.
#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    Name,
    Title,
    ProfessionalSummary,
    Email,
    Location,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Portfolios::Name).string().not_null())
                    .col(ColumnDef::new(Portfolios::Title).string().not_null())
                    .col(ColumnDef::new(Portfolios::ProfessionalSummary).text().null())
                    .col(ColumnDef::new(Portfolios::Email).string().null())
                    .col(ColumnDef::new(Portfolios::Location).string().null())
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}
