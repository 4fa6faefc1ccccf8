use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Institution,
    Degree,
    FieldOfStudy,
    Description,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum WorkExperiences {
    Table,
    Id,
    Company,
    Position,
    Location,
    Description,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum Credentials {
    Table,
    Id,
    Name,
    IssuingOrganization,
    CredentialId,
    IssueDate,
    ExpirationDate,
}

#[derive(DeriveIden)]
enum VolunteerWorks {
    Table,
    Id,
    Organization,
    Role,
    Description,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum OpenSourceContributions {
    Table,
    Id,
    ProjectName,
    Role,
    Description,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum SideProjects {
    Table,
    Id,
    Name,
    ProfessionalSummary,
    Description,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum Hobbies {
    Table,
    Id,
    Name,
    Description,
}

fn id_col<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(id_col(Educations::Id))
                    .col(ColumnDef::new(Educations::Institution).string().not_null())
                    .col(ColumnDef::new(Educations::Degree).string().not_null())
                    .col(ColumnDef::new(Educations::FieldOfStudy).string().null())
                    .col(ColumnDef::new(Educations::Description).text().null())
                    .col(ColumnDef::new(Educations::StartDate).date().not_null())
                    .col(ColumnDef::new(Educations::EndDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WorkExperiences::Table)
                    .if_not_exists()
                    .col(id_col(WorkExperiences::Id))
                    .col(ColumnDef::new(WorkExperiences::Company).string().not_null())
                    .col(ColumnDef::new(WorkExperiences::Position).string().not_null())
                    .col(ColumnDef::new(WorkExperiences::Location).string().null())
                    .col(ColumnDef::new(WorkExperiences::Description).text().null())
                    .col(ColumnDef::new(WorkExperiences::StartDate).date().not_null())
                    .col(ColumnDef::new(WorkExperiences::EndDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Credentials::Table)
                    .if_not_exists()
                    .col(id_col(Credentials::Id))
                    .col(ColumnDef::new(Credentials::Name).string().not_null())
                    .col(
                        ColumnDef::new(Credentials::IssuingOrganization)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Credentials::CredentialId).string().null())
                    .col(ColumnDef::new(Credentials::IssueDate).date().not_null())
                    .col(ColumnDef::new(Credentials::ExpirationDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VolunteerWorks::Table)
                    .if_not_exists()
                    .col(id_col(VolunteerWorks::Id))
                    .col(ColumnDef::new(VolunteerWorks::Organization).string().not_null())
                    .col(ColumnDef::new(VolunteerWorks::Role).string().not_null())
                    .col(ColumnDef::new(VolunteerWorks::Description).text().null())
                    .col(ColumnDef::new(VolunteerWorks::StartDate).date().not_null())
                    .col(ColumnDef::new(VolunteerWorks::EndDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OpenSourceContributions::Table)
                    .if_not_exists()
                    .col(id_col(OpenSourceContributions::Id))
                    .col(
                        ColumnDef::new(OpenSourceContributions::ProjectName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OpenSourceContributions::Role).string().null())
                    .col(
                        ColumnDef::new(OpenSourceContributions::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OpenSourceContributions::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OpenSourceContributions::EndDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SideProjects::Table)
                    .if_not_exists()
                    .col(id_col(SideProjects::Id))
                    .col(ColumnDef::new(SideProjects::Name).string().not_null())
                    .col(
                        ColumnDef::new(SideProjects::ProfessionalSummary)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SideProjects::Description).text().null())
                    .col(ColumnDef::new(SideProjects::StartDate).date().null())
                    .col(ColumnDef::new(SideProjects::EndDate).date().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hobbies::Table)
                    .if_not_exists()
                    .col(id_col(Hobbies::Id))
                    .col(ColumnDef::new(Hobbies::Name).string().not_null())
                    .col(ColumnDef::new(Hobbies::Description).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hobbies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SideProjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OpenSourceContributions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VolunteerWorks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Credentials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkExperiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}
