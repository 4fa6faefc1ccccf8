use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Join rows attaching an image to one owner, tagged with the slot it fills.
#[derive(DeriveIden)]
enum ImageLinks {
    Table,
    ImageId,
    OwnerKind,
    OwnerId,
    Slot,
}

#[derive(DeriveIden)]
enum WebsiteLinks {
    Table,
    WebsiteId,
    OwnerKind,
    OwnerId,
}

#[derive(DeriveIden)]
enum SkillLinks {
    Table,
    SkillId,
    OwnerKind,
    OwnerId,
}

#[derive(DeriveIden)]
enum AchievementLinks {
    Table,
    AchievementId,
    OwnerKind,
    OwnerId,
}

/// Join rows attaching an entry (education, hobby, ...) to its portfolio.
#[derive(DeriveIden)]
enum PortfolioLinks {
    Table,
    Id,
    PortfolioId,
    ItemKind,
    ItemId,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Images {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Websites {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImageLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImageLinks::ImageId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImageLinks::OwnerKind).string().not_null())
                    .col(ColumnDef::new(ImageLinks::OwnerId).integer().not_null())
                    .col(ColumnDef::new(ImageLinks::Slot).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_links_image_id")
                            .from(ImageLinks::Table, ImageLinks::ImageId)
                            .to(Images::Table, Images::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WebsiteLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebsiteLinks::WebsiteId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WebsiteLinks::OwnerKind).string().not_null())
                    .col(ColumnDef::new(WebsiteLinks::OwnerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_website_links_website_id")
                            .from(WebsiteLinks::Table, WebsiteLinks::WebsiteId)
                            .to(Websites::Table, Websites::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SkillLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillLinks::SkillId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SkillLinks::OwnerKind).string().not_null())
                    .col(ColumnDef::new(SkillLinks::OwnerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_links_skill_id")
                            .from(SkillLinks::Table, SkillLinks::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AchievementLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AchievementLinks::AchievementId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AchievementLinks::OwnerKind)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AchievementLinks::OwnerId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_achievement_links_achievement_id")
                            .from(AchievementLinks::Table, AchievementLinks::AchievementId)
                            .to(Achievements::Table, Achievements::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioLinks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioLinks::PortfolioId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioLinks::ItemKind).string().not_null())
                    .col(ColumnDef::new(PortfolioLinks::ItemId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_links_portfolio_id")
                            .from(PortfolioLinks::Table, PortfolioLinks::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // An entry belongs to exactly one portfolio.
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_links_item")
                    .table(PortfolioLinks::Table)
                    .col(PortfolioLinks::ItemKind)
                    .col(PortfolioLinks::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AchievementLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SkillLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WebsiteLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ImageLinks::Table).to_owned())
            .await
    }
}
