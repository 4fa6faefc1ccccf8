use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ImageLinks {
    Table,
    OwnerKind,
    OwnerId,
    Slot,
}

#[derive(DeriveIden)]
enum WebsiteLinks {
    Table,
    OwnerKind,
    OwnerId,
}

#[derive(DeriveIden)]
enum SkillLinks {
    Table,
    OwnerKind,
    OwnerId,
}

#[derive(DeriveIden)]
enum AchievementLinks {
    Table,
    OwnerKind,
    OwnerId,
}

#[derive(DeriveIden)]
enum PortfolioLinks {
    Table,
    PortfolioId,
    ItemKind,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Slot lookups ("current main image of education 4")
        manager
            .create_index(
                Index::create()
                    .name("idx_image_links_owner_slot")
                    .table(ImageLinks::Table)
                    .col(ImageLinks::OwnerKind)
                    .col(ImageLinks::OwnerId)
                    .col(ImageLinks::Slot)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_website_links_owner")
                    .table(WebsiteLinks::Table)
                    .col(WebsiteLinks::OwnerKind)
                    .col(WebsiteLinks::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_skill_links_owner")
                    .table(SkillLinks::Table)
                    .col(SkillLinks::OwnerKind)
                    .col(SkillLinks::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_achievement_links_owner")
                    .table(AchievementLinks::Table)
                    .col(AchievementLinks::OwnerKind)
                    .col(AchievementLinks::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Collection reads ("all educations of portfolio 5")
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_links_portfolio_kind")
                    .table(PortfolioLinks::Table)
                    .col(PortfolioLinks::PortfolioId)
                    .col(PortfolioLinks::ItemKind)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_image_links_owner_slot").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_website_links_owner").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_skill_links_owner").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_achievement_links_owner").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolio_links_portfolio_kind")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
