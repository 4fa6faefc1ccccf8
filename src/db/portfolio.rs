//! The portfolio aggregate root. Reads assemble the whole graph through the
//! entry stores; deletes fan out to every child store inside one transaction.

use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{images, links, skills, websites};
use crate::error::StoreResult;
use crate::models::portfolio::{self, CreatePortfolio, UpdatePortfolio};
use crate::models::views::PortfolioView;
use crate::models::{
    ImageSlot, OwnerKind, WebsiteType, credential, education, hobby, open_source_contribution,
    side_project, volunteer_work, work_experience,
};
use crate::validation;

const KIND: OwnerKind = OwnerKind::Portfolio;

/// Insert a new portfolio.
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    input: CreatePortfolio,
) -> StoreResult<portfolio::Model> {
    validation::check(&input)?;

    let row = portfolio::ActiveModel {
        name: Set(input.name),
        title: Set(input.title),
        professional_summary: Set(input.professional_summary),
        email: Set(input.email),
        location: Set(input.location),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(portfolio_id = row.id, "portfolio created");
    Ok(row)
}

/// Fetch all portfolios, scalar fields only.
pub async fn get_all_portfolios(db: &DatabaseConnection) -> StoreResult<Vec<portfolio::Model>> {
    Ok(portfolio::Entity::find()
        .order_by_asc(portfolio::Column::Id)
        .all(db)
        .await?)
}

/// Fetch a single portfolio row by ID.
pub async fn get_portfolio_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> StoreResult<Option<portfolio::Model>> {
    validation::ensure_id("Portfolio", id)?;
    Ok(portfolio::Entity::find_by_id(id).one(db).await?)
}

/// Fetch a portfolio with everything it owns.
pub async fn get_portfolio_graph(
    db: &DatabaseConnection,
    id: i32,
) -> StoreResult<Option<PortfolioView>> {
    validation::ensure_id("Portfolio", id)?;

    let Some(row) = portfolio::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let main_image = images::find_slot(db, KIND, id, ImageSlot::MainImage).await?;
    let github = websites::find_by_type(db, KIND, id, WebsiteType::Github).await?;
    let linkedin = websites::find_by_type(db, KIND, id, WebsiteType::Linkedin).await?;
    let all_websites = websites::find_all(db, KIND, id).await?;

    Ok(Some(PortfolioView {
        portfolio: row,
        main_image,
        github,
        linkedin,
        websites: all_websites,
        hobbies: hobby::Entity::views_for_portfolio(db, id).await?,
        skills: skills::find_all(db, KIND, id).await?,
        side_projects: side_project::Entity::views_for_portfolio(db, id).await?,
        work_experiences: work_experience::Entity::views_for_portfolio(db, id).await?,
        educations: education::Entity::views_for_portfolio(db, id).await?,
        credentials: credential::Entity::views_for_portfolio(db, id).await?,
        volunteer_works: volunteer_work::Entity::views_for_portfolio(db, id).await?,
        open_source_contributions: open_source_contribution::Entity::views_for_portfolio(db, id)
            .await?,
        additional_images: images::find_slot_all(db, KIND, id, ImageSlot::AdditionalImage)
            .await?,
    }))
}

/// Update an existing portfolio. `None` when no such row exists.
pub async fn update_portfolio(
    db: &DatabaseConnection,
    id: i32,
    input: UpdatePortfolio,
) -> StoreResult<Option<portfolio::Model>> {
    validation::ensure_id("Portfolio", id)?;
    validation::check(&input)?;

    let Some(item) = portfolio::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: portfolio::ActiveModel = item.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(professional_summary) = input.professional_summary {
        active.professional_summary = Set(Some(professional_summary));
    }
    if let Some(email) = input.email {
        active.email = Set(Some(email));
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }

    Ok(Some(active.update(db).await?))
}

/// Delete a portfolio and everything it owns. Returns the number of entry,
/// leaf and portfolio rows removed; 0 when the portfolio does not exist.
pub async fn delete_portfolio(db: &DatabaseConnection, id: i32) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", id)?;

    let txn = db.begin().await?;
    if portfolio::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Ok(0);
    }

    let mut removed = hobby::Entity::purge_all_for_portfolio(&txn, id).await?;
    removed += skills::purge_owner(&txn, KIND, id).await?;
    removed += side_project::Entity::purge_all_for_portfolio(&txn, id).await?;
    removed += work_experience::Entity::purge_all_for_portfolio(&txn, id).await?;
    removed += education::Entity::purge_all_for_portfolio(&txn, id).await?;
    removed += credential::Entity::purge_all_for_portfolio(&txn, id).await?;
    removed += volunteer_work::Entity::purge_all_for_portfolio(&txn, id).await?;
    removed += open_source_contribution::Entity::purge_all_for_portfolio(&txn, id).await?;
    tracing::debug!(portfolio_id = id, removed, "portfolio children removed");

    removed += images::purge_slot(&txn, KIND, id, ImageSlot::MainImage).await?;
    removed += websites::purge_owner(&txn, KIND, id).await?;
    removed += images::purge_owner(&txn, KIND, id).await?;

    let dangling = links::unlink_all(&txn, id).await?;
    if dangling > 0 {
        tracing::debug!(portfolio_id = id, dangling, "stray portfolio links removed");
    }

    let result = portfolio::Entity::delete_by_id(id).exec(&txn).await?;
    removed += result.rows_affected;

    txn.commit().await?;
    tracing::info!(portfolio_id = id, removed, "portfolio deleted");
    Ok(removed)
}
