use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{attachments, links, owners};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::views::EntryView;
use crate::models::work_experience::{self, CreateWorkExperience, UpdateWorkExperience};
use crate::validation;

const KIND: OwnerKind = OwnerKind::WorkExperience;

pub async fn create_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateWorkExperience,
) -> StoreResult<work_experience::Model> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(Some(input.start_date), input.end_date)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, OwnerKind::Portfolio, portfolio_id).await?;

    let row = work_experience::ActiveModel {
        company: Set(input.company),
        position: Set(input.position),
        location: Set(input.location),
        description: Set(input.description),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    links::link(&txn, portfolio_id, KIND, row.id).await?;

    txn.commit().await?;
    tracing::info!(work_experience_id = row.id, portfolio_id, "work experience created");
    Ok(row)
}

pub async fn get_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    work_experience_id: i32,
) -> StoreResult<Option<EntryView<work_experience::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), work_experience_id)?;

    let Some(row) =
        work_experience::Entity::find_scoped(db, portfolio_id, work_experience_id).await?
    else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> StoreResult<Vec<EntryView<work_experience::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    Ok(work_experience::Entity::views_for_portfolio(db, portfolio_id).await?)
}

pub async fn update_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    work_experience_id: i32,
    input: UpdateWorkExperience,
) -> StoreResult<Option<work_experience::Model>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), work_experience_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(input.start_date, input.end_date)?;

    let Some(current) =
        work_experience::Entity::find_scoped(db, portfolio_id, work_experience_id).await?
    else {
        return Ok(None);
    };
    validation::ensure_date_order(
        Some(input.start_date.unwrap_or(current.start_date)),
        input.end_date.or(current.end_date),
    )?;

    let mut active: work_experience::ActiveModel = current.into();
    if let Some(company) = input.company {
        active.company = Set(company);
    }
    if let Some(position) = input.position {
        active.position = Set(position);
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(start_date) = input.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(Some(end_date));
    }

    Ok(Some(active.update(db).await?))
}

/// Delete one entry with everything attached to it. Returns the number of
/// entry and leaf rows removed, 0 when the entry is not on that portfolio.
pub async fn delete_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    work_experience_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), work_experience_id)?;

    let txn = db.begin().await?;
    if !links::is_linked(&txn, portfolio_id, KIND, work_experience_id).await? {
        return Ok(0);
    }
    let removed = work_experience::Entity::purge(&txn, work_experience_id).await?;
    txn.commit().await?;

    tracing::info!(work_experience_id, portfolio_id, removed, "work experience deleted");
    Ok(removed)
}
