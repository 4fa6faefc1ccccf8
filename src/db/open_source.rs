use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{attachments, links, owners};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::views::EntryView;
use crate::models::open_source_contribution::{
    self, CreateOpenSourceContribution, UpdateOpenSourceContribution,
};
use crate::validation;

const KIND: OwnerKind = OwnerKind::OpenSourceContribution;

pub async fn create_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateOpenSourceContribution,
) -> StoreResult<open_source_contribution::Model> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(Some(input.start_date), input.end_date)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, OwnerKind::Portfolio, portfolio_id).await?;

    let row = open_source_contribution::ActiveModel {
        project_name: Set(input.project_name),
        role: Set(input.role),
        description: Set(input.description),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    links::link(&txn, portfolio_id, KIND, row.id).await?;

    txn.commit().await?;
    tracing::info!(contribution_id = row.id, portfolio_id, "open-source contribution created");
    Ok(row)
}

pub async fn get_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    contribution_id: i32,
) -> StoreResult<Option<EntryView<open_source_contribution::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), contribution_id)?;

    let Some(row) =
        open_source_contribution::Entity::find_scoped(db, portfolio_id, contribution_id).await?
    else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> StoreResult<Vec<EntryView<open_source_contribution::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    Ok(open_source_contribution::Entity::views_for_portfolio(db, portfolio_id).await?)
}

pub async fn update_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    contribution_id: i32,
    input: UpdateOpenSourceContribution,
) -> StoreResult<Option<open_source_contribution::Model>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), contribution_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(input.start_date, input.end_date)?;

    let Some(current) =
        open_source_contribution::Entity::find_scoped(db, portfolio_id, contribution_id).await?
    else {
        return Ok(None);
    };
    validation::ensure_date_order(
        Some(input.start_date.unwrap_or(current.start_date)),
        input.end_date.or(current.end_date),
    )?;

    let mut active: open_source_contribution::ActiveModel = current.into();
    if let Some(project_name) = input.project_name {
        active.project_name = Set(project_name);
    }
    if let Some(role) = input.role {
        active.role = Set(Some(role));
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
    contribution_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), contribution_id)?;

    let txn = db.begin().await?;
    if !links::is_linked(&txn, portfolio_id, KIND, contribution_id).await? {
        return Ok(0);
    }
    let removed = open_source_contribution::Entity::purge(&txn, contribution_id).await?;
    txn.commit().await?;

    tracing::info!(contribution_id, portfolio_id, removed, "open-source contribution deleted");
    Ok(removed)
}
