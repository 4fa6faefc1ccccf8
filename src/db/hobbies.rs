use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{attachments, links, owners};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::hobby::{self, CreateHobby, UpdateHobby};
use crate::models::views::EntryView;
use crate::validation;

const KIND: OwnerKind = OwnerKind::Hobby;

pub async fn create_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateHobby,
) -> StoreResult<hobby::Model> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::check(&input)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, OwnerKind::Portfolio, portfolio_id).await?;

    let row = hobby::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    links::link(&txn, portfolio_id, KIND, row.id).await?;

    txn.commit().await?;
    tracing::info!(hobby_id = row.id, portfolio_id, "hobby created");
    Ok(row)
}

pub async fn get_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    hobby_id: i32,
) -> StoreResult<Option<EntryView<hobby::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id("Hobby", hobby_id)?;

    let Some(row) = hobby::Entity::find_scoped(db, portfolio_id, hobby_id).await? else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> StoreResult<Vec<EntryView<hobby::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    Ok(hobby::Entity::views_for_portfolio(db, portfolio_id).await?)
}

pub async fn update_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    hobby_id: i32,
    input: UpdateHobby,
) -> StoreResult<Option<hobby::Model>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id("Hobby", hobby_id)?;
    validation::check(&input)?;

    let Some(current) = hobby::Entity::find_scoped(db, portfolio_id, hobby_id).await? else {
        return Ok(None);
    };

    let mut active: hobby::ActiveModel = current.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    hobby_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id("Hobby", hobby_id)?;

    let txn = db.begin().await?;
    if !links::is_linked(&txn, portfolio_id, KIND, hobby_id).await? {
        return Ok(0);
    }
    let removed = hobby::Entity::purge(&txn, hobby_id).await?;
    txn.commit().await?;

    tracing::info!(hobby_id, portfolio_id, removed, "hobby deleted");
    Ok(removed)
}
