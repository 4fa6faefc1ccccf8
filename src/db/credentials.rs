use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{attachments, links, owners};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::views::EntryView;
use crate::models::credential::{self, CreateCredential, UpdateCredential};
use crate::validation;

const KIND: OwnerKind = OwnerKind::Credential;

pub async fn create_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateCredential,
) -> StoreResult<credential::Model> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(Some(input.issue_date), input.expiration_date)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, OwnerKind::Portfolio, portfolio_id).await?;

    let row = credential::ActiveModel {
        name: Set(input.name),
        issuing_organization: Set(input.issuing_organization),
        credential_id: Set(input.credential_id),
        issue_date: Set(input.issue_date),
        expiration_date: Set(input.expiration_date),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    links::link(&txn, portfolio_id, KIND, row.id).await?;

    txn.commit().await?;
    tracing::info!(credential_id = row.id, portfolio_id, "credential created");
    Ok(row)
}

pub async fn get_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    credential_id: i32,
) -> StoreResult<Option<EntryView<credential::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), credential_id)?;

    let Some(row) = credential::Entity::find_scoped(db, portfolio_id, credential_id).await? else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> StoreResult<Vec<EntryView<credential::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    Ok(credential::Entity::views_for_portfolio(db, portfolio_id).await?)
}

pub async fn update_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    credential_id: i32,
    input: UpdateCredential,
) -> StoreResult<Option<credential::Model>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), credential_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(input.issue_date, input.expiration_date)?;

    let Some(current) =
        credential::Entity::find_scoped(db, portfolio_id, credential_id).await?
    else {
        return Ok(None);
    };
    // Expiration is checked against the merged issue date.
    validation::ensure_date_order(
        Some(input.issue_date.unwrap_or(current.issue_date)),
        input.expiration_date.or(current.expiration_date),
    )?;

    let mut active: credential::ActiveModel = current.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(issuing_organization) = input.issuing_organization {
        active.issuing_organization = Set(issuing_organization);
    }
    if let Some(credential_id) = input.credential_id {
        active.credential_id = Set(Some(credential_id));
    }
    if let Some(issue_date) = input.issue_date {
        active.issue_date = Set(issue_date);
    }
    if let Some(expiration_date) = input.expiration_date {
        active.expiration_date = Set(Some(expiration_date));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    credential_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), credential_id)?;

    let txn = db.begin().await?;
    if !links::is_linked(&txn, portfolio_id, KIND, credential_id).await? {
        return Ok(0);
    }
    let removed = credential::Entity::purge(&txn, credential_id).await?;
    txn.commit().await?;

    tracing::info!(credential_id, portfolio_id, removed, "credential deleted");
    Ok(removed)
}
