//! Education entries of a portfolio.

use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{attachments, links, owners};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::views::EntryView;
use crate::models::education::{self, CreateEducation, UpdateEducation};
use crate::validation;

const KIND: OwnerKind = OwnerKind::Education;

pub async fn create_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateEducation,
) -> StoreResult<education::Model> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(Some(input.start_date), input.end_date)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, OwnerKind::Portfolio, portfolio_id).await?;

    let row = education::ActiveModel {
        institution: Set(input.institution),
        degree: Set(input.degree),
        field_of_study: Set(input.field_of_study),
        description: Set(input.description),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    links::link(&txn, portfolio_id, KIND, row.id).await?;

    txn.commit().await?;
    tracing::info!(education_id = row.id, portfolio_id, "education created");
    Ok(row)
}

pub async fn get_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    education_id: i32,
) -> StoreResult<Option<EntryView<education::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), education_id)?;

    let Some(row) = education::Entity::find_scoped(db, portfolio_id, education_id).await? else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> StoreResult<Vec<EntryView<education::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    Ok(education::Entity::views_for_portfolio(db, portfolio_id).await?)
}

pub async fn update_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    education_id: i32,
    input: UpdateEducation,
) -> StoreResult<Option<education::Model>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), education_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(input.start_date, input.end_date)?;

    let Some(current) =
        education::Entity::find_scoped(db, portfolio_id, education_id).await?
    else {
        return Ok(None);
    };
    validation::ensure_date_order(
        Some(input.start_date.unwrap_or(current.start_date)),
        input.end_date.or(current.end_date),
    )?;

    let mut active: education::ActiveModel = current.into();
    if let Some(institution) = input.institution {
        active.institution = Set(institution);
    }
    if let Some(degree) = input.degree {
        active.degree = Set(degree);
    }
    if let Some(field_of_study) = input.field_of_study {
        active.field_of_study = Set(Some(field_of_study));
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
    education_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), education_id)?;

    let txn = db.begin().await?;
    if !links::is_linked(&txn, portfolio_id, KIND, education_id).await? {
        return Ok(0);
    }
    let removed = education::Entity::purge(&txn, education_id).await?;
    txn.commit().await?;

    tracing::info!(education_id, portfolio_id, removed, "education deleted");
    Ok(removed)
}
