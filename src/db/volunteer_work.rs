use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{attachments, links, owners};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::views::EntryView;
use crate::models::volunteer_work::{self, CreateVolunteerWork, UpdateVolunteerWork};
use crate::validation;

const KIND: OwnerKind = OwnerKind::VolunteerWork;

pub async fn create_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateVolunteerWork,
) -> StoreResult<volunteer_work::Model> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(Some(input.start_date), input.end_date)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, OwnerKind::Portfolio, portfolio_id).await?;

    let row = volunteer_work::ActiveModel {
        organization: Set(input.organization),
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
    tracing::info!(volunteer_work_id = row.id, portfolio_id, "volunteer work created");
    Ok(row)
}

pub async fn get_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    volunteer_work_id: i32,
) -> StoreResult<Option<EntryView<volunteer_work::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), volunteer_work_id)?;

    let Some(row) =
        volunteer_work::Entity::find_scoped(db, portfolio_id, volunteer_work_id).await?
    else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> StoreResult<Vec<EntryView<volunteer_work::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    Ok(volunteer_work::Entity::views_for_portfolio(db, portfolio_id).await?)
}

pub async fn update_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    volunteer_work_id: i32,
    input: UpdateVolunteerWork,
) -> StoreResult<Option<volunteer_work::Model>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), volunteer_work_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(input.start_date, input.end_date)?;

    let Some(current) =
        volunteer_work::Entity::find_scoped(db, portfolio_id, volunteer_work_id).await?
    else {
        return Ok(None);
    };
    validation::ensure_date_order(
        Some(input.start_date.unwrap_or(current.start_date)),
        input.end_date.or(current.end_date),
    )?;

    let mut active: volunteer_work::ActiveModel = current.into();
    if let Some(organization) = input.organization {
        active.organization = Set(organization);
    }
    if let Some(role) = input.role {
        active.role = Set(role);
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

pub async fn delete_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    volunteer_work_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id(KIND.label(), volunteer_work_id)?;

    let txn = db.begin().await?;
    if !links::is_linked(&txn, portfolio_id, KIND, volunteer_work_id).await? {
        return Ok(0);
    }
    let removed = volunteer_work::Entity::purge(&txn, volunteer_work_id).await?;
    txn.commit().await?;

    tracing::info!(volunteer_work_id, portfolio_id, removed, "volunteer work deleted");
    Ok(removed)
}
