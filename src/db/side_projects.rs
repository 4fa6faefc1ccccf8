//! Side projects. Besides the portfolio-scoped operations every entry family
//! has, side projects can be managed on their own and may be linked to a
//! portfolio at creation time.

use sea_orm::*;

use crate::db::entries::PortfolioEntry;
use crate::db::{attachments, links, owners};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::side_project::{self, CreateSideProject, UpdateSideProject};
use crate::models::views::EntryView;
use crate::validation;

const KIND: OwnerKind = OwnerKind::SideProject;

// ── Unscoped operations ──

pub async fn create(
    db: &DatabaseConnection,
    input: CreateSideProject,
) -> StoreResult<side_project::Model> {
    if let Some(portfolio_id) = input.portfolio_id {
        validation::ensure_id("Portfolio", portfolio_id)?;
    }
    validation::check(&input)?;
    validation::ensure_date_order(input.start_date, input.end_date)?;

    let txn = db.begin().await?;
    let portfolio_id = input.portfolio_id;
    if let Some(portfolio_id) = portfolio_id {
        owners::ensure_exists(&txn, OwnerKind::Portfolio, portfolio_id).await?;
    }

    let row = insert_row(&txn, input).await?;
    if let Some(portfolio_id) = portfolio_id {
        links::link(&txn, portfolio_id, KIND, row.id).await?;
    }

    txn.commit().await?;
    tracing::info!(side_project_id = row.id, ?portfolio_id, "side project created");
    Ok(row)
}

pub async fn get(
    db: &DatabaseConnection,
    side_project_id: i32,
) -> StoreResult<Option<EntryView<side_project::Model>>> {
    validation::ensure_id("Side project", side_project_id)?;

    let Some(row) = side_project::Entity::find_by_id(side_project_id).one(db).await? else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all(db: &DatabaseConnection) -> StoreResult<Vec<EntryView<side_project::Model>>> {
    let rows = side_project::Entity::find()
        .order_by_asc(side_project::Column::Id)
        .all(db)
        .await?;
    Ok(side_project::Entity::with_attachments(db, rows).await?)
}

pub async fn update(
    db: &DatabaseConnection,
    side_project_id: i32,
    input: UpdateSideProject,
) -> StoreResult<Option<side_project::Model>> {
    validation::ensure_id("Side project", side_project_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(input.start_date, input.end_date)?;

    let Some(current) = side_project::Entity::find_by_id(side_project_id).one(db).await? else {
        return Ok(None);
    };
    Ok(Some(apply_update(db, current, input).await?))
}

pub async fn delete(db: &DatabaseConnection, side_project_id: i32) -> StoreResult<u64> {
    validation::ensure_id("Side project", side_project_id)?;

    let txn = db.begin().await?;
    if side_project::Entity::find_by_id(side_project_id).one(&txn).await?.is_none() {
        return Ok(0);
    }
    let removed = side_project::Entity::purge(&txn, side_project_id).await?;
    txn.commit().await?;

    tracing::info!(side_project_id, removed, "side project deleted");
    Ok(removed)
}

// ── Portfolio-scoped operations ──

/// `input.portfolio_id` is ignored; the path names the portfolio.
pub async fn create_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    input: CreateSideProject,
) -> StoreResult<side_project::Model> {
    create(
        db,
        CreateSideProject {
            portfolio_id: Some(portfolio_id),
            ..input
        },
    )
    .await
}

pub async fn get_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    side_project_id: i32,
) -> StoreResult<Option<EntryView<side_project::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id("Side project", side_project_id)?;

    let Some(row) =
        side_project::Entity::find_scoped(db, portfolio_id, side_project_id).await?
    else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, row.id).await?;
    Ok(Some(EntryView { entry: row, attachments }))
}

pub async fn get_all_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
) -> StoreResult<Vec<EntryView<side_project::Model>>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    Ok(side_project::Entity::views_for_portfolio(db, portfolio_id).await?)
}

pub async fn update_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    side_project_id: i32,
    input: UpdateSideProject,
) -> StoreResult<Option<side_project::Model>> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id("Side project", side_project_id)?;
    validation::check(&input)?;
    validation::ensure_date_order(input.start_date, input.end_date)?;

    let Some(current) =
        side_project::Entity::find_scoped(db, portfolio_id, side_project_id).await?
    else {
        return Ok(None);
    };
    Ok(Some(apply_update(db, current, input).await?))
}

pub async fn delete_for_portfolio(
    db: &DatabaseConnection,
    portfolio_id: i32,
    side_project_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id("Portfolio", portfolio_id)?;
    validation::ensure_id("Side project", side_project_id)?;

    let txn = db.begin().await?;
    if !links::is_linked(&txn, portfolio_id, KIND, side_project_id).await? {
        return Ok(0);
    }
    let removed = side_project::Entity::purge(&txn, side_project_id).await?;
    txn.commit().await?;

    tracing::info!(side_project_id, portfolio_id, removed, "side project deleted");
    Ok(removed)
}

// ── Crate-internal helpers ──

async fn insert_row<C: ConnectionTrait>(
    conn: &C,
    input: CreateSideProject,
) -> Result<side_project::Model, DbErr> {
    side_project::ActiveModel {
        name: Set(input.name),
        professional_summary: Set(input.professional_summary),
        description: Set(input.description),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        ..Default::default()
    }
    .insert(conn)
    .await
}

async fn apply_update(
    db: &DatabaseConnection,
    current: side_project::Model,
    input: UpdateSideProject,
) -> StoreResult<side_project::Model> {
    validation::ensure_date_order(
        input.start_date.or(current.start_date),
        input.end_date.or(current.end_date),
    )?;

    let mut active: side_project::ActiveModel = current.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(professional_summary) = input.professional_summary {
        active.professional_summary = Set(professional_summary);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(start_date) = input.start_date {
        active.start_date = Set(Some(start_date));
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(Some(end_date));
    }

    Ok(active.update(db).await?)
}
