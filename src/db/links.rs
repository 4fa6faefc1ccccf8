//! The `portfolio_links` join table: which portfolio owns which entry.

use sea_orm::*;

use crate::models::{OwnerKind, portfolio_link};

pub(crate) async fn link<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: i32,
    kind: OwnerKind,
    item_id: i32,
) -> Result<(), DbErr> {
    portfolio_link::ActiveModel {
        portfolio_id: Set(portfolio_id),
        item_kind: Set(kind),
        item_id: Set(item_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(())
}

pub(crate) async fn is_linked<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: i32,
    kind: OwnerKind,
    item_id: i32,
) -> Result<bool, DbErr> {
    let row = portfolio_link::Entity::find()
        .filter(portfolio_link::Column::PortfolioId.eq(portfolio_id))
        .filter(portfolio_link::Column::ItemKind.eq(kind))
        .filter(portfolio_link::Column::ItemId.eq(item_id))
        .one(conn)
        .await?;
    Ok(row.is_some())
}

/// Ids of every `kind` entry linked to the portfolio, oldest first.
pub(crate) async fn item_ids<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: i32,
    kind: OwnerKind,
) -> Result<Vec<i32>, DbErr> {
    let rows = portfolio_link::Entity::find()
        .filter(portfolio_link::Column::PortfolioId.eq(portfolio_id))
        .filter(portfolio_link::Column::ItemKind.eq(kind))
        .order_by_asc(portfolio_link::Column::ItemId)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|row| row.item_id).collect())
}

/// Remove the link row of one entry, whichever portfolio holds it.
pub(crate) async fn unlink<C: ConnectionTrait>(
    conn: &C,
    kind: OwnerKind,
    item_id: i32,
) -> Result<u64, DbErr> {
    let result = portfolio_link::Entity::delete_many()
        .filter(portfolio_link::Column::ItemKind.eq(kind))
        .filter(portfolio_link::Column::ItemId.eq(item_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Remove every link row left on a portfolio.
pub(crate) async fn unlink_all<C: ConnectionTrait>(
    conn: &C,
    portfolio_id: i32,
) -> Result<u64, DbErr> {
    let result = portfolio_link::Entity::delete_many()
        .filter(portfolio_link::Column::PortfolioId.eq(portfolio_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
