//! Read and purge paths shared by every entry family a portfolio links to.
//! The per-family stores keep their own create and update logic and call in
//! here for lookups scoped through `portfolio_links` and for cascades.

use sea_orm::*;

use crate::db::{attachments, links};
use crate::models::views::EntryView;
use crate::models::{
    OwnerKind, credential, education, hobby, open_source_contribution, side_project,
    volunteer_work, work_experience,
};

/// An entity whose rows hang off a portfolio through `portfolio_links`.
/// The provided methods run on the caller's connection or transaction.
pub(crate) trait PortfolioEntry: EntityTrait {
    const KIND: OwnerKind;

    fn id_column() -> Self::Column;

    fn id_of(model: &Self::Model) -> i32;

    /// The entry row, but only when it is linked to that portfolio.
    async fn find_scoped<C: ConnectionTrait>(
        conn: &C,
        portfolio_id: i32,
        entry_id: i32,
    ) -> Result<Option<Self::Model>, DbErr> {
        if !links::is_linked(conn, portfolio_id, Self::KIND, entry_id).await? {
            return Ok(None);
        }
        Self::find()
            .filter(Self::id_column().eq(entry_id))
            .one(conn)
            .await
    }

    async fn with_attachments<C: ConnectionTrait>(
        conn: &C,
        rows: Vec<Self::Model>,
    ) -> Result<Vec<EntryView<Self::Model>>, DbErr> {
        let mut views = Vec::with_capacity(rows.len());
        for row in rows {
            let attachments = attachments::load(conn, Self::KIND, Self::id_of(&row)).await?;
            views.push(EntryView { entry: row, attachments });
        }
        Ok(views)
    }

    async fn views_for_portfolio<C: ConnectionTrait>(
        conn: &C,
        portfolio_id: i32,
    ) -> Result<Vec<EntryView<Self::Model>>, DbErr> {
        let ids = links::item_ids(conn, portfolio_id, Self::KIND).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Self::find()
            .filter(Self::id_column().is_in(ids))
            .order_by_asc(Self::id_column())
            .all(conn)
            .await?;
        Self::with_attachments(conn, rows).await
    }

    /// Attachments, then the portfolio link if any, then the row itself.
    /// Counts entry and leaf rows; link rows are not counted.
    async fn purge<C: ConnectionTrait>(conn: &C, entry_id: i32) -> Result<u64, DbErr> {
        let mut removed = attachments::purge(conn, Self::KIND, entry_id).await?;
        links::unlink(conn, Self::KIND, entry_id).await?;
        let result = Self::delete_many()
            .filter(Self::id_column().eq(entry_id))
            .exec(conn)
            .await?;
        removed += result.rows_affected;
        Ok(removed)
    }

    async fn purge_all_for_portfolio<C: ConnectionTrait>(
        conn: &C,
        portfolio_id: i32,
    ) -> Result<u64, DbErr> {
        let mut removed = 0;
        for entry_id in links::item_ids(conn, portfolio_id, Self::KIND).await? {
            tracing::debug!(kind = ?Self::KIND, entry_id, portfolio_id, "cascading entry delete");
            removed += Self::purge(conn, entry_id).await?;
        }
        Ok(removed)
    }
}

macro_rules! portfolio_entry {
    ($($module:ident => $kind:ident),* $(,)?) => {
        $(
            impl PortfolioEntry for $module::Entity {
                const KIND: OwnerKind = OwnerKind::$kind;

                fn id_column() -> Self::Column {
                    $module::Column::Id
                }

                fn id_of(model: &Self::Model) -> i32 {
                    model.id
                }
            }
        )*
    };
}

portfolio_entry! {
    education => Education,
    work_experience => WorkExperience,
    credential => Credential,
    volunteer_work => VolunteerWork,
    open_source_contribution => OpenSourceContribution,
    side_project => SideProject,
    hobby => Hobby,
}
