use sea_orm::*;

use crate::db::owners;
use crate::error::{StoreError, StoreResult};
use crate::models::achievement::{self, CreateAchievement, UpdateAchievement};
use crate::models::{OwnerKind, achievement_link};
use crate::validation;

fn ensure_accepts(owner: OwnerKind) -> StoreResult<()> {
    if owner.accepts_achievements() {
        Ok(())
    } else {
        Err(StoreError::Validation(format!(
            "{} entries do not carry achievements",
            owner.label()
        )))
    }
}

pub async fn create_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    input: CreateAchievement,
) -> StoreResult<achievement::Model> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::check(&input)?;
    ensure_accepts(owner)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, owner, owner_id).await?;

    let row = achievement::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        date_achieved: Set(input.date_achieved),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    achievement_link::Entity::insert(achievement_link::ActiveModel {
        achievement_id: Set(row.id),
        owner_kind: Set(owner),
        owner_id: Set(owner_id),
    })
    .exec_without_returning(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(achievement_id = row.id, ?owner, owner_id, "achievement attached");
    Ok(row)
}

pub async fn get_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    achievement_id: i32,
) -> StoreResult<Option<achievement::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Achievement", achievement_id)?;
    Ok(find_scoped(db, owner, owner_id, achievement_id).await?)
}

pub async fn get_all_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
) -> StoreResult<Vec<achievement::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    Ok(find_all(db, owner, owner_id).await?)
}

pub async fn update_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    achievement_id: i32,
    input: UpdateAchievement,
) -> StoreResult<Option<achievement::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Achievement", achievement_id)?;
    validation::check(&input)?;

    let Some(current) = find_scoped(db, owner, owner_id, achievement_id).await? else {
        return Ok(None);
    };

    let mut active: achievement::ActiveModel = current.into();
    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(date_achieved) = input.date_achieved {
        active.date_achieved = Set(Some(date_achieved));
    }

    Ok(Some(active.update(db).await?))
}

pub async fn delete_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    achievement_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Achievement", achievement_id)?;

    let txn = db.begin().await?;
    if find_scoped(&txn, owner, owner_id, achievement_id).await?.is_none() {
        return Ok(0);
    }
    let removed = delete_achievements(&txn, vec![achievement_id]).await?;
    txn.commit().await?;

    tracing::info!(achievement_id, ?owner, owner_id, "achievement deleted");
    Ok(removed)
}

// ── Crate-internal helpers ──

async fn find_scoped<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    achievement_id: i32,
) -> Result<Option<achievement::Model>, DbErr> {
    let row = achievement_link::Entity::find()
        .filter(achievement_link::Column::AchievementId.eq(achievement_id))
        .filter(achievement_link::Column::OwnerKind.eq(owner))
        .filter(achievement_link::Column::OwnerId.eq(owner_id))
        .find_also_related(achievement::Entity)
        .one(conn)
        .await?;
    Ok(row.and_then(|(_, row)| row))
}

pub(crate) async fn find_all<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<Vec<achievement::Model>, DbErr> {
    let rows = achievement_link::Entity::find()
        .filter(achievement_link::Column::OwnerKind.eq(owner))
        .filter(achievement_link::Column::OwnerId.eq(owner_id))
        .order_by_asc(achievement_link::Column::AchievementId)
        .find_also_related(achievement::Entity)
        .all(conn)
        .await?;
    Ok(rows.into_iter().filter_map(|(_, row)| row).collect())
}

pub(crate) async fn purge_owner<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<u64, DbErr> {
    let ids: Vec<i32> = achievement_link::Entity::find()
        .filter(achievement_link::Column::OwnerKind.eq(owner))
        .filter(achievement_link::Column::OwnerId.eq(owner_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| link.achievement_id)
        .collect();

    delete_achievements(conn, ids).await
}

async fn delete_achievements<C: ConnectionTrait>(conn: &C, ids: Vec<i32>) -> Result<u64, DbErr> {
    if ids.is_empty() {
        return Ok(0);
    }

    achievement_link::Entity::delete_many()
        .filter(achievement_link::Column::AchievementId.is_in(ids.clone()))
        .exec(conn)
        .await?;

    let result = achievement::Entity::delete_many()
        .filter(achievement::Column::Id.is_in(ids))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
