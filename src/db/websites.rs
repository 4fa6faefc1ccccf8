use sea_orm::*;

use crate::db::owners;
use crate::error::{StoreError, StoreResult};
use crate::models::website::{self, CreateWebsite, UpdateWebsite};
use crate::models::{OwnerKind, WebsiteType, website_link};
use crate::validation;

fn ensure_accepts(owner: OwnerKind) -> StoreResult<()> {
    if owner.accepts_websites() {
        Ok(())
    } else {
        Err(StoreError::Validation(format!(
            "{} entries do not carry websites",
            owner.label()
        )))
    }
}

fn occupied(owner: OwnerKind, owner_id: i32, existing: &website::Model) -> StoreError {
    StoreError::SlotOccupied(format!(
        "{} {owner_id} already has a {} website (website {})",
        owner.label(),
        existing.website_type.label(),
        existing.id
    ))
}

/// Attach a website to an owner. At most one website per type per owner.
pub async fn create_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    input: CreateWebsite,
) -> StoreResult<website::Model> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::check(&input)?;
    ensure_accepts(owner)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, owner, owner_id).await?;

    if let Some(existing) = find_by_type(&txn, owner, owner_id, input.website_type).await? {
        return Err(occupied(owner, owner_id, &existing));
    }

    let site = website::ActiveModel {
        name: Set(input.name),
        url: Set(input.url),
        website_type: Set(input.website_type),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    website_link::Entity::insert(website_link::ActiveModel {
        website_id: Set(site.id),
        owner_kind: Set(owner),
        owner_id: Set(owner_id),
    })
    .exec_without_returning(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(website_id = site.id, ?owner, owner_id, "website attached");
    Ok(site)
}

pub async fn get_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    website_id: i32,
) -> StoreResult<Option<website::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Website", website_id)?;
    Ok(find_scoped(db, owner, owner_id, website_id).await?)
}

pub async fn get_all_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
) -> StoreResult<Vec<website::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    Ok(find_all(db, owner, owner_id).await?)
}

pub async fn get_by_type(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    website_type: WebsiteType,
) -> StoreResult<Option<website::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    Ok(find_by_type(db, owner, owner_id, website_type).await?)
}

/// Update a website of an owner. Changing its type to one another website of
/// the same owner already uses is refused.
pub async fn update_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    website_id: i32,
    input: UpdateWebsite,
) -> StoreResult<Option<website::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Website", website_id)?;
    validation::check(&input)?;

    let Some(current) = find_scoped(db, owner, owner_id, website_id).await? else {
        return Ok(None);
    };

    if let Some(new_type) = input.website_type {
        if new_type != current.website_type {
            if let Some(existing) = find_by_type(db, owner, owner_id, new_type).await? {
                return Err(occupied(owner, owner_id, &existing));
            }
        }
    }

    let mut active: website::ActiveModel = current.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(url) = input.url {
        active.url = Set(url);
    }
    if let Some(website_type) = input.website_type {
        active.website_type = Set(website_type);
    }

    Ok(Some(active.update(db).await?))
}

/// Detach and delete one website. Returns the number of websites removed.
pub async fn delete_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    website_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Website", website_id)?;

    let txn = db.begin().await?;
    if find_scoped(&txn, owner, owner_id, website_id).await?.is_none() {
        return Ok(0);
    }
    let removed = delete_websites(&txn, vec![website_id]).await?;
    txn.commit().await?;

    tracing::info!(website_id, ?owner, owner_id, "website deleted");
    Ok(removed)
}

// ── Crate-internal helpers ──

pub(crate) async fn find_scoped<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    website_id: i32,
) -> Result<Option<website::Model>, DbErr> {
    let row = website_link::Entity::find()
        .filter(website_link::Column::WebsiteId.eq(website_id))
        .filter(website_link::Column::OwnerKind.eq(owner))
        .filter(website_link::Column::OwnerId.eq(owner_id))
        .find_also_related(website::Entity)
        .one(conn)
        .await?;
    Ok(row.and_then(|(_, site)| site))
}

pub(crate) async fn find_all<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<Vec<website::Model>, DbErr> {
    let rows = website_link::Entity::find()
        .filter(website_link::Column::OwnerKind.eq(owner))
        .filter(website_link::Column::OwnerId.eq(owner_id))
        .order_by_asc(website_link::Column::WebsiteId)
        .find_also_related(website::Entity)
        .all(conn)
        .await?;
    Ok(rows.into_iter().filter_map(|(_, site)| site).collect())
}

pub(crate) async fn find_by_type<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    website_type: WebsiteType,
) -> Result<Option<website::Model>, DbErr> {
    let row = website_link::Entity::find()
        .filter(website_link::Column::OwnerKind.eq(owner))
        .filter(website_link::Column::OwnerId.eq(owner_id))
        .find_also_related(website::Entity)
        .filter(website::Column::WebsiteType.eq(website_type))
        .one(conn)
        .await?;
    Ok(row.and_then(|(_, site)| site))
}

/// Delete every website attached to an owner.
pub(crate) async fn purge_owner<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<u64, DbErr> {
    let ids: Vec<i32> = website_link::Entity::find()
        .filter(website_link::Column::OwnerKind.eq(owner))
        .filter(website_link::Column::OwnerId.eq(owner_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| link.website_id)
        .collect();

    delete_websites(conn, ids).await
}

async fn delete_websites<C: ConnectionTrait>(conn: &C, ids: Vec<i32>) -> Result<u64, DbErr> {
    if ids.is_empty() {
        return Ok(0);
    }

    website_link::Entity::delete_many()
        .filter(website_link::Column::WebsiteId.is_in(ids.clone()))
        .exec(conn)
        .await?;

    let result = website::Entity::delete_many()
        .filter(website::Column::Id.is_in(ids))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
