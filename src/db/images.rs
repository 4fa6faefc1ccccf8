use sea_orm::*;

use crate::db::owners;
use crate::error::{StoreError, StoreResult};
use crate::models::image::{self, AttachedImage, CreateImage, UpdateImage};
use crate::models::{ImageSlot, OwnerKind, image_link};
use crate::validation;

/// Attach a new image to an owner, filling the slot named by `input.slot`.
///
/// The image row and its link row are written in one transaction. Single-valued
/// slots (main image, logo, icon) that are already filled are refused and the
/// current occupant is left as is.
pub async fn create_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    input: CreateImage,
) -> StoreResult<AttachedImage> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::check(&input)?;
    if !owner.allows_image_slot(input.slot) {
        return Err(StoreError::Validation(format!(
            "{} images cannot use the '{}' slot",
            owner.label(),
            input.slot.label()
        )));
    }

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, owner, owner_id).await?;

    if input.slot.is_single() {
        if let Some(existing) = find_slot(&txn, owner, owner_id, input.slot).await? {
            return Err(StoreError::SlotOccupied(format!(
                "{} {owner_id} already has a {} (image {})",
                owner.label(),
                input.slot.label(),
                existing.id
            )));
        }
    }

    let image = image::ActiveModel {
        name: Set(input.name),
        url: Set(input.url),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    image_link::Entity::insert(image_link::ActiveModel {
        image_id: Set(image.id),
        owner_kind: Set(owner),
        owner_id: Set(owner_id),
        slot: Set(input.slot),
    })
    .exec_without_returning(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(image_id = image.id, ?owner, owner_id, slot = ?input.slot, "image attached");

    Ok(AttachedImage {
        image,
        slot: input.slot,
    })
}

/// Fetch one image, provided it belongs to the owner.
pub async fn get_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    image_id: i32,
) -> StoreResult<Option<AttachedImage>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Image", image_id)?;
    Ok(find_scoped(db, owner, owner_id, image_id).await?)
}

/// Every image attached to an owner, in creation order.
pub async fn get_all_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
) -> StoreResult<Vec<AttachedImage>> {
    validation::ensure_id(owner.label(), owner_id)?;
    Ok(find_all(db, owner, owner_id).await?)
}

/// The occupant of a slot; for `additional image` this is the oldest one.
pub async fn get_slot(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    slot: ImageSlot,
) -> StoreResult<Option<image::Model>> {
    validation::ensure_id(owner.label(), owner_id)?;
    Ok(find_slot(db, owner, owner_id, slot).await?)
}

/// Update name/url of an image owned by `owner`. `None` when the image is
/// not attached to that owner.
pub async fn update_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    image_id: i32,
    input: UpdateImage,
) -> StoreResult<Option<AttachedImage>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Image", image_id)?;
    validation::check(&input)?;

    let Some(current) = find_scoped(db, owner, owner_id, image_id).await? else {
        return Ok(None);
    };

    let slot = current.slot;
    let mut active: image::ActiveModel = current.image.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(url) = input.url {
        active.url = Set(url);
    }

    let image = active.update(db).await?;
    Ok(Some(AttachedImage { image, slot }))
}

/// Detach and delete one image of an owner. Returns the number of images
/// removed (0 when it does not belong to that owner).
pub async fn delete_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    image_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Image", image_id)?;

    let txn = db.begin().await?;
    if find_scoped(&txn, owner, owner_id, image_id).await?.is_none() {
        return Ok(0);
    }
    let removed = delete_images(&txn, vec![image_id]).await?;
    txn.commit().await?;

    tracing::info!(image_id, ?owner, owner_id, "image deleted");
    Ok(removed)
}

// ── Crate-internal helpers (run inside the caller's connection/transaction) ──

pub(crate) async fn find_scoped<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    image_id: i32,
) -> Result<Option<AttachedImage>, DbErr> {
    let row = image_link::Entity::find()
        .filter(image_link::Column::ImageId.eq(image_id))
        .filter(image_link::Column::OwnerKind.eq(owner))
        .filter(image_link::Column::OwnerId.eq(owner_id))
        .find_also_related(image::Entity)
        .one(conn)
        .await?;

    Ok(row.and_then(|(link, image)| image.map(|image| AttachedImage { image, slot: link.slot })))
}

pub(crate) async fn find_all<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<Vec<AttachedImage>, DbErr> {
    let rows = image_link::Entity::find()
        .filter(image_link::Column::OwnerKind.eq(owner))
        .filter(image_link::Column::OwnerId.eq(owner_id))
        .order_by_asc(image_link::Column::ImageId)
        .find_also_related(image::Entity)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(link, image)| image.map(|image| AttachedImage { image, slot: link.slot }))
        .collect())
}

pub(crate) async fn find_slot<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    slot: ImageSlot,
) -> Result<Option<image::Model>, DbErr> {
    Ok(find_slot_all(conn, owner, owner_id, slot).await?.into_iter().next())
}

pub(crate) async fn find_slot_all<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    slot: ImageSlot,
) -> Result<Vec<image::Model>, DbErr> {
    let rows = image_link::Entity::find()
        .filter(image_link::Column::OwnerKind.eq(owner))
        .filter(image_link::Column::OwnerId.eq(owner_id))
        .filter(image_link::Column::Slot.eq(slot))
        .order_by_asc(image_link::Column::ImageId)
        .find_also_related(image::Entity)
        .all(conn)
        .await?;

    Ok(rows.into_iter().filter_map(|(_, image)| image).collect())
}

/// Delete every image an owner holds in `slot`.
pub(crate) async fn purge_slot<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    slot: ImageSlot,
) -> Result<u64, DbErr> {
    let ids: Vec<i32> = image_link::Entity::find()
        .filter(image_link::Column::OwnerKind.eq(owner))
        .filter(image_link::Column::OwnerId.eq(owner_id))
        .filter(image_link::Column::Slot.eq(slot))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| link.image_id)
        .collect();

    delete_images(conn, ids).await
}

/// Delete every image attached to an owner, whatever the slot.
pub(crate) async fn purge_owner<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<u64, DbErr> {
    let ids: Vec<i32> = image_link::Entity::find()
        .filter(image_link::Column::OwnerKind.eq(owner))
        .filter(image_link::Column::OwnerId.eq(owner_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| link.image_id)
        .collect();

    delete_images(conn, ids).await
}

/// Link rows go first, then the image rows.
async fn delete_images<C: ConnectionTrait>(conn: &C, ids: Vec<i32>) -> Result<u64, DbErr> {
    if ids.is_empty() {
        return Ok(0);
    }

    image_link::Entity::delete_many()
        .filter(image_link::Column::ImageId.is_in(ids.clone()))
        .exec(conn)
        .await?;

    let result = image::Entity::delete_many()
        .filter(image::Column::Id.is_in(ids))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
