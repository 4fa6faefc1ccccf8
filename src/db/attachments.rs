//! Loading and purging the leaves (images, websites, skills, achievements)
//! attached to one owner row.

use sea_orm::*;

use crate::db::{achievements, images, skills, websites};
use crate::models::views::Attachments;
use crate::models::{ImageSlot, OwnerKind};

/// One query per attachment kind. Kinds the owner cannot carry are skipped.
pub(crate) async fn load<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<Attachments, DbErr> {
    let mut out = Attachments::default();

    for attached in images::find_all(conn, owner, owner_id).await? {
        match attached.slot {
            ImageSlot::MainImage if out.main_image.is_none() => {
                out.main_image = Some(attached.image)
            }
            ImageSlot::Logo if out.logo.is_none() => out.logo = Some(attached.image),
            ImageSlot::AdditionalImage => out.additional_images.push(attached.image),
            _ => {}
        }
    }

    if owner.accepts_websites() {
        out.websites = websites::find_all(conn, owner, owner_id).await?;
    }
    if owner.accepts_skills() {
        out.skills = skills::find_all(conn, owner, owner_id).await?;
    }
    if owner.accepts_achievements() {
        out.achievements = achievements::find_all(conn, owner, owner_id).await?;
    }

    Ok(out)
}

/// Delete every leaf attached to an owner, in a fixed order: main image,
/// logo, websites, achievements, skills, then the remaining images.
/// Returns the number of leaf rows removed.
pub(crate) async fn purge<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<u64, DbErr> {
    let mut removed = images::purge_slot(conn, owner, owner_id, ImageSlot::MainImage).await?;
    removed += images::purge_slot(conn, owner, owner_id, ImageSlot::Logo).await?;
    tracing::debug!(?owner, owner_id, "slot images removed");

    removed += websites::purge_owner(conn, owner, owner_id).await?;
    removed += achievements::purge_owner(conn, owner, owner_id).await?;
    removed += skills::purge_owner(conn, owner, owner_id).await?;

    // Additional images and anything left in other slots (icons).
    removed += images::purge_owner(conn, owner, owner_id).await?;
    tracing::debug!(?owner, owner_id, removed, "attachments purged");

    Ok(removed)
}
