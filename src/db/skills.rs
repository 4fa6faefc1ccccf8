use sea_orm::*;

use crate::db::{images, owners};
use crate::error::{StoreError, StoreResult};
use crate::models::skill::{self, CreateSkill, UpdateSkill};
use crate::models::views::SkillView;
use crate::models::{ImageSlot, OwnerKind, skill_link};
use crate::validation;

fn ensure_accepts(owner: OwnerKind) -> StoreResult<()> {
    if owner.accepts_skills() {
        Ok(())
    } else {
        Err(StoreError::Validation(format!(
            "{} entries do not carry skills",
            owner.label()
        )))
    }
}

pub async fn create_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    input: CreateSkill,
) -> StoreResult<SkillView> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::check(&input)?;
    ensure_accepts(owner)?;

    let txn = db.begin().await?;
    owners::ensure_exists(&txn, owner, owner_id).await?;

    let skill = skill::ActiveModel {
        name: Set(input.name),
        proficiency: Set(input.proficiency),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    skill_link::Entity::insert(skill_link::ActiveModel {
        skill_id: Set(skill.id),
        owner_kind: Set(owner),
        owner_id: Set(owner_id),
    })
    .exec_without_returning(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(skill_id = skill.id, ?owner, owner_id, "skill attached");
    Ok(SkillView { skill, icon: None })
}

pub async fn get_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    skill_id: i32,
) -> StoreResult<Option<SkillView>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Skill", skill_id)?;

    match find_scoped(db, owner, owner_id, skill_id).await? {
        Some(skill) => Ok(Some(with_icon(db, skill).await?)),
        None => Ok(None),
    }
}

pub async fn get_all_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
) -> StoreResult<Vec<SkillView>> {
    validation::ensure_id(owner.label(), owner_id)?;
    Ok(find_all(db, owner, owner_id).await?)
}

pub async fn update_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    skill_id: i32,
    input: UpdateSkill,
) -> StoreResult<Option<SkillView>> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Skill", skill_id)?;
    validation::check(&input)?;

    let Some(current) = find_scoped(db, owner, owner_id, skill_id).await? else {
        return Ok(None);
    };

    let mut active: skill::ActiveModel = current.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(proficiency) = input.proficiency {
        active.proficiency = Set(Some(proficiency));
    }

    let skill = active.update(db).await?;
    Ok(Some(with_icon(db, skill).await?))
}

/// Delete one skill of an owner together with its icon. Returns the number of
/// skill and image rows removed.
pub async fn delete_for_owner(
    db: &DatabaseConnection,
    owner: OwnerKind,
    owner_id: i32,
    skill_id: i32,
) -> StoreResult<u64> {
    validation::ensure_id(owner.label(), owner_id)?;
    validation::ensure_id("Skill", skill_id)?;

    let txn = db.begin().await?;
    if find_scoped(&txn, owner, owner_id, skill_id).await?.is_none() {
        return Ok(0);
    }
    let removed = purge(&txn, skill_id).await?;
    txn.commit().await?;

    tracing::info!(skill_id, ?owner, owner_id, "skill deleted");
    Ok(removed)
}

// ── Crate-internal helpers ──

async fn with_icon<C: ConnectionTrait>(conn: &C, skill: skill::Model) -> Result<SkillView, DbErr> {
    let icon = images::find_slot(conn, OwnerKind::Skill, skill.id, ImageSlot::Icon).await?;
    Ok(SkillView { skill, icon })
}

async fn find_scoped<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
    skill_id: i32,
) -> Result<Option<skill::Model>, DbErr> {
    let row = skill_link::Entity::find()
        .filter(skill_link::Column::SkillId.eq(skill_id))
        .filter(skill_link::Column::OwnerKind.eq(owner))
        .filter(skill_link::Column::OwnerId.eq(owner_id))
        .find_also_related(skill::Entity)
        .one(conn)
        .await?;
    Ok(row.and_then(|(_, skill)| skill))
}

/// Skills of an owner with their icons; one icon query per skill.
pub(crate) async fn find_all<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<Vec<SkillView>, DbErr> {
    let rows = skill_link::Entity::find()
        .filter(skill_link::Column::OwnerKind.eq(owner))
        .filter(skill_link::Column::OwnerId.eq(owner_id))
        .order_by_asc(skill_link::Column::SkillId)
        .find_also_related(skill::Entity)
        .all(conn)
        .await?;

    let mut views = Vec::with_capacity(rows.len());
    for skill in rows.into_iter().filter_map(|(_, skill)| skill) {
        views.push(with_icon(conn, skill).await?);
    }
    Ok(views)
}

/// Icon first, then the link row, then the skill row.
async fn purge<C: ConnectionTrait>(conn: &C, skill_id: i32) -> Result<u64, DbErr> {
    let icons = images::purge_owner(conn, OwnerKind::Skill, skill_id).await?;

    skill_link::Entity::delete_many()
        .filter(skill_link::Column::SkillId.eq(skill_id))
        .exec(conn)
        .await?;

    let result = skill::Entity::delete_by_id(skill_id).exec(conn).await?;
    Ok(icons + result.rows_affected)
}

/// Delete every skill attached to an owner, icons included.
pub(crate) async fn purge_owner<C: ConnectionTrait>(
    conn: &C,
    owner: OwnerKind,
    owner_id: i32,
) -> Result<u64, DbErr> {
    let ids: Vec<i32> = skill_link::Entity::find()
        .filter(skill_link::Column::OwnerKind.eq(owner))
        .filter(skill_link::Column::OwnerId.eq(owner_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|link| link.skill_id)
        .collect();

    let mut removed = 0;
    for skill_id in ids {
        tracing::debug!(skill_id, ?owner, owner_id, "cascading skill delete");
        removed += purge(conn, skill_id).await?;
    }
    Ok(removed)
}
