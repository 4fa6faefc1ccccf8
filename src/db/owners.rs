use sea_orm::*;

use crate::error::{StoreError, StoreResult};
use crate::models::{
    OwnerKind, blog_post, credential, education, hobby, open_source_contribution, portfolio,
    side_project, skill, volunteer_work, work_experience,
};

/// Whether the owner row exists.
pub(crate) async fn exists<C: ConnectionTrait>(
    conn: &C,
    kind: OwnerKind,
    id: i32,
) -> Result<bool, DbErr> {
    let found = match kind {
        OwnerKind::Portfolio => portfolio::Entity::find_by_id(id).one(conn).await?.is_some(),
        OwnerKind::Education => education::Entity::find_by_id(id).one(conn).await?.is_some(),
        OwnerKind::WorkExperience => work_experience::Entity::find_by_id(id)
            .one(conn)
            .await?
            .is_some(),
        OwnerKind::Credential => credential::Entity::find_by_id(id).one(conn).await?.is_some(),
        OwnerKind::VolunteerWork => volunteer_work::Entity::find_by_id(id)
            .one(conn)
            .await?
            .is_some(),
        OwnerKind::OpenSourceContribution => open_source_contribution::Entity::find_by_id(id)
            .one(conn)
            .await?
            .is_some(),
        OwnerKind::SideProject => side_project::Entity::find_by_id(id).one(conn).await?.is_some(),
        OwnerKind::Hobby => hobby::Entity::find_by_id(id).one(conn).await?.is_some(),
        OwnerKind::Skill => skill::Entity::find_by_id(id).one(conn).await?.is_some(),
        OwnerKind::BlogPost => blog_post::Entity::find_by_id(id).one(conn).await?.is_some(),
    };
    Ok(found)
}

/// Fails with `NotFound` when the owner row is missing.
pub(crate) async fn ensure_exists<C: ConnectionTrait>(
    conn: &C,
    kind: OwnerKind,
    id: i32,
) -> StoreResult<()> {
    if exists(conn, kind, id).await? {
        Ok(())
    } else {
        Err(StoreError::NotFound(format!("{} {id} not found", kind.label())))
    }
}
