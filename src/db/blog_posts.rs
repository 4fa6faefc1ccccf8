use sea_orm::*;

use crate::db::{attachments, images};
use crate::error::StoreResult;
use crate::models::OwnerKind;
use crate::models::blog_post::{self, CreateBlogPost, UpdateBlogPost};
use crate::models::views::EntryView;
use crate::validation;

const KIND: OwnerKind = OwnerKind::BlogPost;

pub async fn insert_blog_post(
    db: &DatabaseConnection,
    input: CreateBlogPost,
) -> StoreResult<blog_post::Model> {
    validation::check(&input)?;

    let post = blog_post::ActiveModel {
        title: Set(input.title),
        summary: Set(input.summary),
        content: Set(input.content),
        published_date: Set(input.published_date),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(blog_post_id = post.id, "blog post created");
    Ok(post)
}

/// Newest first.
pub async fn get_all_blog_posts(db: &DatabaseConnection) -> StoreResult<Vec<blog_post::Model>> {
    Ok(blog_post::Entity::find()
        .order_by_desc(blog_post::Column::CreatedAt)
        .order_by_desc(blog_post::Column::Id)
        .all(db)
        .await?)
}

/// A blog post with its main and additional images.
pub async fn get_blog_post(
    db: &DatabaseConnection,
    id: i32,
) -> StoreResult<Option<EntryView<blog_post::Model>>> {
    validation::ensure_id("Blog post", id)?;

    let Some(post) = blog_post::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let attachments = attachments::load(db, KIND, post.id).await?;
    Ok(Some(EntryView { entry: post, attachments }))
}

pub async fn update_blog_post(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateBlogPost,
) -> StoreResult<Option<blog_post::Model>> {
    validation::ensure_id("Blog post", id)?;
    validation::check(&input)?;

    let Some(post) = blog_post::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: blog_post::ActiveModel = post.into();
    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(summary) = input.summary {
        active.summary = Set(Some(summary));
    }
    if let Some(content) = input.content {
        active.content = Set(content);
    }
    if let Some(published_date) = input.published_date {
        active.published_date = Set(Some(published_date));
    }

    Ok(Some(active.update(db).await?))
}

/// Images go first, then the post.
pub async fn delete_blog_post(db: &DatabaseConnection, id: i32) -> StoreResult<u64> {
    validation::ensure_id("Blog post", id)?;

    let txn = db.begin().await?;
    let mut removed = images::purge_owner(&txn, KIND, id).await?;
    let result = blog_post::Entity::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Ok(0);
    }
    removed += result.rows_affected;
    txn.commit().await?;

    tracing::info!(blog_post_id = id, removed, "blog post deleted");
    Ok(removed)
}
