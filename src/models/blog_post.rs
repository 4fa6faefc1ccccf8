use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// SeaORM entity for the `blog_posts` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub published_date: Option<Date>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    #[validate(custom(function = "not_blank", message = "Blog post title is required"))]
    pub title: String,
    pub summary: Option<String>,
    #[validate(custom(function = "not_blank", message = "Blog post content is required"))]
    pub content: String,
    pub published_date: Option<Date>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    #[validate(custom(function = "not_blank", message = "Blog post title cannot be blank"))]
    pub title: Option<String>,
    pub summary: Option<String>,
    #[validate(custom(function = "not_blank", message = "Blog post content cannot be blank"))]
    pub content: Option<String>,
    pub published_date: Option<Date>,
}
