use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::WebsiteType;
use crate::validation::not_blank;

/// SeaORM entity for the `websites` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "websites")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    #[serde(rename = "type")]
    pub website_type: WebsiteType,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::website_link::Entity")]
    Link,
}

impl Related<super::website_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Link.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWebsite {
    #[validate(custom(function = "not_blank", message = "Website name is required"))]
    pub name: String,
    #[validate(url(message = "Website url must be a valid URL"))]
    pub url: String,
    #[serde(rename = "type")]
    pub website_type: WebsiteType,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWebsite {
    #[validate(custom(function = "not_blank", message = "Website name cannot be blank"))]
    pub name: Option<String>,
    #[validate(url(message = "Website url must be a valid URL"))]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub website_type: Option<WebsiteType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteQuery {
    #[serde(rename = "type")]
    pub website_type: Option<WebsiteType>,
}
