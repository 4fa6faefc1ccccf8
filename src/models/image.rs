use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ImageSlot;
use crate::validation::not_blank;

/// SeaORM entity for the `images` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "images")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::image_link::Entity")]
    Link,
}

impl Related<super::image_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Link.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// An image together with the slot it fills on its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachedImage {
    #[serde(flatten)]
    pub image: Model,
    #[serde(rename = "type")]
    pub slot: ImageSlot,
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateImage {
    #[validate(custom(function = "not_blank", message = "Image name is required"))]
    pub name: String,
    #[validate(url(message = "Image url must be a valid URL"))]
    pub url: String,
    #[serde(rename = "type")]
    pub slot: ImageSlot,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateImage {
    #[validate(custom(function = "not_blank", message = "Image name cannot be blank"))]
    pub name: Option<String>,
    #[validate(url(message = "Image url must be a valid URL"))]
    pub url: Option<String>,
}
