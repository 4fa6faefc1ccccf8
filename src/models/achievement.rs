use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, not_in_future};

/// SeaORM entity for the `achievements` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub date_achieved: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::achievement_link::Entity")]
    Link,
}

impl Related<super::achievement_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Link.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievement {
    #[validate(custom(function = "not_blank", message = "Achievement title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Achievement date cannot be in the future"))]
    pub date_achieved: Option<Date>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAchievement {
    #[validate(custom(function = "not_blank", message = "Achievement title cannot be blank"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Achievement date cannot be in the future"))]
    pub date_achieved: Option<Date>,
}
