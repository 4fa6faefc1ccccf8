use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// SeaORM entity for the `skills` table. A skill's icon is an image owned by
/// the skill itself (owner kind `skill`, slot `icon`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub proficiency: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::skill_link::Entity")]
    Link,
}

impl Related<super::skill_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Link.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(custom(function = "not_blank", message = "Skill name is required"))]
    pub name: String,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(custom(function = "not_blank", message = "Skill name cannot be blank"))]
    pub name: Option<String>,
    pub proficiency: Option<String>,
}
