use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::OwnerKind;

/// SeaORM entity for the `achievement_links` join table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievement_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub achievement_id: i32,
    pub owner_kind: OwnerKind,
    pub owner_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::achievement::Entity",
        from = "Column::AchievementId",
        to = "super::achievement::Column::Id",
        on_delete = "Cascade"
    )]
    Achievement,
}

impl Related<super::achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Achievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
