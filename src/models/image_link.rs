use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{ImageSlot, OwnerKind};

/// SeaORM entity for the `image_links` join table. The `slot` column is the
/// only record of which image is an owner's main image, logo or icon.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub image_id: i32,
    pub owner_kind: OwnerKind,
    pub owner_id: i32,
    pub slot: ImageSlot,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id",
        on_delete = "Cascade"
    )]
    Image,
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
