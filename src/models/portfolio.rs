use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// SeaORM entity for the `portfolios` table — the aggregate root.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub professional_summary: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_link::Entity")]
    Links,
}

impl Related<super::portfolio_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Links.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolio {
    #[validate(custom(function = "not_blank", message = "Portfolio name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Portfolio title is required"))]
    pub title: String,
    pub professional_summary: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolio {
    #[validate(custom(function = "not_blank", message = "Portfolio name cannot be blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank", message = "Portfolio title cannot be blank"))]
    pub title: Option<String>,
    pub professional_summary: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub location: Option<String>,
}
