use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, not_in_future};

/// SeaORM entity for the `side_projects` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "side_projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub professional_summary: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for side project creation. `portfolio_id` is only read by the
/// unscoped `/create-sideproject` route; the portfolio-scoped route takes the
/// id from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSideProject {
    #[validate(custom(function = "not_blank", message = "Side project name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Professional summary is required"))]
    pub professional_summary: String,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    #[serde(default)]
    pub portfolio_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSideProject {
    #[validate(custom(function = "not_blank", message = "Side project name cannot be blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank", message = "Professional summary cannot be blank"))]
    pub professional_summary: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
