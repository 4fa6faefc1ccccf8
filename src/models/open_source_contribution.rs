use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, not_in_future};

/// SeaORM entity for the `open_source_contributions` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "open_source_contributions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_name: String,
    pub role: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpenSourceContribution {
    #[validate(custom(function = "not_blank", message = "Project name is required"))]
    pub project_name: String,
    pub role: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpenSourceContribution {
    #[validate(custom(function = "not_blank", message = "Project name cannot be blank"))]
    pub project_name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
