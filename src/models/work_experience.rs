use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, not_in_future};

/// SeaORM entity for the `work_experiences` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_experiences")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
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
pub struct CreateWorkExperience {
    #[validate(custom(function = "not_blank", message = "Company is required"))]
    pub company: String,
    #[validate(custom(function = "not_blank", message = "Position is required"))]
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkExperience {
    #[validate(custom(function = "not_blank", message = "Company cannot be blank"))]
    pub company: Option<String>,
    #[validate(custom(function = "not_blank", message = "Position cannot be blank"))]
    pub position: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
