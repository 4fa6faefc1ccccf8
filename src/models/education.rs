use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, not_in_future};

/// SeaORM entity for the `educations` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "educations")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
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
pub struct CreateEducation {
    #[validate(custom(function = "not_blank", message = "Institution is required"))]
    pub institution: String,
    #[validate(custom(function = "not_blank", message = "Degree is required"))]
    pub degree: String,
    pub field_of_study: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducation {
    #[validate(custom(function = "not_blank", message = "Institution cannot be blank"))]
    pub institution: Option<String>,
    #[validate(custom(function = "not_blank", message = "Degree cannot be blank"))]
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
