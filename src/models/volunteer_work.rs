use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, not_in_future};

/// SeaORM entity for the `volunteer_works` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "volunteer_works")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization: String,
    pub role: String,
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
pub struct CreateVolunteerWork {
    #[validate(custom(function = "not_blank", message = "Organization is required"))]
    pub organization: String,
    #[validate(custom(function = "not_blank", message = "Role is required"))]
    pub role: String,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolunteerWork {
    #[validate(custom(function = "not_blank", message = "Organization cannot be blank"))]
    pub organization: Option<String>,
    #[validate(custom(function = "not_blank", message = "Role cannot be blank"))]
    pub role: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Start date cannot be in the future"))]
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
