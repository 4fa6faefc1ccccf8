use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, not_in_future};

/// SeaORM entity for the `credentials` table (certifications, licenses).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "credentials")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub issuing_organization: String,
    pub credential_id: Option<String>,
    pub issue_date: Date,
    pub expiration_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredential {
    #[validate(custom(function = "not_blank", message = "Credential name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Issuing organization is required"))]
    pub issuing_organization: String,
    pub credential_id: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Issue date cannot be in the future"))]
    pub issue_date: Date,
    pub expiration_date: Option<Date>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredential {
    #[validate(custom(function = "not_blank", message = "Credential name cannot be blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank", message = "Issuing organization cannot be blank"))]
    pub issuing_organization: Option<String>,
    pub credential_id: Option<String>,
    #[validate(custom(function = "not_in_future", message = "Issue date cannot be in the future"))]
    pub issue_date: Option<Date>,
    pub expiration_date: Option<Date>,
}
