use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the store layer. Absent rows are not errors: reads
/// return `Option` and deletes return a row count.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Bad input, rejected before the database is touched.
    #[error("{0}")]
    Validation(String),

    /// A single-valued slot (main image, logo, icon, website type) is taken.
    #[error("{0}")]
    SlotOccupied(String),

    /// The parent named by a create call does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                })
            })
            .collect();
        messages.sort();
        StoreError::Validation(messages.join("; "))
    }
}
