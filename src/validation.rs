use chrono::{NaiveDate, Utc};
use validator::{Validate, ValidationError};

use crate::error::{StoreError, StoreResult};

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Rejects dates after today (UTC).
pub fn not_in_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(ValidationError::new("future_date"));
    }
    Ok(())
}

/// Run the derived validators on a request body.
pub fn check<T: Validate>(input: &T) -> StoreResult<()> {
    input.validate().map_err(StoreError::from)
}

/// Identifiers are positive; anything else never reaches the database.
pub fn ensure_id(what: &str, id: i32) -> StoreResult<()> {
    if id <= 0 {
        return Err(StoreError::Validation(format!(
            "{what} id must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

pub fn ensure_date_order(start: Option<NaiveDate>, end: Option<NaiveDate>) -> StoreResult<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(StoreError::Validation(format!(
                "End date {end} is before start date {start}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
        assert!(not_blank("Rust").is_ok());
    }

    #[test]
    fn future_dates_are_rejected() {
        let today = Utc::now().date_naive();
        assert!(not_in_future(&today).is_ok());
        assert!(not_in_future(&(today - Duration::days(400))).is_ok());
        assert!(not_in_future(&(today + Duration::days(1))).is_err());
    }

    #[test]
    fn non_positive_ids_are_rejected() {
        assert!(ensure_id("Portfolio", 1).is_ok());
        let err = ensure_id("Portfolio", 0).unwrap_err();
        assert!(matches!(err, StoreError::Validation(msg) if msg.contains("Portfolio id")));
        assert!(ensure_id("Portfolio", -7).is_err());
    }

    #[test]
    fn end_date_must_not_precede_start() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        assert!(ensure_date_order(Some(start), Some(end)).is_err());
        assert!(ensure_date_order(Some(end), Some(start)).is_ok());
        assert!(ensure_date_order(Some(start), None).is_ok());
        assert!(ensure_date_order(None, Some(end)).is_ok());
    }

    #[test]
    fn derived_messages_are_collected() {
        use crate::models::hobby::CreateHobby;

        let input = CreateHobby {
            name: "  ".to_string(),
            description: None,
        };
        let err = check(&input).unwrap_err();
        assert!(matches!(err, StoreError::Validation(msg) if msg == "Hobby name is required"));
    }
}
