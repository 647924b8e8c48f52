// Validation utilities module
// Provides custom validation functions for domain-specific rules

use chrono::{NaiveDate, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use validator::ValidationError;

/// Matches 24-hour wall clock times like "09:30" or "23:05"
fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"))
}

/// Validates that a time string is a 24-hour HH:MM value
pub fn validate_time_format(time: &str) -> Result<(), ValidationError> {
    if time_regex().is_match(time) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_time_format"))
    }
}

/// Validates that a reservation date is not earlier than the current day
pub fn validate_reservation_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < Utc::now().date_naive() {
        Err(ValidationError::new("date_in_past"))
    } else {
        Ok(())
    }
}

/// Validates that a tour or catalog price is positive
pub fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        Err(ValidationError::new("price_must_be_positive"))
    } else {
        Ok(())
    }
}

/// Validates that a rating is between 0.0 and 5.0
pub fn validate_rating_range(rating: f64) -> Result<(), ValidationError> {
    if !(0.0..=5.0).contains(&rating) {
        Err(ValidationError::new("rating_out_of_range"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_valid_times_accepted() {
        for time in ["00:00", "09:30", "12:00", "19:45", "23:59"] {
            assert!(validate_time_format(time).is_ok(), "{time} should be valid");
        }
    }

    #[test]
    fn test_malformed_times_rejected() {
        for time in ["24:00", "12:60", "9:30", "12:5", "noon", "12-30", ""] {
            assert!(validate_time_format(time).is_err(), "{time} should be invalid");
        }
    }

    #[test]
    fn test_today_and_future_dates_accepted() {
        let today = Utc::now().date_naive();
        assert!(validate_reservation_date(&today).is_ok());
        assert!(validate_reservation_date(&(today + Duration::days(30))).is_ok());
    }

    #[test]
    fn test_past_dates_rejected() {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        assert!(validate_reservation_date(&yesterday).is_err());
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(validate_positive_price(&Decimal::new(100, 0)).is_ok());
        assert!(validate_positive_price(&Decimal::ZERO).is_err());
        assert!(validate_positive_price(&Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn test_rating_range() {
        assert!(validate_rating_range(0.0).is_ok());
        assert!(validate_rating_range(5.0).is_ok());
        assert!(validate_rating_range(5.1).is_err());
        assert!(validate_rating_range(-0.1).is_err());
    }
}
