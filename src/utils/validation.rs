use crate::utils::error::{FormError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static BIRTH_DATE_RE: OnceLock<Regex> = OnceLock::new();

fn birth_date_pattern() -> &'static Regex {
    BIRTH_DATE_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid pattern"))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormError::MissingFieldError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// 先比對 YYYY-MM-DD 樣式，再確認是真實存在的日期
pub fn validate_birth_date(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !birth_date_pattern().is_match(value) {
        return Err(FormError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "應為 YYYY-MM-DD".to_string(),
        });
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err(FormError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "不是有效的日期".to_string(),
        });
    }

    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FormError::InvalidFieldError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FormError::InvalidFieldError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FormError::InvalidFieldError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FormError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("first_name", "王").is_ok());
        assert!(validate_non_empty_string("first_name", "").is_err());
        assert!(validate_non_empty_string("first_name", "   ").is_err());
    }

    #[test]
    fn test_validate_birth_date_pattern() {
        assert!(validate_birth_date("birth_date", "2000-01-01").is_ok());
        assert!(validate_birth_date("birth_date", "01/01/2000").is_err());
        assert!(validate_birth_date("birth_date", "2000-1-1").is_err());
        assert!(validate_birth_date("birth_date", "").is_err());
    }

    #[test]
    fn test_validate_birth_date_rejects_impossible_dates() {
        // 樣式正確但不存在的日期
        assert!(validate_birth_date("birth_date", "2000-13-40").is_err());
        assert!(validate_birth_date("birth_date", "2001-02-29").is_err());
        assert!(validate_birth_date("birth_date", "2000-02-29").is_ok());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_endpoint", "https://example.com").is_ok());
        assert!(validate_url("api_endpoint", "http://localhost:5000/api/generate-name").is_ok());
        assert!(validate_url("api_endpoint", "").is_err());
        assert!(validate_url("api_endpoint", "invalid-url").is_err());
        assert!(validate_url("api_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("banner_ttl_ms", 3000u64, 500, 10000).is_ok());
        assert!(validate_range("banner_ttl_ms", 100u64, 500, 10000).is_err());
        assert!(validate_range("banner_ttl_ms", 20000u64, 500, 10000).is_err());
    }
}
