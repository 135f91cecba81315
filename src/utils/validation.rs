use crate::domain::model::BirthInput;
use crate::utils::error::{AstroError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));
static TZ_OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-](0\d|1[0-4]):[0-5]\d$").expect("valid offset regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> AstroError {
    AstroError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// `YYYY-MM-DD` 格式且必須是真實存在的日期
pub fn validate_birth_date(field_name: &str, date: &str) -> Result<NaiveDate> {
    if !DATE_RE.is_match(date) {
        return Err(invalid(field_name, date, "Expected format YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| invalid(field_name, date, format!("Not a calendar date: {}", e)))
}

pub fn validate_birth_time(field_name: &str, time: &str) -> Result<()> {
    if !TIME_RE.is_match(time) {
        return Err(invalid(field_name, time, "Expected 24h format HH:MM"));
    }
    Ok(())
}

pub fn validate_tz_offset(field_name: &str, offset: &str) -> Result<()> {
    if !TZ_OFFSET_RE.is_match(offset) {
        return Err(invalid(field_name, offset, "Expected offset format ±HH:MM"));
    }
    Ok(())
}

impl Validate for BirthInput {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_birth_date("date", &self.date)?;
        validate_birth_time("time", &self.time)?;
        validate_tz_offset("tz_offset", &self.tz_offset)?;
        Ok(())
    }
}
