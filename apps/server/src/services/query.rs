//! Drug listing query parameters
//!
//! Turns the raw string query of `GET /api/drugs` into a typed, defaulted
//! [`DrugQuery`] or the full list of rejected fields. This is the
//! authoritative check for HTTP input: out-of-range pages and limits are
//! rejected here rather than clamped.

use crate::db::SortColumn;
use crate::error::{ValidationIssue, ValidationIssues};
use std::collections::HashMap;
use validator::Validate;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Public sort key of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Code,
    /// Sorts by generic name.
    Name,
    Company,
    #[default]
    LaunchDate,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Code, SortBy::Name, SortBy::Company, SortBy::LaunchDate];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Code => "code",
            SortBy::Name => "name",
            SortBy::Company => "company",
            SortBy::LaunchDate => "launchDate",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn column(self) -> SortColumn {
        match self {
            SortBy::Code => SortColumn::Code,
            SortBy::Name => SortColumn::GenericName,
            SortBy::Company => SortColumn::Company,
            SortBy::LaunchDate => SortColumn::LaunchDate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

/// A validated listing request.
///
/// `page` and `limit` stay signed so the listing service can clamp values
/// handed to it by callers other than [`DrugQuery::from_params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugQuery {
    pub page: i64,
    pub limit: i64,
    pub company: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub search: Option<String>,
}

impl Default for DrugQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            company: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            search: None,
        }
    }
}

#[derive(Validate)]
struct PagingBounds {
    #[validate(range(min = 1, message = "Number must be greater than 0"))]
    page: i64,
    #[validate(range(
        min = 1,
        max = 100,
        message = "Number must be between 1 and 100"
    ))]
    limit: i64,
}

impl DrugQuery {
    /// Parse and validate raw query parameters. Unknown keys are ignored;
    /// `company` and `search` pass through untouched, empty strings included.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationIssues> {
        let mut issues = Vec::new();
        let mut query = DrugQuery::default();

        let page = coerce_field(params, "page", DEFAULT_PAGE);
        let limit = coerce_field(params, "limit", DEFAULT_LIMIT);

        let bounds = PagingBounds {
            page: page.as_ref().copied().unwrap_or(DEFAULT_PAGE),
            limit: limit.as_ref().copied().unwrap_or(DEFAULT_LIMIT),
        };
        let range_issues = range_issues(&bounds);

        for (field, coerced) in [("page", page), ("limit", limit)] {
            match coerced {
                Err(issue) => issues.push(issue),
                Ok(value) => {
                    if let Some(issue) = range_issues.iter().find(|i| i.field == field) {
                        issues.push(issue.clone());
                    } else if field == "page" {
                        query.page = value;
                    } else {
                        query.limit = value;
                    }
                }
            }
        }

        if let Some(raw) = params.get("sortBy") {
            match SortBy::parse(raw) {
                Some(sort_by) => query.sort_by = sort_by,
                None => issues.push(ValidationIssue::new(
                    "sortBy",
                    "invalid_enum_value",
                    format!(
                        "Invalid enum value. Expected 'code' | 'name' | 'company' | 'launchDate', received '{raw}'"
                    ),
                )),
            }
        }

        if let Some(raw) = params.get("sortOrder") {
            match SortOrder::parse(raw) {
                Some(order) => query.sort_order = order,
                None => issues.push(ValidationIssue::new(
                    "sortOrder",
                    "invalid_enum_value",
                    format!("Invalid enum value. Expected 'asc' | 'desc', received '{raw}'"),
                )),
            }
        }

        query.company = params.get("company").cloned();
        query.search = params.get("search").cloned();

        if issues.is_empty() {
            Ok(query)
        } else {
            Err(ValidationIssues(issues))
        }
    }
}

fn coerce_field(
    params: &HashMap<String, String>,
    field: &str,
    default: i64,
) -> Result<i64, ValidationIssue> {
    match params.get(field) {
        None => Ok(default),
        Some(raw) => coerce_integer(raw)
            .map_err(|message| ValidationIssue::new(field, "invalid_type", message)),
    }
}

/// Numeric coercion of a query value: whitespace is ignored, an empty value
/// reads as 0, integral decimals (`"2.0"`, `"1e2"`) and unsigned `0x`, `0o`
/// and `0b` literals are accepted.
fn coerce_integer(raw: &str) -> Result<i64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let number: f64 = trimmed
        .parse()
        .map_err(|_| "Expected number, received nan")?;
    if number.is_nan() {
        return Err("Expected number, received nan");
    }
    if !number.is_finite() || number.fract() != 0.0 {
        return Err("Expected integer, received float");
    }
    // Saturates beyond the i64 range.
    Ok(number as i64)
}

/// `None` when `value` has no radix prefix.
fn parse_radix_literal(value: &str) -> Option<Result<i64, &'static str>> {
    let prefix = value.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &value[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(Err("Expected number, received nan"));
    }
    // Saturates beyond the i64 range.
    Some(Ok(i64::from_str_radix(digits, radix).unwrap_or(i64::MAX)))
}

fn range_issues(bounds: &PagingBounds) -> Vec<ValidationIssue> {
    let Err(errors) = bounds.validate() else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Number out of range".to_string());
            issues.push(ValidationIssue::new(
                field.to_string(),
                error.code.to_string(),
                message,
            ));
        }
    }
    issues
}
