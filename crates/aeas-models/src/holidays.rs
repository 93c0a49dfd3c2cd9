//! Holiday calendar DTOs and list filters.

use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ident;
use crate::query::{ListFilters, QueryString, check_page, check_page_size};

/// Largest page size the holidays endpoint accepts.
pub const MAX_HOLIDAY_LIMIT: u32 = 100;

/// Holiday classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    /// National public holiday.
    National,
    /// Regional holiday.
    Regional,
    /// Municipal holiday.
    Municipal,
    /// School break or closure.
    School,
    /// Religious observance.
    Religious,
}

impl HolidayType {
    /// Every type in display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::National,
            Self::Regional,
            Self::Municipal,
            Self::School,
            Self::Religious,
        ]
    }

    /// Wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Regional => "regional",
            Self::Municipal => "municipal",
            Self::School => "school",
            Self::Religious => "religious",
        }
    }
}

impl Display for HolidayType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Sortable holiday columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HolidaySortField {
    /// Sort by date.
    Date,
    /// Sort by name.
    Name,
    /// Sort by type.
    Type,
}

impl Display for HolidaySortField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Type => "type",
        })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl Display for SortOrder {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        })
    }
}

/// Holiday record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Holiday id.
    #[serde(deserialize_with = "ident::deserialize")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Classification.
    #[serde(rename = "type")]
    pub kind: HolidayType,
    /// Repeats every year on the same date.
    #[serde(default)]
    pub is_recurring: bool,
    /// ISO country code.
    #[serde(default)]
    pub country: Option<String>,
    /// Region name.
    #[serde(default)]
    pub region: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for `POST /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateHolidayRequest {
    /// Display name.
    pub name: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Classification.
    #[serde(rename = "type")]
    pub kind: HolidayType,
    /// Repeats yearly.
    pub is_recurring: bool,
    /// ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Region name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateHolidayRequest {
    /// Reject blank names.
    ///
    /// # Errors
    /// Returns [`ValidationError::Missing`] when the name is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Missing { field: "name" });
        }
        Ok(())
    }
}

/// Body for `PUT /holidays/{id}`; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHolidayRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// New classification.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<HolidayType>,
    /// New recurrence flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    /// New country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// New region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters for `GET /holidays`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayFilters {
    /// Holiday type.
    pub kind: Option<HolidayType>,
    /// Calendar year.
    pub year: Option<i32>,
    /// Month (1-12).
    pub month: Option<u32>,
    /// Range start (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Range end (inclusive).
    pub end_date: Option<NaiveDate>,
    /// Recurring flag.
    pub is_recurring: Option<bool>,
    /// ISO country code.
    pub country: Option<String>,
    /// Region name.
    pub region: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Sort column.
    pub sort_by: Option<HolidaySortField>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
}

impl HolidayFilters {
    /// Every holiday of `year`, sorted by date.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            sort_by: Some(HolidaySortField::Date),
            sort_order: Some(SortOrder::Asc),
            limit: Some(MAX_HOLIDAY_LIMIT),
            ..Self::default()
        }
    }
}

impl ListFilters for HolidayFilters {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(year) = self.year {
            if !(1900..=2100).contains(&year) {
                return Err(ValidationError::invalid("year", "out_of_range", year));
            }
        }
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(ValidationError::invalid("month", "out_of_range", month));
            }
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(ValidationError::invalid("startDate", "after_end_date", start));
            }
        }
        check_page("page", self.page)?;
        check_page_size("limit", self.limit, MAX_HOLIDAY_LIMIT)
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push_opt("type", self.kind)
            .push_opt("year", self.year)
            .push_opt("month", self.month)
            .push_opt("startDate", self.start_date)
            .push_opt("endDate", self.end_date)
            .push_opt("isRecurring", self.is_recurring)
            .push_text("country", self.country.as_deref())
            .push_text("region", self.region.as_deref())
            .push_text("search", self.search.as_deref())
            .push_opt("page", self.page)
            .push_opt("limit", self.limit)
            .push_opt("sortBy", self.sort_by)
            .push_opt("sortOrder", self.sort_order);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ValidationError::Missing { field: "date" })
    }

    #[test]
    fn holiday_filters_build_expected_query() -> Result<(), ValidationError> {
        let filters = HolidayFilters {
            kind: Some(HolidayType::National),
            start_date: Some(date(2025, 1, 1)?),
            end_date: Some(date(2025, 6, 30)?),
            is_recurring: Some(false),
            country: Some("PT".to_string()),
            ..HolidayFilters::default()
        };
        assert_eq!(
            filters.query_path("/holidays")?,
            "/holidays?type=national&startDate=2025-01-01&endDate=2025-06-30&isRecurring=false&country=PT"
        );
        assert_eq!(
            HolidayFilters::for_year(2025).query_path("/holidays")?,
            "/holidays?year=2025&limit=100&sortBy=date&sortOrder=ASC"
        );
        Ok(())
    }

    #[test]
    fn holiday_filters_reject_inverted_ranges_and_bad_months() -> Result<(), ValidationError> {
        let inverted = HolidayFilters {
            start_date: Some(date(2025, 6, 1)?),
            end_date: Some(date(2025, 1, 1)?),
            ..HolidayFilters::default()
        };
        assert_eq!(inverted.validate().map_err(|err| err.field()), Err("startDate"));

        let month = HolidayFilters {
            month: Some(13),
            ..HolidayFilters::default()
        };
        assert_eq!(month.validate().map_err(|err| err.field()), Err("month"));
        Ok(())
    }

    #[test]
    fn holiday_decodes_and_requests_serialise() -> Result<(), Box<dyn std::error::Error>> {
        let holiday: Holiday = serde_json::from_str(
            r#"{"id":3,"name":"Dia de Portugal","date":"2025-06-10","type":"national","isRecurring":true}"#,
        )?;
        assert_eq!(holiday.id, "3");
        assert_eq!(holiday.kind, HolidayType::National);
        assert!(holiday.is_recurring);

        let update = UpdateHolidayRequest {
            name: Some("Carnaval".to_string()),
            ..UpdateHolidayRequest::default()
        };
        assert_eq!(serde_json::to_string(&update)?, r#"{"name":"Carnaval"}"#);

        let create = CreateHolidayRequest {
            name: "  ".to_string(),
            date: date(2025, 3, 4)?,
            kind: HolidayType::School,
            is_recurring: false,
            country: None,
            region: None,
            description: None,
        };
        assert!(create.validate().is_err());
        Ok(())
    }
}
