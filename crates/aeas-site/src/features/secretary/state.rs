//! Holiday calendar shown on the secretary page.

use std::collections::BTreeMap;

use aeas_models::{Holiday, HolidayFilters};
use chrono::{Datelike, NaiveDate};

/// Earliest and latest selectable years around `today`.
#[must_use]
pub fn selectable_years(today: NaiveDate) -> Vec<i32> {
    let year = today.year();
    ((year - 1)..=(year + 1)).collect()
}

/// Backend filters for the calendar of `year`.
#[must_use]
pub fn calendar_filters(year: i32) -> HolidayFilters {
    HolidayFilters::for_year(year)
}

/// Holidays grouped by month (1-12), each group sorted by date.
#[must_use]
pub fn group_by_month(holidays: &[Holiday]) -> BTreeMap<u32, Vec<Holiday>> {
    let mut groups: BTreeMap<u32, Vec<Holiday>> = BTreeMap::new();
    for holiday in holidays {
        groups
            .entry(holiday.date.month())
            .or_default()
            .push(holiday.clone());
    }
    for group in groups.values_mut() {
        group.sort_by_key(|holiday| holiday.date);
    }
    groups
}

/// First holiday on or after `today`.
#[must_use]
pub fn next_holiday(holidays: &[Holiday], today: NaiveDate) -> Option<&Holiday> {
    holidays
        .iter()
        .filter(|holiday| holiday.date >= today)
        .min_by_key(|holiday| holiday.date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(id: &str, date: &str) -> Result<Holiday, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Feriado {id}"),
            "date": date,
            "type": "national",
        }))
    }

    fn day(text: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
    }

    #[test]
    fn holidays_group_by_month_in_date_order() -> Result<(), Box<dyn std::error::Error>> {
        let holidays = vec![
            holiday("a", "2025-06-13")?,
            holiday("b", "2025-04-25")?,
            holiday("c", "2025-06-10")?,
        ];
        let groups = group_by_month(&holidays);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![4, 6]);
        let june: Vec<_> = groups
            .get(&6)
            .map(|group| group.iter().map(|h| h.id.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(june, vec!["c", "a"]);

        let next = next_holiday(&holidays, day("2025-05-01")?);
        assert_eq!(next.map(|h| h.id.as_str()), Some("c"));
        assert!(next_holiday(&holidays, day("2025-12-31")?).is_none());
        Ok(())
    }

    #[test]
    fn year_selector_spans_adjacent_years() -> Result<(), chrono::ParseError> {
        assert_eq!(selectable_years(day("2025-09-15")?), vec![2024, 2025, 2026]);
        assert_eq!(calendar_filters(2025).year, Some(2025));
        Ok(())
    }
}
