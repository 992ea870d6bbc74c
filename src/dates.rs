use chrono::{Datelike, Duration, NaiveDate};

/// Canonical string key for a calendar day, `YYYY-MM-DD`.
///
/// `NaiveDate` carries no timezone, so the key for the cell labelled "15"
/// in the displayed month is always that literal date, whatever the host
/// timezone is set to.
pub fn date_key(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First and last day of the month containing `d`.
pub fn month_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = d.with_day(1).unwrap_or(d);
    let last = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).unwrap() - Duration::days(1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1).unwrap() - Duration::days(1)
    };
    (first, last)
}

/// Month cursor navigation, first-of-month semantics.
pub fn prev_month(cursor: NaiveDate) -> NaiveDate {
    let (y, m) = (cursor.year(), cursor.month());
    if m == 1 {
        NaiveDate::from_ymd_opt(y - 1, 12, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(y, m - 1, 1).unwrap()
    }
}

pub fn next_month(cursor: NaiveDate) -> NaiveDate {
    let (y, m) = (cursor.year(), cursor.month());
    if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1).unwrap()
    }
}

/// Month grid as rendered: leading `None` placeholders for the weekday of
/// day 1 (Sunday-based, the JS `getDay()` convention the column headers
/// follow), then one `Some(date)` per day of the month. Weeks are implicit
/// 7-column rows.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let (_, last) = month_bounds(first);
    let blanks = first.weekday().num_days_from_sunday() as usize;
    let mut cells = Vec::with_capacity(blanks + last.day() as usize);
    for _ in 0..blanks {
        cells.push(None);
    }
    for day in 1..=last.day() {
        cells.push(Some(NaiveDate::from_ymd_opt(year, month, day).unwrap()));
    }
    cells
}

/// Inclusive containment test used for status-range lookups.
pub fn in_span(d: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= d && d <= end
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date_key(s).unwrap()
    }

    #[test]
    fn date_key_matches_cell_label() {
        // Day 15 of March 2024 must always key as 2024-03-15.
        let grid = month_grid(2024, 3);
        let cell = grid
            .iter()
            .flatten()
            .find(|c| c.day() == 15)
            .copied()
            .unwrap();
        assert_eq!(date_key(cell), "2024-03-15");
        // Every cell's key parses back to the same date.
        for cell in grid.iter().flatten() {
            assert_eq!(parse_date_key(&date_key(*cell)), Some(*cell));
        }
    }

    #[test]
    fn grid_shape_march_2024() {
        // 2024-03-01 is a Friday: five leading blanks, then 31 day cells.
        let grid = month_grid(2024, 3);
        let blanks = grid.iter().take_while(|c| c.is_none()).count();
        assert_eq!(
            blanks,
            d("2024-03-01").weekday().num_days_from_sunday() as usize
        );
        assert_eq!(grid.len() - blanks, 31);
        assert_eq!(grid[blanks], Some(d("2024-03-01")));
        assert_eq!(*grid.last().unwrap(), Some(d("2024-03-31")));
    }

    #[test]
    fn grid_shape_sunday_start() {
        // 2024-09-01 is a Sunday: no leading blanks.
        let grid = month_grid(2024, 9);
        assert_eq!(grid[0], Some(d("2024-09-01")));
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn month_bounds_and_navigation() {
        let (first, last) = month_bounds(d("2024-02-10"));
        assert_eq!(first, d("2024-02-01"));
        assert_eq!(last, d("2024-02-29"));
        assert_eq!(prev_month(d("2024-01-01")), d("2023-12-01"));
        assert_eq!(next_month(d("2024-12-15")), d("2025-01-01"));
    }

    #[test]
    fn span_containment_is_inclusive() {
        assert!(in_span(d("2024-03-01"), d("2024-03-01"), d("2024-03-10")));
        assert!(in_span(d("2024-03-10"), d("2024-03-01"), d("2024-03-10")));
        assert!(!in_span(d("2024-03-11"), d("2024-03-01"), d("2024-03-10")));
    }
}
