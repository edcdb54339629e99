//! Effective-entry-date scheduling
//!
//! Computes the date a payment should settle, advancing across weekends and
//! bank holidays by a caller-specified delay in business days. The holiday
//! source is injected as a predicate; this module never ships calendar data.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// Bank-holiday predicate injected by the host system.
pub trait HolidayCalendar {
    /// Returns true when `date` is a bank holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Calendar with no holidays; every weekday is a banking day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Calendar backed by an explicit set of holiday dates.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    /// Create an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for HolidaySet {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// True when `date` is neither a weekend day nor a holiday.
pub fn is_banking_day(date: NaiveDate, calendar: &dyn HolidayCalendar) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !calendar.is_holiday(date)
}

/// First banking day on or after `date`.
pub fn next_banking_day(mut date: NaiveDate, calendar: &dyn HolidayCalendar) -> NaiveDate {
    while !is_banking_day(date, calendar) {
        date += Duration::days(1);
    }
    date
}

/// Settlement date for a payment initiated on `today` with the given delay.
///
/// Delay 0 means the next available banking day (today, if today qualifies).
/// A positive delay advances that anchor one banking day at a time. A
/// delay-1 payment anchored on a Friday (or initiated inside a weekend) is
/// forced out to two banking days: next-day settlement going into a weekend
/// must clear at least one full business day later.
pub fn effective_entry_date(
    today: NaiveDate,
    delay: u32,
    calendar: &dyn HolidayCalendar,
) -> NaiveDate {
    let mut date = next_banking_day(today, calendar);
    let mut delay = delay;
    if delay == 1 && matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun) {
        delay = 2;
    }
    for _ in 0..delay {
        date += Duration::days(1);
        date = next_banking_day(date, calendar);
    }
    date
}

/// Format a date in the file format's 6-digit YYMMDD form.
pub fn format_yymmdd(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_delay_on_a_weekday_is_same_day() {
        // 2016-06-20 was a Monday.
        let monday = date(2016, 6, 20);
        assert_eq!(effective_entry_date(monday, 0, &NoHolidays), monday);
    }

    #[test]
    fn test_zero_delay_on_a_weekend_rolls_to_monday() {
        // 2016-10-29 was a Saturday.
        let saturday = date(2016, 10, 29);
        assert_eq!(
            effective_entry_date(saturday, 0, &NoHolidays),
            date(2016, 10, 31)
        );
    }

    #[test]
    fn test_one_day_delay_midweek() {
        let monday = date(2016, 6, 20);
        assert_eq!(
            effective_entry_date(monday, 1, &NoHolidays),
            date(2016, 6, 21)
        );
    }

    #[test]
    fn test_five_day_delay_skips_weekend() {
        let monday = date(2016, 6, 20);
        assert_eq!(
            effective_entry_date(monday, 5, &NoHolidays),
            date(2016, 6, 27)
        );
    }

    #[test]
    fn test_nine_day_delay_skips_two_weekends() {
        let monday = date(2016, 6, 20);
        assert_eq!(
            effective_entry_date(monday, 9, &NoHolidays),
            date(2016, 7, 1)
        );
    }

    #[test]
    fn test_one_day_delay_from_friday_lands_no_earlier_than_tuesday() {
        // 2016-06-24 was a Friday; the minimum-two-day rule applies.
        assert_eq!(
            effective_entry_date(date(2016, 6, 24), 1, &NoHolidays),
            date(2016, 6, 28)
        );
    }

    #[test]
    fn test_one_day_delay_from_saturday() {
        // Anchor rolls to Monday 10-31, then two banking days out.
        assert_eq!(
            effective_entry_date(date(2016, 10, 29), 1, &NoHolidays),
            date(2016, 11, 1)
        );
    }

    #[test]
    fn test_holidays_are_skipped() {
        let holidays: HolidaySet = [date(2016, 6, 21)].into_iter().collect();
        assert_eq!(
            effective_entry_date(date(2016, 6, 20), 1, &holidays),
            date(2016, 6, 22)
        );
    }

    #[test]
    fn test_anchor_on_holiday_rolls_forward() {
        let holidays: HolidaySet = [date(2016, 6, 20)].into_iter().collect();
        assert_eq!(
            effective_entry_date(date(2016, 6, 20), 0, &holidays),
            date(2016, 6, 21)
        );
    }

    #[test]
    fn test_format_yymmdd() {
        assert_eq!(format_yymmdd(date(2016, 6, 21)), "160621");
        assert_eq!(format_yymmdd(date(2016, 11, 1)), "161101");
    }
}
