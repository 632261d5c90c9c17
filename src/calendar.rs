// Monday-first calendar grids on the proleptic Gregorian calendar.

use chrono::{Datelike, Month, NaiveDate, Weekday};

/// A day placed in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    /// Row of the month grid, 0 for the week containing the 1st
    pub week: usize,
    /// Column of the month grid, 0 = Monday
    pub weekday: usize,
}

/// The days of one month arranged into Monday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    /// Lay out a month. An invalid year/month yields an empty grid.
    pub fn new(year: i32, month: u32) -> Self {
        let mut weeks = Vec::new();
        if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
            let offset = first.weekday().num_days_from_monday() as usize;
            let days = days_in_month(year, month);
            let mut week = [None; 7];
            for day in 1..=days {
                let slot = offset + (day as usize - 1);
                week[slot % 7] = Some(day);
                if slot % 7 == 6 {
                    weeks.push(week);
                    week = [None; 7];
                }
            }
            if week.iter().any(Option::is_some) {
                weeks.push(week);
            }
        }
        MonthGrid { year, month, weeks }
    }

    /// Week rows; blank cells are `None`.
    pub fn weeks(&self) -> &[[Option<u32>; 7]] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Every valid day of the month with its grid position, in order.
    pub fn cells(&self) -> impl Iterator<Item = DayCell> + '_ {
        self.weeks.iter().enumerate().flat_map(move |(week, days)| {
            days.iter().enumerate().filter_map(move |(weekday, day)| {
                let day = (*day)?;
                let date = NaiveDate::from_ymd_opt(self.year, self.month, day)?;
                Some(DayCell {
                    date,
                    day,
                    week,
                    weekday,
                })
            })
        })
    }
}

/// Number of days in a month, 0 when the month does not exist.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        // Last representable month
        None => 31,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    (1..=12).map(|m| days_in_month(year, m)).sum()
}

/// `Some(date)` when (year, month, day) is a real calendar date.
pub fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Every date of a year, January 1st first.
pub fn year_days(year: i32) -> impl Iterator<Item = NaiveDate> {
    (1..=12u32).flat_map(move |month| {
        (1..=days_in_month(year, month)).filter_map(move |day| date(year, month, day))
    })
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 1 for January 1st.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Fraction of the year elapsed at the end of `date`.
pub fn year_progress(date: NaiveDate) -> f32 {
    let total = days_in_year(date.year());
    if total == 0 {
        return 0.0;
    }
    day_of_year(date) as f32 / total as f32
}

/// Full English month name, empty for an invalid month.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Upper-case three letter month abbreviation.
pub fn month_abbr(month: u32) -> String {
    month_name(month).chars().take(3).collect::<String>().to_uppercase()
}

/// Single letter weekday labels, Monday first.
pub const WEEKDAY_INITIALS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Three letter weekday labels, Monday first.
pub const WEEKDAY_ABBRS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
