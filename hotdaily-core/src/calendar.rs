//! Month calendar grid for the archive browser
//!
//! Weeks start on Sunday. A grid always has 4 to 6 rows of 7 cells.

use crate::archive::ArchiveIndex;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Returns None unless `month` is 1..=12 and the year is representable
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| YearMonth { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Construction guarantees a valid first day
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        match self.succ().map(|next| next.first_day()) {
            Some(next_first) => (next_first - self.first_day()).num_days() as u32,
            None => 31,
        }
    }

    /// The previous month
    pub fn pred(&self) -> Option<Self> {
        if self.month == 1 {
            YearMonth::new(self.year - 1, 12)
        } else {
            YearMonth::new(self.year, self.month - 1)
        }
    }

    /// The following month
    pub fn succ(&self) -> Option<Self> {
        if self.month == 12 {
            YearMonth::new(self.year + 1, 1)
        } else {
            YearMonth::new(self.year, self.month + 1)
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = anyhow::Error;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("expected YYYY-MM, got {:?}", s))?;
        if year.len() != 4 || month.len() != 2 {
            anyhow::bail!("expected YYYY-MM, got {:?}", s);
        }
        let year: i32 = year
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid year in {:?}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid month in {:?}", s))?;
        YearMonth::new(year, month).ok_or_else(|| anyhow::anyhow!("month out of range in {:?}", s))
    }
}

/// One cell of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day {
        date: NaiveDate,
        /// Item count when the day has an archived report
        count: Option<usize>,
    },
}

impl CalendarCell {
    pub fn is_archived(&self) -> bool {
        matches!(self, CalendarCell::Day { count: Some(_), .. })
    }
}

/// A month laid out as Sunday-first weeks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub month: YearMonth,
    pub weeks: Vec<[CalendarCell; 7]>,
}

impl CalendarMonth {
    /// Days of this month that have an archived report
    pub fn archived_days(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|week| week.iter())
            .filter(|cell| cell.is_archived())
            .count()
    }
}

/// Lay out `month` as a grid, marking days that appear in the index
pub fn build_month(month: YearMonth, index: &ArchiveIndex) -> CalendarMonth {
    let first = month.first_day();
    let offset = first.weekday().num_days_from_sunday() as usize;
    let days = month.days_in_month() as usize;
    let week_count = (offset + days).div_ceil(7);

    let mut weeks = vec![[CalendarCell::Blank; 7]; week_count];
    for (day_index, date) in first.iter_days().take(days).enumerate() {
        let slot = offset + day_index;
        weeks[slot / 7][slot % 7] = CalendarCell::Day {
            date,
            count: index.entry(date).map(|e| e.count),
        };
    }

    CalendarMonth { month, weeks }
}

/// Nearest older and newer months that have archived data
pub fn adjacent_months(
    month: YearMonth,
    index: &ArchiveIndex,
) -> (Option<YearMonth>, Option<YearMonth>) {
    let months = index.months();
    let older = months.iter().copied().find(|m| *m < month);
    let newer = months.iter().rev().copied().find(|m| *m > month);
    (older, newer)
}
