//! zh-CN date labels and number formatting for page text

use crate::calendar::YearMonth;
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// `2026年2月13日`
pub fn long_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// `2026年2月13日星期五`
pub fn long_date_with_weekday(date: NaiveDate) -> String {
    format!("{}星期{}", long_date(date), weekday_short(date))
}

/// `2月13日`
pub fn short_date(date: NaiveDate) -> String {
    format!("{}月{}日", date.month(), date.day())
}

/// `2026/2/13`
pub fn numeric_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

/// `2026年2月`
pub fn month_label(month: YearMonth) -> String {
    format!("{}年{}月", month.year, month.month)
}

/// Single-character weekday, Sunday first
pub fn weekday_short(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

/// Column headers for a Sunday-first week
pub fn weekday_headers() -> &'static [&'static str; 7] {
    &WEEKDAYS
}

/// `12345` → `12,345`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Integral scores print without a fraction
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        let s = format!("{:.2}", score);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
