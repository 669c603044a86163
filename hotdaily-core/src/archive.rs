//! Archive directory scanning and index building
//!
//! Layout: `<data_dir>/<YYYY-MM-DD>/<report_file>`, one directory per date.
//!
//! Reading is best effort: a missing or malformed report degrades to a
//! status the pages can render, never to a hard failure.

use crate::calendar::YearMonth;
use crate::report::Report;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of loading one report file
#[derive(Debug, Clone, PartialEq)]
pub enum ReportStatus {
    Ready(Report),
    Missing,
    Unreadable(String),
}

impl ReportStatus {
    pub fn report(&self) -> Option<&Report> {
        match self {
            ReportStatus::Ready(report) => Some(report),
            _ => None,
        }
    }
}

/// One dated archive directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    pub date: NaiveDate,
    pub count: usize,
}

impl ArchiveEntry {
    pub fn month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }
}

/// All archive entries, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveIndex {
    pub entries: Vec<ArchiveEntry>,
}

impl ArchiveIndex {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of archived days
    pub fn days(&self) -> usize {
        self.entries.len()
    }

    /// Sum of item counts across all days
    pub fn total_items(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn entry(&self, date: NaiveDate) -> Option<&ArchiveEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Distinct months with data, newest first
    pub fn months(&self) -> Vec<YearMonth> {
        let mut months: Vec<YearMonth> = self.entries.iter().map(ArchiveEntry::month).collect();
        months.sort_by(|a, b| b.cmp(a));
        months.dedup();
        months
    }

    pub fn latest_month(&self) -> Option<YearMonth> {
        self.entries.first().map(ArchiveEntry::month)
    }

    pub fn entries_in(&self, month: YearMonth) -> impl Iterator<Item = &ArchiveEntry> {
        self.entries.iter().filter(move |e| e.month() == month)
    }
}

/// Path of the report file for a given date
pub fn report_path(data_dir: &Path, date: NaiveDate, report_file: &str) -> PathBuf {
    data_dir
        .join(date.format("%Y-%m-%d").to_string())
        .join(report_file)
}

/// List dated subdirectories, newest first
///
/// A missing data directory yields an empty list. Entries that are not
/// directories or whose names are not ISO dates are skipped.
pub fn archive_dates(data_dir: &Path) -> Result<Vec<NaiveDate>> {
    if !data_dir.exists() {
        return Ok(Vec::new());
    }

    let mut dates = Vec::new();
    for entry_result in std::fs::read_dir(data_dir)
        .with_context(|| format!("failed to read archive directory: {}", data_dir.display()))?
    {
        let entry = entry_result?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match NaiveDate::parse_from_str(name, "%Y-%m-%d") {
            Ok(date) => dates.push(date),
            Err(_) => tracing::debug!("skipping non-date archive entry: {}", path.display()),
        }
    }

    dates.sort_by(|a, b| b.cmp(a));
    Ok(dates)
}

/// Load the report for one date
pub fn load_report(data_dir: &Path, date: NaiveDate, report_file: &str) -> ReportStatus {
    load_report_file(&report_path(data_dir, date, report_file))
}

fn load_report_file(path: &Path) -> ReportStatus {
    if !path.is_file() {
        return ReportStatus::Missing;
    }

    let parsed = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report: {}", path.display()))
        .and_then(|json| Report::from_json(&json));

    match parsed {
        Ok(report) => ReportStatus::Ready(report),
        Err(e) => {
            tracing::warn!("unreadable report {}: {:#}", path.display(), e);
            ReportStatus::Unreadable(format!("{:#}", e))
        }
    }
}

/// Load the report of the newest dated directory
pub fn latest_report(data_dir: &Path, report_file: &str) -> ReportStatus {
    match archive_dates(data_dir) {
        Ok(dates) => match dates.first() {
            Some(&latest) => load_report(data_dir, latest, report_file),
            None => ReportStatus::Missing,
        },
        Err(e) => {
            tracing::warn!("failed to scan archive: {:#}", e);
            ReportStatus::Unreadable(format!("{:#}", e))
        }
    }
}

/// Build the archive index
///
/// Each entry's count is the report's total, or 0 when the report is
/// missing or malformed.
pub fn build_index(data_dir: &Path, report_file: &str) -> Result<ArchiveIndex> {
    let entries = archive_dates(data_dir)?
        .into_iter()
        .map(|date| {
            let count = load_report(data_dir, date, report_file)
                .report()
                .map(Report::total)
                .unwrap_or(0);
            ArchiveEntry { date, count }
        })
        .collect();

    Ok(ArchiveIndex { entries })
}
