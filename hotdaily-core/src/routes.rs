//! URL table shared by page links, the static build and the server
//!
//! Every page URL is directory-style (trailing `/`) so the same links work
//! for `index.html` files on disk and for served routes.

use crate::calendar::YearMonth;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    base_path: String,
    report_file: String,
}

impl Routes {
    /// `base_path` must start and end with `/`
    pub fn new(base_path: &str, report_file: &str) -> Self {
        Routes {
            base_path: base_path.to_string(),
            report_file: report_file.to_string(),
        }
    }

    fn url(&self, relative: &str) -> String {
        format!("{}{}", self.base_path, relative)
    }

    pub fn home(&self) -> String {
        self.url("")
    }

    pub fn today(&self) -> String {
        self.url("today/")
    }

    /// Page 1 lives at `all/`, later pages at `all/page/<n>/`
    pub fn all(&self, page: usize) -> String {
        if page <= 1 {
            self.url("all/")
        } else {
            self.url(&format!("all/page/{}/", page))
        }
    }

    pub fn history(&self) -> String {
        self.url("history/")
    }

    /// `None` is the calendar of the newest month
    pub fn calendar(&self, month: Option<YearMonth>) -> String {
        match month {
            Some(m) => self.url(&format!("history/calendar/{}/", m)),
            None => self.url("history/calendar/"),
        }
    }

    pub fn detail(&self, date: NaiveDate) -> String {
        self.url(&format!("history/{}/", date.format("%Y-%m-%d")))
    }

    pub fn report_json(&self, date: NaiveDate) -> String {
        self.url(&format!(
            "data/archive/{}/{}",
            date.format("%Y-%m-%d"),
            self.report_file
        ))
    }

    /// File inside `output_dir` that serves `url`
    ///
    /// Directory URLs map to their `index.html`; file URLs map to themselves.
    pub fn output_file(&self, output_dir: &Path, url: &str) -> PathBuf {
        let relative = url
            .strip_prefix(self.base_path.as_str())
            .unwrap_or(url)
            .trim_start_matches('/');

        let mut path = output_dir.to_path_buf();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        if relative.is_empty() || relative.ends_with('/') {
            path.push("index.html");
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
    }

    #[test]
    fn test_root_urls() {
        let routes = Routes::new("/", "full.json");
        assert_eq!(routes.home(), "/");
        assert_eq!(routes.today(), "/today/");
        assert_eq!(routes.all(1), "/all/");
        assert_eq!(routes.all(0), "/all/");
        assert_eq!(routes.all(3), "/all/page/3/");
        assert_eq!(routes.history(), "/history/");
        assert_eq!(routes.calendar(None), "/history/calendar/");
        assert_eq!(
            routes.calendar(YearMonth::new(2026, 2)),
            "/history/calendar/2026-02/"
        );
        assert_eq!(routes.detail(date()), "/history/2026-02-13/");
        assert_eq!(
            routes.report_json(date()),
            "/data/archive/2026-02-13/full.json"
        );
    }

    #[test]
    fn test_base_path_prefix() {
        let routes = Routes::new("/daily/", "full.json");
        assert_eq!(routes.home(), "/daily/");
        assert_eq!(routes.detail(date()), "/daily/history/2026-02-13/");
    }

    #[test]
    fn test_output_file_mapping() {
        let routes = Routes::new("/daily/", "full.json");
        let out = Path::new("/out");
        assert_eq!(
            routes.output_file(out, &routes.home()),
            PathBuf::from("/out/index.html")
        );
        assert_eq!(
            routes.output_file(out, &routes.all(2)),
            PathBuf::from("/out/all/page/2/index.html")
        );
        assert_eq!(
            routes.output_file(out, &routes.report_json(date())),
            PathBuf::from("/out/data/archive/2026-02-13/full.json")
        );
    }
}
