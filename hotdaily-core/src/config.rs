//! Configuration file support for hotdaily
//!
//! Loads site configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.hotdailyrc.json` in project root
//! 3. `hotdaily.config.json` in project root
//! 4. `"hotdaily"` key in `package.json`
//!
//! All fields are optional. CLI flags take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "public/data/archive";
const DEFAULT_REPORT_FILE: &str = "full.json";
const DEFAULT_OUTPUT_DIR: &str = "dist";
const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_TITLE: &str = "AI热点日报";
const DEFAULT_DESCRIPTION: &str = "每日AI领域最新热点追踪";
const DEFAULT_UPDATE_NOTE: &str = "每日7:30更新";
const DEFAULT_FOOTER: &str = "Powered by OpenClaw | 每日7:30自动更新";
const DEFAULT_HOME_COUNT: usize = 3;
const DEFAULT_TODAY_COUNT: usize = 10;
const DEFAULT_PAGE_SIZE: usize = 20;
const DEFAULT_HOME_SUMMARY_LENGTH: usize = 80;
const DEFAULT_ALL_SUMMARY_LENGTH: usize = 100;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Upper bound for `page_size`
const MAX_PAGE_SIZE: usize = 500;

/// Site configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Archive root holding one directory per date (default: public/data/archive)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Report file name inside each date directory (default: full.json)
    #[serde(default)]
    pub report_file: Option<String>,

    /// Static build output directory (default: dist)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// URL prefix the site is hosted under (default: /)
    #[serde(default)]
    pub base_path: Option<String>,

    /// Site title shown in the nav bar and <title>
    #[serde(default)]
    pub title: Option<String>,

    /// Meta description
    #[serde(default)]
    pub description: Option<String>,

    /// Update schedule note shown under page headings
    #[serde(default)]
    pub update_note: Option<String>,

    /// Footer line
    #[serde(default)]
    pub footer: Option<String>,

    /// Cards on the home page (default: 3)
    #[serde(default)]
    pub home_count: Option<usize>,

    /// Cards on the today page (default: 10)
    #[serde(default)]
    pub today_count: Option<usize>,

    /// Items per page on the all page (default: 20)
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Summary length on home cards, in characters (default: 80)
    #[serde(default)]
    pub home_summary_length: Option<usize>,

    /// Summary length on all-page cards, in characters (default: 100)
    #[serde(default)]
    pub all_summary_length: Option<usize>,

    /// Bind host for `serve` (default: 127.0.0.1)
    #[serde(default)]
    pub host: Option<String>,

    /// Bind port for `serve` (default: 3000)
    #[serde(default)]
    pub port: Option<u16>,
}

/// Configuration with every default applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub report_file: String,
    pub output_dir: PathBuf,
    pub base_path: String,
    pub title: String,
    pub description: String,
    pub update_note: String,
    pub footer: String,
    pub home_count: usize,
    pub today_count: usize,
    pub page_size: usize,
    pub home_summary_length: usize,
    pub all_summary_length: usize,
    pub host: String,
    pub port: u16,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("home_count", self.home_count),
            ("today_count", self.today_count),
            ("page_size", self.page_size),
            ("home_summary_length", self.home_summary_length),
            ("all_summary_length", self.all_summary_length),
        ] {
            if value == Some(0) {
                anyhow::bail!("{} must be positive (got 0)", name);
            }
        }

        if let Some(size) = self.page_size {
            if size > MAX_PAGE_SIZE {
                anyhow::bail!("page_size must be at most {} (got {})", MAX_PAGE_SIZE, size);
            }
        }

        if let Some(ref base) = self.base_path {
            if !base.starts_with('/') || !base.ends_with('/') {
                anyhow::bail!("base_path must start and end with '/' (got {:?})", base);
            }
        }

        if let Some(ref file) = self.report_file {
            if file.trim().is_empty() {
                anyhow::bail!("report_file must not be empty");
            }
            if file.contains('/') || file.contains('\\') {
                anyhow::bail!("report_file must be a plain file name (got {:?})", file);
            }
        }

        if self.port == Some(0) {
            anyhow::bail!("port must be non-zero");
        }

        Ok(())
    }

    /// Resolve config into its final form
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        Ok(ResolvedConfig {
            data_dir: self
                .data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            report_file: self
                .report_file
                .clone()
                .unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string()),
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            base_path: self
                .base_path
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
            title: self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            update_note: self
                .update_note
                .clone()
                .unwrap_or_else(|| DEFAULT_UPDATE_NOTE.to_string()),
            footer: self
                .footer
                .clone()
                .unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
            home_count: self.home_count.unwrap_or(DEFAULT_HOME_COUNT),
            today_count: self.today_count.unwrap_or(DEFAULT_TODAY_COUNT),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            home_summary_length: self
                .home_summary_length
                .unwrap_or(DEFAULT_HOME_SUMMARY_LENGTH),
            all_summary_length: self
                .all_summary_length
                .unwrap_or(DEFAULT_ALL_SUMMARY_LENGTH),
            host: self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        SiteConfig::default().resolve()
    }

    /// Resolve relative data/output paths against the project root
    pub fn anchor_paths(&mut self, project_root: &Path) {
        if self.data_dir.is_relative() {
            self.data_dir = project_root.join(&self.data_dir);
        }
        if self.output_dir.is_relative() {
            self.output_dir = project_root.join(&self.output_dir);
        }
    }
}

/// Discover and load a config file from the project root
///
/// Search order:
/// 1. `.hotdailyrc.json`
/// 2. `hotdaily.config.json`
/// 3. `"hotdaily"` key in `package.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(project_root: &Path) -> Result<Option<(SiteConfig, PathBuf)>> {
    let rc_path = project_root.join(".hotdailyrc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    let config_path = project_root.join("hotdaily.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    let pkg_path = project_root.join("package.json");
    if pkg_path.exists() {
        if let Some(config) = load_from_package_json(&pkg_path)? {
            return Ok(Some((config, pkg_path)));
        }
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: SiteConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load hotdaily config from the "hotdaily" key in package.json
fn load_from_package_json(path: &Path) -> Result<Option<SiteConfig>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let pkg: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    match pkg.get("hotdaily") {
        Some(value) => {
            let config: SiteConfig = serde_json::from_value(value.clone())
                .with_context(|| format!("invalid hotdaily config in {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("invalid hotdaily config in {}", path.display()))?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the project root.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(project_root)? {
            Some((config, path)) => (config, Some(path)),
            None => (SiteConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        config.validate().expect("default config should be valid");
        let resolved = config.resolve().expect("default config should resolve");
        assert_eq!(resolved.data_dir, PathBuf::from("public/data/archive"));
        assert_eq!(resolved.report_file, "full.json");
        assert_eq!(resolved.base_path, "/");
        assert_eq!(resolved.home_count, 3);
        assert_eq!(resolved.today_count, 10);
        assert_eq!(resolved.page_size, 20);
        assert_eq!(resolved.home_summary_length, 80);
        assert_eq!(resolved.all_summary_length, 100);
        assert_eq!(resolved.port, 3000);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "data_dir": "/srv/archive",
            "report_file": "report.json",
            "output_dir": "site",
            "base_path": "/daily/",
            "title": "Daily Hot",
            "description": "desc",
            "update_note": "updated hourly",
            "footer": "footer text",
            "home_count": 5,
            "today_count": 15,
            "page_size": 50,
            "home_summary_length": 60,
            "all_summary_length": 120,
            "host": "0.0.0.0",
            "port": 8080
        }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.data_dir, PathBuf::from("/srv/archive"));
        assert_eq!(resolved.report_file, "report.json");
        assert_eq!(resolved.base_path, "/daily/");
        assert_eq!(resolved.title, "Daily Hot");
        assert_eq!(resolved.home_count, 5);
        assert_eq!(resolved.page_size, 50);
        assert_eq!(resolved.host, "0.0.0.0");
        assert_eq!(resolved.port, 8080);
    }

    #[test]
    fn test_reject_unknown_fields() {
        let result: Result<SiteConfig, _> = serde_json::from_str(r#"{"unknown_field": true}"#);
        assert!(result.is_err(), "unknown fields should be rejected");
    }

    #[test]
    fn test_reject_zero_counts() {
        for field in [
            "home_count",
            "today_count",
            "page_size",
            "home_summary_length",
            "all_summary_length",
        ] {
            let config: SiteConfig =
                serde_json::from_str(&format!(r#"{{"{}": 0}}"#, field)).unwrap();
            assert!(config.validate().is_err(), "{} = 0 should be rejected", field);
        }
    }

    #[test]
    fn test_reject_oversized_page() {
        let config: SiteConfig = serde_json::from_str(r#"{"page_size": 501}"#).unwrap();
        assert!(config.validate().is_err());
        let config: SiteConfig = serde_json::from_str(r#"{"page_size": 500}"#).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reject_bad_base_path() {
        for base in ["daily/", "/daily", ""] {
            let config = SiteConfig {
                base_path: Some(base.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{:?} should be rejected", base);
        }
    }

    #[test]
    fn test_reject_bad_report_file() {
        for file in ["", "  ", "nested/full.json", "..\\full.json"] {
            let config = SiteConfig {
                report_file: Some(file.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{:?} should be rejected", file);
        }
    }

    #[test]
    fn test_reject_zero_port() {
        let config: SiteConfig = serde_json::from_str(r#"{"port": 0}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_discover_hotdailyrc() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".hotdailyrc.json");
        fs::write(&config_path, r#"{"page_size": 30}"#).unwrap();

        let (config, path) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.page_size, Some(30));
        assert_eq!(path, config_path);
    }

    #[test]
    fn test_discover_hotdaily_config_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hotdaily.config.json"), r#"{"today_count": 5}"#).unwrap();

        let (config, _) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.today_count, Some(5));
    }

    #[test]
    fn test_discover_package_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
            "name": "ai-hotspot-site",
            "version": "1.0.0",
            "hotdaily": {
                "data_dir": "public/data/archive",
                "page_size": 25
            }
        }"#,
        )
        .unwrap();

        let (config, _) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.page_size, Some(25));
    }

    #[test]
    fn test_discover_package_json_without_hotdaily_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "site", "version": "1.0.0"}"#,
        )
        .unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hotdailyrc.json"), r#"{"page_size": 10}"#).unwrap();
        fs::write(
            dir.path().join("hotdaily.config.json"),
            r#"{"page_size": 40}"#,
        )
        .unwrap();

        let (config, _) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.page_size,
            Some(10),
            ".hotdailyrc.json should take priority"
        );
    }

    #[test]
    fn test_invalid_config_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hotdailyrc.json"), r#"{"page_size": 0}"#).unwrap();
        assert!(discover_config(dir.path()).is_err());
    }

    #[test]
    fn test_load_and_resolve_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = load_and_resolve(dir.path(), None).unwrap();
        assert!(resolved.config_path.is_none());
        assert_eq!(resolved.page_size, 20);
    }

    #[test]
    fn test_load_and_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, r#"{"title": "Custom"}"#).unwrap();

        let resolved = load_and_resolve(dir.path(), Some(config_path.as_path())).unwrap();
        assert_eq!(resolved.title, "Custom");
        assert_eq!(resolved.config_path, Some(config_path));
    }

    #[test]
    fn test_anchor_paths() {
        let mut resolved = ResolvedConfig::defaults().unwrap();
        resolved.anchor_paths(Path::new("/project"));
        assert_eq!(resolved.data_dir, PathBuf::from("/project/public/data/archive"));
        assert_eq!(resolved.output_dir, PathBuf::from("/project/dist"));

        let mut absolute = SiteConfig {
            data_dir: Some(PathBuf::from("/srv/archive")),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        absolute.anchor_paths(Path::new("/project"));
        assert_eq!(absolute.data_dir, PathBuf::from("/srv/archive"));
    }
}
