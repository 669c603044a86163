//! Static site build
//!
//! Renders every URL of the route table into `output_dir` and copies the
//! readable report JSON files next to the pages.

use crate::archive::{build_index, latest_report, load_report, report_path, ReportStatus};
use crate::config::ResolvedConfig;
use crate::pages::{
    page_count, render_all, render_calendar, render_detail, render_history, render_home,
    render_not_found, render_today, PageContext,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Counts of files written by a build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub pages: usize,
    pub data_files: usize,
}

/// Write a file atomically (temp file + rename)
///
/// Parent directories are created as needed.
pub fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    use std::fs;
    use std::io::Write;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write to temp file: {}", temp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync temp file: {}", temp_path.display()))?;
    drop(file);

    fs::rename(&temp_path, path)
        .with_context(|| format!("failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

struct SiteWriter<'a> {
    ctx: PageContext<'a>,
    summary: BuildSummary,
}

impl SiteWriter<'_> {
    fn page(&mut self, url: &str, html: &str) -> Result<()> {
        let path = self.ctx.routes.output_file(&self.ctx.config.output_dir, url);
        atomic_write(&path, html)?;
        tracing::debug!("wrote {}", path.display());
        self.summary.pages += 1;
        Ok(())
    }

    fn data_file(&mut self, url: &str, source: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(source)
            .with_context(|| format!("failed to read report: {}", source.display()))?;
        let path = self.ctx.routes.output_file(&self.ctx.config.output_dir, url);
        atomic_write(&path, &contents)?;
        self.summary.data_files += 1;
        Ok(())
    }
}

/// Render the whole site into `config.output_dir`
///
/// Existing files at the same paths are replaced; other files in the
/// output directory are left alone.
pub fn build_site(config: &ResolvedConfig) -> Result<BuildSummary> {
    tracing::info!(
        "building site from {} into {}",
        config.data_dir.display(),
        config.output_dir.display()
    );

    let index = build_index(&config.data_dir, &config.report_file)?;
    let latest = latest_report(&config.data_dir, &config.report_file);

    let mut writer = SiteWriter {
        ctx: PageContext::new(config),
        summary: BuildSummary::default(),
    };
    let routes = writer.ctx.routes.clone();

    writer.page(&routes.home(), &render_home(&writer.ctx, &latest))?;
    writer.page(&routes.today(), &render_today(&writer.ctx, &latest))?;

    let pages = match &latest {
        ReportStatus::Ready(report) => page_count(report.items.len(), config.page_size),
        _ => 1,
    };
    for page in 1..=pages {
        if let Some(html) = render_all(&writer.ctx, &latest, page) {
            writer.page(&routes.all(page), &html)?;
        }
    }

    writer.page(&routes.history(), &render_history(&writer.ctx, &index))?;
    if let Some(html) = render_calendar(&writer.ctx, &index, None) {
        writer.page(&routes.calendar(None), &html)?;
    }
    for month in index.months() {
        if let Some(html) = render_calendar(&writer.ctx, &index, Some(month)) {
            writer.page(&routes.calendar(Some(month)), &html)?;
        }
    }

    for entry in &index.entries {
        let status = load_report(&config.data_dir, entry.date, &config.report_file);
        let Some(html) = render_detail(&writer.ctx, entry.date, &status) else {
            tracing::warn!("skipping detail page for {}", entry.date);
            continue;
        };
        writer.page(&routes.detail(entry.date), &html)?;
        writer.data_file(
            &routes.report_json(entry.date),
            &report_path(&config.data_dir, entry.date, &config.report_file),
        )?;
    }

    let not_found = render_not_found(&writer.ctx);
    atomic_write(&config.output_dir.join("404.html"), &not_found)?;
    writer.summary.pages += 1;

    tracing::info!(
        "built {} pages and {} data files",
        writer.summary.pages,
        writer.summary.data_files
    );
    Ok(writer.summary)
}
