//! Page renderers
//!
//! Each renderer takes already-loaded data and returns a complete HTML
//! document. Loading stays in `archive`, so the static build and the
//! server share the same output.

use crate::archive::{ArchiveIndex, ReportStatus};
use crate::calendar::{adjacent_months, build_month, CalendarCell, YearMonth};
use crate::config::ResolvedConfig;
use crate::dates::{
    format_thousands, long_date, long_date_with_weekday, month_label, numeric_date, short_date,
    weekday_headers, weekday_short,
};
use crate::html::{
    html_escape, render_compact_card, render_detail_card, render_document, render_empty_state,
    render_pagination, CardBadge, NavItem,
};
use crate::report::{source_emoji, source_name, Report};
use crate::routes::Routes;
use chrono::{Datelike, NaiveDate};

/// Config plus the URL table derived from it
pub struct PageContext<'a> {
    pub config: &'a ResolvedConfig,
    pub routes: Routes,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a ResolvedConfig) -> Self {
        PageContext {
            config,
            routes: Routes::new(&config.base_path, &config.report_file),
        }
    }

    fn document(&self, title: Option<&str>, active: NavItem, body: &str) -> String {
        render_document(self.config, &self.routes, title, active, body)
    }
}

/// Date label for a report, falling back to the raw string when it is not ISO
fn report_date_label(report: &Report, format: fn(NaiveDate) -> String) -> String {
    match report.parsed_date() {
        Some(date) => format(date),
        None => report.date.clone(),
    }
}

/// Placeholder body for a report that could not be shown
fn unavailable_body(ctx: &PageContext<'_>, status: &ReportStatus) -> String {
    let heading = match status {
        ReportStatus::Unreadable(_) => "加载失败，请刷新重试",
        _ => "暂无数据",
    };
    render_empty_state("😅", heading, None, Some((ctx.routes.history().as_str(), "浏览历史")))
}

/// Home page: the top items of the newest report
pub fn render_home(ctx: &PageContext<'_>, status: &ReportStatus) -> String {
    let Some(report) = status.report() else {
        return ctx.document(None, NavItem::Home, &unavailable_body(ctx, status));
    };

    let cards: String = report
        .top(ctx.config.home_count)
        .iter()
        .enumerate()
        .map(|(index, item)| {
            render_compact_card(item, index, CardBadge::Hot, ctx.config.home_summary_length)
        })
        .collect();

    let body = format!(
        r#"<header class="page-header centered">
        <h1>📊 {date} 热点简报</h1>
        <p class="muted">共 {total} 条高质量内容 | {note}</p>
    </header>
    <section class="card-list">
        {cards}
    </section>
    <div class="cta-row">
        <a href="{today}" class="btn-primary">查看详细版</a>
        <a href="{all}" class="btn-secondary">全部热点</a>
        <a href="{history}" class="btn-secondary">浏览历史</a>
    </div>"#,
        date = html_escape(&report_date_label(report, long_date)),
        total = report.total(),
        note = html_escape(&ctx.config.update_note),
        cards = cards,
        today = html_escape(&ctx.routes.today()),
        all = html_escape(&ctx.routes.all(1)),
        history = html_escape(&ctx.routes.history()),
    );

    ctx.document(None, NavItem::Home, &body)
}

/// Today page: detailed cards for the top items of the newest report
pub fn render_today(ctx: &PageContext<'_>, status: &ReportStatus) -> String {
    let Some(report) = status.report() else {
        return ctx.document(Some("详细报告"), NavItem::Today, &unavailable_body(ctx, status));
    };

    let count = ctx.config.today_count;
    let cards: String = report.top(count).iter().map(render_detail_card).collect();

    let body = format!(
        r#"<header class="page-header">
        <div class="back-links"><a href="{home}" class="back-link">← 返回首页</a></div>
        <h1>🔥 {date} 详细报告</h1>
        <p class="muted">共 {total} 条高质量内容 | TOP {count}</p>
    </header>
    <section class="card-list">
        {cards}
    </section>
    <div class="end-note">
        <p class="muted">显示前{count}条，共 {total} 条</p>
        <a href="{all}" class="link-blue">查看全部 →</a>
    </div>"#,
        home = html_escape(&ctx.routes.home()),
        date = html_escape(&report_date_label(report, numeric_date)),
        total = report.total(),
        count = count,
        cards = cards,
        all = html_escape(&ctx.routes.all(1)),
    );

    ctx.document(Some("详细报告"), NavItem::Today, &body)
}

/// Number of pages the all view needs for `items` items (at least one)
pub fn page_count(items: usize, page_size: usize) -> usize {
    items.div_ceil(page_size.max(1)).max(1)
}

/// All page `page` (1-based) of the newest report
///
/// Returns `None` when `page` is out of range. Page 1 always exists, even
/// without data.
pub fn render_all(ctx: &PageContext<'_>, status: &ReportStatus, page: usize) -> Option<String> {
    let Some(report) = status.report() else {
        return (page == 1)
            .then(|| ctx.document(Some("全部热点"), NavItem::All, &unavailable_body(ctx, status)));
    };

    let page_size = ctx.config.page_size;
    let pages = page_count(report.items.len(), page_size);
    if page == 0 || page > pages {
        return None;
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(report.items.len());

    let mut chips = format!(
        r#"<span class="chip active">全部 {}</span>"#,
        report.total()
    );
    for (source, count) in report.source_counts() {
        chips.push_str(&format!(
            r#"<span class="chip">{} {} {}</span>"#,
            source_emoji(&source),
            html_escape(source_name(&source)),
            count
        ));
    }

    let cards: String = report.items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            render_compact_card(
                item,
                start + offset,
                CardBadge::Ranked,
                ctx.config.all_summary_length,
            )
        })
        .collect();

    let end_note = if page == pages {
        format!(
            r#"<div class="end-note">
        <p class="muted">已显示全部 {total} 条热点 🎉</p>
        <a href="{today}" class="link-blue">← 返回 TOP 10</a>
    </div>"#,
            total = report.total(),
            today = html_escape(&ctx.routes.today()),
        )
    } else {
        String::new()
    };

    let body = format!(
        r#"<header class="page-header">
        <div class="back-links"><a href="{today}" class="back-link">← 返回详细版</a></div>
        <h1>📋 {date} 全部热点</h1>
        <p class="muted">共 {total} 条内容 | 按热度排序</p>
    </header>
    <div class="chips">{chips}</div>
    <section class="card-list">
        {cards}
    </section>
    {pagination}
    {end_note}"#,
        today = html_escape(&ctx.routes.today()),
        date = html_escape(&report_date_label(report, long_date)),
        total = report.total(),
        chips = chips,
        cards = cards,
        pagination = render_pagination(&ctx.routes, page, pages),
        end_note = end_note,
    );

    let title = if page > 1 {
        format!("全部热点 第{}页", page)
    } else {
        "全部热点".to_string()
    };
    Some(ctx.document(Some(title.as_str()), NavItem::All, &body))
}

/// History list: stats, month selector and timeline
pub fn render_history(ctx: &PageContext<'_>, index: &ArchiveIndex) -> String {
    if index.is_empty() {
        let body = format!(
            r#"<section class="empty-state">
        <div class="empty-emoji">📚</div>
        <h1>暂无历史归档</h1>
        <p class="muted">数据积累中，明天就会有第一条记录~ 🌱</p>
        <div class="tip-box"><p class="muted">💡 {}，记得明天来看哦！</p></div>
    </section>"#,
            html_escape(&ctx.config.update_note)
        );
        return ctx.document(Some("历史归档"), NavItem::History, &body);
    }

    let months = index.months();
    let month_picker = if months.len() > 1 {
        let links: String = months
            .iter()
            .enumerate()
            .map(|(i, month)| {
                let class = if i == 0 { "month-link current" } else { "month-link" };
                format!(
                    r#"<a href="{}" class="{}">{}</a>"#,
                    html_escape(&ctx.routes.calendar(Some(*month))),
                    class,
                    month_label(*month)
                )
            })
            .collect();
        format!(
            r#"<div class="card-soft month-picker">
        <div class="month-picker-title">📅 选择月份</div>
        <div class="month-list">{}</div>
    </div>"#,
            links
        )
    } else {
        String::new()
    };

    let timeline: String = index
        .entries
        .iter()
        .map(|entry| {
            format!(
                r#"<a href="{href}" class="timeline-entry">
            <div class="day-badge"><span>{day}日</span><span class="weekday">{weekday}</span></div>
            <div class="timeline-body">
                <div class="timeline-date">{date}</div>
                <div class="muted">{count} 条热点 · 点击查看详情</div>
            </div>
            <span class="timeline-arrow">→</span>
        </a>"#,
                href = html_escape(&ctx.routes.detail(entry.date)),
                day = entry.date.day(),
                weekday = weekday_short(entry.date),
                date = long_date(entry.date),
                count = entry.count,
            )
        })
        .collect();

    let body = format!(
        r#"<header class="page-header">
        <div class="back-links"><a href="{home}" class="back-link">← 返回首页</a></div>
        <h1>📚 历史归档</h1>
        <p class="muted">共 {days} 天数据 · 永久保存 · {note}</p>
    </header>
    <div class="stats">
        <div class="card-soft stat"><div class="stat-value">{days}</div><div class="stat-label">累计天数</div></div>
        <div class="card-soft stat"><div class="stat-value">{total}</div><div class="stat-label">总热点数</div></div>
    </div>
    {month_picker}
    <section class="card-soft">
        <div class="section-title">
            <h2>📋 时间线</h2>
            <a href="{calendar}" class="link-blue">📅 日历视图</a>
        </div>
        <div class="timeline">
            {timeline}
        </div>
    </section>
    <div class="end-note"><p class="muted">💡 {note} · 历史数据永久保存</p></div>"#,
        home = html_escape(&ctx.routes.home()),
        days = index.days(),
        note = html_escape(&ctx.config.update_note),
        total = format_thousands(index.total_items() as u64),
        month_picker = month_picker,
        calendar = html_escape(&ctx.routes.calendar(None)),
        timeline = timeline,
    );

    ctx.document(Some("历史归档"), NavItem::History, &body)
}

/// Calendar grid for `month`, or for the newest month when `None`
///
/// Returns `None` when an explicit month has no archived data.
pub fn render_calendar(
    ctx: &PageContext<'_>,
    index: &ArchiveIndex,
    month: Option<YearMonth>,
) -> Option<String> {
    let month = match month {
        Some(m) => {
            index.entries_in(m).next()?;
            m
        }
        None => match index.latest_month() {
            Some(m) => m,
            None => {
                let body = render_empty_state(
                    "📚",
                    "暂无历史归档",
                    Some("数据积累中，明天就会有第一条记录~ 🌱"),
                    Some((ctx.routes.home().as_str(), "返回首页")),
                );
                return Some(ctx.document(Some("日历"), NavItem::Calendar, &body));
            }
        },
    };

    let grid = build_month(month, index);
    let (older, newer) = adjacent_months(month, index);

    let nav_link = |target: Option<YearMonth>, label: &str| match target {
        Some(m) => format!(
            r#"<a href="{}" class="page-link">{}</a>"#,
            html_escape(&ctx.routes.calendar(Some(m))),
            label
        ),
        None => format!(r#"<span class="page-link disabled">{}</span>"#, label),
    };

    let headers: String = weekday_headers()
        .iter()
        .map(|d| format!("<th>{}</th>", d))
        .collect();

    let rows: String = grid
        .weeks
        .iter()
        .map(|week| {
            let cells: String = week
                .iter()
                .map(|cell| match *cell {
                    CalendarCell::Blank => r#"<td class="blank"></td>"#.to_string(),
                    CalendarCell::Day {
                        date,
                        count: Some(count),
                    } => format!(
                        r#"<td class="archived"><a href="{}" title="{} · {} 条热点">{}<span class="count">{} 条</span></a></td>"#,
                        html_escape(&ctx.routes.detail(date)),
                        short_date(date),
                        count,
                        date.day(),
                        count
                    ),
                    CalendarCell::Day { date, count: None } => {
                        format!("<td>{}</td>", date.day())
                    }
                })
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    let label = month_label(month);
    let body = format!(
        r#"<header class="page-header">
        <div class="back-links"><a href="{history}" class="back-link">← 返回历史</a></div>
        <h1>📅 日历</h1>
        <p class="muted">本月 {archived} 天有数据 · {note}</p>
    </header>
    <section class="card-soft">
        <div class="calendar-nav">
            {older}
            <h2>{label}</h2>
            {newer}
        </div>
        <table class="calendar-grid">
            <thead><tr>{headers}</tr></thead>
            <tbody>{rows}</tbody>
        </table>
    </section>"#,
        history = html_escape(&ctx.routes.history()),
        archived = grid.archived_days(),
        note = html_escape(&ctx.config.update_note),
        older = nav_link(older, "← 上个月"),
        label = label,
        newer = nav_link(newer, "下个月 →"),
        headers = headers,
        rows = rows,
    );

    Some(ctx.document(Some(label.as_str()), NavItem::Calendar, &body))
}

/// Detail page for one archived date
///
/// Returns `None` unless the report loads, so a missing or malformed
/// report is a 404 in both the static build and the server.
pub fn render_detail(
    ctx: &PageContext<'_>,
    date: NaiveDate,
    status: &ReportStatus,
) -> Option<String> {
    let ReportStatus::Ready(report) = status else {
        return None;
    };
    let title = long_date(date);

    let cards: String = report.items.iter().map(render_detail_card).collect();
    let body = format!(
        r#"<header class="page-header">
        <div class="back-links">
            <a href="{history}" class="back-link">← 返回历史</a>
            <a href="{home}" class="back-link">首页</a>
        </div>
        <h1>📅 {date}</h1>
        <p class="muted">共 {total} 条高质量内容</p>
    </header>
    <section class="card-list">
        {cards}
    </section>"#,
        history = html_escape(&ctx.routes.history()),
        home = html_escape(&ctx.routes.home()),
        date = long_date_with_weekday(date),
        total = report.total(),
        cards = cards,
    );

    Some(ctx.document(Some(title.as_str()), NavItem::History, &body))
}

/// 404 page
pub fn render_not_found(ctx: &PageContext<'_>) -> String {
    let body = render_empty_state(
        "🔍",
        "页面不存在",
        Some("你访问的页面不存在或已被移除"),
        Some((ctx.routes.home().as_str(), "返回首页")),
    );
    ctx.document(Some("页面不存在"), NavItem::None, &body)
}
