//! HTML document shell and shared page components
//!
//! Every page is a self-contained document with embedded CSS and
//! JavaScript, so a built site works offline and from any static host.
//! All interpolated text goes through `html_escape`.

use crate::config::ResolvedConfig;
use crate::dates::{format_score, format_thousands};
use crate::report::{source_emoji, source_name, Item};
use crate::routes::Routes;
use crate::translate::{smart_summary, translate_text};

/// Nav bar entry highlighted for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Today,
    All,
    History,
    Calendar,
    None,
}

/// Wrap a page body in the site shell
pub fn render_document(
    config: &ResolvedConfig,
    routes: &Routes,
    page_title: Option<&str>,
    active: NavItem,
    body: &str,
) -> String {
    let title = match page_title {
        Some(t) => format!("{} - {}", t, config.title),
        None => config.title.clone(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{description}">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    {nav}
    <main class="container">
        {body}
    </main>
    {footer}
    <script>{js}</script>
</body>
</html>"#,
        description = html_escape(&config.description),
        title = html_escape(&title),
        css = inline_css(),
        nav = render_nav(config, routes, active),
        body = body,
        footer = render_footer(config),
        js = inline_javascript(),
    )
}

fn render_nav(config: &ResolvedConfig, routes: &Routes, active: NavItem) -> String {
    let links = [
        (NavItem::Home, routes.home(), "今日"),
        (NavItem::Today, routes.today(), "详细"),
        (NavItem::All, routes.all(1), "全部"),
        (NavItem::History, routes.history(), "历史"),
        (NavItem::Calendar, routes.calendar(None), "日历"),
    ];
    let links: String = links
        .iter()
        .map(|(item, href, label)| {
            let class = if *item == active {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                r#"<a href="{href}" class="{class}">{label}</a>"#,
                href = html_escape(href),
                class = class,
                label = label,
            )
        })
        .collect();

    format!(
        r#"<nav class="topnav">
    <div class="topnav-inner">
        <a href="{home}" class="brand">🔥 {title}</a>
        <div class="nav-links">{links}</div>
    </div>
</nav>"#,
        home = html_escape(&routes.home()),
        title = html_escape(&config.title),
        links = links,
    )
}

fn render_footer(config: &ResolvedConfig) -> String {
    format!(
        r#"<footer class="site-footer">
    <p>{}</p>
</footer>"#,
        html_escape(&config.footer)
    )
}

/// Badge shown on compact cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBadge {
    /// Home page: `HOT` on the first three cards
    Hot,
    /// All page: `TOP<n>` for the first ten, `精华` for the next ten
    Ranked,
}

fn badge_html(badge: CardBadge, index: usize) -> String {
    match badge {
        CardBadge::Hot if index < 3 => r#"<span class="badge-hot">HOT</span>"#.to_string(),
        CardBadge::Ranked if index < 10 => {
            format!(r#"<span class="badge-hot">TOP{}</span>"#, index + 1)
        }
        CardBadge::Ranked if index < 20 => r#"<span class="badge-gem">精华</span>"#.to_string(),
        _ => String::new(),
    }
}

/// Summary paragraph with an expand toggle when the translated text is long
fn render_summary_text(item: &Item, max_len: usize) -> String {
    let display = item.display_text();
    let translated = translate_text(display);
    let short = smart_summary(display, max_len);

    if translated.chars().count() > max_len {
        format!(
            r#"<div class="card-text" data-expandable>
            <p class="text-short">{short}</p>
            <p class="text-full" hidden>{full}</p>
            <button type="button" class="btn-expand" data-expand>展开全文 ↓</button>
        </div>"#,
            short = html_escape(&short),
            full = html_escape(&translated),
        )
    } else {
        format!(
            r#"<div class="card-text"><p class="text-short">{}</p></div>"#,
            html_escape(&short)
        )
    }
}

/// Card used on the home and all pages
///
/// `index` is the zero-based position in the whole report.
pub fn render_compact_card(item: &Item, index: usize, badge: CardBadge, max_len: usize) -> String {
    let stars = match item.stars {
        Some(s) if s > 0 => format!("<span>⭐ {}</span>", format_thousands(s)),
        _ => String::new(),
    };
    let meta_extra = match badge {
        CardBadge::Hot => format!(
            r#"<button type="button" class="btn-share" data-share data-title="{title}" data-url="{url}">📤 分享</button>"#,
            title = html_escape(&item.title),
            url = html_escape(&item.url),
        ),
        CardBadge::Ranked => format!(
            r#"<span class="source-name">{}</span>"#,
            html_escape(source_name(&item.source))
        ),
    };
    let emoji_class = match badge {
        CardBadge::Hot => "emoji-lg",
        CardBadge::Ranked => "emoji-md",
    };

    format!(
        r#"<article class="card-soft card-compact">
        <div class="card-head">
            <div class="card-title-row">
                <span class="{emoji_class}">{emoji}</span>
                <div class="card-title-text">
                    <div class="card-rank"><span class="rank">#{position}</span>{badge}</div>
                    <h2 class="card-title">{title}</h2>
                </div>
            </div>
            <span class="badge-score">{score}分</span>
        </div>
        {summary}
        <div class="card-foot">
            <div class="card-meta">{stars}{meta_extra}</div>
            <a href="{url}" target="_blank" rel="noopener noreferrer" class="link-blue">查看原文 →</a>
        </div>
    </article>"#,
        emoji_class = emoji_class,
        emoji = source_emoji(&item.source),
        position = index + 1,
        badge = badge_html(badge, index),
        title = html_escape(&item.title),
        score = format_score(item.relevance_score),
        summary = render_summary_text(item, max_len),
        stars = stars,
        meta_extra = meta_extra,
        url = html_escape(&item.url),
    )
}

/// Full-detail card used on the today and history detail pages
pub fn render_detail_card(item: &Item) -> String {
    let topic = item
        .suggested_topic()
        .map(|t| {
            format!(
                r#"<p class="topic"><span class="label">📝 选题建议：</span>{}</p>"#,
                html_escape(t)
            )
        })
        .unwrap_or_default();

    let mut metrics = String::new();
    if let Some(stars) = item.stars.filter(|s| *s > 0) {
        metrics.push_str(&format!("<span>⭐ {} stars</span>", format_thousands(stars)));
    }
    if let Some(score) = item.score.filter(|s| *s != 0) {
        metrics.push_str(&format!("<span>👍 {}</span>", score));
    }
    if let Some(comments) = item.comments {
        metrics.push_str(&format!("<span>💬 {}</span>", comments));
    }

    let tags = if item.tags.is_empty() {
        String::new()
    } else {
        let chips: String = item
            .tags
            .iter()
            .map(|t| format!(r#"<span class="tag">#{}</span>"#, html_escape(t)))
            .collect();
        format!(r#"<div class="tags">{}</div>"#, chips)
    };

    format!(
        r#"<article class="card-detail">
        <div class="card-head">
            <div class="card-title-row">
                <span class="emoji-xl">{emoji}</span>
                <div class="card-title-text">
                    <span class="rank">#{rank}</span>
                    <h2 class="card-title-lg">{title}</h2>
                </div>
            </div>
            <span class="badge-score-red">{score}分</span>
        </div>
        <div class="card-body">
            <p class="summary"><span class="label">📋 摘要：</span>{summary}</p>
            {topic}
        </div>
        <div class="card-foot">
            <div class="card-meta">{metrics}<span class="divider">|</span><span>来源: {source}</span></div>
            <a href="{url}" target="_blank" rel="noopener noreferrer" class="btn-primary">查看原文 →</a>
        </div>
        {tags}
    </article>"#,
        emoji = source_emoji(&item.source),
        rank = item.rank,
        title = html_escape(&item.title),
        score = format_score(item.relevance_score),
        summary = html_escape(item.display_text()),
        topic = topic,
        metrics = metrics,
        source = html_escape(&item.source),
        url = html_escape(&item.url),
        tags = tags,
    )
}

/// Centered placeholder for empty or failed views
pub fn render_empty_state(
    emoji: &str,
    heading: &str,
    message: Option<&str>,
    action: Option<(&str, &str)>,
) -> String {
    let message = message
        .map(|m| format!(r#"<p class="muted">{}</p>"#, html_escape(m)))
        .unwrap_or_default();
    let action = action
        .map(|(href, label)| {
            format!(
                r#"<a href="{}" class="btn-primary">{}</a>"#,
                html_escape(href),
                html_escape(label)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="empty-state">
        <div class="empty-emoji">{emoji}</div>
        <h1>{heading}</h1>
        {message}
        {action}
    </section>"#,
        emoji = emoji,
        heading = html_escape(heading),
        message = message,
        action = action,
    )
}

/// Previous/next navigation between pages of the all view
pub fn render_pagination(routes: &Routes, page: usize, pages: usize) -> String {
    if pages <= 1 {
        return String::new();
    }

    let prev = if page > 1 {
        format!(
            r#"<a href="{}" class="page-link">← 上一页</a>"#,
            html_escape(&routes.all(page - 1))
        )
    } else {
        r#"<span class="page-link disabled">← 上一页</span>"#.to_string()
    };
    let next = if page < pages {
        format!(
            r#"<a href="{}" class="page-link">下一页 →</a>"#,
            html_escape(&routes.all(page + 1))
        )
    } else {
        r#"<span class="page-link disabled">下一页 →</span>"#.to_string()
    };
    let numbers: String = (1..=pages)
        .map(|n| {
            if n == page {
                format!(r#"<span class="page-number current">{}</span>"#, n)
            } else {
                format!(
                    r#"<a href="{}" class="page-number">{}</a>"#,
                    html_escape(&routes.all(n)),
                    n
                )
            }
        })
        .collect();

    format!(
        r#"<nav class="pagination">{prev}<div class="page-numbers">{numbers}</div>{next}</nav>"#,
        prev = prev,
        numbers = numbers,
        next = next,
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'PingFang SC', 'Microsoft YaHei', sans-serif;
    line-height: 1.6;
    color: #1f2937;
    background: #f9fafb;
    min-height: 100vh;
}

a {
    color: inherit;
}

.container {
    max-width: 72rem;
    margin: 0 auto;
    padding: 1.5rem;
}

/* Nav */
.topnav {
    background: #111827;
    color: #ffffff;
    padding: 1rem;
}

.topnav-inner {
    max-width: 72rem;
    margin: 0 auto;
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.brand {
    font-size: 1.25rem;
    font-weight: 700;
    text-decoration: none;
}

.nav-links {
    display: flex;
    gap: 1rem;
}

.nav-link {
    text-decoration: none;
    color: #d1d5db;
}

.nav-link:hover,
.nav-link.active {
    color: #60a5fa;
}

.site-footer {
    background: #f3f4f6;
    padding: 1.5rem;
    margin-top: 3rem;
    text-align: center;
    color: #4b5563;
}

/* Headings */
.page-header {
    margin-bottom: 1.5rem;
}

.page-header.centered {
    text-align: center;
    margin-bottom: 2rem;
}

.page-header h1 {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 0.5rem;
}

.page-header.centered h1 {
    font-size: 1.875rem;
}

.muted {
    color: #6b7280;
    font-size: 0.875rem;
}

.back-links {
    display: flex;
    gap: 1rem;
    margin-bottom: 0.75rem;
    font-size: 0.875rem;
}

.back-link {
    color: #4f46e5;
    text-decoration: none;
}

.back-link:hover {
    text-decoration: underline;
}

/* Cards */
.card-list {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
}

.card-soft {
    background: #ffffff;
    border-radius: 16px;
    box-shadow: 0 4px 20px rgba(15, 23, 42, 0.06);
    padding: 1.25rem;
}

.card-detail {
    background: #ffffff;
    border-radius: 8px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
    padding: 1.5rem;
}

.card-head {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 0.75rem;
    margin-bottom: 0.75rem;
}

.card-title-row {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    flex: 1;
    min-width: 0;
}

.card-title-text {
    flex: 1;
    min-width: 0;
}

.card-rank {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.25rem;
    flex-wrap: wrap;
}

.rank {
    color: #6b7280;
    font-size: 0.75rem;
}

.card-title {
    font-size: 1.05rem;
    font-weight: 600;
    line-height: 1.4;
    word-break: break-word;
}

.card-title-lg {
    font-size: 1.25rem;
    font-weight: 700;
    word-break: break-word;
}

.emoji-md { font-size: 1.25rem; flex-shrink: 0; }
.emoji-lg { font-size: 1.75rem; flex-shrink: 0; }
.emoji-xl { font-size: 1.875rem; flex-shrink: 0; }

.card-text {
    margin-bottom: 1rem;
}

.card-text p {
    color: #4b5563;
    font-size: 0.875rem;
    line-height: 1.6;
}

.btn-expand {
    background: none;
    border: none;
    color: #4f46e5;
    font-size: 0.75rem;
    font-weight: 500;
    cursor: pointer;
    padding: 4px 0;
    margin-top: 0.5rem;
}

.card-body {
    background: #f9fafb;
    padding: 1rem;
    border-radius: 8px;
    margin-bottom: 1rem;
}

.card-body .summary {
    color: #374151;
    margin-bottom: 0.5rem;
}

.card-body .topic {
    color: #4b5563;
}

.label {
    font-weight: 600;
}

.card-foot {
    display: flex;
    align-items: center;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.card-meta {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: #6b7280;
    font-size: 0.875rem;
    flex-wrap: wrap;
}

.divider {
    color: #9ca3af;
}

.source-name {
    color: #9ca3af;
    font-size: 0.75rem;
}

.tags {
    display: flex;
    gap: 0.5rem;
    margin-top: 1rem;
    flex-wrap: wrap;
}

.tag {
    background: #f3f4f6;
    color: #4b5563;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
    font-size: 0.875rem;
}

/* Badges */
.badge-hot {
    background: linear-gradient(135deg, #f97316 0%, #ef4444 100%);
    color: #ffffff;
    padding: 2px 8px;
    border-radius: 12px;
    font-size: 0.625rem;
    font-weight: 700;
}

.badge-gem {
    background: #fef3c7;
    color: #92400e;
    padding: 2px 8px;
    border-radius: 12px;
    font-size: 0.625rem;
    font-weight: 600;
}

.badge-score {
    background: #eef2ff;
    color: #4f46e5;
    padding: 4px 12px;
    border-radius: 20px;
    font-size: 0.875rem;
    font-weight: 600;
    white-space: nowrap;
}

.badge-score-red {
    background: #fee2e2;
    color: #991b1b;
    padding: 4px 12px;
    border-radius: 9999px;
    white-space: nowrap;
}

/* Buttons & links */
.btn-primary,
.btn-secondary {
    display: inline-block;
    padding: 0.625rem 1.25rem;
    border-radius: 12px;
    font-weight: 500;
    text-decoration: none;
    font-size: 0.875rem;
}

.btn-primary {
    background: #4f46e5;
    color: #ffffff;
}

.btn-primary:hover {
    background: #4338ca;
}

.btn-secondary {
    background: #ffffff;
    color: #4f46e5;
    border: 1px solid #c7d2fe;
}

.btn-share {
    background: #f3f4f6;
    border: none;
    border-radius: 8px;
    padding: 4px 10px;
    font-size: 0.75rem;
    color: #4b5563;
    cursor: pointer;
}

.link-blue {
    color: #4f46e5;
    font-weight: 500;
    font-size: 0.875rem;
    text-decoration: none;
}

.cta-row {
    display: flex;
    justify-content: center;
    gap: 1rem;
    flex-wrap: wrap;
    margin-top: 3rem;
}

/* Source chips */
.chips {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1.25rem;
    flex-wrap: wrap;
}

.chip {
    background: #f3f4f6;
    color: #4b5563;
    padding: 6px 12px;
    border-radius: 20px;
    font-size: 0.75rem;
    white-space: nowrap;
}

.chip.active {
    background: #e0e7ff;
    color: #4f46e5;
    font-weight: 600;
}

/* Pagination */
.pagination {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    margin-top: 2rem;
    flex-wrap: wrap;
}

.page-numbers {
    display: flex;
    gap: 0.375rem;
}

.page-link,
.page-number {
    color: #4f46e5;
    text-decoration: none;
    font-size: 0.875rem;
    padding: 4px 10px;
    border-radius: 8px;
}

.page-number.current {
    background: #4f46e5;
    color: #ffffff;
}

.page-link.disabled {
    color: #d1d5db;
}

.end-note {
    margin-top: 2rem;
    text-align: center;
    padding: 1.5rem;
    background: #f3f4f6;
    border-radius: 12px;
}

/* History */
.stats {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}

.stat {
    text-align: center;
}

.stat-value {
    font-size: 1.5rem;
    font-weight: 700;
    color: #4f46e5;
}

.stat-label {
    font-size: 0.75rem;
    color: #6b7280;
}

.month-picker {
    margin-bottom: 1.5rem;
}

.month-picker-title {
    font-size: 0.875rem;
    font-weight: 600;
    margin-bottom: 0.75rem;
    color: #374151;
}

.month-list {
    display: flex;
    gap: 0.5rem;
    flex-wrap: wrap;
}

.month-link {
    padding: 8px 16px;
    border-radius: 20px;
    font-size: 0.875rem;
    font-weight: 500;
    background: #f3f4f6;
    color: #4b5563;
    text-decoration: none;
}

.month-link.current {
    background: #4f46e5;
    color: #ffffff;
}

.section-title {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 0.75rem;
}

.section-title h2 {
    font-size: 1rem;
    font-weight: 600;
}

.timeline {
    display: flex;
    flex-direction: column;
}

.timeline-entry {
    display: flex;
    align-items: center;
    padding: 1rem 0;
    text-decoration: none;
    border-bottom: 1px solid #f3f4f6;
    position: relative;
}

.timeline-entry:last-child {
    border-bottom: none;
}

.timeline-entry::before {
    content: '';
    position: absolute;
    left: 24px;
    top: 0;
    bottom: 0;
    width: 2px;
    background: #e5e7eb;
}

.timeline-entry:last-child::before {
    bottom: 50%;
}

.day-badge {
    width: 50px;
    height: 50px;
    border-radius: 12px;
    background: linear-gradient(135deg, #6366f1 0%, #4f46e5 100%);
    color: #ffffff;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
    font-weight: 700;
    z-index: 1;
    flex-shrink: 0;
    margin-right: 1rem;
}

.day-badge .weekday {
    font-size: 0.625rem;
    opacity: 0.9;
}

.timeline-body {
    flex: 1;
    min-width: 0;
}

.timeline-date {
    font-size: 1rem;
    font-weight: 600;
    color: #1f2937;
    margin-bottom: 0.25rem;
}

.timeline-arrow {
    color: #4f46e5;
    font-size: 0.875rem;
    margin-left: 0.5rem;
}

/* Calendar */
.calendar-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.calendar-nav h2 {
    font-size: 1.125rem;
    font-weight: 600;
}

.calendar-grid {
    width: 100%;
    border-collapse: separate;
    border-spacing: 6px;
    table-layout: fixed;
}

.calendar-grid th {
    font-size: 0.75rem;
    color: #6b7280;
    font-weight: 500;
    padding-bottom: 0.25rem;
}

.calendar-grid td {
    height: 64px;
    vertical-align: top;
    border-radius: 10px;
    background: #ffffff;
    padding: 6px;
    font-size: 0.875rem;
}

.calendar-grid td.blank {
    background: transparent;
}

.calendar-grid td.archived {
    background: #eef2ff;
}

.calendar-grid td.archived a {
    display: block;
    height: 100%;
    text-decoration: none;
    color: #3730a3;
    font-weight: 600;
}

.calendar-grid .count {
    display: block;
    font-size: 0.7rem;
    font-weight: 500;
    color: #6366f1;
}

/* Empty state */
.empty-state {
    text-align: center;
    padding: 4rem 0;
}

.empty-emoji {
    font-size: 3.5rem;
    margin-bottom: 1rem;
}

.empty-state h1 {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.empty-state .muted {
    margin-bottom: 1.5rem;
}

.tip-box {
    background: #f3f4f6;
    padding: 1.25rem;
    border-radius: 12px;
    max-width: 400px;
    margin: 0 auto;
}

@media (max-width: 640px) {
    .container {
        padding: 1rem;
    }

    .calendar-grid td {
        height: 48px;
        padding: 4px;
    }
}
"#
}

/// Inline JavaScript for expand/collapse and sharing
fn inline_javascript() -> &'static str {
    r#"
(function () {
    document.addEventListener('click', function (event) {
        var expand = event.target.closest('[data-expand]');
        if (expand) {
            var box = expand.closest('[data-expandable]');
            var short = box.querySelector('.text-short');
            var full = box.querySelector('.text-full');
            var expanded = !full.hidden;
            full.hidden = expanded;
            short.hidden = !expanded;
            expand.textContent = expanded ? '展开全文 ↓' : '收起 ↑';
            return;
        }

        var share = event.target.closest('[data-share]');
        if (share) {
            var title = share.getAttribute('data-title');
            var url = share.getAttribute('data-url');
            if (navigator.share) {
                navigator.share({ title: title, url: url }).catch(function () {});
            } else if (navigator.clipboard) {
                navigator.clipboard.writeText(title + ' ' + url).then(function () {
                    alert('链接已复制，可粘贴到微信分享');
                });
            }
        }
    });
})();
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sample_item;

    fn routes() -> Routes {
        Routes::new("/", "full.json")
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_document_shell() {
        let config = ResolvedConfig::defaults().unwrap();
        let html = render_document(
            &config,
            &routes(),
            Some("历史归档"),
            NavItem::History,
            "<p>body</p>",
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>历史归档 - AI热点日报</title>"));
        assert!(html.contains(r#"<a href="/history/" class="nav-link active">历史</a>"#));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("Powered by OpenClaw | 每日7:30自动更新"));
    }

    #[test]
    fn test_badges() {
        assert!(badge_html(CardBadge::Hot, 2).contains("HOT"));
        assert!(badge_html(CardBadge::Hot, 3).is_empty());
        assert!(badge_html(CardBadge::Ranked, 0).contains("TOP1"));
        assert!(badge_html(CardBadge::Ranked, 9).contains("TOP10"));
        assert!(badge_html(CardBadge::Ranked, 10).contains("精华"));
        assert!(badge_html(CardBadge::Ranked, 19).contains("精华"));
        assert!(badge_html(CardBadge::Ranked, 20).is_empty());
    }

    #[test]
    fn test_compact_card_escapes_and_translates() {
        let mut item = sample_item(1, "github");
        item.title = "<script>alert(1)</script>".to_string();
        item.description = "A powerful tool".to_string();
        item.stars = Some(12345);

        let html = render_compact_card(&item, 0, CardBadge::Hot, 80);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("A 强大的 工具"));
        assert!(html.contains("⭐ 12,345"));
        assert!(html.contains("data-share"));
        assert!(!html.contains("data-expand"), "short text needs no toggle");
    }

    #[test]
    fn test_compact_card_long_text_gets_toggle() {
        let mut item = sample_item(1, "reddit");
        item.description = "x".repeat(150);
        let html = render_compact_card(&item, 12, CardBadge::Ranked, 100);
        assert!(html.contains("data-expand"));
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(html.contains("精华"));
        assert!(html.contains(r#"<span class="source-name">Reddit</span>"#));
    }

    #[test]
    fn test_compact_card_hides_zero_stars() {
        let mut item = sample_item(1, "github");
        item.stars = Some(0);
        let html = render_compact_card(&item, 0, CardBadge::Hot, 80);
        assert!(!html.contains("⭐"));
    }

    #[test]
    fn test_detail_card_metrics() {
        let mut item = sample_item(4, "hackernews");
        item.summary = Some("Short summary".to_string());
        item.score = Some(0);
        item.comments = Some(0);
        item.suggested_topic = Some("Topic idea".to_string());
        item.tags = vec!["agent".to_string(), "llm".to_string()];

        let html = render_detail_card(&item);
        assert!(html.contains("#4"));
        assert!(html.contains("📋 摘要：</span>Short summary"));
        assert!(html.contains("📝 选题建议：</span>Topic idea"));
        assert!(!html.contains("👍"), "zero score is hidden");
        assert!(html.contains("💬 0"), "zero comments are shown");
        assert!(html.contains("来源: hackernews"));
        assert!(html.contains("#agent"));
        assert!(html.contains("#llm"));
    }

    #[test]
    fn test_detail_card_without_optional_parts() {
        let item = sample_item(1, "rss");
        let html = render_detail_card(&item);
        assert!(!html.contains("选题建议"));
        assert!(!html.contains("💬"));
        assert!(!html.contains(r#"class="tags""#));
    }

    #[test]
    fn test_pagination() {
        let routes = routes();
        assert!(render_pagination(&routes, 1, 1).is_empty());

        let first = render_pagination(&routes, 1, 3);
        assert!(first.contains(r#"<span class="page-link disabled">← 上一页</span>"#));
        assert!(first.contains(r#"<a href="/all/page/2/" class="page-link">下一页 →</a>"#));
        assert!(first.contains(r#"<span class="page-number current">1</span>"#));

        let last = render_pagination(&routes, 3, 3);
        assert!(last.contains(r#"<a href="/all/page/2/" class="page-link">← 上一页</a>"#));
        assert!(last.contains(r#"<a href="/all/" class="page-number">1</a>"#));
    }
}
