//! Daily report data model
//!
//! Reports are produced upstream and read here as immutable input.
//! Item order is always the file order.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated collection of ranked items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub date: String,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single ranked piece of content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub rank: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    pub source: String,
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_topic: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Report {
    /// Parse a report from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse report JSON")
    }

    /// Declared item count, falling back to the number of items in the file
    pub fn total(&self) -> usize {
        self.total.unwrap_or(self.items.len())
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// First `n` items in file order
    pub fn top(&self, n: usize) -> &[Item] {
        &self.items[..n.min(self.items.len())]
    }

    /// Item counts per source tag, in order of first appearance
    pub fn source_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for item in &self.items {
            match counts.iter_mut().find(|(source, _)| *source == item.source) {
                Some((_, count)) => *count += 1,
                None => counts.push((item.source.clone(), 1)),
            }
        }
        counts
    }
}

impl Item {
    /// Summary when present and non-empty, otherwise the description
    pub fn display_text(&self) -> &str {
        match self.summary.as_deref() {
            Some(summary) if !summary.is_empty() => summary,
            _ => &self.description,
        }
    }

    pub fn suggested_topic(&self) -> Option<&str> {
        self.suggested_topic.as_deref().filter(|t| !t.is_empty())
    }
}

/// Emoji shown next to an item for its source tag
pub fn source_emoji(source: &str) -> &'static str {
    match source {
        "github" => "🐙",
        "hackernews" => "🟠",
        "reddit" => "🔴",
        "anthropic" => "✳️",
        _ => "📰",
    }
}

/// Display name for a source tag (unknown tags are shown as-is)
pub fn source_name(source: &str) -> &str {
    match source {
        "github" => "GitHub",
        "hackernews" => "HackerNews",
        "reddit" => "Reddit",
        "anthropic" => "Anthropic",
        "rss" => "RSS订阅",
        other => other,
    }
}

#[cfg(test)]
pub(crate) fn sample_item(rank: u32, source: &str) -> Item {
    Item {
        rank,
        title: format!("Item {}", rank),
        description: format!("Description of item {}", rank),
        summary: None,
        url: format!("https://example.com/{}", rank),
        stars: None,
        score: None,
        comments: None,
        source: source.to_string(),
        relevance_score: 90.0,
        suggested_topic: None,
        tags: Vec::new(),
    }
}
