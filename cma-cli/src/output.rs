// ABOUTME: This module handles output formatting for the CMA CLI
// ABOUTME: It provides JSON, summary, and table formatters with color support

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::types::ArtworkSummary;

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize the payload exactly as received, pretty-printed on request.
    pub fn format(&self, value: &Value) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

/// Labeled text summary of a single artwork, used with `--preview`.
pub struct SummaryFormatter {
    use_color: bool,
}

impl SummaryFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn format_artwork(&self, artwork: &Value) -> String {
        let summary = ArtworkSummary::from_value(artwork);

        let mut out = String::new();
        out.push_str(&format!("{} {}\n", self.label("Title:"), summary.title));
        out.push_str(&format!("{} {}\n", self.label("Type:"), summary.kind));
        out.push_str(&format!("{} {}\n", self.label("Creator:"), summary.creators));
        out.push_str(&format!("{} {}", self.label("Culture:"), summary.culture));

        // Link and the ASCII block only appear when a preview was rendered.
        if let (Some(link), Some(preview)) = (&summary.image_url, &summary.preview) {
            out.push('\n');
            out.push_str(&format!("{} {}\n", self.label("Link:"), link));
            out.push_str(&format!("{}\n", self.label("Preview:")));
            out.push_str(preview);
        }

        out
    }

    fn label(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[derive(Tabled)]
struct ArtworkRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Creator")]
    creators: String,
}

/// Compact table of search results, used with `--preview` on searches.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn truncate_title(title: &str, max_len: usize) -> String {
        if title.chars().count() <= max_len {
            title.to_string()
        } else {
            let head: String = title.chars().take(max_len - 3).collect();
            format!("{head}...")
        }
    }

    fn format_creators(&self, creators: String) -> String {
        if creators.is_empty() {
            if self.use_color {
                "Unknown".dimmed().to_string()
            } else {
                "Unknown".to_string()
            }
        } else {
            creators
        }
    }

    pub fn format_artworks(&self, artworks: &[Value]) -> String {
        let rows: Vec<ArtworkRow> = artworks
            .iter()
            .map(|record| {
                let summary = ArtworkSummary::from_value(record);
                ArtworkRow {
                    id: record
                        .get("id")
                        .and_then(Value::as_i64)
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                    title: Self::truncate_title(&summary.title, 40),
                    kind: summary.kind,
                    creators: self.format_creators(summary.creators),
                }
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        table.to_string()
    }
}
