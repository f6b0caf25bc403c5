// ABOUTME: Domain types for the CMA CLI
// ABOUTME: Provides the id/search selector and a summary view over artwork records

use cma_sdk::CmaError;
use serde_json::Value;

/// How an artwork lookup is addressed: by resource id or by search terms.
/// Built from the mutually exclusive `--id`/`--search` pair before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtworkSelector {
    Id(String),
    Search(String),
}

impl ArtworkSelector {
    pub fn from_options(id: Option<String>, search: Option<String>) -> Result<Self, CmaError> {
        match (id, search) {
            (Some(id), None) => Ok(ArtworkSelector::Id(id)),
            (None, Some(terms)) => Ok(ArtworkSelector::Search(terms)),
            (Some(_), Some(_)) => Err(CmaError::InvalidParameter(
                "--id and --search are mutually exclusive".to_string(),
            )),
            (None, None) => Err(CmaError::InvalidParameter(
                "either --id or --search is required".to_string(),
            )),
        }
    }
}

/// Human-readable view over an opaque artwork record. Missing fields come
/// back as empty strings; records are never required to be complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkSummary {
    pub title: String,
    pub kind: String,
    pub creators: String,
    pub culture: String,
    pub image_url: Option<String>,
    pub preview: Option<String>,
}

impl ArtworkSummary {
    pub fn from_value(artwork: &Value) -> Self {
        Self {
            title: text_field(artwork, "title"),
            kind: text_field(artwork, "type"),
            creators: join_descriptions(artwork.get("creators")),
            culture: join_strings(artwork.get("culture")),
            image_url: artwork
                .pointer("/images/web/url")
                .and_then(Value::as_str)
                .map(String::from),
            preview: artwork
                .get("preview")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn join_descriptions(creators: Option<&Value>) -> String {
    creators
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|creator| creator.get("description").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn join_strings(values: Option<&Value>) -> String {
    values
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
