use serde::Deserialize;
use serde_json::Value;

use crate::domain::{ParsedText, ResponseShape};

/// The success shapes the parsing service is known to return, in the order
/// they are tried.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserResponse {
    /// `{"results": {"<file stem>": {"md_content": "..."}}}`
    KeyedResults(String),
    /// `{"md_content": "..."}`
    MarkdownField(String),
    /// `{"content_list": [...]}`, either as an array or a JSON-encoded string.
    ContentList(String),
    /// Anything else, kept as pretty-printed JSON.
    Raw(String),
}

#[derive(Debug, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub text_level: Option<u8>,
    #[serde(default)]
    pub table_body: Option<String>,
}

impl ParserResponse {
    pub fn classify(body: &Value, preferred_key: Option<&str>) -> Self {
        if let Some(markdown) = keyed_results(body, preferred_key) {
            return Self::KeyedResults(markdown);
        }
        if let Some(markdown) = body.get("md_content").and_then(Value::as_str) {
            return Self::MarkdownField(markdown.to_string());
        }
        if let Some(markdown) = body.get("content_list").and_then(content_list) {
            return Self::ContentList(markdown);
        }
        Self::Raw(serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()))
    }

    pub fn shape(&self) -> ResponseShape {
        match self {
            Self::KeyedResults(_) => ResponseShape::KeyedResults,
            Self::MarkdownField(_) => ResponseShape::MarkdownField,
            Self::ContentList(_) => ResponseShape::ContentList,
            Self::Raw(_) => ResponseShape::Raw,
        }
    }

    pub fn into_parsed_text(self) -> ParsedText {
        let source = self.shape();
        let markdown = match self {
            Self::KeyedResults(md)
            | Self::MarkdownField(md)
            | Self::ContentList(md)
            | Self::Raw(md) => md,
        };
        ParsedText { markdown, source }
    }
}

fn keyed_results(body: &Value, preferred_key: Option<&str>) -> Option<String> {
    let results = body.get("results")?.as_object()?;
    let md_content = |entry: &Value| -> Option<String> {
        entry.get("md_content")?.as_str().map(str::to_string)
    };

    preferred_key
        .and_then(|key| results.get(key))
        .and_then(md_content)
        .or_else(|| results.values().find_map(md_content))
}

/// Items that do not match `ContentItem` are skipped rather than discarding the list.
fn content_list(value: &Value) -> Option<String> {
    let entries: Vec<Value> = match value {
        Value::Array(entries) => entries.clone(),
        Value::String(encoded) => serde_json::from_str(encoded).ok()?,
        _ => return None,
    };

    let blocks: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<ContentItem>(entry).ok())
        .filter_map(|item| render_item(&item))
        .collect();
    Some(blocks.join("\n\n"))
}

fn render_item(item: &ContentItem) -> Option<String> {
    let text = if item.kind == "table" {
        item.table_body.as_deref().or(item.text.as_deref())
    } else {
        item.text.as_deref()
    }?;

    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    match item.text_level {
        Some(level) if level > 0 => Some(format!("{} {}", "#".repeat(level as usize), text)),
        _ => Some(text.to_string()),
    }
}
