use serde::Serialize;

use super::segment_paragraphs;

/// Which downstream response shape the Markdown was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    KeyedResults,
    MarkdownField,
    ContentList,
    Raw,
    Local,
}

/// Text extracted from a document, before segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedText {
    pub markdown: String,
    pub source: ResponseShape,
}

/// Result stored on a completed parse job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub markdown: String,
    pub paragraphs: Vec<String>,
    pub source: ResponseShape,
}

impl From<ParsedText> for ParseOutcome {
    fn from(parsed: ParsedText) -> Self {
        let paragraphs = segment_paragraphs(&parsed.markdown);
        Self {
            markdown: parsed.markdown,
            paragraphs,
            source: parsed.source,
        }
    }
}
