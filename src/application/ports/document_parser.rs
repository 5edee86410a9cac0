use async_trait::async_trait;

use crate::domain::{Document, ParsedText};

#[async_trait]
pub trait DocumentParser: Send + Sync {
    async fn parse(&self, data: &[u8], document: &Document) -> Result<ParsedText, ParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("parser request failed: {0}")]
    Transport(String),
    #[error("parser returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed parser response: {0}")]
    MalformedResponse(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
