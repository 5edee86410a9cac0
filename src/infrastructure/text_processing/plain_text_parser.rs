use async_trait::async_trait;

use crate::application::ports::{DocumentParser, ParserError};
use crate::domain::{Document, ParsedText, ResponseShape};

/// Reads TXT and Markdown uploads directly, without the parsing service.
pub struct PlainTextParser;

#[async_trait]
impl DocumentParser for PlainTextParser {
    async fn parse(&self, data: &[u8], document: &Document) -> Result<ParsedText, ParserError> {
        if !document.content_type.is_plain_text() {
            return Err(ParserError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let markdown = String::from_utf8(data.to_vec())
            .map_err(|e| ParserError::ExtractionFailed(e.to_string()))?;

        Ok(ParsedText {
            markdown,
            source: ResponseShape::Local,
        })
    }
}
