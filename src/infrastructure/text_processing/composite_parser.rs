use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentParser, ParserError};
use crate::domain::{ContentType, Document, ParsedText};

pub struct CompositeParser {
    parsers: HashMap<ContentType, Arc<dyn DocumentParser>>,
}

impl CompositeParser {
    pub fn new(parsers: Vec<(ContentType, Arc<dyn DocumentParser>)>) -> Self {
        Self {
            parsers: parsers.into_iter().collect(),
        }
    }
}

#[async_trait]
impl DocumentParser for CompositeParser {
    async fn parse(&self, data: &[u8], document: &Document) -> Result<ParsedText, ParserError> {
        let parser = self.parsers.get(&document.content_type).ok_or_else(|| {
            ParserError::UnsupportedContentType(document.content_type.as_mime().to_string())
        })?;

        parser.parse(data, document).await
    }
}
