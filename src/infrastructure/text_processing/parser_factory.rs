use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DocumentParser;
use crate::domain::ContentType;
use crate::presentation::config::ParserSettings;

use super::composite_parser::CompositeParser;
use super::mineru_parser::{MineruParser, ParseOptions};
use super::plain_text_parser::PlainTextParser;

pub struct ParserFactory;

impl ParserFactory {
    /// Plain text and Markdown are read locally; office formats and PDF go to
    /// the parsing service.
    pub fn create(settings: &ParserSettings, timeout: Duration) -> Arc<dyn DocumentParser> {
        let options = ParseOptions::from(settings);
        tracing::info!(base_url = %settings.base_url, "Loading document parser");

        let remote: Arc<dyn DocumentParser> =
            Arc::new(MineruParser::new(&settings.base_url, options, timeout));
        let local: Arc<dyn DocumentParser> = Arc::new(PlainTextParser);

        Arc::new(CompositeParser::new(vec![
            (ContentType::Pdf, Arc::clone(&remote)),
            (ContentType::Docx, Arc::clone(&remote)),
            (ContentType::Pptx, Arc::clone(&remote)),
            (ContentType::Xlsx, remote),
            (ContentType::Text, Arc::clone(&local)),
            (ContentType::Markdown, local),
        ]))
    }
}
