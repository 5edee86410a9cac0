use std::sync::Arc;

use folio::application::ports::{DocumentParser, ParserError};
use folio::domain::{ContentType, Document, ResponseShape};
use folio::infrastructure::text_processing::{CompositeParser, PlainTextParser};

use crate::helpers::StubParser;

fn loader() -> CompositeParser {
    let local: Arc<dyn DocumentParser> = Arc::new(PlainTextParser);
    CompositeParser::new(vec![
        (ContentType::Text, local),
        (ContentType::Pdf, StubParser::returning("from remote")),
    ])
}

#[tokio::test]
async fn given_text_document_when_parsing_then_delegates_to_local_parser() {
    let doc = Document::new("readme.txt".to_string(), ContentType::Text, 5);

    let parsed = loader().parse(b"hello", &doc).await.unwrap();

    assert_eq!(parsed.markdown, "hello");
    assert_eq!(parsed.source, ResponseShape::Local);
}

#[tokio::test]
async fn given_pdf_document_when_parsing_then_delegates_to_registered_parser() {
    let doc = Document::new("paper.pdf".to_string(), ContentType::Pdf, 4);

    let parsed = loader().parse(b"%PDF", &doc).await.unwrap();

    assert_eq!(parsed.markdown, "from remote");
}

#[tokio::test]
async fn given_unregistered_content_type_when_parsing_then_returns_unsupported() {
    let doc = Document::new("sheet.xlsx".to_string(), ContentType::Xlsx, 4);

    let result = loader().parse(b"data", &doc).await;

    assert!(matches!(
        result,
        Err(ParserError::UnsupportedContentType(_))
    ));
}
