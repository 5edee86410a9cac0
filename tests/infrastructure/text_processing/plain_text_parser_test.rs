use folio::application::ports::{DocumentParser, ParserError};
use folio::domain::{ContentType, Document, ResponseShape};
use folio::infrastructure::text_processing::PlainTextParser;

fn document(filename: &str, content_type: ContentType) -> Document {
    Document::new(filename.to_string(), content_type, 0)
}

#[tokio::test]
async fn given_markdown_file_when_parsing_then_returns_text_locally() {
    let parsed = PlainTextParser
        .parse(b"# Notes\nline", &document("notes.md", ContentType::Markdown))
        .await
        .unwrap();

    assert_eq!(parsed.markdown, "# Notes\nline");
    assert_eq!(parsed.source, ResponseShape::Local);
}

#[tokio::test]
async fn given_invalid_utf8_when_parsing_then_extraction_fails() {
    let result = PlainTextParser
        .parse(&[0xff, 0xfe, 0xfd], &document("bad.txt", ContentType::Text))
        .await;

    assert!(matches!(result, Err(ParserError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_pdf_document_when_parsing_then_returns_unsupported() {
    let result = PlainTextParser
        .parse(b"%PDF", &document("file.pdf", ContentType::Pdf))
        .await;

    assert!(matches!(
        result,
        Err(ParserError::UnsupportedContentType(_))
    ));
}
