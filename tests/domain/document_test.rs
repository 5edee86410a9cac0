use folio::domain::{ContentType, Document};

#[test]
fn given_known_mime_types_when_detecting_then_maps_to_content_type() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
    assert_eq!(
        ContentType::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        Some(ContentType::Docx)
    );
    assert_eq!(
        ContentType::from_mime("text/plain; charset=utf-8"),
        Some(ContentType::Text)
    );
    assert_eq!(
        ContentType::from_mime("text/markdown"),
        Some(ContentType::Markdown)
    );
    assert_eq!(ContentType::from_mime("image/png"), None);
}

#[test]
fn given_generic_mime_when_detecting_then_falls_back_to_extension() {
    assert_eq!(
        ContentType::detect(Some("application/octet-stream"), "slides.PPTX"),
        Some(ContentType::Pptx)
    );
    assert_eq!(
        ContentType::detect(None, "budget.xlsx"),
        Some(ContentType::Xlsx)
    );
}

#[test]
fn given_unknown_mime_with_known_extension_when_detecting_then_uses_extension() {
    assert_eq!(
        ContentType::detect(Some("application/x-unknown"), "notes.md"),
        Some(ContentType::Markdown)
    );
}

#[test]
fn given_unsupported_file_when_detecting_then_none() {
    assert_eq!(ContentType::detect(Some("image/png"), "photo.png"), None);
    assert_eq!(ContentType::detect(None, "no_extension"), None);
}

#[test]
fn given_content_types_when_checking_plain_text_then_only_text_and_markdown() {
    assert!(ContentType::Text.is_plain_text());
    assert!(ContentType::Markdown.is_plain_text());
    assert!(!ContentType::Pdf.is_plain_text());
    assert!(!ContentType::Docx.is_plain_text());
}

#[test]
fn given_document_when_taking_stem_then_strips_last_extension_only() {
    let doc = Document::new("annual.report.pdf".to_string(), ContentType::Pdf, 10);
    assert_eq!(doc.stem(), "annual.report");

    let hidden = Document::new(".env".to_string(), ContentType::Text, 1);
    assert_eq!(hidden.stem(), ".env");
}
