use serde_json::json;

use folio::domain::ResponseShape;
use folio::infrastructure::text_processing::ParserResponse;

#[test]
fn given_keyed_results_when_classifying_then_prefers_matching_key() {
    let body = json!({
        "results": {
            "other": { "md_content": "wrong file" },
            "report": { "md_content": "# Report" }
        },
        "md_content": "top-level loses"
    });

    let parsed = ParserResponse::classify(&body, Some("report"));

    assert_eq!(parsed, ParserResponse::KeyedResults("# Report".to_string()));
}

#[test]
fn given_keyed_results_without_matching_key_when_classifying_then_uses_any_entry() {
    let body = json!({ "results": { "upload": { "md_content": "text" } } });

    let parsed = ParserResponse::classify(&body, Some("report"));

    assert_eq!(parsed, ParserResponse::KeyedResults("text".to_string()));
}

#[test]
fn given_results_without_markdown_when_classifying_then_falls_through_to_top_level() {
    let body = json!({
        "results": { "report": { "content_list": [] } },
        "md_content": "from top"
    });

    let parsed = ParserResponse::classify(&body, Some("report"));

    assert_eq!(parsed, ParserResponse::MarkdownField("from top".to_string()));
}

#[test]
fn given_content_list_array_when_classifying_then_joins_text_blocks() {
    let body = json!({
        "content_list": [
            { "type": "text", "text": "Chapter", "text_level": 1 },
            { "type": "text", "text": "Body paragraph." },
            { "type": "table", "table_body": "<table></table>" },
            { "type": "image", "img_path": "a.png" },
            { "type": "text", "text": "   " }
        ]
    });

    let parsed = ParserResponse::classify(&body, None);

    assert_eq!(
        parsed,
        ParserResponse::ContentList("# Chapter\n\nBody paragraph.\n\n<table></table>".to_string())
    );
}

#[test]
fn given_content_list_with_malformed_item_when_classifying_then_skips_only_that_item() {
    let body = json!({
        "content_list": [
            { "type": "text", "text": "Odd heading", "text_level": 1.5 },
            { "type": "text", "text": "Kept paragraph." }
        ]
    });

    let parsed = ParserResponse::classify(&body, None);

    assert_eq!(parsed.shape(), ResponseShape::ContentList);
    assert_eq!(
        parsed,
        ParserResponse::ContentList("Kept paragraph.".to_string())
    );
}

#[test]
fn given_content_list_encoded_as_string_when_classifying_then_decodes_it() {
    let body = json!({
        "content_list": r#"[{"type":"text","text":"encoded"}]"#
    });

    let parsed = ParserResponse::classify(&body, None);

    assert_eq!(parsed, ParserResponse::ContentList("encoded".to_string()));
}

#[test]
fn given_unrecognized_body_when_classifying_then_falls_back_to_raw_json() {
    let body = json!({ "status": "ok", "pages": 3 });

    let parsed = ParserResponse::classify(&body, None);

    match parsed {
        ParserResponse::Raw(raw) => {
            let round_trip: serde_json::Value = serde_json::from_str(&raw).unwrap();
            assert_eq!(round_trip, body);
        }
        other => panic!("expected raw fallback, got {:?}", other),
    }
}

#[test]
fn given_classified_response_when_converting_then_source_records_shape() {
    let parsed = ParserResponse::MarkdownField("md".to_string()).into_parsed_text();

    assert_eq!(parsed.markdown, "md");
    assert_eq!(parsed.source, ResponseShape::MarkdownField);
}
