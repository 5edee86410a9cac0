use folio::domain::{NO_CONTENT_PLACEHOLDER, segment_paragraphs};

#[test]
fn given_mixed_markdown_when_segmenting_then_headings_and_items_stand_alone() {
    let input = "# Title\n\nHello world. More text.\n- item one\n- item two\n1. first\n2. second";

    assert_eq!(
        segment_paragraphs(input),
        vec![
            "=== # Title ===",
            "Hello world. More text.",
            "- item one",
            "- item two",
            "1. first",
            "2. second",
        ]
    );
}

#[test]
fn given_wrapped_prose_when_segmenting_then_lines_join_with_single_space() {
    let input = "first line\n  second line  \n\nnext paragraph";

    assert_eq!(
        segment_paragraphs(input),
        vec!["first line second line", "next paragraph"]
    );
}

#[test]
fn given_heading_inside_prose_when_segmenting_then_prose_is_flushed_first() {
    let input = "before\n## Section\nafter";

    assert_eq!(
        segment_paragraphs(input),
        vec!["before", "=== ## Section ===", "after"]
    );
}

#[test]
fn given_star_bullet_after_prose_when_segmenting_then_item_is_separate_unit() {
    assert_eq!(
        segment_paragraphs("intro\n* starred"),
        vec!["intro", "* starred"]
    );
}

#[test]
fn given_number_without_dot_when_segmenting_then_treated_as_prose() {
    assert_eq!(
        segment_paragraphs("2024 was a year\nof change"),
        vec!["2024 was a year of change"]
    );
}

#[test]
fn given_crlf_line_endings_when_segmenting_then_carriage_returns_are_dropped() {
    assert_eq!(
        segment_paragraphs("one\r\ntwo\r\n\r\nthree"),
        vec!["one two", "three"]
    );
}

#[test]
fn given_empty_input_when_segmenting_then_returns_placeholder() {
    assert_eq!(segment_paragraphs(""), vec![NO_CONTENT_PLACEHOLDER]);
}

#[test]
fn given_whitespace_only_input_when_segmenting_then_returns_placeholder() {
    assert_eq!(
        segment_paragraphs("   \n\t\n  \n"),
        vec![NO_CONTENT_PLACEHOLDER]
    );
}
