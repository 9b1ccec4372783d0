//! Integration tests for Markdown to Tana Paste conversion

use tanapaste::converter::{markdown_to_tana_paste, MarkdownConverter};
use tanapaste::options::{ConvertOptions, HeadingLayout};

fn convert(md: &str) -> String {
    markdown_to_tana_paste(md)
}

fn convert_with(md: &str, layout: HeadingLayout) -> String {
    MarkdownConverter::new(ConvertOptions::new(layout))
        .convert(md)
        .tana_paste
}

#[test]
fn test_output_always_starts_with_header() {
    let inputs = [
        "",
        "   ",
        "Hello",
        "# Heading",
        "- list item",
        "**bold** *italic* [link](https://example.com)",
        "###### deep\n\n1. one\n2. two",
    ];
    for input in inputs {
        assert!(
            convert(input).starts_with("%%tana%%\n"),
            "missing paste header for input {input:?}"
        );
    }
}

#[test]
fn test_full_document_conversion() {
    let md = r#"# Meeting Notes

Prep for the **quarterly** review.

## Agenda

- Budget *draft*
- Hiring
  1. Backend role
  2. Design role
- Misc

## Links

[Tana Website](https://tana.inc)

Wrap-up text."#;

    let expected = "\
%%tana%%
- !! Meeting Notes
  - Prep for the **quarterly** review.
  - !! Agenda
    - Budget __draft__
    - Hiring
      - Backend role
      - Design role
    - Misc
  - !! Links
    - [Tana Website](https://tana.inc)
    - Wrap-up text.";

    assert_eq!(convert(md), expected);
}

#[test]
fn test_full_document_flat_layout() {
    let md = "# Meeting Notes\n\nIntro text.\n\n## Agenda\n\n- Budget\n  - Detail\n- Hiring";
    let expected = "\
%%tana%%
- !! Meeting Notes
- Intro text.
- !! Agenda
- Budget
  - Detail
- Hiring";
    assert_eq!(convert_with(md, HeadingLayout::Flat), expected);
}

#[test]
fn test_essay_style_emphasis() {
    let md = "## Field Notes\n\n*(Take these as anecdotes, not advice.)*\n\n**Creativity:** we wander *far* enough that it counts.\n\n**Loose ends**: tying them up later.";
    let expected = "\
%%tana%%
- !! Field Notes
  - __(Take these as anecdotes, not advice.)__
  - **Creativity:** we wander __far__ enough that it counts.
  - **Loose ends**: tying them up later.";
    assert_eq!(convert(md), expected);
}

#[test]
fn test_paragraphs_separated_by_blank_lines_stay_separate() {
    let md = "First thought.\n\nSecond thought.\n\n\nThird thought.";
    let expected = "%%tana%%\n- First thought.\n- Second thought.\n- Third thought.";
    assert_eq!(convert(md), expected);
}

#[test]
fn test_deep_list_pops_multiple_levels_at_once() {
    let md = "- a\n  - b\n    - c\n      - d\n- e";
    let expected = "%%tana%%\n- a\n  - b\n    - c\n      - d\n- e";
    assert_eq!(convert(md), expected);
}

#[test]
fn test_heading_level_jump_down_and_back() {
    let md = "# One\n### Three\n## Two\ntext";
    // the h3 nests under the h1; the h2 replaces it at the same slot
    let expected = "%%tana%%\n- !! One\n  - !! Three\n  - !! Two\n    - text";
    assert_eq!(convert(md), expected);
}

#[test]
fn test_irregular_indentation_is_reported_not_rendered() {
    let result = MarkdownConverter::default().convert("- a\n  - b\n   - c\n  - d");
    let expected = "%%tana%%\n- a\n  - b\n  - c\n  - d";
    assert_eq!(result.tana_paste, expected);
    assert_eq!(result.report.warnings.len(), 1);
    assert!(result.report.warnings[0].message.contains("3 columns"));
}

#[test]
fn test_file_to_file_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("note.md");
    std::fs::write(&input_path, "# Title\n\n- item one\n- item two\n").unwrap();

    let markdown = std::fs::read_to_string(&input_path).unwrap();
    let result = MarkdownConverter::default()
        .convert_nonblank(&markdown)
        .unwrap();

    let output_path = dir.path().join("note.tana");
    std::fs::write(&output_path, &result.tana_paste).unwrap();
    let report_path = dir.path().join("note.report.json");
    std::fs::write(&report_path, result.report.to_json().unwrap()).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, "%%tana%%\n- !! Title\n  - item one\n  - item two");

    let report_json = std::fs::read_to_string(&report_path).unwrap();
    assert!(report_json.contains("\"list_items\": 2"));
    assert!(report_json.contains("\"headings\": 1"));
}

#[test]
fn test_blank_file_is_rejected_before_conversion() {
    let converter = MarkdownConverter::default();
    assert!(converter.convert_nonblank("\n  \n").is_err());
}
