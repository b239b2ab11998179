/// Tests for the component renderer — escaping, placeholder substitution,
/// companion inlining, and the display-sink handoff.
use std::fs;

use tempfile::TempDir;

use super::RecordingSink;
use crate::component::{escape_literal, ComponentError, Components, TemplateData};
use crate::sink::{DisplaySink, FrameHints, HtmlPage};

fn data(pairs: &[(&str, &str)]) -> TemplateData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Component dir containing a single template named `card`.
fn component_dir(template: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("static")).unwrap();
    fs::write(dir.path().join("card.html"), template).unwrap();
    dir
}

fn render(dir: &TempDir, data: &TemplateData) -> String {
    Components::new(dir.path()).render("card", data).unwrap()
}

// ── escape_literal ───────────────────────────────────────────────────────────

#[test]
fn escapes_single_quote_double_quote_and_backslash() {
    assert_eq!(escape_literal(r#"a"b'c\"#), r#"a\"b\'c\\"#);
}

#[test]
fn escaping_preserves_all_other_characters_in_order() {
    let input = "no specials: <b>&amp; 100% fine</b>";
    assert_eq!(escape_literal(input), input);
}

#[test]
fn escaping_empty_string_is_empty() {
    assert_eq!(escape_literal(""), "");
}

#[test]
fn inserted_backslashes_are_not_themselves_reescaped() {
    // One added backslash per original special character, nothing more.
    assert_eq!(escape_literal(r#"\\"#), r#"\\\\"#);
    assert_eq!(escape_literal(r#"""#), r#"\""#);
}

// ── placeholder substitution ─────────────────────────────────────────────────

#[test]
fn mapped_tokens_are_replaced_with_escaped_values() {
    let dir = component_dir("<h1>{{TITLE}}</h1>");
    let out = render(&dir, &data(&[("TITLE", r#"say "hi""#)]));
    assert_eq!(out, r#"<h1>say \"hi\"</h1>"#);
}

#[test]
fn token_occurring_twice_is_replaced_everywhere() {
    let dir = component_dir("{{NAME}} and {{NAME}}");
    assert_eq!(render(&dir, &data(&[("NAME", "x")])), "x and x");
}

#[test]
fn unmapped_token_stays_verbatim() {
    let dir = component_dir("<p>{{MISSING}}</p>");
    assert_eq!(render(&dir, &data(&[])), "<p>{{MISSING}}</p>");
}

#[test]
fn mapping_key_without_token_is_ignored() {
    let dir = component_dir("<p>static</p>");
    assert_eq!(render(&dir, &data(&[("UNUSED", "v")])), "<p>static</p>");
}

#[test]
fn substituted_value_containing_token_syntax_is_not_resubstituted() {
    let dir = component_dir("{{A}} {{B}}");
    let out = render(&dir, &data(&[("A", "{{B}}"), ("B", "x")]));
    assert_eq!(out, "{{B}} x");
}

#[test]
fn token_after_stray_open_delimiter_is_still_found() {
    let dir = component_dir("a {{ b {{KEY}}");
    assert_eq!(render(&dir, &data(&[("KEY", "v")])), "a {{ b v");
}

#[test]
fn unterminated_token_stays_verbatim() {
    let dir = component_dir("tail {{OPEN");
    assert_eq!(render(&dir, &data(&[("OPEN", "v")])), "tail {{OPEN");
}

// ── template loading ─────────────────────────────────────────────────────────

#[test]
fn missing_main_template_is_a_fatal_error() {
    let dir = component_dir("<p>irrelevant</p>");
    let err = Components::new(dir.path())
        .render("nonexistent", &data(&[]))
        .unwrap_err();
    match err {
        ComponentError::TemplateNotFound { name } => assert_eq!(name, "nonexistent"),
        other => panic!("expected TemplateNotFound, got {other:?}"),
    }
}

#[test]
fn missing_components_directory_reports_template_not_found() {
    let err = Components::new("/definitely/not/a/real/dir")
        .render("card", &data(&[]))
        .unwrap_err();
    assert!(matches!(err, ComponentError::TemplateNotFound { .. }));
}

#[test]
fn template_changes_are_visible_on_the_next_render() {
    // Nothing is cached: every call re-reads the file.
    let dir = component_dir("v1 {{X}}");
    let components = Components::new(dir.path());
    assert_eq!(components.render("card", &data(&[("X", "a")])).unwrap(), "v1 a");

    fs::write(dir.path().join("card.html"), "v2 {{X}}").unwrap();
    assert_eq!(components.render("card", &data(&[("X", "a")])).unwrap(), "v2 a");
}

// ── companion inlining ───────────────────────────────────────────────────────

#[test]
fn companion_stylesheet_is_inlined_when_present() {
    let dir = component_dir(
        r#"<head><link rel="stylesheet" href="static/card_css.css"></head>"#,
    );
    fs::write(dir.path().join("static/card_css.css"), "body{color:red}").unwrap();
    let out = render(&dir, &data(&[]));
    assert_eq!(out, "<head><style>body{color:red}</style></head>");
}

#[test]
fn companion_script_is_inlined_when_present() {
    let dir = component_dir(r#"<body><script src="static/card_js.js"></script></body>"#);
    fs::write(dir.path().join("static/card_js.js"), "let x = 1;").unwrap();
    let out = render(&dir, &data(&[]));
    assert_eq!(out, "<body><script>let x = 1;</script></body>");
}

#[test]
fn absent_companions_leave_reference_tags_untouched() {
    let template = concat!(
        r#"<link rel="stylesheet" href="static/card_css.css">"#,
        r#"<script src="static/card_js.js"></script>"#,
    );
    let dir = component_dir(template);
    assert_eq!(render(&dir, &data(&[])), template);
}

#[test]
fn placeholders_inside_inlined_companions_are_substituted() {
    // Inlining happens before substitution, same as the resource pipeline
    // the templates were written for.
    let dir = component_dir(r#"<script src="static/card_js.js"></script>"#);
    fs::write(dir.path().join("static/card_js.js"), "let name = '{{NAME}}';").unwrap();
    let out = render(&dir, &data(&[("NAME", "bob")]));
    assert_eq!(out, "<script>let name = 'bob';</script>");
}

// ── display ──────────────────────────────────────────────────────────────────

#[test]
fn display_renders_and_hands_markup_to_the_sink() {
    let dir = component_dir("<p>{{MSG}}</p>");
    let mut sink = RecordingSink::default();
    Components::new(dir.path())
        .display(&mut sink, "card", &data(&[("MSG", "hello")]), FrameHints::with_height(300))
        .unwrap();

    assert_eq!(sink.framed.len(), 1);
    let (markup, hints) = &sink.framed[0];
    assert_eq!(markup, "<p>hello</p>");
    assert_eq!(hints.height, Some(300));
}

#[test]
fn display_of_missing_template_writes_nothing_to_the_sink() {
    let dir = component_dir("<p>x</p>");
    let mut sink = RecordingSink::default();
    let result =
        Components::new(dir.path()).display(&mut sink, "absent", &data(&[]), FrameHints::default());
    assert!(result.is_err());
    assert!(sink.framed.is_empty());
}

// ── HtmlPage sink ────────────────────────────────────────────────────────────

#[test]
fn html_page_embeds_presented_markup_as_iframe_with_hints() {
    let mut page = HtmlPage::new();
    page.present(
        r#"<p class="x">hi</p>"#.to_string(),
        FrameHints { height: Some(700), width: None, scrolling: false },
    );
    let doc = page.into_document("T");
    assert!(doc.contains("height:700px;"));
    assert!(doc.contains(r#"scrolling="no""#));
    // srcdoc embedding escapes quotes but not angle brackets
    assert!(!doc.contains("&lt;p"));
    assert!(doc.contains("&quot;x&quot;"));
}

#[test]
fn html_page_scrolling_flag_enables_scrollbars() {
    let mut page = HtmlPage::new();
    page.present("<p>hi</p>".to_string(), FrameHints {
        height: None,
        width: Some(400),
        scrolling: true,
    });
    let doc = page.into_document("T");
    assert!(doc.contains(r#"scrolling="auto""#));
    assert!(doc.contains("width:400px;"));
}

#[test]
fn html_page_keeps_sections_in_presentation_order() {
    let mut page = HtmlPage::new();
    page.widget("<p>first</p>".to_string());
    page.widget("<p>second</p>".to_string());
    let doc = page.into_document("T");
    let first = doc.find("<p>first</p>").unwrap();
    let second = doc.find("<p>second</p>").unwrap();
    assert!(first < second);
}

#[test]
fn page_document_contains_escaped_title_and_chrome() {
    let page = HtmlPage::new();
    let doc = page.into_document("A & B");
    assert!(doc.contains("<title>A &amp; B</title>"));
    assert!(doc.contains("AirBets"));
}
