//! Integration tests for the command-line front-end.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tagbuilder_cli::{Cli, TagSpec, build, run};
use tagbuilder_common::warning::{has_warned, set_warnings_enabled};
use tagbuilder_html::{RenderMode, TagBuilder};

/// Helper to parse arguments the way the binary would and render the result
fn render(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(std::iter::once("tagbuilder").chain(args.iter().copied()))
        .expect("arguments parse");
    run(&cli).expect("tag renders")
}

/// Helper to write a spec file into the temp directory
fn write_spec(name: &str, json: &str) -> PathBuf {
    let file = format!("tagbuilder-{}-{name}.json", std::process::id());
    let path = std::env::temp_dir().join(file);
    fs::write(&path, json).expect("temp file is writable");
    path
}

#[test]
fn test_text_and_class() {
    assert_eq!(
        render(&["div", "--class", "box", "--text", "Hi & bye"]),
        "<div class=\"box\">Hi &amp; bye</div>"
    );
}

#[test]
fn test_self_closing_mode() {
    assert_eq!(
        render(&["img", "--attr", "src=a.png", "--mode", "self-closing"]),
        "<img src=\"a.png\" />"
    );
}

#[test]
fn test_classes_render_newest_first() {
    assert_eq!(
        render(&["p", "-c", "a", "-c", "b", "-m", "start-tag"]),
        "<p class=\"b a\">"
    );
}

#[test]
fn test_attr_merge_and_replace() {
    assert_eq!(
        render(&["a", "-a", "href=/1", "-a", "HREF=/2", "-m", "start-tag"]),
        "<a href=\"/1\">"
    );
    assert_eq!(
        render(&["a", "-a", "href=/1", "-a", "HREF=/2", "--replace", "-m", "start-tag"]),
        "<a HREF=\"/2\">"
    );
}

#[test]
fn test_bare_attr() {
    assert_eq!(
        render(&["input", "-a", "type=checkbox", "-a", "checked", "-m", "self-closing"]),
        "<input type=\"checkbox\" checked />"
    );
}

#[test]
fn test_raw_disables_encoding() {
    assert_eq!(render(&["b", "--raw", "--text", "<i>x</i>"]), "<b><i>x</i></b>");
}

#[test]
fn test_unknown_mode_renders_full_element() {
    set_warnings_enabled(false);
    assert_eq!(render(&["span", "-m", "sideways", "-t", "x"]), "<span>x</span>");
}

#[test]
fn test_missing_tag_is_an_error() {
    let cli = Cli::try_parse_from(["tagbuilder", "--text", "orphan"]).unwrap();
    assert!(run(&cli).is_err());
}

#[test]
fn test_empty_tag_is_an_error() {
    let cli = Cli::try_parse_from(["tagbuilder", ""]).unwrap();
    assert!(run(&cli).is_err());
}

#[test]
fn test_empty_attr_key_is_an_error() {
    let cli = Cli::try_parse_from(["tagbuilder", "div", "--attr", "=value"]).unwrap();
    let err = run(&cli).unwrap_err();
    assert!(err.to_string().contains("=value"));
}

#[test]
fn test_text_conflicts_with_html() {
    assert!(Cli::try_parse_from(["tagbuilder", "div", "--text", "a", "--html", "b"]).is_err());
}

#[test]
fn test_spec_file_then_flags() {
    let path = write_spec(
        "button",
        r#"{
            "tag": "button",
            "attributes": { "type": "submit", "data-step": 2, "formnovalidate": null },
            "classes": ["btn"],
            "text": "Go",
            "mode": "start-tag"
        }"#,
    );
    let spec_arg = path.to_string_lossy().into_owned();

    let args = ["tagbuilder", "--spec", spec_arg.as_str(), "-c", "primary", "-a", "type=reset"];
    let cli = Cli::try_parse_from(args).unwrap();
    let (builder, mode) = build(&cli).unwrap();

    assert_eq!(mode, RenderMode::StartTag);
    assert_eq!(builder.inner_html(), "Go");
    assert_eq!(
        builder.render(mode),
        "<button type=\"submit\" data-step=\"2\" formnovalidate class=\"primary btn\">"
    );

    let _ = fs::remove_file(path);
}

#[test]
fn test_tag_flag_overrides_spec_tag() {
    let path = write_spec("override", r#"{ "tag": "div", "html": "<hr>" }"#);
    let spec_arg = path.to_string_lossy().into_owned();

    let cli = Cli::try_parse_from(["tagbuilder", "section", "--spec", spec_arg.as_str()]).unwrap();
    assert_eq!(run(&cli).unwrap(), "<section><hr></section>");

    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_spec_file_is_an_error() {
    let cli =
        Cli::try_parse_from(["tagbuilder", "div", "--spec", "/nonexistent/tag.json"]).unwrap();
    assert!(run(&cli).is_err());
}

#[test]
fn test_spec_apply_replace_and_encode() {
    let spec = TagSpec::from_json(
        r#"{
            "attributes": { "title": "a", "TITLE": "b & c" },
            "replace": true,
            "encode": false,
            "text": "<x>"
        }"#,
    )
    .unwrap();

    let mut builder = TagBuilder::new("abbr").unwrap();
    spec.apply(&mut builder).unwrap();

    assert!(!builder.encode_value());
    assert_eq!(builder.to_string(), "<abbr TITLE=\"b & c\"><x></abbr>");
}

#[test]
fn test_suppressed_id_is_reported_by_cli() {
    set_warnings_enabled(false);
    assert_eq!(
        render(&["nav", "-a", "Id=main", "-a", "role=navigation", "-m", "start-tag"]),
        "<nav role=\"navigation\">"
    );
    assert!(has_warned("CLI", "attribute 'Id' on <nav> is not rendered"));
}

#[test]
fn test_end_tag_does_not_report_id() {
    set_warnings_enabled(false);
    assert_eq!(render(&["aside", "-a", "id=side", "-m", "end-tag"]), "</aside>");
    assert!(!has_warned("CLI", "attribute 'id' on <aside> is not rendered"));
}
