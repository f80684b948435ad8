//! Tests for the interactive loop, driven through in-memory readers

use std::io::Cursor;

use rstest::rstest;

use exprtree::cli::repl::{run_repl, INVALID_NOTICE};
use exprtree::config::{ReplSettings, Settings};

fn session(input: &str, settings: &Settings) -> String {
    let mut out = Vec::new();
    run_repl(Cursor::new(input), &mut out, settings).expect("repl run");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn given_expression_then_quit_when_running_then_prints_report() {
    let out = session("1+2\nN\n", &Settings::default());

    assert!(out.starts_with("Expression Tree Program\nType N to Quit\n"));
    assert!(out.contains("GRAPH\n +\n1`2\n"));
    assert!(out.contains("Infix: 1+2\n"));
    assert!(out.contains("Prefix: +12\n"));
    assert!(out.contains("Postfix: 12+\n"));
    assert!(out.contains("Value: 3.0\n"));
    assert!(out.contains("Height: 1\n"));
    assert_eq!(out.matches("Enter Infix Expression: ").count(), 2);
}

#[rstest]
#[case("+2\n")]
#[case("23\n")]
#[case("1+x\n")]
#[case("\n")]
fn given_invalid_line_when_running_then_notice_and_continue(#[case] bad: &str) {
    let input = format!("{bad}4*2\nn\n");
    let out = session(&input, &Settings::default());

    assert_eq!(out.matches(INVALID_NOTICE).count(), 1);
    assert!(out.contains("Value: 8.0\n"), "{out}");
}

#[rstest]
#[case("N")]
#[case("n")]
#[case("  N  ")]
fn given_quit_sentinel_when_running_then_stops_reading(#[case] sentinel: &str) {
    let input = format!("{sentinel}\n1+1\n");
    let out = session(&input, &Settings::default());
    assert!(!out.contains("GRAPH"));
    assert!(!out.contains(INVALID_NOTICE));
}

#[test]
fn given_input_without_sentinel_when_running_then_stops_at_eof() {
    let out = session("9-3", &Settings::default());
    assert!(out.contains("Value: 6.0\n"));
    assert_eq!(out.matches("Enter Infix Expression: ").count(), 2);
}

#[test]
fn given_custom_settings_when_running_then_uses_prompt_quit_and_glyphs() {
    let mut settings = Settings {
        repl: ReplSettings {
            prompt: ">".into(),
            quit: "exit".into(),
        },
        ..Settings::default()
    };
    settings.render.connector = "-".into();

    let out = session("1+2\nN\nEXIT\n", &settings);

    assert!(out.contains("Type exit to Quit\n"));
    assert!(out.contains("GRAPH\n +\n1-2\n"));
    // "N" is not the sentinel here, so it is read as an expression
    assert_eq!(out.matches(INVALID_NOTICE).count(), 1);
    assert_eq!(out.matches("> ").count(), 3);
}

#[test]
fn given_deep_chain_when_running_then_reports_instead_of_crashing() {
    let input = format!("1{}\nN\n", "+1".repeat(64));
    let out = session(&input, &Settings::default());

    assert!(out.contains("GRAPH\n+\n├── +\n"), "{out}");
    assert!(out.contains("Value: 65.0\n"));
    assert!(out.contains("Height: 64\n"));
    assert!(!out.contains(INVALID_NOTICE));
}

#[test]
fn given_invalid_glyph_when_running_then_fails_before_reading() {
    let mut settings = Settings::default();
    settings.render.absent = "::".into();
    let mut out = Vec::new();
    assert!(run_repl(Cursor::new("1+2\n"), &mut out, &settings).is_err());
    assert!(out.is_empty());
}
