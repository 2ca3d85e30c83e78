use super::*;
use crate::ErrorCode;
use exp_ir::Span;
use pretty_assertions::assert_eq;

fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    let mut emitter = emitter;
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

fn plain() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

#[test]
fn header_and_notes_without_source() {
    let diag = Diagnostic::error(ErrorCode::E6004)
        .with_message("undefined function `foo`")
        .with_note("called from `main`")
        .with_help("declare `foo` before calling it");

    let expected = "\
error[E6004]: undefined function `foo`
  = note: called from `main`
  = help: declare `foo` before calling it
";
    assert_eq!(render(plain(), &diag), expected);
}

#[test]
fn label_without_source_shows_byte_range() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("invalid character `#`")
        .with_label(Span::new(4, 5), "not valid here");

    let expected = "\
error[E0002]: invalid character `#`
  --> 4..5: not valid here
";
    assert_eq!(render(plain(), &diag), expected);
}

#[test]
fn label_with_source_renders_snippet() {
    let source = "var a = 1\nvar b = a +\n";
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected expression, found end of file")
        .with_label(Span::new(21, 21), "expected expression");

    let expected = "\
error[E1002]: expected expression, found end of file
 --> prog.exp:2:12
  |
2 | var b = a +
  |            ^ expected expression
";
    let emitter = plain().with_source(source).with_file_path("prog.exp");
    assert_eq!(render(emitter, &diag), expected);
}

#[test]
fn colors_wrap_header() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("oops");
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let output = render(emitter, &diag);
    assert!(output.starts_with("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
