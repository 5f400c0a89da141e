use super::*;
use crate::Error;

fn doc() -> DocumentId {
    DocumentId::new("source.renpy.atl")
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptyRule, &doc(), "atl.patterns![2]")
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_warnings());
    assert!(!diagnostics.has_errors());
    insta::assert_snapshot!(
        diagnostics.render().trim_end(),
        @"warning: rule matches nothing (source.renpy.atl at atl.patterns![2])"
    );
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclassifiedScope, &doc(), "atlKeywords")
        .message("markup.bold")
        .emit();

    let message = diagnostics.iter().next().unwrap();
    assert_eq!(message.message(), "scope name `markup.bold` has no token type");
    assert_eq!(message.path(), "atlKeywords");
    assert_eq!(message.kind(), DiagnosticKind::UnclassifiedScope);
}

#[test]
fn fatal_errors_count_as_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.fatal(
        &doc(),
        &Error::MissingRepository { document: doc() },
    );
    diagnostics
        .report(DiagnosticKind::IgnoredIncludeFields, &doc(), "atl.patterns![0]")
        .message("#atl-keywords")
        .emit();

    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
    insta::assert_snapshot!(diagnostics.render().trim_end(), @r"
    error: source.renpy.atl: missing `repository` (source.renpy.atl)
    warning: fields next to `include: #atl-keywords` are ignored (source.renpy.atl at atl.patterns![0])
    ");
}

#[test]
fn colored_output_wraps_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptyRule, &doc(), "x")
        .emit();

    let out = diagnostics.printer().colored(true).render();
    assert!(out.starts_with("\x1b[33mwarning\x1b[0m: rule matches nothing"));
    assert!(out.contains("\x1b[2m(source.renpy.atl at x)\x1b[0m"));
}

#[test]
fn message_display() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclassifiedScope, &doc(), "a")
        .message("x.y")
        .emit();
    let message = diagnostics.iter().next().unwrap();
    assert_eq!(
        message.to_string(),
        "warning: scope name `x.y` has no token type (source.renpy.atl at a)"
    );
}
