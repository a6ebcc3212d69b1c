//! Diagnostic rendering with ariadne.

use std::io;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::Error;

/// Write a rendered diagnostic for `error` against `source`.
///
/// `path` names the source in the report header. Errors without a span are
/// rendered without a label.
pub fn write_report<W: io::Write>(
    error: &Error,
    path: &str,
    source: &str,
    color: bool,
    out: W,
) -> io::Result<()> {
    let range = error.span().map(|span| clamp(span.to_range(), source.len()));
    let offset = range.as_ref().map_or(0, |r| r.start);

    let mut builder = Report::build(ReportKind::Error, path, offset)
        .with_config(Config::default().with_color(color))
        .with_message(error.title());

    if let Some(range) = range {
        builder = builder.with_label(
            Label::new((path, range))
                .with_message(label_message(error))
                .with_color(Color::Red),
        );
    } else {
        builder = builder.with_note(label_message(error));
    }
    if let Error::Parse(e) = error {
        if let Some(ctx) = e.context {
            builder = builder.with_note(format!("while parsing {}", ctx.description()));
        }
    }

    builder
        .finish()
        .write((path, Source::from(source.to_owned())), out)
}

/// Render to stderr, coloring when stderr is a terminal.
pub fn eprint_report(error: &Error, path: &str, source: &str) {
    let color = io::IsTerminal::is_terminal(&io::stderr());
    if write_report(error, path, source, color, io::stderr()).is_err() {
        eprintln!("{path}: {}: {error}", error.title());
    }
}

fn label_message(error: &Error) -> String {
    match error {
        Error::Lex(e) => e.kind.to_string(),
        Error::Parse(e) => e.kind.to_string(),
        Error::Eval(e) => e.kind.to_string(),
    }
}

/// Spans at end of input may point one past the text; keep them printable.
fn clamp(range: std::ops::Range<usize>, len: usize) -> std::ops::Range<usize> {
    let start = range.start.min(len);
    start..range.end.clamp(start, len)
}
