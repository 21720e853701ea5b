use std::{ops::Range, path::Path};

pub mod diff;
pub mod sprite;
pub mod table;

/// An error in sprite or table source, optionally pointing at a byte range of it.
#[derive(Debug, PartialEq, Eq)]
pub struct SpriteError {
    pub message: String,
    pub span: Option<Range<usize>>,
}

/// Where a span starts in its source. `line` and `col` are one based; `line_range` is the byte
/// range of the whole line without its newline.
#[derive(Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
    pub line_range: Range<usize>,
}

impl std::fmt::Display for SpriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{} (bytes {}..{})", self.message, span.start, span.end),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for SpriteError {}

impl SpriteError {
    pub fn new(message: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn unspanned(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    fn char_span(&self, source: &str) -> Option<Range<usize>> {
        let span = self.span.clone()?;
        let start = source.get(..span.start)?.chars().count();
        let len = source.get(span.clone())?.chars().count();
        Some(start..start + len.max(1))
    }

    pub fn location(&self, source: &str) -> Option<Location> {
        let start = self.span.as_ref()?.start;
        let head = source.get(..start)?;
        let line_start = head.rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
        Some(Location {
            line: head.matches('\n').count() + 1,
            col: head[line_start..].chars().count() + 1,
            line_range: line_start..line_end,
        })
    }

    /// Plain text rendering with the offending line and a caret under the span start.
    pub fn long_format(&self, source_file: &Path, source: &str) -> String {
        let Some(loc) = self.location(source) else {
            return format!("error: {}
  in {}", self.message, source_file.display());
        };
        let gutter = loc.line.to_string();
        let pad = " ".repeat(gutter.len());
        format!(
            "error: {}
{pad}--> {}:{}:{}
{gutter} | {}
{pad} | {}^",
            self.message,
            source_file.display(),
            loc.line,
            loc.col,
            source[loc.line_range].trim_end_matches('\r'),
            " ".repeat(loc.col - 1),
        )
    }
}

/// Prints `err` against its source with ariadne when it has a span.
pub fn report(file: &Path, src: &str, err: &SpriteError) {
    use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};

    let filename = file.to_str().unwrap_or("<unknown>");
    let mut colors = ColorGenerator::new();

    let a = colors.next();
    if let Some(span) = err.char_span(src) {
        let printed = Report::build(ReportKind::Error, (filename, span.clone()))
            .with_message("Invalid sprite data")
            .with_label(
                Label::new((filename, span))
                    .with_message(&err.message)
                    .with_color(a),
            )
            .finish()
            .eprint((filename, Source::from(src)));
        if printed.is_ok() {
            return;
        }
    }
    eprintln!("{}", err.long_format(file, src));
}

pub fn pretty_parse_sprite(file: &Path, src: &str) -> Result<sprite::Bitmap, SpriteError> {
    sprite::parse(src).inspect_err(|err| report(file, src, err))
}

pub fn pretty_parse_table(file: &Path, src: &str) -> Result<table::Table, SpriteError> {
    table::Table::parse(src).inspect_err(|err| report(file, src, err))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
