//! Reads and writes pixel frame tables as source text.
//!
//! The reader accepts a bare comma separated list of words or a full array declaration such
//! as `static const uint16_t FRAME[] = { 2, 0x8021, 3 };` or `const FRAME: &[u16] = &[...];`.
//! Everything up to the first `=` is ignored, as are `//` comments.

use std::ops::Range;

use bongo_common::frame::{self, FrameError};

use crate::SpriteError;

/// Words per output line when writing a table.
pub const WORDS_PER_LINE: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub words: Vec<u16>,
    /// Source byte range of each word.
    pub spans: Vec<Range<usize>>,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '[' | ']' | '{' | '}' | ';' | '&')
}

fn parse_word(token: &str, span: Range<usize>) -> Result<u16, SpriteError> {
    let parsed = if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        u16::from_str_radix(hex, 16)
    } else {
        token.parse::<u16>()
    };
    parsed.map_err(|_| SpriteError::new(format!("Invalid frame word {token:?}"), span))
}

/// Splits `src` into `(line offset, line without its // comment)`.
fn code_lines(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        let code = line.find("//").map_or(line, |i| &line[..i]);
        Some((start, code))
    })
}

impl Table {
    pub fn parse(src: &str) -> Result<Self, SpriteError> {
        let body_start = code_lines(src)
            .find_map(|(start, code)| code.find('=').map(|i| start + i + 1))
            .unwrap_or(0);
        let mut words = Vec::new();
        let mut spans = Vec::new();

        for (line_start, code) in code_lines(src) {
            if line_start + code.len() <= body_start {
                continue;
            }
            let skip = body_start.saturating_sub(line_start);

            let mut token_start = None;
            for (i, c) in code.char_indices().skip_while(|(i, _)| *i < skip) {
                match (token_start, is_separator(c)) {
                    (None, false) => token_start = Some(i),
                    (Some(s), true) => {
                        let span = line_start + s..line_start + i;
                        words.push(parse_word(&code[s..i], span.clone())?);
                        spans.push(span);
                        token_start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = token_start {
                let span = line_start + s..line_start + code.len();
                words.push(parse_word(&code[s..], span.clone())?);
                spans.push(span);
            }
        }

        if words.is_empty() {
            return Err(SpriteError::unspanned("Table has no frame words"));
        }
        log::debug!("parsed table of {} words", words.len());
        Ok(Self { words, spans })
    }

    /// Validates the table as a frame over a `width` x `height` raster.
    pub fn check(&self, width: u16, height: u16) -> Result<(), SpriteError> {
        let raster_len = width as usize * height as usize;
        frame::validate(&self.words, raster_len).map_err(|err| {
            let (message, span) = match err {
                FrameError::Empty => (err.to_string(), None),
                FrameError::CountMismatch { .. } => (err.to_string(), self.spans.first().cloned()),
                FrameError::OutOfRange { position, .. } => (
                    format!("{err} of {width}x{height}"),
                    self.spans.get(position).cloned(),
                ),
            };
            SpriteError { message, span }
        })
    }
}

pub fn parse_words(src: &str) -> Result<Vec<u16>, SpriteError> {
    Table::parse(src).map(|t| t.words)
}

/// Formats `words` as a Rust constant named `name`.
pub fn to_rust(name: &str, words: &[u16]) -> String {
    let mut out = format!("pub const {name}: &[u16] = &[\n");
    if let Some((count, entries)) = words.split_first() {
        out.push_str(&format!("    {count},\n"));
        for chunk in entries.chunks(WORDS_PER_LINE) {
            let line: Vec<String> = chunk.iter().map(|w| format!("{w:#06x}")).collect();
            out.push_str(&format!("    {},\n", line.join(", ")));
        }
    }
    out.push_str("];\n");
    out
}

#[cfg(test)]
#[path = "table_test.rs"]
mod test;
